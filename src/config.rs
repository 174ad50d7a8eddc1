// src/config.rs

//! Defines the configuration structures for the map view.
//!
//! Every struct carries `#[serde(default)]`, so a configuration document may
//! name any subset of keys and the rest fall back to the defaults below. The
//! defaults reproduce the look of the stock app: zoom starts at 2, a map cell
//! is 10 pixels wide at zoom 1, and the block grid is drawn in dark gray.

use crate::color::Rgba;
use crate::error::{MapViewError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration for a `MapView`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Zoom behavior and the cell-to-pixel calibration.
    pub zoom: ZoomConfig,
    /// Block grid geometry.
    pub grid: GridConfig,
    /// One color per semantic name.
    pub colors: ColorScheme,
    /// Layer population options.
    pub layers: LayerConfig,
}

impl Config {
    /// Parses and validates a configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values serde cannot: zoom settings must keep the factor
    /// positive and finite.
    pub fn validate(&self) -> Result<()> {
        self.zoom.validate()
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

// --- Zoom Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Zoom factor before the first map is fitted.
    pub initial: f32,
    /// Amount added or removed by one zoom-in / zoom-out action.
    pub step: f32,
    /// Zoom-out never goes below this value.
    pub min: f32,
    /// Pixel edge of one map cell at zoom 1. Also the divisor used when
    /// fitting a map to the viewport.
    pub cell_unit_px: f32,
}

impl ZoomConfig {
    /// `initial`, `step` and `cell_unit_px` must be positive and finite;
    /// `min` must be finite and at least 1.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("initial", self.initial),
            ("step", self.step),
            ("cell_unit_px", self.cell_unit_px),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(MapViewError::InvalidZoomConfig { field, value });
            }
        }
        if !self.min.is_finite() || self.min < 1.0 {
            return Err(MapViewError::InvalidZoomConfig {
                field: "min",
                value: self.min,
            });
        }
        Ok(())
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        ZoomConfig {
            initial: 2.0,
            step: 1.0,
            min: 1.0,
            cell_unit_px: 10.0,
        }
    }
}

// --- Grid Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cells per grid block edge.
    pub block_size_cells: u32,
    /// Thickness of a grid line in pixels, independent of zoom.
    pub line_width_px: f32,
    /// Largest map width or height, in cells, that will be converted.
    pub max_extent_cells: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            block_size_cells: 10,
            line_width_px: 1.0,
            max_extent_cells: 10_000,
        }
    }
}

// --- Color Scheme Configuration ---

/// Colors are written as `#RRGGBB` or `#AARRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub background: Rgba,
    pub floor: Rgba,
    pub wall: Rgba,
    pub sneaking: Rgba,
    pub screwing: Rgba,
    pub bump: Rgba,
    pub abyss: Rgba,
    pub bump_abyss: Rgba,
    pub move_object: Rgba,
    pub fight: Rgba,
    pub undetermined: Rgba,
    pub grid: Rgba,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            background: Rgba::from_argb(0xFFEE_EEEE),
            floor: Rgba::from_argb(0xFFFF_FFFF),
            wall: Rgba::from_argb(0xFF33_3333),
            sneaking: Rgba::from_argb(0x8000_96D6),
            screwing: Rgba::from_argb(0x80AA_66CC),
            bump: Rgba::from_argb(0x80FF_8800),
            abyss: Rgba::from_argb(0x80CC_0000),
            bump_abyss: Rgba::from_argb(0x8066_0000),
            move_object: Rgba::from_argb(0x8099_CC00),
            fight: Rgba::from_argb(0x80FF_BB33),
            undetermined: Rgba::from_argb(0x8099_9999),
            grid: Rgba::DARK_GRAY,
        }
    }
}

// --- Layer Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayerConfig {
    /// When false, the BUMP_ABYSS layer shows ABYSS cells and the
    /// UNDETERMINED layer shows FIGHT cells, matching the shipped app. When
    /// true, each of those layers shows its own category.
    pub distinct_overlay_sources: bool,
}
