// src/zoom.rs

//! The zoom factor shared by all layers.

use crate::config::ZoomConfig;
use crate::error::{MapViewError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Zoom {
    factor: f32,
    step: f32,
    min: f32,
    cell_unit_px: f32,
}

impl Zoom {
    /// Builds the zoom from `config`, rejecting settings that would let the
    /// factor reach zero, go negative or become non-finite.
    pub fn new(config: &ZoomConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            factor: config.initial,
            step: config.step,
            min: config.min,
            cell_unit_px: config.cell_unit_px,
        })
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Adds one step. There is no upper limit.
    pub fn zoom_in(&mut self) -> f32 {
        self.factor += self.step;
        self.factor
    }

    /// Removes one step unless that would go below the floor. Returns
    /// whether the factor changed.
    pub fn zoom_out(&mut self) -> bool {
        let next = self.factor - self.step;
        if next < self.min {
            return false;
        }
        self.factor = next;
        true
    }

    /// Sets the factor so a `map_width` x `map_height` cell map fits a
    /// `viewport_width` x `viewport_height` pixel viewport:
    /// `min(vw / mw, vh / mh) / cell_unit_px`.
    ///
    /// Leaves the factor untouched and returns an error for non-positive
    /// map extents or an unmeasured viewport.
    pub fn fit_to_viewport(
        &mut self,
        map_width: i64,
        map_height: i64,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Result<f32> {
        if map_width <= 0 || map_height <= 0 {
            return Err(MapViewError::InvalidMapDimensions {
                width: map_width,
                height: map_height,
            });
        }
        if viewport_width == 0 || viewport_height == 0 {
            return Err(MapViewError::InvalidViewport {
                width: viewport_width,
                height: viewport_height,
            });
        }
        let per_cell_x = viewport_width as f32 / map_width as f32;
        let per_cell_y = viewport_height as f32 / map_height as f32;
        let factor = per_cell_x.min(per_cell_y) / self.cell_unit_px;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(MapViewError::InvalidZoom(factor));
        }
        self.factor = factor;
        Ok(factor)
    }
}

impl Default for Zoom {
    fn default() -> Self {
        let config = ZoomConfig::default();
        Self {
            factor: config.initial,
            step: config.step,
            min: config.min,
            cell_unit_px: config.cell_unit_px,
        }
    }
}
