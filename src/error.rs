// src/error.rs

//! Error types surfaced by the map view.

use crate::layer::LayerType;
use thiserror::Error;

/// Errors surfaced across the `MapView` boundary.
#[derive(Debug, Error)]
pub enum MapViewError {
    /// A layer was queried or toggled before any map populated it.
    #[error("layer {0:?} is not registered")]
    LayerNotFound(LayerType),

    #[error("invalid map dimensions {width}x{height}")]
    InvalidMapDimensions { width: i64, height: i64 },

    #[error("viewport has no measurable size ({width}x{height})")]
    InvalidViewport { width: u32, height: u32 },

    /// Map bounds larger than the configured extent limit.
    #[error("map of {width}x{height} cells exceeds the {limit} cell limit")]
    MapTooLarge { width: i64, height: i64, limit: u32 },

    #[error("invalid zoom setting {field} = {value}")]
    InvalidZoomConfig { field: &'static str, value: f32 },

    /// A fit computed a factor that is not a positive finite number.
    #[error("fitted zoom {0} is not usable")]
    InvalidZoom(f32),

    #[error("invalid color {0:?}, expected #RRGGBB or #AARRGGBB")]
    ColorParse(String),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MapViewError>;
