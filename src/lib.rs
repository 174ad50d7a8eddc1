// src/lib.rs

//! Layered raster rendering of a robot vacuum's occupancy map.
//!
//! A `MapView` keeps a stack of toggleable layers (floor, walls, event
//! flags, block grid), composites them onto an off-screen raster only when
//! the map, zoom or visibility changes, and hands that raster out on every
//! paint.

pub mod cells;
pub mod color;
pub mod config;
pub mod error;
pub mod layer;
pub mod map;
pub mod presentation;
pub mod raster;
pub mod registry;
pub mod renderer;
pub mod resources;
pub mod scheduler;
pub mod view;
pub mod zoom;

pub use color::Rgba;
pub use config::Config;
pub use error::{MapViewError, Result};
pub use layer::LayerType;
pub use raster::Raster;
pub use resources::{
    ColorKey, ColorResources, Palette, SharedViewport, ViewportProvider, ViewportSize,
};
pub use view::MapView;
