// src/layer.rs

//! A `Layer` is one category's drawable items plus the color they are
//! painted in and a visibility flag.

use crate::cells::{DrawableItem, PaintStyle};
use crate::color::Rgba;
use crate::raster::Raster;
use serde::{Deserialize, Serialize};

/// Identifies a layer in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerType {
    Abyss,
    Block,
    Bump,
    BumpAbyss,
    Fight,
    Floor,
    MoveObject,
    Sneaking,
    Screwing,
    Undetermined,
    /// Reserved. Never populated.
    Void,
    Wall,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    items: Vec<DrawableItem>,
    primary_color: Rgba,
    enabled: bool,
}

impl Layer {
    /// Creates an enabled layer.
    pub fn new(items: Vec<DrawableItem>, primary_color: Rgba) -> Self {
        Self {
            items,
            primary_color,
            enabled: true,
        }
    }

    pub fn items(&self) -> &[DrawableItem] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<DrawableItem>) {
        self.items = items;
    }

    pub fn primary_color(&self) -> Rgba {
        self.primary_color
    }

    pub fn set_primary_color(&mut self, color: Rgba) {
        self.primary_color = color;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Paints every item at `zoom`. Does nothing when the layer is disabled.
    pub fn draw(&self, raster: &mut Raster, style: &PaintStyle, zoom: f32) {
        if !self.enabled {
            return;
        }
        for item in &self.items {
            item.draw(raster, style, zoom, self.primary_color);
        }
    }
}
