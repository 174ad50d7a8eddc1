// src/registry.rs

//! Insertion-ordered mapping from `LayerType` to `Layer`.
//!
//! Iteration order is the order in which layer types were first inserted and
//! never changes afterwards, which fixes the compositing order.

use crate::cells::DrawableItem;
use crate::color::Rgba;
use crate::error::{MapViewError, Result};
use crate::layer::{Layer, LayerType};
use log::trace;

#[derive(Debug, Clone, Default)]
pub struct LayerRegistry {
    layers: Vec<(LayerType, Layer)>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an enabled layer at the end, or replaces the items and color
    /// of an existing one in place, keeping its position and enabled flag.
    pub fn upsert(&mut self, layer_type: LayerType, items: Vec<DrawableItem>, color: Rgba) {
        match self.get_mut(layer_type) {
            Some(layer) => {
                layer.set_items(items);
                layer.set_primary_color(color);
            }
            None => {
                trace!("LayerRegistry: registering {:?}", layer_type);
                self.layers.push((layer_type, Layer::new(items, color)));
            }
        }
    }

    /// Flips the layer's enabled flag and returns the new value.
    pub fn toggle(&mut self, layer_type: LayerType) -> Result<bool> {
        let layer = self
            .get_mut(layer_type)
            .ok_or(MapViewError::LayerNotFound(layer_type))?;
        let enabled = !layer.is_enabled();
        layer.set_enabled(enabled);
        Ok(enabled)
    }

    pub fn is_visible(&self, layer_type: LayerType) -> Result<bool> {
        self.get(layer_type)
            .map(Layer::is_enabled)
            .ok_or(MapViewError::LayerNotFound(layer_type))
    }

    pub fn get(&self, layer_type: LayerType) -> Option<&Layer> {
        self.layers
            .iter()
            .find(|(t, _)| *t == layer_type)
            .map(|(_, layer)| layer)
    }

    fn get_mut(&mut self, layer_type: LayerType) -> Option<&mut Layer> {
        self.layers
            .iter_mut()
            .find(|(t, _)| *t == layer_type)
            .map(|(_, layer)| layer)
    }

    /// Layers in compositing order.
    pub fn iter(&self) -> impl Iterator<Item = (LayerType, &Layer)> + '_ {
        self.layers.iter().map(|(t, layer)| (*t, layer))
    }

    pub fn layer_types(&self) -> Vec<LayerType> {
        self.layers.iter().map(|(t, _)| *t).collect()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
