// src/renderer.rs

//! This module defines the `CompositeRenderer`.
//!
//! The renderer owns the off-screen `Raster` and is the only place where map
//! cells are turned into pixels. Rendering is split in two:
//!
//! - `recompute()` clears the raster to the background color and draws every
//!   enabled layer of a `LayerRegistry` in registry order. This is the
//!   expensive step, O(total visible items).
//! - `snapshot()` hands out the raster as it was left by the last completed
//!   `recompute()`. This is what the paint path reads every frame.
//!
//! Both take `self` by reference with the usual borrow rules, so a snapshot
//! can never be observed while a recompute is running.

use crate::cells::PaintStyle;
use crate::color::Rgba;
use crate::raster::Raster;
use crate::registry::LayerRegistry;
use log::{debug, trace};

#[cfg(test)]
mod tests;

pub struct CompositeRenderer {
    raster: Option<Raster>,
    background: Rgba,
    style: PaintStyle,
    recomputes: u64,
}

impl CompositeRenderer {
    /// Creates a renderer with no surface yet. The surface is allocated by
    /// the first `ensure_surface` call, once the viewport size is known.
    pub fn new(background: Rgba, style: PaintStyle) -> Self {
        Self {
            raster: None,
            background,
            style,
            recomputes: 0,
        }
    }

    /// Makes sure the off-screen raster is `width` x `height`.
    ///
    /// Allocates on first use and reallocates, discarding prior content,
    /// when the size changed. Returns `true` if a new raster was allocated.
    /// A freshly allocated raster is filled with the background color.
    pub fn ensure_surface(&mut self, width: u32, height: u32) -> bool {
        if let Some(raster) = &self.raster {
            if raster.dimensions() == (width, height) {
                return false;
            }
            debug!(
                "CompositeRenderer: Resizing surface {:?} -> {}x{}",
                raster.dimensions(),
                width,
                height
            );
        } else {
            debug!("CompositeRenderer: Allocating surface {}x{}", width, height);
        }
        self.raster = Some(Raster::new(width, height, self.background));
        true
    }

    /// Clears the raster and composites every enabled layer in registry
    /// order at `zoom`.
    ///
    /// Returns `false` without touching anything when no surface has been
    /// allocated yet.
    pub fn recompute(&mut self, registry: &LayerRegistry, zoom: f32) -> bool {
        let Some(raster) = self.raster.as_mut() else {
            debug!("CompositeRenderer: No surface yet, skipping recompute");
            return false;
        };

        raster.clear(self.background);
        let mut drawn_layers = 0usize;
        let mut drawn_items = 0usize;
        for (layer_type, layer) in registry.iter() {
            if !layer.is_enabled() {
                trace!("CompositeRenderer: Skipping disabled layer {:?}", layer_type);
                continue;
            }
            layer.draw(raster, &self.style, zoom);
            drawn_layers += 1;
            drawn_items += layer.items().len();
        }

        self.recomputes += 1;
        debug!(
            "CompositeRenderer: Recompute #{} drew {} layers ({} items) at zoom {}",
            self.recomputes, drawn_layers, drawn_items, zoom
        );
        true
    }

    /// The raster as of the last completed recompute (background-only if
    /// none has completed since allocation), or `None` before the first
    /// `ensure_surface`.
    pub fn snapshot(&self) -> Option<&Raster> {
        self.raster.as_ref()
    }

    /// Number of recomputes that ran to completion.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }
}
