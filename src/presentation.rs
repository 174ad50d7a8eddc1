// src/presentation.rs

//! Per-frame paint path.
//!
//! `paint` only hands out whatever the `CompositeRenderer` finished last. It
//! never iterates layers or cells, so its cost does not depend on map size.

use crate::raster::Raster;
use crate::renderer::CompositeRenderer;
use log::trace;

#[derive(Debug, Default)]
pub struct PresentationSurface {
    invalidated: bool,
    frames: u64,
}

impl PresentationSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the host to repaint on its next frame.
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// Whether a repaint was requested since the last `paint`.
    pub fn needs_present(&self) -> bool {
        self.invalidated
    }

    /// Returns the last composited raster, or `None` before any surface
    /// exists (the host then shows its own background).
    pub fn paint<'a>(&mut self, renderer: &'a CompositeRenderer) -> Option<&'a Raster> {
        self.invalidated = false;
        self.frames += 1;
        let raster = renderer.snapshot();
        if raster.is_none() {
            trace!("PresentationSurface: frame {} has no raster yet", self.frames);
        }
        raster
    }

    /// Number of paint calls served.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
