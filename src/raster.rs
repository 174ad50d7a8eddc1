// src/raster.rs

//! Off-screen RGBA pixel buffer that layers draw into.
//!
//! Pixels are stored row-major, 4 bytes per pixel in R, G, B, A order. A
//! raster is always fully initialized: allocation fills it with a color, so
//! a reader never sees garbage even before anything was drawn.

use crate::color::Rgba;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Box<[u8]>,
}

impl Raster {
    /// Allocates a `width` x `height` raster filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        let mut raster = Self {
            width,
            height,
            pixels: vec![0u8; len].into_boxed_slice(),
        };
        raster.clear(fill);
        raster
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Overwrites every pixel with `color` (no blending).
    pub fn clear(&mut self, color: Rgba) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Returns the pixel at (x, y), or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x as usize, y as usize);
        let px = &self.pixels[idx..idx + BYTES_PER_PIXEL];
        Some(Rgba::new(px[0], px[1], px[2], px[3]))
    }

    /// Fills the half-open pixel rectangle `[x0, x1) x [y0, y1)`.
    ///
    /// Edges are rounded to the nearest pixel and clipped to the raster, so
    /// rectangles sharing an edge tile without gaps or overlap. Translucent
    /// colors are composited over the existing pixels.
    pub fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba) {
        if color.a == 0 {
            return;
        }
        let (Some((col_start, col_end)), Some((row_start, row_end))) = (
            clip_span(x0, x1, self.width),
            clip_span(y0, y1, self.height),
        ) else {
            return;
        };

        let opaque = color.to_bytes();
        for y in row_start..row_end {
            let row = self.index(col_start, y);
            let row_end_idx = self.index(col_end, y);
            for px in self.pixels[row..row_end_idx].chunks_exact_mut(BYTES_PER_PIXEL) {
                if color.is_opaque() {
                    px.copy_from_slice(&opaque);
                } else {
                    let dst = Rgba::new(px[0], px[1], px[2], px[3]);
                    px.copy_from_slice(&color.over(dst).to_bytes());
                }
            }
        }
    }

    /// Number of pixels that differ from `color`.
    pub fn count_pixels_not(&self, color: Rgba) -> usize {
        let bytes = color.to_bytes();
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|px| *px != bytes)
            .count()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        (y * self.width as usize + x) * BYTES_PER_PIXEL
    }
}

/// Rounds a float span to whole pixels and clips it to `[0, limit)`.
fn clip_span(start: f32, end: f32, limit: u32) -> Option<(usize, usize)> {
    if !start.is_finite() || !end.is_finite() {
        return None;
    }
    let lo = start.round().max(0.0);
    let hi = end.round().min(limit as f32);
    if hi <= lo {
        return None;
    }
    Some((lo as usize, hi as usize))
}
