// src/resources.rs

//! Collaborators supplied by the host: color lookup and viewport size.

use crate::cells::CellCategory;
use crate::color::Rgba;
use crate::config::ColorScheme;
use std::cell::Cell;
use std::rc::Rc;

/// Semantic color names the view asks the host for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Background,
    Category(CellCategory),
}

/// Color lookup keyed by semantic name.
pub trait ColorResources {
    fn color(&self, key: ColorKey) -> Rgba;
}

/// `ColorResources` backed by a `ColorScheme`.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    scheme: ColorScheme,
}

impl Palette {
    pub fn new(scheme: ColorScheme) -> Self {
        Self { scheme }
    }
}

impl ColorResources for Palette {
    fn color(&self, key: ColorKey) -> Rgba {
        let s = &self.scheme;
        match key {
            ColorKey::Background => s.background,
            ColorKey::Category(category) => match category {
                CellCategory::Floor => s.floor,
                CellCategory::Wall => s.wall,
                CellCategory::Sneaking => s.sneaking,
                CellCategory::Screwing => s.screwing,
                CellCategory::Bump => s.bump,
                CellCategory::Abyss => s.abyss,
                CellCategory::BumpAbyss => s.bump_abyss,
                CellCategory::MoveObject => s.move_object,
                CellCategory::Fight => s.fight,
                CellCategory::Undetermined => s.undetermined,
                CellCategory::Block => s.grid,
            },
        }
    }
}

/// Measured size of the display surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True until the host has measured a non-empty surface.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Reports the current viewport size.
pub trait ViewportProvider {
    fn viewport_size(&self) -> ViewportSize;
}

/// A viewport size the host updates after each layout pass. Clones share
/// the same value.
#[derive(Debug, Clone, Default)]
pub struct SharedViewport(Rc<Cell<ViewportSize>>);

impl SharedViewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self(Rc::new(Cell::new(ViewportSize::new(width, height))))
    }

    pub fn set(&self, width: u32, height: u32) {
        self.0.set(ViewportSize::new(width, height));
    }
}

impl ViewportProvider for SharedViewport {
    fn viewport_size(&self) -> ViewportSize {
        self.0.get()
    }
}
