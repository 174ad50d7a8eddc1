// src/cells.rs

//! Geometric cell model.
//!
//! Turns a `MapSnapshot` into drawable items grouped by `CellCategory`. A
//! single map cell may land in several categories (a floor cell flagged
//! `BUMP | ABYSS` yields a FLOOR item, a BUMP item and an ABYSS item). The
//! BLOCK category holds the grid lines spanning the map bounds.
//!
//! Conversion is pure: it depends only on the snapshot, the block size and
//! the extent limit.

use crate::color::Rgba;
use crate::error::{MapViewError, Result};
use crate::map::{CellFlags, CellKind, MapSnapshot};
use crate::raster::Raster;
use log::debug;
use std::collections::HashMap;

/// Semantic category of a drawable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellCategory {
    Floor,
    Wall,
    Sneaking,
    Screwing,
    Bump,
    Abyss,
    BumpAbyss,
    MoveObject,
    Fight,
    Undetermined,
    /// Grid blocks.
    Block,
}

impl CellCategory {
    /// The flag-driven categories with the flag that selects each.
    const FLAGGED: [(CellFlags, CellCategory); 8] = [
        (CellFlags::SNEAKING, CellCategory::Sneaking),
        (CellFlags::SCREWING, CellCategory::Screwing),
        (CellFlags::BUMP, CellCategory::Bump),
        (CellFlags::ABYSS, CellCategory::Abyss),
        (CellFlags::BUMP_ABYSS, CellCategory::BumpAbyss),
        (CellFlags::MOVE_OBJECT, CellCategory::MoveObject),
        (CellFlags::FIGHT, CellCategory::Fight),
        (CellFlags::UNDETERMINED, CellCategory::Undetermined),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// How items are scaled onto pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    /// Pixel edge of one cell at zoom 1.
    pub cell_unit_px: f32,
    /// Grid line thickness in pixels.
    pub line_width_px: f32,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            cell_unit_px: 10.0,
            line_width_px: 1.0,
        }
    }
}

/// Something a layer can draw. Coordinates are in cells, relative to the
/// top-left corner of the map bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawableItem {
    /// A filled unit cell.
    Cell { x: u32, y: u32 },
    /// A line on a cell boundary. `at` is the boundary index across the
    /// axis, `length` the extent in cells along it.
    GridLine { axis: Axis, at: u32, length: u32 },
}

impl DrawableItem {
    pub fn draw(&self, raster: &mut Raster, style: &PaintStyle, zoom: f32, color: Rgba) {
        let scale = style.cell_unit_px * zoom;
        match *self {
            DrawableItem::Cell { x, y } => {
                let x0 = x as f32 * scale;
                let y0 = y as f32 * scale;
                raster.fill_rect(x0, y0, x0 + scale, y0 + scale, color);
            }
            DrawableItem::GridLine { axis, at, length } => {
                let pos = at as f32 * scale;
                let end = length as f32 * scale;
                let width = style.line_width_px.max(1.0);
                match axis {
                    Axis::Vertical => raster.fill_rect(pos, 0.0, pos + width, end, color),
                    Axis::Horizontal => raster.fill_rect(0.0, pos, end, pos + width, color),
                }
            }
        }
    }
}

/// Result of converting a snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellModel {
    cells_by_category: HashMap<CellCategory, Vec<DrawableItem>>,
    grid_lines: Vec<DrawableItem>,
    width: u32,
    height: u32,
}

impl CellModel {
    /// Converts `snapshot`, placing a grid line every `block_size` cells.
    ///
    /// Grid lines follow the declared bounds rather than the cells, so
    /// bounds wider or taller than `max_extent` cells are refused.
    pub fn convert(snapshot: &MapSnapshot, block_size: u32, max_extent: u32) -> Result<Self> {
        let bounds = snapshot.bounds;
        let too_large = |extent: i64| extent > i64::from(max_extent);
        if too_large(bounds.width()) || too_large(bounds.height()) {
            return Err(MapViewError::MapTooLarge {
                width: bounds.width(),
                height: bounds.height(),
                limit: max_extent,
            });
        }
        let width = u32::try_from(bounds.width().max(0)).unwrap_or(0);
        let height = u32::try_from(bounds.height().max(0)).unwrap_or(0);

        let mut cells_by_category: HashMap<CellCategory, Vec<DrawableItem>> = HashMap::new();
        let mut dropped = 0usize;

        for cell in &snapshot.cells {
            if !bounds.contains(cell.x, cell.y) {
                dropped += 1;
                continue;
            }
            let item = DrawableItem::Cell {
                x: (cell.x as i64 - bounds.x_min as i64) as u32,
                y: (cell.y as i64 - bounds.y_min as i64) as u32,
            };
            let kind_category = match cell.kind {
                CellKind::Floor => Some(CellCategory::Floor),
                CellKind::Wall => Some(CellCategory::Wall),
                CellKind::Void => None,
            };
            let flag_categories = CellCategory::FLAGGED
                .into_iter()
                .filter(|(flag, _)| cell.flags.contains(*flag))
                .map(|(_, category)| category);
            for category in kind_category.into_iter().chain(flag_categories) {
                cells_by_category.entry(category).or_default().push(item);
            }
        }

        if dropped > 0 {
            debug!(
                "CellModel: dropped {} cells outside bounds {:?}",
                dropped, bounds
            );
        }

        Ok(Self {
            cells_by_category,
            grid_lines: grid_lines(width, height, block_size),
            width,
            height,
        })
    }

    /// Items of `category`; the grid lines for `CellCategory::Block`.
    pub fn cells(&self, category: CellCategory) -> &[DrawableItem] {
        if category == CellCategory::Block {
            return &self.grid_lines;
        }
        self.cells_by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn grid_lines(&self) -> &[DrawableItem] {
        &self.grid_lines
    }

    /// Map extent in cells.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Block boundaries from 0 through each extent inclusive.
fn grid_lines(width: u32, height: u32, block_size: u32) -> Vec<DrawableItem> {
    if width == 0 || height == 0 || block_size == 0 {
        return Vec::new();
    }
    let boundaries = |extent: u32| {
        let mut at: Vec<u32> = (0..=extent).step_by(block_size as usize).collect();
        if at.last() != Some(&extent) {
            at.push(extent);
        }
        at
    };

    let vertical = boundaries(width).into_iter().map(|at| DrawableItem::GridLine {
        axis: Axis::Vertical,
        at,
        length: height,
    });
    let horizontal = boundaries(height).into_iter().map(|at| DrawableItem::GridLine {
        axis: Axis::Horizontal,
        at,
        length: width,
    });
    vertical.chain(horizontal).collect()
}
