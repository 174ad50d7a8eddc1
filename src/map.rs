// src/map.rs

//! The map snapshot handed to the view by whatever syncs with the robot.
//!
//! A snapshot is immutable input: the view converts it once per `set_map`
//! call and never holds on to it afterwards.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Inclusive cell-coordinate bounds of a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBounds {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl MapBounds {
    /// Bounds with zero extent in both directions.
    pub const EMPTY: MapBounds = MapBounds {
        x_min: 0,
        x_max: -1,
        y_min: 0,
        y_max: -1,
    };

    pub fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Width in cells. Zero or negative for degenerate bounds.
    pub fn width(&self) -> i64 {
        self.x_max as i64 - self.x_min as i64 + 1
    }

    /// Height in cells. Zero or negative for degenerate bounds.
    pub fn height(&self) -> i64 {
        self.y_max as i64 - self.y_min as i64 + 1
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        MapBounds::EMPTY
    }
}

/// What the robot found at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Void,
    Floor,
    Wall,
}

bitflags! {
    /// Event flags recorded for a cell. Any combination may be set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct CellFlags: u16 {
        const SNEAKING     = 1 << 0;
        const SCREWING     = 1 << 1;
        const BUMP         = 1 << 2;
        const ABYSS        = 1 << 3;
        const BUMP_ABYSS   = 1 << 4;
        const MOVE_OBJECT  = 1 << 5;
        const FIGHT        = 1 << 6;
        const UNDETERMINED = 1 << 7;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapCell {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub kind: CellKind,
    #[serde(default)]
    pub flags: CellFlags,
}

impl MapCell {
    pub fn new(x: i32, y: i32, kind: CellKind, flags: CellFlags) -> Self {
        Self { x, y, kind, flags }
    }
}

/// The full map at one point in time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub bounds: MapBounds,
    #[serde(default)]
    pub cells: Vec<MapCell>,
}

impl MapSnapshot {
    pub fn new(bounds: MapBounds, cells: Vec<MapCell>) -> Self {
        Self { bounds, cells }
    }

    /// A snapshot with no cells and zero extent.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents_are_inclusive() {
        let bounds = MapBounds::new(-5, 44, 10, 49);
        assert_eq!(bounds.width(), 50);
        assert_eq!(bounds.height(), 40);
        assert!(bounds.contains(-5, 49));
        assert!(!bounds.contains(45, 10));
    }

    #[test]
    fn empty_bounds_have_zero_extent() {
        assert_eq!(MapBounds::EMPTY.width(), 0);
        assert_eq!(MapBounds::EMPTY.height(), 0);
        assert!(!MapBounds::EMPTY.contains(0, 0));
    }

    #[test]
    fn snapshot_deserializes_with_optional_fields() {
        let json = r#"{
            "bounds": { "x_min": 0, "x_max": 3, "y_min": 0, "y_max": 3 },
            "cells": [
                { "x": 1, "y": 2, "kind": "Floor", "flags": "BUMP | ABYSS" },
                { "x": 0, "y": 0 }
            ]
        }"#;
        let snapshot: MapSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.cells.len(), 2);
        assert_eq!(snapshot.cells[0].flags, CellFlags::BUMP | CellFlags::ABYSS);
        assert_eq!(snapshot.cells[1].kind, CellKind::Void);
        assert!(snapshot.cells[1].flags.is_empty());
    }
}
