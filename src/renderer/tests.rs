// src/renderer/tests.rs

use super::*;
use crate::cells::DrawableItem;
use crate::layer::LayerType;
use test_log::test;

const BG: Rgba = Rgba::opaque(0xEE, 0xEE, 0xEE);
const FLOOR: Rgba = Rgba::WHITE;
const WALL: Rgba = Rgba::opaque(0x33, 0x33, 0x33);

// --- Helpers ---

fn renderer() -> CompositeRenderer {
    CompositeRenderer::new(BG, PaintStyle::default())
}

fn cell(x: u32, y: u32) -> DrawableItem {
    DrawableItem::Cell { x, y }
}

/// Floor under the whole 4x4 map, a wall along the top row.
fn registry() -> LayerRegistry {
    let mut registry = LayerRegistry::new();
    let floor = (0..4).flat_map(|y| (0..4).map(move |x| cell(x, y))).collect();
    registry.upsert(LayerType::Floor, floor, FLOOR);
    registry.upsert(LayerType::Wall, (0..4).map(|x| cell(x, 0)).collect(), WALL);
    registry
}

// --- Surface allocation ---

#[test]
fn snapshot_is_none_before_surface_exists() {
    let renderer = renderer();
    assert!(renderer.snapshot().is_none());
}

#[test]
fn recompute_without_surface_is_skipped() {
    let mut renderer = renderer();
    assert!(!renderer.recompute(&registry(), 1.0));
    assert_eq!(renderer.recompute_count(), 0);
    assert!(renderer.snapshot().is_none());
}

#[test]
fn fresh_surface_is_background_only() {
    let mut renderer = renderer();
    assert!(renderer.ensure_surface(8, 6));
    let raster = renderer.snapshot().unwrap();
    assert_eq!(raster.dimensions(), (8, 6));
    assert_eq!(raster.count_pixels_not(BG), 0);
}

#[test]
fn ensure_surface_is_idempotent_for_same_size() {
    let mut renderer = renderer();
    renderer.ensure_surface(40, 40);
    renderer.recompute(&registry(), 1.0);
    let before = renderer.snapshot().unwrap().clone();

    assert!(!renderer.ensure_surface(40, 40));
    assert_eq!(renderer.snapshot().unwrap(), &before);
}

#[test]
fn ensure_surface_reallocates_on_resize() {
    let mut renderer = renderer();
    renderer.ensure_surface(40, 40);
    renderer.recompute(&registry(), 1.0);

    assert!(renderer.ensure_surface(60, 30));
    let raster = renderer.snapshot().unwrap();
    assert_eq!(raster.dimensions(), (60, 30));
    assert_eq!(raster.count_pixels_not(BG), 0, "prior content is discarded");
}

// --- Compositing ---

#[test]
fn later_layers_paint_over_earlier_ones() {
    let mut renderer = renderer();
    renderer.ensure_surface(50, 50);
    assert!(renderer.recompute(&registry(), 1.0));

    let raster = renderer.snapshot().unwrap();
    assert_eq!(raster.pixel(5, 5), Some(WALL));
    assert_eq!(raster.pixel(5, 15), Some(FLOOR));
    assert_eq!(raster.pixel(45, 45), Some(BG));
    assert_eq!(renderer.recompute_count(), 1);
}

#[test]
fn zoom_scales_every_layer() {
    let mut renderer = renderer();
    renderer.ensure_surface(100, 100);
    renderer.recompute(&registry(), 2.0);

    let raster = renderer.snapshot().unwrap();
    assert_eq!(raster.pixel(79, 79), Some(FLOOR));
    assert_eq!(raster.pixel(80, 80), Some(BG));
    assert_eq!(raster.pixel(79, 19), Some(WALL));
}

#[test]
fn disabled_layer_contributes_no_pixels() {
    let mut registry = LayerRegistry::new();
    registry.upsert(
        LayerType::Abyss,
        (0..5).map(|x| cell(x, x)).collect(),
        Rgba::opaque(200, 0, 0),
    );
    registry.toggle(LayerType::Abyss).unwrap();

    let mut renderer = renderer();
    renderer.ensure_surface(50, 50);
    renderer.recompute(&registry, 1.0);
    assert_eq!(renderer.snapshot().unwrap().count_pixels_not(BG), 0);
}

#[test]
fn recompute_clears_previous_frame() {
    let mut registry = registry();
    let mut renderer = renderer();
    renderer.ensure_surface(50, 50);
    renderer.recompute(&registry, 1.0);

    registry.upsert(LayerType::Floor, Vec::new(), FLOOR);
    registry.upsert(LayerType::Wall, Vec::new(), WALL);
    renderer.recompute(&registry, 1.0);
    assert_eq!(renderer.snapshot().unwrap().count_pixels_not(BG), 0);
}

#[test]
fn identical_inputs_give_identical_rasters() {
    let registry = registry();
    let mut first = renderer();
    first.ensure_surface(64, 48);
    first.recompute(&registry, 1.5);

    let mut second = renderer();
    second.ensure_surface(64, 48);
    second.recompute(&registry, 1.5);
    second.recompute(&registry, 1.5);

    assert_eq!(first.snapshot(), second.snapshot());
}

#[test]
fn translucent_overlay_blends_with_floor() {
    let mut registry = registry();
    registry.upsert(
        LayerType::Bump,
        vec![cell(1, 1)],
        Rgba::new(255, 0, 0, 128),
    );
    let mut renderer = renderer();
    renderer.ensure_surface(50, 50);
    renderer.recompute(&registry, 1.0);

    let px = renderer.snapshot().unwrap().pixel(15, 15).unwrap();
    assert_eq!(px.r, 255);
    assert!(px.g > 120 && px.g < 135, "g = {}", px.g);
    assert_eq!(px.a, 255);
}
