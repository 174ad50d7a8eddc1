// src/view.rs

//! `MapView` wires the pieces together behind the method-call API the host
//! UI uses.
//!
//! All state lives in one `MapView` value and is touched from one thread.
//! Anything expensive (converting a snapshot, rasterizing layers) is posted
//! to the view's task queue and runs when the host calls
//! `run_pending_tasks`, which it does once per tick before `paint`.
//!
//! Typical host loop:
//!
//! ```
//! use hombot_map::{Config, MapView, SharedViewport};
//! use hombot_map::map::{CellFlags, CellKind, MapBounds, MapCell, MapSnapshot};
//!
//! let viewport = SharedViewport::new(1000, 800);
//! let mut view = MapView::from_config(&Config::default(), Box::new(viewport.clone()))
//!     .expect("default config is valid");
//!
//! let cells = vec![MapCell::new(0, 0, CellKind::Floor, CellFlags::BUMP)];
//! view.set_map(Some(MapSnapshot::new(MapBounds::new(0, 49, 0, 39), cells)));
//!
//! view.run_pending_tasks();
//! assert_eq!(view.zoom(), 2.0);
//! let frame = view.paint().expect("viewport is measured");
//! assert_eq!(frame.dimensions(), (1000, 800));
//! ```

use crate::cells::{CellCategory, CellModel, PaintStyle};
use crate::config::{Config, GridConfig};
use crate::error::Result;
use crate::layer::LayerType;
use crate::map::MapSnapshot;
use crate::presentation::PresentationSurface;
use crate::raster::Raster;
use crate::registry::LayerRegistry;
use crate::renderer::CompositeRenderer;
use crate::resources::{ColorKey, ColorResources, Palette, ViewportProvider};
use crate::scheduler::{RedrawScheduler, Task, TaskQueue};
use crate::zoom::Zoom;
use log::{debug, info, warn};


/// Where a layer's items come from and which color it uses.
struct LayerSource {
    layer: LayerType,
    /// Category the layer is named after; also its color key.
    own: CellCategory,
    /// Category the shipped app actually fills the layer from.
    observed: CellCategory,
}

impl LayerSource {
    const fn same(layer: LayerType, category: CellCategory) -> Self {
        Self {
            layer,
            own: category,
            observed: category,
        }
    }

    fn data(&self, distinct_overlay_sources: bool) -> CellCategory {
        if distinct_overlay_sources {
            self.own
        } else {
            self.observed
        }
    }
}

/// Layers in drawing order. BUMP_ABYSS reuses ABYSS cells and UNDETERMINED
/// reuses FIGHT cells unless `distinct_overlay_sources` is set.
const LAYER_PLAN: [LayerSource; 11] = [
    LayerSource::same(LayerType::Floor, CellCategory::Floor),
    LayerSource::same(LayerType::Wall, CellCategory::Wall),
    LayerSource::same(LayerType::Sneaking, CellCategory::Sneaking),
    LayerSource::same(LayerType::Screwing, CellCategory::Screwing),
    LayerSource::same(LayerType::Bump, CellCategory::Bump),
    LayerSource::same(LayerType::Abyss, CellCategory::Abyss),
    LayerSource {
        layer: LayerType::BumpAbyss,
        own: CellCategory::BumpAbyss,
        observed: CellCategory::Abyss,
    },
    LayerSource::same(LayerType::MoveObject, CellCategory::MoveObject),
    LayerSource::same(LayerType::Fight, CellCategory::Fight),
    LayerSource {
        layer: LayerType::Undetermined,
        own: CellCategory::Undetermined,
        observed: CellCategory::Fight,
    },
    LayerSource::same(LayerType::Block, CellCategory::Block),
];

pub struct MapView {
    registry: LayerRegistry,
    renderer: CompositeRenderer,
    scheduler: RedrawScheduler,
    queue: TaskQueue,
    zoom: Zoom,
    presentation: PresentationSurface,
    colors: Box<dyn ColorResources>,
    viewport: Box<dyn ViewportProvider>,
    grid: GridConfig,
    distinct_overlay_sources: bool,
}

impl MapView {
    /// Creates a view using the given collaborators for colors and viewport
    /// size. The configuration's color scheme is not consulted.
    ///
    /// Fails with `InvalidZoomConfig` if the zoom settings could drive the
    /// factor to zero, negative or non-finite values.
    pub fn new(
        config: &Config,
        colors: Box<dyn ColorResources>,
        viewport: Box<dyn ViewportProvider>,
    ) -> Result<Self> {
        let zoom = Zoom::new(&config.zoom)?;
        let style = PaintStyle {
            cell_unit_px: config.zoom.cell_unit_px,
            line_width_px: config.grid.line_width_px,
        };
        let background = colors.color(ColorKey::Background);
        Ok(Self {
            registry: LayerRegistry::new(),
            renderer: CompositeRenderer::new(background, style),
            scheduler: RedrawScheduler::new(),
            queue: TaskQueue::new(),
            zoom,
            presentation: PresentationSurface::new(),
            colors,
            viewport,
            grid: config.grid.clone(),
            distinct_overlay_sources: config.layers.distinct_overlay_sources,
        })
    }

    /// Creates a view that takes its colors from `config.colors`.
    pub fn from_config(config: &Config, viewport: Box<dyn ViewportProvider>) -> Result<Self> {
        let palette = Palette::new(config.colors.clone());
        Self::new(config, Box::new(palette), viewport)
    }

    // --- Inbound API ---

    /// Replaces the map. The snapshot is converted and the layers updated
    /// on the next `run_pending_tasks`. `None` empties every layer.
    pub fn set_map(&mut self, snapshot: Option<MapSnapshot>) {
        self.queue.post(Task::ApplyMap(snapshot.map(Box::new)));
    }

    /// Flips a layer's visibility and returns the new value.
    pub fn toggle_layer(&mut self, layer_type: LayerType) -> Result<bool> {
        let enabled = self.registry.toggle(layer_type)?;
        info!(
            "MapView: Layer {:?} is now {}",
            layer_type,
            if enabled { "visible" } else { "hidden" }
        );
        self.redraw();
        Ok(enabled)
    }

    pub fn is_layer_visible(&self, layer_type: LayerType) -> Result<bool> {
        self.registry.is_visible(layer_type)
    }

    pub fn zoom_in(&mut self) {
        let factor = self.zoom.zoom_in();
        debug!("MapView: Zoom in -> {}", factor);
        self.redraw();
    }

    /// Zooms out one step if that keeps the zoom at or above its floor.
    /// Returns whether anything changed.
    pub fn zoom_out(&mut self) -> bool {
        if !self.zoom.zoom_out() {
            debug!("MapView: Zoom out ignored at {}", self.zoom.factor());
            return false;
        }
        debug!("MapView: Zoom out -> {}", self.zoom.factor());
        self.redraw();
        true
    }

    pub fn zoom(&self) -> f32 {
        self.zoom.factor()
    }

    /// The host measured a new viewport size.
    pub fn on_size_changed(&mut self) {
        self.redraw();
    }

    // --- Tick and paint ---

    /// Runs every queued task, including tasks queued while running. Returns
    /// how many tasks ran.
    pub fn run_pending_tasks(&mut self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.queue.pop() {
            match task {
                Task::ApplyMap(snapshot) => self.apply_map(snapshot.as_deref()),
                Task::Recompute { generation } => self.recompute(generation),
            }
            ran += 1;
        }
        ran
    }

    /// The last composited raster. Cheap enough to call every frame.
    pub fn paint(&mut self) -> Option<&Raster> {
        self.presentation.paint(&self.renderer)
    }

    /// Whether something changed since the last `paint`.
    pub fn needs_present(&self) -> bool {
        self.presentation.needs_present()
    }

    // --- Introspection ---

    /// Registered layers in drawing order.
    pub fn layer_types(&self) -> Vec<LayerType> {
        self.registry.layer_types()
    }

    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    pub fn recompute_count(&self) -> u64 {
        self.renderer.recompute_count()
    }

    pub fn pending_task_count(&self) -> usize {
        self.queue.len()
    }

    // --- Internals ---

    fn redraw(&mut self) {
        self.scheduler.request_recompute(&mut self.queue);
        self.presentation.invalidate();
    }

    fn apply_map(&mut self, snapshot: Option<&MapSnapshot>) {
        let model = match snapshot {
            Some(map) => self.convert_and_fit(map),
            None => {
                info!("MapView: Cleared map");
                CellModel::default()
            }
        };

        for source in &LAYER_PLAN {
            let items = model.cells(source.data(self.distinct_overlay_sources)).to_vec();
            let color = self.colors.color(ColorKey::Category(source.own));
            self.registry.upsert(source.layer, items, color);
        }

        self.redraw();
    }

    /// Converts `map` and fits the zoom to it. A map that cannot be
    /// converted is replaced by an empty model and the zoom is kept.
    fn convert_and_fit(&mut self, map: &MapSnapshot) -> CellModel {
        let model = match CellModel::convert(
            map,
            self.grid.block_size_cells,
            self.grid.max_extent_cells,
        ) {
            Ok(model) => model,
            Err(e) => {
                warn!("MapView: Ignoring map: {}", e);
                return CellModel::default();
            }
        };
        info!(
            "MapView: Applied map with {} cells, bounds {:?}",
            map.cells.len(),
            map.bounds
        );

        let size = self.viewport.viewport_size();
        match self.zoom.fit_to_viewport(
            map.bounds.width(),
            map.bounds.height(),
            size.width,
            size.height,
        ) {
            Ok(factor) => debug!("MapView: Fitted zoom {}", factor),
            Err(e) => warn!(
                "MapView: Keeping zoom {}, cannot fit map: {}",
                self.zoom.factor(),
                e
            ),
        }
        model
    }

    fn recompute(&mut self, generation: u64) {
        let size = self.viewport.viewport_size();
        if size.is_empty() {
            warn!(
                "MapView: Recompute #{} skipped, viewport is {}x{}",
                generation, size.width, size.height
            );
            return;
        }
        self.renderer.ensure_surface(size.width, size.height);
        self.renderer.recompute(&self.registry, self.zoom.factor());
    }
}
