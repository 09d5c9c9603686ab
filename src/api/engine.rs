use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ChartDimensions, IngestOptions, ScalePair, SeriesStore, load_series_from_path};
use crate::error::{ChartError, ChartResult};
use crate::interaction::EntityVisualState;
use crate::render::Renderer;

use super::{BrushSelection, ChartConfig, EntityRecord, SeriesLabel, plan_year_ticks};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the dataset, the linked focus/context scales, the brush
/// selection and per-entity highlight state. Every state change ends with a
/// render call that hands a complete frame to `R`.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) store: SeriesStore,
    pub(super) scales: ScalePair,
    pub(super) focus_dims: ChartDimensions,
    pub(super) context_dims: ChartDimensions,
    pub(super) selection: BrushSelection,
    pub(super) pending_selection: Option<BrushSelection>,
    pub(super) entities: IndexMap<String, EntityRecord>,
    pub(super) raise_counter: u64,
    pub(super) focus_ticks: Vec<i32>,
    pub(super) context_ticks: Vec<i32>,
    pub(super) pointer_target: Option<String>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Builds both charts over the full year range and renders once.
    pub fn new(renderer: R, store: SeriesStore, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;

        let focus_dims = config.focus_dimensions();
        let context_dims = config.context_dimensions();
        let focus_viewport = focus_dims.viewport();
        if !focus_viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: focus_viewport.width,
                height: focus_viewport.height,
            });
        }

        let scales = ScalePair::from_store(&store, focus_dims, context_dims)?;
        let context_ticks = plan_year_ticks(scales.context_domain(), store.years());
        let focus_ticks = plan_year_ticks(scales.focus_domain(), store.years());
        let entities = store
            .names()
            .map(|name| (name.to_owned(), EntityRecord::attached()))
            .collect();

        debug!(
            entities = store.len(),
            years = store.years().len(),
            plot_width = focus_dims.width,
            "chart engine initialized"
        );

        let mut engine = Self {
            renderer,
            selection: BrushSelection::full(context_dims.width),
            pending_selection: None,
            config,
            store,
            scales,
            focus_dims,
            context_dims,
            entities,
            raise_counter: 0,
            focus_ticks,
            context_ticks,
            pointer_target: None,
        };
        engine.render()?;
        Ok(engine)
    }

    /// Loads a wide CSV table and builds the engine over it.
    pub fn from_csv_path(
        renderer: R,
        path: impl AsRef<Path>,
        ingest: &IngestOptions,
        config: ChartConfig,
    ) -> ChartResult<Self> {
        let store = load_series_from_path(path, ingest)?;
        Self::new(renderer, store, config)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    #[must_use]
    pub fn scales(&self) -> &ScalePair {
        &self.scales
    }

    #[must_use]
    pub fn focus_dimensions(&self) -> ChartDimensions {
        self.focus_dims
    }

    #[must_use]
    pub fn context_dimensions(&self) -> ChartDimensions {
        self.context_dims
    }

    #[must_use]
    pub fn focus_domain(&self) -> (f64, f64) {
        self.scales.focus_domain()
    }

    #[must_use]
    pub fn context_domain(&self) -> (f64, f64) {
        self.scales.context_domain()
    }

    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        self.scales.value_domain()
    }

    #[must_use]
    pub fn focus_ticks(&self) -> &[i32] {
        &self.focus_ticks
    }

    #[must_use]
    pub fn context_ticks(&self) -> &[i32] {
        &self.context_ticks
    }

    #[must_use]
    pub fn entity_state(&self, name: &str) -> Option<EntityVisualState> {
        self.entities.get(name).map(|record| record.state)
    }

    #[must_use]
    pub fn entity_record(&self, name: &str) -> Option<&EntityRecord> {
        self.entities.get(name)
    }

    #[must_use]
    pub fn label(&self, name: &str) -> Option<&SeriesLabel> {
        self.entities.get(name).and_then(|record| record.label.as_ref())
    }

    /// Names of pinned entities, in dataset order.
    pub fn pinned_entities(&self) -> impl Iterator<Item = &str> {
        self.entities
            .iter()
            .filter(|(_, record)| record.state.is_pinned())
            .map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
