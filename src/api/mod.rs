//! Host-facing engine: construction, brush selection, highlight/pin
//! interaction, hit testing and frame building.

mod axis_ticks;
mod engine;
mod engine_config;
mod engine_snapshot;
mod entity_record;
mod highlight_controller;
mod label_placement;
mod render_bridge;
mod render_style;
mod selection_controller;

pub use axis_ticks::{plan_year_ticks, value_tick_labels, year_tick_step};
pub use engine::ChartEngine;
pub use engine_config::{
    CONTAINER_GUTTER_PX, CONTEXT_MARGINS, ChartConfig, DEFAULT_CONTAINER_WIDTH_PX, FOCUS_MARGINS,
    MAX_PLOT_WIDTH_PX, MIN_PLOT_WIDTH_PX, plot_width_for_container,
};
pub use engine_snapshot::{ChartSnapshot, EntitySnapshot};
pub use entity_record::{EntityRecord, LineHandle};
pub use label_placement::{
    LabelPlacement, LabelPlacementTuning, SeriesLabel, resolve_label_placement,
};
pub use render_bridge::{ProjectedRuns, project_runs};
pub use render_style::RenderStyle;
pub use selection_controller::BrushSelection;
