//! focus-chart-rs: linked focus + context time-series charts.
//!
//! A detailed focus chart shows the year window selected by a horizontal
//! brush on a compressed context chart. Series can be hovered or pinned;
//! highlighted series draw on top and carry a floating name label.
//!
//! The crate keeps the interactive core (scales, tick planning, brush
//! selection, highlight/pin state and label placement) free of any drawing
//! backend: every state change produces a backend-agnostic frame that a
//! [`render::Renderer`] consumes.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};
