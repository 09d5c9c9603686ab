mod frame;
mod layer_stack;
mod null_renderer;
pub mod primitives;
mod svg_backend;

pub use frame::{ChartFrame, ChartKind, LayerPrimitives, RenderFrame};
pub use layer_stack::{CanvasLayerKind, ChartLayerStack};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use svg_backend::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `ChartFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()>;
}
