use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, ChartLayerStack, LinePrimitive, PolylinePrimitive, RectPrimitive,
    TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Focus,
    Context,
}

impl ChartKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Context => "context",
        }
    }
}

/// Primitives belonging to one draw layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub polylines: Vec<PolylinePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            polylines: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
            && self.lines.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart, in document pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub chart: ChartKind,
    pub viewport: Viewport,
    /// Plot area; clipped layers never draw outside it.
    pub clip: Option<RectPrimitive>,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(chart: ChartKind, viewport: Viewport) -> Self {
        Self {
            chart,
            viewport,
            clip: None,
            layers: ChartLayerStack::canonical()
                .layers
                .into_iter()
                .map(LayerPrimitives::new)
                .collect(),
        }
    }

    #[must_use]
    pub fn with_clip(mut self, clip: RectPrimitive) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_polyline(&mut self, kind: CanvasLayerKind, polyline: PolylinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.polylines.push(polyline);
        }
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    /// Series lines in draw order (last drawn is on top).
    #[must_use]
    pub fn series_lines(&self) -> &[PolylinePrimitive] {
        self.layer(CanvasLayerKind::Series)
            .map_or(&[], |layer| layer.polylines.as_slice())
    }

    #[must_use]
    pub fn labels(&self) -> &[TextPrimitive] {
        self.layer(CanvasLayerKind::Labels)
            .map_or(&[], |layer| layer.texts.as_slice())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if let Some(clip) = self.clip {
            clip.validate()?;
        }

        for layer in &self.layers {
            for polyline in &layer.polylines {
                polyline.validate()?;
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for rect in &layer.rects {
                rect.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}

/// Both linked charts for one draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub focus: RenderFrame,
    pub context: RenderFrame,
}

impl ChartFrame {
    pub fn validate(&self) -> ChartResult<()> {
        self.focus.validate()?;
        self.context.validate()
    }
}
