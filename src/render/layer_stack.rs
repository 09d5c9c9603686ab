use serde::{Deserialize, Serialize};

/// Draw layers of one chart, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Grid,
    Series,
    Labels,
    Axis,
    Overlay,
}

impl CanvasLayerKind {
    /// Series and labels are clipped to the plot area when a clip is set.
    #[must_use]
    pub fn is_clipped(self) -> bool {
        matches!(self, Self::Series | Self::Labels)
    }

    #[must_use]
    pub fn svg_group_class(self) -> &'static str {
        match self {
            Self::Grid => "grid-lines",
            Self::Series => "series-lines",
            Self::Labels => "label-layer",
            Self::Axis => "axes",
            Self::Overlay => "overlay",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayerStack {
    pub layers: Vec<CanvasLayerKind>,
}

impl ChartLayerStack {
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                CanvasLayerKind::Grid,
                CanvasLayerKind::Series,
                CanvasLayerKind::Labels,
                CanvasLayerKind::Axis,
                CanvasLayerKind::Overlay,
            ],
        }
    }
}
