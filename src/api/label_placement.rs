use serde::{Deserialize, Serialize};

use crate::core::{EntitySeries, LinearScale, YearValue};
use crate::error::{ChartError, ChartResult};
use crate::render::TextHAlign;

/// Pixel constants used to anchor a series label near its last visible point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelPlacementTuning {
    /// Distance the label sits above its anchor point.
    pub vertical_offset_px: f64,
    /// Labels never go closer than this to the top of the plot.
    pub min_y_px: f64,
    /// Width of the band at either plot edge where labels flip alignment.
    pub edge_margin_px: f64,
    /// Horizontal nudge away from the edge once flipped.
    pub edge_nudge_px: f64,
}

impl Default for LabelPlacementTuning {
    fn default() -> Self {
        Self {
            vertical_offset_px: 12.0,
            min_y_px: 18.0,
            edge_margin_px: 56.0,
            edge_nudge_px: 10.0,
        }
    }
}

impl LabelPlacementTuning {
    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("vertical_offset_px", self.vertical_offset_px),
            ("min_y_px", self.min_y_px),
            ("edge_margin_px", self.edge_margin_px),
            ("edge_nudge_px", self.edge_nudge_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::Config(format!(
                    "label tuning `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Resolved position for one label, in focus plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub anchor: YearValue,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub h_align: TextHAlign,
}

/// Places a label at the series' last point inside the focus domain.
///
/// Returns `None` when no point of the series is visible.
#[must_use]
pub fn resolve_label_placement(
    series: &EntitySeries,
    focus_x: LinearScale,
    focus_y: LinearScale,
    plot_width: f64,
    tuning: LabelPlacementTuning,
) -> Option<LabelPlacement> {
    let anchor = series.last_visible_point(focus_x.domain())?;
    let x = focus_x.map(f64::from(anchor.year));
    let y = (focus_y.map(anchor.value) - tuning.vertical_offset_px).max(tuning.min_y_px);

    let (h_align, dx) = if x > plot_width - tuning.edge_margin_px {
        (TextHAlign::Right, -tuning.edge_nudge_px)
    } else if x < tuning.edge_margin_px {
        (TextHAlign::Left, tuning.edge_nudge_px)
    } else {
        (TextHAlign::Center, 0.0)
    };

    Some(LabelPlacement {
        anchor,
        x,
        y,
        dx,
        h_align,
    })
}

/// Floating name label owned by a highlighted or pinned entity.
///
/// When the focus window no longer contains any point of the series the
/// label stays attached but hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub h_align: TextHAlign,
    pub pinned: bool,
    pub visible: bool,
}

impl SeriesLabel {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            h_align: TextHAlign::Center,
            pinned: false,
            visible: false,
        }
    }

    pub fn apply(&mut self, placement: Option<LabelPlacement>, pinned: bool) {
        self.pinned = pinned;
        match placement {
            Some(placement) => {
                self.x = placement.x;
                self.y = placement.y;
                self.dx = placement.dx;
                self.h_align = placement.h_align;
                self.visible = true;
            }
            None => self.visible = false,
        }
    }
}
