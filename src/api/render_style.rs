use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors, stroke widths and font sizes used by the render bridge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub line_color: Color,
    pub line_width: f64,
    pub highlighted_line_color: Color,
    pub pinned_line_color: Color,
    pub highlighted_line_width: f64,
    pub context_line_color: Color,
    pub context_line_width: f64,
    pub grid_color: Color,
    pub axis_color: Color,
    pub axis_text_color: Color,
    pub axis_font_size_px: f64,
    pub axis_title_font_size_px: f64,
    pub tick_size_px: f64,
    pub label_color: Color,
    pub pinned_label_color: Color,
    pub label_font_size_px: f64,
    pub brush_fill: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgba(0.62, 0.65, 0.70, 0.55),
            line_width: 1.2,
            highlighted_line_color: Color::rgb(0.85, 0.33, 0.10),
            pinned_line_color: Color::rgb(0.13, 0.40, 0.67),
            highlighted_line_width: 2.6,
            context_line_color: Color::rgba(0.62, 0.65, 0.70, 0.45),
            context_line_width: 0.8,
            grid_color: Color::rgba(0.0, 0.0, 0.0, 0.08),
            axis_color: Color::rgb(0.2, 0.2, 0.2),
            axis_text_color: Color::rgb(0.2, 0.2, 0.2),
            axis_font_size_px: 11.0,
            axis_title_font_size_px: 13.0,
            tick_size_px: 6.0,
            label_color: Color::rgb(0.85, 0.33, 0.10),
            pinned_label_color: Color::rgb(0.13, 0.40, 0.67),
            label_font_size_px: 12.0,
            brush_fill: Color::rgba(0.27, 0.51, 0.71, 0.18),
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.line_color,
            self.highlighted_line_color,
            self.pinned_line_color,
            self.context_line_color,
            self.grid_color,
            self.axis_color,
            self.axis_text_color,
            self.label_color,
            self.pinned_label_color,
            self.brush_fill,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("line_width", self.line_width),
            ("highlighted_line_width", self.highlighted_line_width),
            ("context_line_width", self.context_line_width),
            ("axis_font_size_px", self.axis_font_size_px),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
            ("tick_size_px", self.tick_size_px),
            ("label_font_size_px", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::Config(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    /// Stroke color and width for a series line given its markers.
    #[must_use]
    pub fn series_stroke(self, highlighted: bool, pinned: bool, context: bool) -> (Color, f64) {
        match (pinned, highlighted, context) {
            (true, _, false) => (self.pinned_line_color, self.highlighted_line_width),
            (true, _, true) => (self.pinned_line_color, self.context_line_width * 1.5),
            (false, true, false) => (self.highlighted_line_color, self.highlighted_line_width),
            (false, true, true) => (self.highlighted_line_color, self.context_line_width * 1.5),
            (false, false, false) => (self.line_color, self.line_width),
            (false, false, true) => (self.context_line_color, self.context_line_width),
        }
    }
}
