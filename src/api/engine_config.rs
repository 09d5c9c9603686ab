use serde::{Deserialize, Serialize};

use crate::core::{ChartDimensions, Margins};
use crate::error::{ChartError, ChartResult};
use crate::interaction::UnpinPolicy;

use super::{LabelPlacementTuning, RenderStyle};

/// Container width assumed when the host cannot measure one.
pub const DEFAULT_CONTAINER_WIDTH_PX: f64 = 960.0;
/// Horizontal space the page takes from the container: both chart margins
/// plus page padding.
pub const CONTAINER_GUTTER_PX: f64 = 84.0 + 72.0 + 16.0;
pub const MIN_PLOT_WIDTH_PX: f64 = 360.0;
pub const MAX_PLOT_WIDTH_PX: f64 = 1100.0;

pub const FOCUS_MARGINS: Margins = Margins::new(24.0, 72.0, 72.0, 84.0);
pub const CONTEXT_MARGINS: Margins = Margins::new(18.0, 72.0, 38.0, 84.0);

/// Plot width shared by both charts for a measured container width.
#[must_use]
pub fn plot_width_for_container(container_width: f64) -> f64 {
    let container_width = if container_width.is_finite() {
        container_width
    } else {
        DEFAULT_CONTAINER_WIDTH_PX
    };
    (container_width - CONTAINER_GUTTER_PX).clamp(MIN_PLOT_WIDTH_PX, MAX_PLOT_WIDTH_PX)
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep chart setup in a JSON file. Every field has
/// a default; a partial document only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub container_width: f64,
    pub focus_height: f64,
    pub context_height: f64,
    pub focus_margins: Margins,
    pub context_margins: Margins,
    pub label: LabelPlacementTuning,
    pub value_tick_count: usize,
    pub value_axis_title: String,
    pub year_axis_title: String,
    pub unpin_policy: UnpinPolicy,
    pub hit_tolerance_px: f64,
    pub style: RenderStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            container_width: DEFAULT_CONTAINER_WIDTH_PX,
            focus_height: 380.0,
            context_height: 110.0,
            focus_margins: FOCUS_MARGINS,
            context_margins: CONTEXT_MARGINS,
            label: LabelPlacementTuning::default(),
            value_tick_count: 6,
            value_axis_title: "Value".to_owned(),
            year_axis_title: "Years".to_owned(),
            unpin_policy: UnpinPolicy::default(),
            hit_tolerance_px: 4.0,
            style: RenderStyle::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_container_width(mut self, container_width: f64) -> Self {
        self.container_width = container_width;
        self
    }

    #[must_use]
    pub fn with_value_axis_title(mut self, title: impl Into<String>) -> Self {
        self.value_axis_title = title.into();
        self
    }

    #[must_use]
    pub fn with_unpin_policy(mut self, policy: UnpinPolicy) -> Self {
        self.unpin_policy = policy;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        plot_width_for_container(self.container_width)
    }

    #[must_use]
    pub fn focus_dimensions(&self) -> ChartDimensions {
        ChartDimensions::new(self.plot_width(), self.focus_height, self.focus_margins)
    }

    #[must_use]
    pub fn context_dimensions(&self) -> ChartDimensions {
        ChartDimensions::new(self.plot_width(), self.context_height, self.context_margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("focus_height", self.focus_height),
            ("context_height", self.context_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::Config(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        for (name, margins) in [
            ("focus_margins", self.focus_margins),
            ("context_margins", self.context_margins),
        ] {
            let sides = [margins.top, margins.right, margins.bottom, margins.left];
            if sides.iter().any(|side| !side.is_finite() || *side < 0.0) {
                return Err(ChartError::Config(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }

        if self.value_tick_count == 0 {
            return Err(ChartError::Config(
                "`value_tick_count` must be > 0".to_owned(),
            ));
        }
        if !self.hit_tolerance_px.is_finite() || self.hit_tolerance_px < 0.0 {
            return Err(ChartError::Config(
                "`hit_tolerance_px` must be finite and >= 0".to_owned(),
            ));
        }

        self.label.validate()?;
        self.style.validate()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::Config(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Config(format!("failed to serialize chart config: {e}")))
    }
}
