use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, plan_year_ticks};

/// Brush state on the context chart, in context plot pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BrushSelection {
    None,
    Extent { x0: f64, x1: f64 },
}

impl BrushSelection {
    /// Selection spanning the whole context plot.
    #[must_use]
    pub fn full(context_width: f64) -> Self {
        Self::Extent {
            x0: 0.0,
            x1: context_width,
        }
    }

    #[must_use]
    pub fn extent(self) -> Option<(f64, f64)> {
        match self {
            Self::None => None,
            Self::Extent { x0, x1 } => Some((x0, x1)),
        }
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn selection(&self) -> BrushSelection {
        self.selection
    }

    #[must_use]
    pub fn has_pending_selection(&self) -> bool {
        self.pending_selection.is_some()
    }

    /// Applies a brush change immediately.
    ///
    /// `Some((x0, x1))` narrows the focus domain to the inverted pixel
    /// extent; `None` (brush cleared) restores the full context domain.
    /// A queued change is discarded since this one is newer.
    pub fn on_selection_change(&mut self, extent: Option<(f64, f64)>) -> ChartResult<()> {
        self.pending_selection = None;
        self.apply_selection(extent)?;
        self.render()
    }

    /// Double-activation on the context chart: full-range selection.
    pub fn on_context_double_activate(&mut self) -> ChartResult<()> {
        self.pending_selection = None;
        self.selection = BrushSelection::full(self.context_dims.width);
        self.scales.reset_focus_domain();
        debug!("brush reset to full range");
        self.refresh_focus_view();
        self.render()
    }

    /// Records a brush change to apply on the next [`Self::flush_frame`].
    ///
    /// Repeated calls before a flush coalesce; only the last one is applied.
    pub fn queue_selection_change(&mut self, extent: Option<(f64, f64)>) -> ChartResult<()> {
        let selection = match extent {
            Some((x0, x1)) => {
                validate_extent(x0, x1)?;
                BrushSelection::Extent { x0, x1 }
            }
            None => BrushSelection::None,
        };
        if self.pending_selection.replace(selection).is_some() {
            trace!("pending brush change superseded");
        }
        Ok(())
    }

    /// Applies the queued brush change, if any, and renders.
    ///
    /// Returns whether a change was applied.
    pub fn flush_frame(&mut self) -> ChartResult<bool> {
        let Some(selection) = self.pending_selection.take() else {
            return Ok(false);
        };
        self.apply_selection(selection.extent())?;
        self.render()?;
        Ok(true)
    }

    fn apply_selection(&mut self, extent: Option<(f64, f64)>) -> ChartResult<()> {
        match extent {
            Some((x0, x1)) => {
                validate_extent(x0, x1)?;
                let (left, right) = if x1 < x0 { (x1, x0) } else { (x0, x1) };
                let width = self.context_dims.width;
                let (start, end) = self.scales.invert_context_extent(left, right);
                let (start, end) = self.scales.set_focus_domain(start, end)?;
                self.selection = BrushSelection::Extent {
                    x0: left.clamp(0.0, width),
                    x1: right.clamp(0.0, width),
                };
                debug!(start, end, "focus domain follows brush");
            }
            None => {
                self.selection = BrushSelection::None;
                self.scales.reset_focus_domain();
                debug!("brush cleared; focus shows full range");
            }
        }
        self.refresh_focus_view();
        Ok(())
    }

    /// Recomputes focus ticks, re-places labels of active entities and keeps
    /// pinned lines on top.
    pub(super) fn refresh_focus_view(&mut self) {
        self.focus_ticks = plan_year_ticks(self.scales.focus_domain(), self.store.years());
        self.relabel_active_entities();
        self.raise_pinned_entities();
    }
}

fn validate_extent(x0: f64, x1: f64) -> ChartResult<()> {
    if !x0.is_finite() || !x1.is_finite() {
        return Err(ChartError::InvalidData(
            "brush extent must be finite".to_owned(),
        ));
    }
    Ok(())
}
