use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{ChartDimensions, LinearScale, SeriesStore};
use crate::error::{ChartError, ChartResult};

/// Target tick count used when rounding the value domain.
pub const VALUE_DOMAIN_NICE_TICKS: usize = 10;

/// Year and value scales for the focus and context charts.
///
/// Both charts share the value domain; only the focus year domain moves, and
/// it always stays inside the context year domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalePair {
    context_x: LinearScale,
    context_y: LinearScale,
    focus_x: LinearScale,
    focus_y: LinearScale,
}

impl ScalePair {
    pub fn new(
        year_extent: (f64, f64),
        value_domain: (f64, f64),
        focus: ChartDimensions,
        context: ChartDimensions,
    ) -> ChartResult<Self> {
        if !focus.is_valid() || !context.is_valid() {
            return Err(ChartError::InvalidData(
                "chart dimensions must be finite and > 0".to_owned(),
            ));
        }

        let context_x = LinearScale::new(year_extent, (0.0, context.width))?;
        let focus_x = LinearScale::new(year_extent, (0.0, focus.width))?;
        let focus_y = LinearScale::new(value_domain, (focus.height, 0.0))?;
        let context_y = LinearScale::new(value_domain, (context.height, 0.0))?;

        Ok(Self {
            context_x,
            context_y,
            focus_x,
            focus_y,
        })
    }

    /// Builds the pair from a store: full year extent, rounded value extent.
    pub fn from_store(
        store: &SeriesStore,
        focus: ChartDimensions,
        context: ChartDimensions,
    ) -> ChartResult<Self> {
        Self::new(
            store.year_extent(),
            value_domain_for(store.value_extent()),
            focus,
            context,
        )
    }

    #[must_use]
    pub fn context_x(&self) -> LinearScale {
        self.context_x
    }

    #[must_use]
    pub fn context_y(&self) -> LinearScale {
        self.context_y
    }

    #[must_use]
    pub fn focus_x(&self) -> LinearScale {
        self.focus_x
    }

    #[must_use]
    pub fn focus_y(&self) -> LinearScale {
        self.focus_y
    }

    #[must_use]
    pub fn context_domain(&self) -> (f64, f64) {
        self.context_x.domain()
    }

    #[must_use]
    pub fn focus_domain(&self) -> (f64, f64) {
        self.focus_x.domain()
    }

    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        self.focus_y.domain()
    }

    /// Sets the focus year domain, ordered and clamped into the context domain.
    ///
    /// Returns the domain actually applied.
    pub fn set_focus_domain(&mut self, start: f64, end: f64) -> ChartResult<(f64, f64)> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ChartError::InvalidData(
                "focus domain must be finite".to_owned(),
            ));
        }

        let (context_start, context_end) = self.context_domain();
        let (low, high) = if end < start { (end, start) } else { (start, end) };
        let low = low.clamp(context_start, context_end);
        let high = high.clamp(context_start, context_end);
        self.focus_x = self.focus_x.with_domain(low, high)?;
        trace!(start = low, end = high, "focus domain updated");
        Ok((low, high))
    }

    /// Restores the focus year domain to the exact context domain.
    pub fn reset_focus_domain(&mut self) {
        let (start, end) = self.context_domain();
        self.focus_x = LinearScale::from_parts((start, end), self.focus_x.range());
    }

    /// Converts a context-chart pixel extent into years.
    ///
    /// Pixels are clamped to the context plot and ordered first.
    #[must_use]
    pub fn invert_context_extent(&self, x0: f64, x1: f64) -> (f64, f64) {
        let (range_start, range_end) = self.context_x.range();
        let (min_px, max_px) = if range_end < range_start {
            (range_end, range_start)
        } else {
            (range_start, range_end)
        };
        let (left, right) = if x1 < x0 { (x1, x0) } else { (x0, x1) };
        let left = left.clamp(min_px, max_px);
        let right = right.clamp(min_px, max_px);
        (self.context_x.invert(left), self.context_x.invert(right))
    }
}

/// Rounded value domain for the union of all values.
///
/// A flat extent is widened first so the scale keeps a usable span.
#[must_use]
pub fn value_domain_for(extent: (f64, f64)) -> (f64, f64) {
    let (min, max) = extent;
    let (min, max) = if min == max {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
        (min - pad, max + pad)
    } else {
        (min, max)
    };
    crate::core::scale::nice_domain(min, max, VALUE_DOMAIN_NICE_TICKS)
}

#[cfg(test)]
mod tests {
    use super::{ScalePair, value_domain_for};
    use crate::core::{ChartDimensions, Margins};

    fn pair() -> ScalePair {
        let margins = Margins::new(0.0, 0.0, 0.0, 0.0);
        ScalePair::new(
            (1960.0, 2020.0),
            (0.0, 8.0),
            ChartDimensions::new(600.0, 380.0, margins),
            ChartDimensions::new(600.0, 110.0, margins),
        )
        .expect("valid pair")
    }

    #[test]
    fn focus_domain_is_clamped_into_context() {
        let mut scales = pair();
        let applied = scales.set_focus_domain(2030.0, 1950.0).expect("domain");
        assert_eq!(applied, (1960.0, 2020.0));
    }

    #[test]
    fn context_extent_is_clamped_and_ordered() {
        let scales = pair();
        assert_eq!(scales.invert_context_extent(700.0, -20.0), (1960.0, 2020.0));
        assert_eq!(scales.invert_context_extent(150.0, 450.0), (1975.0, 2005.0));
    }

    #[test]
    fn flat_values_get_a_usable_span() {
        let (min, max) = value_domain_for((2.0, 2.0));
        assert!(min < 2.0 && max > 2.0);
    }

    #[test]
    fn value_domain_shared_by_both_charts() {
        let scales = pair();
        assert_eq!(scales.focus_y().domain(), scales.context_y().domain());
        assert_eq!(scales.focus_y().map(8.0), 0.0);
        assert_eq!(scales.context_y().map(0.0), 110.0);
    }
}
