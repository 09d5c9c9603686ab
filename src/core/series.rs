use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::YearValue;
use crate::error::{ChartError, ChartResult};

/// One entity's time series: ordered by year, one point per year, finite values only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySeries {
    name: String,
    code: String,
    points: Vec<YearValue>,
}

impl EntitySeries {
    /// Builds a series from raw observations.
    ///
    /// Non-finite values are dropped, points are sorted by year and a repeated
    /// year keeps its latest observation. A series with no remaining point is
    /// rejected.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        points: Vec<YearValue>,
    ) -> ChartResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ChartError::InvalidData(
                "series name must not be empty".to_owned(),
            ));
        }

        let points = canonicalize_points(&name, points);
        if points.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "series `{name}` has no finite values"
            )));
        }

        Ok(Self {
            name,
            code: code.into(),
            points,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn points(&self) -> &[YearValue] {
        &self.points
    }

    /// Points whose year lies inside `[start, end]`, inclusive.
    #[must_use]
    pub fn visible_points(&self, domain: (f64, f64)) -> &[YearValue] {
        let (start, end) = if domain.1 < domain.0 {
            (domain.1, domain.0)
        } else {
            domain
        };
        let first = self
            .points
            .partition_point(|point| f64::from(point.year) < start);
        let last = self
            .points
            .partition_point(|point| f64::from(point.year) <= end);
        if first >= last {
            return &[];
        }
        &self.points[first..last]
    }

    #[must_use]
    pub fn last_visible_point(&self, domain: (f64, f64)) -> Option<YearValue> {
        self.visible_points(domain).last().copied()
    }

    #[must_use]
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |extent, point| match extent {
            None => Some((point.value, point.value)),
            Some((min, max)) => Some((min.min(point.value), max.max(point.value))),
        })
    }
}

fn canonicalize_points(name: &str, mut points: Vec<YearValue>) -> Vec<YearValue> {
    let original_len = points.len();
    points.retain(|point| point.value.is_finite());
    points.sort_by_key(|point| point.year);

    let mut deduped: Vec<YearValue> = Vec::with_capacity(points.len());
    let mut duplicate_count = 0_usize;
    for point in points {
        if let Some(last) = deduped.last_mut() {
            if last.year == point.year {
                *last = point;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(point);
    }

    let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
    if duplicate_count > 0 {
        warn!(
            series = name,
            filtered_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized series points"
        );
    }
    deduped
}
