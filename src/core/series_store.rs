use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::EntitySeries;
use crate::error::{ChartError, ChartResult};

/// Immutable collection of entity series keyed by display name.
///
/// Iteration follows input order, which is also the initial draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStore {
    series: IndexMap<String, EntitySeries>,
    years: Vec<i32>,
}

impl SeriesStore {
    /// Builds the store from the dataset's year columns and its series.
    ///
    /// The year set is the union of `years` and every point's year. When two
    /// series share a name, the first one is kept.
    pub fn new(years: Vec<i32>, series: Vec<EntitySeries>) -> ChartResult<Self> {
        let mut by_name: IndexMap<String, EntitySeries> = IndexMap::with_capacity(series.len());
        for entry in series {
            if by_name.contains_key(entry.name()) {
                warn!(series = entry.name(), "dropping series with duplicate name");
                continue;
            }
            by_name.insert(entry.name().to_owned(), entry);
        }

        if by_name.is_empty() {
            return Err(ChartError::EmptyDataset(
                "no series with at least one valid value".to_owned(),
            ));
        }

        let mut all_years = years;
        all_years.extend(
            by_name
                .values()
                .flat_map(|entry| entry.points().iter().map(|point| point.year)),
        );
        all_years.sort_unstable();
        all_years.dedup();

        debug!(
            series_count = by_name.len(),
            year_count = all_years.len(),
            "built series store"
        );
        Ok(Self {
            series: by_name,
            years: all_years,
        })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EntitySeries> {
        self.series.get(name)
    }

    /// Series at a dataset-order position.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&EntitySeries> {
        self.series.get_index(index).map(|(_, series)| series)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.series.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntitySeries> {
        self.series.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Sorted, unique years present in the dataset.
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Position of `year` in the year set, used to detect holes between points.
    #[must_use]
    pub fn year_index(&self, year: i32) -> Option<usize> {
        self.years.binary_search(&year).ok()
    }

    #[must_use]
    pub fn year_extent(&self) -> (f64, f64) {
        match (self.years.first(), self.years.last()) {
            (Some(first), Some(last)) => (f64::from(*first), f64::from(*last)),
            _ => (0.0, 0.0),
        }
    }

    /// Min/max over every stored value.
    #[must_use]
    pub fn value_extent(&self) -> (f64, f64) {
        self.series
            .values()
            .filter_map(EntitySeries::value_extent)
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
            .unwrap_or((0.0, 0.0))
    }
}
