use crate::core::{LinearScale, scale};

/// Year step for an integer span of the visible domain.
#[must_use]
pub fn year_tick_step(span: i64) -> i64 {
    match span {
        i64::MIN..=12 => 1,
        13..=28 => 2,
        29..=60 => 5,
        _ => 10,
    }
}

/// Plans integer year ticks for a continuous domain.
///
/// Ticks are multiples of a span-dependent step, restricted to years that
/// actually exist in `years` (sorted, unique). The rounded domain boundaries
/// are always included when they are dataset years.
#[must_use]
pub fn plan_year_ticks(domain: (f64, f64), years: &[i32]) -> Vec<i32> {
    let (a, b) = domain;
    if !a.is_finite() || !b.is_finite() {
        return Vec::new();
    }
    let (a, b) = if a <= b { (a, b) } else { (b, a) };

    let mut start = a.ceil() as i64;
    let mut end = b.floor() as i64;
    if start > end {
        // Domain narrower than one year: collapse onto its rounded midpoint.
        let mid = ((a + b) / 2.0 + 0.5).floor() as i64;
        start = mid;
        end = mid;
    }

    let span = end.saturating_sub(start).max(1);
    let step = year_tick_step(span);
    let is_dataset_year = |year: i64| {
        i32::try_from(year)
            .map(|year| years.binary_search(&year).is_ok())
            .unwrap_or(false)
    };

    let lo = years.partition_point(|year| i64::from(*year) < start);
    let hi = years.partition_point(|year| i64::from(*year) <= end);
    let visible = years.get(lo..hi).unwrap_or_default();
    let mut ticks: Vec<i32> = visible
        .iter()
        .copied()
        .filter(|year| i64::from(*year).rem_euclid(step) == 0)
        .collect();

    for boundary in [start, end] {
        if is_dataset_year(boundary) {
            if let Ok(year) = i32::try_from(boundary) {
                ticks.push(year);
            }
        }
    }

    ticks.sort_unstable();
    ticks.dedup();
    ticks
}

/// Value ticks with labels formatted to the precision of the tick step.
#[must_use]
pub fn value_tick_labels(scale: LinearScale, count: usize) -> Vec<(f64, String)> {
    let (start, end) = scale.domain();
    let precision = scale::fixed_precision_for_step(scale::tick_step(start, end, count));
    scale
        .ticks(count)
        .into_iter()
        .map(|value| (value, format!("{value:.precision$}")))
        .collect()
}
