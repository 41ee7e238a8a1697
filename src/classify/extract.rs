use crate::{Metric, feature::Properties};

/// Percentage of `population` represented by `count`, or 0 when the
/// population is not positive. Never NaN, never negative.
#[inline]
pub fn percent_of(count: f64, population: f64) -> f64 {
    if population > 0.0 && count.is_finite() {
        (count * 100.0 / population).max(0.0)
    } else {
        0.0
    }
}

/// Derive the percentage `metric` measures for a feature. Total: malformed or
/// missing inputs yield 0 instead of an error.
///
/// Foreign-born reads only the precomputed percentage. Hispanic/Latino prefers
/// its precomputed percentage and falls back to the count. All other metrics
/// are always computed from counts.
pub fn extract_value(props: &Properties, metric: Metric) -> f64 {
    let population = props.population().unwrap_or(0.0);
    let count = |field: Option<f64>| percent_of(field.unwrap_or(0.0), population);

    match metric {
        Metric::ForeignBorn => precomputed(props.foreign_born_pct()).unwrap_or(0.0),
        Metric::Latino => precomputed(props.latino_pct()).unwrap_or_else(|| count(props.latino())),
        Metric::White => count(props.white()),
        Metric::Black => count(props.black()),
        Metric::Asian => count(props.asian()),
        Metric::NonWhite => {
            let white = props.white().unwrap_or(0.0);
            percent_of((population - white).max(0.0), population)
        }
    }
}

#[inline]
fn precomputed(pct: Option<f64>) -> Option<f64> {
    pct.filter(|v| *v >= 0.0)
}
