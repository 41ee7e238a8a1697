/// Ordered class thresholds: `bucket_count() + 1` non-decreasing values from
/// the minimum to the maximum of the classified data.
#[derive(Debug, Clone, PartialEq)]
pub struct Breaks(Vec<f64>);

impl Breaks {
    #[inline] pub fn as_slice(&self) -> &[f64] { &self.0 }

    #[inline] pub fn len(&self) -> usize { self.0.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Number of color classes these thresholds delimit.
    #[inline] pub fn bucket_count(&self) -> usize { self.0.len().saturating_sub(1) }

    #[inline] pub fn min(&self) -> f64 { self.0.first().copied().unwrap_or(0.0) }

    #[inline] pub fn max(&self) -> f64 { self.0.last().copied().unwrap_or(0.0) }

    /// True when every valid value was identical (including the empty case).
    #[inline] pub fn is_degenerate(&self) -> bool { self.min() == self.max() }

    /// `(lower, upper)` for each bucket, lowest first.
    pub fn bounds(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }
}

impl From<Vec<f64>> for Breaks {
    /// Wrap precomputed thresholds, sorting them so the ordering invariant holds.
    fn from(mut thresholds: Vec<f64>) -> Self {
        thresholds.sort_by(f64::total_cmp);
        Self(thresholds)
    }
}

/// Quantile breaks over `values` for `buckets` classes.
///
/// Only finite, non-negative values participate. With no valid value every
/// threshold is zero; with one, every threshold equals it. Otherwise interior
/// threshold `i` is the sorted value at index `floor(len * i / buckets)`.
/// A bucket count of zero is treated as one.
pub fn compute_breaks(values: &[f64], buckets: usize) -> Breaks {
    let buckets = buckets.max(1);

    let mut sorted: Vec<f64> = values.iter()
        .copied()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .collect();
    sorted.sort_by(f64::total_cmp);

    let (min, max) = match (sorted.first(), sorted.last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Breaks(vec![0.0; buckets + 1]),
    };

    let len = sorted.len();
    let mut breaks = Vec::with_capacity(buckets + 1);
    breaks.push(min);
    breaks.extend((1..buckets).map(|i| sorted[(len * i / buckets).min(len - 1)]));
    breaks.push(max);

    Breaks(breaks)
}
