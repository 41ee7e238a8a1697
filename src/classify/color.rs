//! Colors and value-to-bucket mapping.

use std::fmt;

use super::{Breaks, NO_DATA_COLOR, Palette};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Bucket index for `value`, or None when the value is missing or NaN.
///
/// Upper bucket edges are inclusive, so a value equal to a threshold lands in
/// the lower of the two adjoining buckets. Values above the top edge land in
/// the last bucket. When every break is equal, the constant itself (and zero)
/// map to the first bucket and anything else to the last.
pub fn bucket_index(value: Option<f64>, breaks: &Breaks) -> Option<usize> {
    let value = value.filter(|v| !v.is_nan())?;
    let buckets = breaks.bucket_count();
    if buckets == 0 { return None }

    if breaks.is_degenerate() {
        let low = value == breaks.min() || value == 0.0;
        return Some(if low { 0 } else { buckets - 1 });
    }

    let edges = breaks.as_slice();
    Some((0..buckets).find(|&i| value <= edges[i + 1]).unwrap_or(buckets - 1))
}

/// Palette color for `value`, or the reserved no-data color.
pub fn classify(value: Option<f64>, breaks: &Breaks, palette: &Palette) -> Rgb {
    bucket_index(value, breaks)
        .and_then(|i| palette.color(i))
        .unwrap_or(NO_DATA_COLOR)
}
