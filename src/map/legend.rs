use std::fmt;

use crate::{
    Metric,
    classify::{Breaks, NO_DATA_COLOR, Palette, Rgb},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub color: Rgb,
    pub lower: f64,
    pub upper: f64,
}

impl LegendEntry {
    pub fn label(&self) -> String {
        if self.lower == self.upper {
            format!("{:.1}%", self.lower)
        } else {
            format!("{:.1}% - {:.1}%", self.lower, self.upper)
        }
    }
}

/// Current palette paired with the bucket ranges it colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: &'static str,
    pub entries: Vec<LegendEntry>,
    pub no_data: Rgb,
}

impl Legend {
    /// One entry per bucket; a degenerate break set collapses to a single entry.
    pub fn new(metric: Metric, breaks: &Breaks, palette: &Palette) -> Self {
        let entries = if breaks.is_degenerate() {
            palette.color(0)
                .map(|color| LegendEntry { color, lower: breaks.min(), upper: breaks.max() })
                .into_iter()
                .collect()
        } else {
            breaks.bounds()
                .enumerate()
                .filter_map(|(i, (lower, upper))| palette.color(i).map(|color| LegendEntry { color, lower, upper }))
                .collect()
        };

        Self { title: metric.label(), entries, no_data: NO_DATA_COLOR }
    }
}

impl fmt::Display for Legend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (%)", self.title)?;
        for entry in &self.entries {
            writeln!(f, "  {}  {}", entry.color, entry.label())?;
        }
        writeln!(f, "  {}  No data", self.no_data)
    }
}
