//! Presentation records derived from classified features: styles, legend, detail panel.

mod legend;
mod panel;
mod style;

pub use legend::{Legend, LegendEntry};
pub use panel::{CountySummary, DetailPanel, PanelRow};
pub use style::{FeatureStyle, feature_style};
