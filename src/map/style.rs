use crate::{
    Metric,
    classify::{Breaks, Rgb, classify, extract_value},
    feature::{Feature, FeatureKind},
};

/// Visual style of one feature polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStyle {
    pub fill: Rgb,
    pub fill_opacity: f64,
    pub stroke: Rgb,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
}

impl FeatureStyle {
    /// Default look for a feature of `kind`. City outlines are white, CDP outlines gray.
    pub fn base(kind: FeatureKind, fill: Rgb) -> Self {
        let (stroke, stroke_width) = match kind {
            FeatureKind::City => (Rgb::hex(0xffffff), 1.0),
            FeatureKind::Cdp => (Rgb::hex(0x666666), 0.8),
        };
        Self { fill, fill_opacity: 0.7, stroke, stroke_width, stroke_opacity: 0.8 }
    }

    /// Emphasized look for the selected feature.
    pub fn highlighted(self) -> Self {
        Self {
            stroke: Rgb::hex(0x111827),
            stroke_width: 3.0,
            stroke_opacity: 1.0,
            fill_opacity: 0.85,
            ..self
        }
    }
}

/// Default style as a pure function of the feature, the active metric, and the breaks.
pub fn feature_style(feature: &Feature, metric: Metric, breaks: &Breaks) -> FeatureStyle {
    let value = extract_value(&feature.properties, metric);
    FeatureStyle::base(feature.kind, classify(Some(value), breaks, metric.palette()))
}
