use std::fmt;

use crate::{
    Metric,
    classify::{extract_value, percent_of},
    feature::Feature,
};

/// County-wide figures shown when nothing is selected. Percentages are 0-100.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountySummary {
    pub name: String,
    pub population: Option<f64>,
    pub latino_pct: Option<f64>,
    pub white_pct: Option<f64>,
    pub black_pct: Option<f64>,
    pub asian_pct: Option<f64>,
    pub other_pct: Option<f64>,
    pub foreign_born_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelRow {
    pub label: &'static str,
    pub count: Option<f64>,
    pub percent: f64,
}

/// Metric-independent demographic breakdown for one place.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub title: String,
    pub kind: &'static str,
    pub population: Option<f64>,
    pub households: Option<f64>,
    pub rows: Vec<PanelRow>,
    pub foreign_born_pct: f64,
    /// Foreign-born and native-born head counts, when the source carries them.
    pub foreign_born: Option<f64>,
    pub native_born: Option<f64>,
}

impl DetailPanel {
    pub fn for_feature(feature: &Feature) -> Self {
        let props = &feature.properties;
        let population = props.population();
        let row = |label, count: Option<f64>, metric: Metric| PanelRow {
            label,
            count,
            percent: extract_value(props, metric),
        };

        let rows = vec![
            row("Hispanic/Latino", props.latino(), Metric::Latino),
            row("White", props.white(), Metric::White),
            row("Black", props.black(), Metric::Black),
            row("Asian", props.asian(), Metric::Asian),
            PanelRow {
                label: "Other",
                count: props.other(),
                percent: percent_of(props.other().unwrap_or(0.0), population.unwrap_or(0.0)),
            },
        ];

        Self {
            title: feature.name.clone(),
            kind: feature.kind.label(),
            population,
            households: props.households(),
            rows,
            foreign_born_pct: extract_value(props, Metric::ForeignBorn),
            foreign_born: props.foreign(),
            native_born: props.native(),
        }
    }

    pub fn for_summary(summary: &CountySummary) -> Self {
        let row = |label, pct: Option<f64>| PanelRow {
            label,
            count: None,
            percent: pct.filter(|v| *v >= 0.0).unwrap_or(0.0),
        };

        Self {
            title: summary.name.clone(),
            kind: "County",
            population: summary.population,
            households: None,
            rows: vec![
                row("Hispanic/Latino", summary.latino_pct),
                row("White", summary.white_pct),
                row("Black", summary.black_pct),
                row("Asian", summary.asian_pct),
                row("Other", summary.other_pct),
            ],
            foreign_born_pct: summary.foreign_born_pct.filter(|v| *v >= 0.0).unwrap_or(0.0),
            foreign_born: None,
            native_born: None,
        }
    }
}

impl fmt::Display for DetailPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.title, self.kind)?;
        match self.population {
            Some(population) => writeln!(f, "  Population: {}", group_thousands(population))?,
            None => writeln!(f, "  Population: n/a")?,
        }
        if let Some(households) = self.households {
            writeln!(f, "  Households: {}", group_thousands(households))?;
        }
        for row in &self.rows {
            match row.count {
                Some(count) => writeln!(f, "  {:<16} {:>10}  {:5.1}%", row.label, group_thousands(count), row.percent)?,
                None => writeln!(f, "  {:<16} {:>10}  {:5.1}%", row.label, "", row.percent)?,
            }
        }
        match self.foreign_born {
            Some(count) => writeln!(f, "  Foreign born: {:.1}% ({})", self.foreign_born_pct, group_thousands(count))?,
            None => writeln!(f, "  Foreign born: {:.1}%", self.foreign_born_pct)?,
        }
        if let Some(native) = self.native_born {
            writeln!(f, "  Native born: {}", group_thousands(native))?;
        }
        Ok(())
    }
}

/// Render a count as `12,345`.
fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 { out.push('-') }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(',') }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use geo::{Coord, LineString, Polygon};

    use crate::feature::{FeatureKind, Properties};

    use super::*;

    fn feature() -> Feature {
        let ring: LineString<f64> = vec![
            Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 }, Coord { x: 0.0, y: 1.0 }, Coord { x: 0.0, y: 0.0 },
        ].into();
        let properties = Properties {
            population: Some("12,000".into()),
            households: Some(4000.0.into()),
            latino: Some(6000.0.into()),
            latino_pct: Some("40".into()),
            white: Some(3000.0.into()),
            black: Some("600".into()),
            asian: Some(1800.0.into()),
            other: Some(600.0.into()),
            foreign_born_pct: Some("33.3%".into()),
            foreign: Some("4,000".into()),
            native: Some(8000.0.into()),
            ..Properties::default()
        };
        Feature::new("Alhambra", FeatureKind::City, Polygon::new(ring, vec![]).into(), properties)
    }

    #[test]
    fn feature_panel_lists_every_group() {
        let panel = DetailPanel::for_feature(&feature());
        assert_eq!(panel.title, "Alhambra");
        assert_eq!(panel.kind, "City");
        assert_eq!(panel.population, Some(12000.0));
        let percents: Vec<f64> = panel.rows.iter().map(|row| row.percent).collect();
        assert_eq!(percents, vec![40.0, 25.0, 5.0, 15.0, 5.0]);
        assert_eq!(panel.foreign_born_pct, 33.3);
        assert_eq!(panel.foreign_born, Some(4000.0));
        assert_eq!(panel.native_born, Some(8000.0));
    }

    #[test]
    fn nativity_counts_are_optional() {
        let mut feature = feature();
        feature.properties.foreign = None;
        feature.properties.native = Some("n/a".into());
        let panel = DetailPanel::for_feature(&feature);
        assert_eq!((panel.foreign_born, panel.native_born), (None, None));

        let text = panel.to_string();
        assert!(text.contains("Foreign born: 33.3%\n"));
        assert!(!text.contains("Native born"));
    }

    #[test]
    fn panel_text_report() {
        let text = DetailPanel::for_feature(&feature()).to_string();
        assert!(text.starts_with("Alhambra (City)\n"));
        assert!(text.contains("Population: 12,000"));
        assert!(text.contains("Households: 4,000"));
        assert!(text.contains("Foreign born: 33.3% (4,000)"));
        assert!(text.contains("Native born: 8,000"));
    }

    #[test]
    fn summary_panel_clamps_missing_values() {
        let summary = CountySummary {
            name: "Contra Costa County".into(),
            population: Some(1_165_927.0),
            latino_pct: Some(48.6),
            white_pct: None,
            foreign_born_pct: Some(-1.0),
            ..CountySummary::default()
        };
        let panel = DetailPanel::for_summary(&summary);
        assert_eq!(panel.kind, "County");
        assert_eq!(panel.rows[0].percent, 48.6);
        assert_eq!(panel.rows[1].percent, 0.0);
        assert_eq!(panel.foreign_born_pct, 0.0);
        assert_eq!((panel.foreign_born, panel.native_born), (None, None));
        assert!(panel.to_string().contains("1,165,927"));
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1234567.4), "1,234,567");
    }
}
