//! Map configuration, loadable from TOML.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};

use crate::Metric;

/// Region of interest in lon/lat degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl RegionBounds {
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord { x: self.min_lon, y: self.min_lat },
            Coord { x: self.max_lon, y: self.max_lat },
        )
    }
}

impl Default for RegionBounds {
    /// Contra Costa County.
    fn default() -> Self {
        Self { min_lon: -122.44, min_lat: 37.71, max_lon: -121.53, max_lat: 38.10 }
    }
}

/// Static image output settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    pub width: f64,
    pub margin: f64,
    pub font_size: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self { width: 1200.0, margin: 10.0, font_size: 11.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub region: RegionBounds,
    /// Labels render only at or above this zoom level.
    pub min_label_zoom: f64,
    /// Initial zoom level.
    pub zoom: f64,
    /// Initially active metric.
    pub metric: Metric,
    pub show_cities: bool,
    pub show_cdps: bool,
    pub svg: SvgConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            region: RegionBounds::default(),
            min_label_zoom: 11.0,
            zoom: 10.0,
            metric: Metric::default(),
            show_cities: true,
            show_cdps: true,
            svg: SvgConfig::default(),
        }
    }
}

impl MapConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("[config] Invalid map configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("[config] In {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = MapConfig::from_toml_str(r#"
            metric = "asian"
            min_label_zoom = 12.5

            [svg]
            width = 800.0
        "#).unwrap();

        assert_eq!(config.metric, Metric::Asian);
        assert_eq!(config.min_label_zoom, 12.5);
        assert_eq!(config.svg.width, 800.0);
        assert_eq!(config.svg.margin, 10.0);
        assert_eq!(config.region, RegionBounds::default());
        assert!(config.show_cities && config.show_cdps);
    }

    #[test]
    fn region_table_is_read() {
        let config = MapConfig::from_toml_str(r#"
            [region]
            min_lon = 0.0
            min_lat = 1.0
            max_lon = 2.0
            max_lat = 3.0
        "#).unwrap();
        let rect = config.region.to_rect();
        assert_eq!((rect.min().x, rect.min().y, rect.max().x, rect.max().y), (0.0, 1.0, 2.0, 3.0));
    }

    #[test]
    fn default_region_covers_contra_costa() {
        let rect = RegionBounds::default().to_rect();
        let inside = |lon: f64, lat: f64| {
            lon >= rect.min().x && lon <= rect.max().x && lat >= rect.min().y && lat <= rect.max().y
        };
        assert!(inside(-122.03, 37.97)); // Concord
        assert!(inside(-122.06, 37.90)); // Walnut Creek
        assert!(inside(-122.35, 37.94)); // Richmond
        assert!(inside(-121.80, 38.00)); // Antioch
        assert!(!inside(-118.25, 34.05)); // Los Angeles
    }

    #[test]
    fn metric_aliases_match_command_line() {
        for (text, metric) in [
            ("foreign_born", Metric::ForeignBorn),
            ("foreign", Metric::ForeignBorn),
            ("nonwhite", Metric::NonWhite),
            ("hispanic", Metric::Latino),
            ("hispanic-latino", Metric::Latino),
        ] {
            let config = MapConfig::from_toml_str(&format!("metric = \"{text}\"")).unwrap();
            assert_eq!(config.metric, metric, "{text}");
            assert_eq!(text.parse::<Metric>().unwrap(), metric, "{text}");
        }
    }

    #[test]
    fn unknown_metric_is_rejected() {
        assert!(MapConfig::from_toml_str(r#"metric = "income""#).is_err());
    }
}
