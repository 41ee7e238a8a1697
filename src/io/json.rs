use std::{collections::HashMap, path::Path};

use geo::Point;
use serde_json::{Map, Value};

use crate::{feature::RawValue, map::CountySummary};
use super::{LoadError, error::read_file};

/// Exact label anchors keyed by display name, consulted before centroids.
pub type LabelLocations = HashMap<String, Point<f64>>;

pub fn read_locations(path: &Path) -> Result<LabelLocations, LoadError> {
    let bytes = read_file(path)?;
    parse_locations(&bytes, &path.display().to_string())
}

/// Parse `{ "Name": [lon, lat], "Other": { "lon": .., "lat": .. } }`.
/// Entries that are not a coordinate are skipped with a warning.
pub fn parse_locations(bytes: &[u8], what: &str) -> Result<LabelLocations, LoadError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| LoadError::json(what, e))?;
    let entries = value.as_object().ok_or_else(|| LoadError::Schema {
        what: what.to_string(),
        reason: "expected an object keyed by place name".to_string(),
    })?;

    let mut locations = LabelLocations::with_capacity(entries.len());
    for (name, entry) in entries {
        match location(entry) {
            Some(point) => { locations.insert(name.trim().to_string(), point); }
            None => tracing::warn!(what, name = name.as_str(), "[io::json] ignoring malformed label location"),
        }
    }

    tracing::debug!(what, count = locations.len(), "[io::json] loaded label locations");
    Ok(locations)
}

fn location(entry: &Value) -> Option<Point<f64>> {
    let (lon, lat) = match entry {
        Value::Array(pair) if pair.len() == 2 => (pair[0].as_f64()?, pair[1].as_f64()?),
        Value::Object(obj) => {
            let lon = obj.get("lon").or_else(|| obj.get("lng")).and_then(Value::as_f64)?;
            (lon, obj.get("lat").and_then(Value::as_f64)?)
        }
        _ => return None,
    };
    (lon.is_finite() && lat.is_finite()).then(|| Point::new(lon, lat))
}

pub fn read_summary(path: &Path) -> Result<CountySummary, LoadError> {
    let bytes = read_file(path)?;
    parse_summary(&bytes, &path.display().to_string())
}

/// Parse the county summary record. Values may be numbers or formatted text.
pub fn parse_summary(bytes: &[u8], what: &str) -> Result<CountySummary, LoadError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| LoadError::json(what, e))?;
    let obj = value.as_object().ok_or_else(|| LoadError::Schema {
        what: what.to_string(),
        reason: "expected a summary object".to_string(),
    })?;

    Ok(CountySummary {
        name: obj.get("name")
            .or_else(|| obj.get("County"))
            .and_then(Value::as_str)
            .unwrap_or("County")
            .to_string(),
        population: number(obj, &["population", "Population"]),
        latino_pct: number(obj, &["latino_pct", "Latino Percent"]),
        white_pct: number(obj, &["white_pct", "White Percent"]),
        black_pct: number(obj, &["black_pct", "Black Percent"]),
        asian_pct: number(obj, &["asian_pct", "Asian Percent"]),
        other_pct: number(obj, &["other_pct", "Other Percent"]),
        foreign_born_pct: number(obj, &["foreign_born_pct", "Foreign Born (%)"]),
    })
}

fn number(obj: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .filter_map(RawValue::from_json)
        .find_map(|raw| raw.as_number())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_accept_pairs_and_objects() {
        let bytes = br#"{
            "Richmond": [-122.35, 37.94],
            " Orinda ": { "lat": 37.88, "lng": -122.18 },
            "Broken": [1.0],
            "Text": "nowhere"
        }"#;
        let locations = parse_locations(bytes, "locations").unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations["Richmond"], Point::new(-122.35, 37.94));
        assert_eq!(locations["Orinda"], Point::new(-122.18, 37.88));
    }

    #[test]
    fn locations_must_be_an_object() {
        assert!(matches!(parse_locations(b"[]", "locations"), Err(LoadError::Schema { .. })));
    }

    #[test]
    fn summary_parses_formatted_values() {
        let bytes = br#"{
            "name": "Contra Costa County",
            "Population": "9,829,544",
            "latino_pct": "48.6%",
            "white_pct": 25.1,
            "black_pct": null,
            "foreign_born_pct": "33.5"
        }"#;
        let summary = parse_summary(bytes, "summary").unwrap();
        assert_eq!(summary.name, "Contra Costa County");
        assert_eq!(summary.population, Some(9_829_544.0));
        assert_eq!(summary.latino_pct, Some(48.6));
        assert_eq!(summary.white_pct, Some(25.1));
        assert_eq!(summary.black_pct, None);
        assert_eq!(summary.asian_pct, None);
        assert_eq!(summary.foreign_born_pct, Some(33.5));
    }
}
