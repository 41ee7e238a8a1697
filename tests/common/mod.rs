// Shared fixtures: small square features around central Contra Costa County.
#![allow(dead_code)]

use demomap::{Feature, FeatureKind, MapConfig, MapData, parse_features};
use serde_json::{Value, json};

/// A unit-ish square at (lon, lat) with the given properties.
pub fn square(lon: f64, lat: f64, properties: Value) -> Value {
    let d = 0.02;
    json!({
        "type": "Feature",
        "properties": properties,
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[lon, lat], [lon + d, lat], [lon + d, lat + d], [lon, lat + d], [lon, lat]]]
        }
    })
}

pub fn collection(features: Vec<Value>) -> Vec<u8> {
    serde_json::to_vec(&json!({ "type": "FeatureCollection", "features": features })).unwrap()
}

pub fn parse(kind: FeatureKind, features: Vec<Value>) -> Vec<Feature> {
    parse_features(&collection(features), kind, "fixture").unwrap()
}

pub fn cities() -> Vec<Feature> {
    parse(FeatureKind::City, vec![
        square(-122.03, 37.97, json!({
            "CDTFA_CITY": "Concord", "Population": 100, "White": 80, "Latino": 10,
            "Asian": "5", "Black": 5, "Foreign Born (%)": "40%"
        })),
        square(-122.06, 37.90, json!({
            "CDTFA_CITY": "Walnut Creek", "Population": "50", "White": "10", "Latino": 30,
            "Asian": 5, "Black": 5, "Foreign Born (%)": 10.0
        })),
        // outside the region
        square(-118.25, 34.05, json!({ "CDTFA_CITY": "Los Angeles", "Population": 800000, "White": 1 })),
        // no data
        square(-122.12, 37.89, json!({ "CDTFA_CITY": "Lafayette", "Population": null })),
    ])
}

pub fn cdps() -> Vec<Feature> {
    parse(FeatureKind::Cdp, vec![
        square(-122.03, 37.85, json!({
            "NAMELSAD": "Alamo CDP", "Population": "42,000", "White": "21,000",
            "Latino Percent": "30.0", "Latino": 100, "Foreign Born (%)": "15.5",
            "Foreign Born - Total Pop": "6,510", "Native": "35,490"
        })),
        square(-121.96, 38.02, json!({
            "NAMELSAD": "Bay Point CDP", "Population": 20000, "White": 2000,
            "Latino": 17000, "Foreign Born (%)": null
        })),
    ])
}

pub fn data() -> MapData {
    MapData { cities: cities(), cdps: cdps(), ..MapData::default() }
}

pub fn config() -> MapConfig {
    MapConfig::default()
}
