use std::path::Path;

use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{Map, Value, json};

use crate::{
    feature::{Feature, FeatureKind, Geometry, Properties},
    state::RenderPass,
};
use super::{LoadError, error::read_file};

/// Read a GeoJSON FeatureCollection of city or CDP boundaries.
pub fn read_features(path: &Path, kind: FeatureKind) -> Result<Vec<Feature>, LoadError> {
    let bytes = read_file(path)?;
    parse_features(&bytes, kind, &path.display().to_string())
}

/// Parse a GeoJSON FeatureCollection. Features without a polygonal geometry are
/// skipped with a warning; malformed coordinates fail the whole load.
pub fn parse_features(bytes: &[u8], kind: FeatureKind, what: &str) -> Result<Vec<Feature>, LoadError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| LoadError::json(what, e))?;

    if value["type"].as_str() != Some("FeatureCollection") {
        return Err(LoadError::NotFeatureCollection { what: what.to_string() });
    }
    let entries = value["features"].as_array()
        .ok_or_else(|| LoadError::NotFeatureCollection { what: what.to_string() })?;

    let mut features = Vec::with_capacity(entries.len());
    let mut skipped = 0usize;
    for (index, entry) in entries.iter().enumerate() {
        let geometry = parse_geometry(&entry["geometry"])
            .map_err(|reason| LoadError::Geometry { what: what.to_string(), index, reason })?;
        let Some(geometry) = geometry else {
            skipped += 1;
            continue;
        };

        let empty = Map::new();
        let props = entry["properties"].as_object().unwrap_or(&empty);
        features.push(Feature::new(feature_name(props, kind), kind, geometry, Properties::from_json(props)));
    }

    if skipped > 0 {
        tracing::warn!(what, skipped, "[io::geojson] skipped features without polygon geometry");
    }
    tracing::info!(what, kind = %kind, count = features.len(), "[io::geojson] loaded features");
    Ok(features)
}

/// Display name: the tax-area city name for cities, the legal/statistical
/// area name for CDPs, falling back to generic name fields.
fn feature_name(props: &Map<String, Value>, kind: FeatureKind) -> String {
    let keys: &[&str] = match kind {
        FeatureKind::City => &["CDTFA_CITY", "NAME", "name"],
        FeatureKind::Cdp => &["NAMELSAD", "NAME", "name"],
    };
    keys.iter()
        .filter_map(|key| props.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|name| !name.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Ok(None) for null and non-polygonal geometry types.
fn parse_geometry(value: &Value) -> Result<Option<Geometry>, String> {
    let coords = || value["coordinates"].as_array()
        .ok_or_else(|| "missing coordinates array".to_string());

    match value["type"].as_str() {
        Some("Polygon") => Ok(Some(Geometry::Polygon(parse_polygon(coords()?)?))),
        Some("MultiPolygon") => {
            let polygons = coords()?.iter()
                .map(|polygon| polygon.as_array()
                    .ok_or_else(|| "polygon is not an array".to_string())
                    .and_then(|rings| parse_polygon(rings)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(Geometry::MultiPolygon(MultiPolygon(polygons))))
        }
        _ => Ok(None),
    }
}

/// Parse `[exterior, hole, hole, ...]`.
fn parse_polygon(rings: &[Value]) -> Result<Polygon<f64>, String> {
    let mut rings = rings.iter().map(|ring| ring.as_array()
        .ok_or_else(|| "ring is not an array".to_string())
        .and_then(|coords| parse_ring(coords)));

    let exterior = rings.next().ok_or_else(|| "polygon has no exterior ring".to_string())??;
    let interiors = rings.collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Parse `[[lon, lat], ...]`, closing the ring if the source left it open.
fn parse_ring(coords: &[Value]) -> Result<LineString<f64>, String> {
    let mut points = Vec::with_capacity(coords.len() + 1);

    for pair in coords {
        let pair = pair.as_array()
            .filter(|pair| pair.len() >= 2)
            .ok_or_else(|| "coordinate is not a [lon, lat] pair".to_string())?;
        let x = pair[0].as_f64().ok_or_else(|| "longitude must be a number".to_string())?;
        let y = pair[1].as_f64().ok_or_else(|| "latitude must be a number".to_string())?;
        points.push(Coord { x, y });
    }

    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last { points.push(first) }
    }

    Ok(LineString(points))
}

/// Export a render pass as a GeoJSON FeatureCollection whose properties carry
/// the computed style, so any web map library can draw it as-is.
pub fn to_styled_geojson(pass: &RenderPass<'_>) -> Value {
    let features: Vec<Value> = pass.features.iter().map(|rendered| {
        let style = &rendered.style;
        json!({
            "type": "Feature",
            "id": format!("{}-{}", rendered.feature_ref.kind.label().to_ascii_lowercase(), rendered.feature_ref.index),
            "geometry": geometry_to_geojson(&rendered.feature.geometry),
            "properties": {
                "name": rendered.feature.name,
                "kind": rendered.feature.kind.label(),
                "metric": pass.metric.id(),
                "value": rendered.value,
                "bucket": rendered.bucket,
                "selected": rendered.selected,
                "fill": style.fill.to_string(),
                "fill-opacity": style.fill_opacity,
                "stroke": style.stroke.to_string(),
                "stroke-width": style.stroke_width,
                "stroke-opacity": style.stroke_opacity,
            },
        })
    }).collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn geometry_to_geojson(geometry: &Geometry) -> Value {
    fn ring(ls: &LineString<f64>) -> Vec<[f64; 2]> {
        ls.coords().map(|c| [c.x, c.y]).collect()
    }

    fn polygon(polygon: &Polygon<f64>) -> Vec<Vec<[f64; 2]>> {
        std::iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .map(ring)
            .collect()
    }

    match geometry {
        Geometry::Polygon(p) => json!({ "type": "Polygon", "coordinates": polygon(p) }),
        Geometry::MultiPolygon(mp) => json!({
            "type": "MultiPolygon",
            "coordinates": mp.0.iter().map(polygon).collect::<Vec<_>>(),
        }),
    }
}
