//! IO for the map's input files and its rendered outputs.
//!
//! - `geojson` - feature collections in, styled feature collection out
//! - `json` - label location overrides and the county summary record
//! - `svg` - static image of a render pass
//! - `fs` - write-then-rename output files

mod error;
mod fs;
mod geojson;
mod json;
mod svg;

pub use error::LoadError;
pub use fs::{PendingWrite, finalize_write, open_for_write};
pub use geojson::{parse_features, read_features, to_styled_geojson};
pub use json::{LabelLocations, parse_locations, parse_summary, read_locations, read_summary};
pub use svg::{render_svg, render_svg_string};

use std::path::PathBuf;

use crate::{feature::FeatureKind, state::MapData};

/// Locations of the input files. Only the city collection is required.
#[derive(Debug, Clone, Default)]
pub struct DataPaths {
    pub cities: PathBuf,
    pub cdps: Option<PathBuf>,
    pub locations: Option<PathBuf>,
    pub summary: Option<PathBuf>,
}

/// Load every input before the first render. Any failure aborts the whole load.
pub fn load_map_data(paths: &DataPaths) -> Result<MapData, LoadError> {
    let cities = read_features(&paths.cities, FeatureKind::City)?;
    let cdps = match &paths.cdps {
        Some(path) => read_features(path, FeatureKind::Cdp)?,
        None => Vec::new(),
    };
    let locations = match &paths.locations {
        Some(path) => read_locations(path)?,
        None => LabelLocations::new(),
    };
    let summary = paths.summary.as_deref().map(read_summary).transpose()?;

    Ok(MapData { cities, cdps, locations, summary })
}
