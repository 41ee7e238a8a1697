pub mod breaks;
pub mod inspect;
pub mod render;

use anyhow::{Context, Result};
use demomap::{DataPaths, MapConfig, MapController, load_map_data};

use crate::cli::{Cli, DataArgs};

/// Config file (if any) with command-line overrides applied on top.
pub fn load_config(cli: &Cli, args: &DataArgs) -> Result<MapConfig> {
    let mut config = match &cli.config {
        Some(path) => MapConfig::load(path)?,
        None => MapConfig::default(),
    };
    if let Some(metric) = args.metric { config.metric = metric }
    if let Some(zoom) = args.zoom { config.zoom = zoom }
    Ok(config)
}

pub fn build_controller(config: MapConfig, args: &DataArgs) -> Result<MapController> {
    let paths = DataPaths {
        cities: args.cities.clone(),
        cdps: args.cdps.clone(),
        locations: args.locations.clone(),
        summary: args.summary.clone(),
    };
    tracing::info!(cities = %paths.cities.display(), "[cli] loading map data");
    let data = load_map_data(&paths).context("[cli] Failed to load map data")?;
    Ok(MapController::new(config, data))
}
