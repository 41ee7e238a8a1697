use std::path::PathBuf;

use demomap::Metric;

/// Demographic choropleth maps for Contra Costa County (cities and CDPs)
#[derive(clap::Parser, Debug)]
#[command(name = "demomap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML map configuration (region, zoom, metric, layers, SVG size)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render the choropleth to an SVG or styled GeoJSON file (forbids stdout)
    Render(RenderArgs),

    /// Print the quantile breaks and legend for a metric
    Breaks(DataArgs),

    /// Print the detail panel for a feature, or the county summary
    Inspect(InspectArgs),
}

#[derive(clap::Args, Debug)]
pub struct DataArgs {
    /// City boundaries (GeoJSON FeatureCollection)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub cities: PathBuf,

    /// Census-designated place boundaries (GeoJSON FeatureCollection)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub cdps: Option<PathBuf>,

    /// Label position overrides, keyed by feature name
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub locations: Option<PathBuf>,

    /// County-wide totals shown when nothing is selected
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub summary: Option<PathBuf>,

    /// Metric to color by: foreign-born, non-white, white, latino, asian, black
    #[arg(short, long)]
    pub metric: Option<Metric>,

    /// Zoom level, controls label visibility
    #[arg(short, long)]
    pub zoom: Option<f64>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Svg,
    Geojson,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Output format, defaults to svg
    #[arg(short, long, value_enum, default_value_t)]
    pub format: Format,

    /// Highlight the feature with this name
    #[arg(short, long)]
    pub select: Option<String>,

    /// Hide city labels
    #[arg(long)]
    pub hide_cities: bool,

    /// Hide CDP labels
    #[arg(long)]
    pub hide_cdps: bool,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Feature name, case-insensitive; omit for the county summary
    pub name: Option<String>,
}
