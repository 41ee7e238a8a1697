#![doc = "Demomap public API"]
mod classify;
mod config;
mod feature;
mod io;
mod map;
mod metric;
mod state;

#[doc(inline)]
pub use classify::{Breaks, NO_DATA_COLOR, Palette, Rgb, bucket_index, classify, compute_breaks, extract_value, percent_of};

#[doc(inline)]
pub use config::{MapConfig, RegionBounds, SvgConfig};

#[doc(inline)]
pub use feature::{Feature, FeatureKind, Geometry, Properties, RawValue, RegionFilter, parse_number};

#[doc(inline)]
pub use io::{
    DataPaths, LabelLocations, LoadError, PendingWrite, finalize_write, load_map_data, open_for_write,
    parse_features, parse_locations, parse_summary, read_features, read_locations, read_summary,
    render_svg, render_svg_string, to_styled_geojson,
};

#[doc(inline)]
pub use map::{CountySummary, DetailPanel, FeatureStyle, Legend, LegendEntry, PanelRow, feature_style};

#[doc(inline)]
pub use metric::{Metric, ParseMetricError};

#[doc(inline)]
pub use state::{
    FeatureRef, Label, LabelChange, LabelChanges, LabelVisibility, MapController, MapData, RenderPass,
    RenderedFeature, Selection, SelectionChange, label_visible,
};
