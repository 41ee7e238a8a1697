//! Feature model: one city or census-designated place with its boundary and demographics.

mod filter;
mod geometry;
mod properties;

use std::fmt;

pub use filter::RegionFilter;
pub use geometry::Geometry;
pub use properties::{Properties, RawValue, parse_number};

/// Which input collection a feature came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKind {
    City,
    Cdp,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 2] = [FeatureKind::City, FeatureKind::Cdp];

    pub fn label(self) -> &'static str {
        match self {
            FeatureKind::City => "City",
            FeatureKind::Cdp => "CDP",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single geographic unit. The geometry is fixed after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: String,
    pub kind: FeatureKind,
    pub geometry: Geometry,
    pub properties: Properties,
}

impl Feature {
    pub fn new(name: impl Into<String>, kind: FeatureKind, geometry: Geometry, properties: Properties) -> Self {
        Self { name: name.into(), kind, geometry, properties }
    }

    /// Total population, if it parses.
    #[inline] pub fn population(&self) -> Option<f64> { self.properties.population() }
}
