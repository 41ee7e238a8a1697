use geo::{Coord, Rect};

use super::{Feature, Geometry};

/// Selects the features that belong on the map: inside the region of interest
/// and carrying a usable population count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionFilter {
    bounds: Rect<f64>,
}

impl RegionFilter {
    pub fn new(bounds: Rect<f64>) -> Self { Self { bounds } }

    #[inline] pub fn bounds(&self) -> &Rect<f64> { &self.bounds }

    /// Coarse region test: true if any vertex of the first ring lies inside the
    /// bounding box (edges inclusive). This samples vertices only, so a feature
    /// that straddles the box without a vertex inside it is rejected.
    pub fn in_region(&self, geometry: &Geometry) -> bool {
        geometry.first_ring()
            .is_some_and(|ring| ring.coords().any(|coord| self.contains(coord)))
    }

    /// Population must parse to a finite number greater than zero.
    pub fn has_data(feature: &Feature) -> bool {
        feature.population().is_some_and(|population| population > 0.0)
    }

    #[inline]
    fn contains(&self, coord: &Coord<f64>) -> bool {
        let (min, max) = (self.bounds.min(), self.bounds.max());
        coord.x >= min.x && coord.x <= max.x && coord.y >= min.y && coord.y <= max.y
    }

    /// Keep only features passing both tests, preserving input order.
    pub fn filter(&self, features: Vec<Feature>) -> Vec<Feature> {
        let total = features.len();
        let mut outside = 0usize;
        let mut no_data = 0usize;

        let kept: Vec<Feature> = features.into_iter()
            .filter(|feature| {
                if !self.in_region(&feature.geometry) {
                    outside += 1;
                    false
                } else if !Self::has_data(feature) {
                    no_data += 1;
                    false
                } else {
                    true
                }
            })
            .collect();

        tracing::debug!(total, kept = kept.len(), outside, no_data, "[filter] region and data filter applied");
        kept
    }
}
