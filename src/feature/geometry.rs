use geo::{BoundingRect, Centroid, LineString, MultiPolygon, Point, Polygon, Rect};

/// Boundary of a feature. Input is always lon/lat polygons or multipolygons.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl Geometry {
    /// The ring used for coarse region tests: the exterior of a polygon, or the
    /// exterior of the first polygon of a multipolygon.
    pub fn first_ring(&self) -> Option<&LineString<f64>> {
        match self {
            Geometry::Polygon(polygon) => Some(polygon.exterior()),
            Geometry::MultiPolygon(mp) => mp.0.first().map(Polygon::exterior),
        }
    }

    /// All member polygons, in source order.
    pub fn polygons(&self) -> &[Polygon<f64>] {
        match self {
            Geometry::Polygon(polygon) => std::slice::from_ref(polygon),
            Geometry::MultiPolygon(mp) => &mp.0,
        }
    }

    #[inline]
    pub fn centroid(&self) -> Option<Point<f64>> {
        match self {
            Geometry::Polygon(polygon) => polygon.centroid(),
            Geometry::MultiPolygon(mp) => mp.centroid(),
        }
    }

    #[inline]
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        match self {
            Geometry::Polygon(polygon) => polygon.bounding_rect(),
            Geometry::MultiPolygon(mp) => mp.bounding_rect(),
        }
    }
}

impl From<Polygon<f64>> for Geometry {
    fn from(polygon: Polygon<f64>) -> Self { Geometry::Polygon(polygon) }
}

impl From<MultiPolygon<f64>> for Geometry {
    fn from(mp: MultiPolygon<f64>) -> Self { Geometry::MultiPolygon(mp) }
}
