use geo::{Coord, LineString, Point};

use crate::types::GeomType;

/// A parsed geometry, kept exactly as it appeared in the source text.
///
/// Polygon rings are stored as raw `LineString`s (exterior first) rather
/// than a `geo::Polygon`, which auto-closes rings and would mask closure
/// defects the validator must report.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point<f64>),
    LineString(LineString<f64>),
    Polygon(Vec<LineString<f64>>),
}

impl Geometry {
    /// Intrinsic type tag of the parsed shape.
    pub fn geom_type(&self) -> GeomType {
        match self {
            Geometry::Point(_) => GeomType::Point,
            Geometry::LineString(_) => GeomType::LineString,
            Geometry::Polygon(_) => GeomType::Polygon,
        }
    }

    /// Total number of coordinates, across all rings for polygons.
    pub fn vertex_count(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(line) => line.0.len(),
            Geometry::Polygon(rings) => rings.iter().map(|ring| ring.0.len()).sum(),
        }
    }

    /// Every coordinate in document order (ring by ring for polygons).
    pub fn coords(&self) -> Box<dyn Iterator<Item = Coord<f64>> + '_> {
        match self {
            Geometry::Point(point) => Box::new(std::iter::once(point.0)),
            Geometry::LineString(line) => Box::new(line.coords().copied()),
            Geometry::Polygon(rings) => {
                Box::new(rings.iter().flat_map(|ring| ring.coords().copied()))
            }
        }
    }
}
