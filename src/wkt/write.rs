//! WKT writing operations.

use geo::LineString;

use crate::geom::Geometry;

/// Serialize a geometry back to WKT text.
///
/// Coordinates use `f64`'s shortest round-trip formatting, so
/// `parse_wkt(&write_wkt(geom))` reproduces `geom` exactly.
pub fn write_wkt(geom: &Geometry) -> String {
    match geom {
        Geometry::Point(point) => format!("POINT ({} {})", point.x(), point.y()),
        Geometry::LineString(line) => format!("LINESTRING ({})", coord_list(line)),
        Geometry::Polygon(rings) => {
            let body = rings
                .iter()
                .map(|ring| format!("({})", coord_list(ring)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("POLYGON ({body})")
        }
    }
}

fn coord_list(ring: &LineString<f64>) -> String {
    ring.coords()
        .map(|coord| format!("{} {}", coord.x, coord.y))
        .collect::<Vec<_>>()
        .join(", ")
}
