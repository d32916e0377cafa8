use geo::Coord;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box used for coordinate policy checks.
///
/// Field names mirror the configuration keys (`MinX`, `MinY`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    /// Longitude/latitude bounds of WGS84.
    pub const WGS84: BBox = BBox { min_x: -180.0, min_y: -90.0, max_x: 180.0, max_y: 90.0 };

    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Whether the coordinate lies inside the box (bounds inclusive).
    pub fn contains(&self, coord: Coord<f64>) -> bool {
        coord.x >= self.min_x && coord.x <= self.max_x
            && coord.y >= self.min_y && coord.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::BBox;
    use geo::Coord;

    #[test]
    fn contains_is_inclusive_at_edges() {
        let bbox = BBox::new(-10.0, -5.0, 10.0, 5.0);
        assert!(bbox.contains(Coord { x: 0.0, y: 0.0 }));
        assert!(bbox.contains(Coord { x: -10.0, y: 5.0 }));
        assert!(bbox.contains(Coord { x: 10.0, y: -5.0 }));
        assert!(!bbox.contains(Coord { x: 10.1, y: 0.0 }));
        assert!(!bbox.contains(Coord { x: 0.0, y: -5.1 }));
    }

    #[test]
    fn wgs84_covers_the_globe() {
        assert!(BBox::WGS84.contains(Coord { x: 179.9, y: -89.9 }));
        assert!(!BBox::WGS84.contains(Coord { x: 200.0, y: 95.0 }));
    }

    #[test]
    fn deserializes_pascal_case_keys() {
        let bbox: BBox =
            serde_json::from_str(r#"{"MinX":-180.0,"MinY":-90.0,"MaxX":180.0,"MaxY":90.0}"#)
                .unwrap();
        assert_eq!(bbox, BBox::WGS84);
    }
}
