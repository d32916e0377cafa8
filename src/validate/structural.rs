//! Shape-intrinsic well-formedness checks.

use geo::{Distance, Euclidean, LineString, Point};

use super::error::ValidationError;
use crate::geom::Geometry;

/// Minimum coordinates in a linestring.
const MIN_LINE_COORDS: usize = 2;
/// Minimum coordinate entries in a polygon ring (a triangle plus the
/// closing repeat of its first vertex).
const MIN_RING_COORDS: usize = 4;

/// Check shape-intrinsic rules, appending every violation to `errors`.
/// Never stops at the first finding: all rings and all segments are checked.
pub(super) fn check(
    geom: &Geometry,
    ring_closure_tolerance: f64,
    errors: &mut Vec<ValidationError>,
) {
    match geom {
        // exactly one coordinate by construction, nothing left to check
        Geometry::Point(_) => {}
        Geometry::LineString(line) => check_line(line, errors),
        Geometry::Polygon(rings) => {
            for (ring_idx, ring) in rings.iter().enumerate() {
                check_ring(ring_idx, ring, ring_closure_tolerance, errors);
            }
        }
    }
}

fn check_line(line: &LineString<f64>, errors: &mut Vec<ValidationError>) {
    if line.0.len() < MIN_LINE_COORDS {
        errors.push(ValidationError::TooFewPoints {
            found: line.0.len(),
            minimum: MIN_LINE_COORDS,
        });
    }
    for (idx, pair) in line.0.windows(2).enumerate() {
        if pair[0] == pair[1] {
            // zero-length segment; index cites the repeated vertex
            errors.push(ValidationError::DegenerateSegment { index: idx + 1 });
        }
    }
}

fn check_ring(
    ring_idx: usize,
    ring: &LineString<f64>,
    tolerance: f64,
    errors: &mut Vec<ValidationError>,
) {
    let len = ring.0.len();
    if len < MIN_RING_COORDS {
        errors.push(ValidationError::RingTooShort { ring: ring_idx, len });
    }
    if let (Some(first), Some(last)) = (ring.0.first(), ring.0.last()) {
        let gap = Euclidean.distance(Point::from(*first), Point::from(*last));
        if gap > tolerance {
            errors.push(ValidationError::UnclosedRing { ring: ring_idx, gap });
        }
    }
}
