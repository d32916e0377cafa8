//! Policy limit checks: allowed types, vertex cap, coordinate bounds.

use super::error::ValidationError;
use crate::geom::Geometry;
use crate::policy::ValidationPolicy;
use crate::types::GeomType;

/// Apply every policy limit; all violations are collected (this stage never
/// short-circuits internally).
///
/// The allowed-type check reads the *declared* type, so a caller with a
/// type mismatch still sees the policy verdict for what they claimed to
/// submit.
pub(super) fn check(
    declared: GeomType,
    geom: &Geometry,
    policy: &ValidationPolicy,
    errors: &mut Vec<ValidationError>,
) {
    if !policy.allows(declared) {
        errors.push(ValidationError::DisallowedType { declared });
    }

    let count = geom.vertex_count();
    if count > policy.max_vertices {
        errors.push(ValidationError::TooManyVertices { count, limit: policy.max_vertices });
    }

    if let Some(bbox) = policy.bounding_box {
        for (index, coord) in geom.coords().enumerate() {
            if !bbox.contains(coord) {
                // one finding per offending coordinate
                errors.push(ValidationError::OutOfBounds { index, x: coord.x, y: coord.y });
            }
        }
    }
}
