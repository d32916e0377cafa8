//! Declared-vs-parsed type comparison.

use super::error::ValidationError;
use crate::geom::Geometry;
use crate::types::GeomType;

/// Flag a mismatch between the caller-declared tag and the parsed shape's
/// intrinsic tag. Tags must be identical, not merely compatible, and this
/// check runs regardless of structural findings so the caller sees both
/// defect classes in one verdict.
pub(super) fn check(declared: GeomType, geom: &Geometry, errors: &mut Vec<ValidationError>) {
    let actual = geom.geom_type();
    if declared != actual {
        errors.push(ValidationError::TypeMismatch { declared, actual });
    }
}

#[cfg(test)]
mod tests {
    use super::check;
    use crate::geom::Geometry;
    use crate::types::GeomType;
    use crate::validate::ValidationError;
    use geo::{LineString, Point};

    #[test]
    fn matching_tags_add_nothing() {
        let mut errors = Vec::new();
        check(GeomType::Point, &Geometry::Point(Point::new(0.0, 0.0)), &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn mismatch_names_both_sides() {
        let mut errors = Vec::new();
        let line = Geometry::LineString(LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]));
        check(GeomType::Point, &line, &mut errors);
        assert_eq!(
            errors,
            vec![ValidationError::TypeMismatch {
                declared: GeomType::Point,
                actual: GeomType::LineString
            }]
        );
    }
}
