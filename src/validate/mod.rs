//! Validation pipeline: parse, then structural / type-match / policy stages.

mod error;
mod limits;
mod structural;
mod type_match;

pub use error::{ValidationError, Verdict};

use crate::policy::ValidationPolicy;
use crate::types::GeomType;
use crate::wkt;

/// Validate one WKT geometry against the current policy snapshot.
///
/// A parse failure ends the pipeline immediately: nothing downstream can run
/// without a parsed tree, so the verdict holds only the parse error. When
/// parsing succeeds, the structural, type-match, and policy stages each run
/// exactly once (independent of one another's findings) and their errors are
/// concatenated in that fixed order.
///
/// Pure function of its inputs: no retries, no mutation, no shared state.
pub fn validate(declared: GeomType, wkt_text: &str, policy: &ValidationPolicy) -> Verdict {
    tracing::debug!(declared = declared.to_str(), len = wkt_text.len(), "validating geometry");

    let geom = match wkt::parse_wkt(wkt_text) {
        Ok(geom) => geom,
        Err(err) => {
            tracing::debug!(%err, "rejected at parse stage");
            return Verdict::from_errors(vec![err.into()]);
        }
    };

    let mut errors = Vec::new();
    structural::check(&geom, policy.ring_closure_tolerance, &mut errors);
    type_match::check(declared, &geom, &mut errors);
    limits::check(declared, &geom, policy, &mut errors);

    if !errors.is_empty() {
        tracing::debug!(findings = errors.len(), "rejected geometry");
    }
    Verdict::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::{ValidationError, validate};
    use crate::policy::ValidationPolicy;
    use crate::types::GeomType;

    #[test]
    fn parse_failure_short_circuits_every_other_stage() {
        // declared type mismatches and the policy forbids everything, but
        // only the parse error may surface
        let policy = ValidationPolicy { allowed_types: vec![], ..Default::default() };
        let verdict = validate(GeomType::Point, "LINESTRING (0 0, 1 1", &policy);
        assert!(!verdict.accepted);
        assert_eq!(verdict.codes(), vec!["MalformedSyntax"]);
    }

    #[test]
    fn stage_findings_keep_their_fixed_order() {
        // degenerate linestring, declared as Point, with Points-only policy:
        // structural, then type-match, then policy findings
        let policy =
            ValidationPolicy { allowed_types: vec![GeomType::LineString], ..Default::default() };
        let verdict = validate(GeomType::Point, "LINESTRING (1 1, 1 1)", &policy);
        assert_eq!(verdict.codes(), vec!["DegenerateSegment", "TypeMismatch", "DisallowedType"]);
    }

    #[test]
    fn accepted_verdict_has_no_errors() {
        let verdict = validate(GeomType::Point, "POINT (30 10)", &ValidationPolicy::default());
        assert!(verdict.accepted);
        assert!(verdict.errors.is_empty());
    }

    #[test]
    fn verdict_serializes_with_code_tags() {
        let verdict = validate(GeomType::Point, "POINT (1 2, 3 4)", &ValidationPolicy::default());
        let json = serde_json::to_string(&verdict).unwrap();
        assert!(json.contains(r#""accepted":false"#));
        assert!(json.contains(r#""code":"MalformedSyntax""#));
    }

    #[test]
    fn type_mismatch_reports_both_tags() {
        let verdict =
            validate(GeomType::Polygon, "POINT (0 0)", &ValidationPolicy::default());
        assert_eq!(
            verdict.errors,
            vec![ValidationError::TypeMismatch {
                declared: GeomType::Polygon,
                actual: GeomType::Point
            }]
        );
    }
}
