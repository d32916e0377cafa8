use std::fmt;

use serde::Serialize;

use crate::types::GeomType;
use crate::wkt::ParseError;

/// A single validation finding: a stable code plus contextual fields.
///
/// Findings are data, not panics; the caller decides how to present them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "code")]
pub enum ValidationError {
    // Parse stage (fatal to the pipeline).
    UnknownType { keyword: String },
    MalformedSyntax { detail: String },
    EmptyCoordinateList,

    // Structural stage.
    TooFewPoints { found: usize, minimum: usize },
    DegenerateSegment { index: usize },
    UnclosedRing { ring: usize, gap: f64 },
    RingTooShort { ring: usize, len: usize },

    // Type stage.
    TypeMismatch { declared: GeomType, actual: GeomType },

    // Policy stage.
    DisallowedType { declared: GeomType },
    TooManyVertices { count: usize, limit: usize },
    OutOfBounds { index: usize, x: f64, y: f64 },
}

impl ValidationError {
    /// Stable machine-readable code for this finding.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::UnknownType { .. } => "UnknownType",
            ValidationError::MalformedSyntax { .. } => "MalformedSyntax",
            ValidationError::EmptyCoordinateList => "EmptyCoordinateList",
            ValidationError::TooFewPoints { .. } => "TooFewPoints",
            ValidationError::DegenerateSegment { .. } => "DegenerateSegment",
            ValidationError::UnclosedRing { .. } => "UnclosedRing",
            ValidationError::RingTooShort { .. } => "RingTooShort",
            ValidationError::TypeMismatch { .. } => "TypeMismatch",
            ValidationError::DisallowedType { .. } => "DisallowedType",
            ValidationError::TooManyVertices { .. } => "TooManyVertices",
            ValidationError::OutOfBounds { .. } => "OutOfBounds",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownType { keyword } => {
                write!(f, "unknown geometry type keyword {keyword:?}")
            }
            ValidationError::MalformedSyntax { detail } => write!(f, "malformed WKT: {detail}"),
            ValidationError::EmptyCoordinateList => write!(f, "geometry has no coordinates"),
            ValidationError::TooFewPoints { found, minimum } => {
                write!(f, "{found} coordinate(s) where at least {minimum} are required")
            }
            ValidationError::DegenerateSegment { index } => {
                write!(f, "zero-length segment ending at vertex {index}")
            }
            ValidationError::UnclosedRing { ring, gap } => {
                write!(f, "ring {ring} is not closed (gap of {gap} between first and last coordinate)")
            }
            ValidationError::RingTooShort { ring, len } => {
                write!(f, "ring {ring} has {len} coordinate(s) where at least 4 are required")
            }
            ValidationError::TypeMismatch { declared, actual } => {
                write!(f, "declared type {declared} does not match parsed type {actual}")
            }
            ValidationError::DisallowedType { declared } => {
                write!(f, "geometry type {declared} is not allowed by policy")
            }
            ValidationError::TooManyVertices { count, limit } => {
                write!(f, "{count} vertices exceed the policy limit of {limit}")
            }
            ValidationError::OutOfBounds { index, x, y } => {
                write!(f, "coordinate {index} ({x}, {y}) is outside the allowed bounding box")
            }
        }
    }
}

impl From<ParseError> for ValidationError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnknownType { keyword } => ValidationError::UnknownType { keyword },
            ParseError::MalformedSyntax { detail } => ValidationError::MalformedSyntax { detail },
            ParseError::EmptyCoordinateList => ValidationError::EmptyCoordinateList,
        }
    }
}

/// Outcome of one validation call: accepted, or the findings in detection
/// order. `errors` is empty iff `accepted`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub accepted: bool,
    pub errors: Vec<ValidationError>,
}

impl Verdict {
    /// Build a verdict from accumulated findings; accepted iff none.
    pub(crate) fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self { accepted: errors.is_empty(), errors }
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Codes of every finding, in detection order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.errors.iter().map(|err| err.code()).collect()
    }
}
