//! Validation policy configuration.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::geom::BBox;
use crate::types::GeomType;

/// Vertex cap applied when the configuration omits `MaxVertices`.
const DEFAULT_MAX_VERTICES: usize = 10_000;

/// Limits applied to geometries before they are accepted for storage.
///
/// Serde keys mirror the host application's `WktValidation` configuration
/// section (`AllowedTypes`, `MaxVertices`, `BoundingBox`,
/// `RingClosureTolerance`); every field falls back to its default when
/// omitted. The policy is passed by reference into each validation call, so
/// the engine always sees one consistent snapshot even when the host
/// hot-reloads its configuration between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ValidationPolicy {
    /// Geometry types accepted for storage.
    pub allowed_types: Vec<GeomType>,
    /// Cap on total coordinates (across all rings for polygons).
    pub max_vertices: usize,
    /// Coordinate bounds; `None` means unbounded.
    pub bounding_box: Option<BBox>,
    /// Maximum Euclidean distance between a ring's first and last
    /// coordinate for the ring to count as closed. 0.0 requires an exact
    /// match.
    pub ring_closure_tolerance: f64,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            allowed_types: GeomType::ALL.to_vec(),
            max_vertices: DEFAULT_MAX_VERTICES,
            bounding_box: None,
            ring_closure_tolerance: 0.0,
        }
    }
}

impl ValidationPolicy {
    /// Whether the policy accepts geometries declared as `ty`.
    pub fn allows(&self, ty: GeomType) -> bool {
        self.allowed_types.contains(&ty)
    }

    /// Parse a policy from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: ValidationPolicy =
            serde_json::from_str(json).context("[policy] Failed to parse policy JSON")?;
        policy.validated()
    }

    /// Read a policy from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("[policy] Failed to read {}", path.display()))?;
        let policy: ValidationPolicy = serde_json::from_str(&text)
            .with_context(|| format!("[policy] Failed to parse {}", path.display()))?;
        policy.validated()
    }

    fn validated(self) -> Result<Self> {
        ensure!(
            self.ring_closure_tolerance >= 0.0 && self.ring_closure_tolerance.is_finite(),
            "[policy] RingClosureTolerance must be a non-negative finite number"
        );
        ensure!(self.max_vertices >= 1, "[policy] MaxVertices must be positive");
        Ok(self)
    }
}
