use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of geometry types the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeomType {
    Point,      // single coordinate
    LineString, // ordered path of >= 2 coordinates
    Polygon,    // one or more closed rings
}

impl GeomType {
    pub const ALL: [GeomType; 3] = [GeomType::Point, GeomType::LineString, GeomType::Polygon];

    pub fn to_str(&self) -> &'static str {
        match self {
            GeomType::Point => "Point",
            GeomType::LineString => "LineString",
            GeomType::Polygon => "Polygon",
        }
    }

    /// Uppercase keyword used in WKT text.
    pub fn wkt_keyword(&self) -> &'static str {
        match self {
            GeomType::Point => "POINT",
            GeomType::LineString => "LINESTRING",
            GeomType::Polygon => "POLYGON",
        }
    }

    /// Match a WKT type keyword, case-insensitively.
    pub fn from_wkt_keyword(keyword: &str) -> Option<GeomType> {
        GeomType::ALL
            .iter()
            .copied()
            .find(|ty| ty.wkt_keyword().eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for GeomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for GeomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeomType::ALL
            .iter()
            .copied()
            .find(|ty| ty.to_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown geometry type: {s:?}"))
    }
}
