#![doc = "WKT geometry validation engine"]
mod geom;
mod policy;
mod store;
mod types;
mod validate;
mod wkt;

#[doc(inline)]
pub use types::GeomType;

#[doc(inline)]
pub use geom::{BBox, Geometry};

#[doc(inline)]
pub use wkt::{ParseError, parse_wkt, write_wkt};

#[doc(inline)]
pub use policy::ValidationPolicy;

#[doc(inline)]
pub use validate::{ValidationError, Verdict, validate};

#[doc(inline)]
pub use store::{GeometryRecord, GeometryStore, StoreError};
