//! WKT text reading and writing.

mod read;
mod write;

pub use read::{ParseError, parse_wkt};
pub use write::write_wkt;
