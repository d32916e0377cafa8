mod bbox;
mod geometry;

pub use bbox::BBox;
pub use geometry::Geometry;
