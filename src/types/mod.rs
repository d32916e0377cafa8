mod geom_type;

pub use geom_type::GeomType;
