pub mod batch;
pub mod validate;
