pub mod sequence;
pub mod validate;
