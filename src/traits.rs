pub mod iter;
pub mod sequence;
