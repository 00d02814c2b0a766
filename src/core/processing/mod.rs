pub mod convert;
pub mod normalize;
