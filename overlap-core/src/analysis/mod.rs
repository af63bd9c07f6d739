pub mod bbox;
pub mod normalize;
pub mod overlap;
