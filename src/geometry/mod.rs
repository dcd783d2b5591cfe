pub mod point;
pub mod sequence;

pub use point::Point;
pub use sequence::{CentroidDivisor, PointSequence};
