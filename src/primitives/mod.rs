//! Floating-point geometric primitives.

mod point2;
mod size2;
mod vec2;

pub use point2::Point2;
pub use size2::Size2;
pub use vec2::Vec2;
