//! geomext - Point-set geometry and small string helpers
//!
//! Convex hulls, clockwise ordering around a centroid, polygon area and
//! winding, rectangle insets, and a handful of string utilities. Every
//! operation is a pure function over borrowed input.

pub mod bounds;
pub mod error;
pub mod hull;
pub mod polygon;
pub mod primitives;
pub mod text;

pub use bounds::Rect;
pub use error::GeomError;
pub use hull::convex_hull;
pub use polygon::{area, is_clockwise, signed_area, sort_clockwise, sorted_clockwise, Polygon};
pub use primitives::{Point2, Size2, Vec2};
