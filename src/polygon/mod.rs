//! Polygon area, winding, and clockwise ordering.
//!
//! All functions take an ordered ring of points; the ring is implicitly
//! closed. Winding is judged in a Y-down (screen) frame.
//!
//! # Example
//!
//! ```
//! use geomext::polygon::{area, is_clockwise, sorted_clockwise};
//! use geomext::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 4.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(4.0, 0.0),
//! ];
//!
//! assert_eq!(area(&points), 16.0);
//! assert!(!is_clockwise(&points));
//! assert!(is_clockwise(&sorted_clockwise(&points)));
//! ```

mod clockwise;
mod ring;

pub use clockwise::{clockwise_cmp, sort_clockwise, sorted_clockwise};
pub use ring::{area, is_clockwise, signed_area, vertex_centroid, winding, Polygon, Winding};
