//! Polygon area, winding, and the owned `Polygon` wrapper.
//!
//! Area and winding use a Y-down (screen) frame: a ring that looks clockwise
//! on screen has a non-positive signed area.

use crate::primitives::Point2;
use num_traits::Float;

/// Winding direction of a closed ring in a Y-down frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Signed area is zero or negative. Degenerate rings land here.
    Clockwise,
    /// Signed area is positive.
    CounterClockwise,
}

/// A polygon represented as an ordered ring of vertices.
///
/// The ring is implicitly closed (the last vertex connects to the first).
/// No winding is enforced; see [`Polygon::ensure_clockwise`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Wraps a ring without reordering it.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Returns `true` if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// See [`signed_area`].
    pub fn signed_area(&self) -> F {
        signed_area(&self.vertices)
    }

    /// Absolute area, see [`area`].
    pub fn area(&self) -> F {
        area(&self.vertices)
    }

    /// `true` when the signed area is zero or negative, see [`is_clockwise`].
    pub fn is_clockwise(&self) -> bool {
        is_clockwise(&self.vertices)
    }

    /// Winding of the ring, see [`winding`].
    pub fn winding(&self) -> Winding {
        winding(&self.vertices)
    }

    /// Mean of the vertices, `None` for an empty polygon.
    pub fn vertex_centroid(&self) -> Option<Point2<F>> {
        vertex_centroid(&self.vertices)
    }

    /// Returns the convex hull as a new polygon.
    pub fn convex_hull(&self) -> Self {
        Self::new(crate::hull::convex_hull(&self.vertices))
    }

    /// Returns a copy with vertices reordered clockwise around their centroid.
    pub fn sorted_clockwise(&self) -> Self {
        Self::new(super::sorted_clockwise(&self.vertices))
    }

    /// Reorders the vertices clockwise around their centroid.
    pub fn sort_clockwise(&mut self) {
        super::sort_clockwise(&mut self.vertices);
    }

    /// Reverses the ring if it is counter-clockwise.
    pub fn ensure_clockwise(&mut self) {
        if !self.is_clockwise() {
            self.vertices.reverse();
        }
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// Computes the signed area of a closed ring.
///
/// Sums `(p2.x - p1.x) * (p2.y + p1.y)` over every edge, including the edge
/// from the last vertex back to the first, and halves the result. In a Y-down
/// frame this is negative for rings that appear clockwise. Empty and
/// single-point input yields zero.
///
/// # Example
///
/// ```
/// use geomext::polygon::signed_area;
/// use geomext::Point2;
///
/// let square: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ];
/// assert_eq!(signed_area(&square), -16.0);
/// ```
pub fn signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    let n = vertices.len();
    let mut sum = F::zero();

    for i in 0..n {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % n];
        sum = sum + (p2.x - p1.x) * (p2.y + p1.y);
    }

    sum / (F::one() + F::one())
}

/// Absolute area of a closed ring. Always non-negative.
pub fn area<F: Float>(vertices: &[Point2<F>]) -> F {
    signed_area(vertices).abs()
}

/// Returns `true` when the signed area is zero or negative.
///
/// Zero-area rings (collinear, coincident, fewer than three points) are
/// classified as clockwise.
pub fn is_clockwise<F: Float>(vertices: &[Point2<F>]) -> bool {
    signed_area(vertices) <= F::zero()
}

/// Winding of a closed ring; see [`is_clockwise`] for the zero-area rule.
pub fn winding<F: Float>(vertices: &[Point2<F>]) -> Winding {
    if is_clockwise(vertices) {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}

/// Arithmetic mean of the points, `None` for empty input.
///
/// Each point contributes `p / n`, which keeps the running sum in the range
/// of the inputs.
pub fn vertex_centroid<F: Float>(points: &[Point2<F>]) -> Option<Point2<F>> {
    if points.is_empty() {
        return None;
    }
    let n = F::from(points.len())?;

    let centroid = points.iter().fold(Point2::origin(), |acc, p| {
        Point2::new(acc.x + p.x / n, acc.y + p.y / n)
    });
    Some(centroid)
}
