//! Convex hull of a point set.
//!
//! # Example
//!
//! ```
//! use geomext::hull::convex_hull;
//! use geomext::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // Interior point
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let hull = convex_hull(&points);
//!
//! assert_eq!(hull.len(), 4);
//! assert_eq!(hull[0], Point2::new(0.0, 0.0));
//! ```

use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull of a set of points with a Graham scan.
///
/// Returns the hull vertices in counter-clockwise order (Y-up), starting from
/// the lowest point; ties on `y` go to the smallest `x`. The hull is
/// implicitly closed. Collinear boundary points are dropped.
///
/// # Algorithm
///
/// 1. Pick the pivot: minimum `y`, then minimum `x`
/// 2. Sort the remaining points counter-clockwise around the pivot, nearer
///    first on collinear ties. Each point gets its sort key once, so the
///    order stays total on nearly collinear float input
/// 3. Scan, popping the top of the stack while the last two hull points and
///    the candidate fail to make a strict left turn
///
/// # Complexity
///
/// - Time: O(n log n) due to sorting
/// - Space: O(n)
///
/// # Returns
///
/// Inputs with fewer than 3 points are returned unchanged. Degenerate inputs
/// (all collinear, all coincident) produce a 2-point "hull".
///
/// # Example
///
/// ```
/// use geomext::hull::convex_hull;
/// use geomext::Point2;
///
/// let square: Vec<Point2<f64>> = vec![
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
/// ];
///
/// let hull = convex_hull(&square);
/// assert_eq!(
///     hull,
///     vec![
///         Point2::new(0.0, 0.0),
///         Point2::new(4.0, 0.0),
///         Point2::new(4.0, 4.0),
///         Point2::new(0.0, 4.0),
///     ]
/// );
/// ```
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() < 3 {
        tracing::trace!(points = points.len(), "hull input below three points");
        return points.to_vec();
    }

    let pivot_index = lowest_point_index(points);
    let pivot = points[pivot_index];

    // The pivot is removed by position so its duplicates stay candidates.
    let mut candidates: Vec<(PolarKey<F>, Point2<F>)> = points
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != pivot_index)
        .map(|(_, &p)| (polar_key(&pivot, &p), p))
        .collect();
    candidates.sort_by(|(a, _), (b, _)| a.cmp_by(b));

    let mut hull: Vec<Point2<F>> = Vec::with_capacity(points.len());
    hull.push(pivot);
    for (_, p) in candidates {
        while hull.len() > 1 {
            let n = hull.len();
            if cross(&hull[n - 2], &hull[n - 1], &p) > F::zero() {
                break;
            }
            hull.pop();
        }
        hull.push(p);
    }

    hull
}

/// Computes the area of a convex hull.
///
/// Returns 0 for fewer than 3 vertices.
///
/// # Example
///
/// ```
/// use geomext::hull::{convex_hull, convex_hull_area};
/// use geomext::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
///
/// let area = convex_hull_area(&convex_hull(&points));
/// assert!((area - 4.0).abs() < 1e-10);
/// ```
pub fn convex_hull_area<F: Float>(hull: &[Point2<F>]) -> F {
    if hull.len() < 3 {
        return F::zero();
    }
    crate::polygon::area(hull)
}

/// Tests if a point is inside a convex hull given in CCW order.
///
/// A point on the boundary is considered inside.
///
/// # Example
///
/// ```
/// use geomext::hull::{convex_hull, point_in_convex_hull};
/// use geomext::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
///
/// let hull = convex_hull(&points);
///
/// assert!(point_in_convex_hull(&hull, Point2::new(1.0, 1.0)));
/// assert!(point_in_convex_hull(&hull, Point2::new(0.0, 0.0)));
/// assert!(!point_in_convex_hull(&hull, Point2::new(3.0, 3.0)));
/// ```
#[inline]
pub fn point_in_convex_hull<F: Float>(hull: &[Point2<F>], point: Point2<F>) -> bool {
    point_in_convex_hull_eps(hull, point, F::zero())
}

/// Like [`point_in_convex_hull`], accepting points up to `eps` outside an
/// edge, measured as the cross product against that edge.
pub fn point_in_convex_hull_eps<F: Float>(hull: &[Point2<F>], point: Point2<F>, eps: F) -> bool {
    if hull.len() < 3 {
        return false;
    }

    // Inside means on the left of (or on) every CCW edge.
    let n = hull.len();
    (0..n).all(|i| cross(&hull[i], &hull[(i + 1) % n], &point) >= -eps)
}

/// Index of the point with minimum `y`, ties broken by minimum `x`.
fn lowest_point_index<F: Float>(points: &[Point2<F>]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = points[best];
        if p.y < b.y || (p.y == b.y && p.x < b.x) {
            best = i;
        }
    }
    best
}

/// Angular position of a candidate around the pivot.
///
/// `sweep` is `-dx / (|dx| + dy)`, which grows monotonically with the angle
/// from the positive x axis over the closed upper half-plane, from -1 to 1.
/// Collinear points share it exactly. `dist` breaks those ties, nearer first.
#[derive(Debug, Clone, Copy)]
struct PolarKey<F> {
    sweep: F,
    dist: F,
}

impl<F: Float> PolarKey<F> {
    fn cmp_by(&self, other: &Self) -> Ordering {
        self.sweep
            .partial_cmp(&other.sweep)
            .unwrap_or(Ordering::Equal)
            .then(self.dist.partial_cmp(&other.dist).unwrap_or(Ordering::Equal))
    }
}

fn polar_key<F: Float>(pivot: &Point2<F>, p: &Point2<F>) -> PolarKey<F> {
    let d = *p - *pivot;
    let span = d.x.abs() + d.y;
    // Copies of the pivot sort first.
    let sweep = if span > F::zero() { -d.x / span } else { -F::one() };
    PolarKey {
        sweep: not_nan(sweep),
        dist: not_nan(d.magnitude_squared()),
    }
}

/// Maps NaN to infinity so keys compare totally.
#[inline]
pub(crate) fn not_nan<F: Float>(v: F) -> F {
    if v.is_nan() {
        F::infinity()
    } else {
        v
    }
}

/// Cross product of vectors OA and OB where O is the origin point.
/// Positive if counter-clockwise, negative if clockwise, zero if collinear.
#[inline]
pub(crate) fn cross<F: Float>(o: &Point2<F>, a: &Point2<F>, b: &Point2<F>) -> F {
    (*a - *o).cross(*b - *o)
}
