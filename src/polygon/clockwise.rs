//! Clockwise ordering of a point set around its centroid.
//!
//! Coordinates are read in a Y-down (screen) frame, so "clockwise" is what a
//! viewer sees on a display. The ordering starts with the points on or right
//! of the vertical line through the centroid, sweeping from the top down, then
//! continues with the left half from the bottom up.

use super::ring::vertex_centroid;
use crate::hull::not_nan;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Returns the points reordered clockwise around their centroid.
///
/// The result is a permutation of the input that starts with the input's
/// first element. Rotation is done by position, so duplicate or
/// bit-identical points cannot make it fail. Empty input yields an empty
/// vector.
///
/// # Example
///
/// ```
/// use geomext::polygon::{is_clockwise, sorted_clockwise};
/// use geomext::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 4.0),
///     Point2::new(4.0, 0.0),
/// ];
///
/// let sorted = sorted_clockwise(&points);
/// assert_eq!(
///     sorted,
///     vec![
///         Point2::new(4.0, 4.0),
///         Point2::new(0.0, 4.0),
///         Point2::new(0.0, 0.0),
///         Point2::new(4.0, 0.0),
///     ]
/// );
/// assert!(is_clockwise(&sorted));
/// ```
pub fn sorted_clockwise<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    let Some(center) = vertex_centroid(points) else {
        tracing::trace!("clockwise sort of empty input");
        return Vec::new();
    };

    let keys: Vec<SweepKey<F>> = points.iter().map(|p| sweep_key(center, p)).collect();
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| keys[i].cmp_by(&keys[j]));

    // Index 0 is always present; the fallback never triggers.
    let start = order.iter().position(|&i| i == 0).unwrap_or(0);
    order.rotate_left(start);

    order.into_iter().map(|i| points[i]).collect()
}

/// In-place form of [`sorted_clockwise`].
pub fn sort_clockwise<F: Float>(points: &mut [Point2<F>]) {
    let sorted = sorted_clockwise(points);
    points.copy_from_slice(&sorted);
}

/// Compares two points by their clockwise position around `center`.
///
/// - Points with `x >= center.x` come before points with `x < center.x`.
/// - Two points both exactly on the vertical through `center` are ordered by
///   ascending `y` if either lies at or below the center, otherwise by
///   descending `y`.
/// - Otherwise the sign of `(a - c) x (b - c)` decides; on a tie the point
///   farther from `center` comes first.
pub fn clockwise_cmp<F: Float>(center: Point2<F>, a: &Point2<F>, b: &Point2<F>) -> Ordering {
    sweep_key(center, a).cmp_by(&sweep_key(center, b))
}

/// Clockwise position of a point, compared field by field.
///
/// `half` is 0 right of the vertical and 1 left of it. Within a half `sweep`
/// grows monotonically with the clockwise angle and is exact for collinear
/// points. `rank` separates the vertical line (top, other, center, bottom)
/// and `tie` orders points sharing a direction.
#[derive(Debug, Clone, Copy)]
struct SweepKey<F> {
    half: u8,
    sweep: F,
    rank: u8,
    tie: F,
}

impl<F: Float> SweepKey<F> {
    fn cmp_by(&self, other: &Self) -> Ordering {
        self.half
            .cmp(&other.half)
            .then(total_cmp(self.sweep, other.sweep))
            .then(self.rank.cmp(&other.rank))
            .then(total_cmp(self.tie, other.tie))
    }
}

#[inline]
fn total_cmp<F: Float>(a: F, b: F) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn sweep_key<F: Float>(c: Point2<F>, p: &Point2<F>) -> SweepKey<F> {
    let zero = F::zero();
    let one = F::one();
    let d = *p - c;
    // Farther first along a shared direction.
    let farther = not_nan(-d.magnitude_squared());

    if d.x < zero {
        return SweepKey {
            half: 1,
            sweep: not_nan(-d.y / (d.x.abs() + d.y.abs())),
            rank: 0,
            tie: farther,
        };
    }
    if d.x == zero {
        return if d.y < zero {
            SweepKey { half: 0, sweep: -one, rank: 0, tie: not_nan(-d.y) }
        } else if d.y == zero {
            SweepKey { half: 0, sweep: one, rank: 2, tie: zero }
        } else {
            SweepKey { half: 0, sweep: one, rank: 3, tie: not_nan(d.y) }
        };
    }

    // Positive or NaN offsets.
    SweepKey {
        half: 0,
        sweep: not_nan(d.y / (d.x + d.y.abs())),
        rank: 1,
        tie: farther,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::is_clockwise;
    use proptest::prelude::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<Point2<f64>> = vec![];
        assert!(sorted_clockwise(&empty).is_empty());
    }

    #[test]
    fn test_single_point() {
        let one = pts(&[(3.0, -1.0)]);
        assert_eq!(sorted_clockwise(&one), one);
    }

    #[test]
    fn test_square_from_first_point() {
        let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert_eq!(sorted_clockwise(&square), square);

        let shuffled = pts(&[(0.0, 4.0), (4.0, 0.0), (0.0, 0.0), (4.0, 4.0)]);
        assert_eq!(
            sorted_clockwise(&shuffled),
            pts(&[(0.0, 4.0), (0.0, 0.0), (4.0, 0.0), (4.0, 4.0)])
        );
    }

    #[test]
    fn test_diamond_on_axes() {
        // Top and bottom sit exactly on the vertical through the centroid.
        let diamond = pts(&[(0.0, 1.0), (-1.0, 0.0), (0.0, -1.0), (1.0, 0.0)]);
        let sorted = sorted_clockwise(&diamond);
        assert_eq!(sorted, pts(&[(0.0, 1.0), (-1.0, 0.0), (0.0, -1.0), (1.0, 0.0)]));
        assert!(is_clockwise(&sorted));
    }

    #[test]
    fn test_sort_in_place() {
        let mut points = pts(&[(2.0, 2.0), (0.0, 2.0), (2.0, 0.0), (0.0, 0.0)]);
        sort_clockwise(&mut points);
        assert_eq!(points, pts(&[(2.0, 2.0), (0.0, 2.0), (0.0, 0.0), (2.0, 0.0)]));
    }

    #[test]
    fn test_cmp_halves() {
        let c = Point2::new(0.0_f64, 0.0);
        let right = Point2::new(1.0, 5.0);
        let left = Point2::new(-1.0, -5.0);
        assert_eq!(clockwise_cmp(c, &right, &left), Ordering::Less);
        assert_eq!(clockwise_cmp(c, &left, &right), Ordering::Greater);
    }

    #[test]
    fn test_cmp_vertical_line() {
        let c = Point2::new(0.0_f64, 0.0);
        let above = Point2::new(0.0, -1.0);
        let far_above = Point2::new(0.0, -2.0);
        let below = Point2::new(0.0, 1.0);
        let far_below = Point2::new(0.0, 2.0);

        assert_eq!(clockwise_cmp(c, &above, &below), Ordering::Less);
        assert_eq!(clockwise_cmp(c, &below, &far_below), Ordering::Less);
        assert_eq!(clockwise_cmp(c, &above, &far_above), Ordering::Less);
    }

    #[test]
    fn test_cmp_collinear_tie_prefers_farther() {
        let c = Point2::new(0.0_f64, 0.0);
        let near = Point2::new(1.0, 1.0);
        let far = Point2::new(3.0, 3.0);
        assert_eq!(clockwise_cmp(c, &far, &near), Ordering::Less);
        assert_eq!(clockwise_cmp(c, &near, &near), Ordering::Equal);
    }

    #[test]
    fn test_duplicate_first_point_leads() {
        let points = pts(&[(1.0, 1.0), (-1.0, 1.0), (1.0, 1.0), (0.0, -2.0)]);
        let sorted = sorted_clockwise(&points);
        assert_eq!(sorted[0], Point2::new(1.0, 1.0));
        assert_eq!(sorted.len(), 4);
    }

    #[test]
    fn test_near_collinear_line() {
        let mut state = 0x9e37_79b9_7f4a_7c15_u64;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state as f64 / u64::MAX as f64
        };
        for n in 3..300 {
            let points: Vec<Point2<f64>> = (0..n)
                .map(|_| {
                    let x = next() * 1000.0;
                    Point2::new(x, 0.3 * x + 0.1 + (next() * 2.0 - 1.0) * 1e-12)
                })
                .collect();
            let sorted = sorted_clockwise(&points);
            assert_eq!(sorted.len(), n);
            assert_eq!(sorted[0], points[0]);
            let mut a: Vec<_> = points.iter().map(sort_key).collect();
            let mut b: Vec<_> = sorted.iter().map(sort_key).collect();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_cmp_is_total_with_nan() {
        let c = Point2::new(0.0_f64, 0.0);
        let nan = Point2::new(f64::NAN, 1.0);
        let p = Point2::new(1.0, 1.0);
        assert_eq!(clockwise_cmp(c, &nan, &nan), Ordering::Equal);
        assert_eq!(clockwise_cmp(c, &nan, &p), clockwise_cmp(c, &p, &nan).reverse());

        let points = pts(&[(1.0, 2.0), (f64::NAN, 0.0), (-3.0, 1.0), (2.0, f64::NAN)]);
        assert_eq!(sorted_clockwise(&points).len(), 4);
    }

    // Power-of-two sizes keep the centroid and every comparison exact.
    fn point_set() -> impl Strategy<Value = Vec<Point2<f64>>> {
        prop::sample::select(vec![1usize, 2, 4, 8, 16, 32]).prop_flat_map(|n| {
            prop::collection::vec((-64i32..64, -64i32..64), n).prop_map(|v| {
                v.into_iter()
                    .map(|(x, y)| Point2::new(f64::from(x), f64::from(y)))
                    .collect::<Vec<_>>()
            })
        })
    }

    fn sort_key(p: &Point2<f64>) -> (u64, u64) {
        (p.x.to_bits(), p.y.to_bits())
    }

    /// Arbitrary finite coordinates with any length, plus nearly collinear runs.
    fn float_point_set() -> impl Strategy<Value = Vec<Point2<f64>>> {
        let scatter = prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 1..60)
            .prop_map(|v| v.into_iter().map(Point2::from).collect::<Vec<_>>());
        let line = prop::collection::vec((0.0f64..1000.0, -1.0f64..1.0), 1..120).prop_map(|v| {
            v.into_iter()
                .map(|(x, noise)| Point2::new(x, 0.3 * x + 0.1 + noise * 1e-12))
                .collect::<Vec<_>>()
        });
        prop_oneof![scatter, line]
    }

    proptest! {
        #[test]
        fn prop_result_is_permutation(points in point_set()) {
            let sorted = sorted_clockwise(&points);
            let mut a: Vec<_> = points.iter().map(sort_key).collect();
            let mut b: Vec<_> = sorted.iter().map(sort_key).collect();
            a.sort_unstable();
            b.sort_unstable();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_starts_with_first_point(points in point_set()) {
            let sorted = sorted_clockwise(&points);
            prop_assert_eq!(sorted[0], points[0]);
        }

        #[test]
        fn prop_result_winds_clockwise(points in point_set()) {
            prop_assert!(is_clockwise(&sorted_clockwise(&points)));
        }

        #[test]
        fn prop_float_result_is_permutation_from_first(points in float_point_set()) {
            let sorted = sorted_clockwise(&points);
            prop_assert_eq!(sorted[0], points[0]);
            let mut a: Vec<_> = points.iter().map(sort_key).collect();
            let mut b: Vec<_> = sorted.iter().map(sort_key).collect();
            a.sort_unstable();
            b.sort_unstable();
            prop_assert_eq!(a, b);
        }
    }
}
