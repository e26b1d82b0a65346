//! Axis-aligned rectangle given by an origin and a size.

use crate::error::GeomError;
use crate::primitives::{Point2, Size2, Vec2};
use num_traits::Float;

/// A 2D axis-aligned rectangle.
///
/// `origin` is the corner with the smallest coordinates and `size` extends
/// from it in the positive directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<F> {
    pub origin: Point2<F>,
    pub size: Size2<F>,
}

impl<F: Float> Rect<F> {
    /// Creates a rectangle from origin coordinates and extents.
    ///
    /// Does not validate the extents.
    #[inline]
    pub fn new(x: F, y: F, width: F, height: F) -> Self {
        Self {
            origin: Point2::new(x, y),
            size: Size2::new(width, height),
        }
    }

    /// Creates a rectangle, rejecting negative or non-finite extents.
    pub fn try_new(x: F, y: F, width: F, height: F) -> Result<Self, GeomError> {
        Ok(Self {
            origin: Point2::new(x, y),
            size: Size2::try_new(width, height)?,
        })
    }

    #[inline]
    pub fn from_origin_size(origin: Point2<F>, size: Size2<F>) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle of the given size at the origin.
    #[inline]
    pub fn from_size(size: Size2<F>) -> Self {
        Self {
            origin: Point2::origin(),
            size,
        }
    }

    /// Creates the rectangle spanned by two arbitrary corners.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        let min = Point2::new(a.x.min(b.x), a.y.min(b.y));
        Self {
            origin: min,
            size: Size2::new((a.x - b.x).abs(), (a.y - b.y).abs()),
        }
    }

    #[inline]
    pub fn width(self) -> F {
        self.size.width
    }

    #[inline]
    pub fn height(self) -> F {
        self.size.height
    }

    #[inline]
    pub fn min_x(self) -> F {
        self.origin.x
    }

    #[inline]
    pub fn min_y(self) -> F {
        self.origin.y
    }

    #[inline]
    pub fn max_x(self) -> F {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn max_y(self) -> F {
        self.origin.y + self.size.height
    }

    /// Returns the center point.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.origin.midpoint(Point2::new(self.max_x(), self.max_y()))
    }

    #[inline]
    pub fn area(self) -> F {
        self.size.area()
    }

    /// Returns `true` if either extent is zero or negative.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Returns the four corners starting at `origin`, in `x`-first order.
    pub fn corners(self) -> [Point2<F>; 4] {
        [
            self.origin,
            Point2::new(self.max_x(), self.min_y()),
            Point2::new(self.max_x(), self.max_y()),
            Point2::new(self.min_x(), self.max_y()),
        ]
    }

    /// Returns `true` if the point lies inside or on the boundary.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// Moves every edge inward by `delta`.
    ///
    /// Extents shrink by `2 * delta`; they go negative once `delta` passes
    /// half the extent, which [`Rect::is_empty`] reports.
    #[inline]
    pub fn inset(self, delta: F) -> Self {
        self.inset_xy(delta, delta)
    }

    /// Moves the vertical edges inward by `dx` and the horizontal ones by `dy`.
    pub fn inset_xy(self, dx: F, dy: F) -> Self {
        let two = F::one() + F::one();
        Self {
            origin: self.origin + Vec2::new(dx, dy),
            size: Size2::new(self.size.width - two * dx, self.size.height - two * dy),
        }
    }

    /// Moves every edge outward by `delta`; `inset` by `-delta`.
    #[inline]
    pub fn expand(self, delta: F) -> Self {
        self.inset(-delta)
    }

    #[inline]
    pub fn expand_xy(self, dx: F, dy: F) -> Self {
        self.inset_xy(-dx, -dy)
    }
}

impl<F: Float> From<(F, F, F, F)> for Rect<F> {
    fn from((x, y, width, height): (F, F, F, F)) -> Self {
        Self::new(x, y, width, height)
    }
}

impl<F: Float> From<[F; 4]> for Rect<F> {
    fn from([x, y, width, height]: [F; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl<F: Float> From<Size2<F>> for Rect<F> {
    fn from(size: Size2<F>) -> Self {
        Self::from_size(size)
    }
}

impl<F: Float> TryFrom<&[F]> for Rect<F> {
    type Error = GeomError;

    /// Reads `[x, y, width, height]`.
    fn try_from(coords: &[F]) -> Result<Self, Self::Error> {
        match *coords {
            [x, y, width, height] => Ok(Self::new(x, y, width, height)),
            _ => Err(GeomError::CoordinateCount {
                expected: 4,
                found: coords.len(),
            }),
        }
    }
}
