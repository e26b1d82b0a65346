//! 2D extent (width and height).

use crate::error::GeomError;
use num_traits::Float;

/// Width and height of an axis-aligned region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size2<F> {
    pub width: F,
    pub height: F,
}

impl<F: Float> Size2<F> {
    /// Creates a size without validation.
    #[inline]
    pub fn new(width: F, height: F) -> Self {
        Self { width, height }
    }

    /// Creates a size, rejecting negative or non-finite extents.
    pub fn try_new(width: F, height: F) -> Result<Self, GeomError> {
        if !width.is_finite() || !height.is_finite() || width < F::zero() || height < F::zero() {
            return Err(GeomError::InvalidExtent);
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(F::zero(), F::zero())
    }

    /// Returns `width * height`.
    #[inline]
    pub fn area(self) -> F {
        self.width * self.height
    }

    /// Returns `true` if either extent is zero or negative.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= F::zero() || self.height <= F::zero()
    }
}

impl<F: Float> From<(F, F)> for Size2<F> {
    fn from((width, height): (F, F)) -> Self {
        Self::new(width, height)
    }
}

impl<F: Float> Default for Size2<F> {
    fn default() -> Self {
        Self::zero()
    }
}
