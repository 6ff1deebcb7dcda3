//! Width/height pair with aspect-ratio-aware resizing.

use std::fmt;
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// A 2D extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f64, height: f64) -> Size {
        Size { width, height }
    }

    /// Square bounding a circle of radius `r` (side 2r).
    pub fn from_radius(r: f64) -> Size {
        Size::new(r * 2.0, r * 2.0)
    }

    /// Square of side `d`.
    pub fn from_square(d: f64) -> Size {
        Size::new(d, d)
    }

    /// width / height.
    ///
    /// Unguarded: a zero height yields ±infinity, and 0/0 yields NaN.
    #[inline]
    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height
    }

    #[inline]
    pub fn longest_side(self) -> f64 {
        self.width.max(self.height)
    }

    #[inline]
    pub fn shortest_side(self) -> f64 {
        self.width.min(self.height)
    }

    /// True only when BOTH dimensions are zero.
    ///
    /// A 0×5 size still has extent on one axis and is not empty, even
    /// though its area is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Swapped dimensions.
    pub fn flip(self) -> Size {
        Size::new(self.height, self.width)
    }

    /// Update whichever dimensions are supplied.
    ///
    /// With `lock_aspect_ratio`, a lone width or height derives the other
    /// dimension from the *current* ratio (width → height = width / ratio,
    /// height → width = height × ratio). Locking is skipped when the
    /// current ratio is zero or NaN rather than propagating garbage.
    pub fn resize(
        self,
        width: Option<f64>,
        height: Option<f64>,
        lock_aspect_ratio: bool,
    ) -> Size {
        let ratio = self.aspect_ratio();
        let lock = lock_aspect_ratio && ratio != 0.0 && !ratio.is_nan();
        match (width, height) {
            (Some(w), Some(h)) => Size::new(w, h),
            (Some(w), None) if lock => Size::new(w, w / ratio),
            (None, Some(h)) if lock => Size::new(h * ratio, h),
            (Some(w), None) => Size::new(w, self.height),
            (None, Some(h)) => Size::new(self.width, h),
            (None, None) => self,
        }
    }
}

impl Mul<f64> for Size {
    type Output = Size;
    fn mul(self, rhs: f64) -> Size {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

impl Div<f64> for Size {
    type Output = Size;
    fn div(self, rhs: f64) -> Size {
        Size::new(self.width / rhs, self.height / rhs)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}
