//! 2D point with distance, angle, and alignment operations.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::rect::Rect;

/// A 2D coordinate.
///
/// `Point` is a plain value: every operation returns a new point and the
/// inputs are left alone. NaN is a valid transient state and propagates
/// through arithmetic unchecked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A point re-expressed relative to a reference rectangle.
///
/// Produced by [`Point::relative_to`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelativePoint {
    /// Coordinates relative to the rectangle's top-left corner.
    pub offset: Point,
    /// Normalized position within the rectangle (x/width, y/height).
    ///
    /// Unbounded: a point outside the rectangle yields progress outside
    /// [0, 1], and a zero-sized dimension yields ±infinity or NaN.
    pub progress: Point,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Convert to a glam vector for computation.
    #[inline]
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Convert back from a glam vector.
    #[inline]
    pub fn from_vec(v: DVec2) -> Point {
        Point { x: v.x, y: v.y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (other.to_vec() - self.to_vec()).length()
    }

    /// Angle toward another point, in degrees, with 0° pointing up.
    ///
    /// atan2 measures from the positive x axis; the −90° shift moves the
    /// zero reference to "north" (the positive y direction).
    pub fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees() - 90.0
    }

    /// Midpoint between two points.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// The candidate nearest to this point.
    ///
    /// Ties resolve to the earliest candidate in the list. `None` for an
    /// empty list.
    pub fn closest(self, candidates: &[Point]) -> Option<Point> {
        let (&first, rest) = candidates.split_first()?;
        let mut best = first;
        let mut best_distance = self.distance(best);
        for &candidate in rest {
            let d = self.distance(candidate);
            if d < best_distance {
                best = candidate;
                best_distance = d;
            }
        }
        Some(best)
    }

    /// Round both components to the nearest integer (ties to even).
    pub fn pixel_align(self) -> Point {
        Point::new(self.x.round_ties_even(), self.y.round_ties_even())
    }

    /// Re-express this point relative to `bounds`, adjusting for `scroll`.
    ///
    /// The progress pair divides by the rectangle's dimensions without
    /// guarding: a zero-sized rectangle yields infinite or NaN progress.
    pub fn relative_to(self, bounds: Rect, scroll: Point) -> RelativePoint {
        let offset = Point::new(
            self.x + scroll.x - bounds.min_x(),
            self.y + scroll.y - bounds.min_y(),
        );
        let progress = Point::new(offset.x / bounds.width(), offset.y / bounds.height());
        RelativePoint { offset, progress }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
