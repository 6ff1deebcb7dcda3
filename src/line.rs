//! Straight line segment between two points.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A directed line segment.
///
/// Equality is endpoint-wise and NOT direction-invariant: reversing
/// start and end produces an unequal line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Line {
        Line { start, end }
    }

    /// Euclidean length. Zero for a degenerate segment.
    pub fn length(self) -> f64 {
        self.start.distance(self.end)
    }

    /// Angle from start toward end, in degrees, 0° pointing up.
    pub fn angle(self) -> f64 {
        self.start.angle_to(self.end)
    }

    #[inline]
    pub fn dx(self) -> f64 {
        self.end.x - self.start.x
    }

    #[inline]
    pub fn dy(self) -> f64 {
        self.end.y - self.start.y
    }

    pub fn midpoint(self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Translate both endpoints.
    pub fn shift(self, dx: f64, dy: f64) -> Line {
        let delta = Point::new(dx, dy);
        Line::new(self.start + delta, self.end + delta)
    }

    /// True when the segment is axis-aligned.
    pub fn is_orthogonal(self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }

    /// Crossing point of the infinite lines through both segments.
    ///
    /// Both segments are extended to full lines, so the crossing point may
    /// lie outside either segment's extent. `None` when the direction
    /// vectors are parallel or either segment is degenerate (the
    /// determinant of the two directions is zero).
    pub fn intersection(self, other: Line) -> Option<Point> {
        let d1 = self.end.to_vec() - self.start.to_vec();
        let d2 = other.end.to_vec() - other.start.to_vec();
        let u = d1.perp_dot(d2);
        if u == 0.0 {
            return None;
        }
        let t = (other.start.to_vec() - self.start.to_vec()).perp_dot(d2) / u;
        Some(Point::from_vec(self.start.to_vec() + d1 * t))
    }

    /// Line through `p` perpendicular to this one.
    ///
    /// The direction vector is rotated a quarter turn; the result keeps
    /// this segment's length.
    pub fn perpendicular_through(self, p: Point) -> Line {
        let dir = (self.end.to_vec() - self.start.to_vec()).perp();
        Line::new(p, Point::from_vec(p.to_vec() + dir))
    }

    /// Orthogonal projection of `p` onto the infinite line through this
    /// segment. `None` when the segment is degenerate.
    pub fn project(self, p: Point) -> Option<Point> {
        self.intersection(self.perpendicular_through(p))
    }
}
