//! Axis-aligned rectangle composed of an origin point and a size.
//!
//! Every edge, corner, and center coordinate is recomputed from
//! origin + size on each call; nothing is cached, so the accessors can
//! never disagree with the fields.

use glam::DVec2;

use crate::line::Line;
use crate::point::Point;
use crate::size::Size;

/// An axis-aligned rectangle.
///
/// The origin is the top-left corner (minimum x/y); `max_x = x + width`
/// and `max_y = y + height`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Rect {
        Rect { origin, size }
    }

    /// The minimal axis-aligned box bounding every given point.
    ///
    /// An empty slice yields [`Rect::ZERO`].
    pub fn from_points(points: &[Point]) -> Rect {
        let Some((&first, rest)) = points.split_first() else {
            return Rect::ZERO;
        };
        let mut min = first;
        let mut max = first;
        for &p in rest {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Bounding box across all given rects' corners.
    pub fn merge(rects: &[Rect]) -> Rect {
        let corners: Vec<Point> = rects
            .iter()
            .flat_map(|r| [r.top_left(), r.bottom_right()])
            .collect();
        Rect::from_points(&corners)
    }

    /// Bounding box of this rect and another.
    pub fn union(self, other: Rect) -> Rect {
        Rect::merge(&[self, other])
    }

    // ========================================================================
    // Derived coordinates (pure functions of origin/size)
    // ========================================================================

    #[inline]
    pub fn min_x(self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn mid_x(self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    #[inline]
    pub fn max_x(self) -> f64 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn min_y(self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn mid_y(self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    #[inline]
    pub fn max_y(self) -> f64 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.size.width
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.size.height
    }

    pub fn center(self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    pub fn top_left(self) -> Point {
        Point::new(self.min_x(), self.min_y())
    }

    pub fn top_right(self) -> Point {
        Point::new(self.max_x(), self.min_y())
    }

    pub fn bottom_right(self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    pub fn bottom_left(self) -> Point {
        Point::new(self.min_x(), self.max_y())
    }

    pub fn top_center(self) -> Point {
        Point::new(self.mid_x(), self.min_y())
    }

    pub fn right_center(self) -> Point {
        Point::new(self.max_x(), self.mid_y())
    }

    pub fn bottom_center(self) -> Point {
        Point::new(self.mid_x(), self.max_y())
    }

    pub fn left_center(self) -> Point {
        Point::new(self.min_x(), self.mid_y())
    }

    // Edge segments run clockwise: top TL→TR, right TR→BR, bottom BR→BL,
    // left BL→TL.

    pub fn top_edge(self) -> Line {
        Line::new(self.top_left(), self.top_right())
    }

    pub fn right_edge(self) -> Line {
        Line::new(self.top_right(), self.bottom_right())
    }

    pub fn bottom_edge(self) -> Line {
        Line::new(self.bottom_right(), self.bottom_left())
    }

    pub fn left_edge(self) -> Line {
        Line::new(self.bottom_left(), self.top_left())
    }

    // ========================================================================
    // Alignment and adjustment
    // ========================================================================

    /// Round to the pixel grid, keeping the far edges exact.
    ///
    /// The near and far edges round independently and the dimensions are
    /// recomputed from the rounded edges, clamped to ≥ 0. Rounding x and
    /// width separately would compound two errors and let the far edge
    /// drift off-grid.
    pub fn pixel_align(self) -> Rect {
        let x = self.min_x().round_ties_even();
        let y = self.min_y().round_ties_even();
        let far_x = self.max_x().round_ties_even();
        let far_y = self.max_y().round_ties_even();
        Rect::new(x, y, (far_x - x).max(0.0), (far_y - y).max(0.0))
    }

    /// Symmetric outset: each edge moves outward by `delta`.
    ///
    /// A negative delta insets.
    pub fn inflate(self, delta: f64) -> Rect {
        Rect::new(
            self.min_x() - delta,
            self.min_y() - delta,
            self.width() + delta * 2.0,
            self.height() + delta * 2.0,
        )
    }

    /// Move the origin by the given offset.
    pub fn translate(self, by: Point) -> Rect {
        Rect::from_origin_size(self.origin + by, self.size)
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Inclusive containment test.
    ///
    /// Fails closed when this rect's own origin has a NaN coordinate. A
    /// NaN point is not independently rejected; the comparisons are simply
    /// never true for it.
    pub fn contains_point(self, p: Point) -> bool {
        if self.origin.x.is_nan() || self.origin.y.is_nan() {
            return false;
        }
        self.min_x() <= p.x && p.x <= self.max_x() && self.min_y() <= p.y && p.y <= self.max_y()
    }

    /// True when every corner of `other` lies within this rect.
    pub fn contains_rect(self, other: Rect) -> bool {
        self.contains_point(other.top_left())
            && self.contains_point(other.top_right())
            && self.contains_point(other.bottom_right())
            && self.contains_point(other.bottom_left())
    }

    /// Separating-axis test with strict inequalities: rectangles that only
    /// touch at an edge or corner do not intersect.
    pub fn intersects(self, other: Rect) -> bool {
        self.min_x() < other.max_x()
            && self.min_y() < other.max_y()
            && self.max_x() > other.min_x()
            && self.max_y() > other.min_y()
    }

    /// The overlapping region, or `None` when [`Rect::intersects`] is
    /// false (including edge-touching pairs).
    pub fn intersection(self, other: Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let x = self.min_x().max(other.min_x());
        let y = self.min_y().max(other.min_y());
        let width = self.max_x().min(other.max_x()) - x;
        let height = self.max_y().min(other.max_y()) - y;
        Some(Rect::new(x, y, width, height))
    }

    /// True when the rects overlap on the X axis OR the Y axis alone.
    ///
    /// Looser than [`Rect::intersects`], which requires overlap on both
    /// axes at once. Two rects side by side at the same height overlap
    /// (shared Y interval) without intersecting.
    pub fn overlaps(self, other: Rect) -> bool {
        let x_overlap = self.min_x() < other.max_x() && self.max_x() > other.min_x();
        let y_overlap = self.min_y() < other.max_y() && self.max_y() > other.min_y();
        x_overlap || y_overlap
    }

    /// Distance from `p` to the nearest edge, 0 when `p` is inside.
    ///
    /// Per-axis gaps clamp to ≥ 0; the result is the Euclidean norm of
    /// the two gaps.
    pub fn distance_to_point(self, p: Point) -> f64 {
        let dx = (self.min_x() - p.x).max(p.x - self.max_x()).max(0.0);
        let dy = (self.min_y() - p.y).max(p.y - self.max_y()).max(0.0);
        DVec2::new(dx, dy).length()
    }
}
