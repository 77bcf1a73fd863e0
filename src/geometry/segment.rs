use serde::Serialize;

use crate::error::{ensure_finite, Result};
use crate::math::{Vector2, EPSILON};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Returns whether `point` lies inside the box grown by `epsilon` on every side.
    #[must_use]
    pub fn contains(&self, point: Vector2, epsilon: f64) -> bool {
        point.x() >= self.min_x - epsilon
            && point.x() <= self.max_x + epsilon
            && point.y() >= self.min_y - epsilon
            && point.y() <= self.max_y + epsilon
    }
}

/// A finite, immutable line segment.
///
/// The segment may be degenerate (`start == end`); every operation below has
/// a defined result for that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    start: Vector2,
    end: Vector2,
}

impl LineSegment {
    #[must_use]
    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }

    /// Creates a segment from raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is not finite, or if `end - start`
    /// overflows.
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self> {
        let start = Vector2::new(x0, y0)?;
        let end = Vector2::new(x1, y1)?;
        end.checked_sub(start)?;
        Ok(Self::new(start, end))
    }

    #[must_use]
    pub fn start(&self) -> Vector2 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Vector2 {
        self.end
    }

    /// Returns whether the endpoints are within `epsilon` of each other.
    #[must_use]
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.start.distance(self.end) <= epsilon
    }

    /// The displacement `end - start`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end - self.start
    }

    /// Unit direction from start to end; zero for a degenerate segment.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.vector().normalize()
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    #[must_use]
    pub fn midpoint(&self) -> Vector2 {
        self.start.scaled(0.5) + self.end.scaled(0.5)
    }

    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Evaluates `start + t * (end - start)` without clamping `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` or the resulting point is not finite.
    pub fn point_at(&self, t: f64) -> Result<Vector2> {
        let t = ensure_finite(t, "t")?;
        let (start, end) = (self.start, self.end);
        Vector2::new(
            start.x() + (end.x() - start.x()) * t,
            start.y() + (end.y() - start.y()) * t,
        )
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            min_x: self.start.x().min(self.end.x()),
            max_x: self.start.x().max(self.end.x()),
            min_y: self.start.y().min(self.end.y()),
            max_y: self.start.y().max(self.end.y()),
        }
    }

    /// Extends both ends outward along the segment direction by `delta`.
    ///
    /// A degenerate segment has no direction and is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if `delta` is not finite or an extended endpoint overflows.
    pub fn expand(&self, delta: f64) -> Result<Self> {
        let offset = self.direction().scale(delta)?;
        Ok(Self::new(
            self.start.checked_sub(offset)?,
            self.end.checked_add(offset)?,
        ))
    }

    /// Closest point on the segment to `point`, with the projection clamped
    /// to the segment's extent. A degenerate segment always answers `start`.
    #[must_use]
    pub fn closest_point(&self, point: Vector2) -> Vector2 {
        if self.is_degenerate(EPSILON) {
            return self.start;
        }
        let segment_vector = self.vector();
        let t = ((point - self.start).dot(segment_vector) / segment_vector.length_squared())
            .clamp(0.0, 1.0);
        self.start + segment_vector.scaled(t)
    }

    #[must_use]
    pub fn distance_to_point(&self, point: Vector2) -> f64 {
        self.closest_point(point).distance(point)
    }

    /// Mirrors `point` across the segment's infinite supporting line.
    ///
    /// Returns `None` for a degenerate segment, which has no supporting line.
    #[must_use]
    pub fn reflect_point(&self, point: Vector2) -> Option<Vector2> {
        if self.is_degenerate(EPSILON) {
            return None;
        }
        let start_to_point = point - self.start;
        let projection = start_to_point.project(self.vector());
        Some(self.start + projection.scaled(2.0) - start_to_point)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y).unwrap()
    }

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
        LineSegment::from_coords(x0, y0, x1, y1).unwrap()
    }

    // ── construction and accessors ──

    #[test]
    fn from_coords_rejects_non_finite() {
        assert!(LineSegment::from_coords(0.0, f64::NAN, 1.0, 1.0).is_err());
        assert!(LineSegment::from_coords(0.0, 0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn basic_measures() {
        let s = seg(0.0, 0.0, 6.0, 8.0);
        assert_abs_diff_eq!(s.length(), 10.0);
        assert_eq!(s.midpoint(), v(3.0, 4.0));
        assert!(s.direction().approx_eq(v(0.6, 0.8)));
        assert_eq!(s.reverse().start(), v(6.0, 8.0));
        assert_eq!(s.reverse().end(), v(0.0, 0.0));
    }

    #[test]
    fn point_at_is_unclamped() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert_eq!(s.point_at(0.5).unwrap(), v(1.0, 0.0));
        assert_eq!(s.point_at(-1.0).unwrap(), v(-2.0, 0.0));
        assert!(s.point_at(f64::NAN).is_err());
    }

    #[test]
    fn overflowing_results_are_errors() {
        assert!(LineSegment::from_coords(-f64::MAX, 0.0, f64::MAX, 0.0).is_err());
        let long = seg(0.0, 0.0, f64::MAX, 0.0);
        assert!(long.point_at(2.0).is_err());
        assert!(long.expand(f64::MAX).is_err());
        assert_eq!(long.point_at(0.5).unwrap(), v(f64::MAX / 2.0, 0.0));
        assert_eq!(seg(f64::MAX, 0.0, f64::MAX, 2.0).midpoint(), v(f64::MAX, 1.0));
    }

    #[test]
    fn bounding_box_orders_extents() {
        let bb = seg(3.0, -1.0, -2.0, 4.0).bounding_box();
        assert_abs_diff_eq!(bb.min_x, -2.0);
        assert_abs_diff_eq!(bb.max_x, 3.0);
        assert_abs_diff_eq!(bb.min_y, -1.0);
        assert_abs_diff_eq!(bb.max_y, 4.0);
        assert!(bb.contains(v(0.0, 0.0), 0.0));
        assert!(!bb.contains(v(3.5, 0.0), 0.1));
    }

    #[test]
    fn expand_grows_both_ends() {
        let s = seg(0.0, 0.0, 10.0, 0.0).expand(2.0).unwrap();
        assert!(s.start().approx_eq(v(-2.0, 0.0)));
        assert!(s.end().approx_eq(v(12.0, 0.0)));
    }

    #[test]
    fn expand_degenerate_is_unchanged() {
        let s = seg(1.0, 1.0, 1.0, 1.0);
        assert_eq!(s.expand(5.0).unwrap(), s);
    }

    #[test]
    fn degenerate_detection() {
        assert!(seg(1.0, 1.0, 1.0, 1.0).is_degenerate(EPSILON));
        assert!(!seg(0.0, 0.0, 1e-3, 0.0).is_degenerate(EPSILON));
        assert!(seg(0.0, 0.0, 1e-3, 0.0).is_degenerate(1e-2));
        assert_eq!(seg(2.0, 2.0, 2.0, 2.0).direction(), Vector2::ZERO);
    }

    // ── closest point and distance ──

    #[test]
    fn closest_point_clamps_to_extents() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_eq!(s.closest_point(v(-5.0, 5.0)), v(0.0, 0.0));
        assert_eq!(s.closest_point(v(20.0, -3.0)), v(10.0, 0.0));
        assert_eq!(s.closest_point(v(4.0, 7.0)), v(4.0, 0.0));
    }

    #[test]
    fn distance_is_perpendicular_inside_extent() {
        let s = seg(0.0, 0.0, 0.0, 10.0);
        assert_abs_diff_eq!(s.distance_to_point(v(4.0, 5.0)), 4.0);
    }

    #[test]
    fn distance_to_degenerate_segment() {
        let s = seg(2.0, 2.0, 2.0, 2.0);
        assert_eq!(s.closest_point(v(5.0, 6.0)), v(2.0, 2.0));
        assert_abs_diff_eq!(s.distance_to_point(v(5.0, 6.0)), 3.0_f64.hypot(4.0));
    }

    // ── reflection ──

    #[test]
    fn reflect_across_horizontal_axis() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_eq!(s.reflect_point(v(4.0, 5.0)).unwrap(), v(4.0, -5.0));
    }

    #[test]
    fn reflect_across_diagonal_uses_infinite_line() {
        let s = seg(0.0, 0.0, 1.0, 1.0);
        let reflected = s.reflect_point(v(5.0, 0.0)).unwrap();
        assert!(reflected.approx_eq(v(0.0, 5.0)), "{reflected:?}");
    }

    #[test]
    fn reflect_on_degenerate_is_none() {
        let s = seg(1.0, 1.0, 1.0, 1.0);
        assert!(s.reflect_point(v(2.0, 3.0)).is_none());
    }
}
