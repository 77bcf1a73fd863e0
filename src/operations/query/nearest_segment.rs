use crate::geometry::LineSegment;
use crate::math::Vector2;

/// Result of a nearest-segment query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestSegmentResult {
    /// Index of the picked segment in the queried slice.
    pub index: usize,
    /// Distance from the query point to the segment.
    pub distance: f64,
}

/// Picks the segment closest to a point, within a tolerance.
pub struct NearestSegment {
    point: Vector2,
    tolerance: f64,
}

impl NearestSegment {
    /// Creates a new `NearestSegment` query.
    #[must_use]
    pub fn new(point: Vector2, tolerance: f64) -> Self {
        Self { point, tolerance }
    }

    /// Executes the query. Ties keep the earliest segment; a best distance
    /// greater than the tolerance yields `None`.
    #[must_use]
    pub fn execute(&self, segments: &[LineSegment]) -> Option<NearestSegmentResult> {
        let mut best: Option<NearestSegmentResult> = None;
        for (index, segment) in segments.iter().enumerate() {
            let distance = segment.distance_to_point(self.point);
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(NearestSegmentResult { index, distance });
            }
        }
        best.filter(|b| b.distance <= self.tolerance)
    }
}
