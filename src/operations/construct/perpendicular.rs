use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::LineSegment;
use crate::math::Vector2;

use super::MIN_SEGMENT_LENGTH;

/// Drops a perpendicular from a point onto a base segment.
///
/// The result runs from the foot on the base (clamped to the base's extent)
/// to the point.
pub struct PerpendicularFoot {
    base: LineSegment,
    point: Vector2,
    min_length: f64,
}

impl PerpendicularFoot {
    /// Creates a new `PerpendicularFoot` operation.
    #[must_use]
    pub fn new(base: LineSegment, point: Vector2) -> Self {
        Self {
            base,
            point,
            min_length: MIN_SEGMENT_LENGTH,
        }
    }

    /// Overrides the shortest segment the operation will produce.
    #[must_use]
    pub fn with_min_length(mut self, min_length: f64) -> Self {
        self.min_length = min_length;
        self
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the point is closer to the
    /// base than the minimum length.
    pub fn execute(&self) -> Result<LineSegment> {
        let foot = self.base.closest_point(self.point);
        let length = foot.distance(self.point);
        if length < self.min_length {
            debug!(length, min = self.min_length, "perpendicular too short");
            return Err(OperationError::InvalidInput(format!(
                "perpendicular length {length} is below {}",
                self.min_length
            ))
            .into());
        }
        Ok(LineSegment::new(foot, self.point))
    }
}
