use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::LineSegment;

use super::MIN_SEGMENT_LENGTH;

/// Mirrors a segment across the infinite line through an axis segment.
pub struct MirrorSegment {
    axis: LineSegment,
    segment: LineSegment,
    min_length: f64,
}

impl MirrorSegment {
    /// Creates a new `MirrorSegment` operation.
    #[must_use]
    pub fn new(axis: LineSegment, segment: LineSegment) -> Self {
        Self {
            axis,
            segment,
            min_length: MIN_SEGMENT_LENGTH,
        }
    }

    #[must_use]
    pub fn with_min_length(mut self, min_length: f64) -> Self {
        self.min_length = min_length;
        self
    }

    /// Executes the reflection.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the axis is degenerate or the
    /// mirrored segment is shorter than the minimum length.
    pub fn execute(&self) -> Result<LineSegment> {
        let (Some(start), Some(end)) = (
            self.axis.reflect_point(self.segment.start()),
            self.axis.reflect_point(self.segment.end()),
        ) else {
            debug!("mirror axis is degenerate");
            return Err(OperationError::InvalidInput("mirror axis is degenerate".into()).into());
        };

        let mirrored = LineSegment::new(start, end);
        if mirrored.length() < self.min_length {
            return Err(OperationError::InvalidInput(format!(
                "mirrored segment length {} is below {}",
                mirrored.length(),
                self.min_length
            ))
            .into());
        }
        Ok(mirrored)
    }
}
