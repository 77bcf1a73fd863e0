use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{intersect_segments, IntersectOptions, LineSegment};
use crate::math::Vector2;

use super::POINT_TOLERANCE;

/// Pivot point and unit direction of an angle bisector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisector {
    pub pivot: Vector2,
    pub direction: Vector2,
}

/// Bisects the angle formed by two intersecting segments.
///
/// The pivot is where the segments meet. Each segment contributes the
/// direction leaving the pivot: along the segment if the pivot is one of its
/// endpoints, otherwise toward its nearer endpoint.
pub struct AngleBisector {
    first: LineSegment,
    second: LineSegment,
}

impl AngleBisector {
    /// Creates a new `AngleBisector` operation.
    #[must_use]
    pub fn new(first: LineSegment, second: LineSegment) -> Self {
        Self { first, second }
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Failed` if the segments do not meet or point
    /// in opposite directions, and `OperationError::InvalidInput` if a
    /// segment is degenerate at the pivot.
    pub fn execute(&self) -> Result<Bisector> {
        let options = IntersectOptions::with_epsilon(POINT_TOLERANCE);
        let Some(hit) = intersect_segments(&self.first, &self.second, options) else {
            debug!("bisector segments do not intersect");
            return Err(OperationError::Failed("segments do not intersect".into()).into());
        };
        let pivot = hit.point;

        let (Some(a), Some(b)) = (
            direction_from(&self.first, pivot),
            direction_from(&self.second, pivot),
        ) else {
            return Err(
                OperationError::InvalidInput("segment is degenerate at the pivot".into()).into(),
            );
        };

        let direction = (a.normalize() + b.normalize()).normalize();
        if direction == Vector2::ZERO {
            debug!(?pivot, "bisector directions cancel out");
            return Err(
                OperationError::Failed("segments point in opposite directions".into()).into(),
            );
        }
        Ok(Bisector { pivot, direction })
    }
}

fn direction_from(segment: &LineSegment, pivot: Vector2) -> Option<Vector2> {
    let (start, end) = (segment.start(), segment.end());
    let to_start = start.distance(pivot);
    let to_end = end.distance(pivot);

    if to_start <= POINT_TOLERANCE && to_end <= POINT_TOLERANCE {
        return None;
    }
    if to_start <= POINT_TOLERANCE {
        return Some(end - start);
    }
    if to_end <= POINT_TOLERANCE {
        return Some(start - end);
    }
    if to_start < to_end {
        Some(start - pivot)
    } else {
        Some(end - pivot)
    }
}
