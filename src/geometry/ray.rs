use serde::Serialize;

use crate::error::Result;
use crate::math::Vector2;

/// A half-line from `origin` along a unit `direction`.
///
/// A near-zero input direction normalizes to the zero vector; such a ray is
/// valid but degenerate and only ever reaches its own origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ray {
    origin: Vector2,
    direction: Vector2,
}

impl Ray {
    #[must_use]
    pub fn new(origin: Vector2, direction: Vector2) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Creates a ray from raw origin and direction coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is not finite.
    pub fn from_coords(ox: f64, oy: f64, dx: f64, dy: f64) -> Result<Self> {
        Ok(Self::new(Vector2::new(ox, oy)?, Vector2::new(dx, dy)?))
    }

    /// Creates a ray from `origin` passing through `through`.
    #[must_use]
    pub fn from_points(origin: Vector2, through: Vector2) -> Self {
        Self::new(origin, through - origin)
    }

    #[must_use]
    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    /// The unit direction, or zero for a degenerate ray.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vector2::ZERO
    }

    /// Returns `origin + direction * distance`. Negative distances land behind the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if `distance` or the resulting point is not finite.
    pub fn point_at(&self, distance: f64) -> Result<Vector2> {
        self.origin.checked_add(self.direction.scale(distance)?)
    }
}
