use std::ops::{Add, Neg, Sub};

use serde::Serialize;

use super::EPSILON;
use crate::error::{ensure_finite, GeometryError, Result};

/// An immutable 2D vector or point with finite coordinates.
///
/// Every value is validated at construction. Operations that take an extra
/// scalar (`scale`, `lerp`, `rotate`) validate both the scalar and the
/// result, so overflow surfaces as an error instead of an infinite coordinate.
///
/// The `+`, `-` operators assume coordinates stay below `f64::MAX / 2` in
/// magnitude, which holds for any drawing-space input. Use
/// [`Vector2::checked_add`] and [`Vector2::checked_sub`] when operands are
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from two finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if either coordinate is NaN or infinite.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        Ok(Self {
            x: ensure_finite(x, "x")?,
            y: ensure_finite(y, "y")?,
        })
    }

    /// Builds a vector from coordinates already known to be finite.
    pub(crate) const fn from_parts(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    fn to_nalgebra(self) -> nalgebra::Vector2<f64> {
        nalgebra::Vector2::new(self.x, self.y)
    }

    /// Multiplies both coordinates by `scalar`.
    ///
    /// # Errors
    ///
    /// Returns an error if `scalar` or the result is not finite.
    pub fn scale(self, scalar: f64) -> Result<Self> {
        let scalar = ensure_finite(scalar, "scalar")?;
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Adds `other`, failing instead of overflowing.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if a coordinate of the sum overflows.
    pub fn checked_add(self, other: Self) -> Result<Self> {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Subtracts `other`, failing instead of overflowing.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if a coordinate of the difference overflows.
    pub fn checked_sub(self, other: Self) -> Result<Self> {
        Self::new(self.x - other.x, self.y - other.y)
    }

    pub(crate) fn scaled(self, scalar: f64) -> Self {
        Self::from_parts(self.x * scalar, self.y * scalar)
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.to_nalgebra().dot(&other.to_nalgebra())
    }

    /// 2D scalar cross product `ax * by - ay * bx`.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.to_nalgebra().perp(&other.to_nalgebra())
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).length_squared()
    }

    /// Returns the unit vector in the same direction, or zero if the length
    /// is at most [`EPSILON`].
    #[must_use]
    pub fn normalize(self) -> Self {
        self.normalize_with(EPSILON)
    }

    /// Like [`Vector2::normalize`] with an explicit zero-length threshold.
    #[must_use]
    pub fn normalize_with(self, epsilon: f64) -> Self {
        let len = self.length();
        if len <= epsilon {
            return Self::ZERO;
        }
        self.scaled(1.0 / len)
    }

    /// Rotates by +90 degrees.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self::from_parts(-self.y, self.x)
    }

    /// Projects `self` onto `onto`. Projecting onto the zero vector yields zero.
    #[must_use]
    pub fn project(self, onto: Self) -> Self {
        let denom = onto.length_squared();
        if denom == 0.0 {
            return Self::ZERO;
        }
        onto.scaled(self.dot(onto) / denom)
    }

    /// Linear interpolation `a * (1 - t) + b * t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` or the result is not finite.
    pub fn lerp(a: Self, b: Self, t: f64) -> Result<Self> {
        let t = ensure_finite(t, "t")?;
        Self::new(a.x * (1.0 - t) + b.x * t, a.y * (1.0 - t) + b.y * t)
    }

    /// Component-wise comparison within `epsilon`.
    #[must_use]
    pub fn equals(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    /// [`Vector2::equals`] with the default [`EPSILON`].
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        self.equals(other, EPSILON)
    }

    /// Unsigned angle between two vectors in `[0, π]`; zero if either is the
    /// zero vector.
    #[must_use]
    pub fn angle_between(self, other: Self) -> f64 {
        let denom = (self.length_squared() * other.length_squared()).sqrt();
        if denom == 0.0 {
            return 0.0;
        }
        // Round-off can push the cosine slightly outside acos's domain.
        let cosine = (self.dot(other) / denom).clamp(-1.0, 1.0);
        cosine.acos()
    }

    /// Rotates counter-clockwise by `radians`.
    ///
    /// # Errors
    ///
    /// Returns an error if `radians` or the result is not finite.
    pub fn rotate(self, radians: f64) -> Result<Self> {
        let radians = ensure_finite(radians, "radians")?;
        let rotated = nalgebra::Rotation2::new(radians) * self.to_nalgebra();
        Self::new(rotated.x, rotated.y)
    }

    /// Polar angle of the vector, normalized into `[0, 2π)`.
    #[must_use]
    pub fn polar_angle(self) -> f64 {
        let angle = self.y.atan2(self.x).rem_euclid(std::f64::consts::TAU);
        // rem_euclid can round up to exactly TAU for tiny negative angles.
        if angle >= std::f64::consts::TAU {
            0.0
        } else {
            angle
        }
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_parts(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_parts(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_parts(-self.x, -self.y)
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(v: Vector2) -> Self {
        v.to_nalgebra()
    }
}

impl From<Vector2> for nalgebra::Point2<f64> {
    fn from(v: Vector2) -> Self {
        nalgebra::Point2::new(v.x, v.y)
    }
}

impl TryFrom<nalgebra::Vector2<f64>> for Vector2 {
    type Error = GeometryError;

    fn try_from(v: nalgebra::Vector2<f64>) -> std::result::Result<Self, GeometryError> {
        Ok(Self::from_parts(ensure_finite(v.x, "x")?, ensure_finite(v.y, "y")?))
    }
}

impl TryFrom<(f64, f64)> for Vector2 {
    type Error = GeometryError;

    fn try_from((x, y): (f64, f64)) -> std::result::Result<Self, GeometryError> {
        Ok(Self::from_parts(ensure_finite(x, "x")?, ensure_finite(y, "y")?))
    }
}
