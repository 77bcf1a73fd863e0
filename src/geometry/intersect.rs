//! Segment-segment and ray-segment intersection under a tolerance.
//!
//! "No intersection" is a normal outcome and is reported as `None`, never as
//! an error. Collinear overlaps are reduced to a single representative point.

use serde::Serialize;

use super::{LineSegment, Ray};
use crate::math::intersect_2d::{collinear_overlap_midpoint, line_line_intersect_2d, point_at};
use crate::math::{Vector2, EPSILON};

/// How two primitives meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntersectionKind {
    /// A single crossing point inside both parameter ranges.
    Proper,
    /// The primitives lie on a common line and their ranges overlap.
    Collinear,
}

/// Parameters of an intersection point on each primitive.
///
/// `primary` refers to the first argument (segment `a` or the ray). For a
/// collinear result `secondary` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntersectionParameters {
    pub primary: f64,
    pub secondary: Option<f64>,
}

/// A found intersection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Intersection {
    pub point: Vector2,
    pub parameters: IntersectionParameters,
    pub kind: IntersectionKind,
}

/// Tolerance settings for intersection queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectOptions {
    pub epsilon: f64,
}

impl Default for IntersectOptions {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

impl IntersectOptions {
    #[must_use]
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

/// Intersects two segments.
///
/// Proper crossings accept parameters in the widened open interval
/// `(-epsilon, 1 + epsilon)`, so touching endpoints count. Collinear overlaps
/// report the midpoint of the overlapping range on `a`.
#[must_use]
pub fn intersect_segments(
    a: &LineSegment,
    b: &LineSegment,
    options: IntersectOptions,
) -> Option<Intersection> {
    let eps = options.epsilon;
    let p = a.start();
    let r = a.vector();
    let q = b.start();
    let s = b.vector();

    // A degenerate `a` is a point: it meets `b` only by lying on it.
    if a.is_degenerate(eps) {
        if b.distance_to_point(p) <= eps {
            return Some(Intersection {
                point: p,
                parameters: IntersectionParameters {
                    primary: 0.0,
                    secondary: None,
                },
                kind: IntersectionKind::Collinear,
            });
        }
        return None;
    }

    let denominator = r.cross(s);
    let numerator = (q - p).cross(r);

    if denominator.abs() <= eps && numerator.abs() <= eps {
        let t = collinear_overlap_midpoint(p, r, q, s)?;
        return Some(Intersection {
            point: point_at(p, r, t),
            parameters: IntersectionParameters {
                primary: t,
                secondary: None,
            },
            kind: IntersectionKind::Collinear,
        });
    }

    let (t, u) = line_line_intersect_2d(p, r, q, s, eps)?;
    if !within_widened_unit(t, eps) || !within_widened_unit(u, eps) {
        return None;
    }

    Some(Intersection {
        point: point_at(p, r, t),
        parameters: IntersectionParameters {
            primary: t,
            secondary: Some(u),
        },
        kind: IntersectionKind::Proper,
    })
}

/// Intersects a ray with a segment.
///
/// Hits strictly behind the origin (beyond `epsilon`) are rejected. When the
/// segment lies along the ray, the nearest segment endpoint at or in front of
/// the origin is reported as a collinear hit; `primary` is then the distance
/// along the ray.
#[must_use]
pub fn intersect_ray_segment(
    ray: &Ray,
    segment: &LineSegment,
    options: IntersectOptions,
) -> Option<Intersection> {
    let eps = options.epsilon;
    let origin = ray.origin();
    let dir = ray.direction();
    let seg_vector = segment.vector();
    let diff = segment.start() - origin;

    // A degenerate ray only reaches its own origin.
    if ray.is_degenerate() {
        if segment.distance_to_point(origin) <= eps {
            return Some(Intersection {
                point: origin,
                parameters: IntersectionParameters {
                    primary: 0.0,
                    secondary: None,
                },
                kind: IntersectionKind::Collinear,
            });
        }
        return None;
    }

    let Some((t, u)) = line_line_intersect_2d(origin, dir, segment.start(), seg_vector, eps) else {
        // Parallel: only a shared supporting line can produce a hit.
        if diff.cross(dir).abs() > eps {
            return None;
        }
        let projection = diff.dot(dir);
        let projection_end = projection + seg_vector.dot(dir);
        let distance = [projection, projection_end]
            .into_iter()
            .filter(|&d| d >= -eps)
            .reduce(f64::min)?;
        return Some(Intersection {
            point: point_at(origin, dir, distance),
            parameters: IntersectionParameters {
                primary: distance,
                secondary: None,
            },
            kind: IntersectionKind::Collinear,
        });
    };

    if t < -eps || u < -eps || u > 1.0 + eps {
        return None;
    }

    Some(Intersection {
        point: point_at(origin, dir, t),
        parameters: IntersectionParameters {
            primary: t,
            secondary: Some(u),
        },
        kind: IntersectionKind::Proper,
    })
}

fn within_widened_unit(value: f64, epsilon: f64) -> bool {
    value > -epsilon && value < 1.0 + epsilon
}
