use super::Vector2;

/// Parametric 2D line-line intersection.
///
/// Given lines `p + t * r` and `q + u * s`, returns `(t, u)` unless the
/// directions are parallel within `epsilon` (`|cross(r, s)| <= epsilon`).
#[must_use]
pub fn line_line_intersect_2d(
    p: Vector2,
    r: Vector2,
    q: Vector2,
    s: Vector2,
    epsilon: f64,
) -> Option<(f64, f64)> {
    let denominator = r.cross(s);
    if denominator.abs() <= epsilon {
        return None;
    }
    let qp = q - p;
    let t = qp.cross(s) / denominator;
    let u = qp.cross(r) / denominator;
    Some((t, u))
}

/// Overlap of two collinear parametric ranges.
///
/// Projects `q` and `q + s` onto `p + t * r`, clamps the projected interval
/// to `[0, 1]`, and returns the midpoint parameter of what remains. Returns
/// `None` if the ranges do not overlap or `r` has zero length.
#[must_use]
pub fn collinear_overlap_midpoint(p: Vector2, r: Vector2, q: Vector2, s: Vector2) -> Option<f64> {
    let rr = r.dot(r);
    if rr == 0.0 {
        return None;
    }
    let t0 = (q - p).dot(r) / rr;
    let t1 = t0 + s.dot(r) / rr;
    let t_min = t0.min(t1).max(0.0);
    let t_max = t0.max(t1).min(1.0);
    if t_min <= t_max {
        Some((t_min + t_max) * 0.5)
    } else {
        None
    }
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: Vector2, dir: Vector2, t: f64) -> Vector2 {
    origin + dir.scaled(t)
}
