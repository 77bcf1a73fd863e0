use super::Vector2;

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Signed doubled area of the triangle `a, b, c`: `cross(b - a, c - a)`.
///
/// Positive for a counter-clockwise turn, negative for clockwise.
#[must_use]
pub fn orientation(a: Vector2, b: Vector2, c: Vector2) -> f64 {
    (b - a).cross(c - a)
}

/// Classifies the turn `a -> b -> c`, treating `|orientation| <= epsilon` as collinear.
#[must_use]
pub fn classify(a: Vector2, b: Vector2, c: Vector2, epsilon: f64) -> Orientation {
    let o = orientation(a, b, c);
    if o > epsilon {
        Orientation::CounterClockwise
    } else if o < -epsilon {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

#[must_use]
pub fn is_counter_clockwise(a: Vector2, b: Vector2, c: Vector2, epsilon: f64) -> bool {
    orientation(a, b, c) > epsilon
}

#[must_use]
pub fn is_clockwise(a: Vector2, b: Vector2, c: Vector2, epsilon: f64) -> bool {
    orientation(a, b, c) < -epsilon
}

#[must_use]
pub fn is_collinear(a: Vector2, b: Vector2, c: Vector2, epsilon: f64) -> bool {
    orientation(a, b, c).abs() <= epsilon
}
