pub mod intersect_2d;
pub mod predicates;
pub mod vector2;

pub use predicates::Orientation;
pub use vector2::Vector2;

/// Default tolerance for geometric comparisons.
pub const EPSILON: f64 = 1e-9;
