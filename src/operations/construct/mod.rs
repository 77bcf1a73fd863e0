mod bisector;
mod mirror;
mod perpendicular;

pub use bisector::{AngleBisector, Bisector};
pub use mirror::MirrorSegment;
pub use perpendicular::PerpendicularFoot;

/// Distance under which two points are treated as the same pivot.
pub const POINT_TOLERANCE: f64 = 1e-6;

/// Shortest segment a construction will produce.
pub const MIN_SEGMENT_LENGTH: f64 = 1e-1;
