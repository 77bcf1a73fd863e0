//! Constructive geometry and picking queries used by interactive editing tools.

pub mod construct;
pub mod query;

pub use construct::{AngleBisector, Bisector, MirrorSegment, PerpendicularFoot};
pub use query::{NearestSegment, NearestSegmentResult};
