mod nearest_segment;

pub use nearest_segment::{NearestSegment, NearestSegmentResult};
