pub mod intersect;
pub mod ray;
pub mod segment;

pub use intersect::{
    intersect_ray_segment, intersect_segments, IntersectOptions, Intersection, IntersectionKind,
    IntersectionParameters,
};
pub use ray::Ray;
pub use segment::{BoundingBox, LineSegment};
