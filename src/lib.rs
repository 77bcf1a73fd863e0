//! Geometry kernel and local flat-foldability analyzer for origami crease patterns.
//!
//! - [`math`]: finite 2D vectors, orientation predicates, parametric solvers.
//! - [`geometry`]: segments, rays, and their intersections.
//! - [`foldability`]: per-vertex Kawasaki and Maekawa checks.
//! - [`operations`]: picking and constructive operations for editing tools.

pub mod error;
pub mod foldability;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{OrifoldError, Result};
pub use foldability::{
    analyze_local_flat_foldability, analyze_local_flat_foldability_with, AnalyzerOptions,
    CreaseType, Edge, FoldabilitySummary, VertexReport,
};
pub use geometry::{intersect_ray_segment, intersect_segments, IntersectOptions, LineSegment, Ray};
pub use math::Vector2;
