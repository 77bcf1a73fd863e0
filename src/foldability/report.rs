use serde::Serialize;

use super::theorems::{MaekawaResult, TheoremResult};
use crate::math::Vector2;

/// Local flat-foldability report for one vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexReport {
    pub vertex_id: String,
    pub position: Vector2,
    /// Number of distinct edge directions at the vertex.
    pub degree: usize,
    /// Angular gaps between consecutive directions; they sum to 2π.
    pub sectors: Vec<f64>,
    pub kawasaki: TheoremResult,
    pub maekawa: MaekawaResult,
}

impl VertexReport {
    /// Whether at least one theorem applies at this vertex.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.kawasaki.applicable || self.maekawa.applicable
    }

    /// Whether any applicable theorem is violated.
    #[must_use]
    pub fn has_violation(&self) -> bool {
        self.kawasaki.is_violated() || self.maekawa.is_violated()
    }
}

/// Aggregate counts over a set of vertex reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoldabilitySummary {
    pub vertex_count: usize,
    pub applicable_count: usize,
    pub satisfied_count: usize,
    pub violation_count: usize,
}

impl FoldabilitySummary {
    #[must_use]
    pub fn from_reports(reports: &[VertexReport]) -> Self {
        reports.iter().fold(
            Self {
                vertex_count: reports.len(),
                ..Self::default()
            },
            |mut summary, report| {
                if report.is_checked() {
                    summary.applicable_count += 1;
                    if report.has_violation() {
                        summary.violation_count += 1;
                    } else {
                        summary.satisfied_count += 1;
                    }
                }
                summary
            },
        )
    }

    /// True when no checked vertex violates a theorem.
    #[must_use]
    pub fn is_locally_flat_foldable(&self) -> bool {
        self.violation_count == 0
    }
}
