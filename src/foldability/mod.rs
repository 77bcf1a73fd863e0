//! Local (single-vertex) flat-foldability analysis of a crease pattern.
//!
//! For every vertex the analyzer orders the incident edge directions,
//! measures the sectors between them, and checks Kawasaki's and Maekawa's
//! theorems. These are necessary conditions only; global foldability is not
//! decided here.
//!
//! Input data may come from imported documents, so malformed records are
//! skipped rather than reported as errors.

pub mod crease;
pub mod graph;
pub mod report;
pub mod theorems;

use std::f64::consts::TAU;

use tracing::debug;

pub use crease::{CreaseType, Edge, RawEdge, RawPoint, RawVertex, VertexHint};
pub use graph::{CreaseGraph, Incidence, VertexEntry, VertexId, VertexKey};
pub use report::{FoldabilitySummary, VertexReport};
pub use theorems::{MaekawaResult, TheoremResult};

/// Tolerance for merging directions, skipping short edges, and theorem checks.
pub const ANGLE_EPSILON: f64 = 1e-6;

/// Decimal places kept when merging vertices by position.
pub const KEY_DECIMALS: u32 = 4;

/// Tolerances used by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerOptions {
    pub epsilon: f64,
    pub key_decimals: u32,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            epsilon: ANGLE_EPSILON,
            key_decimals: KEY_DECIMALS,
        }
    }
}

/// Analyzes loosely structured vertex hints and edges with default tolerances.
///
/// Reports are sorted by vertex id and only include vertices with at least
/// two distinct edge directions.
#[must_use]
pub fn analyze_local_flat_foldability(
    vertices: &[RawVertex],
    edges: &[RawEdge],
) -> Vec<VertexReport> {
    analyze_local_flat_foldability_with(vertices, edges, AnalyzerOptions::default())
}

/// Like [`analyze_local_flat_foldability`] with explicit tolerances.
#[must_use]
pub fn analyze_local_flat_foldability_with(
    vertices: &[RawVertex],
    edges: &[RawEdge],
    options: AnalyzerOptions,
) -> Vec<VertexReport> {
    let hints: Vec<VertexHint> = vertices
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let hint = raw.validate();
            if hint.is_none() {
                debug!(index, id = ?raw.id, "skipping vertex hint without a finite position");
            }
            hint
        })
        .collect();

    let edges: Vec<Edge> = edges
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let edge = raw.validate();
            if edge.is_none() {
                debug!(index, id = ?raw.id, "skipping edge without two finite endpoints");
            }
            edge
        })
        .collect();

    analyze_crease_pattern(&hints, &edges, options)
}

/// Analyzes already validated vertex hints and edges.
#[must_use]
pub fn analyze_crease_pattern(
    vertices: &[VertexHint],
    edges: &[Edge],
    options: AnalyzerOptions,
) -> Vec<VertexReport> {
    let mut graph = CreaseGraph::new(options.key_decimals, options.epsilon);
    for hint in vertices {
        graph.add_hint(hint);
    }
    for edge in edges {
        graph.add_edge(edge);
    }

    let mut reports: Vec<VertexReport> = graph
        .vertices()
        .filter_map(|entry| analyze_vertex(entry, options.epsilon))
        .collect();
    reports.sort_by(|a, b| a.vertex_id.cmp(&b.vertex_id));

    debug!(
        vertices = graph.vertex_count(),
        reports = reports.len(),
        "analyzed crease pattern"
    );
    reports
}

fn analyze_vertex(entry: &VertexEntry, epsilon: f64) -> Option<VertexReport> {
    let mut usable = distinct_directions(&entry.incident, epsilon);
    if usable.len() < 2 {
        debug!(
            vertex = %entry.id,
            directions = usable.len(),
            "skipping vertex with fewer than two directions"
        );
        return None;
    }

    usable.sort_by(|a, b| a.angle.total_cmp(&b.angle));
    let sectors = theorems::compute_sectors(&usable);
    let kawasaki = theorems::check_kawasaki(&sectors, epsilon);
    let maekawa = theorems::check_maekawa(&usable, epsilon);

    Some(VertexReport {
        vertex_id: entry.id.clone(),
        position: entry.position,
        degree: usable.len(),
        sectors,
        kawasaki,
        maekawa,
    })
}

/// Keeps the first incidence of every direction; later ones within
/// `epsilon` (measured around the circle) are dropped.
fn distinct_directions(incident: &[Incidence], epsilon: f64) -> Vec<Incidence> {
    incident
        .iter()
        .enumerate()
        .filter(|&(i, item)| {
            item.angle.is_finite()
                && !incident[..i]
                    .iter()
                    .any(|earlier| angular_distance(earlier.angle, item.angle) <= epsilon)
        })
        .map(|(_, item)| item.clone())
        .collect()
}

fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(TAU - d)
}
