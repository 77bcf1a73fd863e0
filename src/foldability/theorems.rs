use std::f64::consts::TAU;

use serde::Serialize;

use super::crease::CreaseType;
use super::graph::Incidence;

/// Outcome of a single-vertex theorem check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TheoremResult {
    pub applicable: bool,
    /// `None` when the theorem does not apply.
    pub deviation: Option<f64>,
    pub satisfied: bool,
}

impl TheoremResult {
    const NOT_APPLICABLE: Self = Self {
        applicable: false,
        deviation: None,
        satisfied: false,
    };

    /// Applicable and not satisfied.
    #[must_use]
    pub fn is_violated(&self) -> bool {
        self.applicable && !self.satisfied
    }
}

/// Maekawa check plus the crease counts it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaekawaResult {
    pub applicable: bool,
    pub deviation: Option<f64>,
    pub satisfied: bool,
    pub mountain_count: usize,
    pub valley_count: usize,
}

impl MaekawaResult {
    #[must_use]
    pub fn is_violated(&self) -> bool {
        self.applicable && !self.satisfied
    }
}

/// Both theorems gate on an even count of at least four.
fn is_applicable(count: usize) -> bool {
    count >= 4 && count % 2 == 0
}

/// Angular gaps between consecutive incidences sorted by angle, wrapping
/// from the last back to the first.
#[must_use]
pub fn compute_sectors(sorted: &[Incidence]) -> Vec<f64> {
    let n = sorted.len();
    (0..n)
        .map(|i| {
            let mut delta = sorted[(i + 1) % n].angle - sorted[i].angle;
            if delta <= 0.0 {
                delta += TAU;
            }
            delta
        })
        .collect()
}

/// Kawasaki: alternate sector sums must be equal.
#[must_use]
pub fn check_kawasaki(sectors: &[f64], epsilon: f64) -> TheoremResult {
    if !is_applicable(sectors.len()) {
        return TheoremResult::NOT_APPLICABLE;
    }
    let (even, odd) = sectors
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(even, odd), (i, &sector)| {
            if i % 2 == 0 {
                (even + sector, odd)
            } else {
                (even, odd + sector)
            }
        });
    let deviation = (even - odd).abs();
    TheoremResult {
        applicable: true,
        deviation: Some(deviation),
        satisfied: deviation <= epsilon,
    }
}

/// Maekawa: mountain and valley counts must differ by exactly two.
///
/// Only mountain and valley incidences count; counts are reported even when
/// the theorem does not apply.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn check_maekawa(incident: &[Incidence], epsilon: f64) -> MaekawaResult {
    let mountain_count = incident
        .iter()
        .filter(|i| i.crease_type == CreaseType::Mountain)
        .count();
    let valley_count = incident
        .iter()
        .filter(|i| i.crease_type == CreaseType::Valley)
        .count();

    if !is_applicable(mountain_count + valley_count) {
        return MaekawaResult {
            applicable: false,
            deviation: None,
            satisfied: false,
            mountain_count,
            valley_count,
        };
    }

    let deviation = (mountain_count.abs_diff(valley_count) as f64 - 2.0).abs();
    MaekawaResult {
        applicable: true,
        deviation: Some(deviation),
        satisfied: deviation <= epsilon,
        mountain_count,
        valley_count,
    }
}
