use std::collections::HashMap;

use slotmap::SlotMap;
use tracing::debug;

use super::crease::{CreaseType, Edge, VertexHint};
use crate::math::Vector2;

slotmap::new_key_type! {
    /// Identifier of a merged vertex inside a [`CreaseGraph`].
    pub struct VertexId;
}

/// Position key with coordinates quantized to a fixed number of decimals.
///
/// Two points that round to the same key are the same vertex. Each
/// coordinate is stored as the bit pattern of `round(c * 10^decimals)`, so
/// the key stays exact over the whole finite range instead of saturating an
/// integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexKey {
    x: u64,
    y: u64,
}

impl VertexKey {
    /// Quantizes `point` to `decimals` decimal places.
    ///
    /// Returns `None` when scaling a coordinate overflows `f64`.
    #[must_use]
    pub fn quantize(point: Vector2, decimals: u32) -> Option<Self> {
        let scale = scale_for(decimals);
        Some(Self {
            x: quantize_coordinate(point.x(), scale)?,
            y: quantize_coordinate(point.y(), scale)?,
        })
    }

    /// Formats the key as `"x:y"` with `decimals` places.
    #[must_use]
    pub fn label(&self, decimals: u32) -> String {
        let scale = scale_for(decimals);
        let places = decimals as usize;
        format!(
            "{:.places$}:{:.places$}",
            f64::from_bits(self.x) / scale,
            f64::from_bits(self.y) / scale
        )
    }
}

fn scale_for(decimals: u32) -> f64 {
    10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX))
}

fn quantize_coordinate(value: f64, scale: f64) -> Option<u64> {
    let rounded = (value * scale).round();
    // Adding +0.0 folds -0.0 into +0.0 so both share a key.
    rounded.is_finite().then(|| (rounded + 0.0).to_bits())
}

/// One edge direction leaving a vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Incidence {
    /// Direction angle in `[0, 2π)`.
    pub angle: f64,
    pub crease_type: CreaseType,
    pub edge_id: Option<String>,
}

/// A merged vertex and the edge directions that leave it.
#[derive(Debug, Clone)]
pub struct VertexEntry {
    pub id: String,
    pub position: Vector2,
    pub incident: Vec<Incidence>,
}

/// Vertex/edge incidence structure of a crease pattern.
///
/// Vertices live in a slot-map arena and are looked up by quantized
/// position, never by declared id.
#[derive(Debug)]
pub struct CreaseGraph {
    vertices: SlotMap<VertexId, VertexEntry>,
    by_key: HashMap<VertexKey, VertexId>,
    decimals: u32,
    min_length_squared: f64,
}

impl CreaseGraph {
    /// Creates an empty graph.
    ///
    /// `decimals` controls vertex merging; directions whose squared length is
    /// at most `min_length_squared` are ignored.
    #[must_use]
    pub fn new(decimals: u32, min_length_squared: f64) -> Self {
        Self {
            vertices: SlotMap::with_key(),
            by_key: HashMap::new(),
            decimals,
            min_length_squared,
        }
    }

    /// Declares a vertex. A later hint at the same key replaces the earlier one.
    ///
    /// Returns `None`, and records nothing, if the position cannot be keyed.
    pub fn add_hint(&mut self, hint: &VertexHint) -> Option<VertexId> {
        let Some(key) = VertexKey::quantize(hint.position, self.decimals) else {
            debug!(id = ?hint.id, "skipping vertex hint outside the keyable range");
            return None;
        };
        let id = hint.id.clone().unwrap_or_else(|| key.label(self.decimals));
        if let Some(&existing) = self.by_key.get(&key) {
            if let Some(slot) = self.vertices.get_mut(existing) {
                slot.id = id;
                slot.position = hint.position;
                return Some(existing);
            }
        }
        let vid = self.vertices.insert(VertexEntry {
            id,
            position: hint.position,
            incident: Vec::new(),
        });
        self.by_key.insert(key, vid);
        Some(vid)
    }

    /// Records both directions of `edge` at its endpoints.
    pub fn add_edge(&mut self, edge: &Edge) {
        self.add_direction(edge.start, edge.end, edge);
        self.add_direction(edge.end, edge.start, edge);
    }

    fn add_direction(&mut self, from: Vector2, to: Vector2, edge: &Edge) {
        let Ok(direction) = to.checked_sub(from) else {
            debug!(edge = ?edge.id, "skipping edge direction that overflows");
            return;
        };
        if direction.length_squared() <= self.min_length_squared {
            return;
        }
        let Some(vid) = self.ensure_vertex(from) else {
            debug!(edge = ?edge.id, "skipping endpoint outside the keyable range");
            return;
        };
        if let Some(entry) = self.vertices.get_mut(vid) {
            entry.incident.push(Incidence {
                angle: direction.polar_angle(),
                crease_type: edge.crease_type,
                edge_id: edge.id.clone(),
            });
        }
    }

    fn ensure_vertex(&mut self, point: Vector2) -> Option<VertexId> {
        let key = VertexKey::quantize(point, self.decimals)?;
        if let Some(&vid) = self.by_key.get(&key) {
            return Some(vid);
        }
        let vid = self.vertices.insert(VertexEntry {
            id: key.label(self.decimals),
            position: point,
            incident: Vec::new(),
        });
        self.by_key.insert(key, vid);
        Some(vid)
    }

    /// Looks up the vertex at `point` after quantization.
    #[must_use]
    pub fn vertex_at(&self, point: Vector2) -> Option<&VertexEntry> {
        let key = VertexKey::quantize(point, self.decimals)?;
        self.by_key.get(&key).and_then(|&vid| self.vertices.get(vid))
    }

    pub fn vertices(&self) -> impl Iterator<Item = &VertexEntry> {
        self.vertices.values()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
