//! Crease-pattern records: the strict, typed form used by the analyzer and
//! the loose, serde-decoded form that arrives from imported documents.

use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ensure_finite, GeometryError};
use crate::geometry::LineSegment;
use crate::math::Vector2;

/// Assignment of a line in a crease pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CreaseType {
    Mountain,
    Valley,
    Border,
    #[default]
    Auxiliary,
}

impl CreaseType {
    /// Normalizes a type label. Unknown or missing labels become `Auxiliary`.
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("mountain") => Self::Mountain,
            Some("valley") => Self::Valley,
            Some("border") => Self::Border,
            _ => Self::Auxiliary,
        }
    }

    /// Mountain and valley lines are folds; border and auxiliary lines are not.
    #[must_use]
    pub fn is_crease(self) -> bool {
        matches!(self, Self::Mountain | Self::Valley)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mountain => "mountain",
            Self::Valley => "valley",
            Self::Border => "border",
            Self::Auxiliary => "auxiliary",
        }
    }
}

impl fmt::Display for CreaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated crease-pattern edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: Option<String>,
    pub start: Vector2,
    pub end: Vector2,
    pub crease_type: CreaseType,
}

impl Edge {
    #[must_use]
    pub fn new(start: Vector2, end: Vector2, crease_type: CreaseType) -> Self {
        Self {
            id: None,
            start,
            end,
            crease_type,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn segment(&self) -> LineSegment {
        LineSegment::new(self.start, self.end)
    }
}

/// A validated vertex hint: a declared id at a position.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexHint {
    pub id: Option<String>,
    pub position: Vector2,
}

impl VertexHint {
    #[must_use]
    pub fn new(id: impl Into<String>, position: Vector2) -> Self {
        Self {
            id: Some(id.into()),
            position,
        }
    }
}

// ── loose records ──

/// A point as found in external data; either coordinate may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPoint {
    #[serde(deserialize_with = "lenient")]
    pub x: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub y: Option<f64>,
}

impl RawPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Returns the point if both coordinates are present and finite.
    #[must_use]
    pub fn to_vector(&self) -> Option<Vector2> {
        Vector2::new(self.x?, self.y?).ok()
    }
}

impl TryFrom<RawPoint> for Vector2 {
    type Error = GeometryError;

    /// Strict conversion: a missing or non-finite coordinate is an error.
    fn try_from(point: RawPoint) -> Result<Self, GeometryError> {
        let x = point
            .x
            .ok_or_else(|| GeometryError::InvalidArgument("point is missing x".into()))?;
        let y = point
            .y
            .ok_or_else(|| GeometryError::InvalidArgument("point is missing y".into()))?;
        Self::try_from((ensure_finite(x, "x")?, ensure_finite(y, "y")?))
    }
}

impl From<Vector2> for RawPoint {
    fn from(v: Vector2) -> Self {
        Self::new(v.x(), v.y())
    }
}

/// An edge as found in external data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEdge {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub start: Option<RawPoint>,
    #[serde(deserialize_with = "lenient")]
    pub end: Option<RawPoint>,
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
}

impl RawEdge {
    /// Converts to a typed [`Edge`], or `None` if either endpoint is unusable.
    #[must_use]
    pub fn validate(&self) -> Option<Edge> {
        Some(Edge {
            id: self.id.clone(),
            start: self.start.as_ref()?.to_vector()?,
            end: self.end.as_ref()?.to_vector()?,
            crease_type: CreaseType::from_label(self.kind.as_deref()),
        })
    }
}

impl From<&Edge> for RawEdge {
    fn from(edge: &Edge) -> Self {
        Self {
            id: edge.id.clone(),
            start: Some(edge.start.into()),
            end: Some(edge.end.into()),
            kind: Some(edge.crease_type.as_str().to_owned()),
        }
    }
}

/// A vertex hint as found in external data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawVertex {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub position: Option<RawPoint>,
}

impl RawVertex {
    #[must_use]
    pub fn validate(&self) -> Option<VertexHint> {
        Some(VertexHint {
            id: self.id.clone(),
            position: self.position.as_ref()?.to_vector()?,
        })
    }
}

impl From<&VertexHint> for RawVertex {
    fn from(hint: &VertexHint) -> Self {
        Self {
            id: hint.id.clone(),
            position: Some(hint.position.into()),
        }
    }
}

/// Decodes a field, mapping `null` or a value of the wrong shape to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    #[allow(dead_code)]
    enum Loose<T> {
        Value(T),
        Other(IgnoredAny),
    }

    Ok(match Option::<Loose<T>>::deserialize(deserializer)? {
        Some(Loose::Value(value)) => Some(value),
        Some(Loose::Other(_)) | None => None,
    })
}
