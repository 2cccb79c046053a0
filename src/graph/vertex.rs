use std::hash::{Hash, Hasher};

use crate::math::{to_point2, GridPoint, Point2};

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the vertex store.
    pub struct VertexId;
}

/// Data associated with a stored vertex.
#[derive(Debug, Clone)]
pub struct VertexData<T> {
    /// The grid position of the vertex.
    position: GridPoint,
    /// Caller-defined attachment, if any.
    pub payload: Option<T>,
}

impl<T> VertexData<T> {
    /// Creates vertex data at the given position with no payload.
    #[must_use]
    pub fn new(position: GridPoint) -> Self {
        Self {
            position,
            payload: None,
        }
    }

    /// Creates vertex data carrying a payload.
    #[must_use]
    pub fn with_payload(position: GridPoint, payload: T) -> Self {
        Self {
            position,
            payload: Some(payload),
        }
    }

    /// The position is fixed at construction.
    #[must_use]
    pub fn position(&self) -> GridPoint {
        self.position
    }
}

/// A lightweight reference to a stored vertex.
///
/// Equality and hashing use the position only: two vertices at the same
/// coordinates are the same vertex regardless of handle or payload.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    id: VertexId,
    position: GridPoint,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, position: GridPoint) -> Self {
        Self { id, position }
    }

    /// Handle into the owning [`VertexStore`](super::VertexStore).
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Grid position; the only input to equality and hashing.
    #[must_use]
    pub fn position(&self) -> GridPoint {
        self.position
    }

    /// Position lifted into floating-point space.
    #[must_use]
    pub fn point(&self) -> Point2 {
        to_point2(self.position)
    }

    /// Tolerant positional comparison, applied per coordinate.
    #[must_use]
    pub fn almost_equal(&self, other: &Vertex) -> bool {
        let a = self.point();
        let b = other.point();
        crate::math::almost_equal(a.x, b.x) && crate::math::almost_equal(a.y, b.y)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}
