pub mod edge;
pub mod vertex;

pub use edge::{Edge, EdgeKey};
pub use vertex::{Vertex, VertexData, VertexId};

use crate::error::GraphError;
use crate::math::GridPoint;
use slotmap::SlotMap;

/// Central arena that owns all vertices and their payloads.
///
/// Triangles and edges reference vertices via [`Vertex`] handles
/// (generational indices plus position), never by owning the payload.
#[derive(Debug)]
pub struct VertexStore<T = ()> {
    vertices: SlotMap<VertexId, VertexData<T>>,
}

impl<T> Default for VertexStore<T> {
    fn default() -> Self {
        Self {
            vertices: SlotMap::with_key(),
        }
    }
}

impl<T> VertexStore<T> {
    /// Creates a new, empty vertex store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a vertex without a payload.
    pub fn insert(&mut self, position: GridPoint) -> Vertex {
        self.insert_data(VertexData::new(position))
    }

    /// Inserts a vertex carrying `payload`.
    pub fn insert_with(&mut self, position: GridPoint, payload: T) -> Vertex {
        self.insert_data(VertexData::with_payload(position, payload))
    }

    /// Inserts prepared vertex data and returns its handle.
    pub fn insert_data(&mut self, data: VertexData<T>) -> Vertex {
        let position = data.position();
        let id = self.vertices.insert(data);
        Vertex::new(id, position)
    }

    /// Returns the vertex handle for `id`.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::VertexNotFound` if the id is stale or foreign.
    pub fn vertex(&self, id: VertexId) -> Result<Vertex, GraphError> {
        self.data(id).map(|data| Vertex::new(id, data.position()))
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::VertexNotFound` if the id is stale or foreign.
    pub fn data(&self, id: VertexId) -> Result<&VertexData<T>, GraphError> {
        self.vertices.get(id).ok_or(GraphError::VertexNotFound)
    }

    /// Returns the payload attached to `id`, if the vertex exists and has one.
    #[must_use]
    pub fn payload(&self, id: VertexId) -> Option<&T> {
        self.vertices.get(id).and_then(|data| data.payload.as_ref())
    }

    /// Removes a vertex, returning its data.
    ///
    /// Existing [`Vertex`] handles keep comparing by position; lookups
    /// through them fail afterwards.
    pub fn remove(&mut self, id: VertexId) -> Option<VertexData<T>> {
        self.vertices.remove(id)
    }

    /// Iterates over all stored vertices.
    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices
            .iter()
            .map(|(id, data)| Vertex::new(id, data.position()))
    }

    /// Number of live vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the store holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
