mod prim;

pub use prim::MinimumSpanningTree;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Vertex};

/// Output of a spanning tree search.
///
/// For a disconnected graph this is a fragment covering only the
/// component of the start vertex.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    pub(crate) edges: Vec<Edge>,
    pub(crate) reached: Vec<Vertex>,
    pub(crate) unreached: Vec<Vertex>,
}

impl SpanningTree {
    /// Selected edges, in the order they were added.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Vertices in the tree, start first, then in order of attachment.
    #[must_use]
    pub fn reached(&self) -> &[Vertex] {
        &self.reached
    }

    /// Vertices touched by some input edge but not connected to the start.
    #[must_use]
    pub fn unreached(&self) -> &[Vertex] {
        &self.unreached
    }

    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.unreached.is_empty()
    }

    /// Sum of the selected edge lengths.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::distance).sum()
    }

    /// Returns the tree only if it reaches every vertex.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::Disconnected` listing the unreached vertices.
    pub fn require_spanning(self) -> Result<Self> {
        if self.is_spanning() {
            Ok(self)
        } else {
            Err(GraphError::Disconnected {
                unreached: self.unreached,
            }
            .into())
        }
    }

    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}
