mod bowyer_watson;
mod triangle;

pub use bowyer_watson::Triangulate;
pub use triangle::Triangle;

use std::collections::HashSet;

use crate::graph::{Edge, Vertex};
use crate::math::{Point2, TOLERANCE};

/// What to do with a triangle whose corners are collinear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Keep constructing; the triangle never captures a vertex and is left
    /// out of the output.
    #[default]
    Skip,
    /// Abort the run with `GeometryError::Degenerate`.
    Error,
}

/// Parameters controlling triangulation.
#[derive(Debug, Clone, Copy)]
pub struct TriangulationParams {
    /// Per-axis distance under which a corner counts as a super-triangle vertex.
    pub super_vertex_tolerance: f64,
    /// Twice-signed-area magnitude at or below which a triangle is collinear.
    pub degenerate_epsilon: f64,
    /// Handling of collinear triangles met during construction.
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for TriangulationParams {
    fn default() -> Self {
        Self {
            super_vertex_tolerance: 0.01,
            degenerate_epsilon: TOLERANCE,
            degenerate_policy: DegeneratePolicy::Skip,
        }
    }
}

/// The result of a triangulation run.
///
/// Contains no trace of the bounding super-triangle other than its
/// recorded corner positions.
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) triangles: Vec<Triangle>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) edge_set: HashSet<Edge>,
    pub(crate) super_triangle: Option<[Point2; 3]>,
    pub(crate) skipped_degenerate: usize,
}

impl Triangulation {
    /// Distinct input vertices, in insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Triangles that survived super-triangle removal.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Deduplicated edges in the order they were first produced.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The same edges as [`Triangulation::edges`], for membership tests.
    #[must_use]
    pub fn edge_set(&self) -> &HashSet<Edge> {
        &self.edge_set
    }

    /// Returns `true` if an edge with the same endpoint positions exists.
    #[must_use]
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edge_set.contains(edge)
    }

    /// Corners of the synthesized bounding triangle, or `None` when fewer
    /// than three distinct positions made construction unnecessary.
    #[must_use]
    pub fn super_triangle(&self) -> Option<[Point2; 3]> {
        self.super_triangle
    }

    /// Number of collinear triangles ignored under [`DegeneratePolicy::Skip`].
    #[must_use]
    pub fn skipped_degenerate(&self) -> usize {
        self.skipped_degenerate
    }

    /// Consumes the result, keeping only the ordered edge list.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}
