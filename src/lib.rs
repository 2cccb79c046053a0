//! Delaunay triangulation and minimum spanning trees over integer grid points.
//!
//! Points go into a [`VertexStore`], [`Triangulate`] connects them into a
//! Delaunay edge graph, and [`MinimumSpanningTree`] picks a spanning subset
//! of those edges.

pub mod error;
pub mod graph;
pub mod math;
pub mod spanning;
pub mod triangulation;

pub use error::{GridlinkError, Result};
pub use graph::{Edge, Vertex, VertexId, VertexStore};
pub use math::GridPoint;
pub use spanning::{MinimumSpanningTree, SpanningTree};
pub use triangulation::{
    DegeneratePolicy, Triangle, Triangulate, Triangulation, TriangulationParams,
};
