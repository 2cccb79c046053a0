use std::collections::HashSet;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Vertex};

use super::SpanningTree;

/// Grows a minimum spanning tree from `start` with Prim's algorithm.
///
/// Each step rescans the whole edge slice and takes the lightest edge with
/// exactly one endpoint already in the tree. Ties go to the edge that comes
/// first in the slice, so the result depends on edge order.
pub struct MinimumSpanningTree<'a> {
    edges: &'a [Edge],
    start: Vertex,
}

impl<'a> MinimumSpanningTree<'a> {
    /// Creates a new `MinimumSpanningTree` operation.
    #[must_use]
    pub fn new(edges: &'a [Edge], start: Vertex) -> Self {
        Self { edges, start }
    }

    /// Executes the search.
    ///
    /// A disconnected graph is not an error here: the result covers the
    /// component of `start` and lists everything else as unreached. Use
    /// [`SpanningTree::require_spanning`] to turn that into an error.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::StartNotInGraph` if no edge touches `start`.
    pub fn execute(&self) -> Result<SpanningTree> {
        let mut touched: Vec<Vertex> = Vec::new();
        let mut seen: HashSet<Vertex> = HashSet::new();
        for edge in self.edges {
            for v in [edge.p1(), edge.p2()] {
                if seen.insert(v) {
                    touched.push(v);
                }
            }
        }
        if !seen.contains(&self.start) {
            return Err(GraphError::StartNotInGraph(self.start).into());
        }

        let mut closed: HashSet<Vertex> = HashSet::with_capacity(touched.len());
        closed.insert(self.start);
        let mut reached = vec![self.start];
        let mut tree: Vec<Edge> = Vec::with_capacity(touched.len().saturating_sub(1));

        while let Some(edge) = self.lightest_frontier_edge(&closed) {
            let next = if closed.contains(&edge.p1()) {
                edge.p2()
            } else {
                edge.p1()
            };
            closed.insert(next);
            reached.push(next);
            tree.push(edge);
        }

        let unreached: Vec<Vertex> = touched
            .into_iter()
            .filter(|v| !closed.contains(v))
            .collect();
        if !unreached.is_empty() {
            debug!(
                reached = reached.len(),
                unreached = unreached.len(),
                "spanning tree stopped at a disconnected component"
            );
        }

        Ok(SpanningTree {
            edges: tree,
            reached,
            unreached,
        })
    }

    fn lightest_frontier_edge(&self, closed: &HashSet<Vertex>) -> Option<Edge> {
        let mut best: Option<Edge> = None;
        let mut min_weight = f64::INFINITY;
        for edge in self.edges {
            if closed.contains(&edge.p1()) == closed.contains(&edge.p2()) {
                continue;
            }
            if edge.distance() < min_weight {
                min_weight = edge.distance();
                best = Some(*edge);
            }
        }
        best
    }
}
