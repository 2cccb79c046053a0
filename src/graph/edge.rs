use std::hash::{Hash, Hasher};

use crate::math::GridPoint;

use super::vertex::Vertex;

/// Order-independent identity of an edge: its endpoint positions, sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey(GridPoint, GridPoint);

impl EdgeKey {
    /// Creates a key from two endpoint positions in either order.
    #[must_use]
    pub fn new(a: GridPoint, b: GridPoint) -> Self {
        if (a.x, a.y) <= (b.x, b.y) {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// An undirected edge between two vertices.
///
/// Endpoints and length are fixed at construction. Equality and hashing go
/// through [`EdgeKey`], so `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    p1: Vertex,
    p2: Vertex,
    distance: f64,
}

impl Edge {
    /// Creates an edge; coincident endpoints give a zero-length edge.
    #[must_use]
    pub fn new(p1: Vertex, p2: Vertex) -> Self {
        Self {
            p1,
            p2,
            distance: nalgebra::distance(&p1.point(), &p2.point()),
        }
    }

    /// Returns the first endpoint, as supplied.
    #[must_use]
    pub fn p1(&self) -> Vertex {
        self.p1
    }

    /// Returns the second endpoint, as supplied.
    #[must_use]
    pub fn p2(&self) -> Vertex {
        self.p2
    }

    /// Euclidean distance between the endpoints.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the order-independent identity of this edge.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.p1.position(), self.p2.position())
    }

    /// Returns `true` if `v` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, v: &Vertex) -> bool {
        self.p1 == *v || self.p2 == *v
    }

    /// Returns the endpoint opposite to `v`, or `None` if `v` is not an endpoint.
    #[must_use]
    pub fn other(&self, v: &Vertex) -> Option<Vertex> {
        if self.p1 == *v {
            Some(self.p2)
        } else if self.p2 == *v {
            Some(self.p1)
        } else {
            None
        }
    }

    /// Endpoint match in either order, each coordinate compared with
    /// [`almost_equal`](crate::math::almost_equal).
    #[must_use]
    pub fn almost_equal(&self, other: &Edge) -> bool {
        (self.p1.almost_equal(&other.p1) && self.p2.almost_equal(&other.p2))
            || (self.p1.almost_equal(&other.p2) && self.p2.almost_equal(&other.p1))
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
