use std::hash::{Hash, Hasher};

use crate::error::GeometryError;
use crate::graph::{Edge, Vertex};
use crate::math::circle_2d::{circumcircle, Circumcircle};
use crate::math::{GridPoint, Point2};

/// A triangle over three stored vertices.
///
/// Identity is the unordered set of corner positions: any permutation of
/// the same three vertices compares and hashes equal.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub a: Vertex,
    pub b: Vertex,
    pub c: Vertex,
}

impl Triangle {
    /// Creates a triangle; corners keep the order given.
    #[must_use]
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self { a, b, c }
    }

    #[must_use]
    pub fn vertices(&self) -> [Vertex; 3] {
        [self.a, self.b, self.c]
    }

    /// Sides in winding order: `ab`, `bc`, `ca`.
    #[must_use]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Corner positions sorted lexicographically.
    #[must_use]
    pub fn key(&self) -> [GridPoint; 3] {
        let mut key = [self.a.position(), self.b.position(), self.c.position()];
        key.sort_by_key(|p| (p.x, p.y));
        key
    }

    /// Returns `true` if `v` is one of the corners.
    #[must_use]
    pub fn touches(&self, v: &Vertex) -> bool {
        self.a == *v || self.b == *v || self.c == *v
    }

    /// Returns `true` if any corner lies within `tolerance` of `p` on both axes.
    #[must_use]
    pub fn contains_position(&self, p: &Point2, tolerance: f64) -> bool {
        corners_near(&[self.a.point(), self.b.point(), self.c.point()], p, tolerance)
    }

    /// Circumcircle of the three corners.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the corners are collinear
    /// within `epsilon`.
    pub fn circumcircle(&self, epsilon: f64) -> Result<Circumcircle, GeometryError> {
        circumcircle(&self.a.point(), &self.b.point(), &self.c.point(), epsilon)
    }

    /// Returns `true` if `p` lies inside or on the circumcircle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the triangle has no circumcircle.
    pub fn circumcircle_contains(&self, p: GridPoint, epsilon: f64) -> Result<bool, GeometryError> {
        let circle = self.circumcircle(epsilon)?;
        Ok(circle.contains(&crate::math::to_point2(p)))
    }
}

/// Per-axis proximity test shared with the construction loop.
pub(crate) fn corners_near(corners: &[Point2; 3], p: &Point2, tolerance: f64) -> bool {
    corners
        .iter()
        .any(|c| (c.x - p.x).abs() < tolerance && (c.y - p.y).abs() < tolerance)
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
