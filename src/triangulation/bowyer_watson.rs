use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::error::{GeometryError, InputError, Result};
use crate::graph::{Edge, Vertex, VertexId, VertexStore};
use crate::math::circle_2d::{circumcircle, Circumcircle};
use crate::math::{GridPoint, Point2};

use super::triangle::corners_near;
use super::{DegeneratePolicy, Triangle, Triangulation, TriangulationParams};

/// Index of the first input vertex in the working point list; the three
/// super-triangle corners occupy `0..SUPER_CORNERS`.
const SUPER_CORNERS: usize = 3;

/// Multiplier on `delta_max` for the super-triangle margin. A super corner
/// inside the circumcircle of a hull triangle removes that triangle.
const SUPER_MARGIN_SCALE: f64 = 1000.0;

/// Builds the Delaunay triangulation of a vertex sequence (Bowyer–Watson).
///
/// Vertices are inserted one at a time, in the order given. Every
/// insertion rescans the full triangle list; there is no point-location
/// structure.
pub struct Triangulate {
    vertices: Vec<Vertex>,
    params: TriangulationParams,
}

impl Triangulate {
    /// Creates a new `Triangulate` operation.
    #[must_use]
    pub fn new(vertices: Vec<Vertex>, params: TriangulationParams) -> Self {
        Self { vertices, params }
    }

    /// Creates the operation from store handles, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::VertexNotFound` if any handle is stale.
    pub fn from_store<T>(
        store: &VertexStore<T>,
        ids: &[VertexId],
        params: TriangulationParams,
    ) -> Result<Self> {
        let vertices = ids
            .iter()
            .map(|&id| store.vertex(id))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::new(vertices, params))
    }

    /// Executes the triangulation.
    ///
    /// Fewer than three distinct positions yield an empty triangulation.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Insufficient` for an empty vertex list, and
    /// `GeometryError::Degenerate` when a collinear triangle is met under
    /// [`DegeneratePolicy::Error`].
    pub fn execute(&self) -> Result<Triangulation> {
        if self.vertices.is_empty() {
            return Err(InputError::Insufficient {
                required: 1,
                actual: 0,
            }
            .into());
        }

        let inputs = distinct_vertices(&self.vertices);
        if inputs.len() < self.vertices.len() {
            debug!(
                dropped = self.vertices.len() - inputs.len(),
                "collapsed duplicate vertex positions"
            );
        }
        if inputs.len() < 3 {
            debug!(count = inputs.len(), "too few distinct vertices to triangulate");
            return Ok(Triangulation {
                vertices: inputs,
                ..Triangulation::default()
            });
        }

        let corners = super_triangle(&inputs);
        let mut builder = Builder::new(&corners, &inputs, &self.params);
        builder.push_facet([0, 1, 2])?;
        for index in SUPER_CORNERS..builder.points.len() {
            builder.insert(index)?;
        }

        let triangles = builder.finish(&inputs);
        let (edges, edge_set) = collect_edges(&triangles);
        debug!(
            vertices = inputs.len(),
            triangles = triangles.len(),
            edges = edges.len(),
            skipped_degenerate = builder.skipped,
            "triangulation complete"
        );

        Ok(Triangulation {
            vertices: inputs,
            triangles,
            edges,
            edge_set,
            super_triangle: Some(corners),
            skipped_degenerate: builder.skipped,
        })
    }
}

/// A triangle under construction, addressed by working-point indices.
#[derive(Debug, Clone, Copy)]
struct Facet {
    corners: [usize; 3],
    /// `None` for collinear corners.
    circle: Option<Circumcircle>,
}

/// Mutable state of a single triangulation run.
///
/// Working points are stored relative to the bounding-box minimum of the
/// input so circumcircle arithmetic stays at the scale of the point spread.
struct Builder<'a> {
    points: Vec<Point2>,
    facets: Vec<Facet>,
    params: &'a TriangulationParams,
    skipped: usize,
}

impl<'a> Builder<'a> {
    fn new(corners: &[Point2; 3], inputs: &[Vertex], params: &'a TriangulationParams) -> Self {
        let (min, _) = bounds(inputs);
        let mut points = Vec::with_capacity(SUPER_CORNERS + inputs.len());
        points.extend(corners.iter().map(|&c| c - min.coords));
        points.extend(inputs.iter().map(|v| v.point() - min.coords));
        Self {
            points,
            facets: Vec::new(),
            params,
            skipped: 0,
        }
    }

    fn push_facet(&mut self, corners: [usize; 3]) -> std::result::Result<(), GeometryError> {
        let [a, b, c] = corners.map(|i| self.points[i]);
        let circle = match circumcircle(&a, &b, &c, self.params.degenerate_epsilon) {
            Ok(circle) => Some(circle),
            Err(err) => match self.params.degenerate_policy {
                DegeneratePolicy::Error => return Err(err),
                DegeneratePolicy::Skip => {
                    debug!(?corners, "skipping collinear triangle");
                    self.skipped += 1;
                    None
                }
            },
        };
        self.facets.push(Facet { corners, circle });
        Ok(())
    }

    /// Carves the cavity of triangles whose circumcircle holds the point at
    /// `index` and fans the cavity boundary to it.
    fn insert(&mut self, index: usize) -> std::result::Result<(), GeometryError> {
        let p = self.points[index];

        let mut polygon: Vec<[usize; 2]> = Vec::new();
        self.facets.retain(|facet| {
            let bad = facet.circle.is_some_and(|circle| circle.contains(&p));
            if bad {
                let [a, b, c] = facet.corners;
                polygon.extend([[a, b], [b, c], [c, a]]);
            }
            !bad
        });

        let mut multiplicity: HashMap<[usize; 2], usize> = HashMap::with_capacity(polygon.len());
        for side in &polygon {
            *multiplicity.entry(side_key(*side)).or_insert(0) += 1;
        }
        let boundary: Vec<[usize; 2]> = polygon
            .into_iter()
            .filter(|side| multiplicity.get(&side_key(*side)) == Some(&1))
            .collect();

        trace!(
            vertex = index - SUPER_CORNERS,
            cavity = multiplicity.len(),
            boundary = boundary.len(),
            "inserted vertex"
        );

        for [u, v] in boundary {
            self.push_facet([u, v, index])?;
        }
        Ok(())
    }

    /// Drops collinear facets and any facet touching a super-triangle corner,
    /// then maps the rest back onto the caller's vertices.
    fn finish(&self, inputs: &[Vertex]) -> Vec<Triangle> {
        let super_corners = [self.points[0], self.points[1], self.points[2]];
        let tolerance = self.params.super_vertex_tolerance;

        self.facets
            .iter()
            .filter(|facet| facet.circle.is_some())
            .filter(|facet| {
                let corners = facet.corners.map(|i| self.points[i]);
                !super_corners
                    .iter()
                    .any(|s| corners_near(&corners, s, tolerance))
            })
            .filter_map(|facet| {
                let [a, b, c] = facet.corners.map(|i| i.checked_sub(SUPER_CORNERS));
                Some(Triangle::new(
                    inputs[a?],
                    inputs[b?],
                    inputs[c?],
                ))
            })
            .collect()
    }
}

fn side_key([a, b]: [usize; 2]) -> [usize; 2] {
    if a <= b {
        [a, b]
    } else {
        [b, a]
    }
}

/// Keeps the first vertex at each position, in input order.
fn distinct_vertices(vertices: &[Vertex]) -> Vec<Vertex> {
    let mut seen: HashSet<GridPoint> = HashSet::with_capacity(vertices.len());
    vertices
        .iter()
        .filter(|v| seen.insert(v.position()))
        .copied()
        .collect()
}

/// Axis-aligned bounds of `inputs` as `(min, max)`.
fn bounds(inputs: &[Vertex]) -> (Point2, Point2) {
    let mut min = inputs[0].point();
    let mut max = min;
    for v in inputs {
        let p = v.point();
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (min, max)
}

/// Right triangle enclosing the bounding box of `inputs`.
///
/// With `delta_max = 2 * max(width, height)` (at least 1), the margin is
/// `delta_max * SUPER_MARGIN_SCALE`: every corner lies outside the box by
/// the margin on each axis it is offset along, and the hypotenuse clears
/// the far box corner.
fn super_triangle(inputs: &[Vertex]) -> [Point2; 3] {
    let (min, max) = bounds(inputs);
    let width = max.x - min.x;
    let height = max.y - min.y;
    let delta_max = width.max(height) * 2.0;
    let margin = delta_max.max(1.0) * SUPER_MARGIN_SCALE;
    let leg = width + height + 3.0 * margin;

    let origin = Point2::new(min.x - margin, min.y - margin);
    [
        origin,
        Point2::new(origin.x, origin.y + leg),
        Point2::new(origin.x + leg, origin.y),
    ]
}

/// Deduplicates triangle sides, keeping first-seen order.
fn collect_edges(triangles: &[Triangle]) -> (Vec<Edge>, HashSet<Edge>) {
    let mut edges = Vec::new();
    let mut edge_set = HashSet::new();
    for triangle in triangles {
        for edge in triangle.edges() {
            if edge_set.insert(edge) {
                edges.push(edge);
            }
        }
    }
    (edges, edge_set)
}
