#![allow(dead_code)]

use std::collections::HashSet;

use gridlink::{GridPoint, Vertex, VertexStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Installs a test-friendly subscriber once; controlled by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn insert_all(store: &mut VertexStore, points: &[(i32, i32)]) -> Vec<Vertex> {
    points
        .iter()
        .map(|&(x, y)| store.insert(GridPoint::new(x, y)))
        .collect()
}

/// `count` distinct grid points in `[0, extent)`, reproducible per seed.
pub fn random_points(seed: u64, count: usize, extent: i32) -> Vec<(i32, i32)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let p = (rng.random_range(0..extent), rng.random_range(0..extent));
        if seen.insert(p) {
            points.push(p);
        }
    }
    points
}

fn cross(o: (i64, i64), a: (i64, i64), b: (i64, i64)) -> i64 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

/// Number of points lying on the convex hull boundary, collinear ones included.
pub fn hull_boundary_count(points: &[(i32, i32)]) -> usize {
    let mut sorted: Vec<(i64, i64)> = points
        .iter()
        .map(|&(x, y)| (i64::from(x), i64::from(y)))
        .collect();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted.len();
    }

    // Andrew's monotone chain keeping only strict corners.
    let mut hull: Vec<(i64, i64)> = Vec::new();
    for pass in [sorted.clone(), sorted.iter().rev().copied().collect()] {
        let start = hull.len();
        for p in pass {
            while hull.len() >= start + 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
                hull.pop();
            }
            hull.push(p);
        }
        hull.pop();
    }

    sorted
        .iter()
        .filter(|&&p| {
            (0..hull.len()).any(|i| {
                let (a, b) = (hull[i], hull[(i + 1) % hull.len()]);
                cross(a, b, p) == 0
                    && a.0.min(b.0) <= p.0
                    && p.0 <= a.0.max(b.0)
                    && a.1.min(b.1) <= p.1
                    && p.1 <= a.1.max(b.1)
            })
        })
        .count()
}

/// Exact test for `d` strictly inside the circumcircle of `a`, `b`, `c`.
pub fn strictly_in_circle(a: GridPoint, b: GridPoint, c: GridPoint, d: GridPoint) -> bool {
    let rel = |p: GridPoint| (i128::from(p.x) - i128::from(d.x), i128::from(p.y) - i128::from(d.y));
    let (ax, ay) = rel(a);
    let (bx, by) = rel(b);
    let (cx, cy) = rel(c);
    let det = (ax * ax + ay * ay) * (bx * cy - by * cx) - (bx * bx + by * by) * (ax * cy - ay * cx)
        + (cx * cx + cy * cy) * (ax * by - ay * bx);
    let orientation = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
    det * orientation.signum() > 0
}
