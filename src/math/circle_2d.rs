use super::{Point2, Vector2};
use crate::error::GeometryError;

/// A circle through three points, stored as center and squared radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle {
    /// Circumcenter.
    pub center: Point2,
    /// Squared circumradius.
    pub radius_sq: f64,
}

impl Circumcircle {
    /// Returns `true` if `p` lies inside or on the circle.
    ///
    /// Points exactly on the boundary count as contained.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        nalgebra::distance_squared(&self.center, p) <= self.radius_sq
    }
}

/// Computes the circumcircle of the triangle `(a, b, c)`.
///
/// Works in a frame centered on `a` so the squared magnitudes stay small for
/// corners far from the origin. The denominator is twice the signed area;
/// when its magnitude is at most `epsilon` the corners are collinear and no
/// finite circle exists.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` for collinear or coincident corners.
pub fn circumcircle(
    a: &Point2,
    b: &Point2,
    c: &Point2,
    epsilon: f64,
) -> Result<Circumcircle, GeometryError> {
    let ab = b - a;
    let ac = c - a;
    let d = 2.0 * (ab.x * ac.y - ab.y * ac.x);
    if d.abs() <= epsilon {
        return Err(GeometryError::Degenerate(format!(
            "collinear triangle ({}, {}), ({}, {}), ({}, {})",
            a.x, a.y, b.x, b.y, c.x, c.y
        )));
    }

    let ab_sq = ab.norm_squared();
    let ac_sq = ac.norm_squared();

    let offset = Vector2::new(
        (ac.y * ab_sq - ab.y * ac_sq) / d,
        (ab.x * ac_sq - ac.x * ab_sq) / d,
    );

    Ok(Circumcircle {
        center: a + offset,
        radius_sq: offset.norm_squared(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;

    #[test]
    fn right_triangle_center_is_hypotenuse_midpoint() {
        let c = circumcircle(
            &Point2::new(0.0, 0.0),
            &Point2::new(4.0, 0.0),
            &Point2::new(0.0, 4.0),
            TOLERANCE,
        )
        .unwrap();
        assert_relative_eq!(c.center.x, 2.0);
        assert_relative_eq!(c.center.y, 2.0);
        assert_relative_eq!(c.radius_sq, 8.0);
    }

    #[test]
    fn orientation_does_not_matter() {
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(5.0, 2.0);
        let c = Point2::new(2.0, 6.0);
        let ccw = circumcircle(&a, &b, &c, TOLERANCE).unwrap();
        let cw = circumcircle(&c, &b, &a, TOLERANCE).unwrap();
        assert_relative_eq!(ccw.center.x, cw.center.x, epsilon = 1e-12);
        assert_relative_eq!(ccw.center.y, cw.center.y, epsilon = 1e-12);
        assert_relative_eq!(ccw.radius_sq, cw.radius_sq, epsilon = 1e-12);
    }

    #[test]
    fn boundary_points_are_contained() {
        let c = circumcircle(
            &Point2::new(0.0, 0.0),
            &Point2::new(4.0, 0.0),
            &Point2::new(0.0, 4.0),
            TOLERANCE,
        )
        .unwrap();
        // (4, 4) is the fourth corner of the square, on the same circle.
        assert!(c.contains(&Point2::new(4.0, 4.0)));
        assert!(c.contains(&Point2::new(2.0, 2.0)));
        assert!(!c.contains(&Point2::new(5.0, 5.0)));
    }

    #[test]
    fn far_from_origin_matches_translated_circle() {
        let shift = 2.0e9;
        let near = circumcircle(
            &Point2::new(0.0, 0.0),
            &Point2::new(7.0, 1.0),
            &Point2::new(3.0, 5.0),
            TOLERANCE,
        )
        .unwrap();
        let far = circumcircle(
            &Point2::new(shift, shift),
            &Point2::new(shift + 7.0, shift + 1.0),
            &Point2::new(shift + 3.0, shift + 5.0),
            TOLERANCE,
        )
        .unwrap();
        assert_relative_eq!(far.radius_sq, near.radius_sq, epsilon = 1e-9);
        assert_relative_eq!(far.center.x - shift, near.center.x, epsilon = 1e-6);
        assert_relative_eq!(far.center.y - shift, near.center.y, epsilon = 1e-6);
        assert!(!far.contains(&Point2::new(shift + 7.0, shift + 4.0)));
        assert!(far.contains(&Point2::new(shift + 4.0, shift + 2.0)));
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let result = circumcircle(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 1.0),
            &Point2::new(3.0, 3.0),
            TOLERANCE,
        );
        assert!(matches!(result, Err(GeometryError::Degenerate(_))));
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let p = Point2::new(2.0, -3.0);
        assert!(circumcircle(&p, &p, &Point2::new(0.0, 0.0), TOLERANCE).is_err());
    }
}
