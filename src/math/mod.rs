pub mod circle_2d;

/// Integer grid coordinate used for vertex positions.
pub type GridPoint = nalgebra::Point2<i32>;

/// 2D point type for derived (non-grid) geometry.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Converts a grid coordinate into floating-point space without loss.
#[must_use]
pub fn to_point2(p: GridPoint) -> Point2 {
    Point2::new(f64::from(p.x), f64::from(p.y))
}

/// Compares two scalars with a relative epsilon.
///
/// True when `|x - y| <= EPSILON * |x + y| * 2`, or when the difference is
/// below the smallest positive normal `f64`.
#[must_use]
pub fn almost_equal(x: f64, y: f64) -> bool {
    let diff = (x - y).abs();
    diff <= f64::EPSILON * (x + y).abs() * 2.0 || diff < f64::MIN_POSITIVE
}
