//! Free helpers over [`Vector2`] points.

use super::Vector2;

/// The left-hand perpendicular of `v`: `v` rotated by +90°.
#[must_use]
pub fn left_direction(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// The right-hand perpendicular of `v`: `v` rotated by -90°.
#[must_use]
pub fn right_direction(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Cross product of `a → b` and `a → c`.
///
/// Positive when `c` lies to the left of the directed line `a → b`.
#[must_use]
pub fn cross3(a: &Vector2, b: &Vector2, c: &Vector2) -> f64 {
    (*b - *a).cross(&(*c - *a))
}

/// Dot product of `a → b` and `a → c`.
#[must_use]
pub fn dot3(a: &Vector2, b: &Vector2, c: &Vector2) -> f64 {
    (*b - *a).dot(&(*c - *a))
}

/// Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance(a: &Vector2, b: &Vector2) -> f64 {
    a.distance_to(b)
}

/// The point at fraction `alpha` of the way from `a` to `b`.
#[must_use]
pub fn interpolate(a: &Vector2, b: &Vector2, alpha: f64) -> Vector2 {
    a.lerp(b, alpha)
}
