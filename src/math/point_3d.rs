//! Free helpers over [`Vector3`] points.

use super::Vector3;

/// Cross product of `a → b` and `a → c`.
#[must_use]
pub fn cross3(a: &Vector3, b: &Vector3, c: &Vector3) -> Vector3 {
    (*b - *a).cross(&(*c - *a))
}

/// Dot product of `a → b` and `a → c`.
#[must_use]
pub fn dot3(a: &Vector3, b: &Vector3, c: &Vector3) -> f64 {
    (*b - *a).dot(&(*c - *a))
}

#[must_use]
pub fn distance(a: &Vector3, b: &Vector3) -> f64 {
    a.distance_to(b)
}

#[must_use]
pub fn interpolate(a: &Vector3, b: &Vector3, alpha: f64) -> Vector3 {
    a.lerp(b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross3_is_plane_normal() {
        let n = cross3(
            &Vector3::new(1.0, 1.0, 1.0),
            &Vector3::new(2.0, 1.0, 1.0),
            &Vector3::new(1.0, 2.0, 1.0),
        );
        assert_eq!(n, Vector3::Z_DIRECTION);
    }

    #[test]
    fn dot3_and_distance() {
        let a = Vector3::ZERO;
        let b = Vector3::new(1.0, 2.0, 2.0);
        let c = Vector3::new(0.0, 0.0, 1.0);
        assert!((dot3(&a, &b, &c) - 2.0).abs() < f64::EPSILON);
        assert!((distance(&a, &b) - 3.0).abs() < f64::EPSILON);
        assert_eq!(interpolate(&a, &b, 0.5), Vector3::new(0.5, 1.0, 1.0));
    }
}
