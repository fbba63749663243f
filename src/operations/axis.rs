//! Axis alignment tests for [`Line3`].

use crate::geometry::Line3;
use crate::math::Vector3;

#[must_use]
pub fn is_parallel_to_x_axis(line: &Line3, tolerance: f64) -> bool {
    line.direction().is_parallel(&Vector3::X_DIRECTION, tolerance)
}

#[must_use]
pub fn is_parallel_to_y_axis(line: &Line3, tolerance: f64) -> bool {
    line.direction().is_parallel(&Vector3::Y_DIRECTION, tolerance)
}

#[must_use]
pub fn is_parallel_to_z_axis(line: &Line3, tolerance: f64) -> bool {
    line.direction().is_parallel(&Vector3::Z_DIRECTION, tolerance)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::SIX_DECIMAL_TOLERANCE as TOL;

    #[test]
    fn axis_parallel_lines() {
        let start = Vector3::new(1.0, 2.0, 3.0);
        let along_x = Line3::new(start, start + Vector3::new(-4.0, 0.0, 0.0)).unwrap();
        let along_z = Line3::new(start, start + Vector3::new(0.0, 0.0, 2.0)).unwrap();
        let skew = Line3::new(start, start + Vector3::ONE).unwrap();

        assert!(is_parallel_to_x_axis(&along_x, TOL));
        assert!(!is_parallel_to_y_axis(&along_x, TOL));
        assert!(is_parallel_to_z_axis(&along_z, TOL));
        assert!(!is_parallel_to_x_axis(&skew, TOL));
        assert!(!is_parallel_to_y_axis(&skew, TOL));
        assert!(!is_parallel_to_z_axis(&skew, TOL));
    }
}
