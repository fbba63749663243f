use crate::math::{Matrix3, PartialVector2, Vector2, TWO_PI};

use super::Polyline;

/// An ellipse with semi-axes `rx`, `ry`, rotated by `rotate` radians about
/// its center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ellipse {
    pub center: Vector2,
    pub rx: f64,
    pub ry: f64,
    pub rotate: f64,
}

impl Ellipse {
    #[must_use]
    pub fn new(center: Vector2, rx: f64, ry: f64, rotate: f64) -> Self {
        Self {
            center,
            rx,
            ry,
            rotate,
        }
    }

    pub fn set_center(&mut self, center: Vector2) {
        self.center = center;
    }

    /// Moves the center along the given axes only.
    pub fn set_center_partial(&mut self, center: PartialVector2) {
        self.center.set_partial(center);
    }

    pub fn set_rx(&mut self, rx: f64) {
        self.rx = rx;
    }

    pub fn set_ry(&mut self, ry: f64) {
        self.ry = ry;
    }

    pub fn set_rotate(&mut self, rotate: f64) {
        self.rotate = rotate;
    }

    pub fn copy_from(&mut self, other: &Self) {
        *self = *other;
    }

    /// Whether `point` satisfies `(dx/rx)² + (dy/ry)² <= 1` (or `< 1` without
    /// `include_border`).
    ///
    /// `dx` and `dy` are taken along the world axes: `rotate` is not applied,
    /// so the test matches the drawn outline only for axis-aligned ellipses.
    #[must_use]
    pub fn is_point_inside_ellipse(&self, point: &Vector2, include_border: bool) -> bool {
        let d = *point - self.center;
        let value = (d.x / self.rx).powi(2) + (d.y / self.ry).powi(2);
        if include_border {
            value <= 1.0
        } else {
            value < 1.0
        }
    }
}

impl Polyline for Ellipse {
    /// `count` points of the rotated outline at uniform parameter steps,
    /// starting at the end of the `rx` axis. Needs at least three points.
    fn to_points(&self, count: usize) -> Vec<Vector2> {
        if count < 3 {
            return Vec::new();
        }
        let transform = Matrix3::from_rotate(self.rotate).apply_translate(self.center);
        #[allow(clippy::cast_precision_loss)]
        let step = TWO_PI / count as f64;
        (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let (s, c) = (step * i as f64).sin_cos();
                Vector2::new(self.rx * c, self.ry * s).apply_matrix3(&transform)
            })
            .collect()
    }
}
