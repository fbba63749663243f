//! Angle/point conversions on a circle, with the clockwise convention used by
//! arcs: a clockwise angle `θ` is the counter-clockwise angle `2π − θ`.

use super::{Matrix3, Vector2, TWO_PI};

/// Angle of `point` around `center`, measured from the positive X axis.
///
/// The result lies in `[0, 2π)` when counter-clockwise and in `(0, 2π]` when
/// `clockwise`.
#[must_use]
pub fn angle_by_point(center: &Vector2, point: &Vector2, clockwise: bool) -> f64 {
    let angle = (*point - *center).angle();
    if clockwise {
        TWO_PI - angle
    } else {
        angle
    }
}

/// The point at `radian` on the circle of `radius` around `center`.
///
/// `radian` is reduced modulo `2π` first.
#[must_use]
pub fn point_by_angle(center: &Vector2, radius: f64, radian: f64, clockwise: bool) -> Vector2 {
    let reduced = radian % TWO_PI;
    let angle = if clockwise { TWO_PI - reduced } else { reduced };
    let rotate = Matrix3::from_rotate(angle);
    *center + Vector2::X_DIRECTION.apply_matrix3(&rotate) * radius
}
