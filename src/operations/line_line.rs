//! Line and segment intersection in the plane.
//!
//! Predicates (`is_*`) accept endpoints within the distance tolerance of the
//! other primitive, then fall back to the sign of [`Line2::get_side`];
//! constructions solve the general-form system `Ax + By + C = 0`.

use crate::error::Result;
use crate::geometry::{Line2, LineSide};
use crate::math::Vector2;

/// Infinite lines meet unless they are parallel.
#[must_use]
pub fn is_line_intersect_line(l1: &Line2, l2: &Line2, tolerance: f64) -> bool {
    !l1.is_parallel(l2, tolerance)
}

/// Whether the infinite `line` crosses or touches `segment`.
#[must_use]
pub fn is_line_intersect_segment(line: &Line2, segment: &Line2, tolerance: f64) -> bool {
    if line.is_parallel(segment, tolerance) {
        return false;
    }
    line.is_point_on_line(&segment.start(), tolerance)
        || line.is_point_on_line(&segment.end(), tolerance)
        || straddles(line, segment)
}

/// Whether two segments cross or touch.
///
/// An endpoint lying on the other segment within `tolerance` counts as
/// touching; otherwise the endpoints of each segment must lie strictly on
/// opposite sides of the other's supporting line.
#[must_use]
pub fn is_segment_intersect_segment(s1: &Line2, s2: &Line2, tolerance: f64) -> bool {
    let touches = [
        (s2, s1.start()),
        (s2, s1.end()),
        (s1, s2.start()),
        (s1, s2.end()),
    ]
    .iter()
    .any(|(segment, p)| segment.is_point_on_segment(p, tolerance));
    if touches {
        return true;
    }
    straddles(s2, s1) && straddles(s1, s2)
}

/// Whether the endpoints of `segment` fall on strictly opposite sides of
/// `line`, judged by the sign of the cross product alone.
fn straddles(line: &Line2, segment: &Line2) -> bool {
    matches!(
        (
            line.get_side(&segment.start(), 0.0),
            line.get_side(&segment.end(), 0.0)
        ),
        (LineSide::Left, LineSide::Right) | (LineSide::Right, LineSide::Left)
    )
}

/// Intersection point of two infinite lines, `None` when the coefficient
/// determinant is exactly zero (parallel or coincident lines).
#[must_use]
pub fn line_intersect_line(l1: &Line2, l2: &Line2) -> Option<Vector2> {
    let (a1, b1, c1) = general_form(l1);
    let (a2, b2, c2) = general_form(l2);
    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }
    Some(Vector2::new(
        (b1 * c2 - b2 * c1) / det,
        (a2 * c1 - a1 * c2) / det,
    ))
}

/// Intersection of an infinite line with a segment.
#[must_use]
pub fn line_intersect_segment(line: &Line2, segment: &Line2, tolerance: f64) -> Option<Vector2> {
    line_intersect_line(line, segment).filter(|p| segment.is_point_on_segment(p, tolerance))
}

/// Intersection of two segments.
///
/// Collinear overlapping segments have no single intersection and yield
/// `None`.
#[must_use]
pub fn segment_intersect_segment(s1: &Line2, s2: &Line2, tolerance: f64) -> Option<Vector2> {
    line_intersect_line(s1, s2)
        .filter(|p| s1.is_point_on_segment(p, tolerance) && s2.is_point_on_segment(p, tolerance))
}

/// The line through `point` perpendicular to `line`, directed along the
/// left normal of `line`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateLine`](crate::error::GeometryError::DegenerateLine)
/// if `point` is so large that adding a unit offset does not change it.
pub fn perpendicular_through_point(line: &Line2, point: Vector2) -> Result<Line2> {
    Line2::new(point, point + line.left_direction())
}

/// Coefficients `(A, B, C)` of `Ax + By + C = 0` through both endpoints.
fn general_form(line: &Line2) -> (f64, f64, f64) {
    let Vector2 { x: x1, y: y1 } = line.start();
    let Vector2 { x: x2, y: y2 } = line.end();
    (y2 - y1, x1 - x2, x2 * y1 - x1 * y2)
}
