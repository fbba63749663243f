//! Line, segment and circle intersection predicates against circles.
//!
//! Circles are treated as discs: a segment lying wholly inside a circle
//! intersects it. The `_without_border` variants exclude tangency by
//! requiring a margin of `tolerance` past the border.

use crate::geometry::{Circle, Line2};

#[must_use]
pub fn is_line_intersect_circle(line: &Line2, circle: &Circle, tolerance: f64) -> bool {
    line.get_distance(&circle.center, false) <= circle.radius + tolerance
}

#[must_use]
pub fn is_line_intersect_circle_without_border(
    line: &Line2,
    circle: &Circle,
    tolerance: f64,
) -> bool {
    line.get_distance(&circle.center, false) < circle.radius - tolerance
}

#[must_use]
pub fn is_segment_intersect_circle(segment: &Line2, circle: &Circle, tolerance: f64) -> bool {
    segment.get_distance(&circle.center, true) <= circle.radius + tolerance
}

#[must_use]
pub fn is_segment_intersect_circle_without_border(
    segment: &Line2,
    circle: &Circle,
    tolerance: f64,
) -> bool {
    segment.get_distance(&circle.center, true) < circle.radius - tolerance
}

/// Whether the two circles' outlines meet.
///
/// With `include_tangent`, touching circles (internally or externally)
/// count; without it, the outlines must cross at two distinct points.
#[must_use]
pub fn is_circle_intersect_circle(
    c1: &Circle,
    c2: &Circle,
    include_tangent: bool,
    tolerance: f64,
) -> bool {
    let d = c1.center.distance_to(&c2.center);
    let outer = c1.radius + c2.radius;
    let inner = (c1.radius - c2.radius).abs();
    if include_tangent {
        d >= inner - tolerance && d <= outer + tolerance
    } else {
        d > inner + tolerance && d < outer - tolerance
    }
}
