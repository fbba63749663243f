use crate::error::{GeometryError, Result};
use crate::math::point_2d::{self, cross3, dot3};
use crate::math::Vector2;

/// Which side of a directed line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineSide {
    /// Counter-clockwise from the direction (positive cross product).
    Left,
    On,
    Right,
}

/// A line in the plane through two distinct points.
///
/// The same value serves as an infinite line and as the segment
/// `start → end`; methods taking `is_segment` choose between the two.
/// `start != end` always holds, so every derived property is well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    start: Vector2,
    end: Vector2,
}

impl Line2 {
    /// Creates a line through `start` and `end`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the two points coincide.
    pub fn new(start: Vector2, end: Vector2) -> Result<Self> {
        check_distinct(&start, &end)?;
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> Vector2 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Vector2 {
        self.end
    }

    /// Replaces both endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the two points coincide;
    /// the line is left unchanged.
    pub fn set(&mut self, start: Vector2, end: Vector2) -> Result<()> {
        check_distinct(&start, &end)?;
        self.start = start;
        self.end = end;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if `point` equals the end.
    pub fn set_start(&mut self, point: Vector2) -> Result<()> {
        check_distinct(&point, &self.end)?;
        self.start = point;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if `point` equals the start.
    pub fn set_end(&mut self, point: Vector2) -> Result<()> {
        check_distinct(&self.start, &point)?;
        self.end = point;
        Ok(())
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    #[must_use]
    pub fn length_sq(&self) -> f64 {
        (self.end - self.start).length_sq()
    }

    /// Unit vector from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        (self.end - self.start).normalize()
    }

    /// Angle of [`Self::direction`] in `[0, 2π)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.direction().angle()
    }

    #[must_use]
    pub fn center(&self) -> Vector2 {
        self.interpolate(0.5)
    }

    /// Unit normal pointing to the left of the direction.
    #[must_use]
    pub fn left_direction(&self) -> Vector2 {
        point_2d::left_direction(&self.direction())
    }

    /// Unit normal pointing to the right of the direction.
    #[must_use]
    pub fn right_direction(&self) -> Vector2 {
        point_2d::right_direction(&self.direction())
    }

    /// Returns this line moved by `v`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if rounding collapses the
    /// translated endpoints onto each other.
    pub fn translate(&self, v: Vector2) -> Result<Self> {
        Self::new(self.start + v, self.end + v)
    }

    /// Classifies `point` against the directed line `start → end`.
    ///
    /// The cross product of `start → end` and `start → point` decides:
    /// positive is [`LineSide::Left`], within `tolerance` of zero is
    /// [`LineSide::On`].
    #[must_use]
    pub fn get_side(&self, point: &Vector2, tolerance: f64) -> LineSide {
        let product = cross3(&self.start, &self.end, point);
        if product.abs() <= tolerance {
            LineSide::On
        } else if product > 0.0 {
            LineSide::Left
        } else {
            LineSide::Right
        }
    }

    #[must_use]
    pub fn is_point_on_line(&self, point: &Vector2, tolerance: f64) -> bool {
        self.get_distance(point, false) <= tolerance
    }

    #[must_use]
    pub fn is_point_on_segment(&self, point: &Vector2, tolerance: f64) -> bool {
        self.get_distance(point, true) <= tolerance
    }

    /// Parameter `t` of the projection of `point`, with `interpolate(t)`
    /// giving the projected point. Clamped to `[0, 1]` when `is_segment`.
    #[must_use]
    pub fn get_alpha(&self, point: &Vector2, is_segment: bool) -> f64 {
        let alpha = dot3(&self.start, &self.end, point) / self.length_sq();
        if is_segment {
            alpha.clamp(0.0, 1.0)
        } else {
            alpha
        }
    }

    /// Orthogonal projection of `point` onto the line.
    ///
    /// When `is_segment` is set and the projection falls outside the segment,
    /// returns the nearer endpoint if `use_segment_end`, otherwise `None`.
    #[must_use]
    pub fn get_projected_point(
        &self,
        point: &Vector2,
        is_segment: bool,
        use_segment_end: bool,
    ) -> Option<Vector2> {
        let alpha = self.get_alpha(point, false);
        if is_segment {
            if alpha < 0.0 {
                return use_segment_end.then_some(self.start);
            }
            if alpha > 1.0 {
                return use_segment_end.then_some(self.end);
            }
        }
        Some(self.interpolate(alpha))
    }

    /// Distance from `point` to the line, or to the segment when `is_segment`.
    #[must_use]
    pub fn get_distance(&self, point: &Vector2, is_segment: bool) -> f64 {
        let projection = self.interpolate(self.get_alpha(point, is_segment));
        point.distance_to(&projection)
    }

    #[must_use]
    pub fn is_parallel(&self, line: &Self, tolerance: f64) -> bool {
        self.direction().is_parallel(&line.direction(), tolerance)
    }

    #[must_use]
    pub fn is_orthogonal(&self, line: &Self, tolerance: f64) -> bool {
        self.direction().is_orthogonal(&line.direction(), tolerance)
    }

    /// Whether the direction is exactly `±X`.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        let d = self.direction();
        d == Vector2::X_DIRECTION || d == Vector2::X_DIRECTION.inverse()
    }

    /// Whether the direction is exactly `±Y`.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        let d = self.direction();
        d == Vector2::Y_DIRECTION || d == Vector2::Y_DIRECTION.inverse()
    }

    /// The point `start + alpha · (end − start)`.
    #[must_use]
    pub fn interpolate(&self, alpha: f64) -> Vector2 {
        point_2d::interpolate(&self.start, &self.end, alpha)
    }
}

fn check_distinct(start: &Vector2, end: &Vector2) -> Result<()> {
    if start == end {
        return Err(GeometryError::degenerate_line_2d(start.x, start.y).into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeomathError;
    use crate::math::SIX_DECIMAL_TOLERANCE;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_4;

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Line2 {
        Line2::new(Vector2::new(x0, y0), Vector2::new(x1, y1)).unwrap()
    }

    #[test]
    fn copies_are_structurally_equal() {
        let l = line(0.0, 0.0, 3.0, 4.0);
        let mut copy = l;
        assert_eq!(copy, l);
        copy.set_end(Vector2::ONE).unwrap();
        assert_eq!(l.end(), Vector2::new(3.0, 4.0));
    }

    #[test]
    fn coincident_points_are_rejected() {
        let p = Vector2::new(1.0, 2.0);
        assert!(matches!(
            Line2::new(p, p),
            Err(GeomathError::Geometry(GeometryError::DegenerateLine { .. }))
        ));

        let mut l = line(0.0, 0.0, 1.0, 0.0);
        assert!(l.set_start(Vector2::new(1.0, 0.0)).is_err());
        assert!(l.set_end(Vector2::ZERO).is_err());
        assert!(l.set(p, p).is_err());
        assert_eq!(l, line(0.0, 0.0, 1.0, 0.0));

        l.set_end(Vector2::new(0.0, 5.0)).unwrap();
        assert_eq!(l.end(), Vector2::new(0.0, 5.0));
    }

    #[test]
    fn derived_properties() {
        let l = line(0.0, 0.0, 3.0, 3.0);
        assert_relative_eq!(l.length(), 18f64.sqrt());
        assert_relative_eq!(l.length_sq(), 18.0);
        assert_relative_eq!(l.angle(), FRAC_PI_4);
        assert_eq!(l.center(), Vector2::new(1.5, 1.5));
        assert_abs_diff_eq!(
            l.left_direction(),
            Vector2::new(-1.0, 1.0).normalize(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            l.right_direction(),
            Vector2::new(1.0, -1.0).normalize(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn translate_moves_both_ends() {
        let l = line(0.0, 0.0, 1.0, 0.0).translate(Vector2::new(2.0, 3.0)).unwrap();
        assert_eq!(l.start(), Vector2::new(2.0, 3.0));
        assert_eq!(l.end(), Vector2::new(3.0, 3.0));
    }

    #[test]
    fn side_classification() {
        let l = line(0.0, 0.0, 10.0, 0.0);
        assert_eq!(l.get_side(&Vector2::new(5.0, 1.0), SIX_DECIMAL_TOLERANCE), LineSide::Left);
        assert_eq!(l.get_side(&Vector2::new(5.0, -1.0), SIX_DECIMAL_TOLERANCE), LineSide::Right);
        assert_eq!(l.get_side(&Vector2::new(50.0, 0.0), SIX_DECIMAL_TOLERANCE), LineSide::On);
        assert_eq!(l.get_side(&Vector2::new(5.0, 1e-8), SIX_DECIMAL_TOLERANCE), LineSide::On);
    }

    #[test]
    fn alpha_and_projection() {
        let l = line(0.0, 0.0, 10.0, 0.0);
        let p = Vector2::new(15.0, 4.0);
        assert_relative_eq!(l.get_alpha(&p, false), 1.5);
        assert_relative_eq!(l.get_alpha(&p, true), 1.0);
        assert_eq!(l.get_projected_point(&p, false, false), Some(Vector2::new(15.0, 0.0)));
        assert_eq!(l.get_projected_point(&p, true, false), None);
        assert_eq!(l.get_projected_point(&p, true, true), Some(Vector2::new(10.0, 0.0)));
        let q = Vector2::new(-3.0, 1.0);
        assert_eq!(l.get_projected_point(&q, true, true), Some(Vector2::ZERO));
    }

    #[test]
    fn distances_and_membership() {
        let l = line(0.0, 0.0, 10.0, 0.0);
        let p = Vector2::new(13.0, 4.0);
        assert_relative_eq!(l.get_distance(&p, false), 4.0);
        assert_relative_eq!(l.get_distance(&p, true), 5.0);
        assert!(l.is_point_on_line(&Vector2::new(20.0, 0.0), SIX_DECIMAL_TOLERANCE));
        assert!(!l.is_point_on_segment(&Vector2::new(20.0, 0.0), SIX_DECIMAL_TOLERANCE));
        assert!(l.is_point_on_segment(&Vector2::new(10.0, 0.0), SIX_DECIMAL_TOLERANCE));
    }

    #[test]
    fn parallel_orthogonal_axis_aligned() {
        let h = line(0.0, 0.0, 10.0, 0.0);
        let h2 = line(5.0, 1.0, -5.0, 1.0);
        let v = line(0.0, 0.0, 0.0, -3.0);
        assert!(h.is_parallel(&h2, SIX_DECIMAL_TOLERANCE));
        assert!(h.is_orthogonal(&v, SIX_DECIMAL_TOLERANCE));
        assert!(h.is_horizontal() && h2.is_horizontal());
        assert!(v.is_vertical() && !v.is_horizontal());
        // exact comparison: a tiny tilt is no longer horizontal
        assert!(!line(0.0, 0.0, 10.0, 1e-9).is_horizontal());
    }

    proptest! {
        #[test]
        fn projection_lies_on_line(
            x0 in -1e3f64..1e3, y0 in -1e3f64..1e3,
            dx in 1.0f64..1e3, dy in -1e3f64..1e3,
            px in -1e3f64..1e3, py in -1e3f64..1e3,
        ) {
            let l = line(x0, y0, x0 + dx, y0 + dy);
            let projected = l.get_projected_point(&Vector2::new(px, py), false, false).unwrap();
            prop_assert!(l.get_distance(&projected, false) < 1e-6);
        }
    }
}
