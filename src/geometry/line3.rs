use crate::error::{GeometryError, Result};
use crate::math::point_3d::{self, dot3};
use crate::math::Vector3;

/// A line in space through two distinct points; see [`Line2`](super::Line2)
/// for the line/segment conventions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    start: Vector3,
    end: Vector3,
}

impl Line3 {
    /// Creates a line through `start` and `end`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the two points coincide.
    pub fn new(start: Vector3, end: Vector3) -> Result<Self> {
        check_distinct(&start, &end)?;
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> Vector3 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Vector3 {
        self.end
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the two points coincide.
    pub fn set(&mut self, start: Vector3, end: Vector3) -> Result<()> {
        check_distinct(&start, &end)?;
        self.start = start;
        self.end = end;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if `point` equals the end.
    pub fn set_start(&mut self, point: Vector3) -> Result<()> {
        check_distinct(&point, &self.end)?;
        self.start = point;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if `point` equals the start.
    pub fn set_end(&mut self, point: Vector3) -> Result<()> {
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

    #[must_use]
    pub fn direction(&self) -> Vector3 {
        (self.end - self.start).normalize()
    }

    #[must_use]
    pub fn center(&self) -> Vector3 {
        self.interpolate(0.5)
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if rounding collapses the
    /// translated endpoints onto each other.
    pub fn translate(&self, v: Vector3) -> Result<Self> {
        Self::new(self.start + v, self.end + v)
    }

    #[must_use]
    pub fn get_alpha(&self, point: &Vector3, is_segment: bool) -> f64 {
        let alpha = dot3(&self.start, &self.end, point) / self.length_sq();
        if is_segment {
            alpha.clamp(0.0, 1.0)
        } else {
            alpha
        }
    }

    /// Orthogonal projection of `point`; `None` when `is_segment` is set, the
    /// projection misses the segment and `use_segment_end` is not.
    #[must_use]
    pub fn get_projected_point(
        &self,
        point: &Vector3,
        is_segment: bool,
        use_segment_end: bool,
    ) -> Option<Vector3> {
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

    #[must_use]
    pub fn get_distance(&self, point: &Vector3, is_segment: bool) -> f64 {
        let projection = self.interpolate(self.get_alpha(point, is_segment));
        point.distance_to(&projection)
    }

    #[must_use]
    pub fn is_point_on_line(&self, point: &Vector3, tolerance: f64) -> bool {
        self.get_distance(point, false) <= tolerance
    }

    #[must_use]
    pub fn is_point_on_segment(&self, point: &Vector3, tolerance: f64) -> bool {
        self.get_distance(point, true) <= tolerance
    }

    #[must_use]
    pub fn is_parallel(&self, line: &Self, tolerance: f64) -> bool {
        self.direction().is_parallel(&line.direction(), tolerance)
    }

    #[must_use]
    pub fn is_orthogonal(&self, line: &Self, tolerance: f64) -> bool {
        self.direction().is_orthogonal(&line.direction(), tolerance)
    }

    #[must_use]
    pub fn interpolate(&self, alpha: f64) -> Vector3 {
        point_3d::interpolate(&self.start, &self.end, alpha)
    }
}

fn check_distinct(start: &Vector3, end: &Vector3) -> Result<()> {
    if start == end {
        return Err(GeometryError::degenerate_line_3d(start.x, start.y, start.z).into());
    }
    Ok(())
}
