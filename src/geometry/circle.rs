use crate::error::{GeometryError, Result};
use crate::math::{circle_2d, Vector2, SIX_DECIMAL_TOLERANCE, TWO_PI};
use crate::operations::line_line::{line_intersect_line, perpendicular_through_point};

use super::{Line2, Polyline};

/// A circle in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub center: Vector2,
    /// Radius; zero is representable but degenerate.
    pub radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(center: Vector2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// The circle through three points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NoGeometry`] if the points are collinear and
    /// [`GeometryError::DegenerateLine`] if two consecutive points coincide.
    pub fn create_by_three_point(p1: Vector2, p2: Vector2, p3: Vector2) -> Result<Self> {
        let center = circumcenter(p1, p2, p3, "circle")?;
        Ok(Self::new(center, center.distance_to(&p1)))
    }

    pub fn set_center(&mut self, center: Vector2) {
        self.center = center;
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    #[must_use]
    pub fn translate(&self, v: Vector2) -> Self {
        Self::new(self.center + v, self.radius)
    }

    /// Whether `point` lies on the circumference within `tolerance`.
    #[must_use]
    pub fn is_point_on_circle(&self, point: &Vector2, tolerance: f64) -> bool {
        (point.distance_to(&self.center) - self.radius).abs() <= tolerance
    }

    /// Whether `point` lies inside the disc.
    ///
    /// With `include_border` the circumference counts, widened by
    /// `tolerance`; without it the test is strict.
    #[must_use]
    pub fn is_point_inside_circle(&self, point: &Vector2, include_border: bool, tolerance: f64) -> bool {
        let distance = point.distance_to(&self.center);
        if include_border {
            distance <= self.radius + tolerance
        } else {
            distance < self.radius
        }
    }
}

impl Polyline for Circle {
    /// `count` points at uniform angle steps starting from angle 0; fewer
    /// than three points cannot outline a circle, so the result is empty.
    fn to_points(&self, count: usize) -> Vec<Vector2> {
        if count < 3 {
            return Vec::new();
        }
        #[allow(clippy::cast_precision_loss)]
        let step = TWO_PI / count as f64;
        (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let angle = step * i as f64;
                circle_2d::point_by_angle(&self.center, self.radius, angle, false)
            })
            .collect()
    }
}

/// Intersects the perpendicular bisectors of `p1 → p2` and `p2 → p3`.
///
/// Chords parallel within [`SIX_DECIMAL_TOLERANCE`] count as collinear.
pub(crate) fn circumcenter(
    p1: Vector2,
    p2: Vector2,
    p3: Vector2,
    shape: &'static str,
) -> Result<Vector2> {
    let l1 = Line2::new(p1, p2)?;
    let l2 = Line2::new(p2, p3)?;
    let center = if l1.is_parallel(&l2, SIX_DECIMAL_TOLERANCE) {
        None
    } else {
        let bisector1 = perpendicular_through_point(&l1, l1.center())?;
        let bisector2 = perpendicular_through_point(&l2, l2.center())?;
        line_intersect_line(&bisector1, &bisector2)
    };
    center.ok_or_else(|| {
        tracing::debug!(%p1, %p2, %p3, shape, "bisectors do not intersect");
        GeometryError::NoGeometry(shape).into()
    })
}
