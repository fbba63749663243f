use crate::error::Result;
use crate::math::{circle_2d, Vector2, TWO_PI};

use super::circle::circumcenter;
use super::Polyline;

/// A circular arc.
///
/// Radians are measured from the positive X axis, counter-clockwise unless
/// `clockwise` is set, in which case an angle `θ` denotes the direction at
/// counter-clockwise angle `2π − θ`. The arc sweeps forward from
/// `start_radian` to `end_radian` in its own direction. Radians are stored
/// as given, without reduction to `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Arc {
    pub center: Vector2,
    pub radius: f64,
    pub start_radian: f64,
    pub end_radian: f64,
    pub clockwise: bool,
}

impl Arc {
    #[must_use]
    pub fn new(
        center: Vector2,
        radius: f64,
        start_radian: f64,
        end_radian: f64,
        clockwise: bool,
    ) -> Self {
        Self {
            center,
            radius,
            start_radian,
            end_radian,
            clockwise,
        }
    }

    /// The arc around `center` from `start_point` to `end_point`.
    ///
    /// The radius is the distance from `center` to `start_point`;
    /// `end_point` only contributes its angle.
    #[must_use]
    pub fn create_by_boundary_point(
        center: Vector2,
        start_point: Vector2,
        end_point: Vector2,
        clockwise: bool,
    ) -> Self {
        let start_radian = circle_2d::angle_by_point(&center, &start_point, clockwise);
        let end_radian = circle_2d::angle_by_point(&center, &end_point, clockwise);
        Self::new(
            center,
            start_point.distance_to(&center),
            start_radian,
            end_radian,
            clockwise,
        )
    }

    /// The arc from `start_point` to `end_point` on the circle through all
    /// three points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NoGeometry`](crate::error::GeometryError::NoGeometry)
    /// if the points are collinear and
    /// [`GeometryError::DegenerateLine`](crate::error::GeometryError::DegenerateLine)
    /// if two consecutive points coincide.
    pub fn create_by_three_point(
        start_point: Vector2,
        arc_point: Vector2,
        end_point: Vector2,
        clockwise: bool,
    ) -> Result<Self> {
        let center = circumcenter(start_point, arc_point, end_point, "arc")?;
        Ok(Self::create_by_boundary_point(
            center,
            start_point,
            end_point,
            clockwise,
        ))
    }

    pub fn set_center(&mut self, center: Vector2) {
        self.center = center;
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    pub fn set_start_radian(&mut self, radian: f64) {
        self.start_radian = radian;
    }

    pub fn set_end_radian(&mut self, radian: f64) {
        self.end_radian = radian;
    }

    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.clockwise = clockwise;
    }

    #[must_use]
    pub fn translate(&self, v: Vector2) -> Self {
        Self {
            center: self.center + v,
            ..*self
        }
    }

    /// Adds `radian` to both the start and the end radian.
    #[must_use]
    pub fn rotate(&self, radian: f64) -> Self {
        Self {
            start_radian: self.start_radian + radian,
            end_radian: self.end_radian + radian,
            ..*self
        }
    }

    /// The swept angle, `end − start` wrapped into non-negative values by
    /// adding `2π` once.
    #[must_use]
    pub fn radian(&self) -> f64 {
        let diff = self.end_radian - self.start_radian;
        if diff < 0.0 {
            diff + TWO_PI
        } else {
            diff
        }
    }

    #[must_use]
    pub fn mid_radian(&self) -> f64 {
        self.start_radian + self.radian() / 2.0
    }

    #[must_use]
    pub fn mid_point(&self) -> Vector2 {
        self.point_at(self.mid_radian())
    }

    #[must_use]
    pub fn start_point(&self) -> Vector2 {
        self.point_at(self.start_radian)
    }

    #[must_use]
    pub fn end_point(&self) -> Vector2 {
        self.point_at(self.end_radian)
    }

    /// Whether `point` lies on the arc: on the circle within
    /// `distance_tolerance` and inside the swept angle within
    /// `angle_tolerance`.
    #[must_use]
    pub fn is_point_on_arc(&self, point: &Vector2, distance_tolerance: f64, angle_tolerance: f64) -> bool {
        (point.distance_to(&self.center) - self.radius).abs() <= distance_tolerance
            && self.is_angle_inside_arc(self.angle_of(point), angle_tolerance)
    }

    /// Whether `point` lies inside the sector spanned by the arc.
    ///
    /// The radial test follows [`Circle::is_point_inside_circle`](super::Circle::is_point_inside_circle).
    #[must_use]
    pub fn is_point_inside_arc(
        &self,
        point: &Vector2,
        include_border: bool,
        distance_tolerance: f64,
        angle_tolerance: f64,
    ) -> bool {
        let distance = point.distance_to(&self.center);
        let in_range = if include_border {
            distance <= self.radius + distance_tolerance
        } else {
            distance < self.radius
        };
        in_range && self.is_angle_inside_arc(self.angle_of(point), angle_tolerance)
    }

    /// Whether `angle` (in this arc's direction convention) falls within the
    /// swept range, widened by `tolerance` at both ends.
    #[must_use]
    pub fn is_angle_inside_arc(&self, angle: f64, tolerance: f64) -> bool {
        let (start, end) = (self.start_radian, self.end_radian);
        if end >= start {
            angle >= start - tolerance && angle <= end + tolerance
        } else {
            // wraps through zero
            angle >= start - tolerance || angle <= end + tolerance
        }
    }

    fn angle_of(&self, point: &Vector2) -> f64 {
        circle_2d::angle_by_point(&self.center, point, self.clockwise)
    }

    fn point_at(&self, radian: f64) -> Vector2 {
        circle_2d::point_by_angle(&self.center, self.radius, radian, self.clockwise)
    }
}

impl Polyline for Arc {
    /// `count` points from the start point to the end point inclusive, evenly
    /// spaced in angle. Needs at least two points.
    fn to_points(&self, count: usize) -> Vec<Vector2> {
        if count < 2 {
            return Vec::new();
        }
        #[allow(clippy::cast_precision_loss)]
        let step = self.radian() / (count - 1) as f64;
        (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let radian = self.start_radian + step * i as f64;
                self.point_at(radian)
            })
            .collect()
    }
}
