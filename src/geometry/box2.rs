use crate::math::{point_2d, Vector2};

/// An axis-aligned bounding rectangle.
///
/// A box is valid when `max` exceeds `min` on every axis; invalid boxes,
/// such as the default zero box, are still representable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Box2 {
    pub min: Vector2,
    pub max: Vector2,
}

impl Box2 {
    #[must_use]
    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    /// The smallest box containing every point; `None` for no points.
    #[must_use]
    pub fn create_by_points(points: &[Vector2]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let (min, max) = points.iter().fold(
            (Vector2::MAX, Vector2::MIN),
            |(min, max), p| {
                (
                    Vector2::new(min.x.min(p.x), min.y.min(p.y)),
                    Vector2::new(max.x.max(p.x), max.y.max(p.y)),
                )
            },
        );
        Some(Self::new(min, max))
    }

    /// The box of extent `size` centered on `center`.
    #[must_use]
    pub fn create_by_geometry(center: Vector2, size: Vector2) -> Self {
        let half = size / 2.0;
        Self::new(center - half, center + half)
    }

    pub fn set_min(&mut self, min: Vector2) {
        self.min = min;
    }

    pub fn set_max(&mut self, max: Vector2) {
        self.max = max;
    }

    /// Corners counter-clockwise from `min`:
    ///
    /// ```text
    /// 3-------2
    /// |       |
    /// 0-------1
    /// ```
    #[must_use]
    pub fn points(&self) -> [Vector2; 4] {
        let Self { min, max } = *self;
        [
            Vector2::new(min.x, min.y),
            Vector2::new(max.x, min.y),
            Vector2::new(max.x, max.y),
            Vector2::new(min.x, max.y),
        ]
    }

    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(&self) -> Vector2 {
        point_2d::interpolate(&self.min, &self.max, 0.5)
    }

    #[must_use]
    pub fn check_valid(&self) -> bool {
        self.max.x > self.min.x && self.max.y > self.min.y
    }

    /// Whether `point` lies in the box grown by `tolerance` on every side.
    #[must_use]
    pub fn is_point_in_box(&self, point: &Vector2, tolerance: f64) -> bool {
        (self.min.x - tolerance..=self.max.x + tolerance).contains(&point.x)
            && (self.min.y - tolerance..=self.max.y + tolerance).contains(&point.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::SIX_DECIMAL_TOLERANCE as TOL;

    #[test]
    fn from_points() {
        let b = Box2::create_by_points(&[Vector2::new(-10.0, 10.0), Vector2::new(10.0, -10.0)]).unwrap();
        assert_eq!(b.min, Vector2::new(-10.0, -10.0));
        assert_eq!(b.max, Vector2::new(10.0, 10.0));

        let single = Box2::create_by_points(&[Vector2::ONE]).unwrap();
        assert_eq!(single.size(), Vector2::ZERO);
        assert!(!single.check_valid());

        assert_eq!(Box2::create_by_points(&[]), None);
    }

    #[test]
    fn from_geometry() {
        let b = Box2::create_by_geometry(Vector2::new(1.0, 1.0), Vector2::new(4.0, 2.0));
        assert_eq!(b, Box2::new(Vector2::new(-1.0, 0.0), Vector2::new(3.0, 2.0)));
        assert_eq!(b.center(), Vector2::new(1.0, 1.0));
        assert_eq!(b.size(), Vector2::new(4.0, 2.0));
    }

    #[test]
    fn corner_order() {
        let b = Box2::new(Vector2::ZERO, Vector2::new(2.0, 1.0));
        assert_eq!(
            b.points(),
            [
                Vector2::new(0.0, 0.0),
                Vector2::new(2.0, 0.0),
                Vector2::new(2.0, 1.0),
                Vector2::new(0.0, 1.0),
            ]
        );
    }

    #[test]
    fn validity_and_setters() {
        let mut b = Box2::default();
        assert!(!b.check_valid());
        b.set_max(Vector2::ONE);
        assert!(b.check_valid());
        b.set_min(Vector2::new(0.0, 1.0));
        assert!(!b.check_valid());
    }

    #[test]
    fn membership_uses_tolerance() {
        let b = Box2::new(Vector2::ZERO, Vector2::ONE);
        assert!(b.is_point_in_box(&Vector2::new(0.5, 0.5), TOL));
        assert!(b.is_point_in_box(&Vector2::new(1.0, 0.0), 0.0));
        assert!(b.is_point_in_box(&Vector2::new(1.0 + 1e-7, 0.5), TOL));
        assert!(!b.is_point_in_box(&Vector2::new(1.0 + 1e-5, 0.5), TOL));
    }
}
