use crate::math::{point_3d, Vector3};

/// An axis-aligned bounding box in space; see [`Box2`](super::Box2) for
/// the validity rule.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Box3 {
    pub min: Vector3,
    pub max: Vector3,
}

impl Box3 {
    #[must_use]
    pub fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    /// The smallest box containing every point; `None` for no points.
    #[must_use]
    pub fn create_by_points(points: &[Vector3]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let (min, max) = points.iter().fold(
            (Vector3::MAX, Vector3::MIN),
            |(min, max), p| {
                (
                    Vector3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                    Vector3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
                )
            },
        );
        Some(Self::new(min, max))
    }

    #[must_use]
    pub fn create_by_geometry(center: Vector3, size: Vector3) -> Self {
        let half = size / 2.0;
        Self::new(center - half, center + half)
    }

    pub fn set_min(&mut self, min: Vector3) {
        self.min = min;
    }

    pub fn set_max(&mut self, max: Vector3) {
        self.max = max;
    }

    /// The eight corners, bottom face (`min.z`) first, each face
    /// counter-clockwise seen from `+z`:
    ///
    /// ```text
    ///    7---------6
    ///   /|        /|
    ///  / |       / |
    /// 3---------2  |
    /// |  4------|--5
    /// | /       | /
    /// |/        |/
    /// 0---------1
    /// ```
    ///
    /// with X to the right, Y up and Z into the page.
    #[must_use]
    pub fn points(&self) -> [Vector3; 8] {
        let Self { min, max } = *self;
        [
            Vector3::new(min.x, min.y, min.z),
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(max.x, max.y, min.z),
            Vector3::new(min.x, max.y, min.z),
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(max.x, max.y, max.z),
            Vector3::new(min.x, max.y, max.z),
        ]
    }

    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(&self) -> Vector3 {
        point_3d::interpolate(&self.min, &self.max, 0.5)
    }

    #[must_use]
    pub fn check_valid(&self) -> bool {
        self.max.x > self.min.x && self.max.y > self.min.y && self.max.z > self.min.z
    }

    #[must_use]
    pub fn is_point_in_box(&self, point: &Vector3, tolerance: f64) -> bool {
        let within = |p: f64, lo: f64, hi: f64| p >= lo - tolerance && p <= hi + tolerance;
        within(point.x, self.min.x, self.max.x)
            && within(point.y, self.min.y, self.max.y)
            && within(point.z, self.min.z, self.max.z)
    }
}
