use crate::math::point_2d::cross3;
use crate::math::Vector2;

use super::{Line2, LineSide};

/// A triangle in the plane; vertex order is the winding order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle2 {
    points: [Vector2; 3],
}

impl Triangle2 {
    #[must_use]
    pub fn new(points: [Vector2; 3]) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Vector2; 3] {
        &self.points
    }

    pub fn set_points(&mut self, points: [Vector2; 3]) {
        self.points = points;
    }

    /// Replaces the vertex at `index` and returns the previous one, or
    /// leaves the triangle untouched and returns `None` if `index` is not
    /// 0, 1 or 2.
    pub fn set_point(&mut self, index: usize, point: Vector2) -> Option<Vector2> {
        self.points
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, point))
    }

    /// Signed area, positive for counter-clockwise winding.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [a, b, c] = &self.points;
        cross3(a, b, c) / 2.0
    }

    #[must_use]
    pub fn centroid(&self) -> Vector2 {
        let [a, b, c] = self.points;
        (a + b + c) / 3.0
    }

    /// Edges `a → b`, `b → c`, `c → a`, skipping those whose endpoints
    /// coincide.
    #[must_use]
    pub fn edges(&self) -> Vec<Line2> {
        let [a, b, c] = self.points;
        [(a, b), (b, c), (c, a)]
            .into_iter()
            .filter_map(|(start, end)| Line2::new(start, end).ok())
            .collect()
    }

    /// Whether `point` lies inside the triangle, i.e. strictly on the same
    /// side of every edge.
    ///
    /// A point within `tolerance` of an edge reports `include_edge`. A
    /// zero-area triangle has no interior: only its edges can contain points.
    #[must_use]
    pub fn is_point_inside_triangle(&self, point: &Vector2, include_edge: bool, tolerance: f64) -> bool {
        let edges = self.edges();
        if edges.iter().any(|e| e.is_point_on_segment(point, tolerance)) {
            return include_edge;
        }
        if edges.len() < 3 || self.area() == 0.0 {
            return false;
        }
        // the distance test above already owns the tolerance; sides use the sign
        let mut last_side = None;
        for edge in &edges {
            let side = edge.get_side(point, 0.0);
            if side == LineSide::On {
                return false;
            }
            match last_side {
                Some(last) if last != side => return false,
                _ => last_side = Some(side),
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::SIX_DECIMAL_TOLERANCE as TOL;
    use approx::assert_relative_eq;

    fn ccw() -> Triangle2 {
        Triangle2::new([
            Vector2::new(0.0, 0.0),
            Vector2::new(6.0, 0.0),
            Vector2::new(0.0, 6.0),
        ])
    }

    #[test]
    fn area_sign_follows_winding() {
        let t = ccw();
        assert_relative_eq!(t.area(), 18.0);
        let mut cw = t;
        cw.set_points([t.points()[0], t.points()[2], t.points()[1]]);
        assert_relative_eq!(cw.area(), -18.0);
    }

    #[test]
    fn centroid_is_vertex_mean() {
        assert_eq!(ccw().centroid(), Vector2::new(2.0, 2.0));
    }

    #[test]
    fn containment_for_both_windings() {
        let t = ccw();
        let [a, b, c] = *t.points();
        let cw = Triangle2::new([a, c, b]);
        for tri in [t, cw] {
            assert!(tri.is_point_inside_triangle(&Vector2::new(1.0, 1.0), true, TOL));
            assert!(!tri.is_point_inside_triangle(&Vector2::new(5.0, 5.0), true, TOL));
            assert!(!tri.is_point_inside_triangle(&Vector2::new(-1.0, 1.0), true, TOL));
        }
    }

    #[test]
    fn edge_points_follow_include_edge() {
        let t = ccw();
        let on_edge = Vector2::new(3.0, 0.0);
        assert!(t.is_point_inside_triangle(&on_edge, true, TOL));
        assert!(!t.is_point_inside_triangle(&on_edge, false, TOL));
        // collinear with the bottom edge but beyond it
        assert!(!t.is_point_inside_triangle(&Vector2::new(9.0, 0.0), true, TOL));
    }

    #[test]
    fn small_triangle_containment() {
        let t = Triangle2::new([
            Vector2::new(0.0, 0.0),
            Vector2::new(0.001, 0.0),
            Vector2::new(0.0, 0.001),
        ]);
        // 1e-5 away from the bottom edge, well outside the edge tolerance
        let near_edge = Vector2::new(0.0003, 0.00001);
        assert!(t.is_point_inside_triangle(&near_edge, true, TOL));
        assert!(t.is_point_inside_triangle(&near_edge, false, TOL));
        assert!(t.is_point_inside_triangle(&Vector2::new(0.0002, 0.0002), false, TOL));
        assert!(!t.is_point_inside_triangle(&Vector2::new(0.0008, 0.0008), true, TOL));
    }

    #[test]
    fn clone_is_structurally_equal() {
        let t = ccw();
        let copy = t;
        assert_eq!(copy, t);
    }

    #[test]
    fn degenerate_triangles() {
        let mut t = ccw();
        assert_eq!(t.set_point(2, Vector2::new(3.0, 0.0)), Some(Vector2::new(0.0, 6.0)));
        assert_eq!(t.set_point(3, Vector2::ONE), None);
        assert_eq!(t.area(), 0.0);
        assert!(!t.is_point_inside_triangle(&Vector2::new(1.0, 1.0), true, TOL));
        assert!(t.is_point_inside_triangle(&Vector2::new(2.0, 0.0), true, TOL));

        assert_eq!(t.set_point(1, Vector2::ZERO), Some(Vector2::new(6.0, 0.0)));
        assert_eq!(t.edges().len(), 2);
    }
}
