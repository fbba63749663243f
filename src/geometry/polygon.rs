use crate::math::Vector2;

use super::{Line2, Polyline};

/// A closed polygon given by its vertices in winding order.
///
/// The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    points: Vec<Vector2>,
}

impl Polygon {
    #[must_use]
    pub fn new(points: Vec<Vector2>) -> Self {
        Self { points }
    }

    /// Replaces every vertex.
    pub fn set_path(&mut self, points: Vec<Vector2>) {
        self.points = points;
    }

    pub fn add_point(&mut self, point: Vector2) {
        self.points.push(point);
    }

    pub fn add_points(&mut self, points: impl IntoIterator<Item = Vector2>) {
        self.points.extend(points);
    }

    #[must_use]
    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    /// The closing edges `p[i] → p[i + 1]` and `p[n-1] → p[0]`.
    ///
    /// Consecutive duplicate vertices form no edge and are skipped.
    #[must_use]
    pub fn edges(&self) -> Vec<Line2> {
        self.vertex_pairs()
            .filter_map(|(a, b)| Line2::new(*a, *b).ok())
            .collect()
    }

    /// Arithmetic mean of the vertices; `None` for an empty polygon.
    #[must_use]
    pub fn center(&self) -> Option<Vector2> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self.points.iter().fold(Vector2::ZERO, |acc, p| acc + p);
        #[allow(clippy::cast_precision_loss)]
        let count = self.points.len() as f64;
        Some(sum / count)
    }

    /// Shoelace area, positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.vertex_pairs().map(|(a, b)| a.cross(b)).sum::<f64>() / 2.0
    }

    /// Area-weighted centroid; `None` when the signed area is zero.
    #[must_use]
    pub fn centroid(&self) -> Option<Vector2> {
        let area = self.signed_area();
        if area == 0.0 {
            return None;
        }
        let sum = self.vertex_pairs().fold(Vector2::ZERO, |acc, (a, b)| {
            acc + (*a + *b) * a.cross(b)
        });
        Some(sum / (6.0 * area))
    }

    /// Even-odd ray casting test.
    ///
    /// A point within `tolerance` of an edge is inside iff `include_edge`.
    #[must_use]
    pub fn is_point_inside_polygon(&self, point: &Vector2, include_edge: bool, tolerance: f64) -> bool {
        let Vector2 { x, y } = *point;
        let mut inside = false;
        for (pi, pj) in self.vertex_pairs() {
            if on_edge(pi, pj, point, tolerance) {
                return include_edge;
            }
            let crosses =
                (pi.y > y) != (pj.y > y) && pi.x + (y - pi.y) / (pj.y - pi.y) * (pj.x - pi.x) < x;
            if crosses {
                inside = !inside;
            }
        }
        inside
    }

    /// Whether `point` lies on any edge within `tolerance`.
    #[must_use]
    pub fn is_point_on_edge(&self, point: &Vector2, tolerance: f64) -> bool {
        self.vertex_pairs()
            .any(|(pi, pj)| on_edge(pi, pj, point, tolerance))
    }

    fn vertex_pairs(&self) -> impl Iterator<Item = (&Vector2, &Vector2)> {
        self.points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
    }
}

/// Segment membership; a zero-length edge degenerates to its vertex.
fn on_edge(a: &Vector2, b: &Vector2, point: &Vector2, tolerance: f64) -> bool {
    match Line2::new(*a, *b) {
        Ok(edge) => edge.is_point_on_segment(point, tolerance),
        Err(_) => a.distance_to(point) <= tolerance,
    }
}

impl Polyline for Polygon {
    /// The first `count` vertices in winding order, wrapping around to the
    /// first vertex when `count` exceeds their number.
    ///
    /// A `count` below the vertex count drops the trailing vertices, so the
    /// result then outlines a different polygon; pass `points().len()` for
    /// the exact outline.
    fn to_points(&self, count: usize) -> Vec<Vector2> {
        self.points.iter().copied().cycle().take(count).collect()
    }
}
