mod arc;
mod box2;
mod box3;
mod circle;
mod ellipse;
mod line2;
mod line3;
mod polygon;
mod triangle2;

pub use arc::Arc;
pub use box2::Box2;
pub use box3::Box3;
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line2::{Line2, LineSide};
pub use line3::Line3;
pub use polygon::Polygon;
pub use triangle2::Triangle2;

use crate::math::Vector2;

/// A shape whose outline can be sampled into a sequence of points, e.g. for
/// building a renderer path.
pub trait Polyline {
    /// Samples `count` points along the outline, in drawing order.
    ///
    /// Shapes return an empty vector when `count` is too small to describe
    /// them.
    fn to_points(&self, count: usize) -> Vec<Vector2>;
}
