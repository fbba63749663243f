//! A 2D/3D computational geometry kernel: vectors, affine matrices, lines,
//! circles, arcs, ellipses, polygons, triangles and bounding boxes, with the
//! predicates and intersection routines needed for hit-testing and path
//! generation.
//!
//! All values are plain `Copy`/`Clone` data. Construction that can fail
//! returns [`Result`]; queries without an answer return `None`.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeomathError, Result};
