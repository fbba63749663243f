//! Numeric leaves of the kernel: scalars, vectors, matrices and the small
//! free-function helpers built on them.

pub mod circle_2d;
pub mod convert;
pub mod matrix3;
pub mod matrix4;
pub mod number;
pub mod point_2d;
pub mod point_3d;
pub mod vector2;
pub mod vector3;

pub use matrix3::Matrix3;
pub use matrix4::Matrix4;
pub use vector2::{PartialVector2, Vector2, Vector2Operand};
pub use vector3::{PartialVector3, Vector3, Vector3Operand};

/// Default geometric tolerance for point/line/circle membership tests and
/// parallel/orthogonal checks.
pub const SIX_DECIMAL_TOLERANCE: f64 = 1e-6;

/// Default tolerance for [`number::is_equal`].
pub const NUMBER_TOLERANCE: f64 = 1e-5;

/// A full turn in radians.
pub const TWO_PI: f64 = std::f64::consts::TAU;
