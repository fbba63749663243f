use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::number::is_zero;
use super::Matrix4;

/// A vector (or point) with three `f64` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

/// A 3D vector-like value whose components may be missing.
///
/// See [`PartialVector2`](super::PartialVector2) for the operand rules.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PartialVector3 {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl PartialVector3 {
    /// Creates a partial vector from optional components.
    #[must_use]
    pub fn new(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn x(x: f64) -> Self {
        Self::new(Some(x), None, None)
    }

    #[must_use]
    pub fn y(y: f64) -> Self {
        Self::new(None, Some(y), None)
    }

    #[must_use]
    pub fn z(z: f64) -> Self {
        Self::new(None, None, Some(z))
    }
}

/// Right-hand side of the `Vector3` arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vector3Operand {
    Scalar(f64),
    Partial(PartialVector3),
}

impl Vector3Operand {
    fn resolve(self, identity: f64) -> (f64, f64, f64) {
        match self {
            Self::Scalar(s) => (s, s, s),
            Self::Partial(p) => (
                p.x.unwrap_or(identity),
                p.y.unwrap_or(identity),
                p.z.unwrap_or(identity),
            ),
        }
    }
}

impl From<f64> for Vector3Operand {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vector3> for Vector3Operand {
    fn from(v: Vector3) -> Self {
        Self::Partial(PartialVector3::new(Some(v.x), Some(v.y), Some(v.z)))
    }
}

impl From<&Vector3> for Vector3Operand {
    fn from(v: &Vector3) -> Self {
        Self::from(*v)
    }
}

impl From<PartialVector3> for Vector3Operand {
    fn from(p: PartialVector3) -> Self {
        Self::Partial(p)
    }
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const MAX: Self = Self::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    pub const MIN: Self = Self::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    pub const X_DIRECTION: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y_DIRECTION: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z_DIRECTION: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    /// Overwrites the components present in `p`, keeping the others.
    pub fn set_partial(&mut self, p: PartialVector3) {
        if let Some(x) = p.x {
            self.x = x;
        }
        if let Some(y) = p.y {
            self.y = y;
        }
        if let Some(z) = p.z {
            self.z = z;
        }
    }

    pub fn copy_from(&mut self, v: &Self) {
        *self = *v;
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_sq().sqrt()
    }

    #[must_use]
    pub fn length_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Returns the unit vector in the same direction; the zero vector
    /// normalizes to itself.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            *self
        } else {
            *self / len
        }
    }

    #[must_use]
    pub fn lerp(&self, v: &Self, alpha: f64) -> Self {
        Self::new(
            self.x + (v.x - self.x) * alpha,
            self.y + (v.y - self.y) * alpha,
            self.z + (v.z - self.z) * alpha,
        )
    }

    #[must_use]
    pub fn dot(&self, v: &Self) -> f64 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    #[must_use]
    pub fn cross(&self, v: &Self) -> Self {
        Self::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    #[must_use]
    pub fn distance_to(&self, v: &Self) -> f64 {
        (*v - *self).length()
    }

    /// Whether the cross product vanishes within `tolerance`.
    ///
    /// A zero vector is parallel to every vector.
    #[must_use]
    pub fn is_parallel(&self, v: &Self, tolerance: f64) -> bool {
        is_zero(self.cross(v).length(), tolerance)
    }

    /// Whether the dot product is zero within `tolerance`.
    #[must_use]
    pub fn is_orthogonal(&self, v: &Self, tolerance: f64) -> bool {
        is_zero(self.dot(v), tolerance)
    }

    /// Transforms this vector as an affine point: `m · [x, y, z, 1]`.
    #[must_use]
    pub fn apply_matrix4(&self, m: &Matrix4) -> Self {
        let e = m.to_array();
        let Self { x, y, z } = *self;
        Self::new(
            e[0] * x + e[1] * y + e[2] * z + e[3],
            e[4] * x + e[5] * y + e[6] * z + e[7],
            e[8] * x + e[9] * y + e[10] * z + e[11],
        )
    }

    #[must_use]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Into<Vector3Operand>> Add<T> for Vector3 {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        let (x, y, z) = rhs.into().resolve(0.0);
        Self::new(self.x + x, self.y + y, self.z + z)
    }
}

impl<T: Into<Vector3Operand>> Sub<T> for Vector3 {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        let (x, y, z) = rhs.into().resolve(0.0);
        Self::new(self.x - x, self.y - y, self.z - z)
    }
}

impl<T: Into<Vector3Operand>> Mul<T> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let (x, y, z) = rhs.into().resolve(1.0);
        Self::new(self.x * x, self.y * y, self.z * z)
    }
}

impl<T: Into<Vector3Operand>> Div<T> for Vector3 {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        let (x, y, z) = rhs.into().resolve(1.0);
        Self::new(self.x / x, self.y / y, self.z / z)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverse()
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::SIX_DECIMAL_TOLERANCE;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn set_partial_keeps_missing_components() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.set_partial(PartialVector3::new(None, Some(9.0), None));
        assert_eq!(v, Vector3::new(1.0, 9.0, 3.0));
        v.set_z(0.0);
        assert_eq!(v, Vector3::new(1.0, 9.0, 0.0));
    }

    #[test]
    fn arithmetic_with_partials() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v + PartialVector3::z(1.0), Vector3::new(1.0, 2.0, 4.0));
        assert_eq!(v - 1.0, Vector3::new(0.0, 1.0, 2.0));
        assert_eq!(v * PartialVector3::y(2.0), Vector3::new(1.0, 4.0, 3.0));
        assert_eq!(v / PartialVector3::x(2.0), Vector3::new(0.5, 2.0, 3.0));
        assert_eq!(v + v, 2.0 * v);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let c = Vector3::X_DIRECTION.cross(&Vector3::Y_DIRECTION);
        assert_eq!(c, Vector3::Z_DIRECTION);
        let c = Vector3::Y_DIRECTION.cross(&Vector3::X_DIRECTION);
        assert_eq!(c, Vector3::Z_DIRECTION.inverse());
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
        assert_relative_eq!(Vector3::new(2.0, 3.0, 6.0).normalize().length(), 1.0);
    }

    #[test]
    fn parallel_and_orthogonal() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert!(v.is_parallel(&(v * -3.0), SIX_DECIMAL_TOLERANCE));
        assert!(v.is_parallel(&Vector3::ZERO, SIX_DECIMAL_TOLERANCE));
        assert!(!v.is_parallel(&Vector3::X_DIRECTION, SIX_DECIMAL_TOLERANCE));
        assert!(Vector3::X_DIRECTION.is_orthogonal(&Vector3::Z_DIRECTION, SIX_DECIMAL_TOLERANCE));
    }

    #[test]
    fn apply_matrix4_translation_and_rotation() {
        let m = Matrix4::from_translate(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3::ZERO.apply_matrix4(&m), Vector3::new(1.0, 2.0, 3.0));

        let r = Matrix4::from_rotate_z(FRAC_PI_2);
        assert_abs_diff_eq!(
            Vector3::X_DIRECTION.apply_matrix4(&r),
            Vector3::Y_DIRECTION,
            epsilon = 1e-12
        );
    }

    #[test]
    fn lerp_and_distance() {
        let a = Vector3::ZERO;
        let b = Vector3::new(2.0, 4.0, 4.0);
        assert_eq!(a.lerp(&b, 0.5), Vector3::new(1.0, 2.0, 2.0));
        assert_relative_eq!(a.distance_to(&b), 6.0);
    }

    proptest! {
        #[test]
        fn normalize_has_unit_length(x in -1e6f64..1e6, y in -1e6f64..1e6, z in -1e6f64..1e6) {
            let v = Vector3::new(x, y, z);
            prop_assume!(v.length() > 1e-9);
            prop_assert!((v.normalize().length() - 1.0).abs() < 1e-12);
        }
    }
}
