use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::number::is_zero;
use super::{Matrix3, TWO_PI};

/// A vector (or point) with two `f64` coordinates.
///
/// Equality through `==` is exact; use the `approx` traits for comparisons
/// with a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

/// A vector-like value whose components may be missing.
///
/// Used as an arithmetic operand: a missing component acts as the identity
/// element of the operation (`0` for `+`/`-`, `1` for `*`/`/`), so
/// `v + PartialVector2::x(5.0)` leaves `v.y` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PartialVector2 {
    /// Optional X component.
    pub x: Option<f64>,
    /// Optional Y component.
    pub y: Option<f64>,
}

impl PartialVector2 {
    /// Creates a partial vector from optional components.
    #[must_use]
    pub fn new(x: Option<f64>, y: Option<f64>) -> Self {
        Self { x, y }
    }

    /// A partial vector with only the X component set.
    #[must_use]
    pub fn x(x: f64) -> Self {
        Self { x: Some(x), y: None }
    }

    /// A partial vector with only the Y component set.
    #[must_use]
    pub fn y(y: f64) -> Self {
        Self { x: None, y: Some(y) }
    }
}

/// Right-hand side of the `Vector2` arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vector2Operand {
    /// Applied to every component.
    Scalar(f64),
    /// Applied per component; missing components are skipped.
    Partial(PartialVector2),
}

impl Vector2Operand {
    /// Resolves the operand into per-axis values, substituting `identity`
    /// for missing components.
    fn resolve(self, identity: f64) -> (f64, f64) {
        match self {
            Self::Scalar(s) => (s, s),
            Self::Partial(p) => (p.x.unwrap_or(identity), p.y.unwrap_or(identity)),
        }
    }
}

impl From<f64> for Vector2Operand {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vector2> for Vector2Operand {
    fn from(v: Vector2) -> Self {
        Self::Partial(PartialVector2::new(Some(v.x), Some(v.y)))
    }
}

impl From<&Vector2> for Vector2Operand {
    fn from(v: &Vector2) -> Self {
        Self::from(*v)
    }
}

impl From<PartialVector2> for Vector2Operand {
    fn from(p: PartialVector2) -> Self {
        Self::Partial(p)
    }
}

impl Vector2 {
    /// `(0, 0)`
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// `(+inf, +inf)`
    pub const MAX: Self = Self::new(f64::INFINITY, f64::INFINITY);
    /// `(-inf, -inf)`
    pub const MIN: Self = Self::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    /// Unit vector along the positive X axis.
    pub const X_DIRECTION: Self = Self::new(1.0, 0.0);
    /// Unit vector along the positive Y axis.
    pub const Y_DIRECTION: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Overwrites both components.
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Overwrites the X component.
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Overwrites the Y component.
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Overwrites the components present in `p`, keeping the others.
    pub fn set_partial(&mut self, p: PartialVector2) {
        if let Some(x) = p.x {
            self.x = x;
        }
        if let Some(y) = p.y {
            self.y = y;
        }
    }

    /// Copies every component of `v` into this vector.
    pub fn copy_from(&mut self, v: &Self) {
        *self = *v;
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_sq().sqrt()
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn length_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Counter-clockwise angle from the positive X axis, in `[0, 2π)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        let radian = self.y.atan2(self.x);
        if radian < 0.0 {
            radian + TWO_PI
        } else {
            radian
        }
    }

    /// The negated vector.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Returns the unit vector in the same direction.
    ///
    /// The zero vector normalizes to itself.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            *self
        } else {
            *self / len
        }
    }

    /// Linear interpolation towards `v`; `alpha = 1` yields `v`.
    #[must_use]
    pub fn lerp(&self, v: &Self, alpha: f64) -> Self {
        Self::new(
            self.x + (v.x - self.x) * alpha,
            self.y + (v.y - self.y) * alpha,
        )
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, v: &Self) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// Z component of the 3D cross product of the two vectors embedded in
    /// the XY plane.
    #[must_use]
    pub fn cross(&self, v: &Self) -> f64 {
        self.x * v.y - self.y * v.x
    }

    /// Distance between the two points.
    #[must_use]
    pub fn distance_to(&self, v: &Self) -> f64 {
        (*v - *self).length()
    }

    /// Whether the cross product is zero within `tolerance`.
    #[must_use]
    pub fn is_parallel(&self, v: &Self, tolerance: f64) -> bool {
        is_zero(self.cross(v), tolerance)
    }

    /// Whether the dot product is zero within `tolerance`.
    #[must_use]
    pub fn is_orthogonal(&self, v: &Self, tolerance: f64) -> bool {
        is_zero(self.dot(v), tolerance)
    }

    /// Transforms this vector as an affine point: `m · [x, y, 1]`.
    #[must_use]
    pub fn apply_matrix3(&self, m: &Matrix3) -> Self {
        let e = m.to_array();
        Self::new(
            e[0] * self.x + e[1] * self.y + e[2],
            e[3] * self.x + e[4] * self.y + e[5],
        )
    }

    /// The components as `[x, y]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl<T: Into<Vector2Operand>> Add<T> for Vector2 {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        let (x, y) = rhs.into().resolve(0.0);
        Self::new(self.x + x, self.y + y)
    }
}

impl<T: Into<Vector2Operand>> Sub<T> for Vector2 {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        let (x, y) = rhs.into().resolve(0.0);
        Self::new(self.x - x, self.y - y)
    }
}

impl<T: Into<Vector2Operand>> Mul<T> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let (x, y) = rhs.into().resolve(1.0);
        Self::new(self.x * x, self.y * y)
    }
}

impl<T: Into<Vector2Operand>> Div<T> for Vector2 {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        let (x, y) = rhs.into().resolve(1.0);
        Self::new(self.x / x, self.y / y)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverse()
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl AbsDiffEq for Vector2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector2 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Vector2 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}
