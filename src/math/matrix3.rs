use std::fmt;
use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::error::{MatrixError, Result};

use super::Vector2;

const MATRIX3_SIZE: usize = 9;

/// A row-major 3×3 matrix, used as an affine transform of the plane.
///
/// Entries are laid out as
///
/// ```text
/// m11 m12 m13
/// m21 m22 m23
/// m31 m32 m33
/// ```
///
/// and the last row is conventionally `(0, 0, 1)`, though nothing enforces
/// it. `==` compares elements exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    elements: [f64; MATRIX3_SIZE],
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix3 {
    pub const ZERO: Self = Self {
        elements: [0.0; MATRIX3_SIZE],
    };

    pub const IDENTITY: Self = Self {
        elements: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Creates a matrix from its entries in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[allow(clippy::similar_names)]
    #[must_use]
    pub const fn new(
        m11: f64,
        m12: f64,
        m13: f64,
        m21: f64,
        m22: f64,
        m23: f64,
        m31: f64,
        m32: f64,
        m33: f64,
    ) -> Self {
        Self {
            elements: [m11, m12, m13, m21, m22, m23, m31, m32, m33],
        }
    }

    #[must_use]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]] = rows;
        Self::new(m11, m12, m13, m21, m22, m23, m31, m32, m33)
    }

    /// Reads nine row-major elements from `elements`, starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ElementCount`] if fewer than nine elements are
    /// available after `offset`.
    pub fn from_array(elements: &[f64], offset: usize) -> Result<Self> {
        let available = elements.len().saturating_sub(offset);
        let slice = offset
            .checked_add(MATRIX3_SIZE)
            .and_then(|end| elements.get(offset..end));
        let Some(slice) = slice else {
            tracing::debug!(offset, available, "not enough elements for a Matrix3");
            return Err(MatrixError::ElementCount {
                expected: MATRIX3_SIZE,
                available,
            }
            .into());
        };
        let mut m = Self::ZERO;
        m.elements.copy_from_slice(slice);
        Ok(m)
    }

    /// The elements in row-major order.
    #[must_use]
    pub fn to_array(&self) -> [f64; MATRIX3_SIZE] {
        self.elements
    }

    /// Overwrites every element with `elements` (row-major).
    pub fn set(&mut self, elements: [f64; MATRIX3_SIZE]) {
        self.elements = elements;
    }

    /// The entry at zero-based `row` and `col`, `None` outside the 3×3
    /// range.
    #[must_use]
    pub fn element(&self, row: usize, col: usize) -> Option<f64> {
        if row < 3 && col < 3 {
            Some(self.elements[row * 3 + col])
        } else {
            None
        }
    }

    /// A pure translation by `v`.
    #[must_use]
    pub fn from_translate(v: Vector2) -> Self {
        Self::new(1.0, 0.0, v.x, 0.0, 1.0, v.y, 0.0, 0.0, 1.0)
    }

    /// A pure (non-uniform) scale by `v`.
    #[must_use]
    pub fn from_scale(v: Vector2) -> Self {
        Self::new(v.x, 0.0, 0.0, 0.0, v.y, 0.0, 0.0, 0.0, 1.0)
    }

    /// A counter-clockwise rotation about the origin by `radian`.
    #[must_use]
    pub fn from_rotate(radian: f64) -> Self {
        let (s, c) = radian.sin_cos();
        Self::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
    }

    /// `self × m`.
    #[must_use]
    pub fn multiply(&self, m: &Self) -> Self {
        product(self, m)
    }

    /// `m × self`.
    #[must_use]
    pub fn pre_multiply(&self, m: &Self) -> Self {
        product(m, self)
    }

    /// Folds `matrices` left to right with [`Self::multiply`], starting from
    /// the identity: `[A, B, C]` yields `A·B·C`.
    #[must_use]
    pub fn multiply_matrices(matrices: &[Self]) -> Self {
        matrices
            .iter()
            .fold(Self::IDENTITY, |acc, m| acc.multiply(m))
    }

    /// Folds `matrices` left to right with [`Self::pre_multiply`], starting
    /// from the identity: `[A, B, C]` yields `C·B·A`.
    #[must_use]
    pub fn pre_multiply_matrices(matrices: &[Self]) -> Self {
        matrices
            .iter()
            .fold(Self::IDENTITY, |acc, m| acc.pre_multiply(m))
    }

    #[must_use]
    pub fn multiply_scalar(&self, s: f64) -> Self {
        Self {
            elements: self.elements.map(|e| e * s),
        }
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        let [m11, m12, m13, m21, m22, m23, m31, m32, m33] = self.elements;
        Self::new(m11, m21, m31, m12, m22, m32, m13, m23, m33)
    }

    /// Cofactor expansion along the first row.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let [m11, m12, m13, m21, m22, m23, m31, m32, m33] = self.elements;
        m11 * (m22 * m33 - m32 * m23) - m12 * (m21 * m33 - m31 * m23)
            + m13 * (m21 * m32 - m31 * m22)
    }

    /// The inverse, computed from the adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if the determinant is zero.
    pub fn invert(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            tracing::debug!(elements = ?self.elements, "cannot invert singular Matrix3");
            return Err(MatrixError::Singular.into());
        }
        let d = 1.0 / det;
        let [m11, m12, m13, m21, m22, m23, m31, m32, m33] = self.elements;
        Ok(Self::new(
            (m22 * m33 - m32 * m23) * d,
            -(m12 * m33 - m32 * m13) * d,
            (m12 * m23 - m22 * m13) * d,
            -(m21 * m33 - m31 * m23) * d,
            (m11 * m33 - m31 * m13) * d,
            -(m11 * m23 - m21 * m13) * d,
            (m21 * m32 - m31 * m22) * d,
            -(m11 * m32 - m31 * m12) * d,
            (m11 * m22 - m21 * m12) * d,
        ))
    }

    /// Composes a translation on the left: `from_translate(v) × self`.
    #[must_use]
    pub fn apply_translate(&self, v: Vector2) -> Self {
        self.pre_multiply(&Self::from_translate(v))
    }

    /// Composes a scale on the left: `from_scale(v) × self`.
    #[must_use]
    pub fn apply_scale(&self, v: Vector2) -> Self {
        self.pre_multiply(&Self::from_scale(v))
    }

    /// Composes a rotation on the left: `from_rotate(radian) × self`.
    #[must_use]
    pub fn apply_rotate(&self, radian: f64) -> Self {
        self.pre_multiply(&Self::from_rotate(radian))
    }
}

fn product(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut out = Matrix3::ZERO;
    for row in 0..3 {
        for col in 0..3 {
            out.elements[row * 3 + col] = (0..3)
                .map(|k| a.elements[row * 3 + k] * b.elements[k * 3 + col])
                .sum();
        }
    }
    out
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<&Matrix3> for &Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: &Matrix3) -> Matrix3 {
        self.multiply(rhs)
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.elements.chunks(3) {
            writeln!(f, "[{}, {}, {}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Matrix3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.elements
            .iter()
            .zip(&other.elements)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.elements
            .iter()
            .zip(&other.elements)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Matrix3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.elements
            .iter()
            .zip(&other.elements)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeomathError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_4;

    fn sample() -> Matrix3 {
        Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0)
    }

    #[test]
    fn copies_are_structurally_equal() {
        let m = sample();
        let mut copy = m;
        assert_eq!(copy, m);
        copy.set(Matrix3::IDENTITY.to_array());
        assert_eq!(m, sample());
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Matrix3::default(), Matrix3::IDENTITY);
    }

    #[test]
    fn entries_are_row_major() {
        let m = sample();
        assert_eq!(
            m.to_array(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
        assert_eq!(m.element(0, 2), Some(3.0));
        assert_eq!(m.element(2, 0), Some(7.0));
        assert_eq!(m.element(3, 0), None);
        assert_eq!(m.element(0, 3), None);
        assert_eq!(
            Matrix3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]),
            m
        );
    }

    #[test]
    fn set_overwrites_everything() {
        let mut m = Matrix3::IDENTITY;
        m.set(sample().to_array());
        assert_eq!(m, sample());
    }

    #[test]
    fn from_array_with_offset() {
        let data = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(Matrix3::from_array(&data, 1).unwrap(), sample());
    }

    #[test]
    fn from_array_too_short() {
        let err = Matrix3::from_array(&[1.0; 9], 2).unwrap_err();
        assert_eq!(
            err,
            GeomathError::Matrix(MatrixError::ElementCount {
                expected: 9,
                available: 7
            })
        );
        assert!(Matrix3::from_array(&[1.0; 4], 10).is_err());
        assert!(Matrix3::from_array(&[1.0; 9], usize::MAX).is_err());
    }

    #[test]
    fn transform_constructors() {
        let t = Matrix3::from_translate(Vector2::new(10.0, -10.0)).to_array();
        assert_eq!((t[2], t[5]), (10.0, -10.0));

        let s = Matrix3::from_scale(Vector2::new(2.0, -2.0)).to_array();
        assert_eq!((s[0], s[4]), (2.0, -2.0));

        let r = Matrix3::from_rotate(FRAC_PI_4).to_array();
        let (sin, cos) = FRAC_PI_4.sin_cos();
        assert_eq!([r[0], r[1], r[3], r[4]], [cos, -sin, sin, cos]);
    }

    #[test]
    fn multiply_order() {
        let t = Matrix3::from_translate(Vector2::new(1.0, 0.0));
        let s = Matrix3::from_scale(Vector2::new(2.0, 2.0));
        let p = Vector2::new(1.0, 1.0);

        // t·s scales first, then translates.
        assert_eq!(p.apply_matrix3(&t.multiply(&s)), Vector2::new(3.0, 2.0));
        assert_eq!(p.apply_matrix3(&t.pre_multiply(&s)), Vector2::new(4.0, 2.0));
        assert_eq!(t * s, t.multiply(&s));
        assert_eq!(&t * &s, t.multiply(&s));
    }

    #[test]
    fn multiply_matrices_folds_from_identity() {
        let a = Matrix3::from_translate(Vector2::new(1.0, 2.0));
        let b = Matrix3::from_rotate(0.3);
        let c = Matrix3::from_scale(Vector2::new(2.0, 3.0));
        assert_eq!(
            Matrix3::multiply_matrices(&[a, b, c]),
            a.multiply(&b).multiply(&c)
        );
        assert_eq!(
            Matrix3::pre_multiply_matrices(&[a, b, c]),
            c.multiply(&b.multiply(&a))
        );
        assert_eq!(Matrix3::multiply_matrices(&[]), Matrix3::IDENTITY);
    }

    #[test]
    fn apply_is_left_multiplication() {
        let m = Matrix3::from_rotate(0.5).apply_scale(Vector2::new(2.0, 1.0));
        let v = Vector2::new(3.0, -1.0);
        assert_eq!(m.apply_translate(v), m.pre_multiply(&Matrix3::from_translate(v)));
        assert_eq!(m.apply_rotate(0.2), Matrix3::from_rotate(0.2) * m);
    }

    #[test]
    fn translate_round_trip() {
        let v = Vector2::new(4.0, -7.5);
        let m = Matrix3::from_translate(v).apply_translate(v.inverse());
        assert_abs_diff_eq!(m, Matrix3::IDENTITY, epsilon = 1e-12);
    }

    #[test]
    fn transpose_and_scalar() {
        assert_eq!(
            sample().transpose(),
            Matrix3::new(1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0)
        );
        assert_eq!(sample().multiply_scalar(2.0).element(1, 1), Some(10.0));
    }

    #[test]
    fn singular_matrix_does_not_invert() {
        assert_relative_eq!(sample().determinant(), 0.0);
        assert_eq!(
            sample().invert().unwrap_err(),
            GeomathError::Matrix(MatrixError::Singular)
        );
        assert!(Matrix3::ZERO.invert().is_err());
    }

    #[test]
    fn invert_matches_nalgebra() {
        let m = Matrix3::new(2.0, 0.5, 1.0, -1.0, 3.0, 0.0, 0.0, 1.0, 4.0);
        let reference: nalgebra::Matrix3<f64> = m.into();
        let expected: Matrix3 = reference.try_inverse().unwrap().into();
        assert_relative_eq!(m.invert().unwrap(), expected, epsilon = 1e-12);
        assert_relative_eq!(m.determinant(), reference.determinant(), epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn identity_is_neutral(e in prop::array::uniform9(-1e3f64..1e3)) {
            let mut m = Matrix3::ZERO;
            m.set(e);
            prop_assert_eq!(m.multiply(&Matrix3::IDENTITY), m);
            prop_assert_eq!(Matrix3::IDENTITY.multiply(&m), m);
        }

        #[test]
        fn double_inverse(tx in -1e2f64..1e2, ty in -1e2f64..1e2, r in -3.0f64..3.0, s in 0.5f64..4.0) {
            let m = Matrix3::from_scale(Vector2::new(s, s * 0.5))
                .apply_rotate(r)
                .apply_translate(Vector2::new(tx, ty));
            let back = m.invert().unwrap().invert().unwrap();
            prop_assert!(back.abs_diff_eq(&m, 1e-9));
        }
    }
}
