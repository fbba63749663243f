use std::fmt;
use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::error::{MatrixError, Result};

use super::Vector3;

const MATRIX4_SIZE: usize = 16;

/// A row-major 4×4 matrix, used as an affine transform of space.
///
/// Same conventions as [`Matrix3`](super::Matrix3): the bottom row is
/// conventionally `(0, 0, 0, 1)` and `==` compares elements exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    elements: [f64; MATRIX4_SIZE],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    pub const ZERO: Self = Self {
        elements: [0.0; MATRIX4_SIZE],
    };

    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    #[must_use]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        let mut elements = [0.0; MATRIX4_SIZE];
        let mut i = 0;
        while i < MATRIX4_SIZE {
            elements[i] = rows[i / 4][i % 4];
            i += 1;
        }
        Self { elements }
    }

    /// Reads sixteen row-major elements from `elements`, starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ElementCount`] if fewer than sixteen elements
    /// are available after `offset`.
    pub fn from_array(elements: &[f64], offset: usize) -> Result<Self> {
        let available = elements.len().saturating_sub(offset);
        let slice = offset
            .checked_add(MATRIX4_SIZE)
            .and_then(|end| elements.get(offset..end));
        let Some(slice) = slice else {
            tracing::debug!(offset, available, "not enough elements for a Matrix4");
            return Err(MatrixError::ElementCount {
                expected: MATRIX4_SIZE,
                available,
            }
            .into());
        };
        let mut m = Self::ZERO;
        m.elements.copy_from_slice(slice);
        Ok(m)
    }

    #[must_use]
    pub fn to_array(&self) -> [f64; MATRIX4_SIZE] {
        self.elements
    }

    pub fn set(&mut self, elements: [f64; MATRIX4_SIZE]) {
        self.elements = elements;
    }

    /// The entry at zero-based `row` and `col`, `None` outside the 4×4
    /// range.
    #[must_use]
    pub fn element(&self, row: usize, col: usize) -> Option<f64> {
        if row < 4 && col < 4 {
            Some(self.elements[row * 4 + col])
        } else {
            None
        }
    }

    #[must_use]
    pub fn from_translate(v: Vector3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, v.x],
            [0.0, 1.0, 0.0, v.y],
            [0.0, 0.0, 1.0, v.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[must_use]
    pub fn from_scale(v: Vector3) -> Self {
        Self::from_rows([
            [v.x, 0.0, 0.0, 0.0],
            [0.0, v.y, 0.0, 0.0],
            [0.0, 0.0, v.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the X axis by `radian`.
    #[must_use]
    pub fn from_rotate_x(radian: f64) -> Self {
        let (s, c) = radian.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Y axis by `radian`.
    #[must_use]
    pub fn from_rotate_y(radian: f64) -> Self {
        let (s, c) = radian.sin_cos();
        Self::from_rows([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Z axis by `radian`.
    #[must_use]
    pub fn from_rotate_z(radian: f64) -> Self {
        let (s, c) = radian.sin_cos();
        Self::from_rows([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
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

    /// `[A, B, C]` yields `A·B·C`.
    #[must_use]
    pub fn multiply_matrices(matrices: &[Self]) -> Self {
        matrices
            .iter()
            .fold(Self::IDENTITY, |acc, m| acc.multiply(m))
    }

    /// `[A, B, C]` yields `C·B·A`.
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
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                out.elements[col * 4 + row] = self.elements[row * 4 + col];
            }
        }
        out
    }

    /// Cofactor expansion along the first row.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        (0..4)
            .map(|col| self.cofactor(0, col) * self.elements[col])
            .sum()
    }

    /// The inverse, computed as the transposed cofactor matrix over the
    /// determinant.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if the determinant is zero.
    pub fn invert(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            tracing::debug!(elements = ?self.elements, "cannot invert singular Matrix4");
            return Err(MatrixError::Singular.into());
        }
        let d = 1.0 / det;
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                // adjugate is the transpose of the cofactor matrix
                out.elements[col * 4 + row] = self.cofactor(row, col) * d;
            }
        }
        Ok(out)
    }

    #[must_use]
    pub fn apply_translate(&self, v: Vector3) -> Self {
        self.pre_multiply(&Self::from_translate(v))
    }

    #[must_use]
    pub fn apply_scale(&self, v: Vector3) -> Self {
        self.pre_multiply(&Self::from_scale(v))
    }

    #[must_use]
    pub fn apply_rotate_x(&self, radian: f64) -> Self {
        self.pre_multiply(&Self::from_rotate_x(radian))
    }

    #[must_use]
    pub fn apply_rotate_y(&self, radian: f64) -> Self {
        self.pre_multiply(&Self::from_rotate_y(radian))
    }

    #[must_use]
    pub fn apply_rotate_z(&self, radian: f64) -> Self {
        self.pre_multiply(&Self::from_rotate_z(radian))
    }

    /// Signed determinant of the 3×3 minor obtained by removing `row` and
    /// `col`.
    fn cofactor(&self, row: usize, col: usize) -> f64 {
        let mut minor = [0.0; 9];
        let mut i = 0;
        for r in (0..4).filter(|&r| r != row) {
            for c in (0..4).filter(|&c| c != col) {
                minor[i] = self.elements[r * 4 + c];
                i += 1;
            }
        }
        let [a, b, c, d, e, f, g, h, k] = minor;
        let det = a * (e * k - f * h) - b * (d * k - f * g) + c * (d * h - e * g);
        if (row + col) % 2 == 0 {
            det
        } else {
            -det
        }
    }
}

fn product(a: &Matrix4, b: &Matrix4) -> Matrix4 {
    let mut out = Matrix4::ZERO;
    for row in 0..4 {
        for col in 0..4 {
            out.elements[row * 4 + col] = (0..4)
                .map(|k| a.elements[row * 4 + k] * b.elements[k * 4 + col])
                .sum();
        }
    }
    out
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<&Matrix4> for &Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: &Matrix4) -> Matrix4 {
        self.multiply(rhs)
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.elements.chunks(4) {
            writeln!(f, "[{}, {}, {}, {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Matrix4 {
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

impl RelativeEq for Matrix4 {
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

impl UlpsEq for Matrix4 {
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
