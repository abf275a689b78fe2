//! Runtime-sized vectors and matrices.
//!
//! The typed API resolves sizes at compile time. When the size is only known
//! at runtime (user input, a flat list of floats) the [`Dimension`] factory
//! picks one of the supported sizes and [`AnyVector`] / [`AnyMatrix`] carry
//! the value. Operations on mismatched sizes fail with
//! [`Error::DimensionMismatch`].
//!
//! ```rust
//! use gamut_math::{AnyMatrix, Dimension};
//!
//! let m = AnyMatrix::from_flat(&[4.0, 0.0, 0.0, 2.0]).unwrap();
//! assert_eq!(m.dimension(), Dimension::Two);
//!
//! let other = AnyMatrix::identity(Dimension::Three);
//! assert!(m.multiply(&other).is_err());
//! ```

use crate::{Matrix2x2, Matrix3x3, Matrix4x4, Vector2, Vector3, Vector4};
use gamut_core::{Error, Result};
use std::fmt;

/// Supported vector/matrix sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    /// 2 components / 2x2
    Two,
    /// 3 components / 3x3
    Three,
    /// 4 components / 4x4
    Four,
}

impl Dimension {
    /// All supported sizes, smallest first.
    pub const ALL: [Dimension; 3] = [Dimension::Two, Dimension::Three, Dimension::Four];

    /// Returns the dimension for `size`.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedDimension`] for sizes other than 2, 3 and 4.
    pub fn from_size(size: usize) -> Result<Self> {
        match size {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            n => Err(Error::UnsupportedDimension(n)),
        }
    }

    /// Number of components.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl TryFrom<usize> for Dimension {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        Self::from_size(size)
    }
}

/// A vector whose size is chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyVector {
    /// 2 components
    V2(Vector2),
    /// 3 components
    V3(Vector3),
    /// 4 components
    V4(Vector4),
}

impl AnyVector {
    /// Builds a vector of the given size from exactly `dim.size()` values.
    ///
    /// # Errors
    ///
    /// [`Error::Construction`] on a count mismatch.
    pub fn from_slice(dim: Dimension, values: &[f64]) -> Result<Self> {
        Ok(match dim {
            Dimension::Two => Self::V2(Vector2::from_slice(values)?),
            Dimension::Three => Self::V3(Vector3::from_slice(values)?),
            Dimension::Four => Self::V4(Vector4::from_slice(values)?),
        })
    }

    /// Zero vector of the given size.
    pub fn zeros(dim: Dimension) -> Self {
        match dim {
            Dimension::Two => Self::V2(Vector2::zeros()),
            Dimension::Three => Self::V3(Vector3::zeros()),
            Dimension::Four => Self::V4(Vector4::zeros()),
        }
    }

    /// Size of this vector.
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::V2(_) => Dimension::Two,
            Self::V3(_) => Dimension::Three,
            Self::V4(_) => Dimension::Four,
        }
    }

    /// Type name, e.g. `Vector3`.
    pub fn type_name(&self) -> String {
        format!("Vector{}", self.dimension().size())
    }

    /// Bounds-checked read access.
    pub fn get(&self, i: usize) -> Option<f64> {
        match self {
            Self::V2(v) => v.get(i),
            Self::V3(v) => v.get(i),
            Self::V4(v) => v.get(i),
        }
    }

    /// Components as a slice.
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::V2(v) => &v.v,
            Self::V3(v) => &v.v,
            Self::V4(v) => &v.v,
        }
    }

    /// Elementwise product.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the sizes differ.
    pub fn mul_elementwise(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Self::V2(a), Self::V2(b)) => Ok(Self::V2(*a * *b)),
            (Self::V3(a), Self::V3(b)) => Ok(Self::V3(*a * *b)),
            (Self::V4(a), Self::V4(b)) => Ok(Self::V4(*a * *b)),
            _ => Err(Error::dimension_mismatch(self.type_name(), other.type_name())),
        }
    }

    /// Vector-matrix product, see [`Vector::dot_matrix`](crate::Vector::dot_matrix).
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the sizes differ.
    pub fn dot_matrix(&self, m: &AnyMatrix) -> Result<Self> {
        match (self, m) {
            (Self::V2(v), AnyMatrix::M2(m)) => Ok(Self::V2(v.dot_matrix(m))),
            (Self::V3(v), AnyMatrix::M3(m)) => Ok(Self::V3(v.dot_matrix(m))),
            (Self::V4(v), AnyMatrix::M4(m)) => Ok(Self::V4(v.dot_matrix(m))),
            _ => Err(Error::dimension_mismatch(self.type_name(), m.type_name())),
        }
    }
}

impl fmt::Display for AnyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2(v) => fmt::Display::fmt(v, f),
            Self::V3(v) => fmt::Display::fmt(v, f),
            Self::V4(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// A square matrix whose size is chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyMatrix {
    /// 2x2
    M2(Matrix2x2),
    /// 3x3
    M3(Matrix3x3),
    /// 4x4
    M4(Matrix4x4),
}

impl AnyMatrix {
    /// All-zero matrix of the given size.
    pub fn zeros(dim: Dimension) -> Self {
        match dim {
            Dimension::Two => Self::M2(Matrix2x2::zeros()),
            Dimension::Three => Self::M3(Matrix3x3::zeros()),
            Dimension::Four => Self::M4(Matrix4x4::zeros()),
        }
    }

    /// Identity matrix of the given size.
    pub fn identity(dim: Dimension) -> Self {
        match dim {
            Dimension::Two => Self::M2(Matrix2x2::identity()),
            Dimension::Three => Self::M3(Matrix3x3::identity()),
            Dimension::Four => Self::M4(Matrix4x4::identity()),
        }
    }

    /// Builds a matrix of the given size from `dim.size()^2` row-major values.
    ///
    /// # Errors
    ///
    /// [`Error::Construction`] on a count mismatch.
    pub fn from_slice(dim: Dimension, values: &[f64]) -> Result<Self> {
        Ok(match dim {
            Dimension::Two => Self::M2(Matrix2x2::from_slice(values)?),
            Dimension::Three => Self::M3(Matrix3x3::from_slice(values)?),
            Dimension::Four => Self::M4(Matrix4x4::from_slice(values)?),
        })
    }

    /// Builds a matrix, inferring the size from the value count (4, 9 or 16).
    ///
    /// # Errors
    ///
    /// [`Error::Construction`] if the count is not a supported square.
    pub fn from_flat(values: &[f64]) -> Result<Self> {
        let dim = Dimension::ALL
            .into_iter()
            .find(|d| d.size() * d.size() == values.len())
            .ok_or_else(|| Error::construction(Self::closest_count(values.len()), values.len()))?;
        Self::from_slice(dim, values)
    }

    fn closest_count(count: usize) -> usize {
        Dimension::ALL
            .into_iter()
            .map(|d| d.size() * d.size())
            .min_by_key(|n| n.abs_diff(count))
            .unwrap_or(9)
    }

    /// Size of this matrix.
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::M2(_) => Dimension::Two,
            Self::M3(_) => Dimension::Three,
            Self::M4(_) => Dimension::Four,
        }
    }

    /// Type name, e.g. `Matrix3x3`.
    pub fn type_name(&self) -> String {
        let n = self.dimension().size();
        format!("Matrix{n}x{n}")
    }

    /// Rows as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        match self {
            Self::M2(m) => m.m.iter().map(|r| r.to_vec()).collect(),
            Self::M3(m) => m.m.iter().map(|r| r.to_vec()).collect(),
            Self::M4(m) => m.m.iter().map(|r| r.to_vec()).collect(),
        }
    }

    /// Flattens to row-major values.
    pub fn to_flat(&self) -> Vec<f64> {
        match self {
            Self::M2(m) => m.to_flat(),
            Self::M3(m) => m.to_flat(),
            Self::M4(m) => m.to_flat(),
        }
    }

    /// Matrix product.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the sizes differ.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Self::M2(a), Self::M2(b)) => Ok(Self::M2(a.multiply(b))),
            (Self::M3(a), Self::M3(b)) => Ok(Self::M3(a.multiply(b))),
            (Self::M4(a), Self::M4(b)) => Ok(Self::M4(a.multiply(b))),
            _ => Err(Error::dimension_mismatch(self.type_name(), other.type_name())),
        }
    }

    /// Runtime rejection of matrix-times-vector.
    ///
    /// The typed API has no `Matrix * Vector` impl, so that product is a
    /// compile error; this is its counterpart for runtime-sized values.
    /// Only vector-times-matrix is defined, see [`AnyVector::dot_matrix`].
    ///
    /// # Errors
    ///
    /// Always [`Error::DimensionMismatch`], whatever the sizes.
    pub fn multiply_vector(&self, v: &AnyVector) -> Result<Self> {
        Err(Error::dimension_mismatch(self.type_name(), v.type_name()))
    }

    /// Transposed copy.
    pub fn transposed(&self) -> Self {
        match self {
            Self::M2(m) => Self::M2(m.transposed()),
            Self::M3(m) => Self::M3(m.transposed()),
            Self::M4(m) => Self::M4(m.transposed()),
        }
    }

    /// Determinant, see [`Matrix::determinant`](crate::Matrix::determinant).
    pub fn determinant(&self) -> f64 {
        match self {
            Self::M2(m) => m.determinant(),
            Self::M3(m) => m.determinant(),
            Self::M4(m) => m.determinant(),
        }
    }

    /// Inverse.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] if the matrix has no inverse.
    pub fn inverted(&self) -> Result<Self> {
        Ok(match self {
            Self::M2(m) => Self::M2(m.inverted()?),
            Self::M3(m) => Self::M3(m.inverted()?),
            Self::M4(m) => Self::M4(m.inverted()?),
        })
    }

    /// Copy with the diagonal replaced by `d`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the sizes differ.
    pub fn with_diagonal(&self, d: &AnyVector) -> Result<Self> {
        match (self, d) {
            (Self::M2(m), AnyVector::V2(v)) => Ok(Self::M2(m.with_diagonal(v))),
            (Self::M3(m), AnyVector::V3(v)) => Ok(Self::M3(m.with_diagonal(v))),
            (Self::M4(m), AnyVector::V4(v)) => Ok(Self::M4(m.with_diagonal(v))),
            _ => Err(Error::dimension_mismatch(self.type_name(), d.type_name())),
        }
    }

    /// Returns true if every element is within `epsilon` of `other`.
    ///
    /// Matrices of different sizes are never equal.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        match (self, other) {
            (Self::M2(a), Self::M2(b)) => a.approx_eq(b, epsilon),
            (Self::M3(a), Self::M3(b)) => a.approx_eq(b, epsilon),
            (Self::M4(a), Self::M4(b)) => a.approx_eq(b, epsilon),
            _ => false,
        }
    }
}

impl From<Matrix2x2> for AnyMatrix {
    fn from(m: Matrix2x2) -> Self {
        Self::M2(m)
    }
}

impl From<Matrix3x3> for AnyMatrix {
    fn from(m: Matrix3x3) -> Self {
        Self::M3(m)
    }
}

impl From<Matrix4x4> for AnyMatrix {
    fn from(m: Matrix4x4) -> Self {
        Self::M4(m)
    }
}

impl fmt::Display for AnyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::M2(m) => fmt::Display::fmt(m, f),
            Self::M3(m) => fmt::Display::fmt(m, f),
            Self::M4(m) => fmt::Display::fmt(m, f),
        }
    }
}
