//! Fixed-size vector type.
//!
//! [`Vector`] holds N `f64` components. The size is part of the type, so
//! combining vectors of different sizes is a compile error; see
//! [`AnyVector`](crate::AnyVector) for the runtime-sized equivalent.
//!
//! # Usage
//!
//! ```rust
//! use gamut_math::{Matrix3x3, Vector3};
//!
//! let w = Vector3::new([0.95, 1.0, 1.09]);
//! let scaled = w * Vector3::new([2.0, 2.0, 2.0]);
//! assert_eq!(scaled[1], 2.0);
//!
//! // Row vector times matrix: W[i] = sum_k V[k] * M[i][k]
//! let same = w * Matrix3x3::identity();
//! assert_eq!(same, w);
//! ```

use crate::Matrix;
use gamut_core::{Error, Result};
use std::fmt;
use std::ops::{Index, Mul};

/// An ordered tuple of N scalars.
///
/// Equality is exact and elementwise; use [`Vector::approx_eq`] for
/// computed values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const N: usize> {
    /// Components in order
    pub v: [f64; N],
}

/// 2-component vector.
pub type Vector2 = Vector<2>;
/// 3-component vector.
pub type Vector3 = Vector<3>;
/// 4-component vector.
pub type Vector4 = Vector<4>;

impl<const N: usize> Vector<N> {
    /// Number of components.
    pub const SIZE: usize = N;

    /// Creates a vector from an array.
    #[inline]
    pub const fn new(v: [f64; N]) -> Self {
        Self { v }
    }

    /// Creates a vector with every component set to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self { v: [value; N] }
    }

    /// Zero vector.
    #[inline]
    pub const fn zeros() -> Self {
        Self::splat(0.0)
    }

    /// Creates a vector from exactly N values.
    ///
    /// # Errors
    ///
    /// [`Error::Construction`] if `values.len() != N`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gamut_math::Vector3;
    ///
    /// assert!(Vector3::from_slice(&[1.0, 2.0, 3.0]).is_ok());
    /// assert!(Vector3::from_slice(&[1.0, 2.0]).is_err());
    /// ```
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        <[f64; N]>::try_from(values)
            .map(Self::new)
            .map_err(|_| Error::construction(N, values.len()))
    }

    /// Bounds-checked read access.
    #[inline]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.v.get(i).copied()
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; N] {
        self.v
    }

    /// Iterates over the components.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.v.iter().copied()
    }

    /// Elementwise product.
    #[inline]
    pub fn mul_elementwise(self, other: Self) -> Self {
        let mut out = self;
        for (o, b) in out.v.iter_mut().zip(other.v) {
            *o *= b;
        }
        out
    }

    /// Vector-matrix product.
    ///
    /// Treats `self` as a row vector against the rows of `m`:
    /// `W[i] = sum_k V[k] * M[i][k]`, accumulated left to right.
    pub fn dot_matrix(self, m: &Matrix<N>) -> Self {
        let mut out = [0.0; N];
        for (o, row) in out.iter_mut().zip(m.m.iter()) {
            *o = row.iter().zip(self.v).fold(0.0, |acc, (a, b)| acc + a * b);
        }
        Self::new(out)
    }

    /// Returns true if every component is within `epsilon` of `other`.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.v
            .iter()
            .zip(other.v.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Type name used in error messages, e.g. `Vector3`.
    pub fn type_name() -> String {
        format!("Vector{N}")
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    #[inline]
    fn from(v: [f64; N]) -> Self {
        Self::new(v)
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.v[i]
    }
}

// Vector * Vector (elementwise)
impl<const N: usize> Mul for Vector<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_elementwise(rhs)
    }
}

// Vector * Matrix
impl<const N: usize> Mul<Matrix<N>> for Vector<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Matrix<N>) -> Self {
        self.dot_matrix(&rhs)
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.v.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

impl From<Vector3> for glam::DVec3 {
    #[inline]
    fn from(v: Vector3) -> Self {
        glam::DVec3::from_array(v.v)
    }
}

impl From<glam::DVec3> for Vector3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.to_array())
    }
}
