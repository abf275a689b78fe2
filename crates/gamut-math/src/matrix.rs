//! Square matrix type for color transformations.
//!
//! [`Matrix`] is used for RGB-to-XYZ derivation and gamut-to-gamut
//! conversion. The size is a const parameter; the aliases [`Matrix2x2`],
//! [`Matrix3x3`] and [`Matrix4x4`] cover the supported sizes.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order:
//!
//! ```text
//! | m[0][0] m[0][1] m[0][2] |
//! | m[1][0] m[1][1] m[1][2] |
//! | m[2][0] m[2][1] m[2][2] |
//! ```
//!
//! # Pure vs in-place
//!
//! The value-returning methods ([`Matrix::inverted`], [`Matrix::transposed`],
//! [`Matrix::with_diagonal`]) are the primary API. The `*_in_place` and
//! [`Matrix::set_diagonal`] variants mutate through `&mut self` and exist for
//! callers that already own a scratch matrix.
//!
//! # Usage
//!
//! ```rust
//! use gamut_math::Matrix3x3;
//!
//! let m = Matrix3x3::from_rows(&[
//!     [0.4124, 0.3576, 0.1805],
//!     [0.2126, 0.7152, 0.0722],
//!     [0.0193, 0.1192, 0.9505],
//! ]).unwrap();
//!
//! let inv = m.inverted().unwrap();
//! assert!((m * inv).approx_eq(&Matrix3x3::identity(), 1e-12));
//! ```

use crate::gauss::gauss_jordan_inverse;
use crate::Vector;
use gamut_core::{Error, Result};
use std::fmt;
use std::ops::{Index, Mul};

/// An N x N matrix of `f64`.
///
/// Equality is exact and elementwise; use [`Matrix::approx_eq`] for
/// computed values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const N: usize> {
    /// Matrix elements in row-major order
    pub m: [[f64; N]; N],
}

/// 2x2 matrix.
pub type Matrix2x2 = Matrix<2>;
/// 3x3 matrix.
pub type Matrix3x3 = Matrix<3>;
/// 4x4 matrix.
pub type Matrix4x4 = Matrix<4>;

impl<const N: usize> Matrix<N> {
    /// Number of rows (and columns).
    pub const SIZE: usize = N;

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn new(m: [[f64; N]; N]) -> Self {
        Self { m }
    }

    /// All-zero matrix.
    #[inline]
    pub const fn zeros() -> Self {
        Self { m: [[0.0; N]; N] }
    }

    /// Identity matrix: zeros with a diagonal of ones.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gamut_math::Matrix2x2;
    ///
    /// assert_eq!(Matrix2x2::identity(), Matrix2x2::new([[1.0, 0.0], [0.0, 1.0]]));
    /// ```
    #[inline]
    pub fn identity() -> Self {
        Self::diagonal(Vector::splat(1.0))
    }

    /// Diagonal matrix with `d` on the diagonal.
    #[inline]
    pub fn diagonal(d: Vector<N>) -> Self {
        Self::zeros().with_diagonal(&d)
    }

    /// Creates a matrix from exactly N*N values in row-major order.
    ///
    /// # Errors
    ///
    /// [`Error::Construction`] if `values.len() != N * N`.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        if values.len() != N * N {
            return Err(Error::construction(N * N, values.len()));
        }
        let mut out = Self::zeros();
        for (row, chunk) in out.m.iter_mut().zip(values.chunks_exact(N)) {
            row.copy_from_slice(chunk);
        }
        Ok(out)
    }

    /// Creates a matrix from a nested row sequence.
    ///
    /// # Errors
    ///
    /// [`Error::Construction`] with `expected = N` if there are not N rows,
    /// or if any row does not have N columns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gamut_math::Matrix2x2;
    ///
    /// let m = Matrix2x2::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m[1][0], 3.0);
    ///
    /// assert!(Matrix2x2::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        if rows.len() != N {
            return Err(Error::construction(N, rows.len()));
        }
        let mut out = Self::zeros();
        for (dst, src) in out.m.iter_mut().zip(rows) {
            let src = src.as_ref();
            if src.len() != N {
                return Err(Error::construction(N, src.len()));
            }
            dst.copy_from_slice(src);
        }
        Ok(out)
    }

    /// Returns the rows.
    #[inline]
    pub const fn rows(&self) -> &[[f64; N]; N] {
        &self.m
    }

    /// Returns a row as a vector.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<N> {
        Vector::new(self.m[i])
    }

    /// Returns a column as a vector.
    #[inline]
    pub fn col(&self, j: usize) -> Vector<N> {
        let mut out = [0.0; N];
        for (o, row) in out.iter_mut().zip(self.m.iter()) {
            *o = row[j];
        }
        Vector::new(out)
    }

    /// Flattens to N*N values in row-major order.
    pub fn to_flat(&self) -> Vec<f64> {
        self.m.iter().flatten().copied().collect()
    }

    /// Multiplies two matrices.
    ///
    /// `C[i][j] = sum_k A[i][k] * B[k][j]`, accumulated left to right.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::zeros();
        for i in 0..N {
            for j in 0..N {
                result.m[i][j] = (0..N).fold(0.0, |acc, k| acc + self.m[i][k] * other.m[k][j]);
            }
        }
        result
    }

    /// Returns the transpose of this matrix.
    pub fn transposed(&self) -> Self {
        let mut out = Self::zeros();
        for (i, row) in self.m.iter().enumerate() {
            for (j, &x) in row.iter().enumerate() {
                out.m[j][i] = x;
            }
        }
        out
    }

    /// Transposes this matrix in place.
    pub fn transpose_in_place(&mut self) {
        *self = self.transposed();
    }

    /// Computes the determinant.
    ///
    /// Forward elimination without row exchanges, then the product of the
    /// diagonal. A pivot that is exactly zero is replaced by 1 before it is
    /// divided by, so matrices that need a row exchange can yield a wrong
    /// value: `[[0, 1], [1, 1]]` gives 0 although its determinant is -1.
    /// Use [`Matrix::inverted`] to test invertibility.
    pub fn determinant(&self) -> f64 {
        let mut m = self.m;
        for i in 0..N {
            for j in i + 1..N {
                if m[i][i] == 0.0 {
                    m[i][i] = 1.0;
                }
                let x = m[j][i] / m[i][i];
                for k in 0..N {
                    let p = m[i][k];
                    m[j][k] -= x * p;
                }
            }
        }
        (0..N).fold(1.0, |det, i| det * m[i][i])
    }

    /// Returns the inverse of this matrix.
    ///
    /// Uses Gauss-Jordan elimination with partial pivoting.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] if no nonzero pivot exists for some column.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gamut_math::Matrix3x3;
    ///
    /// assert!(Matrix3x3::zeros().inverted().is_err());
    /// assert_eq!(Matrix3x3::identity().inverted().unwrap(), Matrix3x3::identity());
    /// ```
    pub fn inverted(&self) -> Result<Self> {
        gauss_jordan_inverse(self)
    }

    /// Inverts this matrix in place.
    ///
    /// On error the matrix is left unchanged.
    pub fn invert_in_place(&mut self) -> Result<()> {
        *self = self.inverted()?;
        Ok(())
    }

    /// Returns a copy with the diagonal replaced by `d`.
    pub fn with_diagonal(&self, d: &Vector<N>) -> Self {
        let mut out = *self;
        out.set_diagonal(d);
        out
    }

    /// Replaces the diagonal with `d`.
    pub fn set_diagonal(&mut self, d: &Vector<N>) {
        for (i, row) in self.m.iter_mut().enumerate() {
            row[i] = d[i];
        }
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Returns true if every element is within `epsilon` of `other`.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Largest absolute elementwise difference to `other`.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs()))
    }

    /// Type name used in error messages, e.g. `Matrix3x3`.
    pub fn type_name() -> String {
        format!("Matrix{N}x{N}")
    }
}

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> From<[[f64; N]; N]> for Matrix<N> {
    #[inline]
    fn from(m: [[f64; N]; N]) -> Self {
        Self::new(m)
    }
}

// Matrix * Matrix
impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<const N: usize> Index<usize> for Matrix<N> {
    type Output = [f64; N];

    #[inline]
    fn index(&self, i: usize) -> &[f64; N] {
        &self.m[i]
    }
}

impl<const N: usize> fmt::Display for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", Vector::new(*row))?;
        }
        Ok(())
    }
}

// glam is column-major, so conversions transpose.

impl From<Matrix2x2> for glam::DMat2 {
    #[inline]
    fn from(m: Matrix2x2) -> Self {
        glam::DMat2::from_cols_array_2d(&m.transposed().m)
    }
}

impl From<glam::DMat2> for Matrix2x2 {
    #[inline]
    fn from(m: glam::DMat2) -> Self {
        Matrix::new(m.to_cols_array_2d()).transposed()
    }
}

impl From<Matrix3x3> for glam::DMat3 {
    #[inline]
    fn from(m: Matrix3x3) -> Self {
        glam::DMat3::from_cols_array_2d(&m.transposed().m)
    }
}

impl From<glam::DMat3> for Matrix3x3 {
    #[inline]
    fn from(m: glam::DMat3) -> Self {
        Matrix::new(m.to_cols_array_2d()).transposed()
    }
}

impl From<Matrix4x4> for glam::DMat4 {
    #[inline]
    fn from(m: Matrix4x4) -> Self {
        glam::DMat4::from_cols_array_2d(&m.transposed().m)
    }
}

impl From<glam::DMat4> for Matrix4x4 {
    #[inline]
    fn from(m: glam::DMat4) -> Self {
        Matrix::new(m.to_cols_array_2d()).transposed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vector3, Vector4};
    use approx::assert_abs_diff_eq;

    // Rounded at 15 decimals, sRGB to XYZ.
    const ALPHA: [[f64; 3]; 3] = [
        [0.412390799265959, 0.357584339383878, 0.180480788401834],
        [0.21263900587151, 0.715168678767756, 0.072192315360734],
        [0.019330818715592, 0.119194779794626, 0.950532152249661],
    ];

    const ALPHA_INV: [[f64; 3]; 3] = [
        [3.240969941904523, -1.537383177570094, -0.498610760293003],
        [-0.96924363628088, 1.875967501507721, 0.041555057407176],
        [0.055630079696994, -0.203976958888977, 1.056971514242879],
    ];

    fn assert_matrix_eq<const N: usize>(a: &Matrix<N>, b: &Matrix<N>, epsilon: f64) {
        for (x, y) in a.m.iter().flatten().zip(b.m.iter().flatten()) {
            assert_abs_diff_eq!(*x, *y, epsilon = epsilon);
        }
    }

    #[test]
    fn test_identity_and_zeros() {
        let expected = Matrix3x3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(Matrix3x3::identity(), expected);
        assert_eq!(Matrix2x2::zeros(), Matrix2x2::new([[0.0, 0.0], [0.0, 0.0]]));
        assert_eq!(Matrix4x4::default(), Matrix4x4::identity());
    }

    #[test]
    fn test_from_slice() {
        let m = Matrix2x2::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m, Matrix2x2::new([[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(
            Matrix3x3::from_slice(&[1.0; 8]),
            Err(Error::construction(9, 8))
        );
        assert_eq!(
            Matrix4x4::from_slice(&[1.0; 17]),
            Err(Error::construction(16, 17))
        );
    }

    #[test]
    fn test_from_rows_validates_shape() {
        let m = Matrix3x3::from_rows(&ALPHA).unwrap();
        assert_eq!(m, Matrix3x3::new(ALPHA));
        assert_eq!(
            Matrix3x3::from_rows(&ALPHA[..2]),
            Err(Error::construction(3, 2))
        );
        let ragged = [vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![6.0, 7.0, 8.0, 9.0]];
        assert_eq!(Matrix3x3::from_rows(&ragged), Err(Error::construction(3, 2)));
    }

    #[test]
    fn test_multiply() {
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let b = Matrix3x3::new([[9.0, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]]);
        let c = Matrix3x3::new([[30.0, 24.0, 18.0], [84.0, 69.0, 54.0], [138.0, 114.0, 90.0]]);
        assert_eq!(a * b, c);
        assert_eq!(a * Matrix3x3::identity(), a);
        assert_eq!(Matrix3x3::identity() * a, a);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let t = m.transposed();
        assert_eq!(t.m[0][1], 4.0);
        assert_eq!(t.m[1][0], 2.0);
        assert_eq!(t.transposed(), m);

        let mut inplace = m;
        inplace.transpose_in_place();
        assert_eq!(inplace, t);
    }

    #[test]
    fn test_rows_and_cols() {
        let m = Matrix3x3::new(ALPHA);
        assert_eq!(m.row(1), Vector3::new(ALPHA[1]));
        assert_eq!(m.col(2), Vector3::new([ALPHA[0][2], ALPHA[1][2], ALPHA[2][2]]));
        assert_eq!(m.to_flat().len(), 9);
        assert_eq!(m.to_flat()[3], ALPHA[1][0]);
    }

    #[test]
    fn test_determinant() {
        let m = Matrix3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
        assert_eq!(Matrix4x4::identity().determinant(), 1.0);
        assert_eq!(Matrix3x3::zeros().determinant(), 0.0);

        let d = Matrix2x2::new([[2.0, 1.0], [1.0, 3.0]]);
        assert_abs_diff_eq!(d.determinant(), 5.0, epsilon = 1e-15);
    }

    #[test]
    fn test_determinant_zero_pivot_substitution() {
        // No row exchange: the zero pivot is treated as 1.
        let swap = Matrix2x2::new([[0.0, 1.0], [1.0, 0.0]]);
        assert_eq!(swap.determinant(), -1.0);

        // The true determinant is -1; the substitution yields 0.
        let m = Matrix2x2::new([[0.0, 1.0], [1.0, 1.0]]);
        assert_eq!(m.determinant(), 0.0);
        assert!(m.inverted().is_ok());
    }

    #[test]
    fn test_inverted() {
        assert_eq!(Matrix3x3::identity().inverted().unwrap(), Matrix3x3::identity());

        let inv = Matrix3x3::new(ALPHA).inverted().unwrap();
        assert_matrix_eq(&inv, &Matrix3x3::new(ALPHA_INV), 5e-15);

        let back = inv.inverted().unwrap();
        assert_matrix_eq(&back, &Matrix3x3::new(ALPHA), 5e-15);
    }

    #[test]
    fn test_inverted_singular() {
        assert_eq!(
            Matrix3x3::zeros().inverted(),
            Err(Error::SingularMatrix { column: 0 })
        );
        let rank_one = Matrix2x2::new([[1.0, 2.0], [2.0, 4.0]]);
        assert!(rank_one.inverted().unwrap_err().is_singular());
    }

    #[test]
    fn test_invert_in_place() {
        let mut m = Matrix2x2::new([[4.0, 0.0], [0.0, 2.0]]);
        m.invert_in_place().unwrap();
        assert_eq!(m, Matrix2x2::new([[0.25, 0.0], [0.0, 0.5]]));

        let mut z = Matrix2x2::zeros();
        assert!(z.invert_in_place().is_err());
        assert_eq!(z, Matrix2x2::zeros());
    }

    #[test]
    fn test_with_diagonal() {
        let d = Vector4::new([1.0, 2.0, 3.0, 4.0]);
        let m = Matrix4x4::zeros().with_diagonal(&d);
        assert_eq!(m.m[2][2], 3.0);
        assert_eq!(m.m[2][1], 0.0);
        assert_eq!(m, Matrix4x4::diagonal(d));

        let mut s = Matrix4x4::identity();
        s.set_diagonal(&d);
        assert_eq!(s, m);
    }

    #[test]
    fn test_is_finite_and_max_abs_diff() {
        let m = Matrix3x3::new(ALPHA);
        assert!(m.is_finite());
        assert_eq!(m.max_abs_diff(&m), 0.0);

        let mut shifted = m;
        shifted.m[2][1] += 0.25;
        shifted.m[0][0] -= 0.125;
        assert_abs_diff_eq!(shifted.max_abs_diff(&m), 0.25, epsilon = 1e-15);

        let mut bad = m;
        bad.m[1][1] = f64::NAN;
        assert!(!bad.is_finite());
        bad.m[1][1] = f64::NEG_INFINITY;
        assert!(!bad.is_finite());
    }

    #[test]
    fn test_display() {
        let m = Matrix2x2::new([[1.0, 0.5], [0.0, -2.0]]);
        assert_eq!(m.to_string(), "[1, 0.5]\n[0, -2]");
        assert_eq!(Matrix3x3::type_name(), "Matrix3x3");
    }

    #[test]
    fn test_glam_interop() {
        let m = Matrix3x3::new(ALPHA);
        let g: glam::DMat3 = m.into();
        // glam columns are our columns
        assert_eq!(g.x_axis.y, ALPHA[1][0]);
        assert_eq!(Matrix3x3::from(g), m);

        let v = glam::DVec3::new(1.0, 0.0, 0.0);
        let xyz = g * v;
        assert_abs_diff_eq!(xyz.x, ALPHA[0][0], epsilon = 1e-15);

        let m4 = Matrix4x4::identity();
        assert_eq!(glam::DMat4::from(m4), glam::DMat4::IDENTITY);
        let m2 = Matrix2x2::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(Matrix2x2::from(glam::DMat2::from(m2)), m2);
    }
}
