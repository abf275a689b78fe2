//! Gauss-Jordan elimination with partial pivoting.
//!
//! Inversion works on the augmented matrix `[M | I]`. Both halves are kept
//! as separate `N x N` blocks and every row operation is applied to both,
//! which is equivalent to reducing the `N x 2N` matrix in one piece.
//!
//! # Algorithm
//!
//! 1. For each pivot column `c`, if `a[c][c] == 0`, swap in the first row
//!    below it with a nonzero entry in column `c`. If there is none the
//!    matrix is singular.
//! 2. Forward pass: zero column `c` below the pivot.
//! 3. Backward pass, last column first: zero column `c` above the pivot.
//! 4. Scale each row so its pivot is 1.
//!
//! The right block then holds the inverse.
//!
//! Row operations are evaluated in a fixed order so results are
//! reproducible to the last bit across platforms.

use crate::Matrix;
use gamut_core::{Error, Result};
use tracing::trace;

/// Augmented matrix `[left | right]` under reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Augmented<const N: usize> {
    left: [[f64; N]; N],
    right: [[f64; N]; N],
}

impl<const N: usize> Augmented<N> {
    /// Builds `[m | I]`.
    pub fn with_identity(m: &Matrix<N>) -> Self {
        Self {
            left: m.m,
            right: Matrix::<N>::identity().m,
        }
    }

    /// Left block.
    #[inline]
    pub fn left(&self) -> Matrix<N> {
        Matrix::new(self.left)
    }

    /// Right block.
    #[inline]
    pub fn right(&self) -> Matrix<N> {
        Matrix::new(self.right)
    }

    #[inline]
    fn swap_rows(&mut self, a: usize, b: usize) {
        self.left.swap(a, b);
        self.right.swap(a, b);
    }

    /// Subtracts a multiple of row `src` from row `dst` so that
    /// `dst[col]` becomes `target`.
    ///
    /// `src == dst` is allowed and scales the row in place.
    fn eliminate(&mut self, src: usize, dst: usize, col: usize, target: f64) {
        let fac = (self.left[dst][col] - target) / self.left[src][col];
        for k in 0..N {
            let s = self.left[src][k];
            self.left[dst][k] -= fac * s;
        }
        for k in 0..N {
            let s = self.right[src][k];
            self.right[dst][k] -= fac * s;
        }
    }

    /// Reduces the left block to the identity.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] if some column has no nonzero pivot.
    pub fn reduce(&mut self) -> Result<()> {
        for c in 0..N {
            if self.left[c][c] == 0.0 {
                let Some(r) = (c + 1..N).find(|&r| self.left[r][c] != 0.0) else {
                    trace!(column = c, size = N, "no pivot available");
                    return Err(Error::SingularMatrix { column: c });
                };
                self.swap_rows(c, r);
            }
            for r in c + 1..N {
                self.eliminate(c, r, c, 0.0);
            }
        }
        for c in (0..N).rev() {
            for r in (0..c).rev() {
                self.eliminate(c, r, c, 0.0);
            }
        }
        for r in 0..N {
            self.eliminate(r, r, r, 1.0);
        }
        Ok(())
    }
}

/// Inverts `m` by Gauss-Jordan elimination.
///
/// # Errors
///
/// [`Error::SingularMatrix`] if `m` has no inverse.
pub fn gauss_jordan_inverse<const N: usize>(m: &Matrix<N>) -> Result<Matrix<N>> {
    let mut aug = Augmented::with_identity(m);
    aug.reduce()?;
    Ok(aug.right())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix2x2, Matrix3x3, Matrix4x4};

    #[test]
    fn test_left_becomes_identity() {
        let m = Matrix3x3::new([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]]);
        let mut aug = Augmented::with_identity(&m);
        aug.reduce().unwrap();
        assert_eq!(aug.left(), Matrix3x3::identity());
        assert_eq!(
            aug.right(),
            Matrix3x3::new([[0.5, 0.0, 0.0], [0.0, 0.25, 0.0], [0.0, 0.0, 0.125]])
        );
    }

    #[test]
    fn test_zero_pivot_swaps_rows() {
        // Permutation matrix: every leading pivot starts at zero
        let m = Matrix3x3::new([[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]);
        let inv = gauss_jordan_inverse(&m).unwrap();
        assert_eq!(inv, m.transposed());
    }

    #[test]
    fn test_swap_searches_column_not_row() {
        // Row 0 has a nonzero entry in column 1, but column 0 only has a
        // nonzero entry in row 1: the swap must come from the column.
        let m = Matrix2x2::new([[0.0, 4.0], [2.0, 0.0]]);
        let inv = gauss_jordan_inverse(&m).unwrap();
        assert_eq!(inv, Matrix2x2::new([[0.0, 0.5], [0.25, 0.0]]));
    }

    #[test]
    fn test_singular_reports_column() {
        let m = Matrix3x3::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert_eq!(
            gauss_jordan_inverse(&m),
            Err(Error::SingularMatrix { column: 2 })
        );
        assert_eq!(
            gauss_jordan_inverse(&Matrix4x4::zeros()),
            Err(Error::SingularMatrix { column: 0 })
        );
    }
}
