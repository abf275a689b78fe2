//! Error types for gamut-rs operations.
//!
//! This module provides the error taxonomy shared by the linear-algebra and
//! colorimetry crates.
//!
//! # Overview
//!
//! The [`Error`] enum covers all failure modes that can occur during:
//! - Vector/matrix construction (wrong element counts)
//! - Combining values of incompatible sizes at runtime
//! - Matrix inversion (singular matrices)
//! - Normalized primary matrix derivation (degenerate gamuts)
//!
//! Every error is raised at the operation that detects it and is never
//! recovered locally; callers treat it as fatal for the current conversion.
//!
//! # Usage
//!
//! ```rust
//! use gamut_core::{Error, Result};
//!
//! fn check_count(values: &[f64], expected: usize) -> Result<()> {
//!     if values.len() != expected {
//!         return Err(Error::construction(expected, values.len()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_count(&[1.0, 2.0], 3).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `gamut-math` - Construction, size and inversion errors
//! - `gamut-primaries` - Degenerate gamut and preset lookup errors

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during matrix algebra and gamut conversion.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Categories
///
/// - **Shape errors**: [`Construction`](Error::Construction),
///   [`DimensionMismatch`](Error::DimensionMismatch),
///   [`UnsupportedDimension`](Error::UnsupportedDimension)
/// - **Numeric errors**: [`SingularMatrix`](Error::SingularMatrix),
///   [`DegenerateGamut`](Error::DegenerateGamut),
///   [`InvalidWhitepoint`](Error::InvalidWhitepoint)
/// - **Lookup errors**: [`UnknownGamut`](Error::UnknownGamut)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Wrong number of elements supplied to build a vector or matrix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gamut_core::Error;
    ///
    /// let err = Error::construction(9, 4);
    /// assert!(err.to_string().contains("expected 9"));
    /// ```
    #[error("wrong element count: expected {expected}, got {actual}")]
    Construction {
        /// Number of elements the type requires
        expected: usize,
        /// Number of elements provided
        actual: usize,
    },

    /// Two operands of incompatible sizes were combined.
    ///
    /// The typed API rejects this at compile time; this variant is produced
    /// by the runtime-sized wrappers.
    #[error("cannot combine {lhs} with {rhs}")]
    DimensionMismatch {
        /// Left operand description, e.g. `Matrix3x3`
        lhs: String,
        /// Right operand description, e.g. `Vector4`
        rhs: String,
    },

    /// A runtime factory was asked for a size outside the supported set.
    #[error("unsupported dimension {0}: expected 2, 3 or 4")]
    UnsupportedDimension(usize),

    /// Gauss-Jordan elimination found no nonzero pivot.
    #[error("matrix is not invertible: no nonzero pivot in column {column}")]
    SingularMatrix {
        /// Pivot column that could not be filled
        column: usize,
    },

    /// The primaries of a gamut do not span a 3D space.
    ///
    /// Raised when the primary matrix built from the chromaticities is
    /// singular, i.e. the primaries are collinear or duplicated.
    #[error("degenerate gamut: primaries are collinear or duplicated (column {column})")]
    DegenerateGamut {
        /// Pivot column reported by the failed inversion
        column: usize,
    },

    /// A whitepoint whose `y` is zero has no finite XYZ representation.
    #[error("invalid whitepoint ({x}, {y}): y must be nonzero")]
    InvalidWhitepoint {
        /// Whitepoint x chromaticity
        x: f64,
        /// Whitepoint y chromaticity
        y: f64,
    },

    /// No named gamut matches the requested name.
    #[error("unknown gamut: {0}")]
    UnknownGamut(String),
}

impl Error {
    /// Creates an [`Error::Construction`] error.
    #[inline]
    pub fn construction(expected: usize, actual: usize) -> Self {
        Self::Construction { expected, actual }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// Creates an [`Error::UnknownGamut`] error.
    #[inline]
    pub fn unknown_gamut(name: impl Into<String>) -> Self {
        Self::UnknownGamut(name.into())
    }

    /// Returns `true` for errors caused by mismatched shapes or sizes.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::Construction { .. }
                | Self::DimensionMismatch { .. }
                | Self::UnsupportedDimension(_)
        )
    }

    /// Returns `true` if an inversion failed for lack of a pivot.
    ///
    /// Degenerate gamuts count as singular, since they surface from a
    /// singular primary matrix.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. } | Self::DegenerateGamut { .. })
    }
}
