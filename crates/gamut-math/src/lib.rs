//! # gamut-math
//!
//! Fixed-size linear algebra for gamut conversion.
//!
//! This crate provides the mathematical primitives needed to derive RGB
//! conversion matrices:
//!
//! - [`Matrix`] - N x N matrices (multiply, transpose, determinant, inverse)
//! - [`Vector`] - N-component vectors (elementwise and vector-matrix products)
//! - [`gauss`] - Gauss-Jordan elimination with partial pivoting
//! - [`AnyMatrix`], [`AnyVector`] - runtime-sized wrappers over sizes 2, 3, 4
//!
//! # Design
//!
//! Sizes are const generic parameters, so the typed API cannot mix sizes.
//! All values are `f64` and `Copy`; every operation returns a new value.
//! Matrices are stored **row-major**.
//!
//! # Usage
//!
//! ```rust
//! use gamut_math::{Matrix3x3, Vector3};
//!
//! let p = Matrix3x3::new([
//!     [0.64, 0.30, 0.15],
//!     [0.33, 0.60, 0.06],
//!     [0.03, 0.10, 0.79],
//! ]);
//! let w = Vector3::new([0.3127 / 0.329, 1.0, (1.0 - 0.3127 - 0.329) / 0.329]);
//!
//! let scale = w * p.inverted().unwrap();
//! let npm = p * Matrix3x3::diagonal(scale);
//! assert!((npm.row(1).iter().sum::<f64>() - 1.0).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop with `DVec3` / `DMat2..4`
//! - [`gamut-core`] - Error types
//! - [`tracing`] - Diagnostics on failed eliminations
//!
//! # Used By
//!
//! - `gamut-primaries` - NPM and conversion matrix derivation
//! - `gamut-cli` - Ad-hoc matrix inversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod dynamic;
pub mod gauss;
mod matrix;
mod vector;

pub use dynamic::*;
pub use matrix::*;
pub use vector::*;
