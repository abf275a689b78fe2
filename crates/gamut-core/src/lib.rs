//! # gamut-core
//!
//! Core types for gamut conversion.
//!
//! This crate provides the foundational types used throughout gamut-rs:
//!
//! - [`Error`], [`Result`] - Error taxonomy shared by every crate
//! - [`Xy`] - CIE 1931 chromaticity coordinates and standard whitepoints
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other gamut-rs crates
//! depend on `gamut-core`:
//!
//! ```text
//! gamut-core (this crate)
//!    ^
//!    |
//!    +-- gamut-math (vectors, matrices, Gauss-Jordan)
//!    +-- gamut-primaries (gamuts, NPM, conversion matrices)
//!    +-- gamut-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Xy`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chromaticity;
pub mod error;

pub use chromaticity::Xy;
pub use error::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use gamut_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chromaticity::{Xy, D50, D60_ACES, D65, DCI, E};
    pub use crate::error::{Error, Result};
}
