//! # gamut-primaries
//!
//! RGB gamuts, normalized primary matrices and gamut-to-gamut conversion.
//!
//! A [`Gamut`] is three primary chromaticities plus a whitepoint. From it we
//! derive the normalized primary matrix (NPM) that maps the gamut's linear
//! RGB to CIE XYZ, and from two NPMs the matrix converting one gamut's RGB to
//! another's.
//!
//! # Usage
//!
//! ```rust
//! use gamut_primaries::{get_conversion_matrix, ACES_AP0, SRGB};
//!
//! let m = get_conversion_matrix(&SRGB, &ACES_AP0).unwrap();
//! assert!((m[0][0] - 0.432930520128218).abs() < 1e-14);
//! ```
//!
//! # Chromatic adaptation
//!
//! None is performed. Converting between gamuts with different whitepoints
//! maps the source white to a non-neutral destination value; apply an
//! adaptation transform before or after if that matters.
//!
//! # The CIE XYZ sentinel
//!
//! A gamut whose primaries are exactly `(1, 0)`, `(0, 1)`, `(0, 0)` stands
//! for CIE XYZ itself: its NPM is taken to be the identity.
//!
//! # Dependencies
//!
//! - [`gamut-core`] - Errors and chromaticity coordinates
//! - [`gamut-math`] - Matrix operations
//!
//! # Used By
//!
//! - `gamut-cli` - Matrix generation from the command line

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod presets;

pub use presets::*;

use gamut_core::{Error, Result, Xy};
use gamut_math::{Matrix3x3, Vector3};
use tracing::{debug, trace};

/// Primaries of the CIE XYZ sentinel gamut.
pub const IDENTITY_CHROMATICITIES: [Xy; 3] =
    [Xy::new(1.0, 0.0), Xy::new(0.0, 1.0), Xy::new(0.0, 0.0)];

/// Doubled triangle area below which the primaries count as collinear,
/// relative to the longest squared edge.
const COLLINEAR_TOLERANCE: f64 = 1e-9;

/// An RGB gamut: primary chromaticities and a whitepoint.
///
/// # Example
///
/// ```rust
/// use gamut_primaries::Gamut;
///
/// let srgb = Gamut::from_tuples(
///     ((0.64, 0.33), (0.3, 0.6), (0.15, 0.06)),
///     (0.3127, 0.329),
/// );
/// assert!(!srgb.is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gamut {
    /// Red, green and blue primaries
    pub chromaticities: [Xy; 3],
    /// Reference white
    pub whitepoint: Xy,
}

impl Gamut {
    /// Creates a gamut.
    #[inline]
    pub const fn new(chromaticities: [Xy; 3], whitepoint: Xy) -> Self {
        Self {
            chromaticities,
            whitepoint,
        }
    }

    /// Creates a gamut from `((rx, ry), (gx, gy), (bx, by))` and `(wx, wy)`.
    pub fn from_tuples(
        chromaticities: ((f64, f64), (f64, f64), (f64, f64)),
        whitepoint: (f64, f64),
    ) -> Self {
        let (r, g, b) = chromaticities;
        Self::new([r.into(), g.into(), b.into()], whitepoint.into())
    }

    /// The CIE XYZ sentinel gamut, see [`CIE_XYZ`].
    pub const fn cie_xyz() -> Self {
        CIE_XYZ
    }

    /// Red primary.
    #[inline]
    pub const fn red(&self) -> Xy {
        self.chromaticities[0]
    }

    /// Green primary.
    #[inline]
    pub const fn green(&self) -> Xy {
        self.chromaticities[1]
    }

    /// Blue primary.
    #[inline]
    pub const fn blue(&self) -> Xy {
        self.chromaticities[2]
    }

    /// Returns true if the primaries are exactly the CIE XYZ sentinel set.
    pub fn is_identity(&self) -> bool {
        self.chromaticities == IDENTITY_CHROMATICITIES
    }

    /// RGB to XYZ matrix for this gamut.
    ///
    /// The identity for the CIE XYZ sentinel, otherwise
    /// [`compute_normalized_primary_matrix`].
    pub fn normalized_primary_matrix(&self) -> Result<Matrix3x3> {
        if self.is_identity() {
            return Ok(Matrix3x3::identity());
        }
        compute_normalized_primary_matrix(&self.chromaticities, self.whitepoint)
    }
}

/// Computes the normalized primary matrix (RGB to XYZ).
///
/// Follows SMPTE RP 177:
///
/// 1. Extend each primary to `(x, y, 1 - x - y)`; these become the columns
///    of `P`.
/// 2. Whitepoint `W = (Wx / Wy, 1, Wz / Wy)`.
/// 3. Scale factors `C = W * P^-1` (vector-matrix product).
/// 4. `NPM = P * diag(C)`.
///
/// # Errors
///
/// - [`Error::InvalidWhitepoint`] if the whitepoint's `y` is zero or a
///   coordinate is not finite
/// - [`Error::DegenerateGamut`] if a primary is not finite, or the primaries
///   are collinear or duplicated
///
/// # Example
///
/// ```rust
/// use gamut_primaries::{compute_normalized_primary_matrix, SRGB};
///
/// let npm =
///     compute_normalized_primary_matrix(&SRGB.chromaticities, SRGB.whitepoint).unwrap();
/// // Y of the white is 1
/// let y: f64 = npm[1].iter().sum();
/// assert!((y - 1.0).abs() < 1e-14);
/// ```
pub fn compute_normalized_primary_matrix(
    chromaticities: &[Xy; 3],
    whitepoint: Xy,
) -> Result<Matrix3x3> {
    if whitepoint.y == 0.0 || !whitepoint.x.is_finite() || !whitepoint.y.is_finite() {
        return Err(Error::InvalidWhitepoint {
            x: whitepoint.x,
            y: whitepoint.y,
        });
    }

    let primaries = Matrix3x3::new(chromaticities.map(Xy::to_xyz_chromaticity));
    if !primaries.is_finite() {
        let column = primaries
            .m
            .iter()
            .position(|row| row.iter().any(|v| !v.is_finite()))
            .unwrap_or(0);
        return Err(Error::DegenerateGamut { column });
    }
    check_triangle(chromaticities)?;
    let p = primaries.transposed();

    let w = Vector3::new([
        whitepoint.x / whitepoint.y,
        1.0,
        whitepoint.z() / whitepoint.y,
    ]);

    let p_inv = p.inverted().map_err(|err| match err {
        Error::SingularMatrix { column } => Error::DegenerateGamut { column },
        other => other,
    })?;
    let c = w * p_inv;
    let cm = Matrix3x3::zeros().with_diagonal(&c);

    let npm = p * cm;
    debug!(?chromaticities, %whitepoint, scale = %c, "derived normalized primary matrix");
    Ok(npm)
}

/// Rejects primaries spanning no area in the xy plane.
///
/// `det(P)` equals the doubled signed area of the primaries' triangle, so a
/// near-zero area leaves `P` numerically singular even when elimination
/// finds nonzero pivots.
fn check_triangle(chromaticities: &[Xy; 3]) -> Result<()> {
    let [r, g, b] = *chromaticities;
    let (gx, gy) = (g.x - r.x, g.y - r.y);
    let (bx, by) = (b.x - r.x, b.y - r.y);
    let area2 = gx * by - bx * gy;

    let edges = [gx * gx + gy * gy, bx * bx + by * by];
    let cb = (b.x - g.x).powi(2) + (b.y - g.y).powi(2);
    let scale = edges.iter().fold(cb, |acc, &e| acc.max(e));

    if area2.abs() <= COLLINEAR_TOLERANCE * scale {
        // Green on top of red leaves nothing to pivot on in column 1.
        let column = if edges[0] == 0.0 { 1 } else { 2 };
        trace!(?chromaticities, area2, scale, "primaries are collinear");
        return Err(Error::DegenerateGamut { column });
    }
    Ok(())
}

/// Computes the matrix converting RGB in `src` to RGB in `dst`.
///
/// `inverse(NPM_dst) * NPM_src`, with the identity standing in for the NPM
/// of a CIE XYZ sentinel gamut. No chromatic adaptation is performed.
///
/// # Errors
///
/// Anything [`Gamut::normalized_primary_matrix`] returns, or
/// [`Error::SingularMatrix`] if the destination NPM cannot be inverted.
///
/// # Example
///
/// ```rust
/// use gamut_primaries::{get_conversion_matrix, Gamut, SRGB};
///
/// let to_xyz = get_conversion_matrix(&SRGB, &Gamut::cie_xyz()).unwrap();
/// assert_eq!(to_xyz, SRGB.normalized_primary_matrix().unwrap());
/// ```
pub fn get_conversion_matrix(src: &Gamut, dst: &Gamut) -> Result<Matrix3x3> {
    let src_to_xyz = src.normalized_primary_matrix()?;
    let dst_to_xyz = dst.normalized_primary_matrix()?;
    let m = dst_to_xyz.inverted()? * src_to_xyz;
    if src.whitepoint != dst.whitepoint {
        debug!(
            src = %src.whitepoint,
            dst = %dst.whitepoint,
            "whitepoints differ, no adaptation applied"
        );
    }
    Ok(m)
}

/// Like [`get_conversion_matrix`], flattened to nine row-major values.
pub fn get_conversion_matrix_flat(src: &Gamut, dst: &Gamut) -> Result<[f64; 9]> {
    let m = get_conversion_matrix(src, dst)?;
    let mut out = [0.0; 9];
    out.copy_from_slice(&m.to_flat());
    Ok(out)
}
