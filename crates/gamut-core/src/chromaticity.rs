//! CIE 1931 xy chromaticity coordinates.
//!
//! [`Xy`] is the unit every gamut is described in: three primaries and a
//! whitepoint. The implied third coordinate is `z = 1 - x - y`.
//!
//! # Standard Whitepoints
//!
//! | Constant | x | y | Used by |
//! |----------|---|---|---------|
//! | [`D65`] | 0.3127 | 0.3290 | sRGB, Rec.709, Rec.2020 |
//! | [`D60_ACES`] | 0.32168 | 0.33767 | ACES AP0/AP1 |
//! | [`D50`] | 0.3457 | 0.3585 | ProPhoto RGB |
//! | [`DCI`] | 0.314 | 0.351 | DCI-P3 |
//! | [`E`] | 1/3 | 1/3 | CIE XYZ |

use std::fmt;

/// A CIE 1931 xy chromaticity pair.
///
/// # Example
///
/// ```rust
/// use gamut_core::Xy;
///
/// let red = Xy::new(0.64, 0.33);
/// assert!((red.z() - 0.03).abs() < 1e-12);
///
/// let same: Xy = (0.64, 0.33).into();
/// assert_eq!(red, same);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xy {
    /// x chromaticity
    pub x: f64,
    /// y chromaticity
    pub y: f64,
}

impl Xy {
    /// Creates a new chromaticity pair.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Implied z coordinate, `1 - x - y`.
    #[inline]
    pub fn z(self) -> f64 {
        1.0 - self.x - self.y
    }

    /// Returns `(x, y, z)`.
    #[inline]
    pub fn to_xyz_chromaticity(self) -> [f64; 3] {
        [self.x, self.y, self.z()]
    }

    /// Converts to a tuple.
    #[inline]
    pub const fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<(f64, f64)> for Xy {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Xy> for (f64, f64) {
    #[inline]
    fn from(xy: Xy) -> Self {
        xy.to_tuple()
    }
}

impl fmt::Display for Xy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// CIE D65 (daylight, ~6500K).
pub const D65: Xy = Xy::new(0.3127, 0.329);

/// ACES whitepoint (~D60).
pub const D60_ACES: Xy = Xy::new(0.32168, 0.33767);

/// CIE D50 (~5000K).
pub const D50: Xy = Xy::new(0.3457, 0.3585);

/// DCI theatrical white.
pub const DCI: Xy = Xy::new(0.314, 0.351);

/// Equal-energy illuminant E.
pub const E: Xy = Xy::new(1.0 / 3.0, 1.0 / 3.0);
