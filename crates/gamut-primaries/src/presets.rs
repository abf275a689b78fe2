//! Named RGB gamuts.
//!
//! Primaries and whitepoints as published by each standard or vendor,
//! rounded to six decimals. [`GamutId`] names them at runtime for the CLI
//! and other string-driven callers.

use std::fmt;
use std::str::FromStr;

use gamut_core::chromaticity::{D50, D60_ACES, D65, DCI, E};
use gamut_core::{Error, Xy};

use crate::{Gamut, IDENTITY_CHROMATICITIES};

const fn gamut(r: (f64, f64), g: (f64, f64), b: (f64, f64), w: Xy) -> Gamut {
    Gamut::new([Xy::new(r.0, r.1), Xy::new(g.0, g.1), Xy::new(b.0, b.1)], w)
}

/// Blackmagic's rounding of D65.
const BLACKMAGIC_D65: Xy = Xy::new(0.312717, 0.329031);

/// sRGB (IEC 61966-2-1), D65.
pub const SRGB: Gamut = gamut((0.64, 0.33), (0.3, 0.6), (0.15, 0.06), D65);

/// ITU-R BT.709. Same primaries as sRGB.
pub const REC709: Gamut = SRGB;

/// ITU-R BT.2020 / BT.2100, D65.
pub const REC2020: Gamut = gamut((0.708, 0.292), (0.170, 0.797), (0.131, 0.046), D65);

/// DCI-P3 with the DCI projector white.
pub const DCI_P3: Gamut = gamut((0.680, 0.320), (0.265, 0.690), (0.150, 0.060), DCI);

/// DCI-P3+ (DCI-P3-P), DCI white.
pub const DCI_P3_P: Gamut = gamut((0.74, 0.27), (0.22, 0.78), (0.09, -0.09), DCI);

/// Display P3: DCI-P3 primaries, D65.
pub const DISPLAY_P3: Gamut = gamut((0.680, 0.320), (0.265, 0.690), (0.150, 0.060), D65);

/// P3-D65, as used for mastering. Same values as Display P3.
pub const P3_D65: Gamut = DISPLAY_P3;

/// ACES2065-1 (AP0), ACES white.
pub const ACES_AP0: Gamut = gamut((0.7347, 0.2653), (0.0, 1.0), (0.0001, -0.077), D60_ACES);

/// ACEScg (AP1), ACES white.
pub const ACES_AP1: Gamut = gamut((0.713, 0.293), (0.165, 0.830), (0.128, 0.044), D60_ACES);

/// ACESproxy. Encodes AP1 primaries.
pub const ACES_PROXY: Gamut = ACES_AP1;

/// Adobe RGB (1998), D65.
pub const ADOBE_RGB: Gamut = gamut((0.64, 0.33), (0.21, 0.71), (0.15, 0.06), D65);

/// Adobe Wide Gamut RGB, D50.
pub const ADOBE_WIDE_GAMUT_RGB: Gamut =
    gamut((0.7347, 0.2653), (0.1152, 0.8264), (0.1566, 0.0177), D50);

/// ProPhoto RGB (ROMM), D50.
pub const PROPHOTO_RGB: Gamut =
    gamut((0.7347, 0.2653), (0.1596, 0.8404), (0.0366, 0.0001), D50);

/// ARRI Wide Gamut 3, D65.
pub const ARRI_WIDE_GAMUT_3: Gamut =
    gamut((0.684, 0.313), (0.221, 0.848), (0.0861, -0.102), D65);

/// ARRI Wide Gamut 4, D65.
pub const ARRI_WIDE_GAMUT_4: Gamut =
    gamut((0.7347, 0.2653), (0.1424, 0.8576), (0.0991, -0.0308), D65);

/// Blackmagic Wide Gamut (Gen 4/5).
pub const BLACKMAGIC_WIDE_GAMUT: Gamut = gamut(
    (0.717722, 0.317118),
    (0.228041, 0.861569),
    (0.100584, -0.082045),
    BLACKMAGIC_D65,
);

/// DaVinci Wide Gamut, D65.
pub const DAVINCI_WIDE_GAMUT: Gamut =
    gamut((0.8, 0.313), (0.1682, 0.9877), (0.079, -0.1155), D65);

/// DJI D-Gamut, D65.
pub const DJI_D_GAMUT: Gamut = gamut((0.71, 0.31), (0.21, 0.88), (0.09, -0.08), D65);

/// Fujifilm F-Gamut. BT.2020 primaries, D65.
pub const F_GAMUT: Gamut = REC2020;

/// FilmLight E-Gamut, D65.
pub const FILMLIGHT_E_GAMUT: Gamut =
    gamut((0.8, 0.3177), (0.18, 0.9), (0.065, -0.0805), D65);

/// RED Wide Gamut RGB, D65.
pub const RED_WIDE_GAMUT_RGB: Gamut = gamut(
    (0.780308, 0.304253),
    (0.121595, 1.493994),
    (0.095612, -0.084589),
    D65,
);

/// RED DRAGONcolor, D65.
pub const DRAGON_COLOR: Gamut = gamut(
    (0.758656, 0.330355),
    (0.294924, 0.708053),
    (0.085962, -0.045879),
    D65,
);

/// RED DRAGONcolor2, D65.
pub const DRAGON_COLOR_2: Gamut = gamut(
    (0.758656, 0.330356),
    (0.294924, 0.708053),
    (0.144169, 0.050357),
    D65,
);

/// RED REDcolor, D65.
pub const RED_COLOR: Gamut = gamut(
    (0.701059, 0.330181),
    (0.298811, 0.625169),
    (0.135039, 0.035262),
    D65,
);

/// RED REDcolor2, D65.
pub const RED_COLOR_2: Gamut = gamut(
    (0.897407, 0.330776),
    (0.296022, 0.684636),
    (0.0998, -0.023001),
    D65,
);

/// RED REDcolor3, D65.
pub const RED_COLOR_3: Gamut = gamut(
    (0.702599, 0.330186),
    (0.295782, 0.689748),
    (0.111091, -0.004332),
    D65,
);

/// RED REDcolor4, D65.
pub const RED_COLOR_4: Gamut = gamut(
    (0.702598, 0.330185),
    (0.295782, 0.689748),
    (0.144459, 0.050838),
    D65,
);

/// Sony S-Gamut, D65.
pub const S_GAMUT: Gamut = gamut((0.730, 0.280), (0.140, 0.855), (0.100, -0.050), D65);

/// Sony S-Gamut3. Same primaries as S-Gamut.
pub const S_GAMUT3: Gamut = S_GAMUT;

/// Sony S-Gamut3.Cine, D65.
pub const S_GAMUT3_CINE: Gamut = gamut((0.766, 0.275), (0.225, 0.800), (0.089, -0.087), D65);

/// Sony Venice S-Gamut3, D65.
pub const VENICE_S_GAMUT3: Gamut = gamut(
    (0.740464, 0.279364),
    (0.089241, 0.89381),
    (0.110488, -0.052579),
    D65,
);

/// Sony Venice S-Gamut3.Cine, D65.
pub const VENICE_S_GAMUT3_CINE: Gamut = gamut(
    (0.775902, 0.274502),
    (0.188683, 0.828685),
    (0.101337, -0.089188),
    D65,
);

/// Panasonic V-Gamut, D65.
pub const V_GAMUT: Gamut = gamut((0.730, 0.280), (0.165, 0.840), (0.100, -0.030), D65);

/// CIE XYZ, as the identity sentinel with an equal-energy white.
pub const CIE_XYZ: Gamut = Gamut::new(IDENTITY_CHROMATICITIES, E);

/// Runtime identifier for the built-in gamuts.
///
/// # Example
///
/// ```rust
/// use gamut_primaries::GamutId;
///
/// let id: GamutId = "acescg".parse().unwrap();
/// assert_eq!(id, GamutId::AcesCg);
/// assert_eq!(id.name(), "ACEScg");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamutId {
    /// ACES2065-1 (AP0)
    Aces2065_1,
    /// ACEScg (AP1)
    AcesCg,
    /// ACESproxy
    AcesProxy,
    /// ARRI Wide Gamut 3
    ArriWideGamut3,
    /// ARRI Wide Gamut 4
    ArriWideGamut4,
    /// Adobe RGB (1998)
    AdobeRgb,
    /// Adobe Wide Gamut RGB
    AdobeWideGamutRgb,
    /// Blackmagic Wide Gamut
    BlackmagicWideGamut,
    /// DCI-P3
    DciP3,
    /// DCI-P3+
    DciP3P,
    /// DJI D-Gamut
    DjiDGamut,
    /// RED DRAGONcolor
    DragonColor,
    /// RED DRAGONcolor2
    DragonColor2,
    /// DaVinci Wide Gamut
    DaVinciWideGamut,
    /// Display P3
    DisplayP3,
    /// Fujifilm F-Gamut
    FGamut,
    /// FilmLight E-Gamut
    FilmLightEGamut,
    /// ITU-R BT.2020
    Rec2020,
    /// ITU-R BT.709
    Rec709,
    /// P3-D65
    P3D65,
    /// ProPhoto RGB
    ProPhotoRgb,
    /// RED Wide Gamut RGB
    RedWideGamutRgb,
    /// RED REDcolor
    RedColor,
    /// RED REDcolor2
    RedColor2,
    /// RED REDcolor3
    RedColor3,
    /// RED REDcolor4
    RedColor4,
    /// Sony S-Gamut
    SGamut,
    /// Sony S-Gamut3
    SGamut3,
    /// Sony S-Gamut3.Cine
    SGamut3Cine,
    /// Panasonic V-Gamut
    VGamut,
    /// Sony Venice S-Gamut3
    VeniceSGamut3,
    /// Sony Venice S-Gamut3.Cine
    VeniceSGamut3Cine,
    /// sRGB
    Srgb,
    /// CIE XYZ
    CieXyz,
}

impl GamutId {
    /// Every built-in gamut, in listing order.
    pub const ALL: [GamutId; 34] = [
        Self::Aces2065_1,
        Self::AcesCg,
        Self::AcesProxy,
        Self::ArriWideGamut3,
        Self::ArriWideGamut4,
        Self::AdobeRgb,
        Self::AdobeWideGamutRgb,
        Self::BlackmagicWideGamut,
        Self::DciP3,
        Self::DciP3P,
        Self::DjiDGamut,
        Self::DragonColor,
        Self::DragonColor2,
        Self::DaVinciWideGamut,
        Self::DisplayP3,
        Self::FGamut,
        Self::FilmLightEGamut,
        Self::Rec2020,
        Self::Rec709,
        Self::P3D65,
        Self::ProPhotoRgb,
        Self::RedWideGamutRgb,
        Self::RedColor,
        Self::RedColor2,
        Self::RedColor3,
        Self::RedColor4,
        Self::SGamut,
        Self::SGamut3,
        Self::SGamut3Cine,
        Self::VGamut,
        Self::VeniceSGamut3,
        Self::VeniceSGamut3Cine,
        Self::Srgb,
        Self::CieXyz,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aces2065_1 => "ACES2065-1",
            Self::AcesCg => "ACEScg",
            Self::AcesProxy => "ACESproxy",
            Self::ArriWideGamut3 => "ARRI Wide Gamut 3",
            Self::ArriWideGamut4 => "ARRI Wide Gamut 4",
            Self::AdobeRgb => "Adobe RGB (1998)",
            Self::AdobeWideGamutRgb => "Adobe Wide Gamut RGB",
            Self::BlackmagicWideGamut => "Blackmagic Wide Gamut",
            Self::DciP3 => "DCI-P3",
            Self::DciP3P => "DCI-P3-P",
            Self::DjiDGamut => "DJI D-Gamut",
            Self::DragonColor => "DRAGONcolor",
            Self::DragonColor2 => "DRAGONcolor2",
            Self::DaVinciWideGamut => "DaVinci Wide Gamut",
            Self::DisplayP3 => "Display P3",
            Self::FGamut => "F-Gamut",
            Self::FilmLightEGamut => "FilmLight E-Gamut",
            Self::Rec2020 => "ITU-R BT.2020",
            Self::Rec709 => "ITU-R BT.709",
            Self::P3D65 => "P3-D65",
            Self::ProPhotoRgb => "ProPhoto RGB",
            Self::RedWideGamutRgb => "REDWideGamutRGB",
            Self::RedColor => "REDcolor",
            Self::RedColor2 => "REDcolor2",
            Self::RedColor3 => "REDcolor3",
            Self::RedColor4 => "REDcolor4",
            Self::SGamut => "S-Gamut",
            Self::SGamut3 => "S-Gamut3",
            Self::SGamut3Cine => "S-Gamut3.Cine",
            Self::VGamut => "V-Gamut",
            Self::VeniceSGamut3 => "Venice S-Gamut3",
            Self::VeniceSGamut3Cine => "Venice S-Gamut3.Cine",
            Self::Srgb => "sRGB",
            Self::CieXyz => "CIE XYZ",
        }
    }

    /// Primaries and whitepoint.
    pub const fn gamut(self) -> Gamut {
        match self {
            Self::Aces2065_1 => ACES_AP0,
            Self::AcesCg => ACES_AP1,
            Self::AcesProxy => ACES_PROXY,
            Self::ArriWideGamut3 => ARRI_WIDE_GAMUT_3,
            Self::ArriWideGamut4 => ARRI_WIDE_GAMUT_4,
            Self::AdobeRgb => ADOBE_RGB,
            Self::AdobeWideGamutRgb => ADOBE_WIDE_GAMUT_RGB,
            Self::BlackmagicWideGamut => BLACKMAGIC_WIDE_GAMUT,
            Self::DciP3 => DCI_P3,
            Self::DciP3P => DCI_P3_P,
            Self::DjiDGamut => DJI_D_GAMUT,
            Self::DragonColor => DRAGON_COLOR,
            Self::DragonColor2 => DRAGON_COLOR_2,
            Self::DaVinciWideGamut => DAVINCI_WIDE_GAMUT,
            Self::DisplayP3 => DISPLAY_P3,
            Self::FGamut => F_GAMUT,
            Self::FilmLightEGamut => FILMLIGHT_E_GAMUT,
            Self::Rec2020 => REC2020,
            Self::Rec709 => REC709,
            Self::P3D65 => P3_D65,
            Self::ProPhotoRgb => PROPHOTO_RGB,
            Self::RedWideGamutRgb => RED_WIDE_GAMUT_RGB,
            Self::RedColor => RED_COLOR,
            Self::RedColor2 => RED_COLOR_2,
            Self::RedColor3 => RED_COLOR_3,
            Self::RedColor4 => RED_COLOR_4,
            Self::SGamut => S_GAMUT,
            Self::SGamut3 => S_GAMUT3,
            Self::SGamut3Cine => S_GAMUT3_CINE,
            Self::VGamut => V_GAMUT,
            Self::VeniceSGamut3 => VENICE_S_GAMUT3,
            Self::VeniceSGamut3Cine => VENICE_S_GAMUT3_CINE,
            Self::Srgb => SRGB,
            Self::CieXyz => CIE_XYZ,
        }
    }

    /// Short names accepted by [`FromStr`] besides the display name.
    const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Aces2065_1 => &["aces", "ap0"],
            Self::AcesCg => &["ap1"],
            Self::ArriWideGamut3 => &["awg3"],
            Self::ArriWideGamut4 => &["awg4"],
            Self::AdobeRgb => &["adobergb"],
            Self::BlackmagicWideGamut => &["bmdwg"],
            Self::DciP3 => &["p3"],
            Self::DaVinciWideGamut => &["dwg"],
            Self::FilmLightEGamut => &["egamut"],
            Self::Rec2020 => &["rec2020", "bt2020"],
            Self::Rec709 => &["rec709", "bt709"],
            Self::ProPhotoRgb => &["prophoto", "romm"],
            Self::RedWideGamutRgb => &["rwg"],
            Self::CieXyz => &["xyz"],
            _ => &[],
        }
    }
}

impl From<GamutId> for Gamut {
    fn from(id: GamutId) -> Self {
        id.gamut()
    }
}

impl fmt::Display for GamutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lowercase, alphanumerics only: "S-Gamut3.Cine" -> "sgamut3cine".
fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for GamutId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        if key.is_empty() {
            return Err(Error::unknown_gamut(s));
        }
        Self::ALL
            .into_iter()
            .find(|id| normalize(id.name()) == key || id.aliases().contains(&key.as_str()))
            .ok_or_else(|| Error::unknown_gamut(s))
    }
}
