//! # photog-primaries
//!
//! Constant tables for color conversion: working spaces, standard
//! illuminants and cone-response bases for chromatic adaptation.
//!
//! Every table is keyed by a closed enum, so lookups are total. String keys
//! (from configuration or the command line) go through [`FromStr`], which
//! rejects unknown names with [`Error::Configuration`] instead of falling
//! back to a default.
//!
//! # Usage
//!
//! ```rust
//! use photog_primaries::{Illuminant, WorkingSpace, gamma, reference_white, rgb_to_xyz_matrix};
//! use photog_math::Vec3;
//!
//! let d65 = reference_white(Illuminant::D65);
//! assert_eq!(d65, Vec3::new(0.95047, 1.0, 1.08883));
//!
//! // RGB white maps to the working space white point
//! let white = rgb_to_xyz_matrix(WorkingSpace::Srgb) * Vec3::ONE;
//! assert!((white.x - d65.x).abs() < 1e-4);
//! assert_eq!(gamma(WorkingSpace::Srgb), 2.2);
//!
//! assert!("D93".parse::<Illuminant>().is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`photog-core`] - Error type
//! - [`photog-math`] - `Vec3`, `Mat3`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use photog_core::{Error, Result};
use photog_math::{Mat3, Vec3};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Working spaces
// ============================================================================

/// RGB working space of an input image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkingSpace {
    /// sRGB primaries, D65 white.
    Srgb,
}

/// Constant data describing a [`WorkingSpace`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkingSpaceSpec {
    /// Display name
    pub name: &'static str,
    /// Exponent of the general power-law path
    pub gamma: f32,
    /// Linear RGB to XYZ
    pub rgb_to_xyz: Mat3,
    /// XYZ to linear RGB
    pub xyz_to_rgb: Mat3,
    /// White point the primaries are defined against
    pub white: Illuminant,
}

/// sRGB (IEC 61966-2-1) with D65 reference white.
///
/// Matrices from Lindbloom, "RGB/XYZ Matrices".
pub const SRGB: WorkingSpaceSpec = WorkingSpaceSpec {
    name: "sRGB",
    gamma: 2.2,
    rgb_to_xyz: Mat3::from_rows([
        [0.4124564, 0.3575761, 0.1804375],
        [0.2126729, 0.7151522, 0.0721750],
        [0.0193339, 0.1191920, 0.9503041],
    ]),
    xyz_to_rgb: Mat3::from_rows([
        [3.2404542, -1.5371385, -0.4985314],
        [-0.9692660, 1.8760108, 0.0415560],
        [0.0556434, -0.2040259, 1.0572252],
    ]),
    white: Illuminant::D65,
};

impl WorkingSpace {
    /// All supported working spaces.
    pub const ALL: [WorkingSpace; 1] = [WorkingSpace::Srgb];

    /// Constant data for this working space.
    #[inline]
    pub fn spec(self) -> &'static WorkingSpaceSpec {
        match self {
            WorkingSpace::Srgb => &SRGB,
        }
    }

    /// Display name.
    #[inline]
    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

impl fmt::Display for WorkingSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkingSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srgb" => Ok(WorkingSpace::Srgb),
            _ => Err(Error::configuration("working space", s)),
        }
    }
}

/// Gamma of the general power-law path.
#[inline]
pub fn gamma(space: WorkingSpace) -> f32 {
    space.spec().gamma
}

/// Linear RGB to XYZ matrix.
#[inline]
pub fn rgb_to_xyz_matrix(space: WorkingSpace) -> Mat3 {
    space.spec().rgb_to_xyz
}

/// XYZ to linear RGB matrix.
#[inline]
pub fn xyz_to_rgb_matrix(space: WorkingSpace) -> Mat3 {
    space.spec().xyz_to_rgb
}

// ============================================================================
// Illuminants
// ============================================================================

/// CIE standard illuminants (2 degree observer).
///
/// References:
/// - <http://www.brucelindbloom.com/Eqn_ChromAdapt.html>
/// - <https://en.wikipedia.org/wiki/Standard_illuminant>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Illuminant {
    /// Tungsten-filament lighting, 2856K.
    A,
    /// Direct sunlight, 4874K (deprecated).
    B,
    /// Average daylight, 6774K (deprecated).
    C,
    /// Horizon light, 5003K. ICC profile connection space.
    D50,
    /// Mid-morning daylight, ~5500K.
    D55,
    /// Noon daylight, 6504K.
    D65,
    /// North sky daylight, ~7500K.
    D75,
    /// Equal-energy radiator.
    E,
    /// Cool white fluorescent, 4230K.
    F2,
    /// Broadband daylight fluorescent, 6500K.
    F7,
    /// Narrow tri-band fluorescent, 4000K.
    F11,
}

impl Illuminant {
    /// All supported illuminants.
    pub const ALL: [Illuminant; 11] = [
        Illuminant::A,
        Illuminant::B,
        Illuminant::C,
        Illuminant::D50,
        Illuminant::D55,
        Illuminant::D65,
        Illuminant::D75,
        Illuminant::E,
        Illuminant::F2,
        Illuminant::F7,
        Illuminant::F11,
    ];

    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Illuminant::A => "A",
            Illuminant::B => "B",
            Illuminant::C => "C",
            Illuminant::D50 => "D50",
            Illuminant::D55 => "D55",
            Illuminant::D65 => "D65",
            Illuminant::D75 => "D75",
            Illuminant::E => "E",
            Illuminant::F2 => "F2",
            Illuminant::F7 => "F7",
            Illuminant::F11 => "F11",
        }
    }

    /// XYZ tristimulus of the reference white, normalized to Y = 1.
    pub const fn white(self) -> Vec3 {
        match self {
            Illuminant::A => Vec3::new(1.09850, 1.0, 0.35585),
            Illuminant::B => Vec3::new(0.99072, 1.0, 0.85223),
            Illuminant::C => Vec3::new(0.98074, 1.0, 1.18232),
            Illuminant::D50 => Vec3::new(0.96422, 1.0, 0.82521),
            Illuminant::D55 => Vec3::new(0.95682, 1.0, 0.92149),
            Illuminant::D65 => Vec3::new(0.95047, 1.0, 1.08883),
            Illuminant::D75 => Vec3::new(0.94972, 1.0, 1.22638),
            Illuminant::E => Vec3::new(1.0, 1.0, 1.0),
            Illuminant::F2 => Vec3::new(0.99186, 1.0, 0.67393),
            Illuminant::F7 => Vec3::new(0.95041, 1.0, 1.08747),
            Illuminant::F11 => Vec3::new(1.00962, 1.0, 0.64350),
        }
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Illuminant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Illuminant::ALL
            .into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::configuration("illuminant", s))
    }
}

/// Reference white of an illuminant (Y = 1).
#[inline]
pub fn reference_white(illuminant: Illuminant) -> Vec3 {
    illuminant.white()
}

// ============================================================================
// Cone-response bases
// ============================================================================

/// Chromatic adaptation method, i.e. the XYZ <-> LMS basis the von Kries
/// gains are applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromadaptMethod {
    /// Lam (1985) sharpened cone responses.
    Bradford,
}

/// Forward and backward cone-response matrices.
///
/// Both directions are stored as published. They agree to about 1e-7 but are
/// not exact inverses of each other, and must not be re-derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeResponse {
    /// Display name
    pub name: &'static str,
    /// XYZ to LMS (M_A)
    pub xyz_to_lms: Mat3,
    /// LMS to XYZ (M_A^-1)
    pub lms_to_xyz: Mat3,
}

/// Bradford cone-response basis.
pub const BRADFORD: ConeResponse = ConeResponse {
    name: "Bradford",
    xyz_to_lms: Mat3::from_rows([
        [0.8951, 0.2664, -0.1614],
        [-0.7502, 1.7135, 0.0367],
        [0.0389, -0.0685, 1.0296],
    ]),
    lms_to_xyz: Mat3::from_rows([
        [0.9869929, -0.1470543, 0.1599627],
        [0.4323053, 0.5183603, 0.0492912],
        [-0.0085287, 0.0400428, 0.9684867],
    ]),
};

impl ChromadaptMethod {
    /// All supported methods.
    pub const ALL: [ChromadaptMethod; 1] = [ChromadaptMethod::Bradford];

    /// Matrices for this method.
    #[inline]
    pub fn cone_response(self) -> &'static ConeResponse {
        match self {
            ChromadaptMethod::Bradford => &BRADFORD,
        }
    }

    /// Display name.
    #[inline]
    pub fn name(self) -> &'static str {
        self.cone_response().name
    }
}

impl fmt::Display for ChromadaptMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChromadaptMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bradford" => Ok(ChromadaptMethod::Bradford),
            _ => Err(Error::configuration("chromatic adaptation method", s)),
        }
    }
}

/// XYZ to LMS matrix of a method.
#[inline]
pub fn xyz_to_lms_matrix(method: ChromadaptMethod) -> Mat3 {
    method.cone_response().xyz_to_lms
}

/// LMS to XYZ matrix of a method.
#[inline]
pub fn lms_to_xyz_matrix(method: ChromadaptMethod) -> Mat3 {
    method.cone_response().lms_to_xyz
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_illuminants_have_unit_y() {
        for ill in Illuminant::ALL {
            assert_eq!(reference_white(ill).y, 1.0, "{ill}");
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for ill in Illuminant::ALL {
            assert_eq!(ill.to_string().parse::<Illuminant>().unwrap(), ill);
        }
        assert_eq!("d65".parse::<Illuminant>().unwrap(), Illuminant::D65);
        assert_eq!("sRGB".parse::<WorkingSpace>().unwrap(), WorkingSpace::Srgb);
        assert_eq!("BRADFORD".parse::<ChromadaptMethod>().unwrap(), ChromadaptMethod::Bradford);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!("D93".parse::<Illuminant>().unwrap_err().is_configuration());
        assert!("adobe".parse::<WorkingSpace>().unwrap_err().is_configuration());
        assert!("cat02".parse::<ChromadaptMethod>().unwrap_err().is_configuration());
    }

    #[test]
    fn test_srgb_matrices_are_inverse() {
        let spec = WorkingSpace::Srgb.spec();
        let product = spec.xyz_to_rgb * spec.rgb_to_xyz;
        assert!(product.max_abs_diff(&Mat3::IDENTITY) < 1e-5);
    }

    #[test]
    fn test_srgb_white_is_d65() {
        let spec = WorkingSpace::Srgb.spec();
        let white = spec.rgb_to_xyz * Vec3::ONE;
        let d65 = reference_white(spec.white);
        assert_abs_diff_eq!(white.x, d65.x, epsilon = 1e-4);
        assert_abs_diff_eq!(white.y, d65.y, epsilon = 1e-4);
        assert_abs_diff_eq!(white.z, d65.z, epsilon = 1e-4);
    }

    #[test]
    fn test_bradford_stored_literally() {
        let m = xyz_to_lms_matrix(ChromadaptMethod::Bradford);
        let inv = lms_to_xyz_matrix(ChromadaptMethod::Bradford);
        assert_eq!(m.m[0], [0.8951, 0.2664, -0.1614]);
        assert_eq!(inv.m[2], [-0.0085287, 0.0400428, 0.9684867]);
        // close to inverse, not derived from it
        assert!((inv * m).max_abs_diff(&Mat3::IDENTITY) < 1e-4);
    }
}
