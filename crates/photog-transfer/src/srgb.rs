//! The IEC 61966-2-1 sRGB curve.
//!
//! A linear toe near black joined to a 2.4 power segment; overall it tracks
//! a 2.2 gamma closely.

/// Toe threshold on the encoded side.
pub const ENCODED_KNEE: f32 = 0.04045;

/// Toe threshold on the linear side.
pub const LINEAR_KNEE: f32 = 0.0031308;

/// Slope of the linear toe.
pub const TOE_SLOPE: f32 = 12.92;

/// Exponent of the power segment.
pub const EXPONENT: f32 = 2.4;

/// Decodes an sRGB-encoded value to linear light.
///
/// ```text
/// c <= 0.04045 : c / 12.92
/// otherwise    : ((c + 0.055) / 1.055)^2.4
/// ```
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= ENCODED_KNEE {
        c / TOE_SLOPE
    } else {
        ((c + 0.055) / 1.055).powf(EXPONENT)
    }
}

/// Encodes linear light with the sRGB curve.
///
/// ```text
/// c <= 0.0031308 : c * 12.92
/// otherwise      : 1.055 * c^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use photog_transfer::srgb::linear_to_srgb;
///
/// assert_eq!(linear_to_srgb(0.0), 0.0);
/// assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= LINEAR_KNEE {
        c * TOE_SLOPE
    } else {
        1.055 * c.powf(1.0 / EXPONENT) - 0.055
    }
}
