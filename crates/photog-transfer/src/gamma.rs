//! Pure power-law gamma.
//!
//! Unlike [`srgb`](crate::srgb) there is no linear toe: decoding is `c^gamma`
//! and encoding is `c^(1/gamma)`. Negative inputs follow `powf` and produce
//! NaN for fractional exponents; callers that need a bounded result clamp
//! afterwards.

/// Decodes a gamma-encoded value: `c^gamma`.
///
/// # Example
///
/// ```rust
/// use photog_transfer::gamma::rgb_to_linear;
///
/// assert!((rgb_to_linear(0.5, 2.2) - 0.2176).abs() < 1e-4);
/// ```
#[inline]
pub fn rgb_to_linear(c: f32, gamma: f32) -> f32 {
    c.powf(gamma)
}

/// Encodes a linear value: `c^(1/gamma)`.
#[inline]
pub fn linear_to_rgb(c: f32, gamma: f32) -> f32 {
    c.powf(1.0 / gamma)
}
