//! von Kries chromatic adaptation.
//!
//! Both whites are scaled to the same luminance, taken into cone space by the
//! method's `xyz_to_lms` matrix, and the per-cone ratio `dest / source`
//! becomes a diagonal gain:
//!
//! ```text
//! M = lms_to_xyz * diag(lms_dest / lms_source) * xyz_to_lms
//! ```
//!
//! [`apply`] then runs every pixel through
//! `rgb -> xyz -> M * xyz -> rgb` in the working space.

use photog_core::{Error, Image, Result};
use photog_math::{Mat3, Vec3};
use photog_primaries::{ChromadaptMethod, lms_to_xyz_matrix, xyz_to_lms_matrix};
use tracing::{debug, trace};

use crate::convert::{rgb_to_xyz_pixel, xyz_to_rgb_pixel};

/// Luminance both whites are scaled to before adaptation.
pub const REFERENCE_Y: f32 = 100.0;

/// Scales a tristimulus so that its Y equals `target_y`.
///
/// Any finite, non-zero Y is accepted as long as the scaled result stays
/// finite, so very dark estimates still normalize.
///
/// # Errors
///
/// [`Error::DegenerateInput`] if Y is zero or non-finite, or if scaling
/// overflows.
///
/// # Example
///
/// ```rust
/// use photog_color::adapt::normalize_to_y;
/// use photog_math::Vec3;
///
/// let t = normalize_to_y(Vec3::new(0.5, 0.25, 0.125), 100.0).unwrap();
/// assert_eq!(t.to_array(), [200.0, 100.0, 50.0]);
/// ```
pub fn normalize_to_y(t: Vec3, target_y: f32) -> Result<Vec3> {
    let scaled = t * (target_y / t.y);
    if !t.is_finite() || t.y == 0.0 || !scaled.is_finite() {
        return Err(Error::degenerate_input(format!(
            "cannot normalize tristimulus {:?} to Y = {target_y}: Y is zero, not finite or too small to scale",
            t.to_array()
        )));
    }
    Ok(scaled)
}

/// Builds the XYZ-to-XYZ adaptation matrix taking `source` white to `dest`.
///
/// # Errors
///
/// [`Error::DegenerateInput`] if either white cannot be normalized or the
/// source white has a zero cone response.
pub fn create_transform(method: ChromadaptMethod, source: Vec3, dest: Vec3) -> Result<Mat3> {
    let source = normalize_to_y(source, REFERENCE_Y)?;
    let dest = normalize_to_y(dest, REFERENCE_Y)?;

    let xyz_to_lms = xyz_to_lms_matrix(method);
    let lms_to_xyz = lms_to_xyz_matrix(method);
    let lms_source = xyz_to_lms.transform(source);
    let lms_dest = xyz_to_lms.transform(dest);

    let gain = lms_dest / lms_source;
    if !gain.is_finite() {
        return Err(Error::degenerate_input(format!(
            "source white {:?} has a zero {method} cone response",
            source.to_array()
        )));
    }
    debug!(%method, gain = ?gain.to_array(), "cone gain");

    let transform = lms_to_xyz
        .mul_mat(&Mat3::from_diagonal(gain))
        .mul_mat(&xyz_to_lms);
    debug!(transform = ?transform.m, "adaptation transform");
    Ok(transform)
}

/// Adapts every pixel of a gamma-encoded RGB image with `transform`.
///
/// Each pixel goes to XYZ, through `transform`, and back to RGB as three
/// separate products. Output is clamped to [0, 1] like [`xyz_to_rgb_pixel`].
pub fn apply(
    image: &Image,
    gamma: f32,
    rgb_to_xyz: &Mat3,
    xyz_to_rgb: &Mat3,
    transform: &Mat3,
) -> Image {
    trace!(width = image.width(), height = image.height(), layout = %image.layout(), gamma, "apply");
    image.map_pixels(|px| {
        let xyz = rgb_to_xyz_pixel(Vec3::from_array(px), gamma, rgb_to_xyz);
        xyz_to_rgb_pixel(transform.transform(xyz), gamma, xyz_to_rgb).to_array()
    })
}
