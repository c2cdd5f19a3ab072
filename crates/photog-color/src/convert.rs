//! Pixel and image conversions between encoded RGB, linear RGB and XYZ.
//!
//! Two families of functions:
//!
//! - pixel functions ([`rgb_to_xyz_pixel`], [`xyz_to_rgb_pixel`]) on a single
//!   [`Vec3`], used by the reductions and the adaptation engine;
//! - image functions ([`srgb_to_linear`] ... [`xyz_to_rgb`]) mapping those
//!   over every pixel of an [`Image`] on the rayon pool.
//!
//! Image functions return a new image with the input's width, height and
//! layout.
//!
//! # Example
//!
//! ```rust
//! use photog_color::convert::{rgb_to_xyz, xyz_to_rgb};
//! use photog_core::{Image, Layout};
//! use photog_primaries::{WorkingSpace, gamma, rgb_to_xyz_matrix, xyz_to_rgb_matrix};
//!
//! let ws = WorkingSpace::Srgb;
//! let img = Image::filled(4, 4, Layout::Interleaved, [0.8, 0.4, 0.2]).unwrap();
//! let xyz = rgb_to_xyz(&img, gamma(ws), &rgb_to_xyz_matrix(ws));
//! let back = xyz_to_rgb(&xyz, gamma(ws), &xyz_to_rgb_matrix(ws));
//! assert!((back.pixel(0, 0)[0] - 0.8).abs() < 1e-4);
//! ```

use photog_core::Image;
use photog_math::{Mat3, Vec3};
use photog_primaries::{WorkingSpace, rgb_to_xyz_matrix, xyz_to_rgb_matrix};
use photog_transfer::{gamma, srgb};
use tracing::trace;

// ============================================================================
// Pixel functions
// ============================================================================

/// Gamma-encoded RGB to XYZ: per-channel `c^gamma`, then `m * rgb`.
#[inline]
pub fn rgb_to_xyz_pixel(rgb: Vec3, gamma: f32, m: &Mat3) -> Vec3 {
    m.transform(rgb.map(|c| gamma::rgb_to_linear(c, gamma)))
}

/// XYZ to gamma-encoded RGB: `m * xyz`, per-channel `c^(1/gamma)`, then
/// clamp to [0, 1].
///
/// A negative linear value has no real fractional power; its NaN saturates
/// to 0 like any other out-of-gamut value.
#[inline]
pub fn xyz_to_rgb_pixel(xyz: Vec3, gamma: f32, m: &Mat3) -> Vec3 {
    m.transform(xyz)
        .map(|c| saturate(gamma::linear_to_rgb(c, gamma)))
}

/// sRGB-encoded pixel to XYZ through the hybrid sRGB curve.
#[inline]
pub fn srgb_to_xyz_pixel(rgb: Vec3) -> Vec3 {
    rgb_to_xyz_matrix(WorkingSpace::Srgb).transform(rgb.map(srgb::srgb_to_linear))
}

/// XYZ to sRGB-encoded pixel through the hybrid sRGB curve (unclamped).
#[inline]
pub fn xyz_to_srgb_pixel(xyz: Vec3) -> Vec3 {
    xyz_to_rgb_matrix(WorkingSpace::Srgb)
        .transform(xyz)
        .map(srgb::linear_to_srgb)
}

/// Clamps to [0, 1], mapping NaN to 0.
#[inline]
fn saturate(v: f32) -> f32 {
    // f32::max returns the non-NaN operand
    v.max(0.0).min(1.0)
}

/// Lifts a pixel function to the `[f32; 3]` pixels of an [`Image`].
#[inline]
fn lift(f: impl Fn(Vec3) -> Vec3) -> impl Fn([f32; 3]) -> [f32; 3] {
    move |px| f(Vec3::from_array(px)).to_array()
}

// ============================================================================
// Image functions
// ============================================================================

/// Decodes every sample with the sRGB curve.
pub fn srgb_to_linear(image: &Image) -> Image {
    trace!(width = image.width(), height = image.height(), layout = %image.layout(), "srgb_to_linear");
    image.map_samples(srgb::srgb_to_linear)
}

/// Encodes every sample with the sRGB curve.
pub fn linear_to_srgb(image: &Image) -> Image {
    trace!(width = image.width(), height = image.height(), layout = %image.layout(), "linear_to_srgb");
    image.map_samples(srgb::linear_to_srgb)
}

/// Decodes every sample with a pure power law, `c^gamma`.
pub fn rgb_to_linear(image: &Image, gamma: f32) -> Image {
    trace!(width = image.width(), height = image.height(), gamma, "rgb_to_linear");
    image.map_samples(|c| gamma::rgb_to_linear(c, gamma))
}

/// Encodes every sample with a pure power law, `c^(1/gamma)`.
pub fn linear_to_rgb(image: &Image, gamma: f32) -> Image {
    trace!(width = image.width(), height = image.height(), gamma, "linear_to_rgb");
    image.map_samples(|c| gamma::linear_to_rgb(c, gamma))
}

/// sRGB-encoded image to XYZ.
pub fn srgb_to_xyz(image: &Image) -> Image {
    trace!(width = image.width(), height = image.height(), layout = %image.layout(), "srgb_to_xyz");
    image.map_pixels(lift(srgb_to_xyz_pixel))
}

/// XYZ image to sRGB encoding.
pub fn xyz_to_srgb(image: &Image) -> Image {
    trace!(width = image.width(), height = image.height(), layout = %image.layout(), "xyz_to_srgb");
    image.map_pixels(lift(xyz_to_srgb_pixel))
}

/// Gamma-encoded RGB image to XYZ, see [`rgb_to_xyz_pixel`].
pub fn rgb_to_xyz(image: &Image, gamma: f32, rgb_to_xyz: &Mat3) -> Image {
    trace!(width = image.width(), height = image.height(), gamma, "rgb_to_xyz");
    let m = *rgb_to_xyz;
    image.map_pixels(lift(move |px| rgb_to_xyz_pixel(px, gamma, &m)))
}

/// XYZ image to gamma-encoded RGB in [0, 1], see [`xyz_to_rgb_pixel`].
pub fn xyz_to_rgb(image: &Image, gamma: f32, xyz_to_rgb: &Mat3) -> Image {
    trace!(width = image.width(), height = image.height(), gamma, "xyz_to_rgb");
    let m = *xyz_to_rgb;
    image.map_pixels(lift(move |px| xyz_to_rgb_pixel(px, gamma, &m)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use photog_core::Layout;
    use photog_primaries::{Illuminant, reference_white};

    fn ramp(layout: Layout) -> Image {
        let (w, h) = (8u32, 4u32);
        let pixels: Vec<[f32; 3]> = (0..w * h)
            .map(|i| {
                let t = i as f32 / (w * h - 1) as f32;
                [t, 1.0 - t, (t * 3.0).fract()]
            })
            .collect();
        Image::from_pixels(w, h, layout, &pixels).unwrap()
    }

    #[test]
    fn test_srgb_image_roundtrip() {
        for layout in Layout::ALL {
            let img = ramp(layout);
            let back = linear_to_srgb(&srgb_to_linear(&img));
            assert_eq!(back.layout(), layout);
            for (a, b) in img.data().iter().zip(back.data()) {
                assert_abs_diff_eq!(a, b, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_gamma_image_roundtrip() {
        let img = ramp(Layout::Planar);
        let back = linear_to_rgb(&rgb_to_linear(&img, 2.2), 2.2);
        for (a, b) in img.data().iter().zip(back.data()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_rgb_white_is_d65() {
        let m = rgb_to_xyz_matrix(WorkingSpace::Srgb);
        let xyz = rgb_to_xyz_pixel(Vec3::ONE, 2.2, &m);
        let d65 = reference_white(Illuminant::D65);
        assert_abs_diff_eq!(xyz.x, d65.x, epsilon = 1e-4);
        assert_abs_diff_eq!(xyz.y, d65.y, epsilon = 1e-4);
        assert_abs_diff_eq!(xyz.z, d65.z, epsilon = 1e-4);
    }

    #[test]
    fn test_xyz_to_rgb_clamps() {
        let m = xyz_to_rgb_matrix(WorkingSpace::Srgb);
        // far outside the sRGB gamut: negative red, oversaturated green
        let rgb = xyz_to_rgb_pixel(Vec3::new(0.1, 2.0, 0.1), 2.2, &m);
        assert_eq!(rgb.x, 0.0);
        assert_eq!(rgb.y, 1.0);
        assert!(rgb.to_array().iter().all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn test_pixel_roundtrip_clamps_overrange() {
        let ws = WorkingSpace::Srgb;
        let px = Vec3::new(0.25, 1.5, 0.0);
        let xyz = rgb_to_xyz_pixel(px, 2.2, &rgb_to_xyz_matrix(ws));
        let back = xyz_to_rgb_pixel(xyz, 2.2, &xyz_to_rgb_matrix(ws));
        assert_abs_diff_eq!(back.x, 0.25, epsilon = 1e-3);
        assert_eq!(back.y, 1.0);
        assert_abs_diff_eq!(back.z, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_srgb_xyz_roundtrip() {
        for layout in Layout::ALL {
            let img = ramp(layout);
            let back = xyz_to_srgb(&srgb_to_xyz(&img));
            for (a, b) in img.data().iter().zip(back.data()) {
                assert_abs_diff_eq!(a, b, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_layouts_agree() {
        let ws = WorkingSpace::Srgb;
        let m = rgb_to_xyz_matrix(ws);
        let planar = rgb_to_xyz(&ramp(Layout::Planar), 2.2, &m);
        let interleaved = rgb_to_xyz(&ramp(Layout::Interleaved), 2.2, &m);
        assert_eq!(planar.layout(), Layout::Planar);
        assert_eq!(planar.to_layout(Layout::Interleaved), interleaved);
    }
}
