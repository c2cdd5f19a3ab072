//! End-to-end chromatic adaptation of RGB images.
//!
//! Two entry points share one pipeline (build the transform with
//! [`create_transform`], run it with [`apply`]):
//!
//! - [`chromadapt_diy`]: the caller supplies both source and destination
//!   whites;
//! - [`chromadapt_auto`]: the source white is estimated from the image with
//!   the gray-world assumption.
//!
//! [`chromadapt_with`] generalizes the automatic mode to any
//! [`IlluminantEstimator`].
//!
//! # Example
//!
//! ```rust
//! use photog_color::chromadapt_auto;
//! use photog_core::{Image, Layout};
//! use photog_primaries::{ChromadaptMethod, Illuminant, WorkingSpace};
//!
//! let img = Image::filled(2, 2, Layout::Planar, [0.6, 0.5, 0.3]).unwrap();
//! let out = chromadapt_auto(&img, WorkingSpace::Srgb, ChromadaptMethod::Bradford, Illuminant::D65)
//!     .unwrap();
//! let [r, g, b] = out.pixel(0, 0);
//! // the cast is removed: the average becomes neutral
//! assert!((r - g).abs() < 1e-2 && (g - b).abs() < 1e-2);
//! ```

use photog_core::{Image, Result};
use photog_math::Vec3;
use photog_primaries::{
    ChromadaptMethod, Illuminant, WorkingSpace, gamma, reference_white, rgb_to_xyz_matrix,
    xyz_to_rgb_matrix,
};
use tracing::debug;

use crate::adapt::{apply, create_transform};
use crate::convert::rgb_to_xyz_pixel;
use crate::reduce::average;

/// Estimates the XYZ tristimulus of the scene illuminant from an image.
pub trait IlluminantEstimator {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Source white of `image`, whose pixels are encoded in `space`.
    fn estimate(&self, image: &Image, space: WorkingSpace) -> Result<Vec3>;
}

/// Gray-world estimator: the scene averages to gray, so the mean RGB is the
/// illuminant color.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrayWorld;

impl IlluminantEstimator for GrayWorld {
    fn name(&self) -> &'static str {
        "gray-world"
    }

    fn estimate(&self, image: &Image, space: WorkingSpace) -> Result<Vec3> {
        let mean = average(image);
        Ok(rgb_to_xyz_pixel(mean, gamma(space), &rgb_to_xyz_matrix(space)))
    }
}

/// Adapts `image` from the white found by `estimator` to `dest`.
pub fn chromadapt_with<E>(
    image: &Image,
    space: WorkingSpace,
    method: ChromadaptMethod,
    estimator: &E,
    dest: Illuminant,
) -> Result<Image>
where
    E: IlluminantEstimator + ?Sized,
{
    let source = estimator.estimate(image, space)?;
    debug!(
        estimator = estimator.name(),
        source = ?source.to_array(),
        %dest,
        "estimated illuminant"
    );
    chromadapt_diy(image, space, method, source, reference_white(dest))
}

/// Adapts `image` from its gray-world white to the `dest` illuminant.
pub fn chromadapt_auto(
    image: &Image,
    space: WorkingSpace,
    method: ChromadaptMethod,
    dest: Illuminant,
) -> Result<Image> {
    chromadapt_with(image, space, method, &GrayWorld, dest)
}

/// Adapts `image` from the `source` white to the `dest` white, both XYZ.
///
/// # Errors
///
/// [`photog_core::Error::DegenerateInput`] from [`create_transform`].
pub fn chromadapt_diy(
    image: &Image,
    space: WorkingSpace,
    method: ChromadaptMethod,
    source: Vec3,
    dest: Vec3,
) -> Result<Image> {
    let transform = create_transform(method, source, dest)?;
    Ok(apply(
        image,
        gamma(space),
        &rgb_to_xyz_matrix(space),
        &xyz_to_rgb_matrix(space),
        &transform,
    ))
}
