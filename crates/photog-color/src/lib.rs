//! # photog-color
//!
//! Image-level color operations on top of the photog building blocks.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`convert`] | sRGB / gamma / XYZ conversions, per pixel and per image |
//! | [`reduce`] | channel average and zero mask |
//! | [`histogram`] | toroidal log-chroma histogram |
//! | [`adapt`] | von Kries transform construction and application |
//! | [`chromadapt`] | automatic and explicit chromatic adaptation |
//!
//! Pixelwise operations and reductions run on rayon's global pool. Results
//! do not depend on the number of worker threads.
//!
//! # Quick Start
//!
//! ```rust
//! use photog_color::prelude::*;
//!
//! let img = Image::filled(4, 4, Layout::Interleaved, [0.7, 0.5, 0.3]).unwrap();
//!
//! let gray = average(&img);
//! assert!((gray.x - 0.7).abs() < 1e-6);
//!
//! let hist = toroidal_histogram(&img, &zero_mask(&img)).unwrap();
//! assert!((hist.sum() - 1.0).abs() < 1e-6);
//!
//! let balanced = chromadapt_auto(&img, WorkingSpace::Srgb, ChromadaptMethod::Bradford, Illuminant::D65)
//!     .unwrap();
//! assert_eq!(balanced.dimensions(), (4, 4));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adapt;
pub mod chromadapt;
pub mod convert;
pub mod histogram;
pub mod reduce;

pub use adapt::{REFERENCE_Y, apply, create_transform, normalize_to_y};
pub use chromadapt::{GrayWorld, IlluminantEstimator, chromadapt_auto, chromadapt_diy, chromadapt_with};
pub use convert::{
    linear_to_rgb, linear_to_srgb, rgb_to_linear, rgb_to_xyz, rgb_to_xyz_pixel, srgb_to_linear,
    srgb_to_xyz, xyz_to_rgb, xyz_to_rgb_pixel, xyz_to_srgb,
};
pub use histogram::{
    BIN_COUNT, Histogram, HistogramCounts, toroidal_histogram, toroidal_histogram_into,
    toroidal_histogram_partitioned,
};
pub use reduce::{ChannelSums, average, average_partitioned, zero_mask};

// Re-export sub-crates for convenience
pub use photog_math as math;
pub use photog_primaries as primaries;
pub use photog_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        Histogram, average, chromadapt_auto, chromadapt_diy, create_transform, toroidal_histogram,
        zero_mask,
    };

    pub use photog_core::prelude::*;
    pub use photog_math::{Mat3, Vec3};
    pub use photog_primaries::{ChromadaptMethod, Illuminant, WorkingSpace, reference_white};
}
