//! # photog-transfer
//!
//! Per-channel transfer curves between encoded and linear values.
//!
//! | Module | Decode (to linear) | Encode (from linear) |
//! |--------|--------------------|----------------------|
//! | [`srgb`] | [`srgb_to_linear`] | [`linear_to_srgb`] |
//! | [`gamma`] | [`rgb_to_linear`] | [`linear_to_rgb`] |
//!
//! Every function here is a scalar map: no channel or pixel depends on any
//! other. Image-wide application lives in `photog-color`.
//!
//! # Usage
//!
//! ```rust
//! use photog_transfer::{linear_to_rgb, rgb_to_linear, srgb_to_linear};
//!
//! let lin = srgb_to_linear(0.5);
//! assert!((lin - 0.214).abs() < 1e-3);
//!
//! let back = linear_to_rgb(rgb_to_linear(0.5, 2.2), 2.2);
//! assert!((back - 0.5).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod srgb;

pub use gamma::{linear_to_rgb, rgb_to_linear};
pub use srgb::{linear_to_srgb, srgb_to_linear};
