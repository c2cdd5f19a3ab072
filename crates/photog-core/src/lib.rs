//! # photog-core
//!
//! Core types for color conversion and chromatic adaptation.
//!
//! This crate provides the foundational types used throughout photog:
//!
//! - [`Image`] - Owned three-channel `f32` buffer in planar or interleaved order
//! - [`Layout`] - Sample ordering and the single `offset(x, y, c)` addressing rule
//! - [`Mask`] - Per-pixel 0/1 validity flags
//! - [`Error`], [`Result`] - Unified error type
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies:
//!
//! ```text
//! photog-core (this crate)      photog-math
//!    ^                              ^
//!    |                              |
//!    +-- photog-primaries ----------+
//!    +-- photog-color --------------+
//!    +-- photog-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod layout;
pub mod mask;

pub use error::*;
pub use image::*;
pub use layout::*;
pub use mask::*;

/// Prelude module for convenient imports.
///
/// ```
/// use photog_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::Image;
    pub use crate::layout::{CHANNELS, Layout};
    pub use crate::mask::Mask;
}
