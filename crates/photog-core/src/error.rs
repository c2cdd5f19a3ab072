//! Error types for photog operations.
//!
//! Every fallible operation in the workspace reports one of the variants of
//! [`Error`]. Failures are raised before any output buffer is written, so a
//! caller never observes a partially transformed image.
//!
//! # Usage
//!
//! ```rust
//! use photog_core::{Error, Result};
//!
//! fn check_y(y: f32) -> Result<f32> {
//!     if y == 0.0 {
//!         return Err(Error::degenerate_input("tristimulus Y is zero"));
//!     }
//!     Ok(y)
//! }
//!
//! assert!(check_y(0.0).unwrap_err().is_degenerate());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during color conversion and adaptation.
///
/// # Categories
///
/// - **Configuration**: [`Configuration`](Error::Configuration) for unknown
///   working spaces, illuminants, adaptation methods or layouts
/// - **Numerics**: [`DegenerateInput`](Error::DegenerateInput) for zero
///   denominators in tristimulus normalization and von Kries gains
/// - **Shapes**: [`ShapeMismatch`](Error::ShapeMismatch) and
///   [`InvalidDimensions`](Error::InvalidDimensions)
/// - **Contents**: [`InvalidValue`](Error::InvalidValue) for a buffer of the
///   right shape holding an entry outside its domain
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration key does not name a supported entry.
    ///
    /// ```rust
    /// use photog_core::Error;
    ///
    /// let err = Error::configuration("illuminant", "D93");
    /// assert_eq!(err.to_string(), "unsupported illuminant: D93");
    /// ```
    #[error("unsupported {kind}: {name}")]
    Configuration {
        /// What kind of key was looked up (e.g. "working space")
        kind: &'static str,
        /// The name that failed to resolve
        name: String,
    },

    /// A denominator was zero or too close to zero to divide by.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Two buffers that must share a shape do not.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A buffer entry lies outside the values its type allows.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Width or height is zero, or the buffer size overflows.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::Configuration`] error.
    #[inline]
    pub fn configuration(kind: &'static str, name: impl Into<String>) -> Self {
        Self::Configuration {
            kind,
            name: name.into(),
        }
    }

    /// Creates an [`Error::DegenerateInput`] error.
    #[inline]
    pub fn degenerate_input(msg: impl Into<String>) -> Self {
        Self::DegenerateInput(msg.into())
    }

    /// Creates an [`Error::ShapeMismatch`] error.
    #[inline]
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    /// Creates an [`Error::ShapeMismatch`] error for two (width, height) extents.
    #[inline]
    pub fn extent_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::ShapeMismatch(format!("{}x{} vs {}x{}", a.0, a.1, b.0, b.1))
    }

    /// Creates an [`Error::InvalidValue`] error.
    #[inline]
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a configuration error.
    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Returns `true` if this is a degenerate-input error.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateInput(_))
    }

    /// Returns `true` if this is a shape error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::ShapeMismatch(_) | Self::InvalidDimensions { .. })
    }

    /// Returns `true` if this is an invalid-value error.
    #[inline]
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration() {
        let err = Error::configuration("layout", "tiled");
        assert!(err.is_configuration());
        assert!(!err.is_shape_error());
        assert!(err.to_string().contains("tiled"));
    }

    #[test]
    fn test_extent_mismatch() {
        let err = Error::extent_mismatch((4, 2), (2, 4));
        let msg = err.to_string();
        assert!(msg.contains("4x2"));
        assert!(msg.contains("2x4"));
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(0, 10, "width must be > 0");
        assert!(err.is_shape_error());
        assert!(err.to_string().contains("0x10"));
    }

    #[test]
    fn test_invalid_value() {
        let err = Error::invalid_value("mask entries must be 0 or 1, got 2");
        assert!(err.is_invalid_value());
        assert!(!err.is_shape_error());
        assert_eq!(err.to_string(), "invalid value: mask entries must be 0 or 1, got 2");
    }
}
