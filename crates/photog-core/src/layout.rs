//! Memory layouts for three-channel image buffers.
//!
//! An [`Image`](crate::Image) stores its samples in one of two orders:
//!
//! ```text
//! Planar:      [R R R ... R][G G G ... G][B B B ... B]   channel outermost
//! Interleaved: [R G B][R G B][R G B] ...                 channel innermost
//! ```
//!
//! All addressing goes through [`Layout::offset`], so the reductions and
//! transforms above this module never branch on the layout themselves.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Number of channels in every image handled by photog.
pub const CHANNELS: usize = 3;

/// Sample ordering of an image buffer.
///
/// # Example
///
/// ```rust
/// use photog_core::Layout;
///
/// // 4x2 image, pixel (1, 1), green channel
/// assert_eq!(Layout::Planar.offset(4, 2, 1, 1, 1), 8 + 4 + 1);
/// assert_eq!(Layout::Interleaved.offset(4, 2, 1, 1, 1), (4 + 1) * 3 + 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Channel is the outermost stride.
    Planar,
    /// Channel is the innermost stride.
    Interleaved,
}

impl Layout {
    /// All supported layouts.
    pub const ALL: [Layout; 2] = [Layout::Planar, Layout::Interleaved];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Layout::Planar => "planar",
            Layout::Interleaved => "interleaved",
        }
    }

    /// Index of sample (x, y, c) in a `width` x `height` buffer.
    #[inline]
    pub const fn offset(self, width: usize, height: usize, x: usize, y: usize, c: usize) -> usize {
        match self {
            Layout::Planar => c * width * height + y * width + x,
            Layout::Interleaved => (y * width + x) * CHANNELS + c,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planar" => Ok(Layout::Planar),
            "interleaved" => Ok(Layout::Interleaved),
            _ => Err(Error::configuration("layout", s)),
        }
    }
}
