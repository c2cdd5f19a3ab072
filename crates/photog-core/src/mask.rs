//! Per-pixel validity masks.

use rayon::prelude::*;

use crate::{Error, Image, Result};

/// A width x height grid of `0`/`1` flags, one per pixel, row-major.
///
/// Masks are independent of the channel count and the layout of the image
/// they were derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Mask {
    /// Wraps row-major flags.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the length is not `width * height`,
    /// [`Error::InvalidValue`] if a flag is neither 0 nor 1.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height, "width and height must be > 0"));
        }
        if data.len() != expected {
            return Err(Error::shape_mismatch(format!(
                "{}x{} mask needs {} entries, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        if let Some(bad) = data.iter().find(|&&v| v > 1) {
            return Err(Error::invalid_value(format!("mask entries must be 0 or 1, got {bad}")));
        }
        Ok(Self { data, width, height })
    }

    /// Mask with every pixel set to `value`.
    pub fn filled(width: u32, height: u32, value: bool) -> Result<Self> {
        Self::from_data(width, height, vec![value as u8; width as usize * height as usize])
    }

    /// Flags every pixel of `image` for which `keep` holds.
    ///
    /// The mask takes the image's extent, so this cannot fail.
    pub fn from_image<F>(image: &Image, keep: F) -> Self
    where
        F: Fn([f32; 3]) -> bool + Sync + Send,
    {
        let data = (0..image.pixel_count())
            .into_par_iter()
            .map(|i| u8::from(keep(image.pixel_at(i))))
            .collect();
        Self {
            data,
            width: image.width(),
            height: image.height(),
        }
    }

    /// Mask width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major flags.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Flag at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// `true` if pixel (x, y) is valid.
    #[inline]
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.get(x, y) == 1
    }

    /// Number of set pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }

    /// Fails unless the mask covers exactly the extent of `image`.
    pub fn check_extent(&self, image: &Image) -> Result<()> {
        if self.dimensions() != image.dimensions() {
            return Err(Error::extent_mismatch(image.dimensions(), self.dimensions()));
        }
        Ok(())
    }
}
