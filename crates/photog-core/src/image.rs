//! Three-channel floating-point image buffer.
//!
//! [`Image`] owns a contiguous `Vec<f32>` of `width * height * 3` samples in
//! either [`Layout::Planar`] or [`Layout::Interleaved`] order. The layout is
//! chosen by the caller at construction and never changes for that buffer;
//! every image derived through [`Image::map_samples`] or [`Image::map_pixels`]
//! inherits it.
//!
//! # Usage
//!
//! ```rust
//! use photog_core::{Image, Layout};
//!
//! let mut img = Image::new(4, 2, Layout::Interleaved).unwrap();
//! img.set_pixel(1, 1, [1.0, 0.5, 0.25]);
//! assert_eq!(img.pixel(1, 1), [1.0, 0.5, 0.25]);
//!
//! // Same pixels, other addressing
//! let planar = img.to_layout(Layout::Planar);
//! assert_eq!(planar.pixel(1, 1), [1.0, 0.5, 0.25]);
//! ```
//!
//! # Parallelism
//!
//! The `map_*` helpers run on the rayon global pool. Each output sample only
//! depends on its own input pixel, so results do not depend on the number of
//! worker threads.

use crate::{CHANNELS, Error, Layout, Result};
use rayon::prelude::*;
use std::ops::Range;

/// Owned three-channel `f32` image.
///
/// Values are conventionally in [0, 1] for encoded RGB and unconstrained for
/// linear or XYZ data.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    data: Vec<f32>,
    width: u32,
    height: u32,
    layout: Layout,
}

/// Validates dimensions and returns the pixel count.
fn pixel_count_for(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(width, height, "width and height must be > 0"));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS).map(|_| n))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "buffer size overflows"))
}

/// Writes row-major pixels into a fresh buffer of the given layout.
fn scatter(count: usize, layout: Layout, pixels: &[[f32; 3]]) -> Vec<f32> {
    let mut data = vec![0.0f32; count * CHANNELS];
    match layout {
        Layout::Interleaved => {
            data.par_chunks_mut(CHANNELS)
                .zip(pixels.par_iter())
                .for_each(|(dst, px)| dst.copy_from_slice(px));
        }
        Layout::Planar => {
            data.par_chunks_mut(count)
                .enumerate()
                .for_each(|(c, plane)| {
                    for (dst, px) in plane.iter_mut().zip(pixels) {
                        *dst = px[c];
                    }
                });
        }
    }
    data
}

impl Image {
    /// Creates a zero-filled image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if either side is zero.
    pub fn new(width: u32, height: u32, layout: Layout) -> Result<Self> {
        let count = pixel_count_for(width, height)?;
        Ok(Self {
            data: vec![0.0; count * CHANNELS],
            width,
            height,
            layout,
        })
    }

    /// Wraps existing samples, already ordered according to `layout`.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if `data.len() != width * height * 3`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use photog_core::{Image, Layout};
    ///
    /// let img = Image::from_data(2, 1, Layout::Planar, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap();
    /// assert_eq!(img.pixel(1, 0), [0.2, 0.4, 0.6]);
    /// assert!(Image::from_data(2, 1, Layout::Planar, vec![0.0; 5]).is_err());
    /// ```
    pub fn from_data(width: u32, height: u32, layout: Layout, data: Vec<f32>) -> Result<Self> {
        let count = pixel_count_for(width, height)?;
        if data.len() != count * CHANNELS {
            return Err(Error::shape_mismatch(format!(
                "{}x{} image needs {} samples, got {}",
                width,
                height,
                count * CHANNELS,
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
            layout,
        })
    }

    /// Builds an image from row-major pixels (index `y * width + x`).
    pub fn from_pixels(width: u32, height: u32, layout: Layout, pixels: &[[f32; 3]]) -> Result<Self> {
        let count = pixel_count_for(width, height)?;
        if pixels.len() != count {
            return Err(Error::shape_mismatch(format!(
                "{}x{} image needs {} pixels, got {}",
                width,
                height,
                count,
                pixels.len()
            )));
        }
        Ok(Self {
            data: scatter(count, layout, pixels),
            width,
            height,
            layout,
        })
    }

    /// Creates an image where every pixel has the same value.
    pub fn filled(width: u32, height: u32, layout: Layout, pixel: [f32; 3]) -> Result<Self> {
        let count = pixel_count_for(width, height)?;
        Self::from_pixels(width, height, layout, &vec![pixel; count])
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Sample ordering of this buffer.
    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw samples in layout order.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Index of sample (x, y, c) in [`data`](Self::data).
    #[inline]
    pub fn offset(&self, x: u32, y: u32, c: usize) -> usize {
        debug_assert!(x < self.width && y < self.height && c < CHANNELS);
        self.layout.offset(
            self.width as usize,
            self.height as usize,
            x as usize,
            y as usize,
            c,
        )
    }

    /// Single sample.
    #[inline]
    pub fn get(&self, x: u32, y: u32, c: usize) -> f32 {
        self.data[self.offset(x, y, c)]
    }

    /// Overwrites a single sample.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, c: usize, value: f32) {
        let i = self.offset(x, y, c);
        self.data[i] = value;
    }

    /// All three channels of pixel (x, y).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        [self.get(x, y, 0), self.get(x, y, 1), self.get(x, y, 2)]
    }

    /// Overwrites pixel (x, y).
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [f32; 3]) {
        for (c, v) in pixel.into_iter().enumerate() {
            self.set(x, y, c, v);
        }
    }

    /// Pixel at row-major index `i = y * width + x`.
    #[inline]
    pub fn pixel_at(&self, i: usize) -> [f32; 3] {
        let w = self.width as usize;
        self.pixel((i % w) as u32, (i / w) as u32)
    }

    /// Iterates the pixels of the given rows in row-major order.
    pub fn row_pixels(&self, rows: Range<u32>) -> impl Iterator<Item = [f32; 3]> + '_ {
        let end = rows.end.min(self.height);
        (rows.start..end).flat_map(move |y| (0..self.width).map(move |x| self.pixel(x, y)))
    }

    /// Iterates every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.row_pixels(0..self.height)
    }

    /// Applies `f` to every sample independently, keeping the layout.
    pub fn map_samples<F>(&self, f: F) -> Image
    where
        F: Fn(f32) -> f32 + Sync + Send,
    {
        Image {
            data: self.data.par_iter().map(|&v| f(v)).collect(),
            width: self.width,
            height: self.height,
            layout: self.layout,
        }
    }

    /// Applies `f` to every pixel independently, keeping the layout.
    pub fn map_pixels<F>(&self, f: F) -> Image
    where
        F: Fn([f32; 3]) -> [f32; 3] + Sync + Send,
    {
        let count = self.pixel_count();
        let mapped: Vec<[f32; 3]> = (0..count)
            .into_par_iter()
            .map(|i| f(self.pixel_at(i)))
            .collect();
        Image {
            data: scatter(count, self.layout, &mapped),
            width: self.width,
            height: self.height,
            layout: self.layout,
        }
    }

    /// Re-addresses the same pixels in another layout.
    pub fn to_layout(&self, layout: Layout) -> Image {
        if layout == self.layout {
            return self.clone();
        }
        let pixels: Vec<[f32; 3]> = self.pixels().collect();
        Image {
            data: scatter(self.pixel_count(), layout, &pixels),
            width: self.width,
            height: self.height,
            layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(layout: Layout) -> Image {
        let (w, h) = (3u32, 2u32);
        let pixels: Vec<[f32; 3]> = (0..w * h)
            .map(|i| {
                let v = i as f32;
                [v, v + 0.25, v + 0.5]
            })
            .collect();
        Image::from_pixels(w, h, layout, &pixels).unwrap()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(Image::new(0, 4, Layout::Planar).unwrap_err().is_shape_error());
        assert!(Image::new(4, 0, Layout::Interleaved).is_err());
    }

    #[test]
    fn test_planar_addressing() {
        let img = gradient(Layout::Planar);
        // plane 0 holds all red samples
        assert_eq!(&img.data()[..6], &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(img.pixel(2, 1), [5.0, 5.25, 5.5]);
    }

    #[test]
    fn test_interleaved_addressing() {
        let img = gradient(Layout::Interleaved);
        assert_eq!(&img.data()[..6], &[0.0, 0.25, 0.5, 1.0, 1.25, 1.5]);
        assert_eq!(img.pixel(2, 1), [5.0, 5.25, 5.5]);
    }

    #[test]
    fn test_to_layout_preserves_pixels() {
        let planar = gradient(Layout::Planar);
        let interleaved = planar.to_layout(Layout::Interleaved);
        assert_eq!(interleaved.layout(), Layout::Interleaved);
        assert_eq!(interleaved, gradient(Layout::Interleaved));
        assert_eq!(interleaved.to_layout(Layout::Planar), planar);
    }

    #[test]
    fn test_map_pixels_keeps_layout() {
        for layout in Layout::ALL {
            let img = gradient(layout);
            let swapped = img.map_pixels(|[r, g, b]| [b, g, r]);
            assert_eq!(swapped.layout(), layout);
            assert_eq!(swapped.pixel(1, 0), [1.5, 1.25, 1.0]);
        }
    }

    #[test]
    fn test_map_samples() {
        let img = gradient(Layout::Planar).map_samples(|v| v * 2.0);
        assert_eq!(img.pixel(1, 1), [8.0, 8.5, 9.0]);
    }

    #[test]
    fn test_row_pixels() {
        let img = gradient(Layout::Interleaved);
        let second: Vec<_> = img.row_pixels(1..2).map(|p| p[0]).collect();
        assert_eq!(second, vec![3.0, 4.0, 5.0]);
        assert_eq!(img.pixels().count(), 6);
    }

    #[test]
    fn test_from_data_length_checked() {
        let err = Image::from_data(2, 2, Layout::Interleaved, vec![0.0; 11]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }
}
