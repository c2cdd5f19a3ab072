//! Headerless raw buffers.
//!
//! Images are `width * height * 3` little-endian `f32` samples, masks are one
//! byte per pixel, histograms are `64 * 64` little-endian `f32` cells.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use photog_color::Histogram;
use photog_core::{Image, Layout, Mask};

/// Decodes little-endian `f32` samples.
pub fn decode_f32(bytes: &[u8]) -> Result<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        bail!("raw f32 data must be a multiple of 4 bytes, got {}", bytes.len());
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

/// Encodes samples as little-endian `f32`.
pub fn encode_f32(samples: &[f32]) -> Vec<u8> {
    samples.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Reads a raw image of the given extent and layout.
pub fn read_image(path: &Path, width: u32, height: u32, layout: Layout) -> Result<Image> {
    let bytes = fs::read(path).with_context(|| format!("Failed to load: {}", path.display()))?;
    let data = decode_f32(&bytes).with_context(|| format!("Bad image data: {}", path.display()))?;
    Image::from_data(width, height, layout, data)
        .with_context(|| format!("{} is not a {width}x{height} RGB image", path.display()))
}

/// Writes an image as raw `f32` in its own layout.
pub fn write_image(path: &Path, image: &Image) -> Result<()> {
    fs::write(path, encode_f32(image.data()))
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Reads a byte-per-pixel mask.
pub fn read_mask(path: &Path, width: u32, height: u32) -> Result<Mask> {
    let bytes = fs::read(path).with_context(|| format!("Failed to load: {}", path.display()))?;
    Mask::from_data(width, height, bytes)
        .with_context(|| format!("{} is not a {width}x{height} mask", path.display()))
}

/// Writes a byte-per-pixel mask.
pub fn write_mask(path: &Path, mask: &Mask) -> Result<()> {
    fs::write(path, mask.data()).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Writes histogram cells as raw `f32`, `u`-major.
pub fn write_histogram(path: &Path, hist: &Histogram) -> Result<()> {
    fs::write(path, encode_f32(hist.as_slice()))
        .with_context(|| format!("Failed to save: {}", path.display()))
}
