//! Toroidal log-chroma histogram.
//!
//! Each qualifying pixel is mapped to the log-chroma pair
//!
//! ```text
//! u = ln G - ln R
//! v = ln G - ln B
//! ```
//!
//! and counted in a 64x64 grid of bins of width 1/32 starting at -0.3125.
//! Bin indices wrap modulo 64, so chroma outside the nominal range folds back
//! onto the torus instead of being dropped. The grid is normalized to sum to
//! one.
//!
//! A pixel qualifies when its mask flag is 1 and every channel exceeds
//! [`MIN_INTENSITY`].

use std::ops::Range;

use photog_core::{Error, Image, Mask, Result};
use photog_math::KahanSum;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::reduce::{default_partitions, row_ranges};

/// Bins per axis.
pub const BIN_COUNT: usize = 64;

/// Total cells in the grid.
pub const CELL_COUNT: usize = BIN_COUNT * BIN_COUNT;

/// Width of one bin in log-chroma units.
pub const BIN_WIDTH: f32 = 1.0 / 32.0;

/// Log-chroma value at the center of bin 0.
pub const STARTING_UV: f32 = -0.3125;

/// Channels at or below this value do not qualify.
pub const MIN_INTENSITY: f32 = 1.0 / 256.0;

/// Bin of a log-chroma value, wrapped onto `0..BIN_COUNT`.
///
/// Rounds half to even before wrapping.
///
/// ```rust
/// use photog_color::histogram::bin_index;
///
/// assert_eq!(bin_index(-0.3125), 0);
/// assert_eq!(bin_index(-0.3125 - 1.0 / 32.0), 63);
/// assert_eq!(bin_index(-0.3125 + 64.0 / 32.0), 0);
/// ```
#[inline]
pub fn bin_index(value: f32) -> usize {
    let scaled = ((value - STARTING_UV) / BIN_WIDTH).round_ties_even();
    (scaled as i64).rem_euclid(BIN_COUNT as i64) as usize
}

/// Log-chroma `(u, v)` of a pixel.
#[inline]
pub fn log_chroma(px: [f32; 3]) -> (f32, f32) {
    let [r, g, b] = px.map(f32::ln);
    (g - r, g - b)
}

/// Normalized 64x64 histogram, stored row-major by `u`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<f32>,
}

impl Histogram {
    /// Wraps `BIN_COUNT * BIN_COUNT` values.
    pub fn from_vec(bins: Vec<f32>) -> Result<Self> {
        check_len(bins.len())?;
        Ok(Self { bins })
    }

    /// Value of cell `(u, v)`.
    #[inline]
    pub fn get(&self, u: usize, v: usize) -> f32 {
        self.bins[u * BIN_COUNT + v]
    }

    /// All cells, `u`-major.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.bins
    }

    /// Total mass, summed in `f64`.
    pub fn sum(&self) -> f64 {
        self.bins.iter().map(|&v| v as f64).collect::<KahanSum>().value()
    }

    /// Non-empty cells as `(u, v, value)`.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.bins
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > 0.0)
            .map(|(i, &v)| (i / BIN_COUNT, i % BIN_COUNT, v))
    }

    /// Cell with the largest value; the first one on ties.
    pub fn peak(&self) -> (usize, usize, f32) {
        let mut best = (0, 0, self.bins[0]);
        for (i, &v) in self.bins.iter().enumerate() {
            if v > best.2 {
                best = (i / BIN_COUNT, i % BIN_COUNT, v);
            }
        }
        best
    }
}

/// Exact integer bin counts over a set of pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramCounts {
    counts: Vec<u64>,
    total: u64,
}

impl Default for HistogramCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl HistogramCounts {
    /// Empty partial.
    pub fn new() -> Self {
        Self {
            counts: vec![0; CELL_COUNT],
            total: 0,
        }
    }

    /// Counts the qualifying pixels of `rows`.
    ///
    /// The mask must have the image's extent.
    pub fn over_rows(image: &Image, mask: &Mask, rows: Range<u32>) -> Self {
        let mut acc = Self::new();
        let end = rows.end.min(image.height());
        for y in rows.start..end {
            for x in 0..image.width() {
                if mask.is_set(x, y) {
                    acc.push(image.pixel(x, y));
                }
            }
        }
        acc
    }

    /// Counts one pixel if its channels all exceed [`MIN_INTENSITY`].
    #[inline]
    pub fn push(&mut self, px: [f32; 3]) {
        if !px.iter().all(|&c| c > MIN_INTENSITY) {
            return;
        }
        let (u, v) = log_chroma(px);
        self.counts[bin_index(u) * BIN_COUNT + bin_index(v)] += 1;
        self.total += 1;
    }

    /// Adds another partial cell by cell.
    pub fn merge(&mut self, other: &HistogramCounts) {
        for (a, b) in self.counts.iter_mut().zip(&other.counts) {
            *a += b;
        }
        self.total += other.total;
    }

    /// Number of pixels counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Writes `count / total` into `out`, dividing by `f32::EPSILON` when
    /// nothing was counted.
    pub fn normalize_into(&self, out: &mut [f32]) -> Result<()> {
        check_len(out.len())?;
        let denom = (self.total as f32).max(f32::EPSILON);
        for (dst, &c) in out.iter_mut().zip(&self.counts) {
            *dst = c as f32 / denom;
        }
        Ok(())
    }

    /// Normalized histogram.
    pub fn normalize(&self) -> Histogram {
        let denom = (self.total as f32).max(f32::EPSILON);
        Histogram {
            bins: self.counts.iter().map(|&c| c as f32 / denom).collect(),
        }
    }
}

fn check_len(len: usize) -> Result<()> {
    if len != CELL_COUNT {
        return Err(Error::shape_mismatch(format!(
            "histogram needs {BIN_COUNT}x{BIN_COUNT} = {CELL_COUNT} cells, got {len}"
        )));
    }
    Ok(())
}

fn count(image: &Image, mask: &Mask, partitions: usize) -> Result<HistogramCounts> {
    mask.check_extent(image)?;
    trace!(
        width = image.width(),
        height = image.height(),
        layout = %image.layout(),
        partitions,
        "toroidal_histogram"
    );
    let partials: Vec<HistogramCounts> = row_ranges(image.height(), partitions)
        .into_par_iter()
        .map(|rows| HistogramCounts::over_rows(image, mask, rows))
        .collect();

    let mut total = HistogramCounts::new();
    for part in &partials {
        total.merge(part);
    }
    debug!(qualifying = total.total(), "histogram counted");
    Ok(total)
}

/// Normalized toroidal log-chroma histogram of the masked pixels.
///
/// # Errors
///
/// [`Error::ShapeMismatch`] if the mask extent differs from the image.
///
/// # Example
///
/// ```rust
/// use photog_color::{toroidal_histogram, zero_mask};
/// use photog_core::{Image, Layout};
///
/// let img = Image::filled(4, 4, Layout::Planar, [0.2, 0.4, 0.3]).unwrap();
/// let hist = toroidal_histogram(&img, &zero_mask(&img)).unwrap();
/// assert!((hist.sum() - 1.0).abs() < 1e-6);
/// ```
pub fn toroidal_histogram(image: &Image, mask: &Mask) -> Result<Histogram> {
    toroidal_histogram_partitioned(image, mask, default_partitions())
}

/// [`toroidal_histogram`] with an explicit number of row partitions.
pub fn toroidal_histogram_partitioned(
    image: &Image,
    mask: &Mask,
    partitions: usize,
) -> Result<Histogram> {
    Ok(count(image, mask, partitions)?.normalize())
}

/// [`toroidal_histogram`] into a caller buffer of exactly
/// `BIN_COUNT * BIN_COUNT` values.
///
/// `out` is left untouched when an error is returned.
pub fn toroidal_histogram_into(image: &Image, mask: &Mask, out: &mut [f32]) -> Result<()> {
    check_len(out.len())?;
    count(image, mask, default_partitions())?.normalize_into(out)
}
