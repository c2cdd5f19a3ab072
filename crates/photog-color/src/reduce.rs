//! Whole-image reductions: channel average and zero mask.
//!
//! The average is computed from [`ChannelSums`] partials, one per disjoint
//! range of rows. Partials are evaluated on the rayon pool, collected in row
//! order and merged sequentially, so the result does not depend on how the
//! work was scheduled.

use std::ops::Range;

use photog_core::{Image, Mask};
use photog_math::{KahanSum, Vec3};
use rayon::prelude::*;
use tracing::trace;

/// Compensated per-channel sums over a set of pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelSums {
    sums: [KahanSum; 3],
    count: u64,
}

impl ChannelSums {
    /// Empty partial.
    pub const fn new() -> Self {
        Self {
            sums: [KahanSum::new(); 3],
            count: 0,
        }
    }

    /// Sums the pixels of `rows`.
    pub fn over_rows(image: &Image, rows: Range<u32>) -> Self {
        let mut acc = Self::new();
        for px in image.row_pixels(rows) {
            acc.push(px);
        }
        acc
    }

    /// Adds one pixel.
    #[inline]
    pub fn push(&mut self, px: [f32; 3]) {
        for (sum, v) in self.sums.iter_mut().zip(px) {
            sum.add(v as f64);
        }
        self.count += 1;
    }

    /// Folds another partial into this one.
    pub fn merge(&mut self, other: &ChannelSums) {
        for (sum, o) in self.sums.iter_mut().zip(&other.sums) {
            sum.merge(o);
        }
        self.count += other.count;
    }

    /// Number of pixels summed.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Per-channel mean, or zero if nothing was summed.
    pub fn mean(&self) -> Vec3 {
        if self.count == 0 {
            return Vec3::ZERO;
        }
        let n = self.count as f64;
        Vec3::new(
            (self.sums[0].value() / n) as f32,
            (self.sums[1].value() / n) as f32,
            (self.sums[2].value() / n) as f32,
        )
    }
}

/// Splits `0..height` into at most `partitions` contiguous, non-empty row
/// ranges of near-equal size.
pub fn row_ranges(height: u32, partitions: usize) -> Vec<Range<u32>> {
    let parts = (partitions.max(1) as u32).min(height.max(1));
    let base = height / parts;
    let extra = height % parts;
    let mut ranges = Vec::with_capacity(parts as usize);
    let mut start = 0;
    for i in 0..parts {
        let len = base + u32::from(i < extra);
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}

/// Default partition count: one per worker thread.
pub(crate) fn default_partitions() -> usize {
    rayon::current_num_threads()
}

/// Per-channel mean of every pixel, accumulated with compensation in `f64`.
///
/// # Example
///
/// ```rust
/// use photog_color::average;
/// use photog_core::{Image, Layout};
///
/// let img = Image::filled(2, 2, Layout::Planar, [0.5, 0.5, 0.5]).unwrap();
/// assert_eq!(average(&img).to_array(), [0.5, 0.5, 0.5]);
/// ```
pub fn average(image: &Image) -> Vec3 {
    average_partitioned(image, default_partitions())
}

/// [`average`] with an explicit number of row partitions.
pub fn average_partitioned(image: &Image, partitions: usize) -> Vec3 {
    trace!(
        width = image.width(),
        height = image.height(),
        layout = %image.layout(),
        partitions,
        "average"
    );
    let partials: Vec<ChannelSums> = row_ranges(image.height(), partitions)
        .into_par_iter()
        .map(|rows| ChannelSums::over_rows(image, rows))
        .collect();

    let mut total = ChannelSums::new();
    for part in &partials {
        total.merge(part);
    }
    total.mean()
}

/// Marks pixels whose three channels are all strictly positive.
pub fn zero_mask(image: &Image) -> Mask {
    trace!(width = image.width(), height = image.height(), layout = %image.layout(), "zero_mask");
    Mask::from_image(image, |px| px.iter().all(|&c| c > 0.0))
}
