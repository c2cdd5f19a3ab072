//! Benchmark fixtures for photog.
//!
//! Run the benchmarks with: `cargo bench -p photog-bench`

use photog_core::{Image, Layout};

/// Deterministic pseudo-random RGB image in [0.05, 0.95).
pub fn scene(width: u32, height: u32, layout: Layout) -> Image {
    let pixels: Vec<[f32; 3]> = (0..width * height)
        .map(|i| {
            let t = i as f32;
            [
                0.05 + 0.9 * (t * 0.618_034).fract(),
                0.05 + 0.9 * (t * 0.414_214).fract(),
                0.05 + 0.9 * (t * 0.732_051).fract(),
            ]
        })
        .collect();
    Image::from_pixels(width, height, layout, &pixels).unwrap_or_else(|_| {
        panic!("{width}x{height} is not a valid benchmark extent")
    })
}
