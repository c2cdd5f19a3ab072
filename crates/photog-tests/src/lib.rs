//! Integration tests for photog crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the photog crates.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use photog_color::histogram::{BIN_COUNT, bin_index};
    use photog_color::prelude::*;
    use photog_color::{
        average_partitioned, rgb_to_xyz, srgb_to_xyz, toroidal_histogram_partitioned, xyz_to_rgb,
        xyz_to_srgb,
    };
    use photog_primaries::{gamma, rgb_to_xyz_matrix, xyz_to_rgb_matrix};

    const WS: WorkingSpace = WorkingSpace::Srgb;
    const BRADFORD: ChromadaptMethod = ChromadaptMethod::Bradford;

    /// Deterministic test scene with a warm cast.
    fn scene(w: u32, h: u32, layout: Layout) -> Image {
        let pixels: Vec<[f32; 3]> = (0..w * h)
            .map(|i| {
                let t = i as f32;
                [
                    0.35 + 0.3 * (t * 0.618).fract(),
                    0.25 + 0.3 * (t * 0.414).fract(),
                    0.15 + 0.3 * (t * 0.732).fract(),
                ]
            })
            .collect();
        Image::from_pixels(w, h, layout, &pixels).unwrap()
    }

    fn assert_images_close(a: &Image, b: &Image, eps: f32) {
        assert_eq!(a.dimensions(), b.dimensions());
        for (pa, pb) in a.pixels().zip(b.pixels()) {
            for c in 0..3 {
                assert_abs_diff_eq!(pa[c], pb[c], epsilon = eps);
            }
        }
    }

    fn with_threads<T: Send>(n: usize, f: impl FnOnce() -> T + Send) -> T {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .unwrap()
            .install(f)
    }

    /// sRGB -> XYZ -> sRGB in both layouts.
    #[test]
    fn test_srgb_xyz_pipeline() {
        for layout in Layout::ALL {
            let img = scene(16, 9, layout);
            let xyz = srgb_to_xyz(&img);
            assert_eq!(xyz.layout(), layout);
            assert_images_close(&xyz_to_srgb(&xyz), &img, 1e-4);
        }
    }

    /// Gamma RGB -> XYZ -> RGB saturates out-of-range input.
    #[test]
    fn test_rgb_roundtrip_clamps() {
        let pixels = [[-0.5, 0.5, 1.5], [0.0, 1.0, 0.25], [2.0, 0.1, 0.9]];
        let img = Image::from_pixels(3, 1, Layout::Planar, &pixels).unwrap();
        let g = gamma(WS);
        let back = xyz_to_rgb(&rgb_to_xyz(&img, g, &rgb_to_xyz_matrix(WS)), g, &xyz_to_rgb_matrix(WS));

        // a negative sample decodes to NaN, which spreads through the matrix
        // and saturates to 0 in every channel
        assert_eq!(back.pixel(0, 0), [0.0, 0.0, 0.0]);

        for x in 1..3u32 {
            let src = pixels[x as usize];
            let out = back.pixel(x, 0);
            for c in 0..3 {
                assert_abs_diff_eq!(out[c], src[c].min(1.0), epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_constant_gray_scenario() {
        let img = Image::filled(2, 2, Layout::Interleaved, [0.5, 0.5, 0.5]).unwrap();
        assert_eq!(average(&img), Vec3::splat(0.5));
        let out = chromadapt_auto(&img, WS, BRADFORD, Illuminant::D65).unwrap();
        assert_images_close(&out, &img, 1e-3);
    }

    #[test]
    fn test_gray_world_neutralizes_cast() {
        let img = scene(12, 12, Layout::Planar);
        let before = average(&img);
        assert!(before.x > before.y && before.y > before.z);

        let out = chromadapt_auto(&img, WS, BRADFORD, Illuminant::D65).unwrap();
        let after = average(&out);
        let spread_before = before.x - before.z;
        let spread_after = (after.x - after.z).abs();
        assert!(spread_after < spread_before * 0.25, "{before:?} -> {after:?}");
    }

    #[test]
    fn test_adapt_there_and_back() {
        let img = scene(8, 8, Layout::Interleaved);
        let d65 = reference_white(Illuminant::D65);
        let d50 = reference_white(Illuminant::D50);
        let warm = chromadapt_diy(&img, WS, BRADFORD, d65, d50).unwrap();
        let back = chromadapt_diy(&warm, WS, BRADFORD, d50, d65).unwrap();
        assert_images_close(&back, &img, 2e-3);
    }

    #[test]
    fn test_transform_composes() {
        let d65 = reference_white(Illuminant::D65);
        let a = reference_white(Illuminant::A);
        let there = create_transform(BRADFORD, d65, a).unwrap();
        let back = create_transform(BRADFORD, a, d65).unwrap();
        assert!(back.mul_mat(&there).max_abs_diff(&Mat3::IDENTITY) < 1e-3);
    }

    #[test]
    fn test_layout_symmetry() {
        let planar = scene(10, 7, Layout::Planar);
        let interleaved = planar.to_layout(Layout::Interleaved);

        assert_eq!(average(&planar), average(&interleaved));
        assert_eq!(zero_mask(&planar), zero_mask(&interleaved));

        let mask = zero_mask(&planar);
        assert_eq!(
            toroidal_histogram(&planar, &mask).unwrap(),
            toroidal_histogram(&interleaved, &mask).unwrap()
        );

        let a = chromadapt_auto(&planar, WS, BRADFORD, Illuminant::D50).unwrap();
        let b = chromadapt_auto(&interleaved, WS, BRADFORD, Illuminant::D50).unwrap();
        assert_eq!(a.to_layout(Layout::Interleaved), b);
    }

    #[test]
    fn test_partition_counts() {
        let img = scene(21, 17, Layout::Planar);
        let mask = zero_mask(&img);
        let avg = average_partitioned(&img, 1);
        let hist = toroidal_histogram_partitioned(&img, &mask, 1).unwrap();
        for parts in [2, img.height() as usize] {
            let a = average_partitioned(&img, parts);
            assert_abs_diff_eq!(a.x, avg.x, epsilon = 1e-6);
            assert_abs_diff_eq!(a.y, avg.y, epsilon = 1e-6);
            assert_abs_diff_eq!(a.z, avg.z, epsilon = 1e-6);
            assert_eq!(toroidal_histogram_partitioned(&img, &mask, parts).unwrap(), hist);
        }
    }

    #[test]
    fn test_worker_count_invariance() {
        let img = scene(32, 24, Layout::Interleaved);
        let run = || {
            let mask = zero_mask(&img);
            (
                average(&img),
                toroidal_histogram(&img, &mask).unwrap(),
                chromadapt_auto(&img, WS, BRADFORD, Illuminant::D65).unwrap(),
            )
        };
        let (avg1, hist1, out1) = with_threads(1, run);
        let (avg4, hist4, out4) = with_threads(4, run);

        assert_abs_diff_eq!(avg1.x, avg4.x, epsilon = 1e-6);
        assert_abs_diff_eq!(avg1.y, avg4.y, epsilon = 1e-6);
        assert_abs_diff_eq!(avg1.z, avg4.z, epsilon = 1e-6);
        assert_eq!(hist1, hist4);
        assert_images_close(&out1, &out4, 1e-5);
    }

    #[test]
    fn test_histogram_tracks_chroma() {
        // G/R = 2 puts u at ln 2, B = G puts v at 0
        let img = Image::filled(4, 4, Layout::Planar, [0.25, 0.5, 0.5]).unwrap();
        let hist = toroidal_histogram(&img, &zero_mask(&img)).unwrap();
        let (u, v, peak) = hist.peak();
        assert_eq!((u, v), (bin_index(2f32.ln()), bin_index(0.0)));
        assert_eq!((u, v), (32, 10));
        assert_abs_diff_eq!(peak, 1.0);
    }

    #[test]
    fn test_histogram_wraps_extreme_chroma() {
        let r = 0.05f32;
        let g = r * 2.5f32.exp();
        let img = Image::filled(2, 2, Layout::Interleaved, [r, g, g]).unwrap();
        let hist = toroidal_histogram(&img, &zero_mask(&img)).unwrap();
        // u = 2.5 is bin 90, folded onto 26
        assert_eq!(hist.peak().0, 90 % BIN_COUNT);
        assert_abs_diff_eq!(hist.sum(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_errors_surface_before_output() {
        let img = Image::filled(2, 2, Layout::Planar, [0.5; 3]).unwrap();
        let mask = Mask::filled(3, 3, true).unwrap();
        assert!(toroidal_histogram(&img, &mask).unwrap_err().is_shape_error());

        let black = Image::filled(2, 2, Layout::Planar, [0.0; 3]).unwrap();
        assert!(
            chromadapt_auto(&black, WS, BRADFORD, Illuminant::D65)
                .unwrap_err()
                .is_degenerate()
        );

        let err = "P3".parse::<WorkingSpace>().unwrap_err();
        assert!(err.is_configuration());
        assert!("D93".parse::<Illuminant>().unwrap_err().is_configuration());
        assert!("cat16".parse::<ChromadaptMethod>().unwrap_err().is_configuration());
    }
}
