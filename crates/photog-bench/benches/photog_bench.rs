//! Benchmarks for photog operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use photog_bench::scene;
use photog_color::{
    average, chromadapt_auto, create_transform, rgb_to_xyz, srgb_to_linear, toroidal_histogram,
    zero_mask,
};
use photog_core::Layout;
use photog_primaries::{
    ChromadaptMethod, Illuminant, WorkingSpace, gamma, reference_white, rgb_to_xyz_matrix,
};
use photog_transfer::{linear_to_rgb, linear_to_srgb, rgb_to_linear, srgb};

/// Benchmark scalar transfer functions.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f32> = (0..*size).map(|i| i as f32 / *size as f32).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_to_linear", size), &values, |b, v| {
            b.iter(|| {
                v.iter().map(|&x| srgb::srgb_to_linear(black_box(x))).collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("linear_to_srgb", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| linear_to_srgb(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("gamma_2.2", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| linear_to_rgb(rgb_to_linear(black_box(x), 2.2), 2.2))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark image-wide conversions in both layouts.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let ws = WorkingSpace::Srgb;
    let m = rgb_to_xyz_matrix(ws);

    for layout in Layout::ALL {
        let img = scene(512, 512, layout);
        group.throughput(Throughput::Elements(img.pixel_count() as u64));

        group.bench_with_input(BenchmarkId::new("srgb_to_linear", layout), &img, |b, img| {
            b.iter(|| srgb_to_linear(black_box(img)))
        });

        group.bench_with_input(BenchmarkId::new("rgb_to_xyz", layout), &img, |b, img| {
            b.iter(|| rgb_to_xyz(black_box(img), gamma(ws), &m))
        });
    }

    group.finish();
}

/// Benchmark reductions.
fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for size in [256u32, 1024].iter() {
        let img = scene(*size, *size, Layout::Interleaved);
        let mask = zero_mask(&img);
        group.throughput(Throughput::Elements(img.pixel_count() as u64));

        group.bench_with_input(BenchmarkId::new("average", size), &img, |b, img| {
            b.iter(|| average(black_box(img)))
        });

        group.bench_with_input(BenchmarkId::new("zero_mask", size), &img, |b, img| {
            b.iter(|| zero_mask(black_box(img)))
        });

        group.bench_with_input(BenchmarkId::new("toroidal_histogram", size), &img, |b, img| {
            b.iter(|| toroidal_histogram(black_box(img), &mask))
        });
    }

    group.finish();
}

/// Benchmark chromatic adaptation.
fn bench_chromadapt(c: &mut Criterion) {
    let mut group = c.benchmark_group("chromadapt");
    let method = ChromadaptMethod::Bradford;

    group.bench_function("create_transform", |b| {
        let src = reference_white(Illuminant::D65);
        let dst = reference_white(Illuminant::D50);
        b.iter(|| create_transform(method, black_box(src), black_box(dst)))
    });

    let img = scene(512, 512, Layout::Planar);
    group.throughput(Throughput::Elements(img.pixel_count() as u64));
    group.bench_function("auto_512", |b| {
        b.iter(|| chromadapt_auto(black_box(&img), WorkingSpace::Srgb, method, Illuminant::D65))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_transfer,
    bench_convert,
    bench_reduce,
    bench_chromadapt,
);

criterion_main!(benches);
