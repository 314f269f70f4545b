//! Benchmark for framebuffer operations.

#![allow(clippy::unwrap_used, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rasterline::color::Rgba;
use rasterline::framebuffer::Framebuffer;
use rasterline::view::ViewTransform;

fn framebuffer_clear_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_clear");

    for (width, height) in [(128, 128), (800, 600), (1920, 1080)] {
        let mut fb = Framebuffer::new(width, height).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| {
                b.iter(|| {
                    fb.clear(black_box(Rgba::RED));
                });
            },
        );
    }

    group.finish();
}

fn framebuffer_present_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("framebuffer_present");

    let mut world = Framebuffer::new(128, 128).unwrap();
    world.clear(Rgba::BLUE);

    for scale in [2, 4, 8] {
        let view = ViewTransform::new(scale, 0, 0).unwrap();
        let size = 128 * scale as u32;
        let mut screen = Framebuffer::new(size, size).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(scale), &view, |b, view| {
            b.iter(|| {
                world.present_scaled(black_box(view), &mut screen);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, framebuffer_clear_benchmark, framebuffer_present_benchmark);
criterion_main!(benches);
