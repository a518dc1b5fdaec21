// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use understory_autofit::{AutoFitViewport, RecordingSurface, ResizeDispatcher, compute_fit};

const LOCAL: Size = Size::new(800.0, 600.0);

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// A window-like size between 1x1 and 4096x4096.
    fn next_size(&mut self) -> Size {
        let w = f64::from(self.next_u32() % 4096 + 1);
        let h = f64::from(self.next_u32() % 4096 + 1);
        Size::new(w, h)
    }
}

fn bench_compute_fit(c: &mut Criterion) {
    let mut rng = Lcg::new(0x5eed);
    let sizes: Vec<Size> = (0..1_024).map(|_| rng.next_size()).collect();

    let mut group = c.benchmark_group("autofit/compute_fit");
    group.throughput(Throughput::Elements(sizes.len() as u64));
    group.bench_function("random_windows", |b| {
        b.iter(|| {
            for &size in &sizes {
                black_box(compute_fit(black_box(size), LOCAL));
            }
        });
    });
    group.finish();
}

fn bench_recalculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("autofit/recalculate");

    // Hypothesis: idle frames cost little more than the two hook calls, while
    // resize frames are dominated by the fit plus surface bookkeeping.
    for resizes_per_frame in [0usize, 1, 8] {
        group.bench_with_input(
            BenchmarkId::new("frame", resizes_per_frame),
            &resizes_per_frame,
            |b, &n| {
                let mut rng = Lcg::new(7);
                b.iter_batched(
                    || {
                        let mut viewport = AutoFitViewport::new(LOCAL).unwrap();
                        let mut surface = RecordingSurface::new(Size::new(1280.0, 720.0));
                        let mut dispatcher = ResizeDispatcher::new();
                        viewport.setup_from_surface(&mut surface, &mut dispatcher);
                        viewport.recalculate(&mut surface);
                        let sizes: Vec<Size> = (0..n).map(|_| rng.next_size()).collect();
                        (viewport, surface, dispatcher, sizes)
                    },
                    |(mut viewport, mut surface, mut dispatcher, sizes)| {
                        for size in sizes {
                            dispatcher.dispatch(size);
                        }
                        black_box(viewport.recalculate(&mut surface));
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_mapping(c: &mut Criterion) {
    let mut viewport = AutoFitViewport::new(LOCAL).unwrap();
    let mut surface = RecordingSurface::new(Size::new(1920.0, 1080.0));
    let mut dispatcher = ResizeDispatcher::new();
    viewport.setup_from_surface(&mut surface, &mut dispatcher);
    viewport.recalculate(&mut surface);

    let mut rng = Lcg::new(42);
    let points: Vec<Point> = (0..1_024)
        .map(|_| {
            Point::new(
                f64::from(rng.next_u32() % 1920),
                f64::from(rng.next_u32() % 1080),
            )
        })
        .collect();

    let mut group = c.benchmark_group("autofit/mapping");
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("to_local", |b| {
        b.iter(|| {
            for &p in &points {
                black_box(viewport.to_local(black_box(p)));
            }
        });
    });
    group.bench_function("to_global", |b| {
        b.iter(|| {
            for &p in &points {
                black_box(viewport.to_global(black_box(p)));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_compute_fit, bench_recalculate, bench_mapping);
criterion_main!(benches);
