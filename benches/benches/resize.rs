// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use trellis_geometry::EditorProperties;
use trellis_resize::{PointerSample, ResizableBox, ResizeContext, ResizeEngine, classify};

fn bench_classify(c: &mut Criterion) {
    let size = Size::new(200.0, 120.0);
    let points: Vec<Point> = (0..=200)
        .step_by(5)
        .flat_map(|x| (0..=120).step_by(5).map(move |y| Point::new(f64::from(x), f64::from(y))))
        .collect();

    c.bench_function("resize/classify", |b| {
        b.iter(|| {
            for &p in &points {
                black_box(classify(black_box(p), size, 8.0, true));
            }
        });
    });
}

fn bench_drag_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize/drag_tick");
    let props = EditorProperties::default().with_snap_to_grid(true, 12.0);

    for (name, ctx) in [
        ("free", ResizeContext::new(Size::new(2_000.0, 2_000.0))),
        (
            "snapped",
            ResizeContext::new(Size::new(2_000.0, 2_000.0)).with_properties(&props),
        ),
    ] {
        group.bench_function(name, |b| {
            let mut node = ResizableBox::new(Rect::new(100.0, 100.0, 300.0, 220.0));
            let mut engine = ResizeEngine::new();
            let press = PointerSample {
                local: Point::new(198.0, 118.0),
                container: Point::new(298.0, 218.0),
                primary_down: true,
            };
            engine.on_press(&node, press, &ctx);
            let mut step = 0.0_f64;
            b.iter(|| {
                step = (step + 1.0) % 50.0;
                let local = Point::new(198.0 + step, 118.0 + step);
                let sample = PointerSample {
                    local,
                    container: local + Point::new(100.0, 100.0).to_vec2(),
                    primary_down: true,
                };
                black_box(engine.on_drag(&mut node, sample, &ctx));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_drag_tick);
criterion_main!(benches);
