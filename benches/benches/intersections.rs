// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use trellis_geometry::ConnectionId;
use trellis_routing::{
    CrossingStyle, IntersectionFinder, RectangularConnection, Side, build_connection_path,
};

/// A grid of staircase connections: each one crosses roughly every other.
fn staircases(count: usize) -> Vec<Vec<Point>> {
    (0..count)
        .map(|i| {
            let o = i as f64 * 7.0;
            vec![
                Point::new(o, 0.0),
                Point::new(o + 200.0, 0.0),
                Point::new(o + 200.0, 150.0 + o),
                Point::new(o + 400.0, 150.0 + o),
                Point::new(o + 400.0, 400.0),
            ]
        })
        .collect()
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing/find");

    for count in [16usize, 64, 256] {
        let lines = staircases(count);
        let all: Vec<(ConnectionId, &[Point])> = lines
            .iter()
            .enumerate()
            .map(|(i, points)| (ConnectionId(i as u32), points.as_slice()))
            .collect();
        let finder = IntersectionFinder::new(ConnectionId((count / 2) as u32));
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("behind_only", count), &all, |b, all| {
            b.iter(|| black_box(finder.find(black_box(all), true)));
        });
        group.bench_with_input(BenchmarkId::new("all", count), &all, |b, all| {
            b.iter(|| black_box(finder.find(black_box(all), false)));
        });
    }

    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing/draw");

    let lines = staircases(128);
    let all: Vec<(ConnectionId, &[Point])> = lines
        .iter()
        .enumerate()
        .map(|(i, points)| (ConnectionId(i as u32), points.as_slice()))
        .collect();
    let id = ConnectionId(64);
    let own = lines[64].as_slice();

    // Steady state: nothing changed, so only the crossing search runs.
    group.bench_function("cached", |b| {
        let mut conn = RectangularConnection::new(id, Side::Right, CrossingStyle::Detour);
        let _ = conn.draw(own, &all);
        b.iter(|| black_box(conn.draw(black_box(own), &all)));
    });

    let intersections = IntersectionFinder::new(id).find(&all, false);
    for style in [CrossingStyle::Gap, CrossingStyle::Detour] {
        group.bench_function(BenchmarkId::new("build_path", format!("{style:?}")), |b| {
            b.iter(|| black_box(build_connection_path(black_box(own), &intersections, style)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find, bench_draw);
criterion_main!(benches);
