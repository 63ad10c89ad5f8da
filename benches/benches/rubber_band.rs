// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use trellis_geometry::{ConnectionId, JointId, NodeId, PointerEvent};
use trellis_selection::{Selection, SelectionCreator, SelectionModel, SelectionView};

struct Grid {
    nodes: Vec<(NodeId, Rect)>,
    joints: Vec<(JointId, Point)>,
    connections: Vec<ConnectionId>,
}

impl Grid {
    fn new(side: u32) -> Self {
        let mut nodes = Vec::new();
        let mut joints = Vec::new();
        let mut connections = Vec::new();
        for row in 0..side {
            for col in 0..side {
                let id = row * side + col;
                let x = f64::from(col) * 100.0;
                let y = f64::from(row) * 80.0;
                nodes.push((NodeId(id), Rect::new(x, y, x + 60.0, y + 40.0)));
                joints.push((JointId(id), Point::new(x + 80.0, y + 20.0)));
                connections.push(ConnectionId(id));
            }
        }
        Self {
            nodes,
            joints,
            connections,
        }
    }
}

impl SelectionModel for Grid {
    fn nodes(&self) -> impl Iterator<Item = (NodeId, Rect)> {
        self.nodes.iter().copied()
    }

    fn joints(&self) -> impl Iterator<Item = (JointId, Point)> {
        self.joints.iter().copied()
    }

    fn connections(&self) -> impl Iterator<Item = ConnectionId> {
        self.connections.iter().copied()
    }
}

struct View;

impl SelectionView for View {
    fn cursor_position(&self, event: &PointerEvent) -> Point {
        event.scene_position
    }

    fn scale(&self) -> f64 {
        1.0
    }

    fn draw_selection_box(&mut self, _rect: Rect) {}

    fn hide_selection_box(&mut self) {}
}

fn bench_drag_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/rubber_band_tick");

    for side in [16u32, 64, 128] {
        let grid = Grid::new(side);
        let items = u64::from(side * side) * 3;
        group.throughput(Throughput::Elements(items));

        // Alternate between two band sizes so every tick changes membership.
        group.bench_with_input(BenchmarkId::new("grow_shrink", side), &grid, |b, grid| {
            let mut selection = Selection::new();
            let mut creator = SelectionCreator::default();
            let mut view = View;
            let press = PointerEvent::primary_press(Point::ZERO);
            creator.on_view_pressed(&mut selection, &view, &press);
            let extent = f64::from(side) * 100.0;
            let ends = [Point::new(extent / 2.0, extent / 2.0), Point::new(extent, extent)];
            let mut tick = 0_usize;
            b.iter(|| {
                let end = ends[tick % 2];
                tick += 1;
                creator.on_view_dragged(
                    &mut selection,
                    grid,
                    &mut view,
                    &PointerEvent::primary_drag(end),
                );
                black_box(selection.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag_tick);
criterion_main!(benches);
