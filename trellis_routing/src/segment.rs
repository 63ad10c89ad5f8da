// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path building with crossing decorations.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Arc, BezPath, Point, Vec2};
use trellis_geometry::{EditorProperties, move_off_pixel};

use crate::intersection::Intersections;

/// Half the length of the break left where another connection crosses.
pub const GAP_HALF_WIDTH: f64 = 5.0;

/// Radius of the semicircle drawn where this connection hops over another.
pub const DETOUR_RADIUS: f64 = 5.0;

/// Flattening tolerance for detour arcs.
const ARC_TOLERANCE: f64 = 0.1;

/// How crossings are drawn. One style applies to a whole diagram.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CrossingStyle {
    /// Leave a small break where a connection painted earlier crosses, so it appears
    /// to pass over this one.
    #[default]
    Gap,
    /// Hop over every crossing connection with a small semicircle.
    Detour,
}

impl CrossingStyle {
    /// Reads the style from the editor's custom properties.
    #[must_use]
    pub fn from_properties(properties: &EditorProperties) -> Self {
        if properties.show_detours() {
            Self::Detour
        } else {
            Self::Gap
        }
    }

    /// Whether crossings should be searched only among connections painted earlier.
    #[must_use]
    pub fn behind_only(self) -> bool {
        matches!(self, Self::Gap)
    }

    fn half_width(self) -> f64 {
        match self {
            Self::Gap => GAP_HALF_WIDTH,
            Self::Detour => DETOUR_RADIUS,
        }
    }
}

/// Builds the path through `points`, decorating each crossing in `intersections`.
///
/// Every point is moved off the pixel center first so that 1px strokes stay crisp.
/// Each segment is laid down from start to end, alternating straight runs with a
/// gap or a detour at each crossing offset. A crossing too close to either end of
/// its segment, or to the previous decoration, is drawn straight through.
#[must_use]
pub fn build_connection_path(
    points: &[Point],
    intersections: &Intersections,
    style: CrossingStyle,
) -> BezPath {
    let mut path = BezPath::new();
    let Some(&first) = points.first() else {
        return path;
    };
    path.move_to(pixel_aligned(first));

    for (index, pair) in points.windows(2).enumerate() {
        let start = pixel_aligned(pair[0]);
        let end = pixel_aligned(pair[1]);
        let offsets = intersections.get(&index).map_or(&[][..], |o| o.as_slice());
        append_segment(&mut path, start, end, offsets, style);
    }
    path
}

fn pixel_aligned(p: Point) -> Point {
    Point::new(move_off_pixel(p.x), move_off_pixel(p.y))
}

fn append_segment(
    path: &mut BezPath,
    start: Point,
    end: Point,
    offsets: &[f64],
    style: CrossingStyle,
) {
    let delta = end - start;
    let length = delta.hypot();
    if offsets.is_empty() || length == 0.0 {
        path.line_to(end);
        return;
    }

    let direction = delta / length;
    let half = style.half_width();
    let mut cursor = 0.0;

    for &offset in offsets {
        if offset - half < cursor || offset + half > length {
            continue;
        }
        let before = start + direction * (offset - half);
        let after = start + direction * (offset + half);
        path.line_to(before);
        match style {
            CrossingStyle::Gap => path.move_to(after),
            CrossingStyle::Detour => {
                let arc = Arc {
                    center: start + direction * offset,
                    radii: Vec2::new(half, half),
                    start_angle: (-direction).atan2(),
                    sweep_angle: detour_sweep(direction),
                    x_rotation: 0.0,
                };
                path.extend(arc.append_iter(ARC_TOLERANCE));
            }
        }
        cursor = offset + half;
    }
    path.line_to(end);
}

/// Sweep that bends a detour upward on horizontal runs and leftward on vertical ones.
fn detour_sweep(direction: Vec2) -> f64 {
    let horizontal = direction.x.abs() >= direction.y.abs();
    match (horizontal, direction.x > 0.0, direction.y > 0.0) {
        (true, true, _) | (false, _, false) => PI,
        (true, false, _) | (false, _, true) => -PI,
    }
}
