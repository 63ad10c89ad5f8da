// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer coordinate conversion.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point};

/// Maps a scene-space pointer location into the local space of a reference node.
///
/// `local_to_scene` is the reference node's accumulated transform. A singular
/// transform (for example a zero scale while a view is collapsing) cannot be
/// inverted; the scene point is returned unchanged in that case.
///
/// Hosts use this to fill in `PointerSample::local` for the resize engine from the
/// raw scene position of a pointer event.
#[must_use]
pub fn cursor_position(scene: Point, local_to_scene: Affine) -> Point {
    if local_to_scene.determinant().abs() < f64::EPSILON {
        return scene;
    }
    local_to_scene.inverse() * scene
}

/// Converts a view-space cursor into content space by dividing out the view zoom.
///
/// A non-positive or non-finite `scale` is treated as 100%.
#[must_use]
pub fn content_position(cursor: Point, scale: f64) -> Point {
    if !(scale.is_finite() && scale > 0.0) {
        return cursor;
    }
    Point::new(cursor.x / scale, cursor.y / scale)
}
