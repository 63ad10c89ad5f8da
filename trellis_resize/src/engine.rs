// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize gesture state machine and per-edge resize arithmetic.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};
use trellis_geometry::{DEFAULT_BOUND_VALUE, EditorProperties, round_to_grid};

use crate::region::{Edges, MouseRegion, ResizeCursor};
use crate::resizable::ResizableBox;

/// Extent used in place of the parent size when no [`EditorProperties`] are supplied.
pub const ABSOLUTE_MAX_EXTENT: f64 = f64::MAX;

/// Environment of a resize event, supplied by the host toolkit.
#[derive(Clone, Copy, Debug)]
pub struct ResizeContext<'a> {
    /// Size of the parent's layout bounds, or `None` when the parent is not a
    /// layout container. Every gesture step is a no-op without one.
    pub parent: Option<Size>,
    /// Local-to-scene scale factors of the box (`mxx`, `myy`), used to convert
    /// pointer displacement into local units in zoomed views.
    pub scale: Vec2,
    /// Whether the base drag behavior considers a drag gesture active.
    pub drag_gesture_active: bool,
    /// Editor configuration; `None` disables snapping and bounds.
    pub properties: Option<&'a EditorProperties>,
}

impl<'a> ResizeContext<'a> {
    /// A context for a box inside a container of size `parent`, at 100% zoom,
    /// with an active drag gesture and no properties.
    #[must_use]
    pub fn new(parent: Size) -> Self {
        Self {
            parent: Some(parent),
            scale: Vec2::new(1.0, 1.0),
            drag_gesture_active: true,
            properties: None,
        }
    }

    /// Returns this context with a different scale.
    #[must_use]
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Returns this context with editor properties.
    #[must_use]
    pub fn with_properties(mut self, properties: &'a EditorProperties) -> Self {
        self.properties = Some(properties);
        self
    }

    fn snap_spacing(&self) -> Option<f64> {
        self.properties
            .filter(|p| p.snap_to_grid)
            .map(|p| p.grid_spacing)
    }
}

/// A pointer position sampled for the resize engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Position in the box's local coordinates (for region classification).
    pub local: Point,
    /// Position in the parent container's coordinates (for displacement).
    pub container: Point,
    /// Whether the primary button is held.
    pub primary_down: bool,
}

/// What a drag step did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    /// The gesture started inside the box: the caller should move it.
    Move,
    /// The box was resized; holds the committed bounds.
    Resized(Rect),
    /// Nothing changed this frame.
    Ignored,
}

/// Values captured at press time and discarded at release.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ResizeGesture {
    region: MouseRegion,
    press_pointer: Point,
    last_layout: Point,
    last_size: Size,
}

/// Turns pointer events on one box into resize decisions and cursor hints.
///
/// One engine serves one box. It holds no geometry between gestures apart from the
/// last hover classification.
#[derive(Clone, Debug, Default)]
pub struct ResizeEngine {
    gesture: Option<ResizeGesture>,
    cursor: Option<ResizeCursor>,
    in_position_for_resize: bool,
}

impl ResizeEngine {
    /// Creates an idle engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor the host should display over the box, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<ResizeCursor> {
        self.cursor
    }

    /// Returns `true` if the last hover put the pointer on a resize border.
    #[must_use]
    pub fn is_in_position_for_resize(&self) -> bool {
        self.in_position_for_resize
    }

    /// Region captured by the current gesture, if one is in progress.
    #[must_use]
    pub fn gesture_region(&self) -> Option<MouseRegion> {
        self.gesture.map(|g| g.region)
    }

    /// Starts a gesture.
    ///
    /// Returns `true` if a gesture was recorded. Nothing is recorded when the parent
    /// is not a container, the primary button is up, the box is not editable, or no
    /// drag gesture is active.
    pub fn on_press(
        &mut self,
        target: &ResizableBox,
        pointer: PointerSample,
        ctx: &ResizeContext<'_>,
    ) -> bool {
        if ctx.parent.is_none() {
            return false;
        }
        if !pointer.primary_down || !target.is_editable() || !ctx.drag_gesture_active {
            self.cursor = None;
            return false;
        }

        let region = target.region_at(pointer.local);
        tracing::trace!(?region, "resize gesture pressed");
        self.gesture = Some(ResizeGesture {
            region,
            press_pointer: pointer.container,
            last_layout: target.layout,
            last_size: target.size,
        });
        true
    }

    /// Advances the gesture to `pointer`.
    ///
    /// Border gestures write the new layout position and size into `target` before
    /// returning, so diagonal resizes commit both axes together.
    pub fn on_drag(
        &mut self,
        target: &mut ResizableBox,
        pointer: PointerSample,
        ctx: &ResizeContext<'_>,
    ) -> DragOutcome {
        let Some(parent) = ctx.parent else {
            return DragOutcome::Ignored;
        };
        if !pointer.primary_down || !target.is_editable() || !ctx.drag_gesture_active {
            self.cursor = None;
            return DragOutcome::Ignored;
        }
        let Some(gesture) = self.gesture else {
            return DragOutcome::Ignored;
        };

        match gesture.region {
            MouseRegion::Inside => DragOutcome::Move,
            MouseRegion::Outside => DragOutcome::Ignored,
            region => {
                let bounds = resize(&gesture, target, pointer.container, parent, ctx);
                tracing::trace!(?region, ?bounds, "resized");
                target.layout = bounds.origin();
                target.size = bounds.size();
                DragOutcome::Resized(bounds)
            }
        }
    }

    /// Ends the gesture and restores the hover cursor for the release point.
    pub fn on_release(
        &mut self,
        target: &ResizableBox,
        pointer: PointerSample,
    ) -> Option<ResizeCursor> {
        if self.gesture.take().is_some() {
            tracing::trace!("resize gesture released");
        }
        self.on_hover(target, pointer.local, pointer.primary_down)
    }

    /// Updates the cursor for a pointer move that is not part of a drag.
    ///
    /// While the primary button is held, or when the box is not editable, the current
    /// cursor is kept.
    pub fn on_hover(
        &mut self,
        target: &ResizableBox,
        local: Point,
        primary_down: bool,
    ) -> Option<ResizeCursor> {
        if primary_down || !target.is_editable() {
            return self.cursor;
        }
        let region = target.region_at(local);
        self.in_position_for_resize = region.is_resize();
        self.cursor = region.cursor();
        self.cursor
    }

    /// Handles the pointer leaving the box.
    ///
    /// The cursor survives while the primary button is held so a resize that
    /// overshoots the border keeps its affordance.
    pub fn on_exit(&mut self, primary_down: bool) {
        if !primary_down {
            self.cursor = None;
            self.in_position_for_resize = false;
        }
    }
}

fn resize(
    gesture: &ResizeGesture,
    target: &ResizableBox,
    pointer: Point,
    parent: Size,
    ctx: &ResizeContext<'_>,
) -> Rect {
    let delta = pointer - gesture.press_pointer;
    let dx = delta.x / non_zero(ctx.scale.x);
    let dy = delta.y / non_zero(ctx.scale.y);
    let min_width = target.min_size.width.max(0.0);
    let min_height = target.min_size.height.max(0.0);
    let snap = ctx.snap_spacing();
    let edges = gesture.region.edges();

    let mut layout = target.layout;
    let mut size = target.size;

    if edges.contains(Edges::NORTH) {
        let (y, height) = resize_leading(
            gesture.last_layout.y,
            gesture.last_size.height,
            dy,
            min_height,
            snap,
            ctx.properties.map(|p| p.north_bound),
        );
        layout.y = y;
        size.height = height;
    }
    if edges.contains(Edges::SOUTH) {
        let ceiling =
            available_extent(parent.height, layout.y, ctx.properties.map(|p| p.south_bound));
        size.height = resize_trailing(
            gesture.last_layout.y,
            gesture.last_size.height,
            dy,
            min_height,
            snap,
            ceiling,
        );
    }
    if edges.contains(Edges::EAST) {
        let ceiling =
            available_extent(parent.width, layout.x, ctx.properties.map(|p| p.east_bound));
        size.width = resize_trailing(
            gesture.last_layout.x,
            gesture.last_size.width,
            dx,
            min_width,
            snap,
            ceiling,
        );
    }
    if edges.contains(Edges::WEST) {
        let (x, width) = resize_leading(
            gesture.last_layout.x,
            gesture.last_size.width,
            dx,
            min_width,
            snap,
            ctx.properties.map(|p| p.west_bound),
        );
        layout.x = x;
        size.width = width;
    }

    Rect::from_origin_size(layout, size)
}

fn non_zero(scale: f64) -> f64 {
    if scale.abs() < f64::EPSILON { 1.0 } else { scale }
}

/// Space left for a box growing toward the far edge of its parent.
///
/// `bound` is `None` when no properties are configured, in which case the parent
/// size is replaced by [`ABSOLUTE_MAX_EXTENT`] and the default margin applies.
fn available_extent(parent_extent: f64, origin: f64, bound: Option<f64>) -> f64 {
    match bound {
        Some(margin) => parent_extent - origin - margin,
        None => ABSOLUTE_MAX_EXTENT - origin - DEFAULT_BOUND_VALUE,
    }
}

/// Resizes the edge at the start of an axis (north or west), keeping the far edge fixed.
///
/// Returns the new origin and extent.
fn resize_leading(
    last_origin: f64,
    last_extent: f64,
    delta: f64,
    min_extent: f64,
    snap: Option<f64>,
    bound: Option<f64>,
) -> (f64, f64) {
    let far_edge = last_origin + last_extent;
    let mut origin = last_origin + delta;
    let mut extent = last_extent - delta;

    match snap {
        Some(spacing) => {
            // Border sits exactly on the grid line.
            let snapped = round_to_grid(origin, spacing) - 1.0;
            extent = extent - snapped + origin;
            origin = snapped;
        }
        None => {
            let rounded = origin.round();
            extent = (extent - rounded + origin).round();
            origin = rounded;
        }
    }

    if let Some(bound) = bound
        && origin < bound
    {
        origin = bound;
        extent = far_edge - bound;
    }
    if extent < min_extent {
        origin = far_edge - min_extent;
        extent = min_extent;
    }

    (origin, extent)
}

/// Resizes the edge at the end of an axis (south or east); the origin never moves.
fn resize_trailing(
    last_origin: f64,
    last_extent: f64,
    delta: f64,
    min_extent: f64,
    snap: Option<f64>,
    ceiling: f64,
) -> f64 {
    let mut extent = last_extent + delta;

    extent = match snap {
        Some(spacing) => round_to_grid(extent + last_origin, spacing) - last_origin,
        None => extent.round(),
    };

    if extent > ceiling {
        extent = ceiling;
    }
    extent.max(min_extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zero_delta_is_identity() {
        assert_eq!(resize_leading(10.0, 50.0, 0.0, 0.0, None, None), (10.0, 50.0));
        assert_eq!(
            resize_leading(10.0, 50.0, 0.0, 0.0, None, Some(0.0)),
            (10.0, 50.0)
        );
    }

    #[test]
    fn leading_rounds_to_pixels() {
        let (origin, extent) = resize_leading(10.0, 50.0, -4.6, 0.0, None, None);
        assert_eq!(origin, 5.0);
        assert_eq!(extent, 55.0);
    }

    #[test]
    fn leading_snaps_border_onto_grid_line() {
        let (origin, extent) = resize_leading(10.0, 50.0, 13.0, 0.0, Some(10.0), None);
        // 23 snaps to 20, border at 19; far edge stays at 60.
        assert_eq!(origin, 19.0);
        assert_eq!(origin + extent, 60.0);
    }

    #[test]
    fn leading_clamps_to_bound_then_minimum() {
        assert_eq!(
            resize_leading(20.0, 40.0, -30.0, 0.0, None, Some(15.0)),
            (15.0, 45.0)
        );
        assert_eq!(
            resize_leading(20.0, 40.0, 35.0, 10.0, None, Some(15.0)),
            (50.0, 10.0)
        );
    }

    #[test]
    fn trailing_clamps_to_ceiling_and_minimum() {
        assert_eq!(resize_trailing(10.0, 50.0, 500.0, 0.0, None, 200.0), 200.0);
        assert_eq!(resize_trailing(10.0, 50.0, -80.0, 20.0, None, 200.0), 20.0);
        assert_eq!(resize_trailing(10.0, 50.0, 0.4, 0.0, None, 200.0), 50.0);
    }

    #[test]
    fn trailing_snaps_far_edge_onto_grid() {
        // Far edge 10 + 50 + 7 = 67 snaps to 70.
        assert_eq!(resize_trailing(10.0, 50.0, 7.0, 0.0, Some(10.0), 200.0), 60.0);
    }

    #[test]
    fn available_extent_without_properties_is_unbounded() {
        assert!(available_extent(100.0, 10.0, None) > 1e300);
        assert_eq!(available_extent(100.0, 10.0, Some(15.0)), 75.0);
    }
}
