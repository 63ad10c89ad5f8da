// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator interfaces the selectors consume.

use kurbo::{Point, Rect};
use trellis_geometry::{ConnectionId, JointId, NodeId, PointerEvent};

use crate::selection::SelectableItem;

/// Read access to the items of the diagram being edited.
///
/// Iteration order is the model order. Joints are derived from the connections on
/// every call, so the selector never keeps a joint list of its own that could drift
/// out of sync with the model.
pub trait SelectionModel {
    /// Every node with its bounds in content coordinates.
    fn nodes(&self) -> impl Iterator<Item = (NodeId, Rect)>;

    /// Every joint of every connection with its position in content coordinates.
    fn joints(&self) -> impl Iterator<Item = (JointId, Point)>;

    /// Every connection.
    fn connections(&self) -> impl Iterator<Item = ConnectionId>;
}

/// The editor view hosting the rubber band.
pub trait SelectionView {
    /// Pointer position in the view's own coordinates.
    fn cursor_position(&self, event: &PointerEvent) -> Point;

    /// Current zoom of the view content.
    fn scale(&self) -> f64;

    /// Shows the rubber-band rectangle, in content coordinates.
    fn draw_selection_box(&mut self, rect: Rect);

    /// Hides the rubber-band rectangle.
    fn hide_selection_box(&mut self);
}

/// Receives requests to move the other selected items along with a pressed one.
pub trait DragBinder {
    /// Binds the positions of all other selected items to `anchor` for the coming drag.
    fn bind_positions(&mut self, anchor: SelectableItem);
}

impl DragBinder for () {
    fn bind_positions(&mut self, _anchor: SelectableItem) {}
}
