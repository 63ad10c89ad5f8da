// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_selection --heading-base-level=0

//! Trellis Selection: click and rubber-band selection for diagram editors.
//!
//! A diagram has four kinds of selectable items: nodes, the joints of rectilinear
//! connections, connection bodies, and the connectors on node sides. [`Selection`]
//! is the single owner of which of them are selected. [`SelectionCreator`] mutates
//! it from pointer input:
//!
//! - **Click selection.** Per-item press handlers
//!   ([`on_node_pressed`](SelectionCreator::on_node_pressed),
//!   [`on_joint_pressed`](SelectionCreator::on_joint_pressed),
//!   [`on_connection_pressed`](SelectionCreator::on_connection_pressed),
//!   [`on_connector_pressed`](SelectionCreator::on_connector_pressed)) select the
//!   pressed item, toggle it with the shortcut modifier, and consume the event.
//!   Node and joint presses also ask a [`DragBinder`] to bind the rest of the
//!   selection to the pressed item, except for node presses on a resize border.
//! - **Rubber-band selection.** View-level handlers
//!   ([`on_view_pressed`](SelectionCreator::on_view_pressed),
//!   [`on_view_dragged`](SelectionCreator::on_view_dragged),
//!   [`on_view_released`](SelectionCreator::on_view_released)) draw a
//!   [`SelectionBox`] in content coordinates and recompute the full selection on
//!   every drag tick. Nodes must lie entirely inside the box; joints only need their
//!   position inside it. Connections are never caught by the box; with the shortcut
//!   held they keep whatever state the press-time [`SelectionBackup`] recorded.
//!   Connectors are left alone by the band, apart from the clear on a plain press.
//!   The backup is dropped when the band is released.
//!
//! The diagram and view are reached through the [`SelectionModel`] and
//! [`SelectionView`] traits, so this crate stays independent of any toolkit.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use trellis_geometry::{ConnectionId, JointId, NodeId, PointerEvent};
//! use trellis_selection::{Selection, SelectionCreator, SelectionModel, SelectionView};
//!
//! struct Diagram;
//!
//! impl SelectionModel for Diagram {
//!     fn nodes(&self) -> impl Iterator<Item = (NodeId, Rect)> {
//!         [
//!             (NodeId(1), Rect::new(10.0, 10.0, 50.0, 40.0)),
//!             (NodeId(2), Rect::new(200.0, 10.0, 240.0, 40.0)),
//!         ]
//!         .into_iter()
//!     }
//!     fn joints(&self) -> impl Iterator<Item = (JointId, Point)> {
//!         core::iter::once((JointId(1), Point::new(60.0, 25.0)))
//!     }
//!     fn connections(&self) -> impl Iterator<Item = ConnectionId> {
//!         core::iter::once(ConnectionId(1))
//!     }
//! }
//!
//! struct View;
//!
//! impl SelectionView for View {
//!     fn cursor_position(&self, event: &PointerEvent) -> Point {
//!         event.scene_position
//!     }
//!     fn scale(&self) -> f64 {
//!         1.0
//!     }
//!     fn draw_selection_box(&mut self, _rect: Rect) {}
//!     fn hide_selection_box(&mut self) {}
//! }
//!
//! let mut selection = Selection::new();
//! let mut creator = SelectionCreator::default();
//! let mut view = View;
//!
//! let press = PointerEvent::primary_press(Point::new(0.0, 0.0));
//! creator.on_view_pressed(&mut selection, &view, &press);
//! creator.on_view_dragged(
//!     &mut selection,
//!     &Diagram,
//!     &mut view,
//!     &PointerEvent::primary_drag(Point::new(100.0, 100.0)),
//! );
//! creator.on_view_released(&mut view);
//!
//! assert!(selection.is_selected(NodeId(1)));
//! assert!(selection.is_selected(JointId(1)));
//! assert!(!selection.is_selected(NodeId(2)));
//! assert!(!selection.is_selected(ConnectionId(1)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod click;
mod creator;
mod rubber_band;
mod scene;
mod selection;
mod selection_box;
mod set;

pub use creator::{SelectionActive, SelectionCreator};
pub use scene::{DragBinder, SelectionModel, SelectionView};
pub use selection::{SelectableItem, Selection, SelectionBackup};
pub use selection_box::SelectionBox;
pub use set::ItemSet;
