// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_geometry --heading-base-level=0

//! Trellis Geometry: the shared vocabulary of the Trellis diagram editor core.
//!
//! This crate is the leaf every other Trellis crate builds on. It provides:
//!
//! - [`PointerEvent`]: a toolkit-neutral description of a single-pointer mouse event
//!   (scene position, triggering button, held buttons, modifiers, and a consumed flag
//!   used for bubbling between per-item and view-level handlers).
//! - Coordinate helpers: [`cursor_position`] maps a scene-space point into a reference
//!   node's local space, and [`content_position`] divides a view-space cursor by the
//!   current zoom.
//! - Pixel helpers: [`move_on_pixel`], [`move_off_pixel`], and [`round_to_grid`].
//! - Item identifiers ([`NodeId`], [`JointId`], [`ConnectionId`], [`ConnectorId`])
//!   shared by the selection and routing crates.
//! - [`EditorProperties`]: the read-only configuration consumed by resizing and
//!   connection rendering.
//!
//! It does **not** own a scene graph, a document model, or a renderer. Callers feed it
//! positions and transforms taken from their own toolkit.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point};
//! use trellis_geometry::{content_position, cursor_position, round_to_grid};
//!
//! // A node translated by (100, 50) in the scene.
//! let local_to_scene = Affine::translate((100.0, 50.0));
//! let local = cursor_position(Point::new(130.0, 70.0), local_to_scene);
//! assert_eq!(local, Point::new(30.0, 20.0));
//!
//! // A view zoomed to 200%.
//! assert_eq!(content_position(Point::new(40.0, 20.0), 2.0), Point::new(20.0, 10.0));
//!
//! assert_eq!(round_to_grid(17.0, 12.0), 12.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cursor;
mod event;
mod ids;
mod pixel;
mod properties;

pub use cursor::{content_position, cursor_position};
pub use event::{Modifiers, PointerButton, PointerButtons, PointerEvent};
pub use ids::{ConnectionId, ConnectorId, JointId, NodeId};
pub use pixel::{HALF_A_PIXEL, move_off_pixel, move_on_pixel, round_to_grid};
pub use properties::{
    DEFAULT_BOUND_VALUE, DEFAULT_GRID_SPACING, EditorProperties, PropertiesError,
    SHOW_DETOURS_KEY,
};
