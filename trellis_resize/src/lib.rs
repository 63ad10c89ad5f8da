// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_resize --heading-base-level=0

//! Trellis Resize: edge-based resizing for boxes in a diagram editor.
//!
//! A box is resized by pressing within [`ResizableBox::resize_border_tolerance`]
//! pixels of one of its borders and dragging. This crate turns that pointer
//! sequence into concrete geometry:
//!
//! - [`classify`] maps a local point to a [`MouseRegion`]: one of eight border
//!   regions (corners win over edges), the interior, or outside.
//! - [`ResizeEngine`] runs the press → drag → release gesture. It captures the
//!   press-time size, layout position, and region, then on every drag step applies
//!   the per-edge handlers implied by that region:
//!   - north/west move the origin while keeping the far edge fixed, and clamp
//!     against the configured north/west bound;
//!   - south/east grow the extent and clamp against the space left in the parent
//!     (`parent - origin - margin`);
//!   - every edge snaps to the grid when enabled, or rounds to whole pixels
//!     otherwise, and never goes below the box's minimum size.
//! - Hover moves update a compass [`ResizeCursor`] so users can see where a drag
//!   would resize.
//!
//! Moving a box (a drag that starts in the interior) is left to the caller:
//! [`ResizeEngine::on_drag`] reports [`DragOutcome::Move`] for it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use trellis_resize::{DragOutcome, PointerSample, ResizableBox, ResizeContext, ResizeEngine};
//!
//! let mut node = ResizableBox::new(Rect::new(10.0, 10.0, 110.0, 60.0));
//! let ctx = ResizeContext::new(Size::new(500.0, 400.0));
//! let mut engine = ResizeEngine::new();
//!
//! // Press on the right border.
//! engine.on_press(
//!     &node,
//!     PointerSample {
//!         local: Point::new(98.0, 25.0),
//!         container: Point::new(108.0, 35.0),
//!         primary_down: true,
//!     },
//!     &ctx,
//! );
//!
//! // Drag 20px to the right.
//! let outcome = engine.on_drag(
//!     &mut node,
//!     PointerSample {
//!         local: Point::new(118.0, 25.0),
//!         container: Point::new(128.0, 35.0),
//!         primary_down: true,
//!     },
//!     &ctx,
//! );
//! assert_eq!(outcome, DragOutcome::Resized(Rect::new(10.0, 10.0, 130.0, 60.0)));
//! ```
//!
//! Preconditions that do not hold (no container parent, box not editable, no
//! active drag gesture) make every call a no-op rather than an error.
//!
//! This crate is `no_std`.

#![no_std]

mod engine;
mod region;
mod resizable;

pub use engine::{ABSOLUTE_MAX_EXTENT, DragOutcome, PointerSample, ResizeContext, ResizeEngine};
pub use region::{Edges, MouseRegion, ResizeCursor, classify};
pub use resizable::{Capabilities, DEFAULT_RESIZE_BORDER_TOLERANCE, ResizableBox};
