// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resizable boxes and their capabilities.

use kurbo::{Point, Rect, Size};

use crate::region::{MouseRegion, classify};

/// Default width of the resize border, in pixels.
pub const DEFAULT_RESIZE_BORDER_TOLERANCE: u32 = 8;

bitflags::bitflags! {
    /// What a box lets the user do with it.
    ///
    /// Item kinds compose these instead of inheriting behavior: a node is typically
    /// `EDITABLE | RESIZABLE | DRAGGABLE`, a joint `EDITABLE | DRAGGABLE`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// The box reacts to editing gestures at all.
        const EDITABLE  = 0b0000_0001;
        /// Border drags resize the box.
        const RESIZABLE = 0b0000_0010;
        /// Interior drags move the box.
        const DRAGGABLE = 0b0000_0100;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::EDITABLE | Self::RESIZABLE | Self::DRAGGABLE
    }
}

/// Geometry and flags of a resizable box, expressed in its parent's coordinates.
///
/// The document model owns the authoritative values; the engine reads and writes
/// them through this record for the duration of one event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizableBox {
    /// Top-left corner in the parent.
    pub layout: Point,
    /// Current size. Never negative.
    pub size: Size,
    /// Smallest size a resize may produce.
    pub min_size: Size,
    /// Enabled behaviors.
    pub capabilities: Capabilities,
    /// Width of the border band that starts a resize instead of a move.
    pub resize_border_tolerance: u32,
}

impl ResizableBox {
    /// Creates an editable, resizable, draggable box covering `bounds`.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        let bounds = bounds.abs();
        Self {
            layout: bounds.origin(),
            size: bounds.size(),
            min_size: Size::ZERO,
            capabilities: Capabilities::default(),
            resize_border_tolerance: DEFAULT_RESIZE_BORDER_TOLERANCE,
        }
    }

    /// Returns this box with a minimum size.
    #[must_use]
    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    /// Returns this box with different capabilities.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Returns this box with a different resize border width.
    #[must_use]
    pub fn with_resize_border_tolerance(mut self, tolerance: u32) -> Self {
        self.resize_border_tolerance = tolerance;
        self
    }

    /// Bounds in the parent's coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.layout, self.size)
    }

    /// Returns `true` if the box reacts to editing gestures.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.capabilities.contains(Capabilities::EDITABLE)
    }

    /// Returns `true` if border drags resize the box.
    #[must_use]
    pub fn is_resize_enabled(&self) -> bool {
        self.capabilities.contains(Capabilities::RESIZABLE)
    }

    /// Classifies a point in the box's local coordinates.
    #[must_use]
    pub fn region_at(&self, local: Point) -> MouseRegion {
        classify(
            local,
            self.size,
            f64::from(self.resize_border_tolerance),
            self.is_resize_enabled(),
        )
    }
}
