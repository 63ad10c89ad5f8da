// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection creator shared by click and rubber-band selection.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;
use trellis_geometry::PointerEvent;

use crate::selection::SelectionBackup;
use crate::selection_box::SelectionBox;

/// Predicate deciding whether a view press may start a rubber band.
pub type SelectionActive = Box<dyn Fn(&PointerEvent) -> bool>;

/// Creates selections from pointer input.
///
/// One instance serves one editor. It combines the click selector (per-item press
/// handlers, see [`SelectionCreator::on_node_pressed`] and friends) and the rubber-band
/// selector (view-level handlers, see [`SelectionCreator::on_view_pressed`]). Both
/// share the backup snapshot used for additive selection.
///
/// Per-item handlers must run before the view handlers for the same event; they
/// consume the event, which keeps a press on an item from also starting a rubber band.
pub struct SelectionCreator {
    pub(crate) backup: SelectionBackup,
    pub(crate) band_start: Option<Point>,
    pub(crate) band: Option<SelectionBox>,
    pub(crate) selection_active: SelectionActive,
}

impl SelectionCreator {
    /// Creates a selector whose rubber band is gated by `selection_active`.
    #[must_use]
    pub fn new(selection_active: impl Fn(&PointerEvent) -> bool + 'static) -> Self {
        Self {
            backup: SelectionBackup::default(),
            band_start: None,
            band: None,
            selection_active: Box::new(selection_active),
        }
    }

    /// Returns `true` while a rubber-band gesture is in progress.
    #[must_use]
    pub fn is_rubber_band_active(&self) -> bool {
        self.band_start.is_some()
    }

    /// The rubber band as of the last drag tick, if one is in progress.
    #[must_use]
    pub fn selection_box(&self) -> Option<SelectionBox> {
        self.band
    }

    /// The snapshot taken by the last additive press.
    #[must_use]
    pub fn backup(&self) -> &SelectionBackup {
        &self.backup
    }
}

impl Default for SelectionCreator {
    fn default() -> Self {
        Self::new(|_| true)
    }
}

impl fmt::Debug for SelectionCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionCreator")
            .field("backup", &self.backup)
            .field("band_start", &self.band_start)
            .field("band", &self.band)
            .finish_non_exhaustive()
    }
}
