// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rubber-band selection: view-level press/drag/release handlers.

use trellis_geometry::{PointerEvent, content_position};

use crate::creator::SelectionCreator;
use crate::scene::{SelectionModel, SelectionView};
use crate::selection::Selection;
use crate::selection_box::SelectionBox;

impl SelectionCreator {
    /// Handles a press on the empty view area.
    ///
    /// Starts a rubber band unless the event was already consumed by an item
    /// handler or the selection-enabled predicate rejects it. With the shortcut
    /// held the current selection is snapshotted; otherwise it is cleared.
    ///
    /// Returns `true` if a rubber band was started.
    pub fn on_view_pressed(
        &mut self,
        selection: &mut Selection,
        view: &impl SelectionView,
        event: &PointerEvent,
    ) -> bool {
        if event.consumed || !(self.selection_active)(event) {
            return false;
        }

        if event.is_shortcut_down() {
            self.backup.capture(selection);
        } else {
            self.backup.clear();
            selection.clear();
        }

        let start = content_position(view.cursor_position(event), view.scale());
        self.band_start = Some(start);
        self.band = None;
        tracing::trace!(x = start.x, y = start.y, "rubber band started");
        true
    }

    /// Handles a drag tick while a rubber band is active.
    ///
    /// Draws the band, then recomputes membership for every item in `model`:
    ///
    /// - a node is selected if its bounds lie inside the band;
    /// - a joint is selected if its position lies inside the band;
    /// - a connection is never caught geometrically.
    ///
    /// With the shortcut held, anything in the press-time snapshot stays selected
    /// as well. Everything else is deselected, so a shrinking band drops items.
    /// Ticks that were consumed or that the selection-enabled predicate rejects
    /// leave the band and the selection untouched.
    pub fn on_view_dragged(
        &mut self,
        selection: &mut Selection,
        model: &impl SelectionModel,
        view: &mut impl SelectionView,
        event: &PointerEvent,
    ) {
        let Some(start) = self.band_start else {
            return;
        };
        if event.consumed || !(self.selection_active)(event) {
            return;
        }

        let end = content_position(view.cursor_position(event), view.scale());
        let band = SelectionBox::new(start, end);
        self.band = Some(band);
        view.draw_selection_box(band.rect());

        let additive = event.is_shortcut_down();

        for (node, bounds) in model.nodes() {
            let keep = band.contains_rect(bounds) || (additive && self.backup.contains(node));
            selection.set_selected(node, keep);
        }

        for (joint, position) in model.joints() {
            let keep = band.contains_point(position) || (additive && self.backup.contains(joint));
            selection.set_selected(joint, keep);
        }

        for connection in model.connections() {
            let keep = additive && self.backup.contains(connection);
            selection.set_selected(connection, keep);
        }

        tracing::trace!(
            x0 = band.rect().x0,
            y0 = band.rect().y0,
            x1 = band.rect().x1,
            y1 = band.rect().y1,
            selected = selection.len(),
            "rubber band updated"
        );
    }

    /// Handles the release that ends a rubber band and drops its snapshot.
    pub fn on_view_released(&mut self, view: &mut impl SelectionView) {
        if self.band_start.take().is_none() {
            return;
        }
        self.band = None;
        self.backup.clear();
        view.hide_selection_box();
        tracing::trace!("rubber band finished");
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};
    use trellis_geometry::{ConnectionId, JointId, NodeId, PointerEvent};

    use crate::{Selection, SelectionCreator, SelectionModel, SelectionView};

    struct Empty;

    impl SelectionModel for Empty {
        fn nodes(&self) -> impl Iterator<Item = (NodeId, Rect)> {
            core::iter::empty()
        }
        fn joints(&self) -> impl Iterator<Item = (JointId, Point)> {
            core::iter::empty()
        }
        fn connections(&self) -> impl Iterator<Item = ConnectionId> {
            core::iter::empty()
        }
    }

    #[derive(Default)]
    struct View {
        drawn: Option<Rect>,
    }

    impl SelectionView for View {
        fn cursor_position(&self, event: &PointerEvent) -> Point {
            event.scene_position
        }
        fn scale(&self) -> f64 {
            2.0
        }
        fn draw_selection_box(&mut self, rect: Rect) {
            self.drawn = Some(rect);
        }
        fn hide_selection_box(&mut self) {
            self.drawn = None;
        }
    }

    #[test]
    fn predicate_gates_activation() {
        let mut creator = SelectionCreator::new(|_| false);
        let mut sel = Selection::new();
        sel.select(NodeId(1));
        let view = View::default();
        let press = PointerEvent::primary_press(Point::ZERO);
        assert!(!creator.on_view_pressed(&mut sel, &view, &press));
        assert!(!creator.is_rubber_band_active());
        assert!(sel.is_selected(NodeId(1)));
    }

    #[test]
    fn band_is_in_content_coordinates() {
        let mut creator = SelectionCreator::default();
        let mut sel = Selection::new();
        let mut view = View::default();
        let press = PointerEvent::primary_press(Point::new(40.0, 20.0));
        creator.on_view_pressed(&mut sel, &view, &press);
        creator.on_view_dragged(
            &mut sel,
            &Empty,
            &mut view,
            &PointerEvent::primary_drag(Point::new(10.0, 60.0)),
        );
        assert_eq!(view.drawn, Some(Rect::new(5.0, 10.0, 20.0, 30.0)));

        creator.on_view_released(&mut view);
        assert_eq!(view.drawn, None);
        assert!(creator.selection_box().is_none());
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let mut creator = SelectionCreator::default();
        let mut sel = Selection::new();
        let mut view = View::default();
        creator.on_view_dragged(
            &mut sel,
            &Empty,
            &mut view,
            &PointerEvent::primary_drag(Point::new(10.0, 60.0)),
        );
        assert_eq!(view.drawn, None);
    }

    #[test]
    fn consumed_drag_keeps_band() {
        let mut creator = SelectionCreator::default();
        let mut sel = Selection::new();
        let mut view = View::default();
        creator.on_view_pressed(&mut sel, &view, &PointerEvent::primary_press(Point::ZERO));
        creator.on_view_dragged(
            &mut sel,
            &Empty,
            &mut view,
            &PointerEvent::primary_drag(Point::new(20.0, 20.0)),
        );

        let mut ev = PointerEvent::primary_drag(Point::new(80.0, 80.0));
        ev.consume();
        creator.on_view_dragged(&mut sel, &Empty, &mut view, &ev);
        assert_eq!(view.drawn, Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(creator.selection_box().map(|b| b.rect()), view.drawn);
    }
}
