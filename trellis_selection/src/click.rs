// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click selection: per-item press handlers.

use trellis_geometry::{ConnectionId, ConnectorId, JointId, NodeId, PointerEvent};

use crate::creator::SelectionCreator;
use crate::scene::DragBinder;
use crate::selection::{SelectableItem, Selection};

impl SelectionCreator {
    /// Handles a press on a node.
    ///
    /// Updates the selection, then binds the other selected items to follow this
    /// node unless the press is on a resize border (`in_position_for_resize`), in
    /// which case only this node will change.
    pub fn on_node_pressed(
        &mut self,
        selection: &mut Selection,
        node: NodeId,
        event: &mut PointerEvent,
        in_position_for_resize: bool,
        binder: &mut impl DragBinder,
    ) {
        if !event.is_primary() {
            return;
        }
        self.handle_selection_click(selection, node.into(), event);
        if !in_position_for_resize {
            binder.bind_positions(node.into());
        }
        event.consume();
    }

    /// Handles a press on a joint.
    ///
    /// Joints have no resize mode, so other selected items are always bound to it.
    /// Events already consumed by another handler are ignored.
    pub fn on_joint_pressed(
        &mut self,
        selection: &mut Selection,
        joint: JointId,
        event: &mut PointerEvent,
        binder: &mut impl DragBinder,
    ) {
        if !event.is_primary() || event.consumed {
            return;
        }
        self.handle_selection_click(selection, joint.into(), event);
        binder.bind_positions(joint.into());
        event.consume();
    }

    /// Handles a press on a connection body.
    pub fn on_connection_pressed(
        &mut self,
        selection: &mut Selection,
        connection: ConnectionId,
        event: &mut PointerEvent,
    ) {
        if !event.is_primary() {
            return;
        }
        self.handle_selection_click(selection, connection.into(), event);
        event.consume();
    }

    /// Handles a press on a connector.
    ///
    /// Connectors are fixed to their node, so nothing is bound for a group move.
    pub fn on_connector_pressed(
        &mut self,
        selection: &mut Selection,
        connector: ConnectorId,
        event: &mut PointerEvent,
    ) {
        if !event.is_primary() {
            return;
        }
        self.handle_selection_click(selection, connector.into(), event);
        event.consume();
    }

    /// Applies the click rule for `item`:
    ///
    /// - unselected: clear the selection (or, with the shortcut held, snapshot it
    ///   first and keep it), then select the item;
    /// - selected with the shortcut held: deselect it;
    /// - selected without the shortcut: leave everything as is, so a multi-selection
    ///   can be dragged without collapsing.
    fn handle_selection_click(
        &mut self,
        selection: &mut Selection,
        item: SelectableItem,
        event: &PointerEvent,
    ) {
        if !selection.is_selected(item) {
            if event.is_shortcut_down() {
                self.backup.capture(selection);
            } else {
                selection.clear();
            }
            selection.select(item);
            tracing::trace!(?item, "selected by click");
        } else if event.is_shortcut_down() {
            selection.deselect(item);
            tracing::trace!(?item, "deselected by click");
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Point;
    use trellis_geometry::{ConnectorId, JointId, Modifiers, NodeId, PointerButton, PointerEvent};

    use crate::{DragBinder, SelectableItem, Selection, SelectionCreator};

    #[derive(Default)]
    struct Bindings(Vec<SelectableItem>);

    impl DragBinder for Bindings {
        fn bind_positions(&mut self, anchor: SelectableItem) {
            self.0.push(anchor);
        }
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut creator = SelectionCreator::default();
        let mut sel = Selection::new();
        let mut ev = PointerEvent::primary_press(Point::ZERO);
        ev.button = Some(PointerButton::Secondary);
        creator.on_node_pressed(&mut sel, NodeId(1), &mut ev, false, &mut ());
        assert!(sel.is_empty());
        assert!(!ev.consumed);
    }

    #[test]
    fn resize_press_does_not_bind_group_move() {
        let mut creator = SelectionCreator::default();
        let mut sel = Selection::new();
        let mut bindings = Bindings::default();

        let mut ev = PointerEvent::primary_press(Point::ZERO);
        creator.on_node_pressed(&mut sel, NodeId(1), &mut ev, true, &mut bindings);
        assert!(sel.is_selected(NodeId(1)));
        assert!(ev.consumed);
        assert!(bindings.0.is_empty());

        let mut ev = PointerEvent::primary_press(Point::ZERO);
        creator.on_node_pressed(&mut sel, NodeId(1), &mut ev, false, &mut bindings);
        assert_eq!(bindings.0, [SelectableItem::Node(NodeId(1))]);
    }

    #[test]
    fn consumed_joint_press_is_ignored() {
        let mut creator = SelectionCreator::default();
        let mut sel = Selection::new();
        let mut bindings = Bindings::default();
        let mut ev = PointerEvent::primary_press(Point::ZERO).with_modifiers(Modifiers::SHORTCUT);
        ev.consume();
        creator.on_joint_pressed(&mut sel, JointId(2), &mut ev, &mut bindings);
        assert!(sel.is_empty());
        assert!(bindings.0.is_empty());
    }

    #[test]
    fn connector_press_follows_click_rule() {
        let mut creator = SelectionCreator::default();
        let mut sel = Selection::new();
        sel.select(NodeId(1));

        let mut ev = PointerEvent::primary_press(Point::ZERO);
        creator.on_connector_pressed(&mut sel, ConnectorId(7), &mut ev);
        assert!(ev.consumed);
        assert!(sel.is_selected(ConnectorId(7)));
        assert!(!sel.is_selected(NodeId(1)));

        let mut ev = PointerEvent::primary_press(Point::ZERO).with_modifiers(Modifiers::SHORTCUT);
        creator.on_connector_pressed(&mut sel, ConnectorId(7), &mut ev);
        assert!(sel.is_empty());

        let mut ev = PointerEvent::primary_press(Point::ZERO);
        ev.button = Some(PointerButton::Secondary);
        creator.on_connector_pressed(&mut sel, ConnectorId(7), &mut ev);
        assert!(sel.is_empty());
        assert!(!ev.consumed);
    }
}
