// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection store and its additive-gesture snapshot.

use hashbrown::HashSet;
use trellis_geometry::{ConnectionId, ConnectorId, JointId, NodeId};

use crate::set::ItemSet;

/// Anything that can be selected in a diagram.
///
/// Nodes and joints have geometry and can be caught by a rubber band; connections
/// and connectors are only ever selected by identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectableItem {
    /// A node.
    Node(NodeId),
    /// A joint of a connection.
    Joint(JointId),
    /// A connection body.
    Connection(ConnectionId),
    /// A connector on the side of a node.
    Connector(ConnectorId),
}

impl From<NodeId> for SelectableItem {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<JointId> for SelectableItem {
    fn from(id: JointId) -> Self {
        Self::Joint(id)
    }
}

impl From<ConnectionId> for SelectableItem {
    fn from(id: ConnectionId) -> Self {
        Self::Connection(id)
    }
}

impl From<ConnectorId> for SelectableItem {
    fn from(id: ConnectorId) -> Self {
        Self::Connector(id)
    }
}

/// The editor's selection: which nodes, joints, connections, and connectors are
/// selected.
///
/// This store is the single owner of every item's selected flag. Selectors mutate
/// it through `&mut`; everything else reads it.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    nodes: ItemSet<NodeId>,
    joints: ItemSet<JointId>,
    connections: ItemSet<ConnectionId>,
    connectors: ItemSet<ConnectorId>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
            && self.joints.is_empty()
            && self.connections.is_empty()
            && self.connectors.is_empty()
    }

    /// Total number of selected items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() + self.joints.len() + self.connections.len() + self.connectors.len()
    }

    /// Selected nodes in selection order.
    #[must_use]
    pub fn nodes(&self) -> &ItemSet<NodeId> {
        &self.nodes
    }

    /// Selected joints in selection order.
    #[must_use]
    pub fn joints(&self) -> &ItemSet<JointId> {
        &self.joints
    }

    /// Selected connections in selection order.
    #[must_use]
    pub fn connections(&self) -> &ItemSet<ConnectionId> {
        &self.connections
    }

    /// Selected connectors in selection order.
    #[must_use]
    pub fn connectors(&self) -> &ItemSet<ConnectorId> {
        &self.connectors
    }

    /// Combined revision of the item sets; changes whenever any of them does.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.nodes
            .revision()
            .wrapping_add(self.joints.revision())
            .wrapping_add(self.connections.revision())
            .wrapping_add(self.connectors.revision())
    }

    /// Returns `true` if `item` is selected.
    #[must_use]
    pub fn is_selected(&self, item: impl Into<SelectableItem>) -> bool {
        match item.into() {
            SelectableItem::Node(id) => self.nodes.contains(&id),
            SelectableItem::Joint(id) => self.joints.contains(&id),
            SelectableItem::Connection(id) => self.connections.contains(&id),
            SelectableItem::Connector(id) => self.connectors.contains(&id),
        }
    }

    /// Selects `item`. Returns `true` if it was not selected before.
    pub fn select(&mut self, item: impl Into<SelectableItem>) -> bool {
        match item.into() {
            SelectableItem::Node(id) => self.nodes.add(id),
            SelectableItem::Joint(id) => self.joints.add(id),
            SelectableItem::Connection(id) => self.connections.add(id),
            SelectableItem::Connector(id) => self.connectors.add(id),
        }
    }

    /// Deselects `item`. Returns `true` if it was selected before.
    pub fn deselect(&mut self, item: impl Into<SelectableItem>) -> bool {
        match item.into() {
            SelectableItem::Node(id) => self.nodes.remove(&id),
            SelectableItem::Joint(id) => self.joints.remove(&id),
            SelectableItem::Connection(id) => self.connections.remove(&id),
            SelectableItem::Connector(id) => self.connectors.remove(&id),
        }
    }

    /// Selects or deselects `item`.
    pub fn set_selected(&mut self, item: impl Into<SelectableItem>, selected: bool) -> bool {
        if selected {
            self.select(item)
        } else {
            self.deselect(item)
        }
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.joints.clear();
        self.connections.clear();
        self.connectors.clear();
    }
}

/// Snapshot of the selection taken when an additive gesture starts.
///
/// While the shortcut modifier is held, a rubber band unions its result with this
/// snapshot instead of replacing the selection. The snapshot lives for one gesture:
/// it is emptied when the gesture ends or a non-additive gesture starts.
#[derive(Clone, Debug, Default)]
pub struct SelectionBackup {
    nodes: HashSet<NodeId>,
    joints: HashSet<JointId>,
    connections: HashSet<ConnectionId>,
    connectors: HashSet<ConnectorId>,
}

impl SelectionBackup {
    /// Replaces the snapshot with the current contents of `selection`.
    pub fn capture(&mut self, selection: &Selection) {
        self.clear();
        self.nodes.extend(selection.nodes().iter().copied());
        self.joints.extend(selection.joints().iter().copied());
        self.connections.extend(selection.connections().iter().copied());
        self.connectors.extend(selection.connectors().iter().copied());
    }

    /// Empties the snapshot.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.joints.clear();
        self.connections.clear();
        self.connectors.clear();
    }

    /// Returns `true` if `item` was selected when the snapshot was taken.
    #[must_use]
    pub fn contains(&self, item: impl Into<SelectableItem>) -> bool {
        match item.into() {
            SelectableItem::Node(id) => self.nodes.contains(&id),
            SelectableItem::Joint(id) => self.joints.contains(&id),
            SelectableItem::Connection(id) => self.connections.contains(&id),
            SelectableItem::Connector(id) => self.connectors.contains(&id),
        }
    }

    /// Number of items in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() + self.joints.len() + self.connections.len() + self.connectors.len()
    }

    /// Returns `true` if the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
