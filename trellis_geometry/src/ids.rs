// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifiers for diagram items.
//!
//! The document model owns the items; the interaction core only ever refers to
//! them through these small copyable handles.

macro_rules! item_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $name {
            /// Returns the raw index.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

item_id!(
    /// Identifier for a node (a resizable, draggable box).
    NodeId
);

item_id!(
    /// Identifier for a joint (an intermediate, draggable point of a connection).
    JointId
);

item_id!(
    /// Identifier for a connection between two connectors.
    ConnectionId
);

item_id!(
    /// Identifier for a connector (a connection endpoint on the side of a node).
    ConnectorId
);
