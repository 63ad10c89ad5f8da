// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connector sides.

/// The side of a node a connector sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Top edge; connections leave vertically.
    Top,
    /// Right edge; connections leave horizontally.
    Right,
    /// Bottom edge; connections leave vertically.
    Bottom,
    /// Left edge; connections leave horizontally.
    Left,
}

impl Side {
    /// Parses the side out of a connector type such as `"left-input"` or
    /// `"bottom-output"`.
    ///
    /// Returns `None` if the type names no side.
    #[must_use]
    pub fn from_connector_type(connector_type: &str) -> Option<Self> {
        if connector_type.contains("left") {
            Some(Self::Left)
        } else if connector_type.contains("right") {
            Some(Self::Right)
        } else if connector_type.contains("top") {
            Some(Self::Top)
        } else if connector_type.contains("bottom") {
            Some(Self::Bottom)
        } else {
            None
        }
    }

    /// Returns `true` if a segment leaving a connector on this side is horizontal.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}
