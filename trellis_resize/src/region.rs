// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification of a local pointer position against a box's resize border.

use kurbo::{Point, Size};

bitflags::bitflags! {
    /// Box edges affected by a resize.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// Top edge.
        const NORTH = 0b0001;
        /// Bottom edge.
        const SOUTH = 0b0010;
        /// Right edge.
        const EAST  = 0b0100;
        /// Left edge.
        const WEST  = 0b1000;
    }
}

/// The part of a box a pointer is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseRegion {
    /// Top border.
    North,
    /// Top-right corner.
    NorthEast,
    /// Right border.
    East,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom border.
    South,
    /// Bottom-left corner.
    SouthWest,
    /// Left border.
    West,
    /// Top-left corner.
    NorthWest,
    /// Interior, away from every border (or resizing is disabled).
    Inside,
    /// Outside the box.
    Outside,
}

impl MouseRegion {
    /// Every region, in compass order followed by `Inside` and `Outside`.
    pub const ALL: [Self; 10] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::Inside,
        Self::Outside,
    ];

    /// Edges a drag in this region moves.
    #[must_use]
    pub fn edges(self) -> Edges {
        match self {
            Self::North => Edges::NORTH,
            Self::NorthEast => Edges::NORTH | Edges::EAST,
            Self::East => Edges::EAST,
            Self::SouthEast => Edges::SOUTH | Edges::EAST,
            Self::South => Edges::SOUTH,
            Self::SouthWest => Edges::SOUTH | Edges::WEST,
            Self::West => Edges::WEST,
            Self::NorthWest => Edges::NORTH | Edges::WEST,
            Self::Inside | Self::Outside => Edges::empty(),
        }
    }

    /// Returns `true` for the eight border regions.
    #[must_use]
    pub fn is_resize(self) -> bool {
        !self.edges().is_empty()
    }

    /// Directional cursor advertising this region, or `None` to leave the
    /// parent's cursor in effect.
    #[must_use]
    pub fn cursor(self) -> Option<ResizeCursor> {
        Some(match self {
            Self::North => ResizeCursor::N,
            Self::NorthEast => ResizeCursor::Ne,
            Self::East => ResizeCursor::E,
            Self::SouthEast => ResizeCursor::Se,
            Self::South => ResizeCursor::S,
            Self::SouthWest => ResizeCursor::Sw,
            Self::West => ResizeCursor::W,
            Self::NorthWest => ResizeCursor::Nw,
            Self::Inside | Self::Outside => return None,
        })
    }
}

/// Compass resize cursors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeCursor {
    /// North.
    N,
    /// North-east.
    Ne,
    /// East.
    E,
    /// South-east.
    Se,
    /// South.
    S,
    /// South-west.
    Sw,
    /// West.
    W,
    /// North-west.
    Nw,
}

/// Classifies a point given in the box's local coordinates.
///
/// - Points outside `[0, width] x [0, height]` are [`MouseRegion::Outside`].
/// - With `resize_enabled == false` every inside point is [`MouseRegion::Inside`].
/// - Otherwise a point strictly closer than `tolerance` to an edge is on that edge;
///   where two adjacent edges qualify the corner region wins.
#[must_use]
pub fn classify(point: Point, size: Size, tolerance: f64, resize_enabled: bool) -> MouseRegion {
    let Point { x, y } = point;
    if x < 0.0 || y < 0.0 || x > size.width || y > size.height {
        return MouseRegion::Outside;
    }
    if !resize_enabled {
        return MouseRegion::Inside;
    }

    let north = y < tolerance;
    let south = y > size.height - tolerance;
    let east = x > size.width - tolerance;
    let west = x < tolerance;

    match (north, south, east, west) {
        (true, _, true, _) => MouseRegion::NorthEast,
        (true, _, _, true) => MouseRegion::NorthWest,
        (_, true, true, _) => MouseRegion::SouthEast,
        (_, true, _, true) => MouseRegion::SouthWest,
        (true, ..) => MouseRegion::North,
        (_, true, ..) => MouseRegion::South,
        (_, _, true, _) => MouseRegion::East,
        (.., true) => MouseRegion::West,
        _ => MouseRegion::Inside,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::*;

    const SIZE: Size = Size::new(100.0, 50.0);

    #[test]
    fn outside_takes_priority_over_disabled() {
        assert_eq!(
            classify(Point::new(-1.0, 10.0), SIZE, 8.0, false),
            MouseRegion::Outside
        );
        assert_eq!(
            classify(Point::new(2.0, 2.0), SIZE, 8.0, false),
            MouseRegion::Inside
        );
    }

    #[test]
    fn corners_beat_edges() {
        assert_eq!(classify(Point::new(95.0, 5.0), SIZE, 8.0, true), MouseRegion::NorthEast);
        assert_eq!(classify(Point::new(1.0, 1.0), SIZE, 8.0, true), MouseRegion::NorthWest);
        assert_eq!(classify(Point::new(99.0, 49.0), SIZE, 8.0, true), MouseRegion::SouthEast);
        assert_eq!(classify(Point::new(0.0, 50.0), SIZE, 8.0, true), MouseRegion::SouthWest);
    }

    #[test]
    fn single_edges_and_interior() {
        assert_eq!(classify(Point::new(50.0, 0.0), SIZE, 8.0, true), MouseRegion::North);
        assert_eq!(classify(Point::new(50.0, 45.0), SIZE, 8.0, true), MouseRegion::South);
        assert_eq!(classify(Point::new(93.0, 25.0), SIZE, 8.0, true), MouseRegion::East);
        assert_eq!(classify(Point::new(7.9, 25.0), SIZE, 8.0, true), MouseRegion::West);
        assert_eq!(classify(Point::new(50.0, 25.0), SIZE, 8.0, true), MouseRegion::Inside);
    }

    #[test]
    fn tolerance_boundary_is_exclusive() {
        assert_eq!(classify(Point::new(50.0, 8.0), SIZE, 8.0, true), MouseRegion::Inside);
        assert_eq!(classify(Point::new(92.0, 25.0), SIZE, 8.0, true), MouseRegion::Inside);
    }

    #[test]
    fn cursors_follow_regions() {
        assert_eq!(MouseRegion::NorthEast.cursor(), Some(ResizeCursor::Ne));
        assert_eq!(MouseRegion::West.cursor(), Some(ResizeCursor::W));
        assert_eq!(MouseRegion::Inside.cursor(), None);
        assert_eq!(MouseRegion::Outside.cursor(), None);
        assert_eq!(MouseRegion::ALL.iter().filter(|r| r.is_resize()).count(), 8);
        assert_eq!(MouseRegion::SouthWest.edges(), Edges::SOUTH | Edges::WEST);
    }
}
