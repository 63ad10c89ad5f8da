// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crossings between the segments of different connections.

use alloc::collections::BTreeMap;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point};
use smallvec::SmallVec;
use trellis_geometry::ConnectionId;

/// Crossing offsets per segment index.
///
/// Each offset is the distance from the segment's start point to the crossing,
/// sorted ascending. Segments without crossings have no entry.
pub type Intersections = BTreeMap<usize, SmallVec<[f64; 4]>>;

/// Cross products below this are treated as parallel.
const PARALLEL_EPSILON: f64 = 1e-10;

/// Finds where one connection crosses the others.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IntersectionFinder {
    connection: ConnectionId,
}

impl IntersectionFinder {
    /// Creates a finder for `connection`.
    #[must_use]
    pub fn new(connection: ConnectionId) -> Self {
        Self { connection }
    }

    /// The connection this finder reports crossings for.
    #[must_use]
    pub fn connection(&self) -> ConnectionId {
        self.connection
    }

    /// Finds every crossing of this connection with the others in `all`.
    ///
    /// `all` lists every connection's points in paint order and must include this
    /// connection. With `behind_only`, only connections painted before this one are
    /// considered; otherwise all others are. Crossings are strict: segments that
    /// merely touch at an endpoint, or run parallel, do not cross.
    ///
    /// Returns an empty map if this connection is not in `all`.
    #[must_use]
    pub fn find(&self, all: &[(ConnectionId, &[Point])], behind_only: bool) -> Intersections {
        let mut result = Intersections::new();

        let Some(own) = all
            .iter()
            .find(|(id, _)| *id == self.connection)
            .map(|(_, points)| *points)
        else {
            return result;
        };

        let others = all
            .iter()
            .take_while(|(id, _)| !behind_only || *id != self.connection)
            .filter(|(id, _)| *id != self.connection);

        for (_, other) in others {
            for (index, segment) in segments(own).enumerate() {
                for other_segment in segments(other) {
                    if let Some(offset) = crossing_offset(segment, other_segment) {
                        result.entry(index).or_default().push(offset);
                    }
                }
            }
        }

        for offsets in result.values_mut() {
            offsets.sort_by(f64::total_cmp);
        }
        result
    }
}

fn segments(points: &[Point]) -> impl Iterator<Item = Line> + '_ {
    points.windows(2).map(|pair| Line::new(pair[0], pair[1]))
}

/// Distance along `a` from its start to where it strictly crosses `b`.
#[must_use]
pub fn crossing_offset(a: Line, b: Line) -> Option<f64> {
    let r = a.p1 - a.p0;
    let s = b.p1 - b.p0;
    let denom = r.cross(s);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let qp = b.p0 - a.p0;
    let t = qp.cross(s) / denom;
    let u = qp.cross(r) / denom;
    if t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0 {
        Some(t * r.hypot())
    } else {
        None
    }
}
