// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cached drawing of one rectilinear connection.

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use trellis_geometry::ConnectionId;

use crate::intersection::{IntersectionFinder, Intersections};
use crate::router::ConnectionRouter;
use crate::segment::{CrossingStyle, build_connection_path};
use crate::side::Side;

/// One rectilinear connection: its router, crossing finder, and render cache.
///
/// The cache holds the point list and crossings of the last draw, so the host can
/// call [`draw`](Self::draw) every frame and only rebuild the path when either one
/// actually changed.
#[derive(Clone, Debug)]
pub struct RectangularConnection {
    router: ConnectionRouter,
    finder: IntersectionFinder,
    style: CrossingStyle,
    points: Option<Vec<Point>>,
    intersections: Option<Intersections>,
}

impl RectangularConnection {
    /// Creates a connection with no joints, leaving a connector on `source_side`.
    #[must_use]
    pub fn new(id: ConnectionId, source_side: Side, style: CrossingStyle) -> Self {
        Self {
            router: ConnectionRouter::new(source_side),
            finder: IntersectionFinder::new(id),
            style,
            points: None,
            intersections: None,
        }
    }

    /// This connection's identifier.
    #[must_use]
    pub fn id(&self) -> ConnectionId {
        self.finder.connection()
    }

    /// The joint constraints.
    #[must_use]
    pub fn router(&self) -> &ConnectionRouter {
        &self.router
    }

    /// Mutable access to the joint constraints, for rebuilding them or updating
    /// boundary permissions.
    pub fn router_mut(&mut self) -> &mut ConnectionRouter {
        &mut self.router
    }

    /// The crossing style.
    #[must_use]
    pub fn style(&self) -> CrossingStyle {
        self.style
    }

    /// Changes the crossing style and forces the next draw to rebuild.
    pub fn set_style(&mut self, style: CrossingStyle) {
        if self.style != style {
            self.style = style;
            self.invalidate();
        }
    }

    /// Rebuilds the joint constraints for `count` joints and forces the next draw.
    pub fn set_joint_count(&mut self, count: usize) {
        self.router.set_joint_count(count);
        self.invalidate();
    }

    /// Drops the render cache.
    pub fn invalidate(&mut self) {
        self.points = None;
        self.intersections = None;
    }

    /// Realigns the boundary joints with the connectors.
    ///
    /// Does nothing and returns `false` when `points` equals the list of the last
    /// draw. Otherwise the first and last joints (and their entries in `points`) are
    /// corrected and `true` is returned.
    pub fn apply_constraints(&self, points: &mut [Point], joints: &mut [Rect]) -> bool {
        if self.points.as_deref() == Some(&*points) {
            return false;
        }
        self.router.check_first_and_last_joints(points, joints);
        true
    }

    /// Draws the connection.
    ///
    /// `points` is this connection's full point list; `all` lists every connection's
    /// points in paint order, this one included. Returns the new path when the points
    /// or the crossings changed since the last draw, and `None` when the previous path
    /// is still valid.
    pub fn draw(&mut self, points: &[Point], all: &[(ConnectionId, &[Point])]) -> Option<BezPath> {
        let intersections = self.finder.find(all, self.style.behind_only());

        let points_changed = self.points.as_deref() != Some(points);
        let intersections_changed = self.intersections.as_ref() != Some(&intersections);

        let path = (points_changed || intersections_changed)
            .then(|| build_connection_path(points, &intersections, self.style));

        if points_changed {
            self.points = Some(points.to_vec());
        }
        self.intersections = Some(intersections);

        if path.is_some() {
            tracing::trace!(connection = self.id().get(), "connection path rebuilt");
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use trellis_geometry::ConnectionId;

    use super::*;

    #[test]
    fn redraw_only_on_change() {
        let mut conn = RectangularConnection::new(ConnectionId(1), Side::Right, CrossingStyle::Gap);
        let points = [Point::new(0.0, 0.0), Point::new(50.0, 0.0)];
        let all = [(ConnectionId(1), &points[..])];

        assert!(conn.draw(&points, &all).is_some());
        assert!(conn.draw(&points, &all).is_none());

        let moved = [Point::new(0.0, 0.0), Point::new(60.0, 0.0)];
        let all = [(ConnectionId(1), &moved[..])];
        assert!(conn.draw(&moved, &all).is_some());

        conn.set_style(CrossingStyle::Detour);
        assert!(conn.draw(&moved, &all).is_some());
    }

    #[test]
    fn constraints_short_circuit_on_same_points() {
        let mut conn = RectangularConnection::new(ConnectionId(1), Side::Right, CrossingStyle::Gap);
        conn.set_joint_count(2);
        let mut points = [
            Point::new(0.0, 20.0),
            Point::new(50.0, 20.0),
            Point::new(50.0, 80.0),
            Point::new(100.0, 80.0),
        ];
        let mut joints = [
            Rect::from_origin_size((45.0, 15.5), (10.0, 10.0)),
            Rect::from_origin_size((45.0, 75.5), (10.0, 10.0)),
        ];
        let all = [(ConnectionId(1), &points[..])];
        let snapshot = points;
        conn.draw(&snapshot, &all);

        assert!(!conn.apply_constraints(&mut points, &mut joints));
        points[1].y = 30.0;
        assert!(conn.apply_constraints(&mut points, &mut joints));
        assert_eq!(points[1].y, 20.0);
    }
}
