// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_routing --heading-base-level=0

//! Trellis Routing: rectilinear connections and their crossings.
//!
//! A rectilinear connection runs from a source connector through a list of
//! user-draggable joints to a target connector, using only horizontal and vertical
//! segments. This crate keeps such connections rectilinear and draws them:
//!
//! - [`ConnectionRouter`] derives one equality constraint per pair of consecutive
//!   joints, alternating the shared axis from the orientation of the source
//!   [`Side`]. A [`drag_joint`](ConnectionRouter::drag_joint) call masks the move by
//!   the joint's [`DragPermission`] and propagates it along the chain, and
//!   [`check_first_and_last_joints`](ConnectionRouter::check_first_and_last_joints)
//!   realigns the boundary joints with the connectors.
//! - [`IntersectionFinder`] reports where a connection crosses the others, as sorted
//!   distances along each of its segments.
//! - [`build_connection_path`] turns the point list into a [`kurbo::BezPath`],
//!   leaving a gap or hopping over with a small detour at each crossing depending on
//!   the diagram-wide [`CrossingStyle`].
//! - [`RectangularConnection`] ties these together and caches the last drawn
//!   points and crossings so a path is only rebuilt when something changed.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use trellis_geometry::ConnectionId;
//! use trellis_routing::{CrossingStyle, RectangularConnection, Side};
//!
//! let horizontal = [Point::new(0.0, 50.0), Point::new(100.0, 50.0)];
//! let vertical = [Point::new(40.0, 0.0), Point::new(40.0, 100.0)];
//! let all = [
//!     (ConnectionId(1), &vertical[..]),
//!     (ConnectionId(2), &horizontal[..]),
//! ];
//!
//! let mut connection =
//!     RectangularConnection::new(ConnectionId(2), Side::Right, CrossingStyle::Gap);
//! let path = connection.draw(&horizontal, &all);
//! assert!(path.is_some());
//!
//! // Nothing changed, so the previous path is still valid.
//! assert!(connection.draw(&horizontal, &all).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod connection;
mod intersection;
mod router;
mod segment;
mod side;

pub use connection::RectangularConnection;
pub use intersection::{IntersectionFinder, Intersections, crossing_offset};
pub use router::{Axis, ConnectionRouter, DragPermission, JointConstraint};
pub use segment::{CrossingStyle, DETOUR_RADIUS, GAP_HALF_WIDTH, build_connection_path};
pub use side::Side;
