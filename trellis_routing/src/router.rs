// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectilinear joint constraints.

use kurbo::{Point, Rect};
use smallvec::SmallVec;
use trellis_geometry::move_on_pixel;

use crate::side::Side;

/// A layout axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal position.
    X,
    /// Vertical position.
    Y,
}

/// Joints `first` and `first + 1` share their position on `axis`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct JointConstraint {
    /// Index of the first joint of the pair.
    pub first: usize,
    /// The axis both joints share.
    pub axis: Axis,
}

bitflags::bitflags! {
    /// Axes along which a joint may be dragged directly.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct DragPermission: u8 {
        /// May move horizontally.
        const X = 0b01;
        /// May move vertically.
        const Y = 0b10;
    }
}

impl Default for DragPermission {
    fn default() -> Self {
        Self::all()
    }
}

/// Keeps the joints of one connection rectilinear.
///
/// A connection runs source → joint 0 → … → joint N-1 → target. Segment `i` joins
/// point `i` and point `i + 1` of that sequence, and segments alternate between
/// horizontal and vertical starting from the orientation of the source side.
///
/// The router holds an explicit list of equality constraints between consecutive
/// joints, re-derived by [`set_joint_count`](Self::set_joint_count) whenever the
/// joint list changes, plus per-joint [`DragPermission`]s. Joint positions are
/// passed in as rectangles (layout origin plus joint size) owned by the caller.
#[derive(Clone, Debug)]
pub struct ConnectionRouter {
    source_side: Side,
    constraints: SmallVec<[JointConstraint; 8]>,
    permissions: SmallVec<[DragPermission; 8]>,
}

impl ConnectionRouter {
    /// Creates a router for a connection leaving `source_side`, with no joints.
    #[must_use]
    pub fn new(source_side: Side) -> Self {
        Self {
            source_side,
            constraints: SmallVec::new(),
            permissions: SmallVec::new(),
        }
    }

    /// The source connector's side.
    #[must_use]
    pub fn source_side(&self) -> Side {
        self.source_side
    }

    /// Number of joints the constraints were built for.
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.permissions.len()
    }

    /// The current constraints, one per pair of consecutive joints.
    #[must_use]
    pub fn constraints(&self) -> &[JointConstraint] {
        &self.constraints
    }

    /// The drag permission of joint `index`, if it exists.
    #[must_use]
    pub fn permission(&self, index: usize) -> Option<DragPermission> {
        self.permissions.get(index).copied()
    }

    /// Returns `true` if segment `index` is horizontal.
    #[must_use]
    pub fn is_segment_horizontal(&self, index: usize) -> bool {
        self.source_side.is_horizontal() == (index % 2 == 0)
    }

    /// Tears down the current constraints and rebuilds them for `count` joints.
    ///
    /// Every joint starts out free to move on both axes; call
    /// [`update_boundary_permissions`](Self::update_boundary_permissions) afterwards to
    /// restrict the boundary joints.
    pub fn set_joint_count(&mut self, count: usize) {
        self.constraints.clear();
        self.permissions.clear();
        self.permissions.resize(count, DragPermission::all());

        for first in 0..count.saturating_sub(1) {
            let axis = if self.is_segment_horizontal(first) {
                Axis::X
            } else {
                Axis::Y
            };
            self.constraints.push(JointConstraint { first, axis });
        }
        tracing::trace!(joints = count, "rebuilt joint constraints");
    }

    /// Restricts the boundary joints to the selection state of the adjacent nodes.
    ///
    /// The first joint may move across its segment to the source only while the
    /// source node is selected. The same holds for the last joint and the target.
    pub fn update_boundary_permissions(&mut self, source_selected: bool, target_selected: bool) {
        let count = self.permissions.len();
        if count == 0 {
            return;
        }
        for permission in &mut self.permissions {
            *permission = DragPermission::all();
        }

        let first_cross = if self.is_segment_horizontal(0) {
            DragPermission::Y
        } else {
            DragPermission::X
        };
        self.permissions[0].set(first_cross, source_selected);

        let last_cross = if self.is_segment_horizontal(count) {
            DragPermission::Y
        } else {
            DragPermission::X
        };
        self.permissions[count - 1].set(last_cross, target_selected);
    }

    /// Drags joint `index` to the layout origin `origin`.
    ///
    /// The move is masked by the joint's [`DragPermission`], then propagated outward
    /// along the constraint chain so every constrained pair shares its axis again.
    /// Returns `true` if any joint moved.
    ///
    /// A joint list whose length does not match the constraints is left untouched.
    pub fn drag_joint(&self, joints: &mut [Rect], index: usize, origin: Point) -> bool {
        if joints.len() != self.permissions.len() || index >= joints.len() {
            tracing::debug!(
                joints = joints.len(),
                expected = self.permissions.len(),
                index,
                "joint drag skipped: joint list out of sync"
            );
            return false;
        }

        let permission = self.permissions[index];
        let current = joints[index].origin();
        let target = Point::new(
            if permission.contains(DragPermission::X) {
                origin.x
            } else {
                current.x
            },
            if permission.contains(DragPermission::Y) {
                origin.y
            } else {
                current.y
            },
        );
        if target == current {
            return false;
        }
        joints[index] = joints[index].with_origin(target);

        for constraint in &self.constraints[index..] {
            let from = joints[constraint.first].origin();
            let next = constraint.first + 1;
            joints[next] = copy_axis(joints[next], from, constraint.axis);
        }
        for constraint in self.constraints[..index].iter().rev() {
            let from = joints[constraint.first + 1].origin();
            let prev = constraint.first;
            joints[prev] = copy_axis(joints[prev], from, constraint.axis);
        }

        tracing::trace!(index, x = target.x, y = target.y, "joint dragged");
        true
    }

    /// Realigns the first and last joints with the source and target points.
    ///
    /// `points` is the full ordered point list (source, joint centers, target). The
    /// first joint is moved to share the source's coordinate across segment 0, and
    /// the last joint to share the target's coordinate across the last segment.
    /// Both the joint layout (pixel-aligned, offset by half the joint size) and the
    /// corresponding entry of `points` are rewritten.
    ///
    /// Inconsistent lists (fewer than three points, or a joint count that does not
    /// match) are skipped.
    pub fn check_first_and_last_joints(&self, points: &mut [Point], joints: &mut [Rect]) {
        if joints.is_empty() || points.len() != joints.len() + 2 {
            tracing::debug!(
                points = points.len(),
                joints = joints.len(),
                "endpoint realignment skipped: point list out of sync"
            );
            return;
        }

        let last_segment = points.len() - 2;
        let last_joint = joints.len() - 1;

        align_joint(
            points,
            &mut joints[0],
            0,
            1,
            self.is_segment_horizontal(0),
        );
        align_joint(
            points,
            &mut joints[last_joint],
            points.len() - 1,
            points.len() - 2,
            self.is_segment_horizontal(last_segment),
        );
    }
}

fn copy_axis(joint: Rect, from: Point, axis: Axis) -> Rect {
    let origin = joint.origin();
    match axis {
        Axis::X => joint.with_origin(Point::new(from.x, origin.y)),
        Axis::Y => joint.with_origin(Point::new(origin.x, from.y)),
    }
}

/// Moves the joint at `points[joint_index]` onto the line through `points[anchor_index]`.
///
/// A horizontal segment aligns the y coordinates, a vertical one the x coordinates.
fn align_joint(
    points: &mut [Point],
    joint: &mut Rect,
    anchor_index: usize,
    joint_index: usize,
    horizontal: bool,
) {
    let anchor = points[anchor_index];
    let origin = joint.origin();
    if horizontal {
        let layout_y = move_on_pixel(anchor.y - joint.height() / 2.0);
        *joint = joint.with_origin(Point::new(origin.x, layout_y));
        points[joint_index].y = anchor.y;
    } else {
        let layout_x = move_on_pixel(anchor.x - joint.width() / 2.0);
        *joint = joint.with_origin(Point::new(layout_x, origin.y));
        points[joint_index].x = anchor.x;
    }
}
