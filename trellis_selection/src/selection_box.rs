// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rubber-band rectangle.

use kurbo::{Point, Rect};

/// The rubber-band rectangle spanned by the drag-start and current pointer points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionBox {
    /// Where the drag started, in content coordinates.
    pub start: Point,
    /// Where the pointer is now, in content coordinates.
    pub end: Point,
}

impl SelectionBox {
    /// Creates a box from two corner points given in any order.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The normalized rectangle: `(min x, min y)` origin, non-negative size.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    /// Returns `true` if `bounds` lies entirely inside the box (edges inclusive).
    #[must_use]
    pub fn contains_rect(&self, bounds: Rect) -> bool {
        let sel = self.rect();
        let bounds = bounds.abs();
        bounds.x0 >= sel.x0 && bounds.y0 >= sel.y0 && bounds.x1 <= sel.x1 && bounds.y1 <= sel.y1
    }

    /// Returns `true` if `point` lies inside the box (edges inclusive).
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        let sel = self.rect();
        point.x >= sel.x0 && point.x <= sel.x1 && point.y >= sel.y0 && point.y <= sel.y1
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::SelectionBox;

    #[test]
    fn rect_is_normalized() {
        let b = SelectionBox::new(Point::new(100.0, 20.0), Point::new(40.0, 90.0));
        let r = b.rect();
        assert_eq!(r, Rect::new(40.0, 20.0, 100.0, 90.0));
        assert_eq!(r.width(), 60.0);
        assert_eq!(r.height(), 70.0);
    }

    #[test]
    fn containment_is_inclusive() {
        let b = SelectionBox::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(b.contains_rect(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!b.contains_rect(Rect::new(0.0, 0.0, 10.5, 10.0)));
        assert!(b.contains_point(Point::new(10.0, 0.0)));
        assert!(!b.contains_point(Point::new(10.0, -0.1)));
    }

    #[test]
    fn degenerate_box_contains_only_its_point() {
        let p = Point::new(5.0, 5.0);
        let b = SelectionBox::new(p, p);
        assert!(b.contains_point(p));
        assert!(!b.contains_rect(Rect::new(4.0, 4.0, 6.0, 6.0)));
    }
}
