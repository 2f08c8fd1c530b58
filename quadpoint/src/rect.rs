//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::point::Point;

/// An axis-aligned rectangle given by its minimum and maximum corners.
///
/// `Rect` is the spatial unit of the tree: every node covers one rectangle,
/// and subdivision splits a rectangle into four equal quadrants. All
/// containment tests are inclusive on all four bounds, so a point exactly on
/// an edge belongs to every rectangle that edge touches.
///
/// # Examples
///
/// ```rust
/// use quadpoint::{Point, Rect};
///
/// let rect = Rect::new(0.0, 0.0, 1.0, 1.0);
/// assert!(rect.contains_point(Point::new(0.5, 0.5)));
/// assert!(rect.contains_point(Point::new(0.0, 1.0))); // corners count
/// assert!(!rect.contains_point(Point::new(1.1, 0.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

impl Rect {
    /// Creates a new rectangle from its ordered bounds.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Rect {
        Rect {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Computes the tight bounding rectangle of a point set as the
    /// component-wise min/max over all points.
    ///
    /// Returns `None` for an empty iterator; a bounding rectangle is
    /// undefined without at least one point. A single point or a colinear
    /// set yields a valid zero-width and/or zero-height rectangle.
    pub fn from_points<I>(points: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut rect = Rect::new(first.x, first.y, first.x, first.y);
        for p in iter {
            rect.min_x = rect.min_x.min(p.x);
            rect.min_y = rect.min_y.min(p.y);
            rect.max_x = rect.max_x.max(p.x);
            rect.max_y = rect.max_y.max(p.y);
        }
        Some(rect)
    }

    /// Returns the width of the rectangle.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the rectangle.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Checks if a point lies within the rectangle, inclusive on all bounds.
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Checks if this rectangle fully contains another rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Checks if this rectangle intersects another rectangle.
    ///
    /// Touching edges count as intersection, consistent with the inclusive
    /// point test.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Splits the rectangle into four equal quadrants by bisecting both axes
    /// at the midpoint.
    ///
    /// The quadrants are returned in the tree's fixed child order:
    /// bottom-left, top-left, top-right, bottom-right. They tile the parent
    /// exactly, overlapping only on the shared midlines.
    pub fn quadrants(&self) -> [Rect; 4] {
        let Point { x: cx, y: cy } = self.center();
        [
            Rect::new(self.min_x, self.min_y, cx, cy),
            Rect::new(self.min_x, cy, cx, self.max_y),
            Rect::new(cx, cy, self.max_x, self.max_y),
            Rect::new(cx, self.min_y, self.max_x, cy),
        ]
    }

    /// Checks if the rectangle has zero width or zero height.
    pub fn is_degenerate(&self) -> bool {
        self.min_x == self.max_x || self.min_y == self.max_y
    }

    /// Checks if the bounds are ordered (min <= max on both axes).
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.min_x, 1.0);
        assert_eq!(rect.min_y, 2.0);
        assert_eq!(rect.max_x, 3.0);
        assert_eq!(rect.max_y, 4.0);
    }

    #[test]
    fn test_from_points() {
        let rect = Rect::from_points([
            Point::new(0.0, 0.0),
            Point::new(0.5, 0.5),
            Point::new(0.75, 0.25),
            Point::new(1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(rect, Rect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Rect::from_points([]).is_none());
    }

    #[test]
    fn test_from_points_single() {
        let rect = Rect::from_points([Point::new(2.0, 3.0)]).unwrap();
        assert_eq!(rect, Rect::new(2.0, 3.0, 2.0, 3.0));
        assert!(rect.is_degenerate());
        assert!(rect.is_valid());
        assert!(rect.contains_point(Point::new(2.0, 3.0)));
    }

    #[test]
    fn test_from_points_colinear() {
        let rect = Rect::from_points([
            Point::new(0.0, 1.0),
            Point::new(0.5, 1.0),
            Point::new(1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(rect, Rect::new(0.0, 1.0, 1.0, 1.0));
        assert!(rect.is_degenerate());
        // Points on a degenerate boundary are still inside.
        assert!(rect.contains_point(Point::new(0.5, 1.0)));
    }

    #[test]
    fn test_width_height_center() {
        let rect = Rect::new(0.0, 0.0, 10.0, 4.0);
        assert_eq!(rect.width(), 10.0);
        assert_eq!(rect.height(), 4.0);
        assert_eq!(rect.center(), Point::new(5.0, 2.0));
    }

    #[test]
    fn test_contains_point_inclusive() {
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);

        assert!(rect.contains_point(Point::new(0.5, 0.5))); // interior
        assert!(rect.contains_point(Point::new(0.0, 0.0))); // corner
        assert!(rect.contains_point(Point::new(1.0, 1.0))); // corner
        assert!(rect.contains_point(Point::new(0.0, 0.5))); // edge
        assert!(!rect.contains_point(Point::new(1.1, 1.1)));
        assert!(!rect.contains_point(Point::new(-0.1, 0.5)));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = Rect::new(2.0, 2.0, 8.0, 8.0);
        let partial = Rect::new(5.0, 5.0, 15.0, 15.0);

        assert!(outer.contains(&inner));
        assert!(outer.contains(&outer));
        assert!(!outer.contains(&partial));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        let c = Rect::new(20.0, 20.0, 30.0, 30.0);
        let touching = Rect::new(10.0, 10.0, 20.0, 20.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&touching));
        assert!(a.intersects(&a));
    }

    #[test]
    fn test_quadrants_tile_parent() {
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        let quads = rect.quadrants();

        assert_eq!(quads[0], Rect::new(0.0, 0.0, 0.5, 0.5)); // bottom-left
        assert_eq!(quads[1], Rect::new(0.0, 0.5, 0.5, 1.0)); // top-left
        assert_eq!(quads[2], Rect::new(0.5, 0.5, 1.0, 1.0)); // top-right
        assert_eq!(quads[3], Rect::new(0.5, 0.0, 1.0, 0.5)); // bottom-right

        // Pairwise distinct, all inside the parent, area preserved.
        for (i, a) in quads.iter().enumerate() {
            assert!(rect.contains(a));
            for b in quads.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        let area: f64 = quads.iter().map(|q| q.width() * q.height()).sum();
        assert_eq!(area, rect.width() * rect.height());
    }

    #[test]
    fn test_quadrants_of_degenerate_rect() {
        let rect = Rect::new(0.0, 1.0, 1.0, 1.0);
        let quads = rect.quadrants();
        for q in &quads {
            assert!(q.is_valid());
            assert!(rect.contains(q));
        }
        // Every contained point still lands in at least one quadrant.
        let p = Point::new(0.25, 1.0);
        assert!(quads.iter().any(|q| q.contains_point(p)));
    }

    #[test]
    fn test_negative_coordinates() {
        let rect = Rect::new(-10.0, -5.0, 10.0, 5.0);
        assert_eq!(rect.width(), 20.0);
        assert_eq!(rect.height(), 10.0);
        assert_eq!(rect.center(), Point::new(0.0, 0.0));
        assert!(rect.contains_point(Point::new(-10.0, 5.0)));
    }

    #[test]
    fn test_display() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(format!("{}", rect), "Rect(1, 2, 3, 4)");
    }

    #[test]
    fn test_serialization() {
        let rect = Rect::new(1.5, 2.5, 3.5, 4.5);
        let json = serde_json::to_string(&rect).unwrap();
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(rect, back);
    }
}
