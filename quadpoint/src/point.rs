//! Point and stored-entry types.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A 2D point (x, y).
///
/// Points are plain coordinate pairs; any number of identical points may be
/// stored in a tree and each remains a distinct entry.
///
/// # Examples
///
/// ```rust
/// use quadpoint::Point;
///
/// let p = Point::new(0.5, 0.25);
/// assert_eq!(p.x, 0.5);
/// assert_eq!(p.y, 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a new point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point::new(x, y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A stored point together with its caller-supplied metadata payload.
///
/// The payload type `M` is opaque to the tree and round-trips unchanged
/// through insertion and retrieval. Plain point sets use `M = ()`; data
/// loaded through the codec uses `M = Option<serde_json::Value>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<M> {
    /// The stored coordinates.
    pub point: Point,
    /// The payload attached at insertion time.
    pub meta: M,
}

impl<M> Entry<M> {
    /// Creates an entry pairing a point with its payload.
    pub fn new(point: Point, meta: M) -> Entry<M> {
        Entry { point, meta }
    }
}
