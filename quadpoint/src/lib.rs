//! # Quadpoint - Adaptive Point-Region Quadtree
//!
//! This crate provides a spatial index over 2D points for efficient
//! containment and overlap queries against polygonal regions ("features"),
//! where a flat scan of points against a polygon would be too slow, e.g.
//! counting how many of N points fall inside an arbitrary polygon, repeated
//! for many polygons.
//!
//! ## Features
//!
//! - **Adaptive Subdivision**: leaves split into four quadrants only where
//!   population demands it
//! - **Pruned Region Queries**: a fully engulfed subtree resolves in O(1)
//!   from its count; a disjoint subtree is skipped entirely
//! - **Opaque Metadata**: entries carry an arbitrary payload that
//!   round-trips unchanged through insertion and retrieval
//! - **Pluggable Geometry**: queries go through the [`Feature`] trait;
//!   `Rect` is the built-in axis-aligned feature, real polygons plug in via
//!   the `quadpoint_geo` adapter crate
//! - **Loose Input Codec**: GeoJSON-flavoured point/feature records
//!   normalize once at the boundary ([`codec`])
//!
//! ## Quick Start
//!
//! ```rust
//! use quadpoint::{Point, QuadTree, Rect};
//!
//! # fn main() -> Result<(), quadpoint::QuadError> {
//! // Build an index over a point set; the bounding rectangle is computed
//! // from the points themselves.
//! let tree = QuadTree::from_points([
//!     Point::new(0.0, 0.0),
//!     Point::new(0.5, 0.5),
//!     Point::new(0.75, 0.25),
//!     Point::new(1.0, 1.0),
//! ])?;
//!
//! // Count points inside a query region.
//! let region = Rect::new(0.6, 0.0, 1.0, 0.4);
//! assert_eq!(tree.count_overlapping_points(&region), 1);
//!
//! // Or retrieve them.
//! let hits = tree.overlapping_points(&region);
//! assert_eq!(hits[0].point, Point::new(0.75, 0.25));
//! # Ok(())
//! # }
//! ```
//!
//! Insertion is single-threaded (`&mut self`); after construction the tree
//! is logically immutable and `&self` queries may run from many threads
//! without locks. There is no point deletion and no tree persistence.

pub mod codec;
pub mod error;
pub mod feature;
pub mod node;
pub mod point;
pub mod rect;
pub mod tree;

// Re-export core types
pub use error::{QuadError, QuadResult};
pub use feature::{Feature, RegionMatch};
pub use node::{SpatialNode, TreeStats, Walk, MAX_DEPTH};
pub use point::{Entry, Point};
pub use rect::Rect;
pub use tree::{QuadTree, DEFAULT_LEAF_CAPACITY};
