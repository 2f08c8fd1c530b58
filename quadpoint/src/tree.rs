//! Root-level quadtree construction and delegation.

use crate::error::{QuadError, QuadResult};
use crate::feature::Feature;
use crate::node::{SpatialNode, TreeStats, Walk};
use crate::point::{Entry, Point};
use crate::rect::Rect;

/// Default maximum number of entries a leaf holds before subdividing.
///
/// Roughly 16/ln 4: large enough that redistribution work after a split
/// stays bounded for uniformly spread points, small enough that leaf scans
/// stay short. A larger capacity trades tree depth for more linear scanning
/// per leaf.
pub const DEFAULT_LEAF_CAPACITY: usize = 11;

/// An adaptive point-region quadtree over a point set.
///
/// The tree computes a tight bounding rectangle from its initial points,
/// builds the root [`SpatialNode`] over it, and bulk-loads the points in
/// input order. It is a thin named entry point over the root node: the full
/// node query surface is exposed here, plus nothing else.
///
/// # Examples
///
/// ```rust
/// use quadpoint::{Point, QuadTree, Rect};
///
/// let tree = QuadTree::from_points([
///     Point::new(0.0, 0.0),
///     Point::new(0.5, 0.5),
///     Point::new(0.75, 0.25),
///     Point::new(1.0, 1.0),
/// ])?;
///
/// assert_eq!(*tree.rect(), Rect::new(0.0, 0.0, 1.0, 1.0));
/// assert_eq!(tree.count(), 4);
///
/// // Any rectangle is a valid query feature.
/// let upper_right = Rect::new(0.5, 0.5, 1.5, 1.5);
/// assert_eq!(tree.count_overlapping_points(&upper_right), 2);
/// # Ok::<(), quadpoint::QuadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QuadTree<M = ()> {
    root: SpatialNode<M>,
}

impl<M> QuadTree<M> {
    /// Builds a tree from (point, payload) pairs with the default leaf
    /// capacity.
    ///
    /// # Errors
    ///
    /// [`QuadError::EmptyInput`] if `entries` is empty; a bounding
    /// rectangle cannot be computed from zero points.
    pub fn from_entries<I>(entries: I) -> QuadResult<QuadTree<M>>
    where
        I: IntoIterator<Item = (Point, M)>,
    {
        Self::from_entries_with_capacity(entries, DEFAULT_LEAF_CAPACITY)
    }

    /// Builds a tree from (point, payload) pairs with an explicit leaf
    /// capacity.
    ///
    /// The bounding rectangle is the component-wise min/max over all input
    /// points; degenerate inputs (all points identical or colinear) yield a
    /// valid zero-width or zero-height rectangle whose boundary points are
    /// still accepted. Points are inserted in input order.
    ///
    /// # Errors
    ///
    /// [`QuadError::EmptyInput`] if `entries` is empty.
    pub fn from_entries_with_capacity<I>(entries: I, capacity: usize) -> QuadResult<QuadTree<M>>
    where
        I: IntoIterator<Item = (Point, M)>,
    {
        let entries: Vec<(Point, M)> = entries.into_iter().collect();
        let rect = Rect::from_points(entries.iter().map(|(p, _)| *p))
            .ok_or(QuadError::EmptyInput)?;
        let mut root = SpatialNode::new(rect, capacity);
        for (point, meta) in entries {
            root.add_point(point, meta)?;
        }
        log::debug!(
            "built quadtree over {} with {} points (leaf capacity {})",
            rect,
            root.count(),
            root.capacity(),
        );
        Ok(QuadTree { root })
    }

    /// The root node of the tree.
    pub fn root(&self) -> &SpatialNode<M> {
        &self.root
    }

    /// The bounding rectangle computed at construction.
    pub fn rect(&self) -> &Rect {
        self.root.rect()
    }

    /// Total number of stored entries.
    pub fn count(&self) -> usize {
        self.root.count()
    }

    /// Inclusive bounds test against the root rectangle.
    pub fn contains_point(&self, point: Point) -> bool {
        self.root.contains_point(point)
    }

    /// Inserts one more point with its payload.
    ///
    /// # Errors
    ///
    /// [`QuadError::OutOfBounds`] if the point falls outside the bounding
    /// rectangle computed at construction; the tree does not grow outward.
    pub fn insert(&mut self, point: Point, meta: M) -> QuadResult<()> {
        self.root.add_point(point, meta)
    }

    /// Counts stored points contained by the feature. See
    /// [`SpatialNode::count_overlapping_points`].
    pub fn count_overlapping_points<F>(&self, feature: &F) -> usize
    where
        F: Feature + ?Sized,
    {
        self.root.count_overlapping_points(feature)
    }

    /// Collects stored entries contained by the feature. See
    /// [`SpatialNode::overlapping_points`].
    pub fn overlapping_points<F>(&self, feature: &F) -> Vec<&Entry<M>>
    where
        F: Feature + ?Sized,
    {
        self.root.overlapping_points(feature)
    }

    /// All stored entries in fixed left-to-right child order.
    pub fn all_points(&self) -> Vec<&Entry<M>> {
        self.root.all_points()
    }

    /// Lazy depth-first traversal of all stored entries; each call starts a
    /// fresh traversal.
    pub fn walk(&self) -> Walk<'_, M> {
        self.root.walk()
    }

    /// Structure counters for the whole tree.
    pub fn stats(&self) -> TreeStats {
        self.root.stats()
    }
}

impl QuadTree<()> {
    /// Builds a tree from bare points with the default leaf capacity.
    ///
    /// # Errors
    ///
    /// [`QuadError::EmptyInput`] if `points` is empty.
    pub fn from_points<I>(points: I) -> QuadResult<QuadTree<()>>
    where
        I: IntoIterator<Item = Point>,
    {
        Self::from_entries(points.into_iter().map(|p| (p, ())))
    }

    /// Builds a tree from bare points with an explicit leaf capacity.
    ///
    /// # Errors
    ///
    /// [`QuadError::EmptyInput`] if `points` is empty.
    pub fn from_points_with_capacity<I>(points: I, capacity: usize) -> QuadResult<QuadTree<()>>
    where
        I: IntoIterator<Item = Point>,
    {
        Self::from_entries_with_capacity(points.into_iter().map(|p| (p, ())), capacity)
    }
}
