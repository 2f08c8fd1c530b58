//! Quadtree nodes: adaptive subdivision and recursive region queries.
//!
//! A [`SpatialNode`] owns one rectangle of space. While its population is
//! small it stores entries directly (a leaf); once population exceeds its
//! capacity it splits into four quadrant children and delegates storage to
//! them (a branch). The transition is one-way: a branch never collapses back
//! into a leaf, and there is no merge operation.
//!
//! Region queries walk the tree top-down with a three-way classification per
//! node: a rectangle fully engulfed by the query feature resolves in O(1)
//! from its subtree count, a disjoint rectangle is pruned, and only a
//! partially overlapping rectangle recurses. This pruning is what keeps a
//! query from degenerating into a linear scan of all points.

use std::slice;

use crate::error::{QuadError, QuadResult};
use crate::feature::{Feature, RegionMatch};
use crate::point::{Entry, Point};
use crate::rect::Rect;

/// Maximum subdivision depth.
///
/// Sixty-four halvings take a rectangle below f64 midpoint resolution, so
/// splitting past this depth cannot separate points any further. A leaf at
/// the cap simply holds its overflow.
pub const MAX_DEPTH: usize = 64;

/// Aggregate structure counters for one subtree, computed per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total entries stored in the subtree.
    pub total_points: usize,
    /// Number of leaf nodes.
    pub leaf_nodes: usize,
    /// Number of branch nodes.
    pub branch_nodes: usize,
    /// Deepest node depth in the subtree, measured from the tree root.
    pub max_depth: usize,
}

/// A node of the quadtree: either a leaf holding entries directly, or a
/// branch holding exactly four children that tile its rectangle.
///
/// Invariants, maintained across every insertion and subdivision:
///
/// 1. An entry is only ever stored under a node whose rectangle contains its
///    point (inclusive on all bounds).
/// 2. `count()` equals the actual population of the subtree: the stored
///    entries for a leaf, the sum of child counts for a branch.
/// 3. A branch's four child rectangles are the exact quadrants of its own.
/// 4. A branch never becomes a leaf again.
///
/// # Examples
///
/// ```rust
/// use quadpoint::{Point, Rect, SpatialNode};
///
/// let mut node: SpatialNode = SpatialNode::new(Rect::new(0.0, 0.0, 1.0, 1.0), 4);
/// node.add_point(Point::new(0.5, 0.5), ())?;
/// assert!(node.is_leaf());
/// assert_eq!(node.count(), 1);
/// # Ok::<(), quadpoint::QuadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SpatialNode<M = ()> {
    rect: Rect,
    capacity: usize,
    depth: usize,
    count: usize,
    kind: NodeKind<M>,
}

#[derive(Debug, Clone)]
enum NodeKind<M> {
    Leaf(Vec<Entry<M>>),
    Branch(Box<[SpatialNode<M>; 4]>),
}

impl<M> SpatialNode<M> {
    /// Creates an empty leaf node covering `rect`.
    ///
    /// `capacity` is the maximum number of entries the leaf holds before it
    /// subdivides; a capacity of zero is treated as one.
    pub fn new(rect: Rect, capacity: usize) -> SpatialNode<M> {
        Self::leaf(rect, capacity, 0)
    }

    fn leaf(rect: Rect, capacity: usize, depth: usize) -> SpatialNode<M> {
        SpatialNode {
            rect,
            capacity: capacity.max(1),
            depth,
            count: 0,
            kind: NodeKind::Leaf(Vec::new()),
        }
    }

    /// The rectangle this node covers.
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Total number of entries in this subtree.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The leaf capacity inherited by every node of this tree.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// This node's distance from the tree root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Checks if this node stores entries directly.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Checks if this node delegates storage to four children.
    pub fn is_branch(&self) -> bool {
        matches!(self.kind, NodeKind::Branch(_))
    }

    /// The four children of a branch, in the fixed child order bottom-left,
    /// top-left, top-right, bottom-right. Empty for a leaf.
    pub fn children(&self) -> &[SpatialNode<M>] {
        match &self.kind {
            NodeKind::Leaf(_) => &[],
            NodeKind::Branch(children) => &children[..],
        }
    }

    /// The entries stored directly at this node. Empty for a branch, which
    /// delegates storage to its children.
    pub fn entries(&self) -> &[Entry<M>] {
        match &self.kind {
            NodeKind::Leaf(entries) => entries,
            NodeKind::Branch(_) => &[],
        }
    }

    /// Inclusive bounds test against this node's rectangle only; children
    /// are not consulted.
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect.contains_point(point)
    }

    /// Adds a point with its payload to this subtree.
    ///
    /// A leaf appends the entry and subdivides if its population now exceeds
    /// capacity. A branch routes the entry to the first child (in fixed
    /// child order) whose rectangle contains the point; a point on a shared
    /// quadrant edge goes to that first match and is never duplicated into a
    /// sibling.
    ///
    /// # Errors
    ///
    /// [`QuadError::OutOfBounds`] if the point lies outside this node's
    /// rectangle. A failed call leaves the subtree untouched: the point
    /// appears in neither `count()` nor storage.
    pub fn add_point(&mut self, point: Point, meta: M) -> QuadResult<()> {
        let rect = self.rect;
        if !rect.contains_point(point) {
            return Err(QuadError::OutOfBounds { point, rect });
        }
        let over_capacity = match &mut self.kind {
            NodeKind::Leaf(entries) => {
                entries.push(Entry::new(point, meta));
                entries.len() > self.capacity
            }
            NodeKind::Branch(children) => {
                // The quadrants tile the rectangle, so a contained point
                // always lands in some child.
                let child = children
                    .iter_mut()
                    .find(|c| c.rect.contains_point(point))
                    .ok_or(QuadError::OutOfBounds { point, rect })?;
                child.add_point(point, meta)?;
                false
            }
        };
        self.count += 1;
        if over_capacity && self.splittable() {
            self.subdivide()?;
        }
        Ok(())
    }

    /// A crowded leaf only subdivides while splitting can make progress:
    /// below the depth cap, and with at least two distinct coordinates (a
    /// stack of coincident points can never be separated).
    fn splittable(&self) -> bool {
        if self.depth >= MAX_DEPTH {
            return false;
        }
        match &self.kind {
            NodeKind::Leaf(entries) => entries
                .first()
                .is_some_and(|first| entries.iter().any(|e| e.point != first.point)),
            NodeKind::Branch(_) => false,
        }
    }

    /// Splits this leaf into four quadrant children and redistributes its
    /// entries among them.
    ///
    /// The children are leaves covering the four equal quadrants of this
    /// node's rectangle, inheriting its capacity, one level deeper. Every
    /// stored entry is re-inserted into the first child containing it, then
    /// this node flips to a branch. Subdivision is the sole growth
    /// mechanism; there is no merge.
    ///
    /// # Errors
    ///
    /// [`QuadError::InvalidState`] if this node is already a branch.
    pub fn subdivide(&mut self) -> QuadResult<()> {
        let entries = match &mut self.kind {
            NodeKind::Leaf(entries) => std::mem::take(entries),
            NodeKind::Branch(_) => {
                return Err(QuadError::InvalidState(
                    "only a leaf can be subdivided".to_string(),
                ))
            }
        };
        let rect = self.rect;
        let mut children = Box::new(
            rect.quadrants()
                .map(|quadrant| SpatialNode::leaf(quadrant, self.capacity, self.depth + 1)),
        );
        for entry in entries {
            let child = children
                .iter_mut()
                .find(|c| c.rect.contains_point(entry.point))
                .ok_or(QuadError::OutOfBounds {
                    point: entry.point,
                    rect,
                })?;
            child.add_point(entry.point, entry.meta)?;
        }
        log::trace!("subdivided {} at depth {}", rect, self.depth);
        self.kind = NodeKind::Branch(children);
        Ok(())
    }

    /// Counts the entries in this subtree whose points the feature contains.
    ///
    /// Evaluated top-down with a three-way decision per node: a rectangle
    /// fully inside the feature contributes its whole subtree count without
    /// recursion, a disjoint rectangle contributes zero, and a partial
    /// overlap recurses (or, at a leaf, tests each stored point).
    pub fn count_overlapping_points<F>(&self, feature: &F) -> usize
    where
        F: Feature + ?Sized,
    {
        match feature.classify(&self.rect) {
            RegionMatch::Inside => self.count,
            RegionMatch::Disjoint => 0,
            RegionMatch::Partial => match &self.kind {
                NodeKind::Leaf(entries) => entries
                    .iter()
                    .filter(|e| feature.contains_point(e.point))
                    .count(),
                NodeKind::Branch(children) => children
                    .iter()
                    .map(|c| c.count_overlapping_points(feature))
                    .sum(),
            },
        }
    }

    /// Collects the entries in this subtree whose points the feature
    /// contains, in fixed left-to-right child order.
    ///
    /// Always yields exactly [`count_overlapping_points`] entries for the
    /// same feature.
    ///
    /// [`count_overlapping_points`]: SpatialNode::count_overlapping_points
    pub fn overlapping_points<F>(&self, feature: &F) -> Vec<&Entry<M>>
    where
        F: Feature + ?Sized,
    {
        let mut out = Vec::new();
        self.collect_overlapping(feature, &mut out);
        out
    }

    fn collect_overlapping<'a, F>(&'a self, feature: &F, out: &mut Vec<&'a Entry<M>>)
    where
        F: Feature + ?Sized,
    {
        match feature.classify(&self.rect) {
            RegionMatch::Inside => self.collect_all(out),
            RegionMatch::Disjoint => {}
            RegionMatch::Partial => match &self.kind {
                NodeKind::Leaf(entries) => {
                    out.extend(entries.iter().filter(|e| feature.contains_point(e.point)));
                }
                NodeKind::Branch(children) => {
                    for child in children.iter() {
                        child.collect_overlapping(feature, out);
                    }
                }
            },
        }
    }

    /// All entries in this subtree, concatenating leaf contents in fixed
    /// left-to-right child order.
    pub fn all_points(&self) -> Vec<&Entry<M>> {
        let mut out = Vec::with_capacity(self.count);
        self.collect_all(&mut out);
        out
    }

    fn collect_all<'a>(&'a self, out: &mut Vec<&'a Entry<M>>) {
        match &self.kind {
            NodeKind::Leaf(entries) => out.extend(entries.iter()),
            NodeKind::Branch(children) => {
                for child in children.iter() {
                    child.collect_all(out);
                }
            }
        }
    }

    /// A lazy depth-first traversal of every entry in this subtree.
    ///
    /// Children are visited in fixed order and leaf contents yielded as each
    /// leaf is reached. Every call starts a fresh traversal.
    pub fn walk(&self) -> Walk<'_, M> {
        Walk {
            stack: vec![self],
            current: [].iter(),
        }
    }

    /// Computes structure counters for this subtree.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.collect_stats(&mut stats);
        stats
    }

    fn collect_stats(&self, stats: &mut TreeStats) {
        stats.max_depth = stats.max_depth.max(self.depth);
        match &self.kind {
            NodeKind::Leaf(entries) => {
                stats.leaf_nodes += 1;
                stats.total_points += entries.len();
            }
            NodeKind::Branch(children) => {
                stats.branch_nodes += 1;
                for child in children.iter() {
                    child.collect_stats(stats);
                }
            }
        }
    }
}

/// Lazy depth-first iterator over the entries of a subtree.
///
/// Created by [`SpatialNode::walk`]; finite and restartable.
pub struct Walk<'a, M> {
    stack: Vec<&'a SpatialNode<M>>,
    current: slice::Iter<'a, Entry<M>>,
}

impl<'a, M> Iterator for Walk<'a, M> {
    type Item = &'a Entry<M>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.next() {
                return Some(entry);
            }
            let node = self.stack.pop()?;
            match &node.kind {
                NodeKind::Leaf(entries) => self.current = entries.iter(),
                NodeKind::Branch(children) => {
                    // Reversed push keeps pop order equal to child order.
                    for child in children.iter().rev() {
                        self.stack.push(child);
                    }
                }
            }
        }
    }
}
