//! The query-feature contract.
//!
//! A *feature* is an arbitrary polygonal region used as a query argument.
//! The tree never constructs or inspects geometries; it only asks a feature
//! the three predicates below against its own rectangles and points, and
//! aggregates the answers. Any geometry provider that can answer them can
//! drive a query: `Rect` itself implements the trait, and the
//! `quadpoint_geo` crate adapts real polygons.

use crate::point::Point;
use crate::rect::Rect;

/// Three-way classification of a node rectangle against a query feature.
///
/// Returned by [`Feature::classify`] and consumed by the query algorithms:
/// `Inside` resolves a whole subtree in O(1), `Disjoint` prunes it, and only
/// `Partial` recurses further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionMatch {
    /// The feature fully contains the rectangle.
    Inside,
    /// The feature overlaps the rectangle without containing it.
    Partial,
    /// The feature and the rectangle share no area.
    Disjoint,
}

/// A polygonal query region, tested through containment and intersection
/// predicates against the feature's true boundary.
///
/// Implementations are expected to pre-filter with their own axis-aligned
/// bounding box before running an exact geometric test; the tree does not
/// duplicate that optimization on the caller's behalf.
pub trait Feature {
    /// Checks if the feature contains a point.
    fn contains_point(&self, point: Point) -> bool;

    /// Checks if the feature fully contains a rectangle.
    fn contains_rect(&self, rect: &Rect) -> bool;

    /// Checks if the feature intersects a rectangle.
    fn intersects_rect(&self, rect: &Rect) -> bool;

    /// Classifies a rectangle against this feature in a single call.
    fn classify(&self, rect: &Rect) -> RegionMatch {
        if self.contains_rect(rect) {
            RegionMatch::Inside
        } else if self.intersects_rect(rect) {
            RegionMatch::Partial
        } else {
            RegionMatch::Disjoint
        }
    }
}

/// An axis-aligned rectangle is the trivial feature: its own bounds are its
/// boundary, with inclusive edge semantics.
impl Feature for Rect {
    fn contains_point(&self, point: Point) -> bool {
        Rect::contains_point(self, point)
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        self.contains(rect)
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        self.intersects(rect)
    }
}
