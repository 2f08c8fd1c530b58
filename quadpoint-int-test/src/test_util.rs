//! Test fixtures: logging bootstrap, point generators, and a linear-scan
//! reference implementation to cross-check tree queries against.

use std::sync::Once;

use quadpoint::{Feature, Point, Rect, SpatialNode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

static INIT: Once = Once::new();

/// Initializes test logging once per process.
pub fn init_logging() {
    INIT.call_once(|| {
        colog::init();
    });
}

/// The 100×100 grid with step 0.01 filling the unit square: x and y run
/// over 0.00, 0.01, ..., 0.99.
pub fn unit_grid() -> Vec<Point> {
    let mut points = Vec::with_capacity(100 * 100);
    for x in 0..100 {
        for y in 0..100 {
            points.push(Point::new(x as f64 / 100.0, y as f64 / 100.0));
        }
    }
    points
}

/// Uniformly random points over `rect`, reproducible from `seed`.
pub fn random_points(n: usize, rect: &Rect, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.gen_range(rect.min_x..=rect.max_x),
                rng.gen_range(rect.min_y..=rect.max_y),
            )
        })
        .collect()
}

/// Uniformly random sub-rectangles of `rect`, reproducible from `seed`.
pub fn random_rects(n: usize, rect: &Rect, seed: u64) -> Vec<Rect> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let x1 = rng.gen_range(rect.min_x..=rect.max_x);
            let x2 = rng.gen_range(rect.min_x..=rect.max_x);
            let y1 = rng.gen_range(rect.min_y..=rect.max_y);
            let y2 = rng.gen_range(rect.min_y..=rect.max_y);
            Rect::new(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2))
        })
        .collect()
}

/// The answer a flat scan gives; what the tree must agree with.
pub fn linear_count<F>(points: &[Point], feature: &F) -> usize
where
    F: Feature + ?Sized,
{
    points
        .iter()
        .filter(|p| feature.contains_point(**p))
        .count()
}

/// Walks the whole subtree checking the structural invariants: branch
/// counts equal child sums, leaf counts equal stored entries, and every
/// stored entry lies inside its leaf's rectangle.
pub fn assert_subtree_consistent<M>(node: &SpatialNode<M>) {
    if node.is_branch() {
        let sum: usize = node.children().iter().map(|c| c.count()).sum();
        assert_eq!(
            node.count(),
            sum,
            "branch count {} != child sum {} at {}",
            node.count(),
            sum,
            node.rect(),
        );
        assert!(node.entries().is_empty(), "branch stores no entries");
        for child in node.children() {
            assert!(node.rect().contains(child.rect()));
            assert_subtree_consistent(child);
        }
    } else {
        assert_eq!(node.count(), node.entries().len());
        for entry in node.entries() {
            assert!(
                node.rect().contains_point(entry.point),
                "entry {} stored outside leaf {}",
                entry.point,
                node.rect(),
            );
        }
    }
}
