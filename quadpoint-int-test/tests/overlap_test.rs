//! Integration tests for region overlap counting and retrieval.

use quadpoint::{Point, QuadTree, Rect};
use quadpoint_int_test::test_util::{
    assert_subtree_consistent, init_logging, linear_count, random_points, random_rects,
    unit_grid,
};

#[test]
fn test_capacity_one_auto_subdivides() {
    init_logging();
    let tree = QuadTree::from_points_with_capacity(
        [Point::new(0.25, 0.25), Point::new(0.75, 0.75)],
        1,
    )
    .unwrap();

    assert!(tree.root().is_branch());
    assert_eq!(tree.count(), 2);

    // Each point sits in the quadrant child that covers it.
    let children = tree.root().children();
    assert_eq!(children[0].count(), 1); // bottom-left
    assert!(children[0].contains_point(Point::new(0.25, 0.25)));
    assert_eq!(children[2].count(), 1); // top-right
    assert!(children[2].contains_point(Point::new(0.75, 0.75)));
}

#[test]
fn test_quarter_grid_counts_2500() {
    init_logging();
    // 10,000 grid points on (0,0,1,1); the square (0.5,0.5,1.5,1.5) covers
    // exactly one quarter of them with inclusive boundary counting.
    let tree = QuadTree::from_points(unit_grid()).unwrap();
    let square = Rect::new(0.5, 0.5, 1.5, 1.5);

    assert_eq!(tree.count_overlapping_points(&square), 2_500);
    assert_eq!(tree.overlapping_points(&square).len(), 2_500);
}

#[test]
fn test_overlap_count_matches_linear_scan() {
    init_logging();
    let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
    let points = random_points(3_000, &bounds, 11);
    let tree = QuadTree::from_points(points.clone()).unwrap();

    for feature in random_rects(50, &Rect::new(-2.0, -2.0, 12.0, 12.0), 13) {
        let expected = linear_count(&points, &feature);
        assert_eq!(
            tree.count_overlapping_points(&feature),
            expected,
            "tree disagrees with flat scan for {feature}",
        );
        assert_eq!(tree.overlapping_points(&feature).len(), expected);
    }
}

#[test]
fn test_full_containment_shortcut() {
    init_logging();
    let bounds = Rect::new(0.0, 0.0, 1.0, 1.0);
    let points = random_points(1_000, &bounds, 29);
    let tree = QuadTree::from_points(points).unwrap();

    // A feature engulfing the whole bounding rectangle must count every
    // stored point.
    let everything = Rect::new(-1.0, -1.0, 2.0, 2.0);
    assert_eq!(tree.count_overlapping_points(&everything), 1_000);

    // The tree's own rectangle is itself such a feature.
    let own = *tree.rect();
    assert_eq!(tree.count_overlapping_points(&own), 1_000);
}

#[test]
fn test_disjoint_feature_counts_zero() {
    init_logging();
    let points = random_points(1_000, &Rect::new(0.0, 0.0, 1.0, 1.0), 31);
    let tree = QuadTree::from_points(points).unwrap();

    let far = Rect::new(10.0, 10.0, 11.0, 11.0);
    assert_eq!(tree.count_overlapping_points(&far), 0);
    assert!(tree.overlapping_points(&far).is_empty());
}

#[test]
fn test_boundary_points_counted_inclusively() {
    init_logging();
    let tree = QuadTree::from_points([
        Point::new(0.0, 0.0),
        Point::new(0.5, 0.5),
        Point::new(1.0, 1.0),
    ])
    .unwrap();

    // The query edge passes exactly through a stored point.
    let edge = Rect::new(0.5, 0.5, 2.0, 2.0);
    assert_eq!(tree.count_overlapping_points(&edge), 2);
}

#[test]
fn test_duplicate_points_counted_with_multiplicity() {
    init_logging();
    let mut points = vec![Point::new(0.25, 0.25); 7];
    points.extend([Point::new(0.75, 0.75), Point::new(0.9, 0.9)]);
    let tree = QuadTree::from_points_with_capacity(points, 2).unwrap();

    assert_eq!(tree.count(), 9);
    assert_subtree_consistent(tree.root());

    let lower_left = Rect::new(0.0, 0.0, 0.5, 0.5);
    assert_eq!(tree.count_overlapping_points(&lower_left), 7);
    assert_eq!(tree.overlapping_points(&lower_left).len(), 7);
}

#[test]
fn test_deep_tree_still_answers_queries() {
    init_logging();
    // A tight cluster forces deep subdivision; queries must stay exact.
    let mut points: Vec<Point> = (0..64)
        .map(|i| Point::new(0.5 + i as f64 * 1e-9, 0.5 + i as f64 * 1e-9))
        .collect();
    points.push(Point::new(0.0, 0.0));
    points.push(Point::new(1.0, 1.0));
    let tree = QuadTree::from_points_with_capacity(points.clone(), 2).unwrap();

    assert_eq!(tree.count(), points.len());
    assert_subtree_consistent(tree.root());

    let cluster = Rect::new(0.4999, 0.4999, 0.5001, 0.5001);
    assert_eq!(tree.count_overlapping_points(&cluster), 64);
}
