//! Point-cloud generators for benchmarks

use quadpoint::{Point, Rect};
use rand::Rng;

/// Generate points uniformly spread over a square of the given extent.
pub fn uniform_points(count: usize, extent: f64) -> Vec<Point> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            Point::new(
                rng.gen_range(0.0..extent),
                rng.gen_range(0.0..extent),
            )
        })
        .collect()
}

/// Generate points bunched around a handful of cluster centers, the skewed
/// distribution that drives deep subdivision.
pub fn clustered_points(count: usize, extent: f64, clusters: usize) -> Vec<Point> {
    let mut rng = rand::thread_rng();
    let clusters = clusters.max(1);
    let centers: Vec<Point> = (0..clusters)
        .map(|_| {
            Point::new(
                rng.gen_range(0.0..extent),
                rng.gen_range(0.0..extent),
            )
        })
        .collect();
    let spread = extent / 50.0;
    (0..count)
        .map(|i| {
            let center = centers[i % clusters];
            Point::new(
                (center.x + rng.gen_range(-spread..spread)).clamp(0.0, extent),
                (center.y + rng.gen_range(-spread..spread)).clamp(0.0, extent),
            )
        })
        .collect()
}

/// Generate random query rectangles roughly a tenth of the extent on a side.
pub fn query_rects(count: usize, extent: f64) -> Vec<Rect> {
    let mut rng = rand::thread_rng();
    let side = extent / 10.0;
    (0..count)
        .map(|_| {
            let x = rng.gen_range(0.0..extent - side);
            let y = rng.gen_range(0.0..extent - side);
            Rect::new(x, y, x + side, y + side)
        })
        .collect()
}
