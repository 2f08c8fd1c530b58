//! # Quadpoint Geo - Polygon Features for Quadpoint
//!
//! This crate adapts real polygon geometries to the `quadpoint::Feature`
//! trait by delegating the exact geometric tests to the [`geo`] crate. The
//! core tree only ever asks three predicates of a query region; this crate
//! answers them against a polygon's true boundary, not just its bounding
//! box.
//!
//! Every predicate pre-filters with the polygon's own axis-aligned bounding
//! rectangle, cached at construction, before running the exact test; the
//! tree does not duplicate that optimization on the caller's behalf.
//!
//! ## Boundary semantics
//!
//! Containment follows `geo`'s DE-9IM semantics: a point exactly on the
//! polygon boundary is *not* contained. This differs from `quadpoint::Rect`
//! used as a feature, which is inclusive on all four bounds.
//!
//! ## Quick Start
//!
//! ```rust
//! use quadpoint::{Point, QuadTree};
//! use quadpoint_geo::PolygonFeature;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tree = QuadTree::from_points([
//!     Point::new(0.2, 0.6),
//!     Point::new(0.6, 0.2),
//!     Point::new(0.9, 0.1),
//! ])?;
//!
//! // A triangle over the lower-right half of the unit square.
//! let triangle = PolygonFeature::from_exterior([
//!     (0.0, 0.0),
//!     (1.0, 0.0),
//!     (1.0, 1.0),
//! ])?;
//!
//! assert_eq!(tree.count_overlapping_points(&triangle), 2);
//! # Ok(())
//! # }
//! ```

use geo::{coord, BoundingRect, Contains, Intersects, LineString, MultiPolygon, Polygon, Rect as GeoRect};
use thiserror::Error;

use quadpoint::{Feature, Point, Rect};

/// Errors raised while adapting a geometry into a query feature.
#[derive(Debug, Error)]
pub enum GeoFeatureError {
    /// The geometry has no extent, so its bounding rectangle is undefined.
    #[error("geometry is empty: bounding rectangle undefined")]
    EmptyGeometry,
}

/// A polygon query feature with a cached bounding rectangle.
///
/// Holes are respected: a point inside an interior ring is not contained.
#[derive(Debug, Clone)]
pub struct PolygonFeature {
    polygon: Polygon<f64>,
    bbox: Rect,
}

impl PolygonFeature {
    /// Wraps a polygon, caching its bounding rectangle.
    ///
    /// # Errors
    ///
    /// [`GeoFeatureError::EmptyGeometry`] if the polygon has no coordinates.
    pub fn new(polygon: Polygon<f64>) -> Result<PolygonFeature, GeoFeatureError> {
        let bbox = to_rect(polygon.bounding_rect())?;
        Ok(PolygonFeature { polygon, bbox })
    }

    /// Builds a hole-free polygon feature from an exterior ring of
    /// coordinate pairs. The ring is closed automatically.
    ///
    /// # Errors
    ///
    /// [`GeoFeatureError::EmptyGeometry`] if `exterior` is empty.
    pub fn from_exterior<I>(exterior: I) -> Result<PolygonFeature, GeoFeatureError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let ring: Vec<(f64, f64)> = exterior.into_iter().collect();
        Self::new(Polygon::new(LineString::from(ring), vec![]))
    }

    /// The wrapped polygon.
    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    /// The cached axis-aligned bounding rectangle.
    pub fn bounding_rect(&self) -> &Rect {
        &self.bbox
    }
}

impl Feature for PolygonFeature {
    fn contains_point(&self, point: Point) -> bool {
        self.bbox.contains_point(point)
            && self.polygon.contains(&geo::Point::new(point.x, point.y))
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        self.bbox.contains(rect) && self.polygon.contains(&rect_polygon(rect))
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        self.bbox.intersects(rect) && self.polygon.intersects(&rect_polygon(rect))
    }
}

/// A multi-polygon query feature: contained means contained by the union of
/// the parts.
#[derive(Debug, Clone)]
pub struct MultiPolygonFeature {
    polygons: MultiPolygon<f64>,
    bbox: Rect,
}

impl MultiPolygonFeature {
    /// Wraps a multi-polygon, caching the bounding rectangle of the union.
    ///
    /// # Errors
    ///
    /// [`GeoFeatureError::EmptyGeometry`] if there are no coordinates.
    pub fn new(polygons: MultiPolygon<f64>) -> Result<MultiPolygonFeature, GeoFeatureError> {
        let bbox = to_rect(polygons.bounding_rect())?;
        Ok(MultiPolygonFeature { polygons, bbox })
    }

    /// The wrapped multi-polygon.
    pub fn polygons(&self) -> &MultiPolygon<f64> {
        &self.polygons
    }

    /// The cached axis-aligned bounding rectangle of the union.
    pub fn bounding_rect(&self) -> &Rect {
        &self.bbox
    }
}

impl Feature for MultiPolygonFeature {
    fn contains_point(&self, point: Point) -> bool {
        self.bbox.contains_point(point)
            && self.polygons.contains(&geo::Point::new(point.x, point.y))
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        self.bbox.contains(rect) && self.polygons.contains(&rect_polygon(rect))
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        self.bbox.intersects(rect) && self.polygons.intersects(&rect_polygon(rect))
    }
}

fn rect_polygon(rect: &Rect) -> Polygon<f64> {
    GeoRect::new(
        coord! { x: rect.min_x, y: rect.min_y },
        coord! { x: rect.max_x, y: rect.max_y },
    )
    .to_polygon()
}

fn to_rect(bounds: Option<GeoRect<f64>>) -> Result<Rect, GeoFeatureError> {
    let bounds = bounds.ok_or(GeoFeatureError::EmptyGeometry)?;
    Ok(Rect::new(
        bounds.min().x,
        bounds.min().y,
        bounds.max().x,
        bounds.max().y,
    ))
}
