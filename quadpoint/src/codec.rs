//! GeoJSON-flavoured point/feature codec.
//!
//! Callers hand points around in loose shapes: a raw coordinate pair
//! `[x, y]`, a geometry record `{"type": "Point", "coordinates": [x, y]}`,
//! or a full feature record with attached properties. This module resolves
//! those shapes once at the boundary into the normalized `(Point, payload)`
//! pair the tree works with, and re-wraps stored entries on the way out.
//! The tree itself never sees un-normalized input.
//!
//! Coordinate components beyond x and y (e.g. an elevation) are ignored;
//! fewer than two is an error.

use serde_json::{json, Map, Value};

use crate::error::{QuadError, QuadResult};
use crate::point::{Entry, Point};
use crate::tree::QuadTree;

/// Metadata payload carried by codec-loaded entries: the feature's
/// `properties` value, or `None` where the input had none.
pub type Properties = Option<Value>;

/// Normalizes one loosely-shaped point value.
///
/// Accepts a raw coordinate pair, a `Point` geometry record, or a `Feature`
/// record whose geometry is a point. Feature `properties` become the
/// metadata payload (`null` and absent both normalize to `None`).
///
/// # Errors
///
/// [`QuadError::Encoding`] for any other shape, including non-`Point`
/// geometry types.
///
/// # Examples
///
/// ```rust
/// use quadpoint::codec::decode_str;
/// use quadpoint::Point;
///
/// let (point, meta) = decode_str(r#"[0.5, 0.25]"#)?;
/// assert_eq!(point, Point::new(0.5, 0.25));
/// assert!(meta.is_none());
/// # Ok::<(), quadpoint::QuadError>(())
/// ```
pub fn decode_point(value: &Value) -> QuadResult<(Point, Properties)> {
    match value {
        Value::Array(_) => Ok((coordinates(value)?, None)),
        Value::Object(map) => match type_name(map) {
            Some("Point") => Ok((point_geometry(map)?, None)),
            Some("Feature") => {
                let geometry = map
                    .get("geometry")
                    .ok_or_else(|| QuadError::Encoding("Feature has no \"geometry\"".to_string()))?;
                let point = decode_geometry(geometry)?;
                let properties = match map.get("properties") {
                    None | Some(Value::Null) => None,
                    Some(value) => Some(value.clone()),
                };
                Ok((point, properties))
            }
            Some(other) => Err(QuadError::Encoding(format!(
                "unsupported GeoJSON type \"{other}\""
            ))),
            None => Err(QuadError::Encoding(
                "object has no \"type\" field".to_string(),
            )),
        },
        _ => Err(QuadError::Encoding(
            "expected a coordinate pair, a Point geometry, or a Feature record".to_string(),
        )),
    }
}

/// Normalizes one loosely-shaped point from raw JSON text.
///
/// # Errors
///
/// [`QuadError::Encoding`] for unparsable JSON or an unaccepted shape.
pub fn decode_str(json: &str) -> QuadResult<(Point, Properties)> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| QuadError::Encoding(format!("invalid JSON: {e}")))?;
    decode_point(&value)
}

/// Normalizes an ordered sequence of points: a `FeatureCollection` record
/// or a bare JSON array of any accepted point shape. Input order is
/// preserved.
///
/// # Errors
///
/// [`QuadError::Encoding`] if the outer shape or any element is malformed.
pub fn decode_collection(value: &Value) -> QuadResult<Vec<(Point, Properties)>> {
    match value {
        Value::Object(map) => match type_name(map) {
            Some("FeatureCollection") => {
                let features = map.get("features").and_then(Value::as_array).ok_or_else(|| {
                    QuadError::Encoding(
                        "FeatureCollection has no \"features\" array".to_string(),
                    )
                })?;
                features.iter().map(decode_point).collect()
            }
            Some(other) => Err(QuadError::Encoding(format!(
                "expected a FeatureCollection, got \"{other}\""
            ))),
            None => Err(QuadError::Encoding(
                "object has no \"type\" field".to_string(),
            )),
        },
        Value::Array(items) => items.iter().map(decode_point).collect(),
        _ => Err(QuadError::Encoding(
            "expected a FeatureCollection or an array of points".to_string(),
        )),
    }
}

/// Builds a quadtree directly from GeoJSON text holding a
/// `FeatureCollection` or an array of accepted point shapes, with the
/// default leaf capacity.
///
/// # Errors
///
/// [`QuadError::Encoding`] for malformed input, [`QuadError::EmptyInput`]
/// for an empty collection.
pub fn tree_from_geojson(json: &str) -> QuadResult<QuadTree<Properties>> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| QuadError::Encoding(format!("invalid JSON: {e}")))?;
    QuadTree::from_entries(decode_collection(&value)?)
}

/// Re-wraps one stored (point, payload) pair as a GeoJSON Feature record.
///
/// The payload round-trips unchanged into `properties`; an absent payload
/// encodes as `null`.
pub fn encode_feature(point: Point, meta: Option<&Value>) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [point.x, point.y],
        },
        "properties": meta.cloned().unwrap_or(Value::Null),
    })
}

/// Re-wraps stored entries as a GeoJSON FeatureCollection record,
/// preserving entry order.
pub fn encode_collection<'a, I>(entries: I) -> Value
where
    I: IntoIterator<Item = &'a Entry<Properties>>,
{
    let features: Vec<Value> = entries
        .into_iter()
        .map(|e| encode_feature(e.point, e.meta.as_ref()))
        .collect();
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn type_name(map: &Map<String, Value>) -> Option<&str> {
    map.get("type").and_then(Value::as_str)
}

/// A geometry in feature position: a raw pair or a Point record, nothing
/// else (nested features are rejected).
fn decode_geometry(value: &Value) -> QuadResult<Point> {
    match value {
        Value::Array(_) => coordinates(value),
        Value::Object(map) => match type_name(map) {
            Some("Point") => point_geometry(map),
            Some(other) => Err(QuadError::Encoding(format!(
                "unsupported geometry type \"{other}\""
            ))),
            None => Err(QuadError::Encoding(
                "geometry has no \"type\" field".to_string(),
            )),
        },
        _ => Err(QuadError::Encoding(
            "geometry must be a coordinate pair or a Point record".to_string(),
        )),
    }
}

fn point_geometry(map: &Map<String, Value>) -> QuadResult<Point> {
    let coords = map.get("coordinates").ok_or_else(|| {
        QuadError::Encoding("Point geometry has no \"coordinates\"".to_string())
    })?;
    coordinates(coords)
}

fn coordinates(value: &Value) -> QuadResult<Point> {
    let items = value
        .as_array()
        .ok_or_else(|| QuadError::Encoding("coordinates must be an array".to_string()))?;
    if items.len() < 2 {
        return Err(QuadError::Encoding(
            "coordinates must hold at least [x, y]".to_string(),
        ));
    }
    let x = items[0]
        .as_f64()
        .ok_or_else(|| QuadError::Encoding("x coordinate is not a number".to_string()))?;
    let y = items[1]
        .as_f64()
        .ok_or_else(|| QuadError::Encoding("y coordinate is not a number".to_string()))?;
    Ok(Point::new(x, y))
}
