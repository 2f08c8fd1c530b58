//! Error types for quadtree operations.

use thiserror::Error;

use crate::point::Point;
use crate::rect::Rect;

/// Errors that can occur while building or mutating a quadtree.
///
/// Every failing operation is local, immediate, and leaves the tree exactly
/// as it was before the call: a rejected point appears in neither a node's
/// count nor its storage.
#[derive(Debug, Error)]
pub enum QuadError {
    /// A point was inserted into a node whose rectangle does not contain it.
    ///
    /// Callers must not retry against the same node, only against a
    /// correctly chosen ancestor or the root.
    #[error("point {point} lies outside node rectangle {rect}")]
    OutOfBounds {
        /// The rejected point.
        point: Point,
        /// The rectangle of the node that rejected it.
        rect: Rect,
    },

    /// An operation that assumes leaf-only state was invoked on a branch.
    #[error("invalid node state: {0}")]
    InvalidState(String),

    /// A bounding rectangle cannot be computed from an empty point set.
    #[error("cannot build a quadtree from an empty point set")]
    EmptyInput,

    /// Malformed input reached the point/feature codec.
    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Result type for quadtree operations.
pub type QuadResult<T> = Result<T, QuadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = QuadError::OutOfBounds {
            point: Point::new(1.1, 1.1),
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
        };
        let msg = err.to_string();
        assert!(msg.contains("(1.1, 1.1)"));
        assert!(msg.contains("Rect(0, 0, 1, 1)"));
    }

    #[test]
    fn test_empty_input_display() {
        let err = QuadError::EmptyInput;
        assert_eq!(err.to_string(), "cannot build a quadtree from an empty point set");
    }

    #[test]
    fn test_invalid_state_display() {
        let err = QuadError::InvalidState("only a leaf can be subdivided".to_string());
        assert!(err.to_string().contains("only a leaf"));
    }
}
