//! Negative-index resolution against a single axis.
//!
//! Negative values are end-relative under `Local`, as in regular Python
//! negative indexing. Under `Parent` they are always an error: a parent
//! anchor may itself be negative, so a negative parent coordinate is a
//! legitimate absolute position, and silently reinterpreting it as an
//! end-relative offset would corrupt results without any signal. Negative
//! absolute pixels are reachable through `Point2I`/`Box2I` selectors
//! instead.

use crate::error::PixframeError;

use super::Origin;

/// Resolves one optional range bound against an axis of length `size`.
///
/// A `None` bound resolves to `default`, which the caller supplies from
/// the extent boundary on that side. Non-negative bounds pass through
/// unchanged; frame-relative semantics are applied downstream.
pub fn resolve_bound(
    bound: Option<i32>,
    size: i32,
    origin: Origin,
    default: i32,
) -> Result<i32, PixframeError> {
    match bound {
        None => Ok(default),
        Some(index) => resolve_scalar(index, size, origin),
    }
}

/// Resolves one concrete scalar index against an axis of length `size`.
pub fn resolve_scalar(index: i32, size: i32, origin: Origin) -> Result<i32, PixframeError> {
    if index >= 0 {
        return Ok(index);
    }
    match origin {
        Origin::Local => Ok(size + index),
        Origin::Parent => Err(PixframeError::NegativeParentIndex { index }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonnegative_passes_through() {
        assert_eq!(resolve_scalar(0, 10, Origin::Parent), Ok(0));
        assert_eq!(resolve_scalar(7, 10, Origin::Parent), Ok(7));
        assert_eq!(resolve_scalar(7, 10, Origin::Local), Ok(7));
        // Past-the-end indices are the container's concern, not ours.
        assert_eq!(resolve_scalar(12, 10, Origin::Local), Ok(12));
    }

    #[test]
    fn test_negative_is_end_relative_under_local() {
        assert_eq!(resolve_scalar(-1, 10, Origin::Local), Ok(9));
        assert_eq!(resolve_scalar(-10, 10, Origin::Local), Ok(0));
    }

    #[test]
    fn test_negative_is_rejected_under_parent() {
        assert_eq!(
            resolve_scalar(-1, 10, Origin::Parent),
            Err(PixframeError::NegativeParentIndex { index: -1 })
        );
    }

    #[test]
    fn test_missing_bound_takes_default() {
        assert_eq!(resolve_bound(None, 10, Origin::Parent, 42), Ok(42));
        assert_eq!(resolve_bound(None, 10, Origin::Local, 0), Ok(0));
    }

    #[test]
    fn test_present_bound_ignores_default() {
        assert_eq!(resolve_bound(Some(3), 10, Origin::Parent, 42), Ok(3));
        assert_eq!(resolve_bound(Some(-3), 10, Origin::Local, 42), Ok(7));
        assert_eq!(
            resolve_bound(Some(-3), 10, Origin::Parent, 42),
            Err(PixframeError::NegativeParentIndex { index: -3 })
        );
    }
}
