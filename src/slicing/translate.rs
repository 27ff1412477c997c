//! Translation of normalized requests into canonical regions.

use crate::error::PixframeError;
use crate::geom::{Box2I, Extent2I, Point2I};

use super::request::{AxisSelector, Request, RequestSelector};
use super::resolve::{resolve_bound, resolve_scalar};
use super::Origin;

/// A fully resolved indexing request.
///
/// Invariant: a `Parent` region's coordinates already include the
/// container anchor; a `Local` region's coordinates are zero-based and are
/// added to the anchor by the storage materializer before touching the
/// backing buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanonicalRegion {
    /// A rectangular sub-region and the frame its coordinates live in.
    Box(Box2I, Origin),
    /// A single pixel position and the frame its coordinates live in.
    Point(Point2I, Origin),
}

/// Resolves a request into a canonical region.
///
/// `bbox` looks up the container's bounding box in a requested frame;
/// usually this is a closure over [`Container::bbox`]. Concrete point and
/// box selectors pass through unchanged with their origin. Per-axis pairs
/// must be two ranges or two scalars; ranges resolve their bounds against
/// the frame-appropriate bounding box, with omitted bounds defaulting to
/// the extent boundaries.
///
/// [`Container::bbox`]: crate::container::Container::bbox
pub fn translate<F>(request: &Request, bbox: F) -> Result<CanonicalRegion, PixframeError>
where
    F: Fn(Origin) -> Box2I,
{
    let origin = request.origin;
    match request.selector {
        RequestSelector::Point(point) => Ok(CanonicalRegion::Point(point, origin)),
        RequestSelector::Box(region) => Ok(CanonicalRegion::Box(region, origin)),
        // The bare whole-image range covers the full footprint in either
        // frame; resolve it in Local where the box is zero-based.
        RequestSelector::Full => Ok(CanonicalRegion::Box(bbox(Origin::Local), Origin::Local)),
        RequestSelector::Axes(x, y) => translate_axes(x, y, origin, bbox(origin)),
    }
}

fn translate_axes(
    x: AxisSelector,
    y: AxisSelector,
    origin: Origin,
    bbox: Box2I,
) -> Result<CanonicalRegion, PixframeError> {
    match (x, y) {
        (AxisSelector::Range(xr), AxisSelector::Range(yr)) => {
            if xr.step.is_some() || yr.step.is_some() {
                return Err(PixframeError::StepNotSupported);
            }
            let x_start = resolve_bound(xr.start, bbox.width(), origin, bbox.begin_x())?;
            let x_stop = resolve_bound(xr.stop, bbox.width(), origin, bbox.end_x())?;
            let y_start = resolve_bound(yr.start, bbox.height(), origin, bbox.begin_y())?;
            let y_stop = resolve_bound(yr.stop, bbox.height(), origin, bbox.end_y())?;
            let region = Box2I::new(
                Point2I::new(x_start, y_start),
                Extent2I::new(x_stop - x_start, y_stop - y_start),
            );
            Ok(CanonicalRegion::Box(region, origin))
        }
        (AxisSelector::Index(xi), AxisSelector::Index(yi)) => {
            let x = resolve_scalar(xi, bbox.width(), origin)?;
            let y = resolve_scalar(yi, bbox.height(), origin)?;
            Ok(CanonicalRegion::Point(Point2I::new(x, y), origin))
        }
        _ => Err(PixframeError::MixedSelectorKinds),
    }
}
