//! Request selectors and the request normalizer.
//!
//! Every accepted indexing shape has one explicit variant in
//! [`RequestSelector`]; `From` conversions cover the ergonomic forms
//! (points, boxes, standard range syntax, per-axis pairs). Pairing a
//! selector with its origin is purely structural: no semantic validation
//! happens here, malformed selectors are caught by the translator.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::geom::{Box2I, Point2I};

use super::Origin;

/// A half-open `[start, stop)` interval along one axis.
///
/// A `None` endpoint means "use the extent boundary on that side". The
/// `step` field exists only so the translator can reject it: image
/// indexing supports unit stride only, and the range conversions never set
/// it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisRange {
    pub start: Option<i32>,
    pub stop: Option<i32>,
    pub step: Option<i32>,
}

impl AxisRange {
    /// Creates a range with the given optional endpoints and no step.
    #[inline]
    pub fn new(start: Option<i32>, stop: Option<i32>) -> Self {
        Self {
            start,
            stop,
            step: None,
        }
    }

    /// Creates the unbounded range covering a whole axis.
    #[inline]
    pub fn full() -> Self {
        Self::default()
    }

    /// Declares an explicit step, which the translator will reject.
    #[inline]
    pub fn with_step(mut self, step: i32) -> Self {
        self.step = Some(step);
        self
    }
}

impl From<Range<i32>> for AxisRange {
    fn from(range: Range<i32>) -> Self {
        AxisRange::new(Some(range.start), Some(range.end))
    }
}

impl From<RangeFrom<i32>> for AxisRange {
    fn from(range: RangeFrom<i32>) -> Self {
        AxisRange::new(Some(range.start), None)
    }
}

impl From<RangeTo<i32>> for AxisRange {
    fn from(range: RangeTo<i32>) -> Self {
        AxisRange::new(None, Some(range.end))
    }
}

impl From<RangeFull> for AxisRange {
    fn from(_: RangeFull) -> Self {
        AxisRange::full()
    }
}

/// One axis of a per-axis indexing request: a single coordinate or a
/// range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSelector {
    /// A single coordinate along this axis.
    Index(i32),
    /// A half-open interval along this axis.
    Range(AxisRange),
}

impl From<i32> for AxisSelector {
    fn from(index: i32) -> Self {
        AxisSelector::Index(index)
    }
}

impl From<AxisRange> for AxisSelector {
    fn from(range: AxisRange) -> Self {
        AxisSelector::Range(range)
    }
}

impl From<Range<i32>> for AxisSelector {
    fn from(range: Range<i32>) -> Self {
        AxisSelector::Range(range.into())
    }
}

impl From<RangeFrom<i32>> for AxisSelector {
    fn from(range: RangeFrom<i32>) -> Self {
        AxisSelector::Range(range.into())
    }
}

impl From<RangeTo<i32>> for AxisSelector {
    fn from(range: RangeTo<i32>) -> Self {
        AxisSelector::Range(range.into())
    }
}

impl From<RangeFull> for AxisSelector {
    fn from(_: RangeFull) -> Self {
        AxisSelector::Range(AxisRange::full())
    }
}

/// The shape of an indexing request, one variant per accepted form.
///
/// A bounded single-axis range has no conversion on purpose: only the bare
/// whole-image range (`..`) is meaningful without a second axis, and it
/// converts to [`RequestSelector::Full`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestSelector {
    /// A single pixel position; always addresses one element.
    Point(Point2I),
    /// A fully concrete rectangular region; always addresses a sub-view.
    Box(Box2I),
    /// Per-axis selectors in (x, y) order.
    Axes(AxisSelector, AxisSelector),
    /// The bare whole-image range: every pixel on both axes.
    Full,
}

impl From<Point2I> for RequestSelector {
    fn from(point: Point2I) -> Self {
        RequestSelector::Point(point)
    }
}

impl From<Box2I> for RequestSelector {
    fn from(region: Box2I) -> Self {
        RequestSelector::Box(region)
    }
}

impl From<RangeFull> for RequestSelector {
    fn from(_: RangeFull) -> Self {
        RequestSelector::Full
    }
}

impl<X, Y> From<(X, Y)> for RequestSelector
where
    X: Into<AxisSelector>,
    Y: Into<AxisSelector>,
{
    fn from((x, y): (X, Y)) -> Self {
        RequestSelector::Axes(x.into(), y.into())
    }
}

/// A normalized indexing request: a selector paired with an explicit
/// origin.
///
/// This is the normalizer stage. The origin is always an explicit field
/// rather than a trailing selector element; the accessor binding supplies
/// `Parent` when the caller does not choose a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Request {
    pub selector: RequestSelector,
    pub origin: Origin,
}

impl Request {
    /// Pairs a selector with an explicit origin.
    #[inline]
    pub fn new(selector: impl Into<RequestSelector>, origin: Origin) -> Self {
        Self {
            selector: selector.into(),
            origin,
        }
    }
}
