//! Integer bounding boxes in anchor + extent representation.

use serde::{Deserialize, Serialize};

use super::{Extent2I, Point2I};

/// An axis-aligned box on the integer pixel grid, stored as a minimum
/// corner (the anchor) plus an extent.
///
/// Accessors follow the half-open convention: `begin_*` is the first pixel
/// inside the box, `end_*` the first pixel past it. Construction is
/// permissive: empty extents are representable and queryable via
/// [`is_empty`](Box2I::is_empty) rather than rejected up front.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Box2I {
    pub min: Point2I,
    pub extent: Extent2I,
}

impl Box2I {
    /// Creates a box from its minimum corner and extent.
    #[inline]
    pub fn new(min: Point2I, extent: Extent2I) -> Self {
        Self { min, extent }
    }

    /// Creates a box spanning `[begin, end)` on both axes.
    #[inline]
    pub fn from_corners(begin: Point2I, end: Point2I) -> Self {
        Self::new(begin, begin.offset_to(end))
    }

    /// Returns the first x coordinate inside the box.
    #[inline]
    pub fn begin_x(&self) -> i32 {
        self.min.x
    }

    /// Returns the first y coordinate inside the box.
    #[inline]
    pub fn begin_y(&self) -> i32 {
        self.min.y
    }

    /// Returns the first x coordinate past the box.
    #[inline]
    pub fn end_x(&self) -> i32 {
        self.min.x + self.extent.width
    }

    /// Returns the first y coordinate past the box.
    #[inline]
    pub fn end_y(&self) -> i32 {
        self.min.y + self.extent.height
    }

    /// Returns the width of the box.
    #[inline]
    pub fn width(&self) -> i32 {
        self.extent.width
    }

    /// Returns the height of the box.
    #[inline]
    pub fn height(&self) -> i32 {
        self.extent.height
    }

    /// Returns true if the box covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.extent.is_empty()
    }

    /// Returns true if `point` lies inside the box.
    #[inline]
    pub fn contains_point(&self, point: Point2I) -> bool {
        point.x >= self.begin_x()
            && point.x < self.end_x()
            && point.y >= self.begin_y()
            && point.y < self.end_y()
    }

    /// Returns true if every pixel of `other` lies inside this box.
    ///
    /// An empty `other` is contained everywhere.
    pub fn contains(&self, other: &Box2I) -> bool {
        other.is_empty()
            || (other.begin_x() >= self.begin_x()
                && other.end_x() <= self.end_x()
                && other.begin_y() >= self.begin_y()
                && other.end_y() <= self.end_y())
    }

    /// Returns this box displaced by `offset`, keeping the extent.
    #[inline]
    pub fn shifted_by(&self, offset: Extent2I) -> Box2I {
        Box2I::new(self.min.shifted_by(offset), self.extent)
    }
}
