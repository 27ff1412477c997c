//! Integer pixel positions.

use serde::{Deserialize, Serialize};

use super::Extent2I;

/// A position on the integer pixel grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point2I {
    pub x: i32,
    pub y: i32,
}

impl Point2I {
    /// Creates a new position from x and y coordinates.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position displaced by `offset`.
    #[inline]
    pub fn shifted_by(self, offset: Extent2I) -> Self {
        Self::new(self.x + offset.width, self.y + offset.height)
    }

    /// Returns the displacement from this position to `other`.
    #[inline]
    pub fn offset_to(self, other: Point2I) -> Extent2I {
        Extent2I::new(other.x - self.x, other.y - self.y)
    }
}
