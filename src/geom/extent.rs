//! Sizes of rectangular pixel regions.

use serde::{Deserialize, Serialize};

/// The size of a rectangular region on the integer pixel grid.
///
/// Negative dimensions are representable so that malformed regions can be
/// reported by the consumer rather than prevented here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extent2I {
    pub width: i32,
    pub height: i32,
}

impl Extent2I {
    /// Creates a new extent from width and height.
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns true if the extent covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns the number of pixels covered, or zero if empty.
    #[inline]
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            i64::from(self.width) * i64::from(self.height)
        }
    }
}
