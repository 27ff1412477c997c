//! Mapping of canonical regions onto row-major storage.

use std::ops::Range;

use crate::geom::{Box2I, Extent2I};

use super::translate::CanonicalRegion;
use super::Origin;

/// Backing-store coordinates for one access, in `[row, col]` order.
///
/// Storage is row-major: the y axis indexes rows and the x axis indexes
/// columns, so every emitted pair swaps the request's (x, y) order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageIndex {
    /// A rectangular block of rows and columns. `parent_box` is the same
    /// region expressed in the Parent frame, the only frame the container
    /// subset operation accepts.
    Region {
        rows: Range<i32>,
        cols: Range<i32>,
        parent_box: Box2I,
    },
    /// A single element.
    Element { row: i32, col: i32 },
}

/// Converts a canonical region into storage indices.
///
/// `parent_box` is the container's Parent-frame bounding box; its anchor
/// `(x0, y0)` is subtracted from Parent coordinates and left out of Local
/// ones, which are already storage-relative.
pub fn to_storage(region: &CanonicalRegion, parent_box: &Box2I) -> StorageIndex {
    let x0 = parent_box.begin_x();
    let y0 = parent_box.begin_y();
    match *region {
        CanonicalRegion::Point(point, origin) => {
            let (col, row) = match origin {
                Origin::Parent => (point.x - x0, point.y - y0),
                Origin::Local => (point.x, point.y),
            };
            StorageIndex::Element { row, col }
        }
        CanonicalRegion::Box(region, origin) => match origin {
            Origin::Parent => StorageIndex::Region {
                rows: region.begin_y() - y0..region.end_y() - y0,
                cols: region.begin_x() - x0..region.end_x() - x0,
                parent_box: region,
            },
            Origin::Local => StorageIndex::Region {
                rows: region.begin_y()..region.end_y(),
                cols: region.begin_x()..region.end_x(),
                parent_box: region.shifted_by(Extent2I::new(x0, y0)),
            },
        },
    }
}
