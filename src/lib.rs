//! Pixframe: two-frame coordinate indexing for 2-D pixel containers.
//!
//! Images, masks, and variance planes cut from a larger mosaic are
//! addressable in two frames: the absolute **Parent** frame, which
//! respects the container's anchor offset (`xy0`), and the zero-based
//! **Local** frame relative to the container's own footprint. Pixframe
//! translates heterogeneous indexing requests (points, rectangles,
//! per-axis ranges, per-axis scalars) into one canonical origin-correct
//! request and maps it onto row-major `[row, col]` storage.
//!
//! # Modules
//!
//! - [`geom`]: integer points, extents, and bounding boxes
//! - [`slicing`]: the stateless request-translation pipeline
//! - [`container`]: the [`Container`] capability trait and the [`Indexed`]
//!   accessor binding
//! - [`image`]: [`Image`], a reference container backed by `ndarray`
//! - [`error`]: error types for pixframe operations
//!
//! # Example
//!
//! ```
//! use pixframe::{Box2I, Extent2I, Image, Indexed, Origin, Point2I};
//!
//! let bbox = Box2I::new(Point2I::new(10, 20), Extent2I::new(5, 5));
//! let mut img = Image::new(bbox, 0_i32);
//!
//! // The same pixel, addressed in each frame.
//! img.set(Point2I::new(10, 20), 7).unwrap();
//! let v = img.get_in(Point2I::new(0, 0), Origin::Local).unwrap();
//! assert_eq!(v.into_element(), Some(7));
//!
//! // Negative indices are end-relative under Local only.
//! img.set_in((-1, -1), Origin::Local, 9).unwrap();
//! let corner = img.get_in((-1, -1), Origin::Local).unwrap();
//! assert_eq!(corner.into_element(), Some(9));
//! assert!(img.get((-1, -1)).is_err());
//! ```

pub mod container;
pub mod error;
pub mod geom;
pub mod image;
pub mod slicing;

pub use container::{AssignOutcome, Container, Factory, Fetched, Indexed, RegionValue};
pub use error::PixframeError;
pub use geom::{Box2I, Extent2I, Point2I};
pub use image::Image;
pub use slicing::{
    AxisRange, AxisSelector, CanonicalRegion, Origin, Request, RequestSelector, StorageIndex,
};
