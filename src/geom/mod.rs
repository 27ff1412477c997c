//! Geometry value types for the integer pixel grid.
//!
//! These are the rectangle and point collaborators consumed by the
//! request-translation pipeline: [`Point2I`] for positions, [`Extent2I`]
//! for sizes, and [`Box2I`] for anchor + extent bounding boxes with
//! half-open accessors.

mod boxes;
mod extent;
mod point;

pub use boxes::Box2I;
pub use extent::Extent2I;
pub use point::Point2I;
