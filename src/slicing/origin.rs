//! Coordinate-frame origin for indexing requests.

use serde::{Deserialize, Serialize};

/// Selects the coordinate frame used to interpret positions in an indexing
/// request.
///
/// `Parent` coordinates are absolute: they respect the container's anchor
/// (`xy0`), so a pixel keeps its address when the container is a cutout of
/// a larger mosaic. `Local` coordinates are zero-based at the container's
/// own minimum corner.
///
/// The two frames carry asymmetric rules for negative indices; see
/// [`resolve_scalar`](super::resolve_scalar).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Absolute coordinates; positions include the container anchor.
    #[default]
    Parent,
    /// Zero-based coordinates relative to the container footprint.
    Local,
}
