//! The request-translation pipeline.
//!
//! Every indexed access flows through four stages, leaves first:
//!
//! 1. **Normalizer** ([`request`]): pairs a [`RequestSelector`] with an
//!    explicit [`Origin`]; purely structural.
//! 2. **Resolver** ([`resolve`]): turns possibly-negative, possibly-omitted
//!    per-axis bounds into concrete non-negative bounds.
//! 3. **Translator** ([`translate`]): produces a [`CanonicalRegion`], a
//!    concrete box or point tagged with its frame.
//! 4. **Materializer** ([`to_storage`]): maps the canonical region onto
//!    row-major `[row, col]` storage indices and the Parent-frame box the
//!    container subset operation requires.
//!
//! The pipeline is stateless; every value is created per call and
//! discarded after the access completes.

mod origin;
pub mod request;
pub mod resolve;
mod storage;
mod translate;

pub use origin::Origin;
pub use request::{AxisRange, AxisSelector, Request, RequestSelector};
pub use resolve::{resolve_bound, resolve_scalar};
pub use storage::{to_storage, StorageIndex};
pub use translate::{translate, CanonicalRegion};
