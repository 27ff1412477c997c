use thiserror::Error;

/// The main error type for pixframe indexing operations.
///
/// Every variant reflects a malformed caller-supplied request, not a
/// transient condition: nothing here is retried or degraded. An indexing
/// operation is atomic; either the full region/point is resolved and
/// accessed, or nothing is accessed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PixframeError {
    #[error("ranges with steps are not supported in image indexing")]
    StepNotSupported,

    #[error("mixed indices of the form (int, range) are not supported")]
    MixedSelectorKinds,

    #[error(
        "negative index {index} is not permitted with the Parent origin; \
         use Local to index relative to the end, or Point2I/Box2I indexing \
         to access negative pixels in Parent coordinates"
    )]
    NegativeParentIndex { index: i32 },

    #[error("a point selector takes a scalar value, not a bulk pixel source")]
    ScalarRequired,
}
