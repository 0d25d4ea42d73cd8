//! Typed errors for the bill-slicer crate.
//!
//! Structural problems (unmatched version code, unusable length limit) are
//! fatal to the document being processed and propagate to the caller.
//! A document with no extractable text is *not* an error: [`crate::slice`]
//! returns an empty fragment sequence for it.

use thiserror::Error;

/// Convenient alias for slicer results.
pub type SlicerResult<T> = Result<T, SlicerError>;

/// Root error type for the bill-slicer crate.
#[derive(Debug, Error)]
pub enum SlicerError {
    /// A version identifier matched no known publication-stage code.
    /// There is no silent default: an unranked version cannot be compared.
    #[error("version identifier {0:?} matches no publication stage")]
    UnknownPublishVersion(String),

    /// Canonical-version selection was asked to choose from nothing.
    #[error("no candidate texts to select a canonical version from")]
    NoCandidates,

    /// The fragment length limit leaves no room to slice, after reserving
    /// space for the document title prefix.
    #[error("fragment length limit {limit} is unusable (reserved prefix: {reserved})")]
    LimitTooSmall { limit: usize, reserved: usize },
}
