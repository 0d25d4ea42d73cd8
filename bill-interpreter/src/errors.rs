//! Typed errors for the interpretation pipeline.

use thiserror::Error;

use bill_slicer::SlicerError;

use crate::scorer::ScoreError;

/// Convenient alias for pipeline results.
pub type InterpretResult<T> = Result<T, InterpretError>;

/// Root error type for the bill-interpreter crate.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// Structural slicing failure (bad limit, unmatched version, ...).
    #[error(transparent)]
    Slicer(#[from] SlicerError),

    /// A scoring call on the single-fragment or aggregate path failed.
    /// Per-fragment failures on the multi-fragment path are skipped, not
    /// raised.
    #[error(transparent)]
    Score(#[from] ScoreError),

    /// Every fragment's scoring round trip failed; there is nothing to
    /// aggregate.
    #[error("all {total} fragments failed to score")]
    AllFragmentsFailed { total: usize },
}
