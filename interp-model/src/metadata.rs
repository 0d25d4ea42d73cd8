//! Provenance attached to parsed interpretation results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which fragment of the sliced document an interpretation covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceMetadata {
    /// Fragment sequence index (0-based, document order).
    pub index: usize,
    /// Structural start address, in display form (e.g. `/2/0`).
    pub start: String,
    /// Structural end address, in display form.
    pub end: String,
}

/// Who produced an interpretation, and when.
///
/// Handed to the persistence collaborator alongside the parsed report;
/// `slice` is `None` for whole-document interpretations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationMetadata {
    /// Scoring model identifier.
    pub model: String,
    pub generated_at: DateTime<Utc>,
    pub slice: Option<SliceMetadata>,
}

impl InterpretationMetadata {
    /// Metadata for a whole-document interpretation, stamped now.
    pub fn now(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            generated_at: Utc::now(),
            slice: None,
        }
    }

    /// Metadata for one fragment's interpretation, stamped now.
    pub fn for_slice(model: impl Into<String>, index: usize, start: String, end: String) -> Self {
        Self {
            model: model.into(),
            generated_at: Utc::now(),
            slice: Some(SliceMetadata { index, start, end }),
        }
    }
}
