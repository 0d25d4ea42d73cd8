//! Typed model of scoring-service replies.
//!
//! The scoring service answers in labeled free text, not JSON. This crate
//! owns the vocabulary and the parsers that turn those replies back into
//! typed data:
//! - [`TrackedIssue`] — the fixed set of impact categories bills are
//!   scored against;
//! - [`IssueStats`] — per-category integer scores plus an explanation,
//!   with [`IssueStats::parse`] for the score-block reply shape and
//!   [`combine`] for folding per-fragment tables into a document total;
//! - [`parse_press_reply`] — labeled-section parser for press-article
//!   sentiment replies;
//! - [`parse_bill_reply`] — labeled-section parser for bill
//!   interpretation replies;
//! - [`InterpretationMetadata`] — provenance attached to parsed results.
//!
//! All parsers are pure functions over the full reply text: nothing is
//! retained between calls, so reuse needs no reset discipline. Content
//! that fails to parse (a non-numeric score, an unknown label) is logged
//! and skipped, never fatal.

pub mod bill_report;
pub mod issues;
pub mod metadata;
pub mod report;
pub mod stats;

pub use bill_report::{BillReport, parse_bill_reply};
pub use issues::TrackedIssue;
pub use metadata::{InterpretationMetadata, SliceMetadata};
pub use report::{PressReport, parse_press_reply};
pub use stats::{IssueStats, combine};
