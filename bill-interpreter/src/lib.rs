//! Whole-bill interpretation pipeline.
//!
//! Flow for one document:
//!   1) slice the document tree into length-bounded fragments
//!      (`bill-slicer`);
//!   2) dispatch each fragment to the scoring service behind the
//!      [`ScoreService`] seam — one call per fragment, each round trip
//!      independently skippable;
//!   3) parse every reply into typed reports (`interp-model`);
//!   4) combine per-fragment score tables in document order and run one
//!      aggregate pass over the fragment summaries for the final report
//!      text.
//!
//! The network client behind [`ScoreService`] lives outside this
//! workspace; tests drive the pipeline with a mock. No boxed trait
//! objects and no `async-trait` — the seam is a plain trait returning
//! `impl Future`, dispatched statically.

pub mod cfg;
pub mod errors;
pub mod interpret;
pub mod prompt;
pub mod scorer;

pub use cfg::InterpreterConfig;
pub use errors::{InterpretError, InterpretResult};
pub use interpret::{BillInterpretation, SliceInterpretation, interpret_bill};
pub use scorer::{ScoreError, ScoreService};
