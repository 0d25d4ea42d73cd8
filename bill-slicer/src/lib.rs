//! Structural slicing of legislative documents.
//!
//! A bill arrives as a tree (built by the document source via [`TreeBuilder`])
//! and leaves as an ordered sequence of [`Fragment`]s, each short enough to be
//! submitted to a length-limited scoring service:
//!
//! 1) **Version selection** — when several textual renderings of the same
//!    bill exist, [`select_canonical`] picks the most mature one by its
//!    publication-stage code (`ih`, `enr`, ...).
//! 2) **Slicing** — [`slice`] walks the tree bottom-up, packing whole
//!    sections into fragments bounded by the configured limit and falling
//!    back to a midpoint whitespace split only for oversized atomic leaves.
//! 3) **Addressing** — every fragment carries [`TreePath`] start/end
//!    addresses into the tree, so downstream consumers can associate
//!    scoring replies back to document positions without duplicating text.
//!
//! Slicing is pure and synchronous: no I/O, no shared state. Independent
//! documents can be sliced concurrently with no coordination.

pub mod errors;
pub mod slicer;
pub mod split;
pub mod tree;
pub mod version;

pub use errors::{SlicerError, SlicerResult};
pub use slicer::{Fragment, slice};
pub use split::split_in_half;
pub use tree::{DocumentTree, NodeId, TreeBuilder, TreePath};
pub use version::{CandidateText, PublishVersion, select_canonical};
