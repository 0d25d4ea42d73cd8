//! Recursive structural slicer.
//!
//! Walks the document tree bottom-up and packs whole subtrees into
//! fragments bounded by the caller's length limit:
//! - a subtree whose text already fits becomes one fragment;
//! - an oversized childless node falls back to the midpoint splitter;
//! - otherwise child fragments are coalesced greedily, joined with a
//!   single `"\n"` — the character the `limit - 1` bound reserves room for.
//!
//! When the document has a title line and more than one fragment comes out,
//! the title is prefixed to every fragment so each scoring call still sees
//! which bill it is looking at; the limit is reduced by the reserved prefix
//! length before slicing starts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{SlicerError, SlicerResult};
use crate::split::split_in_half;
use crate::tree::{DocumentTree, NodeId, TreePath};

/// A length-bounded, addressable slice of one document's text.
///
/// Fragments are emitted in document order with sequence indices `0..N-1`;
/// joining their texts with `"\n"` (after stripping the repeated title
/// prefix, if any) reconstructs the tree's extractable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Identifier of the owning document.
    pub document_id: String,
    /// 0-based position in final document order.
    pub index: usize,
    /// Address of the first node covered by this fragment.
    pub start: TreePath,
    /// Address of the last node covered by this fragment.
    pub end: TreePath,
    pub text: String,
}

/// Partition `tree` into fragments no longer than `max_len` characters.
///
/// A tree with no extractable text yields `Ok(vec![])`: nothing to score,
/// not an error. `max_len` must leave a usable limit after reserving room
/// for the title prefix, otherwise [`SlicerError::LimitTooSmall`].
pub fn slice(tree: &DocumentTree, document_id: &str, max_len: usize) -> SlicerResult<Vec<Fragment>> {
    // Reserve room for "{title}\n\n" up front; the prefix is only applied
    // when more than one fragment is produced.
    let reserved = tree.title().map(|t| t.len() + 2).unwrap_or(0);
    let limit = max_len
        .checked_sub(reserved)
        .filter(|l| *l >= 2)
        .ok_or(SlicerError::LimitTooSmall {
            limit: max_len,
            reserved,
        })?;

    let units = slice_node(tree, tree.root(), TreePath::root(), limit);

    let prefix = match tree.title() {
        Some(title) if units.len() > 1 => Some(format!("{title}\n\n")),
        _ => None,
    };

    let fragments: Vec<Fragment> = units
        .into_iter()
        .enumerate()
        .map(|(index, u)| Fragment {
            document_id: document_id.to_string(),
            index,
            start: u.start,
            end: u.end,
            text: match &prefix {
                Some(p) => format!("{p}{}", u.text),
                None => u.text,
            },
        })
        .collect();

    debug!(
        "sliced document {} into {} fragments (max_len={}, limit={})",
        document_id,
        fragments.len(),
        max_len,
        limit
    );

    Ok(fragments)
}

/// An unnumbered fragment-in-progress.
struct Unit {
    start: TreePath,
    end: TreePath,
    text: String,
}

fn slice_node(tree: &DocumentTree, id: NodeId, path: TreePath, limit: usize) -> Vec<Unit> {
    let text = tree.text_of(id);
    if text.is_empty() {
        return Vec::new();
    }

    // Whole subtree fits: one fragment, recursion stops.
    if text.len() < limit {
        return vec![Unit {
            start: path.clone(),
            end: path,
            text,
        }];
    }

    // Atomic oversized leaf: no structure left, split the raw text. Both
    // halves keep the node's own address (coarser than the text).
    if tree.children(id).is_empty() {
        return split_oversized(&text, limit)
            .into_iter()
            .map(|half| Unit {
                start: path.clone(),
                end: path.clone(),
                text: half,
            })
            .collect();
    }

    // Recurse in document order; the node's own text leads as a
    // pseudo-child so nothing is lost on mixed nodes.
    let mut units: Vec<Unit> = Vec::new();
    if let Some(own) = tree.own_text(id) {
        if !own.is_empty() {
            if own.len() < limit {
                units.push(Unit {
                    start: path.clone(),
                    end: path.clone(),
                    text: own.to_string(),
                });
            } else {
                units.extend(split_oversized(own, limit).into_iter().map(|half| Unit {
                    start: path.clone(),
                    end: path.clone(),
                    text: half,
                }));
            }
        }
    }
    for (i, &child) in tree.children(id).iter().enumerate() {
        units.extend(slice_node(tree, child, path.child(i), limit));
    }

    coalesce(units, limit)
}

/// Greedily merge adjacent units while the joined text stays under the
/// limit. The bound check is strict against `limit - 1`: the spare
/// character is consumed by the `"\n"` joining separator, so the effective
/// cap observed by callers is `limit - 1`.
fn coalesce(units: Vec<Unit>, limit: usize) -> Vec<Unit> {
    let mut out: Vec<Unit> = Vec::new();
    let mut buf: Option<Unit> = None;

    for unit in units {
        match buf.as_mut() {
            None => buf = Some(unit),
            Some(b) if b.text.len() + unit.text.len() < limit - 1 => {
                b.text.push('\n');
                b.text.push_str(&unit.text);
                b.end = unit.end;
            }
            Some(_) => {
                out.push(buf.take().expect("buffer checked non-empty"));
                buf = Some(unit);
            }
        }
    }
    if let Some(b) = buf {
        out.push(b);
    }
    out
}

/// Re-apply the midpoint splitter until every piece fits.
///
/// A piece the splitter cannot shrink (a single character wider than the
/// limit) is emitted oversized rather than recursed on; this is the one
/// best-effort exception to the length bound.
fn split_oversized(text: &str, limit: usize) -> Vec<String> {
    if text.len() < limit {
        return vec![text.to_string()];
    }
    let (left, right) = split_in_half(text);
    if left.len() == text.len() || right.len() == text.len() {
        return vec![text.to_string()];
    }
    let mut out = split_oversized(&left, limit);
    out.extend(split_oversized(&right, limit));
    out
}
