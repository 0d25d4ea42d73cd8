//! Arena representation of a parsed document.
//!
//! The original markup (bill XML, scraped HTML, ...) is parsed by the
//! document source; what crosses into this crate is a flat arena of nodes
//! with integer ids and ordered child lists. Structural addresses are
//! [`TreePath`]s — the sequence of child indices from the root — which are
//! cheap to encode, compare and persist, unlike live markup-node pointers.

use serde::{Deserialize, Serialize};

/// Index of a node inside a [`DocumentTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Structural address of a node: child indices from the root, in order.
///
/// The root itself is the empty path. Paths order lexicographically, which
/// coincides with document order for ancestors-first traversal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreePath(pub Vec<usize>);

impl TreePath {
    /// Address of the document root.
    pub fn root() -> Self {
        TreePath(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut p = self.0.clone();
        p.push(index);
        TreePath(p)
    }
}

impl std::fmt::Display for TreePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for i in &self.0 {
            write!(f, "/{i}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct Node {
    text: Option<String>,
    children: Vec<NodeId>,
}

/// Immutable, ordered, rooted tree over a document's extractable text.
///
/// Owned by one slicing invocation and discarded afterwards; nodes are
/// never mutated once the builder finishes.
#[derive(Debug, Clone)]
pub struct DocumentTree {
    nodes: Vec<Node>,
    title: Option<String>,
}

impl DocumentTree {
    /// Start building a tree. The root node exists from the start.
    pub fn builder() -> TreeBuilder {
        TreeBuilder {
            nodes: vec![Node {
                text: None,
                children: Vec::new(),
            }],
            title: None,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Document-level title/metadata line, if the source supplied one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Node's own text payload (not including descendants).
    pub fn own_text(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].text.as_deref()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// All text dominated by `id` in document order.
    ///
    /// The node's own text comes first, then each child's text, joined with
    /// a single `"\n"`. Empty parts contribute nothing, so a text-free tree
    /// yields an empty string.
    pub fn text_of(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        self.collect_text(id, &mut parts);
        parts.join("\n")
    }

    fn collect_text(&self, id: NodeId, out: &mut Vec<String>) {
        if let Some(t) = self.own_text(id) {
            if !t.is_empty() {
                out.push(t.to_string());
            }
        }
        for &c in self.children(id) {
            self.collect_text(c, out);
        }
    }
}

/// Builder used by the document source to assemble a [`DocumentTree`].
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    title: Option<String>,
}

impl TreeBuilder {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Set the document-level title line (prefixed to multi-fragment output).
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Append a child under `parent`, optionally carrying a text payload.
    pub fn child(&mut self, parent: NodeId, text: Option<&str>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            text: text.map(str::to_string),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn finish(self) -> DocumentTree {
        DocumentTree {
            nodes: self.nodes,
            title: self.title,
        }
    }
}
