//! Outline data model.
//!
//! Nodes live in a flat table owned by [`Hierarchy`]. Children are stored as
//! indices in document order and `parent` is a plain index, so the tree holds
//! no ownership cycles. The root sits at index 0 and is its own parent; that
//! self-reference only marks where ancestor climbing stops.

use serde::{Deserialize, Serialize};

/// One heading occurrence handed to the builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingDescriptor {
    /// Anchor id of the heading, if any
    pub slug: Option<String>,
    /// Display text
    pub text: String,
    /// Nesting depth (2 for `<h2>`)
    pub level: usize,
}

impl HeadingDescriptor {
    pub fn new(slug: Option<&str>, text: &str, level: usize) -> Self {
        Self {
            slug: slug.map(str::to_string),
            text: text.to_string(),
            level,
        }
    }
}

/// Index of a node inside its [`Hierarchy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The synthetic root
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// A heading (or the synthetic root) in the outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) slug: Option<String>,
    pub(crate) text: String,
    pub(crate) level: usize,
    pub(crate) parent: NodeId,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            slug: None,
            text: String::new(),
            level: 0,
            parent: NodeId::ROOT,
            children: Vec::new(),
        }
    }

    pub(crate) fn from_descriptor(heading: HeadingDescriptor, level: usize, parent: NodeId) -> Self {
        Self {
            slug: heading.slug,
            text: heading.text,
            level,
            parent,
            children: Vec::new(),
        }
    }

    /// Renderable nodes have both a non-empty slug and non-empty text
    pub fn is_renderable(&self) -> bool {
        !self.text.is_empty() && self.slug.as_deref().is_some_and(|slug| !slug.is_empty())
    }
}

/// Read-only outline built from a heading sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy {
    pub(crate) nodes: Vec<Node>,
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self { nodes: vec![Node::root()] }
    }
}

impl Hierarchy {
    /// The level-0 root
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef { hierarchy: self, id: NodeId::ROOT }
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { hierarchy: self, id })
    }

    /// Number of nodes, the root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing but the root is present
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// All headings in document order, the root excluded
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        (1..self.nodes.len()).map(move |index| NodeRef { hierarchy: self, id: NodeId(index) })
    }
}

/// Borrowed handle on one node of a [`Hierarchy`]
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    hierarchy: &'a Hierarchy,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn data(&self) -> &'a Node {
        &self.hierarchy.nodes[self.id.0]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn slug(&self) -> Option<&'a str> {
        self.data().slug.as_deref()
    }

    pub fn text(&self) -> &'a str {
        &self.data().text
    }

    pub fn level(&self) -> usize {
        self.data().level
    }

    pub fn is_root(&self) -> bool {
        self.id == NodeId::ROOT
    }

    pub fn is_renderable(&self) -> bool {
        self.data().is_renderable()
    }

    /// Parent node, `None` for the root
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        if self.is_root() {
            None
        } else {
            Some(NodeRef { hierarchy: self.hierarchy, id: self.data().parent })
        }
    }

    /// Direct children in document order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeRef<'a>> + ExactSizeIterator + 'a {
        let hierarchy = self.hierarchy;
        self.data().children.iter().map(move |&id| NodeRef { hierarchy, id })
    }

    pub fn has_children(&self) -> bool {
        !self.data().children.is_empty()
    }

    /// Nested, serializable copy of this subtree
    pub fn to_entry(&self) -> TocEntry {
        // Post-order: a frame is finished once its pending children run out,
        // then handed to the frame below it.
        let mut stack = vec![(*self, self.children(), Vec::new())];
        let mut finished = None;

        while let Some((_, pending, _)) = stack.last_mut() {
            if let Some(child) = pending.next() {
                stack.push((child, child.children(), Vec::new()));
                continue;
            }
            if let Some((node, _, children)) = stack.pop() {
                let mut entry = TocEntry::shallow(&node);
                entry.children = children;
                match stack.last_mut() {
                    Some((_, _, siblings)) => siblings.push(entry),
                    None => finished = Some(entry),
                }
            }
        }

        finished.unwrap_or_else(|| TocEntry::shallow(self))
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("slug", &self.slug())
            .field("text", &self.text())
            .field("level", &self.level())
            .finish()
    }
}

/// Owned outline entry, used when dumping the hierarchy.
///
/// Dropping an entry frees its descendants iteratively, so arbitrarily deep
/// outlines can be released safely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub text: String,
    pub level: usize,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    fn shallow(node: &NodeRef<'_>) -> Self {
        Self {
            slug: node.slug().map(str::to_string),
            text: node.text().to_string(),
            level: node.level(),
            children: Vec::new(),
        }
    }
}

impl Drop for TocEntry {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut entry) = pending.pop() {
            pending.append(&mut entry.children);
        }
    }
}
