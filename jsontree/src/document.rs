// SPDX-License-Identifier: Apache-2.0

use alloc::vec;
use alloc::vec::Vec;

use crate::tokenizer::TokenKind;

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The synthetic root that holds the top-level value.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// What kind of JSON value a node holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// No value was parsed into this node (the root of an empty document).
    Empty,
    Object,
    Array,
    String,
    Number,
    True,
    False,
    Null,
}

impl NodeKind {
    pub(crate) fn from_scalar(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::String => Some(NodeKind::String),
            TokenKind::Number => Some(NodeKind::Number),
            TokenKind::True => Some(NodeKind::True),
            TokenKind::False => Some(NodeKind::False),
            TokenKind::Null => Some(NodeKind::Null),
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, NodeKind::Object | NodeKind::Array)
    }
}

#[derive(Debug, Clone)]
struct Node<'a> {
    label: &'a [u8],
    value: &'a [u8],
    kind: NodeKind,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl<'a> Node<'a> {
    fn new(label: &'a [u8]) -> Self {
        Self {
            label,
            value: &[],
            kind: NodeKind::Empty,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }
}

/// A parsed JSON document.
///
/// Nodes live in a single arena owned by the document and refer to each other
/// by [`NodeId`]. Labels and scalar values borrow from the input, which must
/// therefore outlive the document. Dropping the document releases every node.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> Document<'a> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::new(&[])],
        }
    }

    /// Appends a new node as the last child of `parent`.
    pub(crate) fn append_child(&mut self, parent: NodeId, label: &'a [u8]) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(label));

        match self.node(parent).last_child {
            Some(last) => self.node_mut(last).next_sibling = Some(id),
            None => self.node_mut(parent).first_child = Some(id),
        }
        self.node_mut(parent).last_child = Some(id);
        id
    }

    pub(crate) fn set_kind(&mut self, id: NodeId, kind: NodeKind) {
        self.node_mut(id).kind = kind;
    }

    pub(crate) fn set_value(&mut self, id: NodeId, kind: NodeKind, value: &'a [u8]) {
        let node = self.node_mut(id);
        node.kind = kind;
        node.value = value;
    }

    // Ids are only minted by `append_child`, so they always index the arena.
    fn node(&self, id: NodeId) -> &Node<'a> {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<'a> {
        &mut self.nodes[id.0]
    }

    /// The synthetic root. Its value is the top-level scalar, or its children
    /// are the members of the top-level container.
    pub fn root(&self) -> NodeRef<'_, 'a> {
        NodeRef {
            document: self,
            id: NodeId::ROOT,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, 'a>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { document: self, id })
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// See [`NodeRef::find_child`].
    pub fn find_child(&self, label: impl AsRef<[u8]>) -> Option<NodeRef<'_, 'a>> {
        self.root().find_child(label)
    }

    /// See [`NodeRef::find_sibling`]. The root has no siblings, so this only
    /// tests the root's own (empty) label: `find_sibling("")` returns the root
    /// and any other label gives `None`.
    pub fn find_sibling(&self, label: impl AsRef<[u8]>) -> Option<NodeRef<'_, 'a>> {
        self.root().find_sibling(label)
    }

    /// See [`NodeRef::find`].
    pub fn find(&self, label: impl AsRef<[u8]>) -> Option<NodeRef<'_, 'a>> {
        self.root().find(label)
    }

    fn find_from(&self, start: Option<NodeId>, label: &[u8]) -> Option<NodeId> {
        let mut current = start;
        while let Some(id) = current {
            let node = self.node(id);
            if node.label == label {
                return Some(id);
            }
            if let Some(found) = self.find_from(node.first_child, label) {
                return Some(found);
            }
            current = node.next_sibling;
        }
        None
    }

    fn write_outline(
        &self,
        f: &mut core::fmt::Formatter<'_>,
        first: Option<NodeId>,
        depth: usize,
    ) -> core::fmt::Result {
        let mut current = first;
        while let Some(id) = current {
            let node = self.node(id);
            for _ in 0..depth {
                f.write_str("|   ")?;
            }
            if node.label.is_empty() {
                f.write_str("_")?;
            } else {
                for chunk in node.label.utf8_chunks() {
                    f.write_str(chunk.valid())?;
                    if !chunk.invalid().is_empty() {
                        f.write_str("\u{FFFD}")?;
                    }
                }
            }
            f.write_str("\n")?;
            self.write_outline(f, node.first_child, depth + 1)?;
            current = node.next_sibling;
        }
        Ok(())
    }
}

/// Prints the label outline of the tree: `root` first, then one line per node
/// indented by depth, `_` standing for array elements.
///
/// ```
/// let document = jsontree::parse(br#"{"a": [1, 2], "b": {"c": null}}"#).unwrap();
/// assert_eq!(
///     document.to_string(),
///     "root\n|   a\n|   |   _\n|   |   _\n|   b\n|   |   c\n"
/// );
/// ```
impl core::fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("root\n")?;
        self.write_outline(f, self.node(NodeId::ROOT).first_child, 1)
    }
}

/// A borrowed handle to one node of a [`Document`].
///
/// `'d` is the borrow of the document, `'a` the lifetime of the input bytes;
/// labels and values are returned with the input lifetime.
#[derive(Clone, Copy)]
pub struct NodeRef<'d, 'a> {
    document: &'d Document<'a>,
    id: NodeId,
}

impl<'d, 'a> NodeRef<'d, 'a> {
    fn node(&self) -> &'d Node<'a> {
        self.document.node(self.id)
    }

    fn wrap(&self, id: Option<NodeId>) -> Option<NodeRef<'d, 'a>> {
        id.map(|id| NodeRef {
            document: self.document,
            id,
        })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Raw key bytes, escapes unresolved. Empty for array elements and the root.
    pub fn label(&self) -> &'a [u8] {
        self.node().label
    }

    /// Raw scalar bytes. Empty for objects, arrays and the empty string.
    pub fn value(&self) -> &'a [u8] {
        self.node().value
    }

    pub fn kind(&self) -> NodeKind {
        self.node().kind
    }

    pub fn first_child(&self) -> Option<NodeRef<'d, 'a>> {
        self.wrap(self.node().first_child)
    }

    pub fn next_sibling(&self) -> Option<NodeRef<'d, 'a>> {
        self.wrap(self.node().next_sibling)
    }

    /// Iterates the children in source order.
    pub fn children(&self) -> Siblings<'d, 'a> {
        Siblings {
            next: self.first_child(),
        }
    }

    /// Iterates this node and the siblings after it.
    pub fn siblings(&self) -> Siblings<'d, 'a> {
        Siblings { next: Some(*self) }
    }

    /// Finds the first immediate child whose label equals `label` exactly.
    pub fn find_child(&self, label: impl AsRef<[u8]>) -> Option<NodeRef<'d, 'a>> {
        let label = label.as_ref();
        self.children().find(|child| child.label() == label)
    }

    /// Finds the first node, starting with this one and following the sibling
    /// chain, whose label equals `label` exactly. Children are not searched.
    pub fn find_sibling(&self, label: impl AsRef<[u8]>) -> Option<NodeRef<'d, 'a>> {
        let label = label.as_ref();
        self.siblings().find(|sibling| sibling.label() == label)
    }

    /// Depth-first search: each node of the sibling chain starting here is
    /// tested, then its subtree is searched, before moving to the next sibling.
    pub fn find(&self, label: impl AsRef<[u8]>) -> Option<NodeRef<'d, 'a>> {
        let found = self.document.find_from(Some(self.id), label.as_ref());
        self.wrap(found)
    }
}

impl core::fmt::Debug for NodeRef<'_, '_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("label", &format_args!("{}", self.label().escape_ascii()))
            .field("value", &format_args!("{}", self.value().escape_ascii()))
            .finish()
    }
}

impl PartialEq for NodeRef<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.document, other.document) && self.id == other.id
    }
}

/// Iterator over a sibling chain.
#[derive(Debug, Clone)]
pub struct Siblings<'d, 'a> {
    next: Option<NodeRef<'d, 'a>>,
}

impl<'d, 'a> Iterator for Siblings<'d, 'a> {
    type Item = NodeRef<'d, 'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next_sibling();
        Some(current)
    }
}

impl core::iter::FusedIterator for Siblings<'_, '_> {}
