//! Graph node records.
//!
//! A [`GraphNode`] holds its identity, label and edges (as id sets) plus the
//! derived layout fields written by the layout engine. Edge sets are
//! [`IndexSet`]s so traversal always follows insertion order.

use std::borrow::Cow;

use indexmap::IndexSet;

use arbor_core::{geometry::Point, identifier::NodeId};

/// A labeled node of the hierarchy together with its computed layout.
///
/// Nodes are owned by a [`Graph`](crate::Graph); callers build them directly
/// only to seed [`Graph::from_nodes`](crate::Graph::from_nodes).
///
/// # Examples
///
/// ```
/// use arbor::{GraphNode, identifier::NodeId};
///
/// let root = GraphNode::new(NodeId::new(1), "").with_children([NodeId::new(2)]);
/// let leaf = GraphNode::new(NodeId::new(2), "leaf").with_parents([NodeId::new(1)]);
///
/// assert!(root.is_root());
/// assert!(leaf.is_leaf());
/// assert_eq!(root.label(), "1");
/// assert_eq!(leaf.label(), "leaf");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    id: NodeId,
    name: String,
    position: Point,
    width: f32,
    level: usize,
    children: IndexSet<NodeId>,
    parents: IndexSet<NodeId>,
}

impl GraphNode {
    /// Creates an unlinked node with zeroed layout fields.
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: Point::default(),
            width: 0.0,
            level: 0,
            children: IndexSet::new(),
            parents: IndexSet::new(),
        }
    }

    /// Adds child edges (builder style).
    pub fn with_children(mut self, children: impl IntoIterator<Item = NodeId>) -> Self {
        self.children.extend(children);
        self
    }

    /// Adds parent edges (builder style).
    pub fn with_parents(mut self, parents: impl IntoIterator<Item = NodeId>) -> Self {
        self.parents.extend(parents);
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the raw name, which may be empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display label: the name, or the id when the name is empty.
    pub fn label(&self) -> Cow<'_, str> {
        if self.name.is_empty() {
            Cow::Owned(self.id.to_string())
        } else {
            Cow::Borrowed(&self.name)
        }
    }

    /// Returns the top-left corner of the node's box.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn left(&self) -> f32 {
        self.position.x()
    }

    pub fn top(&self) -> f32 {
        self.position.y()
    }

    /// Returns the horizontal footprint of the node's subtree.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the depth of the node below the root.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn children(&self) -> &IndexSet<NodeId> {
        &self.children
    }

    pub fn parents(&self) -> &IndexSet<NodeId> {
        &self.parents
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn children_mut(&mut self) -> &mut IndexSet<NodeId> {
        &mut self.children
    }

    pub(crate) fn parents_mut(&mut self) -> &mut IndexSet<NodeId> {
        &mut self.parents
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub(crate) fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub(crate) fn set_level(&mut self, level: usize) {
        self.level = level;
    }
}
