//! The [`Graph`] aggregate: storage, mutations and layout behind one API.

use log::debug;

use arbor_core::{geometry::Point, identifier::NodeId};

use crate::{
    config::LayoutConfig, error::GraphError, layout::LayoutEngine, mutation, node::GraphNode,
    store::NodeStore,
};

/// An editable hierarchy of nodes with an always up-to-date layout.
///
/// Every structural edit ([`insert_node`], [`delete_node_hard`],
/// [`delete_node_soft`]) recomputes the layout of the whole graph before
/// returning. [`set_position`] is a manual override and leaves the rest of
/// the layout alone.
///
/// [`insert_node`]: Graph::insert_node
/// [`delete_node_hard`]: Graph::delete_node_hard
/// [`delete_node_soft`]: Graph::delete_node_soft
/// [`set_position`]: Graph::set_position
///
/// # Examples
///
/// ```
/// use arbor::Graph;
///
/// let mut graph = Graph::new();
/// let root = graph.root().unwrap().id();
///
/// let a = graph.insert_node(root, "A").unwrap();
/// let b = graph.insert_node(root, "B").unwrap();
///
/// assert_eq!(graph.node(root).unwrap().width(), 160.0);
/// assert!(graph.node(a).unwrap().left() < graph.node(b).unwrap().left());
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    store: NodeStore,
    config: LayoutConfig,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates a graph holding a single unnamed root, laid out with the
    /// default [`LayoutConfig`].
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Creates a graph holding a single unnamed root, laid out with
    /// `config`.
    pub fn with_config(config: LayoutConfig) -> Self {
        let mut graph = Self {
            store: NodeStore::new(),
            config,
        };
        graph
            .relayout()
            .expect("a graph with a lone root always lays out");
        graph
    }

    /// Creates a graph from caller-built nodes and lays it out.
    ///
    /// The order of `nodes` becomes the storage order. An empty list
    /// behaves like [`Graph::with_config`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvariantViolation`] unless the nodes have
    /// unique ids, mutual and resolvable edges, exactly one root, no cycle,
    /// and every node reachable from the root.
    pub fn from_nodes(nodes: Vec<GraphNode>, config: LayoutConfig) -> Result<Self, GraphError> {
        let mut graph = Self {
            store: NodeStore::from_nodes(nodes)?,
            config,
        };
        graph.relayout()?;
        Ok(graph)
    }

    /// Inserts a new node as the last child of `parent` and relayouts.
    ///
    /// Returns the id of the new node, which is greater than every id this
    /// graph has ever held.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `parent` does not exist, or
    /// [`GraphError::InvariantViolation`] if every id up to `u32::MAX` has
    /// been used. The graph is unchanged on error.
    pub fn insert_node(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
    ) -> Result<NodeId, GraphError> {
        let id = mutation::insert_node(&mut self.store, parent, name)?;
        self.relayout()?;
        Ok(id)
    }

    /// Deletes `id` and its entire descendant subtree, then relayouts.
    ///
    /// Returns the ids of all removed nodes, `id` first.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `id` does not exist, or
    /// [`GraphError::RootDeletionForbidden`] if it is the root.
    pub fn delete_node_hard(&mut self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        let removed = mutation::delete_node_hard(&mut self.store, id)?;
        self.relayout()?;
        Ok(removed)
    }

    /// Deletes `id` alone, reconnecting each of its parents to each of its
    /// children, then relayouts.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `id` does not exist, or
    /// [`GraphError::RootDeletionForbidden`] if it is the root.
    pub fn delete_node_soft(&mut self, id: NodeId) -> Result<(), GraphError> {
        mutation::delete_node_soft(&mut self.store, id)?;
        self.relayout()
    }

    /// Moves a single node to `(x, y)` without recomputing layout.
    ///
    /// The override lasts until the next structural edit.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `id` does not exist.
    pub fn set_position(&mut self, id: NodeId, x: f32, y: f32) -> Result<(), GraphError> {
        mutation::set_position(&mut self.store, id, Point::new(x, y))
    }

    /// Changes the viewport width the root is centered in and relayouts.
    ///
    /// # Errors
    ///
    /// Only fails if the graph invariants are already broken.
    pub fn set_viewport_width(&mut self, width: f32) -> Result<(), GraphError> {
        self.config.set_viewport_width(width);
        self.relayout()
    }

    /// Returns all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.store.iter()
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.store.get(id).ok()
    }

    /// Returns the unique node without parents.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvariantViolation`] if the single-root
    /// invariant does not hold.
    pub fn root(&self) -> Result<&GraphNode, GraphError> {
        self.store.root()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.store.contains(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Always `false`; a graph holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn relayout(&mut self) -> Result<(), GraphError> {
        LayoutEngine::new(&self.config).apply(&mut self.store)?;
        debug!(nodes_count = self.store.len(); "Layout updated");
        Ok(())
    }
}
