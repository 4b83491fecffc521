//! Node storage and id allocation.
//!
//! [`NodeStore`] owns every [`GraphNode`] of a graph in insertion order,
//! indexed by id. Insertion order is the tie-break for root discovery and
//! the order in which nodes are reported to hosts.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;

use arbor_core::identifier::NodeId;

use crate::{error::GraphError, node::GraphNode};

/// Ordered, id-indexed collection of graph nodes.
#[derive(Debug, Clone)]
pub(crate) struct NodeStore {
    nodes: IndexMap<NodeId, GraphNode>,
    /// Lowest id that has never been handed out, greater than every stored
    /// id. `None` once `u32::MAX` has been used.
    next_id: Option<NodeId>,
}

impl NodeStore {
    /// Creates a store holding a single unnamed root.
    pub(crate) fn new() -> Self {
        let mut store = Self {
            nodes: IndexMap::new(),
            next_id: NodeId::FIRST.next(),
        };
        store.push(GraphNode::new(NodeId::FIRST, ""));
        store
    }

    /// Creates a store from caller-built nodes, keeping their order.
    ///
    /// An empty list yields the same store as [`NodeStore::new`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvariantViolation`] if the nodes contain
    /// duplicate ids, dangling or one-sided edges, not exactly one root,
    /// a cycle, or a node unreachable from the root.
    pub(crate) fn from_nodes(nodes: Vec<GraphNode>) -> Result<Self, GraphError> {
        if nodes.is_empty() {
            return Ok(Self::new());
        }

        let mut map = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            let id = node.id();
            if map.insert(id, node).is_some() {
                return Err(GraphError::invariant(format!("duplicate node id {id}")));
            }
        }

        let next_id = map.keys().max().and_then(|max| max.next());
        let store = Self {
            nodes: map,
            next_id,
        };
        store.validate()?;

        debug!(nodes_count = store.len(); "Node store built from initial nodes");
        Ok(store)
    }

    /// Creates a detached node with a freshly allocated id.
    ///
    /// The id is greater than every id currently stored and every id ever
    /// allocated by this store. The node is not stored until [`push`]ed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvariantViolation`] once every id up to
    /// `u32::MAX` has been used.
    ///
    /// [`push`]: NodeStore::push
    pub(crate) fn create_node(
        &mut self,
        name: impl Into<String>,
    ) -> Result<GraphNode, GraphError> {
        let id = self.allocate_id()?;
        Ok(GraphNode::new(id, name))
    }

    fn allocate_id(&mut self) -> Result<NodeId, GraphError> {
        let id = self
            .next_id
            .ok_or_else(|| GraphError::invariant("node id space exhausted"))?;
        self.next_id = id.next();
        Ok(id)
    }

    /// Appends a node at the end of the storage order.
    pub(crate) fn push(&mut self, node: GraphNode) {
        self.nodes.insert(node.id(), node);
    }

    /// Removes a node, keeping the order of the remaining ones.
    ///
    /// Edges pointing at the removed node are left for the caller to repair.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<GraphNode> {
        self.nodes.shift_remove(&id)
    }

    pub(crate) fn get(&self, id: NodeId) -> Result<&GraphNode, GraphError> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Result<&mut GraphNode, GraphError> {
        self.nodes.get_mut(&id).ok_or(GraphError::NodeNotFound(id))
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the unique node without parents.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvariantViolation`] if there is no such node
    /// or more than one.
    pub(crate) fn root(&self) -> Result<&GraphNode, GraphError> {
        let mut roots = self.nodes.values().filter(|node| node.is_root());
        let root = roots
            .next()
            .ok_or_else(|| GraphError::invariant("graph has no root"))?;

        if let Some(other) = roots.next() {
            return Err(GraphError::invariant(format!(
                "graph has more than one root ({} and {})",
                root.id(),
                other.id()
            )));
        }
        Ok(root)
    }

    /// Returns a snapshot of a node's children, in traversal order.
    pub(crate) fn children_of(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        Ok(self.get(id)?.children().iter().copied().collect())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Checks that every edge is mutual and resolves, and that the nodes
    /// form a single-rooted acyclic graph covering every node.
    fn validate(&self) -> Result<(), GraphError> {
        for node in self.iter() {
            for &child in node.children() {
                let child_node = self.get(child).map_err(|_| {
                    GraphError::invariant(format!(
                        "node {} lists missing child {child}",
                        node.id()
                    ))
                })?;
                if !child_node.parents().contains(&node.id()) {
                    return Err(GraphError::invariant(format!(
                        "node {} lists child {child} which does not list it as parent",
                        node.id()
                    )));
                }
            }
            for &parent in node.parents() {
                let parent_node = self.get(parent).map_err(|_| {
                    GraphError::invariant(format!(
                        "node {} lists missing parent {parent}",
                        node.id()
                    ))
                })?;
                if !parent_node.children().contains(&node.id()) {
                    return Err(GraphError::invariant(format!(
                        "node {} lists parent {parent} which does not list it as child",
                        node.id()
                    )));
                }
            }
        }

        let root = self.root()?.id();
        let mut finished = HashSet::with_capacity(self.len());
        let mut on_path = HashSet::new();
        self.visit_acyclic(root, &mut on_path, &mut finished)?;

        if finished.len() != self.len() {
            let unreachable = self
                .nodes
                .keys()
                .find(|id| !finished.contains(*id))
                .copied()
                .unwrap_or(root);
            return Err(GraphError::invariant(format!(
                "node {unreachable} is not reachable from root {root}"
            )));
        }
        Ok(())
    }

    fn visit_acyclic(
        &self,
        id: NodeId,
        on_path: &mut HashSet<NodeId>,
        finished: &mut HashSet<NodeId>,
    ) -> Result<(), GraphError> {
        if finished.contains(&id) {
            return Ok(());
        }
        if !on_path.insert(id) {
            return Err(GraphError::invariant(format!(
                "cycle detected through node {id}"
            )));
        }
        for child in self.children_of(id)? {
            self.visit_acyclic(child, on_path, finished)?;
        }
        on_path.remove(&id);
        finished.insert(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> NodeId {
        NodeId::new(raw)
    }

    fn linked(raw: u32, parents: &[u32], children: &[u32]) -> GraphNode {
        GraphNode::new(id(raw), "")
            .with_parents(parents.iter().copied().map(id))
            .with_children(children.iter().copied().map(id))
    }

    #[test]
    fn test_new_store_has_single_root() {
        let store = NodeStore::new();

        assert_eq!(store.len(), 1);
        let root = store.root().unwrap();
        assert_eq!(root.id(), NodeId::FIRST);
        assert_eq!(root.name(), "");
    }

    #[test]
    fn test_create_node_allocates_max_plus_one() {
        let store_nodes = vec![linked(1, &[], &[7]), linked(7, &[1], &[])];
        let mut store = NodeStore::from_nodes(store_nodes).unwrap();

        let node = store.create_node("x").unwrap();
        assert_eq!(node.id(), id(8));
        assert!(node.is_root() && node.is_leaf());
        assert!(!store.contains(id(8)));
    }

    #[test]
    fn test_allocated_ids_are_never_reused() {
        let mut store = NodeStore::new();
        let first = store.create_node("a").unwrap();
        let first_id = first.id();
        store.push(first);
        store.remove(first_id);

        let second = store.create_node("b").unwrap();
        assert!(second.id() > first_id);
    }

    #[test]
    fn test_from_nodes_accepts_largest_id() {
        let nodes = vec![linked(u32::MAX, &[], &[])];
        let mut store = NodeStore::from_nodes(nodes).unwrap();

        assert_eq!(store.root().unwrap().id(), id(u32::MAX));
        assert!(matches!(
            store.create_node("x"),
            Err(GraphError::InvariantViolation(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_node_stops_at_largest_id() {
        let nodes = vec![
            linked(1, &[], &[u32::MAX - 1]),
            linked(u32::MAX - 1, &[1], &[]),
        ];
        let mut store = NodeStore::from_nodes(nodes).unwrap();

        assert_eq!(store.create_node("last").unwrap().id(), id(u32::MAX));
        assert!(matches!(
            store.create_node("overflow"),
            Err(GraphError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_get_missing_node() {
        let store = NodeStore::new();
        assert_eq!(store.get(id(5)).unwrap_err(), GraphError::NodeNotFound(id(5)));
    }

    #[test]
    fn test_root_detects_multiple_roots() {
        let mut store = NodeStore::new();
        let orphan = store.create_node("orphan").unwrap();
        store.push(orphan);

        assert!(matches!(
            store.root(),
            Err(GraphError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_root_detects_missing_root() {
        let mut store = NodeStore::new();
        store.remove(NodeId::FIRST);

        assert!(matches!(
            store.root(),
            Err(GraphError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_remove_keeps_order() {
        let nodes = vec![
            linked(1, &[], &[2, 3, 4]),
            linked(2, &[1], &[]),
            linked(3, &[1], &[]),
            linked(4, &[1], &[]),
        ];
        let mut store = NodeStore::from_nodes(nodes).unwrap();
        store.remove(id(3));

        let ids: Vec<u32> = store.iter().map(|node| node.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_from_empty_nodes_synthesizes_root() {
        let store = NodeStore::from_nodes(Vec::new()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.root().unwrap().id(), NodeId::FIRST);
    }

    #[test]
    fn test_from_nodes_accepts_diamond() {
        let nodes = vec![
            linked(1, &[], &[2, 3]),
            linked(2, &[1], &[4]),
            linked(3, &[1], &[4]),
            linked(4, &[2, 3], &[]),
        ];
        assert!(NodeStore::from_nodes(nodes).is_ok());
    }

    #[test]
    fn test_from_nodes_rejects_duplicate_ids() {
        let nodes = vec![linked(1, &[], &[]), linked(1, &[], &[])];
        assert!(matches!(
            NodeStore::from_nodes(nodes),
            Err(GraphError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_from_nodes_rejects_one_sided_edge() {
        let nodes = vec![linked(1, &[], &[2]), linked(2, &[], &[])];
        assert!(matches!(
            NodeStore::from_nodes(nodes),
            Err(GraphError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_from_nodes_rejects_dangling_edge() {
        let nodes = vec![linked(1, &[], &[9])];
        assert!(matches!(
            NodeStore::from_nodes(nodes),
            Err(GraphError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_from_nodes_rejects_cycle() {
        // 1 -> 2 -> 3 -> 2
        let nodes = vec![
            linked(1, &[], &[2]),
            linked(2, &[1, 3], &[3]),
            linked(3, &[2], &[2]),
        ];
        assert!(matches!(
            NodeStore::from_nodes(nodes),
            Err(GraphError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_from_nodes_rejects_detached_cycle() {
        // Root 1 alone, plus 2 <-> 3 which has no root of its own.
        let nodes = vec![
            linked(1, &[], &[]),
            linked(2, &[3], &[3]),
            linked(3, &[2], &[2]),
        ];
        assert!(matches!(
            NodeStore::from_nodes(nodes),
            Err(GraphError::InvariantViolation(_))
        ));
    }
}
