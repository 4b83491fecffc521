//! Layout engine
//!
//! Computes the derived layout fields of every node from the root down.
//! Three depth-first passes run in order, each consuming what the previous
//! one wrote:
//!
//! 1. **Width** (post-order): a leaf gets the configured leaf width, an
//!    internal node the sum of its children's widths.
//! 2. **Position** (pre-order): each node is centered in the column its
//!    subtree occupies; children are packed left to right one level lower.
//! 3. **Level** (pre-order): depth below the root.
//!
//! Children are always visited in their stored insertion order, so the
//! column order of the width pass matches the placement order of the
//! position pass.

use log::trace;

use arbor_core::{geometry::Point, identifier::NodeId};

use crate::{config::LayoutConfig, error::GraphError, store::NodeStore};

/// Full-recomputation layout engine.
pub(crate) struct LayoutEngine<'a> {
    config: &'a LayoutConfig,
}

impl<'a> LayoutEngine<'a> {
    pub(crate) fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Recomputes width, position and level for every node reachable from
    /// the root.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvariantViolation`] if the store does not have
    /// exactly one root, or [`GraphError::NodeNotFound`] if an edge points at
    /// a node that is not stored.
    pub(crate) fn apply(&self, store: &mut NodeStore) -> Result<(), GraphError> {
        let root = store.root()?.id();

        let root_width = self.calculate_width(store, root)?;
        let root_origin = Point::new(
            (self.config.viewport_width() - root_width) / 2.0,
            self.config.top_origin(),
        );
        self.calculate_positions(store, root, root_origin)?;
        self.calculate_levels(store, root, 0)?;

        trace!(root_id = root.get(), root_width; "Layout recomputed");
        Ok(())
    }

    /// Width pass. Returns the width assigned to `id`.
    fn calculate_width(&self, store: &mut NodeStore, id: NodeId) -> Result<f32, GraphError> {
        let children = store.children_of(id)?;

        let width = if children.is_empty() {
            self.config.leaf_width()
        } else {
            let mut width = 0.0;
            for child in children {
                width += self.calculate_width(store, child)?;
            }
            width
        };

        store.get_mut(id)?.set_width(width);
        Ok(width)
    }

    /// Position pass. `origin` is the top-left corner of the column
    /// allotted to `id`.
    fn calculate_positions(
        &self,
        store: &mut NodeStore,
        id: NodeId,
        origin: Point,
    ) -> Result<(), GraphError> {
        let node = store.get_mut(id)?;
        let left = origin.x() + node.width() / 2.0 - self.config.node_width() / 2.0;
        node.set_position(Point::new(left, origin.y()));
        trace!(node_id = id.get(), left, top = origin.y(); "Positioned node");

        let mut child_origin = Point::new(origin.x(), origin.y() + self.config.level_spacing());
        for child in store.children_of(id)? {
            self.calculate_positions(store, child, child_origin)?;
            let child_width = store.get(child)?.width();
            child_origin = child_origin.with_x(child_origin.x() + child_width);
        }
        Ok(())
    }

    /// Level pass.
    fn calculate_levels(
        &self,
        store: &mut NodeStore,
        id: NodeId,
        level: usize,
    ) -> Result<(), GraphError> {
        store.get_mut(id)?.set_level(level);
        for child in store.children_of(id)? {
            self.calculate_levels(store, child, level + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::node::GraphNode;

    fn id(raw: u32) -> NodeId {
        NodeId::new(raw)
    }

    fn linked(raw: u32, parents: &[u32], children: &[u32]) -> GraphNode {
        GraphNode::new(id(raw), "")
            .with_parents(parents.iter().copied().map(id))
            .with_children(children.iter().copied().map(id))
    }

    /// 1 -> {2, 3}, 2 -> {4, 5}
    fn sample_store() -> NodeStore {
        NodeStore::from_nodes(vec![
            linked(1, &[], &[2, 3]),
            linked(2, &[1], &[4, 5]),
            linked(3, &[1], &[]),
            linked(4, &[2], &[]),
            linked(5, &[2], &[]),
        ])
        .unwrap()
    }

    fn laid_out(config: &LayoutConfig) -> NodeStore {
        let mut store = sample_store();
        LayoutEngine::new(config).apply(&mut store).unwrap();
        store
    }

    #[test]
    fn test_single_root_layout() {
        let config = LayoutConfig::default();
        let mut store = NodeStore::new();
        LayoutEngine::new(&config).apply(&mut store).unwrap();

        let root = store.root().unwrap();
        assert_approx_eq!(f32, root.width(), 80.0);
        assert_eq!(root.level(), 0);
        // (1024 - 80) / 2 + 80 / 2 - 50
        assert_approx_eq!(f32, root.left(), 462.0);
        assert_approx_eq!(f32, root.top(), 100.0);
    }

    #[test]
    fn test_width_pass_sums_children() {
        let store = laid_out(&LayoutConfig::default());

        assert_approx_eq!(f32, store.get(id(4)).unwrap().width(), 80.0);
        assert_approx_eq!(f32, store.get(id(3)).unwrap().width(), 80.0);
        assert_approx_eq!(f32, store.get(id(2)).unwrap().width(), 160.0);
        assert_approx_eq!(f32, store.get(id(1)).unwrap().width(), 240.0);
    }

    #[test]
    fn test_position_pass_packs_children_left_to_right() {
        let config = LayoutConfig::default().with_viewport_width(240.0);
        let store = laid_out(&config);

        // Root column starts at (240 - 240) / 2 = 0.
        assert_approx_eq!(f32, store.get(id(1)).unwrap().left(), 70.0);
        // Node 2 column [0, 160), node 3 column [160, 240).
        assert_approx_eq!(f32, store.get(id(2)).unwrap().left(), 30.0);
        assert_approx_eq!(f32, store.get(id(3)).unwrap().left(), 150.0);
        // Node 4 column [0, 80), node 5 column [80, 160).
        assert_approx_eq!(f32, store.get(id(4)).unwrap().left(), -10.0);
        assert_approx_eq!(f32, store.get(id(5)).unwrap().left(), 70.0);

        assert_approx_eq!(f32, store.get(id(1)).unwrap().top(), 100.0);
        assert_approx_eq!(f32, store.get(id(3)).unwrap().top(), 220.0);
        assert_approx_eq!(f32, store.get(id(5)).unwrap().top(), 340.0);
    }

    #[test]
    fn test_level_pass() {
        let store = laid_out(&LayoutConfig::default());

        let levels: Vec<(u32, usize)> = store
            .iter()
            .map(|node| (node.id().get(), node.level()))
            .collect();
        assert_eq!(levels, vec![(1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_custom_spacing() {
        let config = LayoutConfig::default()
            .with_leaf_width(50.0)
            .with_node_width(40.0)
            .with_level_spacing(30.0)
            .with_top_origin(0.0)
            .with_viewport_width(150.0);
        let store = laid_out(&config);

        assert_approx_eq!(f32, store.get(id(1)).unwrap().width(), 150.0);
        assert_approx_eq!(f32, store.get(id(1)).unwrap().left(), 55.0);
        assert_approx_eq!(f32, store.get(id(4)).unwrap().top(), 60.0);
    }

    #[test]
    fn test_shared_child_counts_under_each_parent() {
        let mut store = NodeStore::from_nodes(vec![
            linked(1, &[], &[2, 3]),
            linked(2, &[1], &[4]),
            linked(3, &[1], &[4]),
            linked(4, &[2, 3], &[]),
        ])
        .unwrap();
        LayoutEngine::new(&LayoutConfig::default())
            .apply(&mut store)
            .unwrap();

        assert_approx_eq!(f32, store.get(id(1)).unwrap().width(), 160.0);
        assert_eq!(store.get(id(4)).unwrap().level(), 2);
    }

    #[test]
    fn test_apply_fails_without_single_root() {
        let mut store = NodeStore::new();
        let orphan = store.create_node("orphan").unwrap();
        store.push(orphan);

        let result = LayoutEngine::new(&LayoutConfig::default()).apply(&mut store);
        assert!(matches!(result, Err(GraphError::InvariantViolation(_))));
    }
}
