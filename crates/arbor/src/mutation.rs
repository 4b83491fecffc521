//! Structural edits on a [`NodeStore`].
//!
//! Each operation validates everything it needs (existence, root check,
//! edge resolution) before touching the store, so an `Err` always leaves
//! the store as it was. None of these recompute layout; the [`Graph`]
//! facade does that after a successful structural edit.
//!
//! [`Graph`]: crate::Graph

use indexmap::IndexSet;
use log::debug;

use arbor_core::{geometry::Point, identifier::NodeId};

use crate::{error::GraphError, store::NodeStore};

/// Creates a node named `name` as the last child of `parent`.
///
/// Returns the id of the new node.
pub(crate) fn insert_node(
    store: &mut NodeStore,
    parent: NodeId,
    name: impl Into<String>,
) -> Result<NodeId, GraphError> {
    if !store.contains(parent) {
        return Err(GraphError::NodeNotFound(parent));
    }

    let mut node = store.create_node(name)?;
    let id = node.id();
    node.parents_mut().insert(parent);
    store.get_mut(parent)?.children_mut().insert(id);
    store.push(node);

    debug!(node_id = id.get(), parent_id = parent.get(); "Inserted node");
    Ok(id)
}

/// Removes `id` together with every node reachable below it.
///
/// A descendant that also has parents outside the removed subtree is
/// removed as well, and those surviving parents lose the edge to it.
///
/// Returns the removed ids in depth-first pre-order, starting with `id`.
pub(crate) fn delete_node_hard(
    store: &mut NodeStore,
    id: NodeId,
) -> Result<Vec<NodeId>, GraphError> {
    ensure_deletable(store, id)?;

    let mut doomed = IndexSet::new();
    collect_subtree(store, id, &mut doomed)?;

    // Edges from surviving parents into the removed set.
    let mut detached = Vec::new();
    for &removed in &doomed {
        for &parent in store.get(removed)?.parents() {
            if doomed.contains(&parent) {
                continue;
            }
            if !store.contains(parent) {
                return Err(GraphError::invariant(format!(
                    "node {removed} lists missing parent {parent}"
                )));
            }
            detached.push((parent, removed));
        }
    }

    for (parent, removed) in detached {
        store.get_mut(parent)?.children_mut().shift_remove(&removed);
    }
    for &removed in &doomed {
        store.remove(removed);
    }

    debug!(node_id = id.get(), removed_count = doomed.len(); "Hard-deleted subtree");
    Ok(doomed.into_iter().collect())
}

/// Removes `id` alone, connecting each of its parents directly to each of
/// its children.
pub(crate) fn delete_node_soft(store: &mut NodeStore, id: NodeId) -> Result<(), GraphError> {
    ensure_deletable(store, id)?;

    let node = store.get(id)?;
    let parents: Vec<NodeId> = node.parents().iter().copied().collect();
    let children: Vec<NodeId> = node.children().iter().copied().collect();

    if let Some(&missing) = parents
        .iter()
        .chain(&children)
        .find(|&&neighbour| !store.contains(neighbour))
    {
        return Err(GraphError::invariant(format!(
            "node {id} is linked to missing node {missing}"
        )));
    }

    for &parent in &parents {
        let edges = store.get_mut(parent)?.children_mut();
        edges.shift_remove(&id);
        edges.extend(children.iter().copied());
    }
    for &child in &children {
        let edges = store.get_mut(child)?.parents_mut();
        edges.shift_remove(&id);
        edges.extend(parents.iter().copied());
    }
    store.remove(id);

    debug!(
        node_id = id.get(),
        parents_count = parents.len(),
        children_count = children.len();
        "Soft-deleted node"
    );
    Ok(())
}

/// Overrides the position of a single node.
pub(crate) fn set_position(
    store: &mut NodeStore,
    id: NodeId,
    position: Point,
) -> Result<(), GraphError> {
    store.get_mut(id)?.set_position(position);
    debug!(node_id = id.get(), left = position.x(), top = position.y(); "Node position overridden");
    Ok(())
}

fn ensure_deletable(store: &NodeStore, id: NodeId) -> Result<(), GraphError> {
    if store.get(id)?.is_root() {
        return Err(GraphError::RootDeletionForbidden(id));
    }
    Ok(())
}

fn collect_subtree(
    store: &NodeStore,
    id: NodeId,
    collected: &mut IndexSet<NodeId>,
) -> Result<(), GraphError> {
    if !collected.insert(id) {
        return Ok(());
    }
    for &child in store.get(id)?.children() {
        collect_subtree(store, child, collected)?;
    }
    Ok(())
}
