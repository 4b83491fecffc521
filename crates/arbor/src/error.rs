//! Error types for Arbor graph operations.
//!
//! This module provides [`GraphError`], returned by every fallible
//! operation on a [`Graph`](crate::Graph).

use thiserror::Error;

use arbor_core::identifier::NodeId;

/// The error type for graph mutations and layout.
///
/// Every operation validates its inputs before editing the graph, so a
/// returned error always means the graph is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A referenced id does not resolve to a stored node.
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    /// A deletion targeted the root node.
    #[error("Node {0} is the root and cannot be deleted")]
    RootDeletionForbidden(NodeId),

    /// The graph structure is inconsistent. This indicates a bug in the
    /// caller (for example a malformed initial node list) or in the engine.
    #[error("Graph invariant violated: {0}")]
    InvariantViolation(String),
}

impl GraphError {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }
}
