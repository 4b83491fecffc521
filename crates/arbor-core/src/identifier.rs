//! Node identifiers.
//!
//! This module provides the [`NodeId`] type. Ids are plain unsigned integers
//! allocated by the node store in strictly increasing order and never reused.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a node in an Arbor graph.
///
/// Ordering follows allocation order: a node created later always has a
/// greater id than every node present when it was created.
///
/// # Examples
///
/// ```
/// use arbor_core::identifier::NodeId;
///
/// let root = NodeId::FIRST;
/// assert_eq!(root.get(), 1);
/// assert_eq!(root.next(), Some(NodeId::new(2)));
/// assert_eq!(NodeId::new(u32::MAX).next(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The id given to the first node of an empty graph.
    pub const FIRST: NodeId = NodeId(1);

    /// Creates a `NodeId` from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the id directly following this one, or `None` if this is
    /// the largest representable id.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
