//! Arbor - an editing and layout engine for tree diagrams.
//!
//! Arbor keeps an in-memory hierarchy of labeled nodes (a single-rooted,
//! possibly multi-parented acyclic graph) and recomputes a 2-D layout after
//! every structural change: the horizontal footprint of each subtree, the
//! top-left corner of each node's box, and each node's depth level.
//!
//! Hosts such as diagram editors only read the computed fields and call the
//! mutation API; they never need to know the layout rules.
//!
//! # Examples
//!
//! ```rust
//! use arbor::{Graph, GraphError, config::LayoutConfig};
//!
//! let mut graph = Graph::with_config(LayoutConfig::default().with_viewport_width(800.0));
//! let root = graph.root()?.id();
//!
//! let services = graph.insert_node(root, "services")?;
//! let api = graph.insert_node(services, "api")?;
//! graph.insert_node(services, "worker")?;
//!
//! // Splice `services` out: `api` and `worker` now hang off the root.
//! graph.delete_node_soft(services)?;
//! assert_eq!(graph.node(api).map(|node| node.level()), Some(1));
//!
//! // The root can never be removed.
//! assert_eq!(
//!     graph.delete_node_hard(root),
//!     Err(GraphError::RootDeletionForbidden(root))
//! );
//! # Ok::<(), GraphError>(())
//! ```

pub mod config;

mod error;
mod graph;
mod layout;
mod mutation;
mod node;
mod store;

pub use arbor_core::{geometry, identifier};

pub use error::GraphError;
pub use graph::Graph;
pub use node::GraphNode;
