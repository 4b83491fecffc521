//! Configuration types for Arbor layout.
//!
//! [`LayoutConfig`] carries every constant the layout passes use. It
//! implements [`serde::Deserialize`] so hosts can load it from external
//! sources; missing fields fall back to the defaults.
//!
//! # Example
//!
//! ```
//! # use arbor::config::LayoutConfig;
//! let config = LayoutConfig::default().with_viewport_width(800.0);
//! assert_eq!(config.leaf_width(), 80.0);
//! assert_eq!(config.viewport_width(), 800.0);
//! ```

use serde::Deserialize;

/// Layout constants used by the width and position passes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal footprint of a node without children.
    leaf_width: f32,

    /// Width of the box a host draws for a node. Nodes are centered
    /// within their column using this value.
    node_width: f32,

    /// Vertical distance between consecutive depth levels.
    level_spacing: f32,

    /// Top coordinate of the root node.
    top_origin: f32,

    /// Width of the host viewport; the root's column is centered in it.
    viewport_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            leaf_width: 80.0,
            node_width: 100.0,
            level_spacing: 120.0,
            top_origin: 100.0,
            viewport_width: 1024.0,
        }
    }
}

impl LayoutConfig {
    /// Set the footprint of a leaf node
    pub fn with_leaf_width(mut self, width: f32) -> Self {
        self.leaf_width = width;
        self
    }

    /// Set the width of a node's drawn box
    pub fn with_node_width(mut self, width: f32) -> Self {
        self.node_width = width;
        self
    }

    /// Set the vertical spacing between levels
    pub fn with_level_spacing(mut self, spacing: f32) -> Self {
        self.level_spacing = spacing;
        self
    }

    /// Set the top coordinate of the root
    pub fn with_top_origin(mut self, top: f32) -> Self {
        self.top_origin = top;
        self
    }

    /// Set the viewport width the root is centered in
    pub fn with_viewport_width(mut self, width: f32) -> Self {
        self.viewport_width = width;
        self
    }

    pub fn leaf_width(&self) -> f32 {
        self.leaf_width
    }

    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    pub fn level_spacing(&self) -> f32 {
        self.level_spacing
    }

    pub fn top_origin(&self) -> f32 {
        self.top_origin
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub(crate) fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }
}
