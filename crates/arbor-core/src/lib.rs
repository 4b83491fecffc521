//! Arbor Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Arbor layout
//! engine and the hosts that render its output. It includes:
//!
//! - **Identifiers**: Monotonically allocated node identifiers ([`identifier::NodeId`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Palette**: Depth-level to color lookup for rendering layers ([`palette::Palette`])

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod palette;
