//! Grid-graph model for Warren layout generation.
//!
//! This crate defines [`Graph`], a row-major arena of typed cells for a
//! fixed width×height rectangle, along with [`Node`], [`Edge`], and the
//! neighbour-pattern matching contract ([`Pattern`], [`RoleConstraint`]).
//!
//! A graph is populated exactly once from an external coordinate
//! sequence; adjacency is then resolved for every node and never
//! changes afterward. The generator in `warren-gen` drives all further
//! mutation through [`Graph::set_role`] and [`Graph::add_edge`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod graph;
pub mod node;
pub mod pattern;

pub use edge::Edge;
pub use graph::Graph;
pub use node::Node;
pub use pattern::{Pattern, RoleConstraint};
