//! Core graph types and operations.
//!
//! This module defines the canonical graph model:
//! - [`CanonicalGraph`]: Directed-or-undirected simple graph keyed by node identifiers
//! - [`EdgeData`]: Optional "weight" attribute carried by each edge
//! - [`NodeKey`]: Bound satisfied by usable node identifier types

mod canonical;
mod types;

pub use canonical::CanonicalGraph;
pub use petgraph::graph::NodeIndex;
pub use types::{EdgeData, GraphKind, NodeKey};
