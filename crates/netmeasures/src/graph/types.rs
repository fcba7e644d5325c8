//! Core graph types: node keys, edge payloads, and graph kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Identifier type usable as a node key.
///
/// Readers coerce endpoint tokens with [`FromStr`], so any hashable,
/// printable, parseable type works (`String` by default, or an integer type).
pub trait NodeKey: Clone + Eq + Hash + fmt::Debug + fmt::Display + FromStr {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display + FromStr {}

/// Whether edges have an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphKind {
    /// Edge (u, v) is distinct from edge (v, u)
    Directed,
    /// Edge (u, v) and edge (v, u) are the same edge
    Undirected,
}

impl GraphKind {
    /// True for [`GraphKind::Directed`].
    pub fn is_directed(self) -> bool {
        matches!(self, GraphKind::Directed)
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}

/// Payload carried by an edge.
///
/// `weight` is `None` for edges read from pattern or unweighted sources;
/// such edges carry no weight attribute at all, not an implicit 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeData {
    /// Optional "weight" attribute
    pub weight: Option<f64>,
}

impl EdgeData {
    /// An edge with no weight attribute.
    pub fn unweighted() -> Self {
        Self { weight: None }
    }

    /// An edge carrying the given weight.
    pub fn weighted(weight: f64) -> Self {
        Self {
            weight: Some(weight),
        }
    }

    /// Whether this edge carries a weight attribute.
    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }

    /// Weight used for strength sums (1 when the attribute is absent).
    pub fn weight_or_unit(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}
