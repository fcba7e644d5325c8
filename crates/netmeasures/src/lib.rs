//! # netmeasures
//!
//! A canonical graph model with a lazily evaluated, memoized facade of
//! structural network measures.
//!
//! ## Core Principles
//!
//! - **Format Agnostic**: Bring your own reader, we handle the graph
//! - **Compute Once**: Every measure is computed on first access and cached
//! - **Explicit Directedness**: Asking a directed graph an undirected question is an error, not a guess
//! - **Swappable Algorithms**: The facade delegates all graph theory to a collaborator trait
//!
//! ## Architecture
//!
//! ```text
//! Readers (Matrix Market, edge lists; see netmeasures-readers)
//!     ↓
//! Canonical Graph (directed or undirected, optional weights)
//!     ↓
//! Measures Facade (preconditions, subgraph selection, memoization)
//!     ↓
//! Graph Algorithms (components, paths, centrality, clustering)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use netmeasures::{CanonicalGraph, EdgeData, Measures};
//!
//! let mut graph: CanonicalGraph = CanonicalGraph::undirected().with_name("triangle");
//! graph.add_edge("a".into(), "b".into(), EdgeData::unweighted());
//! graph.add_edge("b".into(), "c".into(), EdgeData::unweighted());
//! graph.add_edge("c".into(), "a".into(), EdgeData::unweighted());
//!
//! let measures = Measures::new(graph);
//! assert!(measures.connected().unwrap());
//! assert_eq!(measures.diameter().unwrap(), 1);
//! assert_eq!(measures.global_clustering_coefficient(), 1.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod measures;

// Re-export main types
pub use algorithms::{GraphAlgorithms, StandardAlgorithms};
pub use error::{AlgorithmError, AlgorithmResult, MeasureError, MeasureResult};
pub use graph::{CanonicalGraph, EdgeData, GraphKind, NodeIndex, NodeKey};
pub use measures::{CentralNode, DegreeDistribution, Directional, Measures};
