//! Graph algorithms collaborator.
//!
//! The [`Measures`](crate::Measures) facade never computes a structural
//! measure itself: it decides *whether* a measure applies and *on which
//! subgraph*, then delegates to a [`GraphAlgorithms`] implementation.
//!
//! [`StandardAlgorithms`] is the default collaborator. Swap in another
//! implementation (a faster library, or a call-counting stand-in in tests)
//! with [`Measures::with_algorithms`](crate::Measures::with_algorithms).
//!
//! Per-node results are vectors indexed by node position
//! ([`NodeIndex::index`](crate::NodeIndex::index)).

pub mod centrality;
pub mod clustering;
pub mod components;
pub mod mixing;
pub mod paths;

use crate::error::AlgorithmResult;
use crate::graph::{CanonicalGraph, NodeIndex, NodeKey};

/// Primitive graph computations the facade delegates to.
///
/// Every method has a default body backed by this module's free functions,
/// so an implementation only overrides what it wants to replace.
pub trait GraphAlgorithms: Clone {
    /// Whether an undirected graph (or the undirected view of a directed one) is connected.
    fn is_connected<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> AlgorithmResult<bool> {
        components::is_connected(graph)
    }

    /// Whether a directed graph is weakly connected.
    fn is_weakly_connected<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> AlgorithmResult<bool> {
        components::is_connected(graph)
    }

    /// Whether a directed graph is strongly connected.
    fn is_strongly_connected<N: NodeKey>(
        &self,
        graph: &CanonicalGraph<N>,
    ) -> AlgorithmResult<bool> {
        components::is_strongly_connected(graph)
    }

    /// Connected (undirected) or weakly connected (directed) components.
    fn connected_components<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> Vec<Vec<NodeIndex>> {
        components::connected_components(graph)
    }

    /// Strongly connected components.
    fn strongly_connected_components<N: NodeKey>(
        &self,
        graph: &CanonicalGraph<N>,
    ) -> Vec<Vec<NodeIndex>> {
        components::strongly_connected_components(graph)
    }

    /// Mean hop distance over all ordered node pairs.
    fn average_shortest_path_length<N: NodeKey>(
        &self,
        graph: &CanonicalGraph<N>,
    ) -> AlgorithmResult<f64> {
        paths::average_shortest_path_length(graph)
    }

    /// Greatest eccentricity.
    fn diameter<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> AlgorithmResult<usize> {
        paths::diameter(graph)
    }

    /// Per-node eccentricity.
    fn eccentricity<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> AlgorithmResult<Vec<usize>> {
        paths::eccentricity(graph)
    }

    /// Global efficiency (directed or undirected).
    fn global_efficiency<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> f64 {
        paths::global_efficiency(graph)
    }

    /// Transitivity (global clustering coefficient).
    fn transitivity<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> f64 {
        clustering::transitivity(graph)
    }

    /// Mean local clustering coefficient.
    fn average_clustering<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> f64 {
        clustering::average_clustering(graph)
    }

    /// Degree assortativity coefficient.
    fn degree_assortativity<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> f64 {
        mixing::degree_assortativity(graph)
    }

    /// Per-node degree centrality.
    fn degree_centrality<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> Vec<f64> {
        centrality::degree_centrality(graph)
    }

    /// Per-node betweenness centrality.
    fn betweenness_centrality<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> Vec<f64> {
        centrality::betweenness_centrality(graph)
    }

    /// Per-node closeness centrality.
    fn closeness_centrality<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> Vec<f64> {
        centrality::closeness_centrality(graph)
    }
}

/// Default collaborator: petgraph for components, breadth-first search for the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAlgorithms;

impl GraphAlgorithms for StandardAlgorithms {}
