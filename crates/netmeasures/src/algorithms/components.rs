//! Connected-component decomposition.
//!
//! Weak/undirected components come from a union-find pass over the edge list;
//! strongly connected components come from petgraph's Tarjan implementation.

use crate::error::{AlgorithmError, AlgorithmResult};
use crate::graph::{CanonicalGraph, NodeIndex, NodeKey};
use petgraph::algo::tarjan_scc;
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

/// Components of the graph with edge orientation ignored.
///
/// For undirected graphs these are the connected components, for directed
/// graphs the weakly connected components. Components are listed in order of
/// their first node, and nodes keep graph order within each component.
pub fn connected_components<N: NodeKey>(graph: &CanonicalGraph<N>) -> Vec<Vec<NodeIndex>> {
    let n = graph.node_count();
    let mut sets: UnionFind<usize> = UnionFind::new(n);
    for edge in graph.inner().edge_references() {
        sets.union(edge.source().index(), edge.target().index());
    }

    let mut slot_of_root: Vec<Option<usize>> = vec![None; n];
    let mut components: Vec<Vec<NodeIndex>> = Vec::new();
    for idx in graph.node_indices() {
        let root = sets.find(idx.index());
        match slot_of_root[root] {
            Some(slot) => components[slot].push(idx),
            None => {
                slot_of_root[root] = Some(components.len());
                components.push(vec![idx]);
            }
        }
    }
    components
}

/// Strongly connected components (Tarjan's algorithm).
///
/// In an undirected graph every connected component is strongly connected,
/// so this falls back to [`connected_components`].
pub fn strongly_connected_components<N: NodeKey>(
    graph: &CanonicalGraph<N>,
) -> Vec<Vec<NodeIndex>> {
    if !graph.is_directed() {
        return connected_components(graph);
    }
    tarjan_scc(graph.inner())
}

/// Whether the graph has exactly one (weak/undirected) component.
pub fn is_connected<N: NodeKey>(graph: &CanonicalGraph<N>) -> AlgorithmResult<bool> {
    if graph.node_count() == 0 {
        return Err(AlgorithmError::EmptyGraph);
    }
    Ok(connected_components(graph).len() == 1)
}

/// Whether every node can reach every other node.
pub fn is_strongly_connected<N: NodeKey>(graph: &CanonicalGraph<N>) -> AlgorithmResult<bool> {
    if graph.node_count() == 0 {
        return Err(AlgorithmError::EmptyGraph);
    }
    Ok(strongly_connected_components(graph).len() == 1)
}

/// The largest component; the earliest listed wins a tie.
pub fn largest(components: Vec<Vec<NodeIndex>>) -> Vec<NodeIndex> {
    components
        .into_iter()
        .fold(Vec::new(), |best, component| {
            if component.len() > best.len() {
                component
            } else {
                best
            }
        })
}
