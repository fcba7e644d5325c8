//! Clustering coefficient algorithms: transitivity and average clustering.
//!
//! Neighbor sets exclude self-loops, so a loop never closes a triangle.

use crate::graph::{CanonicalGraph, NodeKey};
use std::collections::HashSet;

// ============================================================================
// Helper Functions
// ============================================================================

/// Neighbor sets with orientation ignored, indexed by node position.
fn undirected_neighbor_sets<N: NodeKey>(graph: &CanonicalGraph<N>) -> Vec<HashSet<usize>> {
    graph
        .node_indices()
        .map(|idx| {
            graph
                .neighbors_undirected(idx)
                .map(|n| n.index())
                .filter(|&n| n != idx.index())
                .collect()
        })
        .collect()
}

/// Successor and predecessor sets (directed graphs), indexed by node position.
fn directed_neighbor_sets<N: NodeKey>(
    graph: &CanonicalGraph<N>,
) -> (Vec<HashSet<usize>>, Vec<HashSet<usize>>) {
    let mut succs = Vec::with_capacity(graph.node_count());
    let mut preds = Vec::with_capacity(graph.node_count());
    for idx in graph.node_indices() {
        let me = idx.index();
        succs.push(graph.successors(idx).map(|n| n.index()).filter(|&n| n != me).collect());
        preds.push(graph.predecessors(idx).map(|n| n.index()).filter(|&n| n != me).collect());
    }
    (succs, preds)
}

/// For each node: (degree, closed ordered neighbor pairs), orientation ignored.
///
/// Each triangle through a node is counted twice.
fn triangles_and_degrees(neighbors: &[HashSet<usize>]) -> Vec<(usize, usize)> {
    neighbors
        .iter()
        .map(|own| {
            let closed = own
                .iter()
                .map(|&w| own.intersection(&neighbors[w]).count())
                .sum();
            (own.len(), closed)
        })
        .collect()
}

// ============================================================================
// Transitivity
// ============================================================================

/// Fraction of connected triples that close into triangles,
/// `3 × triangles / triads`, with orientation ignored.
pub fn transitivity<N: NodeKey>(graph: &CanonicalGraph<N>) -> f64 {
    let neighbors = undirected_neighbor_sets(graph);
    let (triads, triangles) = triangles_and_degrees(&neighbors)
        .into_iter()
        .fold((0usize, 0usize), |(triads, triangles), (degree, closed)| {
            (triads + degree * degree.saturating_sub(1), triangles + closed)
        });

    if triangles == 0 {
        0.0
    } else {
        triangles as f64 / triads as f64
    }
}

// ============================================================================
// Average Clustering
// ============================================================================

/// Mean local clustering coefficient over all nodes (zeros included).
///
/// Directed graphs use the directed clustering definition: triangles through
/// a node in any orientation, relative to `2 (d_tot (d_tot - 1) - 2 d_recip)`.
pub fn average_clustering<N: NodeKey>(graph: &CanonicalGraph<N>) -> f64 {
    let n = graph.node_count();
    if n == 0 {
        return 0.0;
    }

    let local = if graph.is_directed() {
        directed_local_clustering(graph)
    } else {
        undirected_local_clustering(graph)
    };
    local.iter().sum::<f64>() / n as f64
}

fn undirected_local_clustering<N: NodeKey>(graph: &CanonicalGraph<N>) -> Vec<f64> {
    let neighbors = undirected_neighbor_sets(graph);
    triangles_and_degrees(&neighbors)
        .into_iter()
        .map(|(degree, closed)| {
            if closed == 0 {
                0.0
            } else {
                closed as f64 / (degree * (degree - 1)) as f64
            }
        })
        .collect()
}

fn directed_local_clustering<N: NodeKey>(graph: &CanonicalGraph<N>) -> Vec<f64> {
    let (succs, preds) = directed_neighbor_sets(graph);

    (0..graph.node_count())
        .map(|i| {
            let (ipreds, isuccs) = (&preds[i], &succs[i]);

            let mut directed_triangles = 0usize;
            // A reciprocal neighbor is visited once per orientation
            for &j in ipreds.iter().chain(isuccs.iter()) {
                let (jpreds, jsuccs) = (&preds[j], &succs[j]);
                directed_triangles += ipreds.intersection(jpreds).count()
                    + ipreds.intersection(jsuccs).count()
                    + isuccs.intersection(jpreds).count()
                    + isuccs.intersection(jsuccs).count();
            }

            let total_degree = ipreds.len() + isuccs.len();
            let reciprocal = ipreds.intersection(isuccs).count();
            let possible = (total_degree * total_degree.saturating_sub(1)).saturating_sub(2 * reciprocal);

            if directed_triangles == 0 || possible == 0 {
                0.0
            } else {
                directed_triangles as f64 / (2 * possible) as f64
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeData;

    fn triangle_with_tail() -> CanonicalGraph<u32> {
        let mut graph = CanonicalGraph::undirected();
        graph.add_edge(1, 2, EdgeData::unweighted());
        graph.add_edge(2, 3, EdgeData::unweighted());
        graph.add_edge(3, 1, EdgeData::unweighted());
        graph.add_edge(3, 4, EdgeData::unweighted());
        graph
    }

    #[test]
    fn test_transitivity() {
        // Closed ordered neighbor pairs 2+2+2 over ordered pairs 2+2+6+0
        let t = transitivity(&triangle_with_tail());
        assert!((t - 3.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_clustering_undirected() {
        // Local: 1, 1, 1/3, 0
        let c = average_clustering(&triangle_with_tail());
        assert!((c - (1.0 + 1.0 + 1.0 / 3.0) / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_clustering_directed_cycle() {
        // Directed 3-cycle: each node counts 2 triangle orientations over 2*(2*1)
        let mut graph: CanonicalGraph<u32> = CanonicalGraph::directed();
        graph.add_edge(1, 2, EdgeData::unweighted());
        graph.add_edge(2, 3, EdgeData::unweighted());
        graph.add_edge(3, 1, EdgeData::unweighted());
        let c = average_clustering(&graph);
        assert!((c - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_no_triangles() {
        let mut graph: CanonicalGraph<u32> = CanonicalGraph::undirected();
        graph.add_edge(1, 2, EdgeData::unweighted());
        graph.add_edge(2, 3, EdgeData::unweighted());
        assert_eq!(transitivity(&graph), 0.0);
        assert_eq!(average_clustering(&graph), 0.0);
    }
}
