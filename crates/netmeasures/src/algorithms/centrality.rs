//! Centrality algorithms: Degree, Betweenness, Closeness.
//!
//! Scores are returned as vectors indexed by node position, so callers can
//! pair them with node keys in graph order.

use crate::graph::{CanonicalGraph, NodeIndex, NodeKey};
use std::collections::VecDeque;

use super::paths::bfs_distances;

// ============================================================================
// Degree Centrality
// ============================================================================

/// Degree divided by `n - 1`.
///
/// Directed graphs use in-degree plus out-degree. Graphs with at most one
/// node score every node 1.0.
pub fn degree_centrality<N: NodeKey>(graph: &CanonicalGraph<N>) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![1.0; n];
    }

    let norm = (n - 1) as f64;
    graph
        .node_indices()
        .map(|idx| graph.degree(idx) as f64 / norm)
        .collect()
}

// ============================================================================
// Betweenness Centrality (Brandes' Algorithm)
// ============================================================================

/// Betweenness centrality using Brandes' algorithm, normalized by
/// `1 / ((n-1)(n-2))` when `n > 2`.
///
/// # Complexity
///
/// O(V × E) for unweighted graphs
pub fn betweenness_centrality<N: NodeKey>(graph: &CanonicalGraph<N>) -> Vec<f64> {
    let n = graph.node_count();
    let mut centrality = vec![0.0; n];

    for source in graph.node_indices() {
        let mut stack: Vec<NodeIndex> = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0_f64; n]; // Number of shortest paths
        let mut dist: Vec<Option<usize>> = vec![None; n];

        sigma[source.index()] = 1.0;
        dist[source.index()] = Some(0);

        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            let dist_v = dist[v.index()].unwrap_or(0);

            for w in graph.successors(v) {
                // First visit?
                if dist[w.index()].is_none() {
                    dist[w.index()] = Some(dist_v + 1);
                    queue.push_back(w);
                }

                // Shortest path to w via v?
                if dist[w.index()] == Some(dist_v + 1) {
                    sigma[w.index()] += sigma[v.index()];
                    predecessors[w.index()].push(v);
                }
            }
        }

        // Accumulation
        let mut delta = vec![0.0_f64; n];
        while let Some(w) = stack.pop() {
            let coeff = (1.0 + delta[w.index()]) / sigma[w.index()];
            for v in &predecessors[w.index()] {
                delta[v.index()] += sigma[v.index()] * coeff;
            }
            if w != source {
                centrality[w.index()] += delta[w.index()];
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
        for value in &mut centrality {
            *value *= scale;
        }
    }

    centrality
}

// ============================================================================
// Closeness Centrality
// ============================================================================

/// Closeness centrality with the Wasserman-Faust correction.
///
/// For a node reaching `r` others at total distance `d`, the score is
/// `(r / d) * (r / (n - 1))`. Directed graphs measure incoming distances.
pub fn closeness_centrality<N: NodeKey>(graph: &CanonicalGraph<N>) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![0.0; n];
    }

    graph
        .node_indices()
        .map(|node| {
            let dist = bfs_distances(graph, node, true);
            let reached: Vec<usize> = dist.into_iter().flatten().collect();
            let total: usize = reached.iter().sum();
            let reachable = reached.len() - 1; // Exclude node itself

            if total > 0 {
                let reachable_f = reachable as f64;
                (reachable_f / total as f64) * (reachable_f / (n - 1) as f64)
            } else {
                0.0
            }
        })
        .collect()
}
