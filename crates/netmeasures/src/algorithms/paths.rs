//! Hop-count shortest path measures.
//!
//! Every measure here is built on breadth-first search from each source, so
//! edge weights never affect distances.

use crate::error::{AlgorithmError, AlgorithmResult};
use crate::graph::{CanonicalGraph, NodeIndex, NodeKey};
use std::collections::VecDeque;

/// Hop distances from `source`, indexed by node position. `None` = unreachable.
///
/// With `reverse` set, edges are followed against their orientation
/// (distances *to* `source`). Undirected graphs ignore the flag.
pub fn bfs_distances<N: NodeKey>(
    graph: &CanonicalGraph<N>,
    source: NodeIndex,
    reverse: bool,
) -> Vec<Option<usize>> {
    let mut dist: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();

    dist[source.index()] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next = dist[current.index()].map_or(0, |d| d + 1);
        let neighbors: Vec<NodeIndex> = if reverse {
            graph.predecessors(current).collect()
        } else {
            graph.successors(current).collect()
        };

        for neighbor in neighbors {
            if dist[neighbor.index()].is_none() {
                dist[neighbor.index()] = Some(next);
                queue.push_back(neighbor);
            }
        }
    }

    dist
}

/// Mean hop distance over all ordered pairs of distinct nodes.
///
/// Every pair must be reachable; a graph with one node has length 0.
pub fn average_shortest_path_length<N: NodeKey>(graph: &CanonicalGraph<N>) -> AlgorithmResult<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Err(AlgorithmError::EmptyGraph);
    }
    if n == 1 {
        return Ok(0.0);
    }

    let mut total: usize = 0;
    for source in graph.node_indices() {
        for distance in bfs_distances(graph, source, false) {
            total += distance.ok_or_else(|| unreachable_error(graph))?;
        }
    }

    Ok(total as f64 / (n * (n - 1)) as f64)
}

/// Greatest hop distance from each node, indexed by node position.
pub fn eccentricity<N: NodeKey>(graph: &CanonicalGraph<N>) -> AlgorithmResult<Vec<usize>> {
    if graph.node_count() == 0 {
        return Err(AlgorithmError::EmptyGraph);
    }

    graph
        .node_indices()
        .map(|source| {
            bfs_distances(graph, source, false)
                .into_iter()
                .try_fold(0, |max, distance| {
                    distance
                        .map(|d| max.max(d))
                        .ok_or_else(|| unreachable_error(graph))
                })
        })
        .collect()
}

/// Greatest eccentricity.
pub fn diameter<N: NodeKey>(graph: &CanonicalGraph<N>) -> AlgorithmResult<usize> {
    Ok(eccentricity(graph)?.into_iter().max().unwrap_or(0))
}

/// Sum of 1/d over ordered reachable pairs, divided by n(n-1).
///
/// Unreachable pairs contribute 0. Graphs with fewer than two nodes score 0.
pub fn global_efficiency<N: NodeKey>(graph: &CanonicalGraph<N>) -> f64 {
    let n = graph.node_count();
    if n < 2 {
        return 0.0;
    }

    let mut efficiency = 0.0;
    for source in graph.node_indices() {
        efficiency += bfs_distances(graph, source, false)
            .into_iter()
            .flatten()
            .filter(|&d| d > 0)
            .map(|d| 1.0 / d as f64)
            .sum::<f64>();
    }

    efficiency / (n * (n - 1)) as f64
}

fn unreachable_error<N: NodeKey>(graph: &CanonicalGraph<N>) -> AlgorithmError {
    if graph.is_directed() {
        AlgorithmError::NotStronglyConnected
    } else {
        AlgorithmError::NotConnected
    }
}
