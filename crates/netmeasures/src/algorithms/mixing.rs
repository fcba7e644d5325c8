//! Degree assortativity.

use crate::graph::{CanonicalGraph, NodeKey};
use petgraph::visit::EdgeRef;

/// Pearson correlation of the degrees found at the two ends of each edge.
///
/// Directed graphs pair the source's out-degree with the target's in-degree.
/// Undirected graphs pair both orientations of every edge (a self-loop once).
/// Returns `NaN` when either degree sequence has zero variance.
pub fn degree_assortativity<N: NodeKey>(graph: &CanonicalGraph<N>) -> f64 {
    let mut pairs: Vec<(f64, f64)> = Vec::with_capacity(graph.edge_count() * 2);

    for edge in graph.inner().edge_references() {
        let (u, v) = (edge.source(), edge.target());
        if graph.is_directed() {
            pairs.push((graph.out_degree(u) as f64, graph.in_degree(v) as f64));
        } else {
            let (du, dv) = (graph.degree(u) as f64, graph.degree(v) as f64);
            pairs.push((du, dv));
            if u != v {
                pairs.push((dv, du));
            }
        }
    }

    pearson(&pairs)
}

fn pearson(pairs: &[(f64, f64)]) -> f64 {
    let m = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / m;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / m;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for &(x, y) in pairs {
        cov += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x) * (x - mean_x);
        var_y += (y - mean_y) * (y - mean_y);
    }

    cov / (var_x * var_y).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeData;

    #[test]
    fn test_star_is_disassortative() {
        let mut graph: CanonicalGraph<u32> = CanonicalGraph::undirected();
        for leaf in 1..=4 {
            graph.add_edge(0, leaf, EdgeData::unweighted());
        }
        assert!((degree_assortativity(&graph) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_regular_graph_is_nan() {
        let mut graph: CanonicalGraph<u32> = CanonicalGraph::undirected();
        graph.add_edge(1, 2, EdgeData::unweighted());
        graph.add_edge(2, 3, EdgeData::unweighted());
        graph.add_edge(3, 1, EdgeData::unweighted());
        assert!(degree_assortativity(&graph).is_nan());
    }

    #[test]
    fn test_empty_graph_is_nan() {
        let graph: CanonicalGraph<u32> = CanonicalGraph::directed();
        assert!(degree_assortativity(&graph).is_nan());
    }
}
