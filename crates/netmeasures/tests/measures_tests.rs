// Integration tests for the memoizing measures facade

use netmeasures::algorithms::{centrality, clustering, components, paths};
use netmeasures::{
    AlgorithmError, AlgorithmResult, CanonicalGraph, Directional, EdgeData, GraphAlgorithms,
    MeasureError, Measures, NodeIndex, NodeKey,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

/// Collaborator that records how often each computation runs.
#[derive(Clone, Default)]
struct CountingAlgorithms {
    calls: Rc<RefCell<HashMap<&'static str, usize>>>,
}

impl CountingAlgorithms {
    fn record(&self, name: &'static str) {
        *self.calls.borrow_mut().entry(name).or_insert(0) += 1;
    }

    fn count(&self, name: &str) -> usize {
        self.calls.borrow().get(name).copied().unwrap_or(0)
    }
}

impl GraphAlgorithms for CountingAlgorithms {
    fn is_connected<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> AlgorithmResult<bool> {
        self.record("is_connected");
        components::is_connected(graph)
    }

    fn is_strongly_connected<N: NodeKey>(
        &self,
        graph: &CanonicalGraph<N>,
    ) -> AlgorithmResult<bool> {
        self.record("is_strongly_connected");
        components::is_strongly_connected(graph)
    }

    fn connected_components<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> Vec<Vec<NodeIndex>> {
        self.record("connected_components");
        components::connected_components(graph)
    }

    fn average_shortest_path_length<N: NodeKey>(
        &self,
        graph: &CanonicalGraph<N>,
    ) -> AlgorithmResult<f64> {
        self.record("average_shortest_path_length");
        paths::average_shortest_path_length(graph)
    }

    fn global_efficiency<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> f64 {
        self.record("global_efficiency");
        paths::global_efficiency(graph)
    }

    fn transitivity<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> f64 {
        self.record("transitivity");
        clustering::transitivity(graph)
    }

    fn betweenness_centrality<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> Vec<f64> {
        self.record("betweenness_centrality");
        centrality::betweenness_centrality(graph)
    }

    fn closeness_centrality<N: NodeKey>(&self, graph: &CanonicalGraph<N>) -> Vec<f64> {
        self.record("closeness_centrality");
        centrality::closeness_centrality(graph)
    }
}

fn graph_from(directed: bool, edges: &[(&str, &str)]) -> CanonicalGraph {
    let mut graph = if directed {
        CanonicalGraph::directed()
    } else {
        CanonicalGraph::undirected()
    };
    for &(a, b) in edges {
        graph.add_edge(a.to_string(), b.to_string(), EdgeData::unweighted());
    }
    graph
}

#[test]
fn test_repeated_reads_compute_once() {
    let algorithms = CountingAlgorithms::default();
    let graph = graph_from(false, &[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);
    let measures = Measures::with_algorithms(graph, algorithms.clone());

    assert_eq!(measures.connected(), measures.connected());
    assert_eq!(measures.global_efficiency(), measures.global_efficiency());
    assert_eq!(
        measures.global_clustering_coefficient(),
        measures.global_clustering_coefficient()
    );
    assert_eq!(measures.shortest_path_length(), measures.shortest_path_length());

    assert_eq!(algorithms.count("is_connected"), 1);
    assert_eq!(algorithms.count("global_efficiency"), 1);
    assert_eq!(algorithms.count("transitivity"), 1);
    assert_eq!(algorithms.count("average_shortest_path_length"), 1);
}

#[test]
fn test_top10_and_average_share_one_computation() {
    let algorithms = CountingAlgorithms::default();
    let graph = graph_from(false, &[("a", "b"), ("b", "c"), ("c", "d")]);
    let measures = Measures::with_algorithms(graph, algorithms.clone());

    let top = measures.top10_central_betweenness().to_vec();
    let avg = measures.avg_betweenness_centrality().unwrap();
    assert_eq!(top, measures.top10_central_betweenness());
    assert_eq!(avg, measures.avg_betweenness_centrality().unwrap());
    assert_eq!(algorithms.count("betweenness_centrality"), 1);

    measures.top10_central_closeness();
    measures.avg_closeness_centrality().unwrap();
    assert_eq!(algorithms.count("closeness_centrality"), 1);
}

#[test]
fn test_precondition_failure_does_not_touch_collaborator() {
    let algorithms = CountingAlgorithms::default();
    let graph = graph_from(true, &[("a", "b"), ("b", "a")]);
    let measures = Measures::with_algorithms(graph, algorithms.clone());

    let err = measures.connected().unwrap_err();
    assert!(err.is_precondition());
    assert_eq!(algorithms.count("is_connected"), 0);

    assert!(measures.strongly_connected().unwrap());
    assert!(measures.strongly_connected().unwrap());
    assert_eq!(algorithms.count("is_strongly_connected"), 1);
}

#[test]
fn test_directed_connectivity_accessors() {
    let measures = Measures::new(graph_from(true, &[("a", "b"), ("b", "c")]));
    assert!(matches!(
        measures.connected(),
        Err(MeasureError::Precondition {
            measure: "connected",
            ..
        })
    ));
    assert!(measures.weakly_connected().unwrap());
    assert!(!measures.strongly_connected().unwrap());
}

#[test]
fn test_undirected_connectivity_accessors() {
    let measures = Measures::new(graph_from(false, &[("a", "b"), ("c", "d")]));
    assert!(!measures.connected().unwrap());
    assert!(measures.weakly_connected().unwrap_err().is_precondition());
    assert!(measures.strongly_connected().unwrap_err().is_precondition());
}

#[test]
fn test_largest_component_returns_same_instance_when_connected() {
    let measures = Measures::new(graph_from(true, &[("a", "b"), ("b", "c"), ("c", "a")]));
    let largest = measures.largest_component_measures().unwrap();
    assert!(std::ptr::eq(largest, &measures));
}

#[test]
fn test_largest_component_of_directed_graph() {
    // SCCs: {a, b, c} and {d}
    let measures = Measures::new(graph_from(
        true,
        &[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")],
    ));
    assert_eq!(measures.component_count(), 2);

    let largest = measures.largest_component_measures().unwrap();
    assert!(!std::ptr::eq(largest, &measures));
    assert_eq!(largest.node_count(), 3);
    assert!(largest.strongly_connected().unwrap());
    assert!(largest.graph().contains_node("a"));
    assert!(!largest.graph().contains_node("d"));

    // The nested facade is already strongly connected
    assert!(std::ptr::eq(largest.largest_component_measures().unwrap(), largest));
}

#[test]
fn test_avg_strength_fails_iff_unweighted() {
    let unweighted = Measures::new(graph_from(true, &[("a", "b")]));
    assert!(!unweighted.weighted());
    assert!(unweighted.avg_strength().unwrap_err().is_precondition());

    let mut graph: CanonicalGraph = CanonicalGraph::directed();
    graph.add_edge("a".into(), "b".into(), EdgeData::weighted(3.0));
    graph.add_edge("b".into(), "c".into(), EdgeData::unweighted());
    let weighted = Measures::new(graph);
    assert!(weighted.weighted());
    // Unweighted edge counts as 1: in = (0+3+1)/3, out = (3+1+0)/3
    assert_eq!(
        weighted.avg_strength().unwrap(),
        Directional::Directed {
            incoming: 4.0 / 3.0,
            outgoing: 4.0 / 3.0
        }
    );
}

#[test]
fn test_degree_distribution_directed() {
    let measures = Measures::new(graph_from(true, &[("a", "b"), ("a", "c"), ("b", "c")]));
    let (incoming, outgoing) = measures.degree_distribution().as_directed().unwrap();
    assert_eq!(
        incoming.iter().map(|(d, c)| (*d, *c)).collect::<Vec<_>>(),
        vec![(0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        outgoing.iter().map(|(d, c)| (*d, *c)).collect::<Vec<_>>(),
        vec![(0, 1), (1, 1), (2, 1)]
    );
}

#[test]
fn test_top10_degree_ranks_hub_first() {
    let edges: Vec<(String, String)> = (1..=12).map(|i| ("hub".to_string(), format!("leaf{i}"))).collect();
    let mut graph: CanonicalGraph = CanonicalGraph::undirected();
    for (a, b) in edges {
        graph.add_edge(a, b, EdgeData::unweighted());
    }
    let measures = Measures::new(graph);

    let top = measures.top10_central_degree();
    assert_eq!(top.len(), 10);
    assert_eq!(top[0].node, "hub");
    assert_eq!(top[0].score, 1.0);
    // Equal scores keep insertion order
    let leaves: Vec<&str> = top[1..].iter().map(|c| c.node.as_str()).collect();
    assert_eq!(
        leaves,
        vec!["leaf1", "leaf2", "leaf3", "leaf4", "leaf5", "leaf6", "leaf7", "leaf8", "leaf9"]
    );
}

#[test]
fn test_shortest_path_length_reports_unreachable_pairs() {
    let measures = Measures::new(graph_from(true, &[("a", "b"), ("b", "c")]));
    assert_eq!(
        measures.shortest_path_length(),
        Err(MeasureError::Algorithm(AlgorithmError::NotStronglyConnected))
    );
    // Diameter runs on the largest strongly connected component (a single node)
    assert_eq!(measures.diameter().unwrap(), 0);
}

#[test]
fn test_global_efficiency_counts_unreachable_as_zero() {
    // a->b only: efficiency 1 / (2 * 1)
    let measures = Measures::new(graph_from(true, &[("a", "b")]));
    assert!((measures.global_efficiency() - 0.5).abs() < 1e-12);
}

#[test]
fn test_facades_share_one_graph() {
    let graph = Arc::new(graph_from(false, &[("a", "b"), ("b", "c")]));
    let first = Measures::new(Arc::clone(&graph));
    let second = Measures::new(first.shared_graph());
    assert!(std::ptr::eq(first.graph(), second.graph()));

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let graph = Arc::clone(&graph);
            std::thread::spawn(move || Measures::new(graph).diameter().unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}

#[test]
fn test_results_serialize() {
    let measures = Measures::new(graph_from(true, &[("a", "b")]));
    let json = serde_json::to_value(measures.edge_count()).unwrap();
    assert_eq!(json, serde_json::json!({ "incoming": 1, "outgoing": 1 }));

    let top = serde_json::to_value(&measures.top10_central_degree()[0]).unwrap();
    assert_eq!(top["node"], "a");
}
