//! Lazily evaluated, memoized structural measures over one graph.
//!
//! A [`Measures`] facade wraps exactly one [`CanonicalGraph`] and owns a cache
//! with one slot per measure. A slot is filled on first access and never
//! recomputed; dropping the facade is the only way to invalidate it.
//!
//! Connectivity questions are gated on directedness. Asking an undirected
//! graph whether it is *strongly* connected, or a directed graph whether it is
//! plainly connected, fails with [`MeasureError::Precondition`] instead of
//! guessing which notion the caller meant.
//!
//! The facade uses unsynchronized interior mutability and is therefore not
//! `Sync`. To measure one graph from several threads, give each thread its own
//! facade over the same `Arc<CanonicalGraph>`.
//!
//! # Example
//!
//! ```
//! use netmeasures::{CanonicalGraph, EdgeData, Measures};
//!
//! let mut graph: CanonicalGraph = CanonicalGraph::directed();
//! graph.add_edge("a".into(), "b".into(), EdgeData::unweighted());
//! graph.add_edge("b".into(), "a".into(), EdgeData::unweighted());
//!
//! let measures = Measures::new(graph);
//! assert!(measures.strongly_connected().unwrap());
//! assert!(measures.connected().unwrap_err().is_precondition());
//! ```

mod values;

pub use values::{CentralNode, DegreeDistribution, Directional};

use crate::algorithms::components::largest;
use crate::algorithms::{GraphAlgorithms, StandardAlgorithms};
use crate::error::{MeasureError, MeasureResult};
use crate::graph::{CanonicalGraph, GraphKind, NodeIndex, NodeKey};
use log::{debug, trace};
use std::cell::OnceCell;
use std::sync::Arc;

/// Number of nodes reported by the `top10_*` accessors.
pub const TOP_CENTRAL_COUNT: usize = 10;

/// Memoizing facade of structural measures over one graph.
///
/// Accessors that can never fail return plain values; the rest return
/// [`MeasureResult`]. Failures are not cached.
pub struct Measures<N: NodeKey = String, A: GraphAlgorithms = StandardAlgorithms> {
    graph: Arc<CanonicalGraph<N>>,
    algorithms: A,
    cache: MeasureCache<N, A>,
}

/// One slot per measure.
struct MeasureCache<N: NodeKey, A: GraphAlgorithms> {
    directed: OnceCell<bool>,
    weighted: OnceCell<bool>,
    connected: OnceCell<bool>,
    weakly_connected: OnceCell<bool>,
    strongly_connected: OnceCell<bool>,
    node_count: OnceCell<usize>,
    edge_count: OnceCell<Directional<usize>>,
    avg_edge_count: OnceCell<Directional<f64>>,
    avg_strength: OnceCell<Directional<f64>>,
    component_count: OnceCell<usize>,
    largest_component_measures: OnceCell<Box<Measures<N, A>>>,
    shortest_path_length: OnceCell<f64>,
    diameter: OnceCell<usize>,
    eccentricity: OnceCell<usize>,
    global_efficiency: OnceCell<f64>,
    global_clustering_coefficient: OnceCell<f64>,
    avg_clustering_coefficient: OnceCell<f64>,
    degree_assortativity: OnceCell<f64>,
    degree_distribution: OnceCell<Directional<DegreeDistribution>>,
    degree_scores: OnceCell<Vec<f64>>,
    betweenness_scores: OnceCell<Vec<f64>>,
    closeness_scores: OnceCell<Vec<f64>>,
    top10_central_degree: OnceCell<Vec<CentralNode<N>>>,
    top10_central_betweenness: OnceCell<Vec<CentralNode<N>>>,
    top10_central_closeness: OnceCell<Vec<CentralNode<N>>>,
    avg_closeness_centrality: OnceCell<f64>,
    avg_betweenness_centrality: OnceCell<f64>,
}

impl<N: NodeKey, A: GraphAlgorithms> Default for MeasureCache<N, A> {
    fn default() -> Self {
        Self {
            directed: OnceCell::new(),
            weighted: OnceCell::new(),
            connected: OnceCell::new(),
            weakly_connected: OnceCell::new(),
            strongly_connected: OnceCell::new(),
            node_count: OnceCell::new(),
            edge_count: OnceCell::new(),
            avg_edge_count: OnceCell::new(),
            avg_strength: OnceCell::new(),
            component_count: OnceCell::new(),
            largest_component_measures: OnceCell::new(),
            shortest_path_length: OnceCell::new(),
            diameter: OnceCell::new(),
            eccentricity: OnceCell::new(),
            global_efficiency: OnceCell::new(),
            global_clustering_coefficient: OnceCell::new(),
            avg_clustering_coefficient: OnceCell::new(),
            degree_assortativity: OnceCell::new(),
            degree_distribution: OnceCell::new(),
            degree_scores: OnceCell::new(),
            betweenness_scores: OnceCell::new(),
            closeness_scores: OnceCell::new(),
            top10_central_degree: OnceCell::new(),
            top10_central_betweenness: OnceCell::new(),
            top10_central_closeness: OnceCell::new(),
            avg_closeness_centrality: OnceCell::new(),
            avg_betweenness_centrality: OnceCell::new(),
        }
    }
}

impl<N: NodeKey> Measures<N, StandardAlgorithms> {
    /// Wrap a graph using the default algorithms collaborator.
    pub fn new(graph: impl Into<Arc<CanonicalGraph<N>>>) -> Self {
        Self::with_algorithms(graph, StandardAlgorithms)
    }
}

impl<N: NodeKey, A: GraphAlgorithms> Measures<N, A> {
    /// Wrap a graph, delegating computations to `algorithms`.
    pub fn with_algorithms(graph: impl Into<Arc<CanonicalGraph<N>>>, algorithms: A) -> Self {
        let graph = graph.into();
        debug!(
            "Creating measures for '{}' ({}, {} nodes, {} edges)",
            graph.name(),
            graph.kind(),
            graph.node_count(),
            graph.edge_count()
        );
        Self {
            graph,
            algorithms,
            cache: MeasureCache::default(),
        }
    }

    /// The wrapped graph.
    pub fn graph(&self) -> &CanonicalGraph<N> {
        &self.graph
    }

    /// A shared handle to the wrapped graph, for building sibling facades.
    pub fn shared_graph(&self) -> Arc<CanonicalGraph<N>> {
        Arc::clone(&self.graph)
    }

    /// The algorithms collaborator.
    pub fn algorithms(&self) -> &A {
        &self.algorithms
    }

    // ===== Kind =====

    /// Whether the graph is directed.
    pub fn directed(&self) -> bool {
        *cached(&self.cache.directed, "directed", || self.graph.is_directed())
    }

    /// Whether any edge carries a weight attribute.
    pub fn weighted(&self) -> bool {
        *cached(&self.cache.weighted, "weighted", || self.graph.is_weighted())
    }

    // ===== Connectivity =====

    /// Whether an undirected graph is connected.
    ///
    /// # Errors
    ///
    /// [`MeasureError::Precondition`] on directed graphs; use
    /// [`weakly_connected`](Self::weakly_connected) or
    /// [`strongly_connected`](Self::strongly_connected) instead.
    pub fn connected(&self) -> MeasureResult<bool> {
        if self.directed() {
            return Err(MeasureError::precondition(
                "connected",
                "directed graphs cannot be plainly connected, use 'weakly_connected' or 'strongly_connected' instead",
            ));
        }
        try_cached(&self.cache.connected, "connected", || {
            Ok(self.algorithms.is_connected(self.graph())?)
        })
        .copied()
    }

    /// Whether a directed graph is weakly connected.
    ///
    /// # Errors
    ///
    /// [`MeasureError::Precondition`] on undirected graphs; use
    /// [`connected`](Self::connected) instead.
    pub fn weakly_connected(&self) -> MeasureResult<bool> {
        if !self.directed() {
            return Err(MeasureError::precondition(
                "weakly_connected",
                "undirected graphs cannot be weakly connected, use 'connected' instead",
            ));
        }
        try_cached(&self.cache.weakly_connected, "weakly_connected", || {
            Ok(self.algorithms.is_weakly_connected(self.graph())?)
        })
        .copied()
    }

    /// Whether a directed graph is strongly connected.
    ///
    /// # Errors
    ///
    /// [`MeasureError::Precondition`] on undirected graphs; use
    /// [`connected`](Self::connected) instead.
    pub fn strongly_connected(&self) -> MeasureResult<bool> {
        if !self.directed() {
            return Err(MeasureError::precondition(
                "strongly_connected",
                "undirected graphs cannot be strongly connected, use 'connected' instead",
            ));
        }
        try_cached(&self.cache.strongly_connected, "strongly_connected", || {
            Ok(self.algorithms.is_strongly_connected(self.graph())?)
        })
        .copied()
    }

    // ===== Size =====

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        *cached(&self.cache.node_count, "node_count", || self.graph.node_count())
    }

    /// Number of edges; `(in, out)` edge totals for directed graphs.
    pub fn edge_count(&self) -> Directional<usize> {
        cached(&self.cache.edge_count, "edge_count", || match self.graph.kind() {
            GraphKind::Undirected => Directional::Undirected(self.graph.edge_count()),
            GraphKind::Directed => Directional::Directed {
                incoming: self.sum_over_nodes(|idx| self.graph.in_degree(idx)),
                outgoing: self.sum_over_nodes(|idx| self.graph.out_degree(idx)),
            },
        })
        .clone()
    }

    /// Mean degree; mean `(in, out)` degree for directed graphs.
    ///
    /// # Errors
    ///
    /// [`MeasureError::EmptyGraph`] when the graph has no nodes.
    pub fn avg_edge_count(&self) -> MeasureResult<Directional<f64>> {
        try_cached(&self.cache.avg_edge_count, "avg_edge_count", || {
            self.require_nodes("avg_edge_count")?;
            Ok(match self.graph.kind() {
                GraphKind::Undirected => {
                    Directional::Undirected(self.mean_over_nodes(|idx| self.graph.degree(idx) as f64))
                }
                GraphKind::Directed => Directional::Directed {
                    incoming: self.mean_over_nodes(|idx| self.graph.in_degree(idx) as f64),
                    outgoing: self.mean_over_nodes(|idx| self.graph.out_degree(idx) as f64),
                },
            })
        })
        .cloned()
    }

    /// Mean weighted degree; mean `(in, out)` strength for directed graphs.
    ///
    /// # Errors
    ///
    /// [`MeasureError::Precondition`] when no edge carries a weight.
    pub fn avg_strength(&self) -> MeasureResult<Directional<f64>> {
        if !self.weighted() {
            return Err(MeasureError::precondition(
                "avg_strength",
                "unweighted graphs cannot have strength",
            ));
        }
        try_cached(&self.cache.avg_strength, "avg_strength", || {
            self.require_nodes("avg_strength")?;
            Ok(match self.graph.kind() {
                GraphKind::Undirected => {
                    Directional::Undirected(self.mean_over_nodes(|idx| self.graph.strength(idx)))
                }
                GraphKind::Directed => Directional::Directed {
                    incoming: self.mean_over_nodes(|idx| self.graph.in_strength(idx)),
                    outgoing: self.mean_over_nodes(|idx| self.graph.out_strength(idx)),
                },
            })
        })
        .cloned()
    }

    // ===== Components =====

    /// Number of strongly connected (directed) or connected (undirected) components.
    pub fn component_count(&self) -> usize {
        *cached(&self.cache.component_count, "component_count", || {
            self.components().len()
        })
    }

    /// Facade over the largest strongly connected (directed) or connected
    /// (undirected) component.
    ///
    /// When the whole graph already is one such component, `self` is returned
    /// as is.
    ///
    /// # Errors
    ///
    /// Fails when connectivity cannot be decided (an empty graph).
    pub fn largest_component_measures(&self) -> MeasureResult<&Measures<N, A>> {
        let whole = if self.directed() {
            self.strongly_connected()?
        } else {
            self.connected()?
        };
        if whole {
            trace!("'{}' is a single component", self.graph.name());
            return Ok(self);
        }

        try_cached(
            &self.cache.largest_component_measures,
            "largest_component_measures",
            || {
                let component = largest(self.components());
                let subgraph = self.graph.induced_subgraph(&component);
                Ok(Box::new(Measures::with_algorithms(
                    subgraph,
                    self.algorithms.clone(),
                )))
            },
        )
        .map(|boxed| &**boxed)
    }

    // ===== Distances =====

    /// Average shortest path length within the largest weakly connected
    /// (directed) or connected (undirected) component.
    pub fn shortest_path_length(&self) -> MeasureResult<f64> {
        try_cached(&self.cache.shortest_path_length, "shortest_path_length", || {
            let component = largest(self.algorithms.connected_components(self.graph()));
            let subgraph = self.graph.induced_subgraph(&component);
            Ok(self.algorithms.average_shortest_path_length(&subgraph)?)
        })
        .copied()
    }

    /// Diameter of the largest strongly connected (directed) or connected
    /// (undirected) component.
    pub fn diameter(&self) -> MeasureResult<usize> {
        try_cached(&self.cache.diameter, "diameter", || {
            let subgraph = self.largest_component_subgraph();
            Ok(self.algorithms.diameter(&subgraph)?)
        })
        .copied()
    }

    /// Greatest node eccentricity within the largest strongly connected
    /// (directed) or connected (undirected) component.
    pub fn eccentricity(&self) -> MeasureResult<usize> {
        try_cached(&self.cache.eccentricity, "eccentricity", || {
            let subgraph = self.largest_component_subgraph();
            let per_node = self.algorithms.eccentricity(&subgraph)?;
            Ok(per_node.into_iter().max().unwrap_or(0))
        })
        .copied()
    }

    /// Mean of 1/distance over all ordered node pairs, unreachable pairs counting 0.
    pub fn global_efficiency(&self) -> f64 {
        *cached(&self.cache.global_efficiency, "global_efficiency", || {
            self.algorithms.global_efficiency(self.graph())
        })
    }

    // ===== Clustering and mixing =====

    /// Transitivity of the graph.
    pub fn global_clustering_coefficient(&self) -> f64 {
        *cached(
            &self.cache.global_clustering_coefficient,
            "global_clustering_coefficient",
            || self.algorithms.transitivity(self.graph()),
        )
    }

    /// Mean local clustering coefficient.
    ///
    /// # Errors
    ///
    /// [`MeasureError::EmptyGraph`] when the graph has no nodes.
    pub fn avg_clustering_coefficient(&self) -> MeasureResult<f64> {
        try_cached(
            &self.cache.avg_clustering_coefficient,
            "avg_clustering_coefficient",
            || {
                self.require_nodes("avg_clustering_coefficient")?;
                Ok(self.algorithms.average_clustering(self.graph()))
            },
        )
        .copied()
    }

    /// Degree assortativity coefficient (`NaN` when undefined).
    pub fn degree_assortativity(&self) -> f64 {
        *cached(&self.cache.degree_assortativity, "degree_assortativity", || {
            self.algorithms.degree_assortativity(self.graph())
        })
    }

    /// Degree histogram; `(in-degree, out-degree)` histograms for directed graphs.
    pub fn degree_distribution(&self) -> &Directional<DegreeDistribution> {
        cached(&self.cache.degree_distribution, "degree_distribution", || {
            let histogram = |degree: &dyn Fn(NodeIndex) -> usize| {
                let mut counts = DegreeDistribution::new();
                for idx in self.graph.node_indices() {
                    *counts.entry(degree(idx)).or_insert(0) += 1;
                }
                counts
            };
            match self.graph.kind() {
                GraphKind::Undirected => Directional::Undirected(histogram(&|idx| self.graph.degree(idx))),
                GraphKind::Directed => Directional::Directed {
                    incoming: histogram(&|idx| self.graph.in_degree(idx)),
                    outgoing: histogram(&|idx| self.graph.out_degree(idx)),
                },
            }
        })
    }

    // ===== Centrality =====

    /// The ten nodes with highest degree centrality.
    pub fn top10_central_degree(&self) -> &[CentralNode<N>] {
        cached(&self.cache.top10_central_degree, "top10_central_degree", || {
            self.top_central(self.degree_scores())
        })
        .as_slice()
    }

    /// The ten nodes with highest betweenness centrality.
    pub fn top10_central_betweenness(&self) -> &[CentralNode<N>] {
        cached(
            &self.cache.top10_central_betweenness,
            "top10_central_betweenness",
            || self.top_central(self.betweenness_scores()),
        )
        .as_slice()
    }

    /// The ten nodes with highest closeness centrality.
    pub fn top10_central_closeness(&self) -> &[CentralNode<N>] {
        cached(
            &self.cache.top10_central_closeness,
            "top10_central_closeness",
            || self.top_central(self.closeness_scores()),
        )
        .as_slice()
    }

    /// Mean closeness centrality.
    ///
    /// # Errors
    ///
    /// [`MeasureError::EmptyGraph`] when the graph has no nodes.
    pub fn avg_closeness_centrality(&self) -> MeasureResult<f64> {
        try_cached(
            &self.cache.avg_closeness_centrality,
            "avg_closeness_centrality",
            || {
                self.require_nodes("avg_closeness_centrality")?;
                Ok(mean(self.closeness_scores()))
            },
        )
        .copied()
    }

    /// Mean betweenness centrality.
    ///
    /// # Errors
    ///
    /// [`MeasureError::EmptyGraph`] when the graph has no nodes.
    pub fn avg_betweenness_centrality(&self) -> MeasureResult<f64> {
        try_cached(
            &self.cache.avg_betweenness_centrality,
            "avg_betweenness_centrality",
            || {
                self.require_nodes("avg_betweenness_centrality")?;
                Ok(mean(self.betweenness_scores()))
            },
        )
        .copied()
    }

    // Private helper methods

    fn components(&self) -> Vec<Vec<NodeIndex>> {
        match self.graph.kind() {
            GraphKind::Directed => self.algorithms.strongly_connected_components(self.graph()),
            GraphKind::Undirected => self.algorithms.connected_components(self.graph()),
        }
    }

    fn largest_component_subgraph(&self) -> CanonicalGraph<N> {
        self.graph.induced_subgraph(&largest(self.components()))
    }

    fn degree_scores(&self) -> &[f64] {
        cached(&self.cache.degree_scores, "degree_centrality", || {
            self.algorithms.degree_centrality(self.graph())
        })
        .as_slice()
    }

    fn betweenness_scores(&self) -> &[f64] {
        cached(&self.cache.betweenness_scores, "betweenness_centrality", || {
            self.algorithms.betweenness_centrality(self.graph())
        })
        .as_slice()
    }

    fn closeness_scores(&self) -> &[f64] {
        cached(&self.cache.closeness_scores, "closeness_centrality", || {
            self.algorithms.closeness_centrality(self.graph())
        })
        .as_slice()
    }

    /// Highest scores first; equal scores keep graph order.
    fn top_central(&self, scores: &[f64]) -> Vec<CentralNode<N>> {
        let mut ranked: Vec<CentralNode<N>> = self
            .graph
            .nodes()
            .zip(scores.iter())
            .map(|(node, &score)| CentralNode {
                node: node.clone(),
                score,
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(TOP_CENTRAL_COUNT);
        ranked
    }

    fn require_nodes(&self, measure: &'static str) -> MeasureResult<()> {
        if self.node_count() == 0 {
            return Err(MeasureError::EmptyGraph { measure });
        }
        Ok(())
    }

    fn sum_over_nodes(&self, value: impl Fn(NodeIndex) -> usize) -> usize {
        self.graph.node_indices().map(value).sum()
    }

    fn mean_over_nodes(&self, value: impl Fn(NodeIndex) -> f64) -> f64 {
        let values: Vec<f64> = self.graph.node_indices().map(value).collect();
        mean(&values)
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn cached<'a, T>(slot: &'a OnceCell<T>, measure: &'static str, compute: impl FnOnce() -> T) -> &'a T {
    if slot.get().is_some() {
        trace!("Cache hit for '{measure}'");
    }
    slot.get_or_init(|| {
        debug!("Computing '{measure}'");
        compute()
    })
}

fn try_cached<'a, T>(
    slot: &'a OnceCell<T>,
    measure: &'static str,
    compute: impl FnOnce() -> MeasureResult<T>,
) -> MeasureResult<&'a T> {
    if let Some(value) = slot.get() {
        trace!("Cache hit for '{measure}'");
        return Ok(value);
    }
    debug!("Computing '{measure}'");
    let value = compute()?;
    Ok(slot.get_or_init(|| value))
}
