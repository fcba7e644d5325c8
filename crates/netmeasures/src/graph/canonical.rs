//! The canonical in-memory graph produced by ingestion.

use super::types::{EdgeData, GraphKind, NodeKey};
use log::{debug, trace};
use petgraph::graph::{EdgeIndex, Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A simple directed-or-undirected graph with optionally weighted edges.
///
/// Nodes are keyed by a stable identifier `N` and kept in insertion order,
/// which is the iteration order every algorithm observes. There are no
/// parallel edges: adding an edge that already exists replaces its payload.
///
/// The graph is read-only once handed to a [`Measures`](crate::Measures)
/// facade; share it between facades through an `Arc`.
#[derive(Debug, Clone)]
pub struct CanonicalGraph<N: NodeKey = String> {
    name: String,
    kind: GraphKind,
    // Undirected edges are stored once, in the orientation first seen
    inner: Graph<N, EdgeData>,
    index: HashMap<N, NodeIndex>,
}

impl<N: NodeKey> CanonicalGraph<N> {
    /// Create an empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            name: String::new(),
            kind,
            inner: Graph::new(),
            index: HashMap::new(),
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Set the display name (builder style).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Display name, used for reporting only.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Directed or undirected.
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Shorthand for `kind().is_directed()`.
    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Add a node, returning its index. Adding an existing key is a no-op.
    pub fn add_node(&mut self, key: N) -> NodeIndex {
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.inner.add_node(key.clone());
        self.index.insert(key, idx);
        idx
    }

    /// Add an edge, creating missing endpoints.
    ///
    /// If the edge already exists (in either orientation for undirected
    /// graphs) its payload is replaced and the previous payload returned.
    pub fn add_edge(&mut self, source: N, target: N, data: EdgeData) -> Option<EdgeData> {
        let a = self.add_node(source);
        let b = self.add_node(target);

        match self.find_edge(a, b) {
            Some(edge) => {
                trace!("Overwriting edge {a:?} -> {b:?}");
                Some(std::mem::replace(&mut self.inner[edge], data))
            }
            None => {
                self.inner.add_edge(a, b, data);
                None
            }
        }
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Whether a node with this key exists.
    pub fn contains_node<Q>(&self, key: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Index of the node with this key.
    pub fn node_index<Q>(&self, key: &Q) -> Option<NodeIndex>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    /// Key of the node at `idx`.
    pub fn node_key(&self, idx: NodeIndex) -> Option<&N> {
        self.inner.node_weight(idx)
    }

    /// Payload of the edge between two keys, honoring directedness.
    pub fn edge<Q>(&self, source: &Q, target: &Q) -> Option<&EdgeData>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let a = self.node_index(source)?;
        let b = self.node_index(target)?;
        self.find_edge(a, b).map(|e| &self.inner[e])
    }

    /// Whether an edge connects the two keys, honoring directedness.
    pub fn has_edge<Q>(&self, source: &Q, target: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edge(source, target).is_some()
    }

    /// Weight attribute of the edge between two keys, if both exist.
    pub fn edge_weight<Q>(&self, source: &Q, target: &Q) -> Option<f64>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edge(source, target).and_then(|data| data.weight)
    }

    /// True iff any edge carries a weight attribute.
    pub fn is_weighted(&self) -> bool {
        self.inner
            .edge_references()
            .any(|edge| edge.weight().is_weighted())
    }

    /// Node keys in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.inner.node_indices().map(move |idx| &self.inner[idx])
    }

    /// Node indices in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.inner.node_indices()
    }

    /// All edges as `(source, target, payload)`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, &EdgeData)> + '_ {
        self.inner
            .edge_references()
            .map(move |edge| (&self.inner[edge.source()], &self.inner[edge.target()], edge.weight()))
    }

    /// Nodes reachable over one edge: out-neighbors, or all neighbors when undirected.
    pub fn successors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        match self.kind {
            GraphKind::Directed => self.inner.neighbors_directed(node, Direction::Outgoing),
            GraphKind::Undirected => self.inner.neighbors_undirected(node),
        }
    }

    /// Nodes with an edge into `node`: in-neighbors, or all neighbors when undirected.
    pub fn predecessors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        match self.kind {
            GraphKind::Directed => self.inner.neighbors_directed(node, Direction::Incoming),
            GraphKind::Undirected => self.inner.neighbors_undirected(node),
        }
    }

    /// Neighbors ignoring edge orientation.
    pub fn neighbors_undirected(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.inner.neighbors_undirected(node)
    }

    /// Number of edges ending at `node` (directed graphs).
    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.inner.edges_directed(node, Direction::Incoming).count()
    }

    /// Number of edges starting at `node` (directed graphs).
    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.inner.edges_directed(node, Direction::Outgoing).count()
    }

    /// Total degree. A self-loop counts twice.
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.in_degree(node) + self.out_degree(node)
    }

    /// Sum of weights of edges ending at `node`.
    pub fn in_strength(&self, node: NodeIndex) -> f64 {
        self.strength_in_direction(node, Direction::Incoming)
    }

    /// Sum of weights of edges starting at `node`.
    pub fn out_strength(&self, node: NodeIndex) -> f64 {
        self.strength_in_direction(node, Direction::Outgoing)
    }

    /// Sum of weights of all incident edges. A self-loop counts twice.
    pub fn strength(&self, node: NodeIndex) -> f64 {
        self.in_strength(node) + self.out_strength(node)
    }

    /// Copy of the subgraph induced by `nodes`.
    ///
    /// Node order and edge order follow this graph; the name is kept.
    pub fn induced_subgraph(&self, nodes: &[NodeIndex]) -> Self {
        let mut keep: Vec<Option<NodeIndex>> = vec![None; self.node_count()];
        for &idx in nodes {
            if idx.index() < keep.len() {
                keep[idx.index()] = Some(idx);
            }
        }

        let mut sub = Self::new(self.kind).with_name(self.name.clone());
        let mut remap: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(nodes.len());
        for idx in self.inner.node_indices() {
            if keep[idx.index()].is_some() {
                remap.insert(idx, sub.add_node(self.inner[idx].clone()));
            }
        }

        for edge in self.inner.edge_references() {
            if let (Some(&a), Some(&b)) = (remap.get(&edge.source()), remap.get(&edge.target())) {
                sub.inner.add_edge(a, b, *edge.weight());
            }
        }

        debug!(
            "Induced subgraph of '{}': {} of {} nodes, {} edges",
            self.name,
            sub.node_count(),
            self.node_count(),
            sub.edge_count()
        );
        sub
    }

    /// Underlying petgraph storage (always a directed graph internally).
    pub(crate) fn inner(&self) -> &Graph<N, EdgeData> {
        &self.inner
    }

    fn find_edge(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        match self.kind {
            GraphKind::Directed => self.inner.find_edge(a, b),
            GraphKind::Undirected => self.inner.find_edge_undirected(a, b).map(|(edge, _)| edge),
        }
    }

    fn strength_in_direction(&self, node: NodeIndex, direction: Direction) -> f64 {
        self.inner
            .edges_directed(node, direction)
            .map(|edge| edge.weight().weight_or_unit())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_edges_are_distinct() {
        let mut graph: CanonicalGraph = CanonicalGraph::directed();
        graph.add_edge("a".into(), "b".into(), EdgeData::unweighted());
        assert!(graph.has_edge("a", "b"));
        assert!(!graph.has_edge("b", "a"));

        graph.add_edge("b".into(), "a".into(), EdgeData::unweighted());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_undirected_reverse_record_overwrites() {
        let mut graph: CanonicalGraph = CanonicalGraph::undirected();
        graph.add_edge("a".into(), "b".into(), EdgeData::weighted(1.0));
        let previous = graph.add_edge("b".into(), "a".into(), EdgeData::weighted(2.0));

        assert_eq!(previous, Some(EdgeData::weighted(1.0)));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight("a", "b"), Some(2.0));
        assert_eq!(graph.edge_weight("b", "a"), Some(2.0));
    }

    #[test]
    fn test_self_loop_counts_twice() {
        let mut graph: CanonicalGraph<u32> = CanonicalGraph::undirected();
        graph.add_edge(1, 1, EdgeData::unweighted());
        let idx = graph.node_index(&1).unwrap();
        assert_eq!(graph.degree(idx), 2);
    }

    #[test]
    fn test_is_weighted_when_any_edge_weighted() {
        let mut graph: CanonicalGraph<u32> = CanonicalGraph::directed();
        graph.add_edge(1, 2, EdgeData::unweighted());
        assert!(!graph.is_weighted());
        graph.add_edge(2, 3, EdgeData::weighted(0.25));
        assert!(graph.is_weighted());
    }

    #[test]
    fn test_induced_subgraph_keeps_order_and_edges() {
        let mut graph: CanonicalGraph<u32> = CanonicalGraph::directed().with_name("g");
        graph.add_edge(1, 2, EdgeData::unweighted());
        graph.add_edge(2, 3, EdgeData::weighted(3.0));
        graph.add_edge(3, 4, EdgeData::unweighted());

        let keep: Vec<_> = [2, 3].iter().filter_map(|k| graph.node_index(k)).collect();
        let sub = graph.induced_subgraph(&keep);

        assert_eq!(sub.name(), "g");
        assert_eq!(sub.nodes().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(sub.edge_count(), 1);
        assert_eq!(sub.edge_weight(&2, &3), Some(3.0));
    }
}
