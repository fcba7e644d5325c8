//! Mapping parsed documents onto [`CanonicalGraph`].
//!
//! Duplicate records overwrite earlier ones (last write wins). Records without
//! a value produce edges with no weight attribute at all, never an implicit 1.

use crate::config::ReaderConfig;
use crate::edges::EdgeList;
use crate::errors::{ReaderError, ReaderResult};
use crate::mtx::{array_unimplemented, EntryValue, MatrixMarket, Storage};
use log::{debug, trace};
use netmeasures::{CanonicalGraph, EdgeData, NodeKey};

/// Build a graph from a parsed Matrix Market document.
///
/// # Errors
///
/// [`ReaderError::InvalidNodeId`] when an index does not convert to `N`, and
/// [`ReaderError::Unimplemented`] for array storage or at the first
/// complex-valued entry.
pub fn build_from_matrix<N: NodeKey>(
    matrix: &MatrixMarket,
    name: &str,
) -> ReaderResult<CanonicalGraph<N>> {
    if matrix.header.storage == Storage::Array {
        return Err(array_unimplemented());
    }
    let kind = matrix.header.graph_kind();
    debug!(
        "Building {kind} graph '{name}' from {} {} entries",
        matrix.entries.len(),
        matrix.header.field
    );

    let mut graph = CanonicalGraph::new(kind).with_name(name);
    for entry in &matrix.entries {
        let data = match entry.value {
            EntryValue::Pattern => EdgeData::unweighted(),
            EntryValue::Integer(value) => EdgeData::weighted(value as f64),
            EntryValue::Real(value) => EdgeData::weighted(value),
            EntryValue::Complex { .. } => {
                return Err(ReaderError::Unimplemented {
                    feature: "complex-valued edge weights",
                })
            }
        };
        let source = node_id(entry.line, &entry.row.to_string())?;
        let target = node_id(entry.line, &entry.column.to_string())?;
        insert(&mut graph, entry.line, source, target, data);
    }

    Ok(graph)
}

/// Build a graph from a parsed edge list.
///
/// # Errors
///
/// [`ReaderError::InvalidNodeId`] when an endpoint does not convert to `N`.
pub fn build_from_edge_list<N: NodeKey>(
    list: &EdgeList,
    name: &str,
) -> ReaderResult<CanonicalGraph<N>> {
    let kind = list.header.orientation.graph_kind();
    debug!(
        "Building {kind} graph '{name}' from {} {} records",
        list.records.len(),
        list.header.weight_kind
    );

    let mut graph = CanonicalGraph::new(kind).with_name(name);
    for record in &list.records {
        let source = node_id(record.line, &record.source)?;
        let target = node_id(record.line, &record.target)?;
        let data = match record.weight {
            Some(weight) => EdgeData::weighted(weight),
            None => EdgeData::unweighted(),
        };
        insert(&mut graph, record.line, source, target, data);
    }

    Ok(graph)
}

/// Parse Matrix Market text and build a graph named `name`.
pub fn build_from_mtx_str<N: NodeKey>(source: &str, name: &str) -> ReaderResult<CanonicalGraph<N>> {
    let matrix = MatrixMarket::parse_str(source)?;
    build_from_matrix(&matrix, name)
}

/// Parse edge-list text and build a graph named `name`.
pub fn build_from_edges_str<N: NodeKey>(
    source: &str,
    name: &str,
    config: &ReaderConfig,
) -> ReaderResult<CanonicalGraph<N>> {
    let list = EdgeList::parse_str(source, config)?;
    build_from_edge_list(&list, name)
}

fn node_id<N: NodeKey>(line: usize, token: &str) -> ReaderResult<N> {
    token
        .parse::<N>()
        .map_err(|_| ReaderError::invalid_node_id(line, token))
}

fn insert<N: NodeKey>(
    graph: &mut CanonicalGraph<N>,
    line: usize,
    source: N,
    target: N,
    data: EdgeData,
) {
    if graph.add_edge(source, target, data).is_some() {
        trace!("Line {line}: duplicate edge overwritten");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_values_become_weights() {
        let source = "%%MatrixMarket matrix coordinate integer general\n2 2 1\n1 2 7\n";
        let graph: CanonicalGraph<u32> = build_from_mtx_str(source, "ints").unwrap();
        assert_eq!(graph.edge_weight(&1, &2), Some(7.0));
        assert_eq!(graph.name(), "ints");
    }

    #[test]
    fn test_duplicate_records_last_write_wins() {
        let source = "% sym weighted\n% 2 2 2\n1 2 0.5\n2 1 4.0\n";
        let graph: CanonicalGraph<u32> =
            build_from_edges_str(source, "dups", &ReaderConfig::default()).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(&1, &2), Some(4.0));
    }

    #[test]
    fn test_array_storage_never_builds() {
        // Zero-entry body: parses, but still refuses to build
        let source = "%%MatrixMarket matrix array real general\n0 5\n";
        let matrix = MatrixMarket::parse_str(source).unwrap();
        let result: ReaderResult<CanonicalGraph> = build_from_matrix(&matrix, "empty");
        assert!(matches!(result, Err(ReaderError::Unimplemented { .. })));

        // Truncated body
        let source = "%%MatrixMarket matrix array real general\n2 2\n";
        let result: ReaderResult<CanonicalGraph> = build_from_mtx_str(source, "short");
        assert!(matches!(result, Err(ReaderError::Unimplemented { .. })));
    }

    #[test]
    fn test_complex_entries_are_unimplemented() {
        let source = "%%MatrixMarket matrix coordinate complex hermitian\n2 2 1\n1 2 1.0 0.5\n";
        let result: ReaderResult<CanonicalGraph> = build_from_mtx_str(source, "complex");
        assert!(matches!(result, Err(ReaderError::Unimplemented { .. })));
    }

    #[test]
    fn test_empty_complex_body_still_builds() {
        let source = "%%MatrixMarket matrix coordinate complex hermitian\n2 2 0\n";
        let graph: CanonicalGraph = build_from_mtx_str(source, "empty").unwrap();
        assert!(!graph.is_directed());
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_node_id_coercion_failure() {
        let source = "% asym unweighted\n% 1 1 1\nalice 2\n";
        let result: ReaderResult<CanonicalGraph<u32>> =
            build_from_edges_str(source, "names", &ReaderConfig::default());
        assert!(matches!(
            result,
            Err(ReaderError::InvalidNodeId { line: 3, ref token }) if token == "alice"
        ));
    }
}
