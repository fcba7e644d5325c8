// Tests for the annotated edge-list parser and graph building

use netmeasures::{CanonicalGraph, GraphKind, Measures};
use netmeasures_readers::{
    build_from_edges_str, EdgeList, Orientation, ReaderConfig, ReaderError, WeightKind,
};

const ASYM_UNWEIGHTED: &str = "\
% asym unweighted
% 3 4 4
2 4
4 2
482 61
592 308
";

#[test]
fn test_asym_unweighted_keeps_reciprocal_edges() {
    let graph: CanonicalGraph<u32> =
        build_from_edges_str(ASYM_UNWEIGHTED, "konect", &ReaderConfig::default()).unwrap();

    assert!(graph.is_directed());
    assert!(!graph.is_weighted());
    assert!(graph.has_edge(&2, &4));
    assert!(graph.has_edge(&4, &2));
    assert!(!graph.has_edge(&999, &1));
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.node_count(), 6);
}

#[test]
fn test_declared_counts_are_advisory_by_default() {
    // Header declares 3 edges, body has 4
    let list = EdgeList::parse_str(ASYM_UNWEIGHTED, &ReaderConfig::default()).unwrap();
    assert_eq!(list.info.edge_count, 3);
    assert_eq!(list.info.subject_count, 4);
    assert_eq!(list.info.object_count, 4);
    assert_eq!(list.records.len(), 4);
}

#[test]
fn test_declared_counts_enforced_when_configured() {
    let err = EdgeList::parse_str(ASYM_UNWEIGHTED, &ReaderConfig::strict()).unwrap_err();
    assert!(matches!(
        err,
        ReaderError::DeclaredCountMismatch {
            declared: 3,
            found: 4
        }
    ));
}

#[test]
fn test_orientation_maps_to_graph_kind() {
    let cases = [
        ("sym", GraphKind::Undirected),
        ("bip", GraphKind::Undirected),
        ("asym", GraphKind::Directed),
    ];
    for (keyword, expected) in cases {
        let source = format!("% {keyword} unweighted\n% 1 2 2\n1 2\n");
        let graph: CanonicalGraph =
            build_from_edges_str(&source, "kind", &ReaderConfig::default()).unwrap();
        assert_eq!(graph.kind(), expected, "orientation {keyword}");
    }
}

#[test]
fn test_weighted_kinds_attach_weights() {
    let source = "% sym posweighted\n% 2 3 3\n1 2 2.5\n2 3 0.5\n";
    let graph: CanonicalGraph<u32> =
        build_from_edges_str(source, "weighted", &ReaderConfig::default()).unwrap();
    assert!(graph.is_weighted());
    assert_eq!(graph.edge_weight(&2, &1), Some(2.5));

    let measures = Measures::new(graph);
    assert!(measures.avg_strength().is_ok());
}

#[test]
fn test_unweighted_kinds_ignore_extra_columns() {
    // Dynamic lists carry weight and timestamp columns that are not weights
    let source = "% asym dynamic\n% 2 3 3\n1 2 1 1199145600\n2 3 1 1199145700\n";
    let graph: CanonicalGraph<u32> =
        build_from_edges_str(source, "dynamic", &ReaderConfig::default()).unwrap();
    assert!(!graph.is_weighted());
    assert_eq!(graph.edge(&1, &2).map(|data| data.weight), Some(None));
}

#[test]
fn test_weighted_record_missing_weight() {
    let source = "% asym signed\n% 2 2 2\n1 2 -1\n2 1\n";
    assert!(matches!(
        EdgeList::parse_str(source, &ReaderConfig::default()),
        Err(ReaderError::EntryArity {
            line: 4,
            expected: 3,
            found: 2
        })
    ));
}

#[test]
fn test_header_arity_and_keywords() {
    let config = ReaderConfig::default();
    assert!(matches!(
        EdgeList::parse_str("% asym\n% 1 1 1\n", &config),
        Err(ReaderError::HeaderArity {
            line: 1,
            expected: 2,
            found: 1
        })
    ));
    assert!(matches!(
        EdgeList::parse_str("% asym unweighted\n% 1 1\n", &config),
        Err(ReaderError::HeaderArity {
            line: 2,
            expected: 3,
            found: 2
        })
    ));
    assert!(matches!(
        EdgeList::parse_str("% twisted unweighted\n% 1 1 1\n", &config),
        Err(ReaderError::InvalidKeyword {
            role: "orientation",
            ..
        })
    ));
    assert!(matches!(
        EdgeList::parse_str("% asym heavy\n% 1 1 1\n", &config),
        Err(ReaderError::InvalidKeyword {
            role: "weight kind",
            ..
        })
    ));
    assert!(matches!(
        EdgeList::parse_str("% asym unweighted\n", &config),
        Err(ReaderError::MissingLine { line: 2, .. })
    ));
}

#[test]
fn test_body_comments_and_blank_lines_skipped() {
    let source = "% sym unweighted\n% 2 3 3\n\n% a comment\n1 2 % trailing note\n2 3\n";
    let list = EdgeList::parse_str(source, &ReaderConfig::default()).unwrap();
    assert_eq!(list.header.orientation, Orientation::Symmetric);
    assert_eq!(list.header.weight_kind, WeightKind::Unweighted);
    assert_eq!(list.records.len(), 2);
    assert_eq!(list.records[0].line, 5);
}

#[test]
fn test_custom_marker_and_delimiter() {
    let config = ReaderConfig::default()
        .with_comment_marker('#')
        .with_delimiter(',');
    let source = "# asym weighted\n# 1 2 2\na,b,0.25\n";
    let graph: CanonicalGraph = build_from_edges_str(source, "csv", &config).unwrap();
    assert_eq!(graph.edge_weight("a", "b"), Some(0.25));
    assert!(!graph.has_edge("b", "a"));
}
