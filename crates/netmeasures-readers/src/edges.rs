//! Annotated edge lists (KONECT `out.*` / `.edges` files).
//!
//! ```text
//! % asym unweighted
//! % 3 4 4
//! 2 4
//! 4 2
//! 482 61
//! ```
//!
//! Line 1 names the orientation and the weight kind, line 2 the declared edge,
//! subject and object counts. Every following non-comment line is one record.

use crate::config::ReaderConfig;
use crate::errors::{ReaderError, ReaderResult};
use crate::traits::GraphReader;
use log::{debug, trace, warn};
use netmeasures::{CanonicalGraph, GraphKind, NodeKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Edge orientation declared in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// `sym`: undirected
    Symmetric,
    /// `asym`: directed
    Asymmetric,
    /// `bip`: two-mode, stored undirected
    Bipartite,
}

impl Orientation {
    /// Short keyword as written in headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Symmetric => "sym",
            Orientation::Asymmetric => "asym",
            Orientation::Bipartite => "bip",
        }
    }

    /// Asymmetric lists are directed; symmetric and bipartite lists undirected.
    pub fn graph_kind(&self) -> GraphKind {
        match self {
            Orientation::Asymmetric => GraphKind::Directed,
            Orientation::Symmetric | Orientation::Bipartite => GraphKind::Undirected,
        }
    }

    fn from_keyword(token: &str) -> Option<Self> {
        match token {
            "sym" | "symmetric" => Some(Orientation::Symmetric),
            "asym" | "asymmetric" => Some(Orientation::Asymmetric),
            "bip" | "bipartite" => Some(Orientation::Bipartite),
            _ => None,
        }
    }
}

/// Edge weight semantics declared in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightKind {
    /// No weights
    Unweighted,
    /// Multiple edges allowed, no weights
    Positive,
    /// Positive weights
    PositiveWeighted,
    /// Signed weights
    Signed,
    /// Multiple signed edges
    MultiSigned,
    /// Arbitrary weights
    Weighted,
    /// Multiple weighted edges
    MultiWeighted,
    /// Timestamped presence
    Dynamic,
    /// Multiple positive-weighted edges
    MultiPositiveWeighted,
}

impl WeightKind {
    /// Short keyword as written in headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightKind::Unweighted => "unweighted",
            WeightKind::Positive => "positive",
            WeightKind::PositiveWeighted => "posweighted",
            WeightKind::Signed => "signed",
            WeightKind::MultiSigned => "multisigned",
            WeightKind::Weighted => "weighted",
            WeightKind::MultiWeighted => "multiweighted",
            WeightKind::Dynamic => "dynamic",
            WeightKind::MultiPositiveWeighted => "multiposweighted",
        }
    }

    /// Whether records carry a numeric weight in their third column.
    pub fn carries_weight(&self) -> bool {
        match self {
            WeightKind::PositiveWeighted
            | WeightKind::Signed
            | WeightKind::MultiSigned
            | WeightKind::Weighted
            | WeightKind::MultiWeighted
            | WeightKind::MultiPositiveWeighted => true,
            WeightKind::Unweighted | WeightKind::Positive | WeightKind::Dynamic => false,
        }
    }

    /// Tokens a record must have.
    pub fn record_width(&self) -> usize {
        if self.carries_weight() {
            3
        } else {
            2
        }
    }

    fn from_keyword(token: &str) -> Option<Self> {
        match token {
            "unweighted" => Some(WeightKind::Unweighted),
            "positive" => Some(WeightKind::Positive),
            "posweighted" | "positive-weighted" => Some(WeightKind::PositiveWeighted),
            "signed" => Some(WeightKind::Signed),
            "multisigned" | "multi-signed" => Some(WeightKind::MultiSigned),
            "weighted" => Some(WeightKind::Weighted),
            "multiweighted" | "multi-weighted" => Some(WeightKind::MultiWeighted),
            "dynamic" => Some(WeightKind::Dynamic),
            "multiposweighted" | "multi-positive-weighted" => {
                Some(WeightKind::MultiPositiveWeighted)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WeightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded first header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeListHeader {
    /// Edge orientation
    pub orientation: Orientation,
    /// Weight semantics
    pub weight_kind: WeightKind,
}

/// Decoded second header line. Advisory unless enforcement is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeListInfo {
    /// Declared number of edges
    pub edge_count: usize,
    /// Declared number of subject (left) nodes
    pub subject_count: usize,
    /// Declared number of object (right) nodes
    pub object_count: usize,
}

/// One body record, endpoints still as text.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    /// 1-based source line
    pub line: usize,
    /// First endpoint token
    pub source: String,
    /// Second endpoint token
    pub target: String,
    /// Weight, present only for weight-carrying kinds
    pub weight: Option<f64>,
}

/// A parsed edge list.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeList {
    /// First header line
    pub header: EdgeListHeader,
    /// Second header line
    pub info: EdgeListInfo,
    /// Records in file order
    pub records: Vec<EdgeRecord>,
}

impl EdgeList {
    /// Parse an edge list held in memory.
    pub fn parse_str(source: &str, config: &ReaderConfig) -> ReaderResult<Self> {
        let mut lines = source.lines().enumerate().map(|(i, line)| (i + 1, line));

        let header_line = lines.next().map(|(_, line)| line);
        let header = parse_header(header_line, config)?;
        let info_line = lines.next().map(|(_, line)| line);
        let info = parse_info(info_line, config)?;
        debug!(
            "Edge list header: {} {} ({}, weights: {})",
            header.orientation,
            header.weight_kind,
            header.orientation.graph_kind(),
            header.weight_kind.carries_weight()
        );

        let mut records = Vec::new();
        for (number, line) in lines {
            let content = match line.find(config.comment_marker) {
                Some(pos) => &line[..pos],
                None => line,
            };
            if content.trim().is_empty() {
                continue;
            }
            let record = parse_record(&header, number, content, config)?;
            trace!("Line {number}: {record:?}");
            records.push(record);
        }

        if records.len() != info.edge_count {
            if config.enforce_declared_counts {
                return Err(ReaderError::DeclaredCountMismatch {
                    declared: info.edge_count,
                    found: records.len(),
                });
            }
            warn!(
                "Edge list declares {} edges but contains {} records",
                info.edge_count,
                records.len()
            );
        }

        Ok(Self {
            header,
            info,
            records,
        })
    }

    /// Read and parse a file.
    pub fn from_file(path: &Path, config: &ReaderConfig) -> ReaderResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| ReaderError::io(path, e))?;
        Self::parse_str(&source, config)
    }
}

/// Tokens of a comment-prefixed header line, all leading markers removed.
fn header_tokens<'a>(
    line: Option<&'a str>,
    number: usize,
    what: &'static str,
    config: &ReaderConfig,
) -> ReaderResult<Vec<&'a str>> {
    match line {
        Some(line) if line.starts_with(config.comment_marker) => Ok(line
            .trim_start_matches(config.comment_marker)
            .split_whitespace()
            .collect()),
        _ => Err(ReaderError::MissingLine { line: number, what }),
    }
}

fn parse_header(line: Option<&str>, config: &ReaderConfig) -> ReaderResult<EdgeListHeader> {
    let tokens = header_tokens(line, 1, "edge-list header", config)?;
    if tokens.len() != 2 {
        return Err(ReaderError::HeaderArity {
            line: 1,
            expected: 2,
            found: tokens.len(),
        });
    }

    let orientation = Orientation::from_keyword(tokens[0])
        .ok_or_else(|| ReaderError::invalid_keyword(1, "orientation", tokens[0]))?;
    let weight_kind = WeightKind::from_keyword(tokens[1])
        .ok_or_else(|| ReaderError::invalid_keyword(1, "weight kind", tokens[1]))?;

    Ok(EdgeListHeader {
        orientation,
        weight_kind,
    })
}

fn parse_info(line: Option<&str>, config: &ReaderConfig) -> ReaderResult<EdgeListInfo> {
    let tokens = header_tokens(line, 2, "edge-list size line", config)?;
    if tokens.len() != 3 {
        return Err(ReaderError::HeaderArity {
            line: 2,
            expected: 3,
            found: tokens.len(),
        });
    }

    let count = |token: &str| {
        token
            .parse::<usize>()
            .map_err(|_| ReaderError::invalid_number(2, "declared count", token))
    };
    Ok(EdgeListInfo {
        edge_count: count(tokens[0])?,
        subject_count: count(tokens[1])?,
        object_count: count(tokens[2])?,
    })
}

fn parse_record(
    header: &EdgeListHeader,
    line: usize,
    content: &str,
    config: &ReaderConfig,
) -> ReaderResult<EdgeRecord> {
    let tokens = config.tokenize(content);
    let expected = header.weight_kind.record_width();
    if tokens.len() < expected {
        return Err(ReaderError::EntryArity {
            line,
            expected,
            found: tokens.len(),
        });
    }

    let weight = if header.weight_kind.carries_weight() {
        let token = tokens[2];
        Some(
            token
                .parse::<f64>()
                .map_err(|_| ReaderError::invalid_number(line, "weight", token))?,
        )
    } else {
        None
    };

    Ok(EdgeRecord {
        line,
        source: tokens[0].to_string(),
        target: tokens[1].to_string(),
        weight,
    })
}

/// [`GraphReader`] for `.edges` files.
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader {
    config: ReaderConfig,
}

impl EdgeListReader {
    /// Create a reader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with the given configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }
}

impl GraphReader for EdgeListReader {
    fn format(&self) -> &str {
        "edge-list"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".edges"]
    }

    fn read_source<N: NodeKey>(&self, source: &str, name: &str) -> ReaderResult<CanonicalGraph<N>> {
        crate::builder::build_from_edges_str(source, name, &self.config)
    }

    fn config(&self) -> &ReaderConfig {
        &self.config
    }
}
