//! netmeasures readers
//!
//! Readers that turn graph interchange files into a
//! [`CanonicalGraph`](netmeasures::CanonicalGraph).
//!
//! This crate provides:
//!
//! - **Matrix Market**: strict coordinate-format parser with a header allow-list ([`mtx`])
//! - **Edge lists**: KONECT-style annotated edge lists ([`edges`])
//! - **Builder**: maps either parse result onto the canonical graph ([`builder`])
//! - **GraphReader trait**: the common reader interface
//! - **Configuration**: comment marker, delimiter and declared-count policy
//! - **Error handling**: format, unimplemented-path and I/O errors
//!
//! # Example
//!
//! ```rust,no_run
//! use netmeasures::Measures;
//! use std::path::Path;
//!
//! let graph = netmeasures_readers::load(Path::new("data/karate.mtx")).unwrap();
//! let measures = Measures::new(graph);
//! println!("{} nodes, diameter {:?}", measures.node_count(), measures.diameter());
//! ```

pub mod builder;
pub mod config;
pub mod edges;
pub mod errors;
pub mod mtx;
pub mod traits;

// Re-export commonly used types
pub use builder::{build_from_edge_list, build_from_edges_str, build_from_matrix, build_from_mtx_str};
pub use config::ReaderConfig;
pub use edges::{
    EdgeList, EdgeListHeader, EdgeListInfo, EdgeListReader, EdgeRecord, Orientation, WeightKind,
};
pub use errors::{ErrorKind, ReaderError, ReaderResult};
pub use mtx::{
    Dimensions, Entry, EntryValue, Field, MatrixHeader, MatrixMarket, MatrixMarketReader, Storage,
    Symmetry,
};
pub use traits::GraphReader;

use netmeasures::{CanonicalGraph, NodeKey};
use std::path::Path;

/// Load a graph with string node identifiers and default configuration.
///
/// The reader is chosen by file extension (`.mtx` or `.edges`) and the graph
/// is named after the file stem.
pub fn load(path: &Path) -> ReaderResult<CanonicalGraph> {
    load_with(path, &ReaderConfig::default())
}

/// Load a graph with node identifiers of type `N`.
///
/// # Errors
///
/// [`ReaderError::UnsupportedFormat`] for unknown extensions, otherwise
/// whatever the selected reader reports.
pub fn load_with<N: NodeKey>(path: &Path, config: &ReaderConfig) -> ReaderResult<CanonicalGraph<N>> {
    let matrix_market = MatrixMarketReader::with_config(config.clone());
    if matrix_market.can_read(path) {
        return matrix_market.read_file(path);
    }

    let edge_list = EdgeListReader::with_config(config.clone());
    if edge_list.can_read(path) {
        return edge_list.read_file(path);
    }

    Err(ReaderError::UnsupportedFormat {
        path: path.to_path_buf(),
    })
}
