use crate::{config::ReaderConfig, errors::ReaderError};
use log::info;
use netmeasures::{CanonicalGraph, NodeKey};
use std::path::Path;

/// Core trait every graph file reader implements
///
/// A reader decodes one on-disk format and hands the result to the builder,
/// producing a [`CanonicalGraph`]. Readers never return a partially built
/// graph: any malformed line aborts the whole read.
///
/// # Example
/// ```rust
/// use netmeasures_readers::{GraphReader, MatrixMarketReader};
/// use netmeasures::CanonicalGraph;
/// use std::path::Path;
///
/// let reader = MatrixMarketReader::new();
/// assert!(reader.can_read(Path::new("karate.mtx")));
///
/// let source = "%%MatrixMarket matrix coordinate pattern symmetric\n2 2 1\n2 1\n";
/// let graph: CanonicalGraph<u32> = reader.read_source(source, "pair").unwrap();
/// assert!(graph.has_edge(&1, &2));
/// ```
pub trait GraphReader {
    /// Returns the format identifier (e.g. "matrix-market")
    fn format(&self) -> &str;

    /// Returns supported file extensions (e.g. [".mtx"])
    fn file_extensions(&self) -> &[&str];

    /// Parse in-memory text into a graph named `name`
    ///
    /// # Errors
    /// Returns `ReaderError` if:
    /// - A header, dimension or record line is malformed
    /// - The input ends before the declared data
    /// - The input takes a path that is not implemented (array storage, complex values)
    fn read_source<N: NodeKey>(
        &self,
        source: &str,
        name: &str,
    ) -> Result<CanonicalGraph<N>, ReaderError>;

    /// Read a file into a graph named after the file stem
    fn read_file<N: NodeKey>(&self, path: &Path) -> Result<CanonicalGraph<N>, ReaderError> {
        let source = std::fs::read_to_string(path).map_err(|e| ReaderError::io(path, e))?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        let graph = self.read_source(&source, &name)?;
        info!(
            "Loaded {} ({}): {} {} graph, {} nodes, {} edges",
            path.display(),
            self.format(),
            if graph.is_weighted() { "weighted" } else { "unweighted" },
            graph.kind(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Check if this reader can handle the given file
    ///
    /// Default implementation checks file extension.
    fn can_read(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            let ext_str = format!(".{}", ext.to_string_lossy());
            self.file_extensions().contains(&ext_str.as_str())
        } else {
            false
        }
    }

    /// Get reader configuration
    fn config(&self) -> &ReaderConfig;
}
