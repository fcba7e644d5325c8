//! Error types for netmeasures operations.
//!
//! Facade accessors return [`MeasureResult<T>`]. A directedness or weightedness
//! mismatch is always reported as [`MeasureError::Precondition`], never as a
//! default value.

use thiserror::Error;

/// Result type alias for measure accessors.
pub type MeasureResult<T> = std::result::Result<T, MeasureError>;

/// Result type alias for the algorithms collaborator.
pub type AlgorithmResult<T> = std::result::Result<T, AlgorithmError>;

/// Error type for all facade accessors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    /// The measure is not defined for this kind of graph
    /// (e.g. `connected` on a directed graph, `avg_strength` on an unweighted one).
    #[error("Precondition failed for '{measure}': {message}")]
    Precondition {
        /// Name of the requested measure
        measure: &'static str,
        /// What the graph would need to be for the measure to apply
        message: String,
    },

    /// The measure averages over nodes and the graph has none.
    #[error("Measure '{measure}' is undefined on an empty graph")]
    EmptyGraph {
        /// Name of the requested measure
        measure: &'static str,
    },

    /// The delegated computation refused its input.
    #[error("Algorithm error: {0}")]
    Algorithm(#[from] AlgorithmError),
}

impl MeasureError {
    /// Create a precondition error for the given measure.
    pub fn precondition(measure: &'static str, message: impl Into<String>) -> Self {
        Self::Precondition {
            measure,
            message: message.into(),
        }
    }

    /// Whether this is a directedness/weightedness precondition violation.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition { .. })
    }
}

/// Errors raised by an algorithms collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// Some ordered node pair is not mutually reachable.
    #[error("Graph is not strongly connected")]
    NotStronglyConnected,

    /// Some node pair is not connected.
    #[error("Graph is not connected")]
    NotConnected,

    /// The input graph has no nodes.
    #[error("Graph is empty")]
    EmptyGraph,
}
