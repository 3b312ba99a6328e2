//! Error types for graph operations.

use super::VertexId;
use thiserror::Error;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors reported by [`DependencyGraph`](super::DependencyGraph) and
/// [`Session`](crate::session::Session).
///
/// The `Display` text of each variant is meant to be shown to the user
/// unmodified.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The dependency source could not be opened or read.
    #[error("File Did Not Open: {path}")]
    SourceUnavailable {
        /// Identifier of the source, usually a file path
        path: String,
        /// Underlying read failure
        #[source]
        source: std::io::Error,
    },

    /// An order was requested before any vertex exists.
    #[error("Build The Graph First")]
    GraphNotBuilt,

    /// The requested start label was never loaded or added.
    #[error("Class Name Is Invalid: {label}")]
    InvalidLabel {
        /// The label that was looked up
        label: String,
    },

    /// The traversal reached a vertex it had already visited.
    #[error("Cycle Detected at {label}")]
    CycleDetected {
        /// Id of the revisited vertex
        vertex: VertexId,
        /// Label of the revisited vertex
        label: String,
    },

    /// An edge endpoint does not name an existing vertex.
    #[error("Vertex {id} is out of range (graph has {count} vertices)")]
    InvalidVertex {
        /// The offending id
        id: VertexId,
        /// Number of vertices at the time of the call
        count: usize,
    },
}

impl GraphError {
    /// Creates a source unavailable error for the given path.
    pub fn source_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid label error.
    pub fn invalid_label(label: impl Into<String>) -> Self {
        Self::InvalidLabel {
            label: label.into(),
        }
    }

    /// Creates a cycle detected error.
    pub fn cycle(vertex: VertexId, label: impl Into<String>) -> Self {
        Self::CycleDetected {
            vertex,
            label: label.into(),
        }
    }

    /// Returns true if this error is a detected cycle.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CycleDetected { .. })
    }
}
