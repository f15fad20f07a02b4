//! Error types for causalgraph operations.
//!
//! Only structural problems are errors. An empty bridge set, a missing start
//! node or an unreachable target are ordinary (empty) results.

use thiserror::Error;

/// Result type alias for causalgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for structural and configuration failures.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge violates the graph's structural invariants
    #[error("Malformed edge {source_id} -> {target_id}: {message}")]
    MalformedEdge {
        /// Source node of the offending edge
        source_id: String,
        /// Target node of the offending edge
        target_id: String,
        /// What is wrong with it
        message: String,
    },

    /// A node violates the graph's structural invariants
    #[error("Malformed node '{node_id}': {message}")]
    MalformedNode {
        /// ID of the offending node
        node_id: String,
        /// What is wrong with it
        message: String,
    },

    /// A path value is not a valid causal chain
    #[error("Malformed path: {message}")]
    MalformedPath {
        /// What is wrong with it
        message: String,
    },

    /// Search configuration cannot be used
    #[error("Invalid search configuration: {message}")]
    InvalidConfig {
        /// Description of the problem
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a malformed-edge error.
    pub fn malformed_edge(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedEdge {
            source_id: source_id.into(),
            target_id: target_id.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-path error.
    pub fn malformed_path(message: impl Into<String>) -> Self {
        Self::MalformedPath {
            message: message.into(),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// True for errors caused by the shape of the input graphs.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MalformedEdge { .. } | Self::MalformedNode { .. } | Self::MalformedPath { .. }
        )
    }
}
