use causalgraph::GraphError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Dataset file does not exist
    #[error("Dataset not found at: {0}")]
    NotFound(PathBuf),

    /// Failed to read file
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// File content is not a valid dataset
    #[error("Invalid dataset {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),

    /// A loaded graph violates structural invariants
    #[error("Malformed graph: {0}")]
    Graph(#[from] GraphError),
}

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;
