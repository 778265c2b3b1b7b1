//! Error kinds reported by the store, the separation engine, and the IO layer.

use thiserror::Error;

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Everything that can go wrong when querying or (de)serializing a graph.
///
/// Mutations never produce these: adding or removing something that cannot be
/// added or removed is a silent no-op.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A queried vertex is not part of the graph
    #[error("vertex not found: {0}")]
    NotFound(String),

    /// Both vertices exist but lie in different components
    #[error("no path between {from} and {to}")]
    NotConnected { from: String, to: String },

    /// Internal state contradicts the data model (e.g. a participant path with an even
    /// number of vertices). Indicates corrupted input or a bug; do not retry.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input was readable but not in the expected format
    #[error("parse error in line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl GraphError {
    /// Builds a [`GraphError::NotFound`] from any debuggable label
    pub fn not_found<V: std::fmt::Debug>(v: &V) -> Self {
        GraphError::NotFound(format!("{v:?}"))
    }

    /// Builds a [`GraphError::NotConnected`] from any two debuggable labels
    pub fn not_connected<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        GraphError::NotConnected {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    /// Returns *true* for the error kinds that signal broken data rather than a bad query
    pub fn is_fatal(&self) -> bool {
        matches!(self, GraphError::InvariantViolation(_))
    }
}
