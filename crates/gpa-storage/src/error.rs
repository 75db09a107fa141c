// error.rs — Error types for policy storage backends.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when a storage backend cannot answer.
///
/// A missing setting is never one of these: lookups report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the backing file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A snapshot line could not be decoded as a policy entry.
    #[error("malformed policy entry at {path}:{line}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },

    /// The backend is unavailable or refused the query.
    #[error("storage backend error: {0}")]
    Backend(String),
}
