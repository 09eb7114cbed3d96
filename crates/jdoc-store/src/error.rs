use std::path::PathBuf;

use jdoc_codec::CodecError;
use jdoc_storage::StorageError;
use jdoc_types::{Operation, PathError};

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The candidate document produced by `operation` does not conform to
    /// the configured model. Nothing was persisted.
    #[error("data validation failed: {} ({reason})", .operation.describe_candidate())]
    Validation { operation: Operation, reason: String },

    /// The backing file exists but its content is not a valid document.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("failed to encode document: {0}")]
    Encode(#[source] CodecError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("path error: {0}")]
    Path(#[from] PathError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("document cache lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// Returns `true` for validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The operation whose candidate failed validation, if any.
    pub fn failed_operation(&self) -> Option<Operation> {
        match self {
            Self::Validation { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
