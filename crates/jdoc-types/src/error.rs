use thiserror::Error;

use crate::kind::ValueKind;

/// Errors produced while parsing or applying a path expression.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    EmptyPath,

    #[error("empty segment at position {position} in path")]
    EmptySegment { position: usize },

    /// The path (or one of its intermediates) does not resolve to a value.
    #[error("path not found: {path}")]
    NotFound { path: String },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("index out of bounds: {index} > {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Convenience alias for path operations.
pub type PathResult<T> = std::result::Result<T, PathError>;
