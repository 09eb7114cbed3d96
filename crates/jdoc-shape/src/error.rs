use jdoc_types::ValueKind;

/// The first reason a document failed shape validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeViolation {
    /// A field from the model's required list is absent.
    #[error("missing required field: {field}")]
    MissingRequired { field: String },

    /// A key named by the model is absent from the document.
    #[error("missing key: {path}")]
    MissingKey { path: String },

    /// A nested document key has no counterpart in the model.
    #[error("unexpected key: {path}")]
    UnexpectedKey { path: String },

    /// A value's primitive type differs from the model's.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    KindMismatch {
        path: String,
        expected: ValueKind,
        found: ValueKind,
    },
}
