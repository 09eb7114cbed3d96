//! Foundation types for jdoc.
//!
//! This crate provides the small vocabulary shared by every other jdoc crate:
//! how a JSON value is classified, how a location inside a document is
//! addressed, and which store operation produced a candidate document.
//!
//! # Key Types
//!
//! - [`Document`] — The single JSON value persisted for one store
//! - [`ValueKind`] — Primitive-type classification used by shape checks
//! - [`PathExpr`] — Dotted key path or array index into a document
//! - [`Operation`] — The mutating store operation (write, update, delete)
//! - [`PathError`] — Failures while parsing or applying a path

pub mod error;
pub mod kind;
pub mod operation;
pub mod path;

pub use error::{PathError, PathResult};
pub use kind::ValueKind;
pub use operation::Operation;
pub use path::PathExpr;

/// The structured value persisted for one storage path.
pub type Document = serde_json::Value;
