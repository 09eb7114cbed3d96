//! Shape validation for jdoc documents.
//!
//! A [`ShapeModel`] is an example document: its keys name the fields a
//! document must carry and its values name their primitive types
//! (`{"name": "", "age": 0}` reads as "a string `name` and a numeric `age`").
//! The reserved top-level key `"required"` may list field names that must be
//! present regardless of type.
//!
//! # Quick Start
//!
//! ```rust
//! use jdoc_shape::{ShapeModel, ShapeValidator, ValidationDialect};
//! use serde_json::json;
//!
//! let model = ShapeModel::new(json!({"name": "", "age": 0}));
//! let validator = ShapeValidator::new(model, ValidationDialect::default());
//! assert!(validator.validate(&json!({"name": "John", "age": 30})));
//! assert!(!validator.validate(&json!({"name": 123, "age": 30})));
//! assert!(!validator.validate(&json!({"name": "John"})));
//! ```
//!
//! Which checks run is selected by [`ValidationDialect`].

pub mod dialect;
pub mod error;
pub mod model;
pub mod validator;

pub use dialect::ValidationDialect;
pub use error::ShapeViolation;
pub use model::{ShapeModel, REQUIRED_KEY};
pub use validator::{validate, ShapeValidator};
