//! Path-addressed access to a document.
//!
//! Three operations over a [`PathExpr`]:
//!
//! - [`get_at`] -- borrow the value at a path
//! - [`set_at`] -- assign a value, creating missing intermediate objects
//! - [`delete_at`] -- remove the value at a path
//!
//! `set_at` and `delete_at` return a new document and leave their input
//! untouched, so a caller can validate the candidate before committing it.
//! [`set_in_place`] and [`delete_in_place`] mutate a document the caller
//! already owns.
//!
//! # Semantics
//!
//! - Writing auto-vivifies: an intermediate key that is absent, or holds
//!   anything other than an object, is replaced by an empty object.
//! - Reading or deleting through a missing intermediate is
//!   [`PathError::NotFound`]. Deleting a missing terminal key is a no-op.
//! - Key paths require an object root; index paths require an array root.

pub mod ops;

pub use jdoc_types::{PathError, PathExpr, PathResult};
pub use ops::{delete_at, delete_in_place, get_at, set_at, set_in_place};
