//! Byte-oriented text storage for jdoc documents.
//!
//! The store reaches the file system only through the [`StorageBackend`]
//! trait, keyed by a path. Two backends ship with the crate:
//!
//! - [`FsStorage`] -- the local file system via `tokio::fs`
//! - [`InMemoryStorage`] -- `HashMap`-based backend for tests and embedding
//!
//! # Rules
//!
//! 1. Absence is reported as [`StorageError::NotFound`], never as a generic
//!    I/O error, so callers can branch on it.
//! 2. Backends do not interpret content; they move text.
//! 3. All I/O errors are propagated, never retried or ignored.

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use fs::FsStorage;
pub use memory::InMemoryStorage;
pub use traits::StorageBackend;
