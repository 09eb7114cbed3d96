use std::path::Path;

use async_trait::async_trait;

use crate::error::StorageResult;

/// Document storage keyed by path.
///
/// Reads hand back raw bytes; interpreting them is left to the codec.
///
/// All implementations must satisfy these invariants:
/// - `write_text` replaces the whole resource; there are no partial writes
///   visible to a later `read_bytes` on success.
/// - A missing resource is reported as `StorageError::NotFound` by
///   `read_bytes` and `remove`, and as `Ok(false)` by `exists`.
/// - No locking is implied. Concurrent writers race and the last one wins.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Check whether a resource exists at `path`.
    async fn exists(&self, path: &Path) -> StorageResult<bool>;

    /// Read the raw contents of the resource at `path`.
    async fn read_bytes(&self, path: &Path) -> StorageResult<Vec<u8>>;

    /// Create or replace the resource at `path`.
    async fn write_text(&self, path: &Path, text: &str) -> StorageResult<()>;

    /// Remove the resource at `path`.
    async fn remove(&self, path: &Path) -> StorageResult<()>;

    /// Create every missing parent container of `path`.
    async fn ensure_parent(&self, path: &Path) -> StorageResult<()>;
}
