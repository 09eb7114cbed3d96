use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{StorageError, StorageResult};
use crate::traits::StorageBackend;

/// In-memory, HashMap-based storage backend.
///
/// Intended for tests and embedding. Files and directories are held behind a
/// `RwLock`. The backend can be switched to read-only to exercise write
/// failure paths, and it counts successful writes.
#[derive(Default)]
pub struct InMemoryStorage {
    files: RwLock<HashMap<PathBuf, String>>,
    dirs: RwLock<HashSet<PathBuf>>,
    read_only: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryStorage {
    /// Create a new empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file without counting it as a write.
    pub fn insert(&self, path: impl Into<PathBuf>, text: impl Into<String>) -> StorageResult<()> {
        let mut files = self.files.write().map_err(|_| StorageError::Poisoned)?;
        files.insert(path.into(), text.into());
        Ok(())
    }

    /// Current text of a file, if present.
    pub fn get(&self, path: &Path) -> StorageResult<Option<String>> {
        let files = self.files.read().map_err(|_| StorageError::Poisoned)?;
        Ok(files.get(path).cloned())
    }

    /// Returns `true` if `ensure_parent` created (or was asked for) `dir`.
    pub fn has_dir(&self, dir: &Path) -> StorageResult<bool> {
        let dirs = self.dirs.read().map_err(|_| StorageError::Poisoned)?;
        Ok(dirs.contains(dir))
    }

    /// Number of files currently stored.
    pub fn len(&self) -> usize {
        self.files.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of successful `write_text` calls.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make `write_text` and `remove` fail with a permission error.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    fn check_writable(&self, path: &Path) -> StorageResult<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "storage is read-only"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StorageBackend for InMemoryStorage {
    async fn exists(&self, path: &Path) -> StorageResult<bool> {
        let files = self.files.read().map_err(|_| StorageError::Poisoned)?;
        Ok(files.contains_key(path))
    }

    async fn read_bytes(&self, path: &Path) -> StorageResult<Vec<u8>> {
        let files = self.files.read().map_err(|_| StorageError::Poisoned)?;
        files
            .get(path)
            .map(|text| text.clone().into_bytes())
            .ok_or_else(|| StorageError::NotFound(path.to_path_buf()))
    }

    async fn write_text(&self, path: &Path, text: &str) -> StorageResult<()> {
        self.check_writable(path)?;
        let mut files = self.files.write().map_err(|_| StorageError::Poisoned)?;
        files.insert(path.to_path_buf(), text.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, path: &Path) -> StorageResult<()> {
        self.check_writable(path)?;
        let mut files = self.files.write().map_err(|_| StorageError::Poisoned)?;
        files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(path.to_path_buf()))
    }

    async fn ensure_parent(&self, path: &Path) -> StorageResult<()> {
        let mut dirs = self.dirs.write().map_err(|_| StorageError::Poisoned)?;
        let mut current = path.parent();
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStorage")
            .field("file_count", &self.len())
            .field("write_count", &self.write_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_backend() {
        let storage = InMemoryStorage::new();
        assert!(storage.is_empty());
        assert!(!storage.exists(Path::new("a.json")).await.unwrap());
    }

    #[tokio::test]
    async fn write_read_remove() {
        let storage = InMemoryStorage::new();
        let path = Path::new("data/a.json");

        storage.write_text(path, "{}").await.unwrap();
        assert!(storage.exists(path).await.unwrap());
        assert_eq!(storage.read_bytes(path).await.unwrap(), b"{}");
        assert_eq!(storage.write_count(), 1);

        storage.remove(path).await.unwrap();
        assert!(!storage.exists(path).await.unwrap());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn missing_resources_are_not_found() {
        let storage = InMemoryStorage::new();
        let path = Path::new("missing.json");
        assert!(storage.read_bytes(path).await.unwrap_err().is_not_found());
        assert!(storage.remove(path).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn ensure_parent_records_every_ancestor() {
        let storage = InMemoryStorage::new();
        storage
            .ensure_parent(Path::new("root/a/b/doc.json"))
            .await
            .unwrap();
        assert!(storage.has_dir(Path::new("root/a/b")).unwrap());
        assert!(storage.has_dir(Path::new("root/a")).unwrap());
        assert!(storage.has_dir(Path::new("root")).unwrap());
        assert!(!storage.has_dir(Path::new("")).unwrap());
    }

    #[tokio::test]
    async fn read_only_rejects_writes_and_removals() {
        let storage = InMemoryStorage::new();
        let path = Path::new("a.json");
        storage.insert(path, "1").unwrap();
        storage.set_read_only(true);

        let err = storage.write_text(path, "2").await.unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert!(storage.remove(path).await.is_err());
        assert_eq!(storage.get(path).unwrap().as_deref(), Some("1"));
        assert_eq!(storage.write_count(), 0);

        storage.set_read_only(false);
        storage.write_text(path, "2").await.unwrap();
        assert_eq!(storage.get(path).unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn debug_format() {
        let storage = InMemoryStorage::new();
        let dbg = format!("{storage:?}");
        assert!(dbg.contains("InMemoryStorage"));
        assert!(dbg.contains("file_count"));
    }
}
