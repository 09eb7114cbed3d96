use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::traits::StorageBackend;

/// Local file system backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsStorage;

impl FsStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StorageBackend for FsStorage {
    async fn exists(&self, path: &Path) -> StorageResult<bool> {
        fs::try_exists(path)
            .await
            .map_err(|e| StorageError::from_io(path, e))
    }

    async fn read_bytes(&self, path: &Path) -> StorageResult<Vec<u8>> {
        let bytes = fs::read(path)
            .await
            .map_err(|e| StorageError::from_io(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "read file");
        Ok(bytes)
    }

    async fn write_text(&self, path: &Path, text: &str) -> StorageResult<()> {
        fs::write(path, text)
            .await
            .map_err(|e| StorageError::from_io(path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "wrote file");
        Ok(())
    }

    async fn remove(&self, path: &Path) -> StorageResult<()> {
        fs::remove_file(path)
            .await
            .map_err(|e| StorageError::from_io(path, e))?;
        debug!(path = %path.display(), "removed file");
        Ok(())
    }

    async fn ensure_parent(&self, path: &Path) -> StorageResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::from_io(parent, e)),
            _ => Ok(()),
        }
    }
}
