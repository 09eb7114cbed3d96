use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;
use tracing::{debug, info, warn};

use jdoc_codec::{DocumentCodec, JsonCodec};
use jdoc_path::{delete_in_place, get_at, set_in_place};
use jdoc_shape::ShapeValidator;
use jdoc_storage::{FsStorage, StorageBackend};
use jdoc_types::{Document, Operation, PathExpr};

use crate::config::StoreOptions;
use crate::error::{StoreError, StoreResult};
use crate::loader::{load_or_default, persist};

/// Whether the in-memory copy of the document is populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreState {
    /// The cache holds the last committed document.
    Ready,
    /// The cache was dropped (after [`Store::delete_file`]); the next access
    /// loads the file or re-creates it from the default.
    Unloaded,
}

/// A single JSON document persisted at one path.
///
/// The store keeps an in-memory copy of the last successfully persisted
/// document. Mutating operations build a complete candidate document,
/// validate it when validation is enabled, persist it, and only then replace
/// the cached copy. A rejected candidate leaves both the file and the cache
/// untouched.
///
/// The cache lock is never held across an `.await`. Concurrent mutations on
/// one store are not serialized: each snapshots the cache, and whichever
/// persists last wins.
pub struct Store<B = FsStorage, C = JsonCodec> {
    backend: B,
    codec: C,
    path: PathBuf,
    default: Document,
    options: StoreOptions,
    validator: Option<ShapeValidator>,
    cache: RwLock<Option<Document>>,
}

impl Store<FsStorage, JsonCodec> {
    /// Open the file `file_name` inside `dir`, creating the directory and
    /// the file (from `default`) if needed.
    pub async fn open(
        dir: impl AsRef<Path>,
        file_name: &str,
        default: Document,
        options: StoreOptions,
    ) -> StoreResult<Self> {
        let path = dir.as_ref().join(file_name);
        Self::with_backend(FsStorage::new(), JsonCodec::new(), path, default, options).await
    }
}

impl<B, C> Store<B, C>
where
    B: StorageBackend,
    C: DocumentCodec,
{
    /// Open a store over injected storage and codec adapters.
    pub async fn with_backend(
        backend: B,
        codec: C,
        path: impl Into<PathBuf>,
        default: Document,
        options: StoreOptions,
    ) -> StoreResult<Self> {
        let store = Self {
            backend,
            codec,
            path: path.into(),
            default,
            validator: options.validator(),
            options,
            cache: RwLock::new(None),
        };
        store.current().await?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> StoreState {
        match self.cache.read() {
            Ok(cache) if cache.is_some() => StoreState::Ready,
            _ => StoreState::Unloaded,
        }
    }

    /// A copy of the document. Changing it does not affect the store.
    pub async fn read(&self) -> StoreResult<Document> {
        self.current().await
    }

    /// A copy of the value at `path`.
    pub async fn get(&self, path: &str) -> StoreResult<Value> {
        let document = self.current().await?;
        let path = PathExpr::resolve(path, document.is_array())?;
        Ok(get_at(&document, &path)?.clone())
    }

    /// Replace the whole document.
    pub async fn write(&self, document: Document) -> StoreResult<bool> {
        self.ensure_valid(&document, Operation::Write)?;
        self.commit(document, Operation::Write).await
    }

    /// Assign `value` at `path`, creating intermediate objects as needed.
    ///
    /// On an array-rooted document a numeric path addresses an element.
    pub async fn update(&self, path: &str, value: Value) -> StoreResult<bool> {
        let document = self.current().await?;
        let path = PathExpr::resolve(path, document.is_array())?;
        self.update_document(document, &path, value).await
    }

    /// [`update`](Self::update) with an already-resolved path.
    pub async fn update_at(&self, path: &PathExpr, value: Value) -> StoreResult<bool> {
        let document = self.current().await?;
        self.update_document(document, path, value).await
    }

    /// Remove the value at `path`. A missing terminal key is not an error.
    pub async fn delete(&self, path: &str) -> StoreResult<bool> {
        let document = self.current().await?;
        let path = PathExpr::resolve(path, document.is_array())?;
        self.delete_document(document, &path).await
    }

    /// [`delete`](Self::delete) with an already-resolved path.
    pub async fn delete_at(&self, path: &PathExpr) -> StoreResult<bool> {
        let document = self.current().await?;
        self.delete_document(document, path).await
    }

    /// Remove the backing file.
    ///
    /// Failure to remove it, including the file already being gone, is
    /// returned as an error. On success the cache is dropped, so the next
    /// access reloads the file or re-creates it from the default.
    pub async fn delete_file(&self) -> StoreResult<bool> {
        self.backend.remove(&self.path).await?;
        self.set_cache(None)?;
        info!(path = %self.path.display(), "deleted document file");
        Ok(true)
    }

    /// Drop the cache and load the file again (or re-create it).
    pub async fn reload(&self) -> StoreResult<Document> {
        self.set_cache(None)?;
        self.current().await
    }

    /// Run the configured validation without persisting anything.
    ///
    /// Always `true` when validation is disabled.
    pub fn validate(&self, document: &Document) -> bool {
        self.validator
            .as_ref()
            .map_or(true, |validator| validator.validate(document))
    }

    async fn update_document(
        &self,
        mut candidate: Document,
        path: &PathExpr,
        value: Value,
    ) -> StoreResult<bool> {
        set_in_place(&mut candidate, path, value)?;
        debug!(path = %path, "applied update to candidate");
        self.ensure_valid(&candidate, Operation::Update)?;
        self.commit(candidate, Operation::Update).await
    }

    async fn delete_document(&self, mut candidate: Document, path: &PathExpr) -> StoreResult<bool> {
        let removed = delete_in_place(&mut candidate, path)?;
        debug!(path = %path, removed = removed.is_some(), "applied delete to candidate");
        self.ensure_valid(&candidate, Operation::Delete)?;
        self.commit(candidate, Operation::Delete).await
    }

    fn ensure_valid(&self, candidate: &Document, operation: Operation) -> StoreResult<()> {
        let Some(validator) = &self.validator else {
            return Ok(());
        };
        validator.check(candidate).map_err(|violation| {
            warn!(
                path = %self.path.display(),
                %operation,
                %violation,
                "rejected candidate document"
            );
            StoreError::Validation {
                operation,
                reason: violation.to_string(),
            }
        })
    }

    async fn commit(&self, document: Document, operation: Operation) -> StoreResult<bool> {
        persist(&self.backend, &self.codec, &self.path, &document).await?;
        self.set_cache(Some(document))?;
        info!(path = %self.path.display(), %operation, "document updated");
        Ok(true)
    }

    /// The cached document, loading it first if the cache is empty.
    async fn current(&self) -> StoreResult<Document> {
        if let Some(document) = self.cached()? {
            return Ok(document);
        }
        let document =
            load_or_default(&self.backend, &self.codec, &self.path, &self.default).await?;
        self.set_cache(Some(document.clone()))?;
        Ok(document)
    }

    fn cached(&self) -> StoreResult<Option<Document>> {
        let cache = self.cache.read().map_err(|_| StoreError::Poisoned)?;
        Ok(cache.clone())
    }

    fn set_cache(&self, document: Option<Document>) -> StoreResult<()> {
        let mut cache = self.cache.write().map_err(|_| StoreError::Poisoned)?;
        *cache = document;
        Ok(())
    }
}

impl<B, C> fmt::Debug for Store<B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ready = matches!(self.cache.read(), Ok(cache) if cache.is_some());
        f.debug_struct("Store")
            .field("path", &self.path)
            .field("validating", &self.validator.is_some())
            .field("ready", &ready)
            .finish()
    }
}
