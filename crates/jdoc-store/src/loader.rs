//! Loading and persisting the backing file.
//!
//! These are free functions over injected adapters so that the store's
//! orchestration can run against any [`StorageBackend`] and
//! [`DocumentCodec`].

use std::path::Path;

use tracing::{debug, info};

use jdoc_codec::DocumentCodec;
use jdoc_storage::StorageBackend;
use jdoc_types::Document;

use crate::error::{StoreError, StoreResult};

/// Load the document at `path`, or persist and return `default` if the file
/// does not exist.
///
/// Only absence triggers defaulting. A file that exists but cannot be
/// decoded is a [`StoreError::Decode`]; it is never overwritten.
pub async fn load_or_default<B, C>(
    backend: &B,
    codec: &C,
    path: &Path,
    default: &Document,
) -> StoreResult<Document>
where
    B: StorageBackend + ?Sized,
    C: DocumentCodec + ?Sized,
{
    backend.ensure_parent(path).await?;

    if backend.exists(path).await? {
        let bytes = backend.read_bytes(path).await?;
        let document = codec.decode(&bytes).map_err(|source| StoreError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded document");
        return Ok(document);
    }

    persist(backend, codec, path, default).await?;
    info!(path = %path.display(), "created document from default");
    Ok(default.clone())
}

/// Encode `document` and write it to `path`, replacing the whole file.
pub async fn persist<B, C>(
    backend: &B,
    codec: &C,
    path: &Path,
    document: &Document,
) -> StoreResult<()>
where
    B: StorageBackend + ?Sized,
    C: DocumentCodec + ?Sized,
{
    let text = codec.encode(document).map_err(StoreError::Encode)?;
    backend.write_text(path, &text).await?;
    debug!(path = %path.display(), bytes = text.len(), "persisted document");
    Ok(())
}
