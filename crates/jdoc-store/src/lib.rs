//! A single JSON document persisted to one file.
//!
//! [`Store`] owns one document: it loads the file on open (or creates it from
//! a default), serves copies of it, and commits whole-document writes and
//! path-addressed updates and deletes. When validation is enabled every
//! candidate document is checked against a [`ShapeModel`] before anything
//! reaches the disk.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jdoc_store::{Store, StoreOptions};
//! use serde_json::json;
//!
//! # async fn demo() -> jdoc_store::StoreResult<()> {
//! let options = StoreOptions::validated(json!({"name": "", "age": 0}));
//! let store = Store::open("./data", "people.json", json!({"name": "", "age": 0}), options).await?;
//!
//! store.update("name", json!("John")).await?;
//! store.update("address.city", json!("NYC")).await?;
//! assert!(store.update("age", json!("thirty")).await.is_err());
//!
//! let doc = store.read().await?;
//! assert_eq!(doc["address"]["city"], "NYC");
//! # Ok(())
//! # }
//! ```
//!
//! # Design Rules
//!
//! 1. The cache always holds the last successfully persisted document.
//! 2. Validation sees the complete candidate document, never a diff.
//! 3. `read` hands out copies; the cache is never aliased.
//! 4. Only a missing file triggers defaulting; malformed content is an error.
//! 5. Nothing is retried and nothing is locked.

pub mod config;
pub mod error;
pub mod loader;
pub mod store;

pub use config::StoreOptions;
pub use error::{StoreError, StoreResult};
pub use loader::{load_or_default, persist};
pub use store::{Store, StoreState};

pub use jdoc_codec::{DocumentCodec, JsonCodec};
pub use jdoc_shape::{ShapeModel, ValidationDialect};
pub use jdoc_storage::{FsStorage, InMemoryStorage, StorageBackend};
pub use jdoc_types::{Document, Operation, PathExpr};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_model() -> serde_json::Value {
        json!({
            "name": "",
            "age": 0,
            "address": {"street": "", "city": ""}
        })
    }

    fn valid_data() -> Document {
        json!({
            "name": "John",
            "age": 30,
            "address": {"street": "Main St", "city": "Boston"}
        })
    }

    // -----------------------------------------------------------------------
    // 1. Files on disk
    // -----------------------------------------------------------------------
    #[tokio::test]
    async fn open_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let store = Store::open(&nested, "doc.json", json!([]), StoreOptions::default())
            .await
            .unwrap();

        assert_eq!(store.path(), nested.join("doc.json"));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[tokio::test]
    async fn persisted_text_is_two_space_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path(), "doc.json", json!({}), StoreOptions::default())
            .await
            .unwrap();

        store.write(json!({"name": "John", "age": 30})).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            "{\n  \"name\": \"John\",\n  \"age\": 30\n}"
        );
    }

    #[tokio::test]
    async fn reopening_sees_committed_changes() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = Store::open(dir.path(), "doc.json", valid_data(), StoreOptions::default())
                .await
                .unwrap();
            store.update("address.city", json!("New York")).await.unwrap();
            store.delete("age").await.unwrap();
        }

        let reopened = Store::open(dir.path(), "doc.json", json!({}), StoreOptions::default())
            .await
            .unwrap();
        assert_eq!(
            reopened.read().await.unwrap(),
            json!({"name": "John", "address": {"street": "Main St", "city": "New York"}})
        );
    }

    #[tokio::test]
    async fn malformed_file_is_not_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, "{ \"name\": ").unwrap();

        let err = Store::open(dir.path(), "doc.json", json!({}), StoreOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Decode { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ \"name\": ");
    }

    #[tokio::test]
    async fn non_utf8_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, [b'{', 0xff, 0xfe, b'}']).unwrap();

        let err = Store::open(dir.path(), "doc.json", json!({}), StoreOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Decode { .. }));
        assert_eq!(std::fs::read(&path).unwrap(), [b'{', 0xff, 0xfe, b'}']);
    }

    // -----------------------------------------------------------------------
    // 2. Validation against the model
    // -----------------------------------------------------------------------
    #[tokio::test]
    async fn validated_store_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(
            dir.path(),
            "validated.json",
            valid_data(),
            StoreOptions::validated(test_model()),
        )
        .await
        .unwrap();

        assert!(store.write(valid_data()).await.unwrap());
        assert!(store.update("name", json!("Jane")).await.unwrap());

        let err = store.update("age", json!("26")).await.unwrap_err();
        assert!(err.is_validation());

        let err = store.delete("age").await.unwrap_err();
        assert_eq!(err.failed_operation(), Some(Operation::Delete));

        let on_disk: Document =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk["name"], json!("Jane"));
        assert_eq!(on_disk["age"], json!(30));
        assert_eq!(store.read().await.unwrap(), on_disk);
    }

    #[tokio::test]
    async fn simple_model_from_examples() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(
            dir.path(),
            "simple.json",
            json!({"name": "", "age": 0}),
            StoreOptions::validated(json!({"name": "", "age": 0})),
        )
        .await
        .unwrap();

        assert!(store.write(json!({"name": "John", "age": 30})).await.unwrap());
        assert!(store.write(json!({"name": 123, "age": 30})).await.is_err());
        assert!(store.write(json!({"name": "John"})).await.is_err());
        assert_eq!(
            store.read().await.unwrap(),
            json!({"name": "John", "age": 30})
        );
    }

    // -----------------------------------------------------------------------
    // 3. File deletion
    // -----------------------------------------------------------------------
    #[tokio::test]
    async fn delete_file_then_read_recreates_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path(), "doc.json", valid_data(), StoreOptions::default())
            .await
            .unwrap();
        store.update("name", json!("Jane")).await.unwrap();

        assert!(store.delete_file().await.unwrap());
        assert!(!store.path().exists());

        assert_eq!(store.read().await.unwrap(), valid_data());
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn delete_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path(), "doc.json", json!({}), StoreOptions::default())
            .await
            .unwrap();
        std::fs::remove_file(store.path()).unwrap();

        let err = store.delete_file().await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Storage(jdoc_storage::StorageError::NotFound(_))
        ));
    }

    // -----------------------------------------------------------------------
    // 4. Independent instances
    // -----------------------------------------------------------------------
    #[tokio::test]
    async fn two_stores_on_one_file_clobber_each_other() {
        let dir = tempfile::tempdir().unwrap();
        let a = Store::open(dir.path(), "doc.json", json!({}), StoreOptions::default())
            .await
            .unwrap();
        let b = Store::open(dir.path(), "doc.json", json!({}), StoreOptions::default())
            .await
            .unwrap();

        a.update("from_a", json!(1)).await.unwrap();
        b.update("from_b", json!(2)).await.unwrap();

        // Each cache only knows its own change; the last writer owns the file.
        assert_eq!(a.read().await.unwrap(), json!({"from_a": 1}));
        assert_eq!(b.read().await.unwrap(), json!({"from_b": 2}));
        assert_eq!(a.reload().await.unwrap(), json!({"from_b": 2}));
    }

    #[tokio::test]
    async fn store_is_shareable_across_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(
            Store::open(dir.path(), "doc.json", json!({}), StoreOptions::default())
                .await
                .unwrap(),
        );

        let writer = {
            let store = store.clone();
            tokio::spawn(async move { store.update("count", json!(1)).await })
        };
        assert!(writer.await.unwrap().unwrap());
        assert_eq!(store.get("count").await.unwrap(), json!(1));
    }
}
