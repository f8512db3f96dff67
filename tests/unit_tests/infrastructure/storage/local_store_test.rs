use std::io;

use bytes::Bytes;
use futures::stream;

use docsum::application::ports::{StagingStore, StagingStoreError};
use docsum::domain::{DocumentId, StoragePath};
use docsum::infrastructure::storage::LocalStagingStore;

fn create_test_store() -> (tempfile::TempDir, LocalStagingStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_chunked_stream_when_storing_then_returns_total_size() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&DocumentId::new(), "scan.png");

    let chunks = vec![Ok(Bytes::from("fake ")), Ok(Bytes::from("png"))];
    let size = store
        .store(&path, Box::pin(stream::iter(chunks)), None)
        .await
        .unwrap();

    assert_eq!(size, 8);
}

#[tokio::test]
async fn given_stored_upload_when_resolving_then_path_points_at_bytes() {
    let (dir, store) = create_test_store();
    let path = StoragePath::new(&DocumentId::new(), "scan.png");
    let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from("pixels"))]));
    store.store(&path, byte_stream, None).await.unwrap();

    let resolved = store.resolve(&path).unwrap();

    assert!(resolved.starts_with(dir.path().canonicalize().unwrap()));
    assert_eq!(std::fs::read(&resolved).unwrap(), b"pixels");
    assert_eq!(store.fetch(&path).await.unwrap(), b"pixels");
}

#[tokio::test]
async fn given_stored_upload_when_deleting_then_file_is_gone() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&DocumentId::new(), "doc.pdf");
    let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from("%PDF-1.4"))]));
    store.store(&path, byte_stream, None).await.unwrap();
    let resolved = store.resolve(&path).unwrap();

    store.delete(&path).await.unwrap();

    assert!(!resolved.exists());
    assert!(store.fetch(&path).await.is_err());
}

#[tokio::test]
async fn given_deleted_upload_when_deleting_again_then_succeeds() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&DocumentId::new(), "doc.pdf");
    let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from("data"))]));
    store.store(&path, byte_stream, None).await.unwrap();

    store.delete(&path).await.unwrap();
    let second = store.delete(&path).await;

    assert!(second.is_ok());
}

#[tokio::test]
async fn given_never_stored_path_when_deleting_then_succeeds() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&DocumentId::new(), "ghost.png");

    assert!(store.delete(&path).await.is_ok());
}

#[tokio::test]
async fn given_stream_error_when_storing_then_returns_io_error() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&DocumentId::new(), "scan.png");

    let chunks: Vec<Result<Bytes, io::Error>> = vec![
        Ok(Bytes::from("partial")),
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "client went away")),
    ];
    let result = store
        .store(&path, Box::pin(stream::iter(chunks)), None)
        .await;

    assert!(matches!(result, Err(StagingStoreError::Io(_))));
}

#[tokio::test]
async fn given_nonexistent_path_when_fetching_then_returns_not_found() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::new(&DocumentId::new(), "missing.pdf");

    let result = store.fetch(&path).await;

    assert!(matches!(result, Err(StagingStoreError::NotFound(_))));
}

#[test]
fn given_traversal_names_when_resolving_then_rejects() {
    let (_dir, store) = create_test_store();

    for raw in ["", "../etc/passwd", "nested/file.pdf", "..\\win.ini", ".hidden"] {
        let result = store.resolve(&StoragePath::from_raw(raw));
        assert!(
            matches!(result, Err(StagingStoreError::InvalidPath(_))),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn given_missing_directory_when_creating_store_then_creates_it() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("uploads").join("staging");

    let store = LocalStagingStore::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
    assert_eq!(store.base_path(), nested.canonicalize().unwrap());
}
