use std::sync::Arc;
use std::time::Duration;

use docsum::application::ports::StagingStore;
use docsum::application::services::TransientUpload;
use docsum::domain::{DocumentId, StoragePath, UploadedDocument};

use crate::common::{RecordingStore, byte_stream};

async fn staged(store: &Arc<RecordingStore>) -> TransientUpload {
    let id = DocumentId::new();
    let path = StoragePath::new(&id, "scan.png");
    let size = store.store(&path, byte_stream(b"png"), None).await.unwrap();
    let temporary_path = store.resolve(&path).unwrap();
    let document = UploadedDocument::new(id, path, temporary_path, "scan.png".to_string(), size);
    TransientUpload::new(document, store.clone())
}

#[tokio::test]
async fn given_released_upload_when_dropped_then_no_second_delete_happens() {
    let store = RecordingStore::new();
    let upload = staged(&store).await;

    upload.release().await;
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(store.delete_count(), 1);
    assert_eq!(store.file_count(), 0);
}

#[tokio::test]
async fn given_unreleased_upload_when_dropped_then_deletion_is_scheduled() {
    let store = RecordingStore::new();
    let upload = staged(&store).await;

    drop(upload);
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(store.delete_count(), 1);
    assert_eq!(store.file_count(), 0);
}

#[test]
fn given_unreleased_upload_outside_runtime_when_dropped_then_file_is_removed() {
    let store = RecordingStore::new();
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let upload = runtime.block_on(staged(&store));
    let path = upload.document().temporary_path.clone();
    drop(runtime);

    drop(upload);

    assert!(!path.exists());
}
