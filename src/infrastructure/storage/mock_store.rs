use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StagingPath;

/// In-memory staging area.
#[derive(Default)]
pub struct MockStagingStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MockStagingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl StagingStore for MockStagingStore {
    async fn store(
        &self,
        path: &StagingPath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, StagingStoreError> {
        let mut buffer = Vec::new();
        while let Some(chunk) = stream.next().await {
            buffer.extend_from_slice(&chunk?);
        }
        let size = buffer.len() as u64;
        self.objects
            .lock()
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?
            .insert(path.as_str().to_string(), buffer);
        Ok(size)
    }

    async fn fetch(&self, path: &StagingPath) -> Result<Vec<u8>, StagingStoreError> {
        self.objects
            .lock()
            .map_err(|e| StagingStoreError::DownloadFailed(e.to_string()))?
            .get(path.as_str())
            .cloned()
            .ok_or_else(|| StagingStoreError::NotFound(path.to_string()))
    }

    async fn delete(&self, path: &StagingPath) -> Result<(), StagingStoreError> {
        self.objects
            .lock()
            .map_err(|e| StagingStoreError::DeleteFailed(e.to_string()))?
            .remove(path.as_str());
        Ok(())
    }
}
