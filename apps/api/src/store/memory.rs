use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::job::JobRecord;
use crate::store::{RecordStore, StorageError};

/// Keeps the collection in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<JobRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load(&self) -> Result<Vec<JobRecord>, StorageError> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[JobRecord]) -> Result<(), StorageError> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
