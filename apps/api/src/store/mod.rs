//! Record Store — owns the persisted collection of job records.
//!
//! The store always reads and writes the whole collection. `AppState` holds an
//! `Arc<dyn RecordStore>` so the file-backed store can be swapped for the
//! in-memory one in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::job::JobRecord;

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data format in {path}: {reason}")]
    Malformed { path: String, reason: String },
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns every stored record in order. A missing or empty backing
    /// document is initialized to an empty collection.
    async fn load(&self) -> Result<Vec<JobRecord>, StorageError>;

    /// Replaces the stored collection with `records`.
    async fn save(&self, records: &[JobRecord]) -> Result<(), StorageError>;
}
