use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::models::job::JobRecord;
use crate::store::{RecordStore, StorageError};

/// Stores all records as one pretty-printed JSON array on disk.
///
/// Every save rewrites the whole document through a temp file in the same
/// directory, renamed over the target once fully written.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_document(&self, bytes: Vec<u8>) -> Result<(), StorageError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, &bytes))
            .await
            .map_err(std::io::Error::other)??;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<JobRecord>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            info!("Initializing empty job store at {}", self.path.display());
            self.save(&[]).await?;
            return Ok(Vec::new());
        }

        let records: Vec<JobRecord> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Malformed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        debug!("Loaded {} job records", records.len());
        Ok(records)
    }

    async fn save(&self, records: &[JobRecord]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(records).map_err(|e| StorageError::Malformed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        self.write_document(bytes).await
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
