//! Job Service — validates requests and applies them to the Record Store.
//!
//! Flow for every mutation: validate → lock → load → modify → save.
//! Validation runs before the store is touched, so a rejected request never
//! changes stored state.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::validation::{validate_job_input, JobInput};
use crate::models::job::{JobRecord, Timestamp};
use crate::store::RecordStore;

pub const JOB_NOT_FOUND: &str = "Job not found";

pub struct JobService {
    store: Arc<dyn RecordStore>,
    /// Serializes read-modify-write cycles within this process. Writers in
    /// other processes sharing the file still race.
    write_lock: Mutex<()>,
}

impl JobService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn list(&self) -> Result<Vec<JobRecord>, AppError> {
        Ok(self.store.load().await?)
    }

    pub async fn create(&self, input: JobInput) -> Result<JobRecord, AppError> {
        let job = validate_job_input(input)?;

        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;

        let now = Timestamp::now();
        let record = JobRecord {
            id: fresh_id(&records),
            title: job.title,
            company: job.company,
            link: job.link,
            status: job.status,
            created_at: now.clone(),
            updated_at: now,
        };
        records.push(record.clone());
        self.store.save(&records).await?;

        info!(job_id = %record.id, company = %record.company, "Job created");
        Ok(record)
    }

    pub async fn update(&self, id: &str, input: JobInput) -> Result<JobRecord, AppError> {
        let job = validate_job_input(input)?;

        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;

        let record = find_mut(&mut records, id)?;
        record.title = job.title;
        record.company = job.company;
        record.link = job.link;
        record.status = job.status;
        // Never move updatedAt behind createdAt, even if the clock stepped back.
        record.updated_at = Timestamp::now().max(record.created_at.clone());
        let updated = record.clone();

        self.store.save(&records).await?;

        info!(job_id = %updated.id, status = %updated.status, "Job updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.store.load().await?;

        let index = position(&records, id)?;
        let removed = records.remove(index);
        self.store.save(&records).await?;

        info!(job_id = %removed.id, "Job deleted");
        Ok(())
    }
}

fn fresh_id(records: &[JobRecord]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if records.iter().all(|r| r.id != id) {
            return id;
        }
    }
}

fn position(records: &[JobRecord], id: &str) -> Result<usize, AppError> {
    records
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| AppError::NotFound(JOB_NOT_FOUND.to_string()))
}

fn find_mut<'a>(records: &'a mut [JobRecord], id: &str) -> Result<&'a mut JobRecord, AppError> {
    let index = position(records, id)?;
    Ok(&mut records[index])
}
