//! In-memory job store
//!
//! Keeps every job in a shared map for the lifetime of the process. Clones share
//! the same map.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use shared::{Batch, Job, JobId, PassedCount, Room};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{PlannerError, PlannerResult};
use crate::traits::JobStore;

#[derive(Clone, Default)]
pub struct InMemoryJobStore {
    jobs: Arc<RwLock<HashMap<JobId, Job>>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl JobStore for InMemoryJobStore {
    async fn create(&self, cleaning_batches: Vec<Batch>) -> PlannerResult<JobId> {
        let job_id = JobId::new();
        let job = Job::new(job_id, cleaning_batches, Utc::now());

        let mut jobs = self.jobs.write().await;
        jobs.insert(job_id, job);
        debug!(%job_id, stored = jobs.len(), "Stored new job");

        Ok(job_id)
    }

    async fn get(&self, job_id: &JobId) -> PlannerResult<Job> {
        let jobs = self.jobs.read().await;
        jobs.get(job_id)
            .cloned()
            .ok_or_else(|| PlannerError::not_found(job_id))
    }

    async fn complete(
        &self,
        job_id: &JobId,
        path_taken: Vec<Room>,
        num_rooms_passed_without_cleaning: PassedCount,
    ) -> PlannerResult<Job> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(job_id)
            .ok_or_else(|| PlannerError::not_found(job_id))?;

        job.mark_completed(path_taken, num_rooms_passed_without_cleaning, Utc::now());
        Ok(job.clone())
    }

    async fn count(&self) -> usize {
        self.jobs.read().await.len()
    }
}
