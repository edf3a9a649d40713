//! Cleaning planner service
//!
//! Ties the pure optimizer and executor to a job store: submitting a job orders
//! its batches and stores them, executing a job walks the stored batches and
//! records the outcome.

use shared::{Job, JobId, PlannerConfig, Room};
use tracing::info;

use crate::core::{execute_route, optimize_batches};
use crate::error::PlannerResult;
use crate::traits::JobStore;

/// Planner service with an injected job store
pub struct CleaningPlanner<S: JobStore> {
    store: S,
    config: PlannerConfig,
}

impl<S: JobStore> CleaningPlanner<S> {
    /// Create a planner that starts every route from the default room
    pub fn new(store: S) -> Self {
        Self::with_config(store, PlannerConfig::default())
    }

    pub fn with_config(store: S, config: PlannerConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Optimize the raw batches and store them as a new job
    pub async fn submit_job(&self, raw_batches: &[Vec<Room>], priority_rooms: &[Room]) -> PlannerResult<JobId> {
        let cleaning_batches = optimize_batches(raw_batches, priority_rooms)?;
        let num_batches = cleaning_batches.len();

        let job_id = self.store.create(cleaning_batches).await?;
        info!(%job_id, num_batches, priority_rooms = priority_rooms.len(), "Job submitted");

        Ok(job_id)
    }

    /// Walk a stored job's batches and record the route.
    ///
    /// Re-executing a completed job replaces its earlier result; the stored
    /// batches are never modified, so the route comes out the same.
    pub async fn execute_job(&self, job_id: &JobId) -> PlannerResult<Job> {
        let job = self.store.get(job_id).await?;
        let outcome = execute_route(&job.cleaning_batches, self.config.start_room);

        info!(
            %job_id,
            rooms_cleaned = outcome.path_taken.len(),
            passed = outcome.num_rooms_passed_without_cleaning,
            "Job executed"
        );

        self.store
            .complete(job_id, outcome.path_taken, outcome.num_rooms_passed_without_cleaning)
            .await
    }

    pub async fn get_job(&self, job_id: &JobId) -> PlannerResult<Job> {
        self.store.get(job_id).await
    }

    pub async fn job_count(&self) -> usize {
        self.store.count().await
    }
}
