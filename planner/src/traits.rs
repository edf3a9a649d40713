//! Trait definitions with mockall annotations for testing
//!
//! Storage is the only I/O-shaped collaborator of the planner. It sits behind
//! this trait so the planner can be driven against a mock in tests.

use shared::{Batch, Job, JobId, PassedCount, Room};

use crate::error::PlannerResult;

/// Keyed storage for cleaning jobs
///
/// The store owns job records exclusively. Each operation is atomic on its own;
/// nothing coordinates concurrent executions of the same job.
#[mockall::automock]
#[async_trait::async_trait]
pub trait JobStore: Send + Sync {
    /// Store a new job under a fresh id with `created_at` set to now
    async fn create(&self, cleaning_batches: Vec<Batch>) -> PlannerResult<JobId>;

    /// Fetch a copy of a stored job
    ///
    /// # Returns
    /// The job, or `NotFound` if no job has this id
    async fn get(&self, job_id: &JobId) -> PlannerResult<Job>;

    /// Record a route execution, replacing any earlier result
    ///
    /// # Parameters
    /// - `job_id`: Job to complete
    /// - `path_taken`: Start room followed by every cleaned room
    /// - `num_rooms_passed_without_cleaning`: Rooms passed between visits
    ///
    /// # Returns
    /// The updated job, or `NotFound` if no job has this id
    async fn complete(
        &self,
        job_id: &JobId,
        path_taken: Vec<Room>,
        num_rooms_passed_without_cleaning: PassedCount,
    ) -> PlannerResult<Job>;

    /// Number of stored jobs
    async fn count(&self) -> usize;
}
