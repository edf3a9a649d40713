//! Test helpers and builders for planner tests

use planner::{CleaningPlanner, InMemoryJobStore, JobStore};
use shared::{Job, PassedCount, PlannerConfig, Room};

/// Builder for planners backed by the in-memory store
pub struct PlannerBuilder {
    config: PlannerConfig,
}

impl PlannerBuilder {
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
        }
    }

    pub fn with_start_room(mut self, start_room: Room) -> Self {
        self.config.start_room = start_room;
        self
    }

    pub fn build(self) -> CleaningPlanner<InMemoryJobStore> {
        CleaningPlanner::with_config(InMemoryJobStore::new(), self.config)
    }
}

/// Common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Planner with default configuration
    pub fn simple_planner() -> CleaningPlanner<InMemoryJobStore> {
        PlannerBuilder::new().build()
    }

    /// Submit and execute in one go, panicking on failure
    pub async fn submit_and_execute<S: JobStore>(
        planner: &CleaningPlanner<S>,
        input: (Vec<Vec<Room>>, Vec<Room>),
    ) -> Job {
        let (raw_batches, priority_rooms) = input;
        let job_id = planner
            .submit_job(&raw_batches, &priority_rooms)
            .await
            .expect("submission should succeed");
        planner.execute_job(&job_id).await.expect("execution should succeed")
    }

    /// Rooms passed without cleaning, recomputed from a path
    pub fn passed_along_path(path: &[Room]) -> PassedCount {
        path.windows(2)
            .map(|pair| PassedCount::from(pair[0].abs_diff(pair[1]).saturating_sub(1)))
            .sum()
    }
}
