//! Webserver state management
//!
//! State shared by every request handler.

use std::sync::Arc;
use std::time::Instant;

use planner::{CleaningPlanner, JobStore};

/// Handler state: the planner service plus server bookkeeping
pub struct AppState<S: JobStore> {
    pub planner: Arc<CleaningPlanner<S>>,
    pub server_start_time: Instant,
}

impl<S: JobStore> AppState<S> {
    pub fn new(planner: CleaningPlanner<S>) -> Self {
        Self {
            planner: Arc::new(planner),
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}

// Manual impl: cloning shares the planner and does not require `S: Clone`
impl<S: JobStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            planner: Arc::clone(&self.planner),
            server_start_time: self.server_start_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner::InMemoryJobStore;

    #[tokio::test]
    async fn test_clones_share_planner() {
        let state = AppState::new(CleaningPlanner::new(InMemoryJobStore::new()));
        let clone = state.clone();

        state.planner.submit_job(&[vec![1]], &[]).await.unwrap();

        assert_eq!(clone.planner.job_count().await, 1);
        assert!(Arc::ptr_eq(&state.planner, &clone.planner));
    }
}
