//! Service-specific tests
//!
//! Each service has its own test file; shared helpers live in `common`.


pub mod common {
    use shared::{Batch, Room};

    /// Generate a deterministic job id for lookups that must miss
    pub fn unknown_job_id() -> shared::JobId {
        shared::JobId::from_string("550e8400-e29b-41d4-a716-446655440000")
            .expect("Valid test job ID")
    }

    /// Build a batch list from (priority, non-priority) pairs
    pub fn test_batches(specs: &[(&[Room], &[Room])]) -> Vec<Batch> {
        specs
            .iter()
            .map(|(priority, non_priority)| Batch::new(priority.to_vec(), non_priority.to_vec()))
            .collect()
    }
}
