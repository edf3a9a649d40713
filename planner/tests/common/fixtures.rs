//! Test fixtures and data for planner tests

use shared::{JobId, Room};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Well-formed id that is never issued by a store
    pub const UNKNOWN_JOB: &'static str = "550e8400-e29b-41d4-a716-446655440001";

    pub fn unknown_job_id() -> JobId {
        JobId::from_string(Self::UNKNOWN_JOB).unwrap()
    }

    /// Single batch with a duplicate room and one priority room
    pub fn duplicate_batch() -> (Vec<Vec<Room>>, Vec<Room>) {
        (vec![vec![5, 3, 3]], vec![5])
    }

    /// Two batches submitted far-first, without priorities
    pub fn two_batches() -> (Vec<Vec<Room>>, Vec<Room>) {
        (vec![vec![10, 12], vec![2, 4]], Vec::new())
    }

    /// A floor's worth of batches with priorities spread across them
    pub fn floor_plan() -> (Vec<Vec<Room>>, Vec<Room>) {
        (
            vec![
                vec![31, 35, 33, 30],
                vec![12, 11, 18, 15, 11],
                vec![2, 7, 5],
                vec![44, 40],
                vec![21],
            ],
            vec![33, 18, 7, 40],
        )
    }

    /// Batches where one entry is empty
    pub fn with_empty_batch() -> (Vec<Vec<Room>>, Vec<Room>) {
        (vec![vec![4, 5], Vec::new()], vec![4])
    }

    /// Large generated input for performance checks
    pub fn large_input(batch_count: usize, rooms_per_batch: usize) -> (Vec<Vec<Room>>, Vec<Room>) {
        let batches = (0..batch_count)
            .map(|b| {
                (0..rooms_per_batch)
                    .map(|r| ((b * 37 + r * 11) % 1000) as Room)
                    .collect()
            })
            .collect();
        let priority = (0..1000).step_by(7).map(|r| r as Room).collect();
        (batches, priority)
    }
}
