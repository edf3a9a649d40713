//! Route planner for a room-cleaning robot
//!
//! Orders the rooms of each submitted batch (priority rooms first, sweep
//! directions chosen for the shortest hop between the two groups) and executes
//! jobs by walking batches nearest-first from a fixed start room.

pub mod core;
pub mod error;
pub mod planner;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{RouteOutcome, SortPlan, execute_route, optimize_batches};
pub use error::{PlannerError, PlannerResult};
pub use planner::CleaningPlanner;
pub use services::InMemoryJobStore;
pub use traits::JobStore;
