//! Core business logic modules
//!
//! This module contains pure route-planning logic with no I/O dependencies.
//! All functions are deterministic and easily testable.

pub mod executor;
pub mod optimizer;

pub use executor::{RouteOutcome, execute_route};
pub use optimizer::{SortPlan, optimize_batches};
