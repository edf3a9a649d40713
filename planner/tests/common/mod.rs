//! Common test utilities and infrastructure
//!
//! Shared fixtures and helpers used across the planner test suites.

// Each test binary uses a different subset of the helpers
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{PlannerBuilder, TestHelpers};
