//! Service implementations
//!
//! Production implementations of the planner's service traits.

pub mod job_store;

#[cfg(test)]
mod tests;

pub use job_store::InMemoryJobStore;
