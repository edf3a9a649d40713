//! Request handlers

pub mod jobs;
pub mod system;

pub use jobs::{create_job, execute_job, get_job};
pub use system::{health_check, service_banner};
