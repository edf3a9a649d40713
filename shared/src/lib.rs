//! Shared types for the room-cleaning route planner
//!
//! Holds the domain model (rooms, batches, jobs), the HTTP message shapes and
//! configuration types used by both the planner and the web server, plus the
//! common logging setup.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    // Job submission and execution
    CreateJobRequest, CreateJobResponse, ErrorDetail, ErrorResponse, JobExecutionResponse, JobView,

    // Configuration
    DEFAULT_START_ROOM, PlannerConfig, WebServerConfig,
};
