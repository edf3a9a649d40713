//! Message types for the room-cleaning planner
//!
//! - `jobs`: HTTP request and response bodies for job submission and execution
//! - `config`: Configuration for the planner and the web server

pub mod config;
pub mod jobs;

pub use config::{DEFAULT_START_ROOM, PlannerConfig, WebServerConfig};

pub use jobs::{
    CreateJobRequest, CreateJobResponse, ErrorDetail, ErrorResponse, JobExecutionResponse, JobView,
};
