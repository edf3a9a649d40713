//! Shared error types for the room-cleaning planner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid job id: {input}")]
    InvalidJobId { input: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
