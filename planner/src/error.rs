//! Planner-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Job with id {job_id} not found")]
    NotFound { job_id: String },
}

impl PlannerError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput { reason: reason.into() }
    }

    pub fn not_found(job_id: impl ToString) -> Self {
        Self::NotFound {
            job_id: job_id.to_string(),
        }
    }

    /// HTTP-style status hint for the transport layer
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } => 400,
            Self::NotFound { .. } => 404,
        }
    }

    /// Stable error kind name
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "InvalidInput",
            Self::NotFound { .. } => "NotFound",
        }
    }
}

impl From<SharedError> for PlannerError {
    fn from(err: SharedError) -> Self {
        match err {
            // An id that cannot exist in the store is reported like any unknown id
            SharedError::InvalidJobId { input } => Self::NotFound { job_id: input },
            other => Self::InvalidInput {
                reason: other.to_string(),
            },
        }
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;
