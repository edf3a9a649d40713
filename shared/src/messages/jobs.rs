//! Job request and response messages
//!
//! Wire shapes exchanged between HTTP clients and the planner. All fields are
//! camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Batch, Job, JobId, PassedCount, Room};

/// Body of `POST /jobs`.
///
/// Both fields are optional at the serde level so a missing field can be
/// reported as a client error instead of a generic rejection.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub raw_batches: Option<Vec<Vec<Room>>>,
    pub priority_rooms: Option<Vec<Room>>,
}

/// Response of `POST /jobs`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobResponse {
    pub job_id: JobId,
}

/// Response of `POST /jobs/{jobId}/execute`
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobExecutionResponse {
    pub job_id: JobId,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub path_taken: Option<Vec<Room>>,
    pub num_rooms_passed_without_cleaning: Option<PassedCount>,
    pub final_room: Option<Room>,
    pub num_batches: usize,
    pub num_rooms_cleaned: Option<usize>,
}

impl From<&Job> for JobExecutionResponse {
    fn from(job: &Job) -> Self {
        Self {
            job_id: job.id,
            created_at: job.created_at,
            completed_at: job.completed_at,
            path_taken: job.path_taken.clone(),
            num_rooms_passed_without_cleaning: job.num_rooms_passed_without_cleaning,
            final_room: job.final_room(),
            num_batches: job.num_batches(),
            num_rooms_cleaned: job.num_rooms_cleaned(),
        }
    }
}

/// Full job view including the optimized batches
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobView {
    #[serde(flatten)]
    pub summary: JobExecutionResponse,
    pub cleaning_batches: Vec<Batch>,
}

impl From<&Job> for JobView {
    fn from(job: &Job) -> Self {
        Self {
            summary: JobExecutionResponse::from(job),
            cleaning_batches: job.cleaning_batches.clone(),
        }
    }
}

/// Error payload returned by the HTTP layer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                kind: kind.into(),
                message: message.into(),
            },
        }
    }
}
