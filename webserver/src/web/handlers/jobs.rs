//! Job API handlers
//!
//! Submission, execution and inspection of cleaning jobs.

use axum::{
    extract::{Path, State, rejection::JsonRejection},
    response::Json,
};
use planner::{JobStore, PlannerError};
use shared::{CreateJobRequest, CreateJobResponse, JobExecutionResponse, JobId, JobView};
use tracing::debug;

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;

const MISSING_FIELDS: &str = "Missing required fields 'rawBatches' or 'priorityRooms'";

fn parse_job_id(raw: &str) -> WebServerResult<JobId> {
    Ok(JobId::from_string(raw).map_err(PlannerError::from)?)
}

/// Submit a cleaning job - POST /jobs
pub async fn create_job<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<CreateJobRequest>, JsonRejection>,
) -> WebServerResult<Json<CreateJobResponse>>
where
    S: JobStore + 'static,
{
    let Json(request) = payload.map_err(|rejection| WebServerError::invalid_request(rejection.body_text()))?;

    let (Some(raw_batches), Some(priority_rooms)) = (request.raw_batches, request.priority_rooms) else {
        return Err(WebServerError::invalid_request(MISSING_FIELDS));
    };

    debug!(batches = raw_batches.len(), priority_rooms = priority_rooms.len(), "Creating job");
    let job_id = state.planner.submit_job(&raw_batches, &priority_rooms).await?;

    Ok(Json(CreateJobResponse { job_id }))
}

/// Execute a cleaning job - POST /jobs/:job_id/execute
pub async fn execute_job<S>(
    State(state): State<AppState<S>>,
    Path(job_id): Path<String>,
) -> WebServerResult<Json<JobExecutionResponse>>
where
    S: JobStore + 'static,
{
    let job_id = parse_job_id(&job_id)?;
    let job = state.planner.execute_job(&job_id).await?;

    Ok(Json(JobExecutionResponse::from(&job)))
}

/// Inspect a cleaning job and its optimized batches - GET /jobs/:job_id
pub async fn get_job<S>(
    State(state): State<AppState<S>>,
    Path(job_id): Path<String>,
) -> WebServerResult<Json<JobView>>
where
    S: JobStore + 'static,
{
    let job_id = parse_job_id(&job_id)?;
    let job = state.planner.get_job(&job_id).await?;

    Ok(Json(JobView::from(&job)))
}
