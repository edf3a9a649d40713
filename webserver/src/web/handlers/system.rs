//! Service-level handlers

use axum::{extract::State, response::Json};
use planner::JobStore;
use serde_json::{Value, json};

use crate::state::AppState;

/// Health check - GET /health
pub async fn health_check<S>(State(state): State<AppState<S>>) -> Json<Value>
where
    S: JobStore + 'static,
{
    Json(json!({
        "status": "ok",
        "jobs": state.planner.job_count().await,
        "uptimeSeconds": state.get_uptime_seconds(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Catch-all for unknown routes
pub async fn service_banner() -> &'static str {
    "Room Cleaning Route Planner API"
}
