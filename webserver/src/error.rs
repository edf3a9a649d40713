//! WebServer-specific error types
//!
//! Every error that reaches a handler boundary is turned into a JSON error body
//! with a status code: planner errors use their own status hint, malformed
//! requests map to 400 and anything else to 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use planner::PlannerError;
use shared::{ErrorResponse, SharedError};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::InvalidRequest { details: details.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Planner(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error type name reported to clients
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Planner(err) => err.kind(),
            Self::InvalidRequest { .. } => "InvalidInput",
            _ => "InternalError",
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(ErrorResponse::new(self.kind(), self.to_string()))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            WebServerError::from(PlannerError::not_found("x")).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebServerError::from(PlannerError::invalid_input("empty")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebServerError::invalid_request("missing field").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebServerError::ServerStartup("bind".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_planner_message_is_passed_through() {
        let err = WebServerError::from(PlannerError::not_found("abc"));

        assert_eq!(err.kind(), "NotFound");
        assert_eq!(err.to_string(), "Job with id abc not found");
    }

    #[test]
    fn test_uncoded_errors_are_internal() {
        let err = WebServerError::ServerStartup("bind failed".to_string());
        assert_eq!(err.kind(), "InternalError");
    }
}
