//! Main webserver implementation
//!
//! The WebServer struct owns the bind address and the handler state, builds the
//! axum router and runs it until Ctrl+C.

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use planner::{CleaningPlanner, JobStore};
use shared::logging::{self, Component, Milestone};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::handlers::{create_job, execute_job, get_job, health_check, service_banner};

/// HTTP front end for the cleaning planner, generic over the job store
pub struct WebServer<S: JobStore> {
    bind_address: SocketAddr,
    state: AppState<S>,
}

impl<S> WebServer<S>
where
    S: JobStore + 'static,
{
    /// Create a new webserver around a planner
    pub fn new(bind_address: SocketAddr, planner: CleaningPlanner<S>) -> Self {
        Self {
            bind_address,
            state: AppState::new(planner),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Job routes
            .route("/jobs", post(create_job::<S>))
            .route("/jobs/:job_id", get(get_job::<S>))
            .route("/jobs/:job_id/execute", post(execute_job::<S>))

            // Health check
            .route("/health", get(health_check::<S>))

            .fallback(service_banner)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Serve requests until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", self.bind_address, e)))?;

        logging::log_milestone(
            Component::WebServer,
            Milestone::Startup,
            &format!(
                "route planner API on http://{} (start room {})",
                self.bind_address,
                self.state.planner.config().start_room
            ),
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.bind_address
    }

    /// Get server state for external access
    pub fn state(&self) -> &AppState<S> {
        &self.state
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_milestone(Component::WebServer, Milestone::Shutdown, "received Ctrl+C"),
        Err(err) => logging::log_error(Component::WebServer, "Signal handling", &err),
    }
}
