//! Shared logging utilities for consistent tracing across the workspace binaries

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{error, info};

/// Component emitting log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Offline planner CLI
    Planner,
    /// HTTP front end
    WebServer,
}

impl Component {
    /// Filter directives for this component at the given base level
    pub fn filter_directives(&self, base_level: &str) -> String {
        match self {
            Component::Planner => {
                format!("planner={base_level},shared={base_level}")
            }
            Component::WebServer => {
                format!(
                    "webserver={base_level},planner={base_level},shared={base_level},tower_http=debug,axum={base_level}"
                )
            }
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Planner => write!(f, "planner"),
            Component::WebServer => write!(f, "webserver"),
        }
    }
}

/// Initialize the stdout tracing subscriber for a component.
///
/// `log_level` defaults to `info`. Calling this twice in one process is a no-op
/// for the second call.
pub fn init_tracing_with_level(component: Component, log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = log_level.unwrap_or("info");
    let directives = component.filter_directives(base_level);

    let _ = fmt()
        .with_env_filter(EnvFilter::new(&directives))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Lifecycle points the binaries announce at `info` level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Startup,
    Progress,
    Success,
    Shutdown,
}

impl Milestone {
    fn marker(self) -> &'static str {
        match self {
            Milestone::Startup => "🚀 Starting",
            Milestone::Progress => "📋",
            Milestone::Success => "✅",
            Milestone::Shutdown => "🛑 Shutting down:",
        }
    }
}

/// Log a lifecycle milestone with the component and a timestamp attached
pub fn log_milestone(component: Component, milestone: Milestone, message: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "{} {}",
        milestone.marker(),
        message
    );
}

/// Log a failed operation at `error` level
pub fn log_error(component: Component, context: &str, error: &dyn fmt::Display) {
    error!(
        component = %component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed",
        context
    );
}
