//! WebServer entry point
//!
//! Reads configuration from the command line (or the environment, including a
//! `.env` file) and serves the planner API.

use clap::Parser;
use shared::logging::{self, Component, Milestone};
use shared::{DEFAULT_START_ROOM, PlannerConfig, Room, WebServerConfig};

use planner::{CleaningPlanner, InMemoryJobStore};
use webserver::{WebServer, WebServerResult};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "HTTP API for planning and executing room-cleaning routes")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "PLANNER_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, env = "PLANNER_PORT", default_value = "3000")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PLANNER_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Room every route starts from
    #[arg(long, env = "PLANNER_START_ROOM", default_value_t = DEFAULT_START_ROOM, allow_negative_numbers = true)]
    start_room: Room,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // Values from .env never override variables already set
    let _ = dotenv::dotenv();
    let args = Args::parse();

    logging::init_tracing_with_level(Component::WebServer, Some(&args.log_level));

    let server_config = WebServerConfig {
        host: args.host,
        port: args.port,
    };
    let bind_address = server_config.socket_addr()?;

    let planner = CleaningPlanner::with_config(
        InMemoryJobStore::new(),
        PlannerConfig {
            start_room: args.start_room,
        },
    );

    let webserver = WebServer::new(bind_address, planner);

    if let Err(e) = webserver.run().await {
        logging::log_error(Component::WebServer, "WebServer", &e);
        return Err(e);
    }

    logging::log_milestone(Component::WebServer, Milestone::Success, "WebServer stopped gracefully");
    Ok(())
}
