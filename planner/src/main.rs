//! Offline entry point for the planner
//!
//! Plans and executes a single job from command line input and prints the
//! completed job as JSON.

use clap::Parser;
use shared::logging::{self, Component, Milestone};
use shared::{DEFAULT_START_ROOM, Job, JobView, PlannerConfig, Room};
use thiserror::Error;

use planner::{CleaningPlanner, InMemoryJobStore, PlannerError};

/// Plan and execute a room-cleaning route
#[derive(Parser, Debug)]
#[command(name = "planner")]
#[command(about = "Orders cleaning batches and walks them nearest-first")]
struct Args {
    /// Raw batches as JSON, e.g. '[[5,3,3],[10,12]]'
    #[arg(long)]
    batches: String,

    /// Priority rooms as JSON, e.g. '[5]'
    #[arg(long, default_value = "[]")]
    priority_rooms: String,

    /// Room the robot starts from
    #[arg(long, env = "PLANNER_START_ROOM", default_value_t = DEFAULT_START_ROOM, allow_negative_numbers = true)]
    start_room: Room,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PLANNER_CLI_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

/// Failures of the offline CLI
#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error("Failed to render job as JSON: {0}")]
    Render(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

fn parse_json_arg<T: serde::de::DeserializeOwned>(name: &str, value: &str) -> CliResult<T> {
    serde_json::from_str(value)
        .map_err(|e| PlannerError::invalid_input(format!("--{name}: {e}")).into())
}

fn render_job(job: &Job) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(&JobView::from(job))?)
}

async fn plan_route(args: &Args) -> CliResult<Job> {
    let raw_batches: Vec<Vec<Room>> = parse_json_arg("batches", &args.batches)?;
    let priority_rooms: Vec<Room> = parse_json_arg("priority-rooms", &args.priority_rooms)?;

    let planner = CleaningPlanner::with_config(
        InMemoryJobStore::new(),
        PlannerConfig {
            start_room: args.start_room,
        },
    );

    let job_id = planner.submit_job(&raw_batches, &priority_rooms).await?;
    Ok(planner.execute_job(&job_id).await?)
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let _ = dotenv::dotenv();
    let args = Args::parse();

    logging::init_tracing_with_level(Component::Planner, Some(&args.log_level));
    logging::log_milestone(Component::Planner, Milestone::Startup, "offline route planning");

    let rendered = plan_route(&args).await.and_then(|job| {
        logging::log_milestone(
            Component::Planner,
            Milestone::Progress,
            &format!(
                "{} rooms visited, {} passed without cleaning",
                job.num_rooms_cleaned().unwrap_or(0),
                job.num_rooms_passed_without_cleaning.unwrap_or(0)
            ),
        );
        render_job(&job)
    });

    match rendered {
        Ok(json) => {
            println!("{json}");
            logging::log_milestone(Component::Planner, Milestone::Success, "Route planned");
            Ok(())
        }
        Err(e) => {
            logging::log_error(Component::Planner, "Route planning", &e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn args(batches: &str, priority_rooms: &str) -> Args {
        Args {
            batches: batches.to_string(),
            priority_rooms: priority_rooms.to_string(),
            start_room: DEFAULT_START_ROOM,
            log_level: "warn".to_string(),
        }
    }

    fn env_of(id: &str) -> Option<String> {
        Args::command()
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .and_then(|arg| arg.get_env())
            .map(|env| env.to_string_lossy().into_owned())
    }

    #[test]
    fn test_defaults_can_come_from_environment() {
        assert_eq!(env_of("start_room").as_deref(), Some("PLANNER_START_ROOM"));
        assert_eq!(env_of("log_level").as_deref(), Some("PLANNER_CLI_LOG_LEVEL"));
        assert_eq!(env_of("batches"), None);
    }

    #[tokio::test]
    async fn test_plan_route_and_render() {
        let job = plan_route(&args("[[5,3,3]]", "[5]")).await.unwrap();
        assert_eq!(job.path_taken, Some(vec![1, 5, 3]));

        let rendered = render_job(&job).unwrap();
        let view: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(view["numRoomsPassedWithoutCleaning"], 4);
    }

    #[tokio::test]
    async fn test_bad_arguments_are_planner_errors() {
        let bad_json = plan_route(&args("[[5,", "[]")).await.unwrap_err();
        assert!(matches!(bad_json, CliError::Planner(PlannerError::InvalidInput { .. })));
        assert!(bad_json.to_string().contains("--batches"));

        let empty_batch = plan_route(&args("[[]]", "[]")).await.unwrap_err();
        assert!(matches!(empty_batch, CliError::Planner(PlannerError::InvalidInput { .. })));
    }

    #[test]
    fn test_render_failures_surface_as_errors() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CliError::from(serde_error);

        assert!(matches!(err, CliError::Render(_)));
        assert!(err.to_string().starts_with("Failed to render job as JSON"));
    }
}
