//! HTTP front end for the room-cleaning route planner
//!
//! Exposes job submission and execution over a small JSON API and maps planner
//! errors onto HTTP status codes.

pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::AppState;
pub use webserver_impl::WebServer;
