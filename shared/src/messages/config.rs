//! Configuration types
//!
//! Types for configuring the planner and the HTTP front end.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::errors::{SharedError, SharedResult};
use crate::types::Room;

/// Room the cleaning robot starts every route from
pub const DEFAULT_START_ROOM: Room = 1;

/// Planner configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlannerConfig {
    pub start_room: Room,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            start_room: DEFAULT_START_ROOM,
        }
    }
}

/// Web server configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WebServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl WebServerConfig {
    /// Resolve the bind address from host and port
    pub fn socket_addr(&self) -> SharedResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| SharedError::InvalidConfig {
                field: "host".to_string(),
                value: self.host.clone(),
            })
    }
}
