//! Core shared types and identifiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::SharedError;

/// Room number. Distance between rooms is the absolute difference of their numbers.
pub type Room = i64;

/// Count of rooms passed without cleaning.
///
/// A single hop between extreme rooms passes up to `u64::MAX - 1` rooms, so
/// totals over several hops need the wider type.
pub type PassedCount = u128;

/// Unique identifier for cleaning jobs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, SharedError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidJobId { input: s.to_string() })
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

/// A group of rooms cleaned together.
///
/// Priority rooms are always visited before non-priority rooms. `all_rooms` is
/// built on construction and is exactly `priority_rooms ++ non_priority_rooms`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    priority_rooms: Vec<Room>,
    non_priority_rooms: Vec<Room>,
    all_rooms: Vec<Room>,
}

impl Batch {
    pub fn new(priority_rooms: Vec<Room>, non_priority_rooms: Vec<Room>) -> Self {
        let all_rooms = priority_rooms
            .iter()
            .chain(non_priority_rooms.iter())
            .copied()
            .collect();

        Self {
            priority_rooms,
            non_priority_rooms,
            all_rooms,
        }
    }

    pub fn priority_rooms(&self) -> &[Room] {
        &self.priority_rooms
    }

    pub fn non_priority_rooms(&self) -> &[Room] {
        &self.non_priority_rooms
    }

    /// Full visiting order for this batch
    pub fn all_rooms(&self) -> &[Room] {
        &self.all_rooms
    }

    /// Entry room used to pick the nearest batch
    pub fn first_room(&self) -> Option<Room> {
        self.all_rooms.first().copied()
    }

    pub fn last_room(&self) -> Option<Room> {
        self.all_rooms.last().copied()
    }

    pub fn len(&self) -> usize {
        self.all_rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_rooms.is_empty()
    }
}

/// Stored cleaning job.
///
/// Completion fields stay `None` until the route has been executed.
#[derive(Clone, Debug, PartialEq)]
pub struct Job {
    pub id: JobId,
    pub cleaning_batches: Vec<Batch>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub path_taken: Option<Vec<Room>>,
    pub num_rooms_passed_without_cleaning: Option<PassedCount>,
}

impl Job {
    pub fn new(id: JobId, cleaning_batches: Vec<Batch>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            cleaning_batches,
            created_at,
            completed_at: None,
            path_taken: None,
            num_rooms_passed_without_cleaning: None,
        }
    }

    /// Record the outcome of a route execution, replacing any earlier one
    pub fn mark_completed(
        &mut self,
        path_taken: Vec<Room>,
        num_rooms_passed_without_cleaning: PassedCount,
        completed_at: DateTime<Utc>,
    ) {
        self.path_taken = Some(path_taken);
        self.num_rooms_passed_without_cleaning = Some(num_rooms_passed_without_cleaning);
        self.completed_at = Some(completed_at);
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn final_room(&self) -> Option<Room> {
        self.path_taken.as_ref().and_then(|path| path.last().copied())
    }

    pub fn num_batches(&self) -> usize {
        self.cleaning_batches.len()
    }

    pub fn num_rooms_cleaned(&self) -> Option<usize> {
        self.path_taken.as_ref().map(Vec::len)
    }
}
