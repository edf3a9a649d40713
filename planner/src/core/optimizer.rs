//! Intra-batch room ordering
//!
//! Orders the rooms of each batch so that every priority room is visited before
//! any non-priority room. Each sub-sequence is swept from one end to the other,
//! and the sweep directions are chosen to make the hop from the last priority
//! room to the first non-priority room as short as possible. The order of the
//! batches themselves is left untouched; it is decided at execution time.

use std::collections::HashSet;

use shared::{Batch, Room};
use tracing::debug;

use crate::error::{PlannerError, PlannerResult};

/// Direction in which a sub-sequence is swept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, rooms: &mut [Room]) {
        match self {
            SortDirection::Ascending => rooms.sort_unstable(),
            SortDirection::Descending => rooms.sort_unstable_by(|a, b| b.cmp(a)),
        }
    }
}

/// Smallest and largest room of a non-empty sub-sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSpan {
    pub min: Room,
    pub max: Room,
}

impl RoomSpan {
    pub fn of(rooms: &[Room]) -> Option<Self> {
        let min = rooms.iter().copied().min()?;
        let max = rooms.iter().copied().max()?;
        Some(Self { min, max })
    }

    fn first(&self, direction: SortDirection) -> Room {
        match direction {
            SortDirection::Ascending => self.min,
            SortDirection::Descending => self.max,
        }
    }

    fn last(&self, direction: SortDirection) -> Room {
        match direction {
            SortDirection::Ascending => self.max,
            SortDirection::Descending => self.min,
        }
    }
}

/// Sort-direction combination for the priority and non-priority sub-sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPlan {
    /// Priority ascending, non-priority ascending (`|maxP - minN|`)
    BothAscending,
    /// Priority ascending, non-priority descending (`|maxP - maxN|`)
    PriorityAscending,
    /// Priority descending, non-priority ascending (`|minP - minN|`)
    PriorityDescending,
    /// Priority descending, non-priority descending (`|minP - maxN|`)
    BothDescending,
}

impl SortPlan {
    /// All plans, in tie-break order: the first plan with the minimal junction distance wins
    pub const CANDIDATES: [SortPlan; 4] = [
        SortPlan::BothAscending,
        SortPlan::PriorityAscending,
        SortPlan::PriorityDescending,
        SortPlan::BothDescending,
    ];

    pub fn priority_direction(self) -> SortDirection {
        match self {
            SortPlan::BothAscending | SortPlan::PriorityAscending => SortDirection::Ascending,
            SortPlan::PriorityDescending | SortPlan::BothDescending => SortDirection::Descending,
        }
    }

    pub fn non_priority_direction(self) -> SortDirection {
        match self {
            SortPlan::BothAscending | SortPlan::PriorityDescending => SortDirection::Ascending,
            SortPlan::PriorityAscending | SortPlan::BothDescending => SortDirection::Descending,
        }
    }

    /// Distance from the last priority room to the first non-priority room under this plan
    pub fn junction_distance(self, priority: RoomSpan, non_priority: RoomSpan) -> u64 {
        let last_priority = priority.last(self.priority_direction());
        let first_non_priority = non_priority.first(self.non_priority_direction());
        last_priority.abs_diff(first_non_priority)
    }
}

/// Pick the plan with the shortest junction.
///
/// Returns `None` when either sub-sequence is empty, since there is no junction
/// to minimize.
pub fn select_sort_plan(priority_rooms: &[Room], non_priority_rooms: &[Room]) -> Option<SortPlan> {
    let priority = RoomSpan::of(priority_rooms)?;
    let non_priority = RoomSpan::of(non_priority_rooms)?;

    // min_by_key keeps the first of several equal minima
    SortPlan::CANDIDATES
        .into_iter()
        .min_by_key(|plan| plan.junction_distance(priority, non_priority))
}

/// Order a single raw batch against the global priority set
pub fn optimize_batch(raw_batch: &[Room], priority_set: &HashSet<Room>) -> Batch {
    let unique_rooms: HashSet<Room> = raw_batch.iter().copied().collect();
    let (mut priority_rooms, mut non_priority_rooms): (Vec<Room>, Vec<Room>) = unique_rooms
        .into_iter()
        .partition(|room| priority_set.contains(room));

    match select_sort_plan(&priority_rooms, &non_priority_rooms) {
        Some(plan) => {
            debug!(
                ?plan,
                priority = priority_rooms.len(),
                non_priority = non_priority_rooms.len(),
                "Selected batch sort plan"
            );
            plan.priority_direction().apply(&mut priority_rooms);
            plan.non_priority_direction().apply(&mut non_priority_rooms);
        }
        None => {
            // Only one sub-sequence has rooms; ascending by convention
            SortDirection::Ascending.apply(&mut priority_rooms);
            SortDirection::Ascending.apply(&mut non_priority_rooms);
        }
    }

    Batch::new(priority_rooms, non_priority_rooms)
}

/// Order the rooms within every batch, keeping the batch order as given.
///
/// Fails with `InvalidInput` if any raw batch is empty.
pub fn optimize_batches(raw_batches: &[Vec<Room>], priority_rooms: &[Room]) -> PlannerResult<Vec<Batch>> {
    if let Some(index) = raw_batches.iter().position(|batch| batch.is_empty()) {
        return Err(PlannerError::invalid_input(format!(
            "raw batch at index {index} contains no rooms"
        )));
    }

    let priority_set: HashSet<Room> = priority_rooms.iter().copied().collect();

    Ok(raw_batches
        .iter()
        .map(|raw_batch| optimize_batch(raw_batch, &priority_set))
        .collect())
}
