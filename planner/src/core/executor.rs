//! Greedy route execution
//!
//! Walks the optimized batches nearest-first: from the current room, the batch
//! whose first room is closest is cleaned next, in its stored room order. The
//! walk records every visited room and how many rooms were passed along the way
//! without being cleaned.

use shared::{Batch, PassedCount, Room};
use tracing::debug;

/// Result of walking a job's batches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOutcome {
    /// Start room followed by every cleaned room, in visiting order
    pub path_taken: Vec<Room>,
    pub num_rooms_passed_without_cleaning: PassedCount,
}

/// Rooms strictly between two rooms.
///
/// Moving from 2 to 4 passes room 3; staying put or moving to a neighbour passes nothing.
pub fn rooms_passed_between(from: Room, to: Room) -> u64 {
    from.abs_diff(to).saturating_sub(1)
}

/// Rooms passed while travelling from `from` through `rooms` in order
pub fn rooms_passed_along(from: Room, rooms: &[Room]) -> PassedCount {
    let mut previous = from;
    let mut passed = 0;
    for &room in rooms {
        passed += PassedCount::from(rooms_passed_between(previous, room));
        previous = room;
    }
    passed
}

/// Index of the batch whose first room is nearest to `from`.
///
/// Ties go to the earliest batch. Batches without rooms are never selected.
pub fn nearest_batch_index(from: Room, remaining: &[&Batch]) -> Option<usize> {
    remaining
        .iter()
        .enumerate()
        .filter_map(|(index, batch)| batch.first_room().map(|first| (index, first.abs_diff(from))))
        .min_by_key(|&(_, distance)| distance)
        .map(|(index, _)| index)
}

/// Walk all batches nearest-first starting at `start_room`.
///
/// The caller's batches are only borrowed; the working set is a separate list
/// of references that shrinks by one batch per step.
pub fn execute_route(batches: &[Batch], start_room: Room) -> RouteOutcome {
    let mut remaining: Vec<&Batch> = batches.iter().filter(|batch| !batch.is_empty()).collect();
    let room_count: usize = remaining.iter().map(|batch| batch.len()).sum();

    let mut path_taken = Vec::with_capacity(1 + room_count);
    path_taken.push(start_room);

    let mut current_room = start_room;
    let mut passed = 0;

    while let Some(index) = nearest_batch_index(current_room, &remaining) {
        let batch = remaining.remove(index);
        let step_passed = rooms_passed_along(current_room, batch.all_rooms());

        debug!(
            from = current_room,
            entry = ?batch.first_room(),
            rooms = batch.len(),
            passed = step_passed,
            "Cleaning nearest batch"
        );

        passed += step_passed;
        path_taken.extend_from_slice(batch.all_rooms());
        if let Some(last) = batch.last_room() {
            current_room = last;
        }
    }

    RouteOutcome {
        path_taken,
        num_rooms_passed_without_cleaning: passed,
    }
}
