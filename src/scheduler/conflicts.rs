//! Booking conflict tracker.
//!
//! In-memory occupancy bookkeeping for a single generation run. Three
//! independent structures answer, in O(1) expected time, whether a
//! (faculty, slot), (room, slot), or (group, slot) pairing is free.
//!
//! A tracker is a plain value scoped to one run: constructed fresh by
//! the engine, mutated only through [`commit`](ConflictTracker::commit),
//! and dropped with the run. Committed pairings are never released:
//! the engine does not backtrack.

use std::collections::{HashMap, HashSet};

use crate::error::{BookingEntity, Result, ScheduleError};
use crate::models::{SlotKey, TimetableEntry};

/// Occupancy state for one scheduling run.
#[derive(Debug, Clone, Default)]
pub struct ConflictTracker {
    faculty: HashMap<String, HashSet<SlotKey>>,
    rooms: HashMap<String, HashSet<SlotKey>>,
    groups: HashMap<String, HashSet<SlotKey>>,
}

impl ConflictTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the faculty member is free in the slot.
    pub fn faculty_free(&self, faculty_id: &str, slot: SlotKey) -> bool {
        is_free(&self.faculty, faculty_id, slot)
    }

    /// Whether the room is free in the slot.
    pub fn room_free(&self, room_id: &str, slot: SlotKey) -> bool {
        is_free(&self.rooms, room_id, slot)
    }

    /// Whether the student group is free in the slot.
    pub fn group_free(&self, group_id: &str, slot: SlotKey) -> bool {
        is_free(&self.groups, group_id, slot)
    }

    /// Marks the entry's faculty, room, and group pairings occupied.
    ///
    /// # Errors
    /// `DoubleBooking` if any of the three pairings was already
    /// occupied. Callers query the `*_free` methods first, so an error
    /// here means the engine itself constructed a conflicting entry,
    /// which is an internal bug, never expected in normal operation.
    pub fn commit(&mut self, entry: &TimetableEntry) -> Result<()> {
        if !self.faculty_free(&entry.faculty_id, entry.slot) {
            return Err(double_booking(BookingEntity::Faculty, &entry.faculty_id, entry.slot));
        }
        if !self.room_free(&entry.room_id, entry.slot) {
            return Err(double_booking(BookingEntity::Room, &entry.room_id, entry.slot));
        }
        if !self.group_free(&entry.group_id, entry.slot) {
            return Err(double_booking(BookingEntity::Group, &entry.group_id, entry.slot));
        }

        occupy(&mut self.faculty, &entry.faculty_id, entry.slot);
        occupy(&mut self.rooms, &entry.room_id, entry.slot);
        occupy(&mut self.groups, &entry.group_id, entry.slot);
        Ok(())
    }
}

fn is_free(map: &HashMap<String, HashSet<SlotKey>>, id: &str, slot: SlotKey) -> bool {
    map.get(id).map_or(true, |slots| !slots.contains(&slot))
}

fn occupy(map: &mut HashMap<String, HashSet<SlotKey>>, id: &str, slot: SlotKey) {
    map.entry(id.to_string()).or_default().insert(slot);
}

fn double_booking(entity: BookingEntity, id: &str, slot: SlotKey) -> ScheduleError {
    ScheduleError::DoubleBooking {
        entity,
        id: id.to_string(),
        slot,
    }
}
