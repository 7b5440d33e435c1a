//! Timetable (solution) model.
//!
//! A timetable is the complete output of one generation run: the
//! committed lecture entries plus the shortfalls for everything that
//! could not legally be placed. Each run replaces the previous entry
//! set wholesale; there are no incremental edits.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{SlotKey, Weekday};

/// One committed lecture: a course taught by a faculty member in a
/// room during a lecture slot for a student group.
///
/// Start/end times are denormalized from the slot set for query
/// convenience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Scheduled course code.
    pub course_code: String,
    /// Assigned faculty identifier.
    pub faculty_id: String,
    /// Assigned room identifier.
    pub room_id: String,
    /// Student group attending.
    pub group_id: String,
    /// The lecture slot occupied.
    pub slot: SlotKey,
    /// Slot start time.
    pub start: NaiveTime,
    /// Slot end time.
    pub end: NaiveTime,
}

/// Why a (course, group) pair ended up under-scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortfallReason {
    /// No faculty member has the course in their expertise set.
    NoEligibleFaculty,
    /// No room of the matching kind satisfies capacity and tags.
    NoEligibleRoom,
    /// Eligible faculty and rooms exist, but no conflict-free slot
    /// remained for some required instance.
    NoFreeSlot,
}

/// A gap between required and placed weekly hours for one
/// (course, group) pair.
///
/// Shortfalls are warnings, not errors: the run that produced them
/// completed successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    /// Under-scheduled course code.
    pub course_code: String,
    /// Affected student group.
    pub group_id: String,
    /// Weekly lecture instances required.
    pub required: u32,
    /// Instances actually placed.
    pub placed: u32,
    /// Cause, when known. The generation run always records one; a
    /// recomputation from the bare entry set cannot distinguish causes
    /// and leaves this empty.
    pub reason: Option<ShortfallReason>,
}

impl Shortfall {
    /// Hours still missing for this pair.
    #[inline]
    pub fn missing(&self) -> u32 {
        self.required.saturating_sub(self.placed)
    }
}

impl std::fmt::Display for Shortfall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "course '{}' for group '{}': {}/{} hours placed",
            self.course_code, self.group_id, self.placed, self.required
        )
    }
}

/// The complete result of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Committed lecture entries.
    pub entries: Vec<TimetableEntry>,
    /// Under-scheduled (course, group) pairs.
    pub shortfalls: Vec<Shortfall>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    pub fn add_entry(&mut self, entry: TimetableEntry) {
        self.entries.push(entry);
    }

    /// Adds a shortfall.
    pub fn add_shortfall(&mut self, shortfall: Shortfall) {
        self.shortfalls.push(shortfall);
    }

    /// Whether every required hour was placed.
    pub fn is_fully_placed(&self) -> bool {
        self.shortfalls.is_empty()
    }

    /// Number of committed entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries on a given day, in slot order.
    pub fn entries_for_day(&self, day: Weekday) -> Vec<&TimetableEntry> {
        let mut entries: Vec<&TimetableEntry> =
            self.entries.iter().filter(|e| e.slot.day == day).collect();
        entries.sort_by_key(|e| e.slot);
        entries
    }

    /// Entries for a given student group.
    pub fn entries_for_group(&self, group_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.group_id == group_id)
            .collect()
    }

    /// Entries taught by a given faculty member.
    pub fn entries_for_faculty(&self, faculty_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.faculty_id == faculty_id)
            .collect()
    }

    /// Entries held in a given room.
    pub fn entries_for_room(&self, room_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.room_id == room_id)
            .collect()
    }

    /// Placed weekly hours for a (course, group) pair.
    pub fn hours_placed(&self, course_code: &str, group_id: &str) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.course_code == course_code && e.group_id == group_id)
            .count() as u32
    }
}
