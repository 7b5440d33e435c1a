//! Time slot models.
//!
//! A [`TimeSlot`] is a concrete (day, interval) unit of the teaching
//! week — either a lecture period or a break — with computed start and
//! end times. Slots are never created directly: they are derived from
//! the period/break configuration by [`crate::slots::generate_slots`]
//! and carried together in a [`SlotSet`].
//!
//! Lecture slots are identified by a [`SlotKey`] (day + period index).
//! Breaks have no period index; they are retained for display but are
//! never bookable.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{BreakConfig, PeriodConfig, Weekday};

/// Identity of a lecture slot: one period on one day.
///
/// Used as the booking key by the conflict tracker and carried on
/// timetable entries. Ordered by (day, period) so slot scans are
/// deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SlotKey {
    /// Day of the week.
    pub day: Weekday,
    /// Period index, 1-based among lecture slots of that day.
    pub period: u32,
}

impl SlotKey {
    /// Creates a slot key.
    pub fn new(day: Weekday, period: u32) -> Self {
        Self { day, period }
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} P{}", self.day, self.period)
    }
}

/// What a slot holds: a numbered lecture period or a named break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    /// A teaching interval, indexed 1..=periods_per_day within its day.
    Lecture {
        /// Period index within the day.
        period: u32,
    },
    /// A non-teaching interval.
    Break {
        /// Break display name, e.g. "Lunch Break".
        name: String,
    },
}

/// A concrete interval of the teaching week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day of the week.
    pub day: Weekday,
    /// Lecture period or break.
    pub kind: SlotKind,
    /// Interval start (inclusive).
    pub start: NaiveTime,
    /// Interval end (exclusive).
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Whether this slot is a break.
    pub fn is_break(&self) -> bool {
        matches!(self.kind, SlotKind::Break { .. })
    }

    /// The booking key, if this is a lecture slot.
    pub fn key(&self) -> Option<SlotKey> {
        match self.kind {
            SlotKind::Lecture { period } => Some(SlotKey::new(self.day, period)),
            SlotKind::Break { .. } => None,
        }
    }

    /// Slot length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// The complete derived slot sequence for one configuration version.
///
/// Owns every slot of the teaching week plus a copy of the
/// configuration it was derived from, so a scheduling run can reject a
/// slot set that no longer matches the current configuration.
/// Serializable because the embedding system persists generated slots
/// between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSet {
    source_config: PeriodConfig,
    source_breaks: Vec<BreakConfig>,
    slots: Vec<TimeSlot>,
}

impl SlotSet {
    pub(crate) fn new(
        source_config: PeriodConfig,
        source_breaks: Vec<BreakConfig>,
        slots: Vec<TimeSlot>,
    ) -> Self {
        Self {
            source_config,
            source_breaks,
            slots,
        }
    }

    /// All slots, breaks included, in day-emission order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Slots of a single day, in time order.
    pub fn slots_for_day(&self, day: Weekday) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(move |s| s.day == day)
    }

    /// Lecture slots only, in day-emission order.
    pub fn lecture_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(|s| !s.is_break())
    }

    /// Booking keys of every lecture slot, sorted by (day, period).
    ///
    /// This is the candidate-slot scan order of the scheduling engine.
    pub fn lecture_keys(&self) -> Vec<SlotKey> {
        let mut keys: Vec<SlotKey> = self.slots.iter().filter_map(TimeSlot::key).collect();
        keys.sort();
        keys
    }

    /// Start/end times of a lecture slot, if it exists in this set.
    pub fn lecture_times(&self, key: SlotKey) -> Option<(NaiveTime, NaiveTime)> {
        self.slots
            .iter()
            .find(|s| s.key() == Some(key))
            .map(|s| (s.start, s.end))
    }

    /// Whether this set was derived from the given configuration.
    pub fn matches(&self, config: &PeriodConfig, breaks: &[BreakConfig]) -> bool {
        self.source_config == *config && self.source_breaks == breaks
    }

    /// Number of lecture slots across the whole week.
    pub fn lecture_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_break()).count()
    }
}
