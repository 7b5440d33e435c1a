//! Period and break configuration.
//!
//! The admin-facing knobs that define the shape of a teaching day:
//! how many periods, how long they last, when the day starts, which
//! weekdays are taught, and where non-teaching breaks are inserted.
//!
//! Slots are always derived from this configuration (see
//! [`crate::slots::generate_slots`]); editing it invalidates any
//! previously generated slot set and any timetable built on top of it.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A day of the week.
///
/// Ordered by calendar position so slot scans proceed Monday first.
/// `Display` renders the full English name, matching the admin-facing
/// configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// The period structure of a teaching day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodConfig {
    /// Number of lecture periods per day. Must be at least 1.
    pub periods_per_day: u32,
    /// Duration of one lecture period in minutes. Must be at least 1.
    pub period_duration_minutes: u32,
    /// Time the first slot of the day begins.
    pub day_start_time: NaiveTime,
    /// Taught weekdays, in the order slots should be scanned.
    /// Must be non-empty and duplicate-free.
    pub days_of_week: Vec<Weekday>,
}

impl PeriodConfig {
    /// Creates a configuration with the given period structure and a
    /// Monday–Friday week.
    pub fn new(periods_per_day: u32, period_duration_minutes: u32, day_start_time: NaiveTime) -> Self {
        Self {
            periods_per_day,
            period_duration_minutes,
            day_start_time,
            days_of_week: vec![
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
            ],
        }
    }

    /// Sets the taught weekdays.
    pub fn with_days(mut self, days: Vec<Weekday>) -> Self {
        self.days_of_week = days;
        self
    }
}

impl Default for PeriodConfig {
    /// 8 periods of 60 minutes from 09:00, Monday–Friday.
    fn default() -> Self {
        Self::new(8, 60, NaiveTime::from_hms_opt(9, 0, 0).unwrap())
    }
}

/// A non-teaching interval inserted into the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakConfig {
    /// Display name, e.g. "Lunch Break".
    pub name: String,
    /// Period after which the break occurs. 0 places it before the
    /// first period; otherwise 1..=periods_per_day.
    pub after_period: u32,
    /// Break length in minutes. Must be at least 1.
    pub duration_minutes: u32,
    /// Emission order among breaks sharing the same `after_period`.
    pub order: u32,
}

impl BreakConfig {
    /// Creates a break after the given period.
    pub fn new(name: impl Into<String>, after_period: u32, duration_minutes: u32) -> Self {
        Self {
            name: name.into(),
            after_period,
            duration_minutes,
            order: 0,
        }
    }

    /// Sets the tie-break order among breaks at the same position.
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }
}
