//! Crate-wide error taxonomy.
//!
//! Fatal conditions abort a generation run with no partial timetable.
//! Per-(course, group) placement gaps are not errors; they are recorded
//! as [`Shortfall`](crate::models::Shortfall) data on the completed
//! timetable and the run finishes normally.

use thiserror::Error;

use crate::models::SlotKey;

/// Errors that abort slot generation or a scheduling run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// Malformed period/break configuration. Raised before any slot is
    /// emitted; scheduling never starts.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The slot set contains no lecture slots, so nothing can be placed.
    #[error("no usable lecture slots in the slot set")]
    EmptySlotSet,

    /// The slot set was derived from a configuration other than the one
    /// supplied with the request. Regenerate the slots first.
    #[error("slot set is stale: it was not derived from the current period configuration")]
    StaleSlotConfiguration,

    /// A commit found one of its three (entity, slot) pairs already
    /// occupied. Callers query the tracker before committing, so this
    /// indicates a bug in the engine, not bad input.
    #[error("double booking: {entity} '{id}' is already occupied on {slot}")]
    DoubleBooking {
        /// Which booking dimension collided.
        entity: BookingEntity,
        /// Identifier of the colliding faculty, room, or group.
        id: String,
        /// The contested lecture slot.
        slot: SlotKey,
    },
}

/// The three booking dimensions tracked during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingEntity {
    Faculty,
    Room,
    Group,
}

impl std::fmt::Display for BookingEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingEntity::Faculty => write!(f, "faculty"),
            BookingEntity::Room => write!(f, "room"),
            BookingEntity::Group => write!(f, "group"),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;
