//! Timetabling domain models.
//!
//! Core data types for representing a timetabling problem and its
//! solution. Inputs (`Course`, `Faculty`, `Room`, `StudentGroup`,
//! `PeriodConfig`, `BreakConfig`) arrive from the embedding system as
//! plain records; derived types (`SlotSet`, `Timetable`) are produced
//! by this crate and handed back for persistence and display.
//!
//! All types are serde-serializable so the storage and rendering
//! collaborators can pass them through unchanged.

mod config;
mod course;
mod faculty;
mod group;
mod room;
mod slot;
mod timetable;

pub use config::{BreakConfig, PeriodConfig, Weekday};
pub use course::{Course, CourseKind};
pub use faculty::Faculty;
pub use group::StudentGroup;
pub use room::{Room, RoomKind};
pub use slot::{SlotKey, SlotKind, SlotSet, TimeSlot};
pub use timetable::{Shortfall, ShortfallReason, Timetable, TimetableEntry};
