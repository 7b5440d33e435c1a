//! Course timetabling engine.
//!
//! Derives a teaching week's time slots from an admin-supplied
//! period/break configuration and assigns every course's required
//! weekly lecture hours to (faculty, room, slot) tuples per student
//! group, guaranteeing that no faculty member, room, or group is ever
//! double-booked. Hours that cannot be placed are reported as
//! shortfalls rather than failing the run.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Faculty`, `Room`,
//!   `StudentGroup`, `PeriodConfig`, `BreakConfig`, `SlotSet`,
//!   `Timetable`
//! - **`slots`**: Slot derivation from the period/break configuration
//! - **`scheduler`**: Conflict tracking, greedy generation, KPIs
//! - **`report`**: Shortfall recomputation from a committed entry set
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown
//!   course references)
//!
//! # Scope
//!
//! The crate consumes and produces in-memory records only.
//! Authentication, persistence, and rendering live in the embedding
//! system: inputs are loaded up front and handed in as plain structs,
//! and each generation run returns a complete replacement timetable.
//! A run is single-threaded and deterministic; serializing concurrent
//! runs is the embedding system's responsibility.
//!
//! # Reference
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod slots;
pub mod validation;

pub use error::{Result, ScheduleError};
