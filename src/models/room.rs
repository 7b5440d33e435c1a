//! Room model.

use serde::{Deserialize, Serialize};

use super::CourseKind;

/// Room kind. Theory courses need classrooms, practical courses labs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    Classroom,
    Lab,
}

impl RoomKind {
    /// The room kind a course of the given kind must be taught in.
    pub fn for_course(kind: CourseKind) -> Self {
        match kind {
            CourseKind::Theory => RoomKind::Classroom,
            CourseKind::Practical => RoomKind::Lab,
        }
    }
}

/// A room lectures can be held in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name, e.g. "Lab 2".
    pub name: String,
    /// Seats available.
    pub capacity: u32,
    /// Classroom or lab.
    pub kind: RoomKind,
    /// Specialization tags, e.g. "computer-lab", "electronics".
    pub tags: Vec<String>,
}

impl Room {
    /// Creates a room of the given kind.
    pub fn new(id: impl Into<String>, kind: RoomKind, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity,
            kind,
            tags: Vec::new(),
        }
    }

    /// Creates a classroom.
    pub fn classroom(id: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, RoomKind::Classroom, capacity)
    }

    /// Creates a lab.
    pub fn lab(id: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, RoomKind::Lab, capacity)
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a specialization tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Whether this room carries every tag in `required`.
    pub fn has_tags(&self, required: &[String]) -> bool {
        required.iter().all(|t| self.tags.contains(t))
    }
}
