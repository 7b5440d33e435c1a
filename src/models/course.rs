//! Course model.
//!
//! A course is the unit of work to be timetabled: each student group
//! that requires it must receive `hours_per_week` lecture instances.

use serde::{Deserialize, Serialize};

/// Course delivery kind. Determines the eligible room pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseKind {
    /// Taught in a classroom.
    Theory,
    /// Taught in a lab.
    Practical,
}

/// A course to be placed on the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code, e.g. "CS101".
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Credit weight. Higher-credit courses are placed first.
    pub credits: u32,
    /// Theory or practical.
    pub kind: CourseKind,
    /// Lecture instances required per student group per week.
    pub hours_per_week: u32,
    /// Room tags this course demands, e.g. "computer-lab".
    /// Empty = any room of the matching kind qualifies.
    pub required_room_tags: Vec<String>,
}

impl Course {
    /// Creates a course with the given code and kind.
    pub fn new(code: impl Into<String>, kind: CourseKind) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            credits: 1,
            kind,
            hours_per_week: 1,
            required_room_tags: Vec::new(),
        }
    }

    /// Creates a theory course.
    pub fn theory(code: impl Into<String>) -> Self {
        Self::new(code, CourseKind::Theory)
    }

    /// Creates a practical course.
    pub fn practical(code: impl Into<String>) -> Self {
        Self::new(code, CourseKind::Practical)
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit weight.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the required weekly lecture instances per group.
    pub fn with_hours_per_week(mut self, hours: u32) -> Self {
        self.hours_per_week = hours;
        self
    }

    /// Adds a required room tag.
    pub fn with_room_tag(mut self, tag: impl Into<String>) -> Self {
        self.required_room_tags.push(tag.into());
        self
    }
}
