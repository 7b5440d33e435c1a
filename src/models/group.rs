//! Student group model.

use serde::{Deserialize, Serialize};

/// A cohort of students scheduled together, e.g. "FYUP-A".
///
/// The group's course list defines what must appear on its timetable;
/// the embedding system derives it from enrolled students' course sets
/// or configures it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentGroup {
    /// Unique group identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Number of students, when known. Rooms must seat this many.
    pub size: Option<u32>,
    /// Course codes this group must attend.
    pub courses: Vec<String>,
}

impl StudentGroup {
    /// Creates a group.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            size: None,
            courses: Vec::new(),
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the group size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Adds a required course.
    pub fn with_course(mut self, course_code: impl Into<String>) -> Self {
        self.courses.push(course_code.into());
        self
    }

    /// Whether this group requires the given course.
    pub fn requires(&self, course_code: &str) -> bool {
        self.courses.iter().any(|c| c == course_code)
    }
}
