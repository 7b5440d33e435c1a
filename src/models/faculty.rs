//! Faculty model.

use serde::{Deserialize, Serialize};

/// A faculty member who can be assigned to lectures.
///
/// Expertise is the set of course codes the member may teach; the
/// engine never assigns a course outside it. The weekly hour bounds do
/// not constrain placement — every generated slot is considered
/// available — but the KPI report flags faculty whose assigned load
/// falls outside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Course codes this member may teach.
    pub expertise: Vec<String>,
    /// Desired minimum teaching hours per week.
    pub min_hours_per_week: u32,
    /// Desired maximum teaching hours per week.
    pub max_hours_per_week: u32,
}

impl Faculty {
    /// Creates a faculty member with default hour bounds (4..=16).
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            expertise: Vec::new(),
            min_hours_per_week: 4,
            max_hours_per_week: 16,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a course code to the expertise set.
    pub fn with_expertise(mut self, course_code: impl Into<String>) -> Self {
        self.expertise.push(course_code.into());
        self
    }

    /// Sets the weekly hour bounds.
    pub fn with_hour_bounds(mut self, min: u32, max: u32) -> Self {
        self.min_hours_per_week = min;
        self.max_hours_per_week = max;
        self
    }

    /// Whether this member may teach the given course.
    pub fn can_teach(&self, course_code: &str) -> bool {
        self.expertise.iter().any(|c| c == course_code)
    }
}
