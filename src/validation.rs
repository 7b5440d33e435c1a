//! Input validation for timetabling problems.
//!
//! Checks structural integrity of courses, faculty, rooms, and student
//! groups before scheduling. Detects:
//! - Duplicate identifiers
//! - References to unknown course codes
//! - Groups with nothing to schedule
//! - Zero-valued quantities the type system cannot exclude
//!
//! The embedding application runs this before a generation run; the
//! engine itself assumes clean input.

use std::collections::HashSet;

use crate::models::{Course, Faculty, Room, StudentGroup};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identifier.
    DuplicateId,
    /// A group or faculty member references a course that doesn't exist.
    UnknownCourse,
    /// A group requires no courses.
    EmptyGroup,
    /// A quantity that must be positive is zero, or a range is inverted.
    InvalidValue,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input records for a timetabling problem.
///
/// Checks:
/// 1. No duplicate course codes, faculty ids, room ids, or group ids
/// 2. Positive credits, hours-per-week, and room capacities
/// 3. Faculty hour bounds not inverted
/// 4. Every group requires at least one course
/// 5. Group course lists and faculty expertise reference existing courses
/// 6. Group sizes, when given, are positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    courses: &[Course],
    faculty: &[Faculty],
    rooms: &[Room],
    groups: &[StudentGroup],
) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect course codes
    let mut course_codes = HashSet::new();
    for course in courses {
        if !course_codes.insert(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course code: {}", course.code),
            ));
        }
        if course.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!("Course '{}' has zero credits", course.code),
            ));
        }
        if course.hours_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!("Course '{}' requires zero hours per week", course.code),
            ));
        }
    }

    let mut faculty_ids = HashSet::new();
    for member in faculty {
        if !faculty_ids.insert(member.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", member.id),
            ));
        }
        if member.min_hours_per_week > member.max_hours_per_week {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!(
                    "Faculty '{}' has inverted hour bounds ({}..{})",
                    member.id, member.min_hours_per_week, member.max_hours_per_week
                ),
            ));
        }
        for code in &member.expertise {
            if !course_codes.contains(code.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCourse,
                    format!(
                        "Faculty '{}' lists expertise in unknown course '{code}'",
                        member.id
                    ),
                ));
            }
        }
    }

    let mut room_ids = HashSet::new();
    for room in rooms {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }
        if room.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!("Room '{}' has zero capacity", room.id),
            ));
        }
    }

    let mut group_ids = HashSet::new();
    for group in groups {
        if !group_ids.insert(group.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate group ID: {}", group.id),
            ));
        }
        if group.courses.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyGroup,
                format!("Group '{}' requires no courses", group.id),
            ));
        }
        if group.size == Some(0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!("Group '{}' has zero size", group.id),
            ));
        }
        for code in &group.courses {
            if !course_codes.contains(code.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCourse,
                    format!("Group '{}' requires unknown course '{code}'", group.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
