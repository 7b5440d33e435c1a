//! Shortfall reporting.
//!
//! Recomputes under-scheduling warnings from a committed entry set at
//! any time, independently of the run that produced it. Purely
//! derived and restartable: invoking [`shortfall_warnings`] again on
//! the same inputs yields the same sequence.
//!
//! The generation run records the same gaps with a concrete cause
//! attached; this recomputation only sees required-versus-placed
//! counts, so its warnings carry no cause.

use crate::models::{Course, Shortfall, StudentGroup, TimetableEntry};

/// Lazily yields a warning for every (course, group) pair whose placed
/// weekly hours fall short of the required hours.
///
/// Pairs are visited in group order, then in each group's course
/// order. Course codes a group requires but no course defines are
/// skipped — input validation reports those.
pub fn shortfall_warnings<'a>(
    courses: &'a [Course],
    groups: &'a [StudentGroup],
    entries: &'a [TimetableEntry],
) -> impl Iterator<Item = Shortfall> + 'a {
    groups
        .iter()
        .flat_map(|group| group.courses.iter().map(move |code| (group, code)))
        .filter_map(move |(group, code)| {
            let required = courses
                .iter()
                .find(|c| &c.code == code)
                .map(|c| c.hours_per_week)?;
            let placed = entries
                .iter()
                .filter(|e| &e.course_code == code && e.group_id == group.id)
                .count() as u32;
            (placed < required).then(|| Shortfall {
                course_code: code.clone(),
                group_id: group.id.clone(),
                required,
                placed,
                reason: None,
            })
        })
}
