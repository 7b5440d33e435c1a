//! Timetable quality metrics (KPIs).
//!
//! Computes standard timetabling indicators from a completed timetable
//! and its inputs: placement coverage, per-faculty teaching load,
//! per-room slot utilization, and per-group lecture load.
//!
//! Faculty hour bounds are reported here as observations — a member
//! outside their desired weekly load is flagged, never rescheduled.

use std::collections::HashMap;

use crate::models::{Course, Faculty, StudentGroup, Timetable};

/// Timetable performance indicators.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Committed lecture entries.
    pub entry_count: usize,
    /// Weekly hours required across all (course, group) pairs.
    pub required_hours: u32,
    /// Weekly hours actually placed.
    pub placed_hours: u32,
    /// placed / required (1.0 when nothing was required).
    pub placement_rate: f64,
    /// Assigned weekly hours per faculty member.
    pub faculty_load: HashMap<String, u32>,
    /// Booked lecture slots / total lecture slots, per room.
    pub room_utilization: HashMap<String, f64>,
    /// Assigned weekly hours per student group.
    pub group_load: HashMap<String, u32>,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable and its inputs.
    ///
    /// # Arguments
    /// * `timetable` - The completed timetable.
    /// * `courses` - Input courses (for required weekly hours).
    /// * `groups` - Input groups (for their course requirements).
    /// * `lecture_slot_count` - Lecture slots in the week, the room
    ///   utilization denominator.
    pub fn calculate(
        timetable: &Timetable,
        courses: &[Course],
        groups: &[StudentGroup],
        lecture_slot_count: usize,
    ) -> Self {
        let hours_by_code: HashMap<&str, u32> = courses
            .iter()
            .map(|c| (c.code.as_str(), c.hours_per_week))
            .collect();

        let mut required_hours: u32 = 0;
        for group in groups {
            for code in &group.courses {
                if let Some(&hours) = hours_by_code.get(code.as_str()) {
                    required_hours += hours;
                }
            }
        }

        let mut faculty_load: HashMap<String, u32> = HashMap::new();
        let mut room_booked: HashMap<String, u32> = HashMap::new();
        let mut group_load: HashMap<String, u32> = HashMap::new();
        for entry in &timetable.entries {
            *faculty_load.entry(entry.faculty_id.clone()).or_insert(0) += 1;
            *room_booked.entry(entry.room_id.clone()).or_insert(0) += 1;
            *group_load.entry(entry.group_id.clone()).or_insert(0) += 1;
        }

        let room_utilization = if lecture_slot_count == 0 {
            HashMap::new()
        } else {
            room_booked
                .into_iter()
                .map(|(id, booked)| (id, f64::from(booked) / lecture_slot_count as f64))
                .collect()
        };

        let placed_hours = timetable.entry_count() as u32;
        let placement_rate = if required_hours == 0 {
            1.0
        } else {
            f64::from(placed_hours) / f64::from(required_hours)
        };

        Self {
            entry_count: timetable.entry_count(),
            required_hours,
            placed_hours,
            placement_rate,
            faculty_load,
            room_utilization,
            group_load,
        }
    }

    /// Whether every required hour was placed.
    pub fn fully_placed(&self) -> bool {
        self.placed_hours >= self.required_hours
    }

    /// Faculty assigned fewer weekly hours than their desired minimum.
    pub fn underloaded_faculty<'a>(&self, faculty: &'a [Faculty]) -> Vec<&'a Faculty> {
        faculty
            .iter()
            .filter(|f| self.load_for(&f.id) < f.min_hours_per_week)
            .collect()
    }

    /// Faculty assigned more weekly hours than their desired maximum.
    pub fn overloaded_faculty<'a>(&self, faculty: &'a [Faculty]) -> Vec<&'a Faculty> {
        faculty
            .iter()
            .filter(|f| self.load_for(&f.id) > f.max_hours_per_week)
            .collect()
    }

    fn load_for(&self, faculty_id: &str) -> u32 {
        self.faculty_load.get(faculty_id).copied().unwrap_or(0)
    }
}
