//! Greedy timetable generation.
//!
//! # Algorithm
//!
//! 1. Sort courses by descending credits, practical before theory
//!    (practical sessions have the narrower room pool), course code
//!    ascending as the final tie-break.
//! 2. For each course, visit the student groups requiring it in
//!    ascending group-id order and place `hours_per_week` instances.
//! 3. For each instance, scan eligible faculty × eligible rooms ×
//!    lecture slots in that nested order and commit the first triple
//!    the conflict tracker accepts.
//! 4. When no triple remains for an instance, record a shortfall for
//!    the (course, group) pair and move on — a placement gap never
//!    aborts the run.
//!
//! Placements are never undone: a greedy commit can produce avoidable
//! shortfalls. A backtracking or constraint-propagation redesign would
//! be required to do better, which this engine deliberately does not
//! attempt.
//!
//! # Complexity
//! O(c · g · h · f · r · s) worst case over courses, groups, hours,
//! faculty, rooms, slots. Institutional inputs are small enough that
//! the run completes in bounded, short time.

use chrono::NaiveTime;
use tracing::{debug, info, warn};

use crate::error::{Result, ScheduleError};
use crate::models::{
    BreakConfig, Course, CourseKind, Faculty, PeriodConfig, Room, RoomKind, Shortfall,
    ShortfallReason, SlotKey, SlotSet, StudentGroup, Timetable, TimetableEntry,
};

use super::ConflictTracker;

/// Input snapshot for one generation run.
///
/// All records are loaded up front by the embedding system; the run
/// never performs I/O. The period configuration rides along so the
/// engine can verify the slot set was derived from it.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Courses to place.
    pub courses: Vec<Course>,
    /// Teaching staff.
    pub faculty: Vec<Faculty>,
    /// Available rooms.
    pub rooms: Vec<Room>,
    /// Student groups and their required courses.
    pub groups: Vec<StudentGroup>,
    /// Current period configuration.
    pub period_config: PeriodConfig,
    /// Current break configuration.
    pub breaks: Vec<BreakConfig>,
}

impl GenerationRequest {
    /// Creates a request with the default period configuration.
    pub fn new(
        courses: Vec<Course>,
        faculty: Vec<Faculty>,
        rooms: Vec<Room>,
        groups: Vec<StudentGroup>,
    ) -> Self {
        Self {
            courses,
            faculty,
            rooms,
            groups,
            period_config: PeriodConfig::default(),
            breaks: Vec::new(),
        }
    }

    /// Sets the period and break configuration.
    pub fn with_config(mut self, period_config: PeriodConfig, breaks: Vec<BreakConfig>) -> Self {
        self.period_config = period_config;
        self.breaks = breaks;
        self
    }
}

/// Deterministic greedy timetable generator.
///
/// Given identical inputs, produces identical entries and shortfalls —
/// no randomness, no backtracking across committed placements.
///
/// # Example
///
/// ```
/// use lectern::models::{Course, Faculty, Room, StudentGroup};
/// use lectern::scheduler::{GenerationRequest, TimetableGenerator};
/// use lectern::slots::generate_slots;
///
/// let request = GenerationRequest::new(
///     vec![Course::theory("CS101").with_hours_per_week(2)],
///     vec![Faculty::new("F1").with_expertise("CS101")],
///     vec![Room::classroom("R1", 60)],
///     vec![StudentGroup::new("G1").with_course("CS101")],
/// );
/// let slots = generate_slots(&request.period_config, &request.breaks).unwrap();
///
/// let timetable = TimetableGenerator::new().generate(&request, &slots).unwrap();
/// assert_eq!(timetable.entry_count(), 2);
/// assert!(timetable.is_fully_placed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator;

impl TimetableGenerator {
    /// Creates a generator.
    pub fn new() -> Self {
        Self
    }

    /// Runs one complete generation pass.
    ///
    /// The previous timetable, if any, is simply replaced by the
    /// returned one; the engine holds no state between runs.
    ///
    /// # Errors
    /// - `StaleSlotConfiguration` if `slots` was not derived from the
    ///   request's period/break configuration.
    /// - `EmptySlotSet` if there are no lecture slots to place into.
    /// - `DoubleBooking` on an internal tracker inconsistency.
    ///
    /// All errors abort with no partial timetable.
    pub fn generate(&self, request: &GenerationRequest, slots: &SlotSet) -> Result<Timetable> {
        if !slots.matches(&request.period_config, &request.breaks) {
            return Err(ScheduleError::StaleSlotConfiguration);
        }

        let lecture_slots = lecture_slots_in_scan_order(slots);
        if lecture_slots.is_empty() {
            return Err(ScheduleError::EmptySlotSet);
        }

        info!(
            courses = request.courses.len(),
            groups = request.groups.len(),
            faculty = request.faculty.len(),
            rooms = request.rooms.len(),
            lecture_slots = lecture_slots.len(),
            "starting timetable generation"
        );

        let mut tracker = ConflictTracker::new();
        let mut timetable = Timetable::new();

        for course in courses_by_priority(&request.courses) {
            let eligible_faculty = eligible_faculty(&request.faculty, &course.code);

            for group in groups_requiring(&request.groups, &course.code) {
                let required = course.hours_per_week;

                if eligible_faculty.is_empty() {
                    warn!(
                        course = %course.code,
                        group = %group.id,
                        "no faculty member can teach this course"
                    );
                    timetable.add_shortfall(shortfall(
                        course,
                        group,
                        0,
                        ShortfallReason::NoEligibleFaculty,
                    ));
                    continue;
                }

                let rooms = eligible_rooms(&request.rooms, course, group);
                if rooms.is_empty() {
                    warn!(
                        course = %course.code,
                        group = %group.id,
                        "no room satisfies kind, capacity, and tags"
                    );
                    timetable.add_shortfall(shortfall(
                        course,
                        group,
                        0,
                        ShortfallReason::NoEligibleRoom,
                    ));
                    continue;
                }

                let mut placed = 0;
                while placed < required {
                    match first_free_triple(&tracker, &eligible_faculty, &rooms, &lecture_slots, &group.id)
                    {
                        Some((faculty, room, key, start, end)) => {
                            let entry = TimetableEntry {
                                course_code: course.code.clone(),
                                faculty_id: faculty.id.clone(),
                                room_id: room.id.clone(),
                                group_id: group.id.clone(),
                                slot: key,
                                start,
                                end,
                            };
                            tracker.commit(&entry)?;
                            debug!(
                                course = %course.code,
                                group = %group.id,
                                faculty = %faculty.id,
                                room = %room.id,
                                slot = %key,
                                "placed lecture"
                            );
                            timetable.add_entry(entry);
                            placed += 1;
                        }
                        None => {
                            warn!(
                                course = %course.code,
                                group = %group.id,
                                placed,
                                required,
                                "no conflict-free slot remains"
                            );
                            timetable.add_shortfall(shortfall(
                                course,
                                group,
                                placed,
                                ShortfallReason::NoFreeSlot,
                            ));
                            break;
                        }
                    }
                }
            }
        }

        info!(
            entries = timetable.entry_count(),
            shortfalls = timetable.shortfalls.len(),
            "timetable generation finished"
        );
        Ok(timetable)
    }
}

/// Lecture slots with their times, in (day, period) scan order.
fn lecture_slots_in_scan_order(slots: &SlotSet) -> Vec<(SlotKey, NaiveTime, NaiveTime)> {
    let mut out: Vec<(SlotKey, NaiveTime, NaiveTime)> = slots
        .lecture_slots()
        .filter_map(|s| s.key().map(|k| (k, s.start, s.end)))
        .collect();
    out.sort_by_key(|(k, _, _)| *k);
    out
}

/// Courses in placement priority order: credits descending, practical
/// before theory, code ascending.
fn courses_by_priority(courses: &[Course]) -> Vec<&Course> {
    let mut ordered: Vec<&Course> = courses.iter().collect();
    ordered.sort_by(|a, b| {
        b.credits
            .cmp(&a.credits)
            .then_with(|| kind_rank(a.kind).cmp(&kind_rank(b.kind)))
            .then_with(|| a.code.cmp(&b.code))
    });
    ordered
}

fn kind_rank(kind: CourseKind) -> u8 {
    match kind {
        CourseKind::Practical => 0,
        CourseKind::Theory => 1,
    }
}

/// Groups requiring the course, ascending id.
fn groups_requiring<'a>(groups: &'a [StudentGroup], course_code: &str) -> Vec<&'a StudentGroup> {
    let mut out: Vec<&StudentGroup> = groups.iter().filter(|g| g.requires(course_code)).collect();
    out.sort_by(|a, b| a.id.cmp(&b.id));
    out
}

/// Faculty able to teach the course, ascending id.
fn eligible_faculty<'a>(faculty: &'a [Faculty], course_code: &str) -> Vec<&'a Faculty> {
    let mut out: Vec<&Faculty> = faculty.iter().filter(|f| f.can_teach(course_code)).collect();
    out.sort_by(|a, b| a.id.cmp(&b.id));
    out
}

/// Rooms of the matching kind, with sufficient capacity for the group
/// (any capacity qualifies when the group size is unknown) and every
/// tag the course requires, ascending id.
fn eligible_rooms<'a>(rooms: &'a [Room], course: &Course, group: &StudentGroup) -> Vec<&'a Room> {
    let needed_kind = RoomKind::for_course(course.kind);
    let mut out: Vec<&Room> = rooms
        .iter()
        .filter(|r| r.kind == needed_kind)
        .filter(|r| group.size.map_or(true, |size| r.capacity >= size))
        .filter(|r| r.has_tags(&course.required_room_tags))
        .collect();
    out.sort_by(|a, b| a.id.cmp(&b.id));
    out
}

/// First (faculty, room, slot) triple free on all three booking
/// dimensions, scanning faculty × room × slot in nested order.
fn first_free_triple<'a>(
    tracker: &ConflictTracker,
    faculty: &[&'a Faculty],
    rooms: &[&'a Room],
    slots: &[(SlotKey, NaiveTime, NaiveTime)],
    group_id: &str,
) -> Option<(&'a Faculty, &'a Room, SlotKey, NaiveTime, NaiveTime)> {
    for &f in faculty {
        for &r in rooms {
            for &(key, start, end) in slots {
                if tracker.faculty_free(&f.id, key)
                    && tracker.room_free(&r.id, key)
                    && tracker.group_free(group_id, key)
                {
                    return Some((f, r, key, start, end));
                }
            }
        }
    }
    None
}

fn shortfall(
    course: &Course,
    group: &StudentGroup,
    placed: u32,
    reason: ShortfallReason,
) -> Shortfall {
    Shortfall {
        course_code: course.code.clone(),
        group_id: group.id.clone(),
        required: course.hours_per_week,
        placed,
        reason: Some(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;
    use crate::slots::generate_slots;
    use chrono::NaiveTime;
    use std::collections::HashSet;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn config(periods: u32, days: Vec<Weekday>) -> PeriodConfig {
        PeriodConfig::new(periods, 60, t(9, 0)).with_days(days)
    }

    fn run(request: &GenerationRequest) -> Timetable {
        let slots = generate_slots(&request.period_config, &request.breaks).unwrap();
        TimetableGenerator::new().generate(request, &slots).unwrap()
    }

    /// No two entries may share a faculty, room, or group in a slot.
    fn assert_conflict_free(timetable: &Timetable) {
        for (i, a) in timetable.entries.iter().enumerate() {
            for b in &timetable.entries[i + 1..] {
                if a.slot == b.slot {
                    assert_ne!(a.faculty_id, b.faculty_id, "faculty double-booked: {a:?} {b:?}");
                    assert_ne!(a.room_id, b.room_id, "room double-booked: {a:?} {b:?}");
                    assert_ne!(a.group_id, b.group_id, "group double-booked: {a:?} {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_single_course_fully_placed() {
        let request = GenerationRequest::new(
            vec![Course::theory("CS101").with_hours_per_week(3)],
            vec![Faculty::new("F1").with_expertise("CS101")],
            vec![Room::classroom("R1", 60)],
            vec![StudentGroup::new("G1").with_course("CS101")],
        )
        .with_config(config(4, vec![Weekday::Monday]), vec![]);

        let timetable = run(&request);
        assert_eq!(timetable.entry_count(), 3);
        assert!(timetable.is_fully_placed());
        assert_conflict_free(&timetable);
    }

    #[test]
    fn test_shortfall_when_slots_exhausted() {
        // 2 hours required, only 1 lecture slot in the week.
        let request = GenerationRequest::new(
            vec![Course::theory("CS101").with_hours_per_week(2)],
            vec![Faculty::new("F1").with_expertise("CS101")],
            vec![Room::classroom("R1", 60)],
            vec![StudentGroup::new("G1").with_course("CS101")],
        )
        .with_config(config(1, vec![Weekday::Monday]), vec![]);

        let timetable = run(&request);
        assert_eq!(timetable.entry_count(), 1);
        assert_eq!(timetable.shortfalls.len(), 1);

        let s = &timetable.shortfalls[0];
        assert_eq!(s.course_code, "CS101");
        assert_eq!(s.group_id, "G1");
        assert_eq!(s.required, 2);
        assert_eq!(s.placed, 1);
        assert_eq!(s.missing(), 1);
        assert_eq!(s.reason, Some(ShortfallReason::NoFreeSlot));
    }

    #[test]
    fn test_two_groups_one_faculty_never_double_booked() {
        // Both groups need CS101; one qualified faculty member; two
        // slots in the week. Each group must land in a distinct slot.
        let request = GenerationRequest::new(
            vec![Course::theory("CS101").with_hours_per_week(1)],
            vec![Faculty::new("F1").with_expertise("CS101")],
            vec![Room::classroom("R1", 60), Room::classroom("R2", 60)],
            vec![
                StudentGroup::new("G1").with_course("CS101"),
                StudentGroup::new("G2").with_course("CS101"),
            ],
        )
        .with_config(config(2, vec![Weekday::Monday]), vec![]);

        let timetable = run(&request);
        assert_eq!(timetable.entry_count(), 2);
        assert!(timetable.is_fully_placed());
        assert_conflict_free(&timetable);

        let slots: HashSet<SlotKey> = timetable.entries.iter().map(|e| e.slot).collect();
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn test_two_groups_one_common_slot_one_deferred() {
        // One qualified faculty member with a single slot in the week:
        // exactly one group gets it, the other is a shortfall.
        let request = GenerationRequest::new(
            vec![Course::theory("CS101").with_hours_per_week(1)],
            vec![Faculty::new("F1").with_expertise("CS101")],
            vec![Room::classroom("R1", 60)],
            vec![
                StudentGroup::new("G1").with_course("CS101"),
                StudentGroup::new("G2").with_course("CS101"),
            ],
        )
        .with_config(config(1, vec![Weekday::Monday]), vec![]);

        let timetable = run(&request);
        assert_eq!(timetable.entry_count(), 1);
        assert_eq!(timetable.entries[0].group_id, "G1"); // ascending group order
        assert_eq!(timetable.shortfalls.len(), 1);
        assert_eq!(timetable.shortfalls[0].group_id, "G2");
        assert_conflict_free(&timetable);
    }

    #[test]
    fn test_no_eligible_faculty() {
        let request = GenerationRequest::new(
            vec![Course::theory("CS101").with_hours_per_week(2)],
            vec![Faculty::new("F1").with_expertise("MA101")],
            vec![Room::classroom("R1", 60)],
            vec![StudentGroup::new("G1").with_course("CS101")],
        )
        .with_config(config(4, vec![Weekday::Monday]), vec![]);

        let timetable = run(&request);
        assert_eq!(timetable.entry_count(), 0);
        assert_eq!(timetable.shortfalls.len(), 1);
        assert_eq!(timetable.shortfalls[0].placed, 0);
        assert_eq!(
            timetable.shortfalls[0].reason,
            Some(ShortfallReason::NoEligibleFaculty)
        );
    }

    #[test]
    fn test_no_eligible_room() {
        // Practical course but only classrooms available.
        let request = GenerationRequest::new(
            vec![Course::practical("CS102").with_hours_per_week(2)],
            vec![Faculty::new("F1").with_expertise("CS102")],
            vec![Room::classroom("R1", 60)],
            vec![StudentGroup::new("G1").with_course("CS102")],
        )
        .with_config(config(4, vec![Weekday::Monday]), vec![]);

        let timetable = run(&request);
        assert_eq!(timetable.entry_count(), 0);
        assert_eq!(
            timetable.shortfalls[0].reason,
            Some(ShortfallReason::NoEligibleRoom)
        );
    }

    #[test]
    fn test_room_capacity_respected() {
        let request = GenerationRequest::new(
            vec![Course::theory("CS101").with_hours_per_week(1)],
            vec![Faculty::new("F1").with_expertise("CS101")],
            vec![Room::classroom("R1", 30), Room::classroom("R2", 80)],
            vec![StudentGroup::new("G1").with_size(50).with_course("CS101")],
        )
        .with_config(config(2, vec![Weekday::Monday]), vec![]);

        let timetable = run(&request);
        assert_eq!(timetable.entry_count(), 1);
        assert_eq!(timetable.entries[0].room_id, "R2");
    }

    #[test]
    fn test_unknown_group_size_accepts_any_room() {
        let request = GenerationRequest::new(
            vec![Course::theory("CS101").with_hours_per_week(1)],
            vec![Faculty::new("F1").with_expertise("CS101")],
            vec![Room::classroom("R1", 5)],
            vec![StudentGroup::new("G1").with_course("CS101")],
        )
        .with_config(config(1, vec![Weekday::Monday]), vec![]);

        let timetable = run(&request);
        assert_eq!(timetable.entry_count(), 1);
    }

    #[test]
    fn test_required_room_tags_filter() {
        let request = GenerationRequest::new(
            vec![Course::practical("CS102")
                .with_hours_per_week(1)
                .with_room_tag("computer-lab")],
            vec![Faculty::new("F1").with_expertise("CS102")],
            vec![
                Room::lab("R1", 30), // no tag
                Room::lab("R2", 30).with_tag("computer-lab"),
            ],
            vec![StudentGroup::new("G1").with_course("CS102")],
        )
        .with_config(config(2, vec![Weekday::Monday]), vec![]);

        let timetable = run(&request);
        assert_eq!(timetable.entry_count(), 1);
        assert_eq!(timetable.entries[0].room_id, "R2");
    }

    #[test]
    fn test_practical_placed_before_theory_at_equal_credits() {
        // One slot only; the practical course must win it.
        let request = GenerationRequest::new(
            vec![
                Course::theory("AA101").with_credits(3).with_hours_per_week(1),
                Course::practical("ZZ102").with_credits(3).with_hours_per_week(1),
            ],
            vec![Faculty::new("F1")
                .with_expertise("AA101")
                .with_expertise("ZZ102")],
            vec![Room::classroom("R1", 60), Room::lab("R2", 30)],
            vec![StudentGroup::new("G1")
                .with_course("AA101")
                .with_course("ZZ102")],
        )
        .with_config(config(1, vec![Weekday::Monday]), vec![]);

        let timetable = run(&request);
        assert_eq!(timetable.entry_count(), 1);
        assert_eq!(timetable.entries[0].course_code, "ZZ102");
        assert_eq!(timetable.shortfalls[0].course_code, "AA101");
    }

    #[test]
    fn test_higher_credits_placed_first() {
        let request = GenerationRequest::new(
            vec![
                Course::theory("AA101").with_credits(1).with_hours_per_week(1),
                Course::theory("BB102").with_credits(5).with_hours_per_week(1),
            ],
            vec![Faculty::new("F1")
                .with_expertise("AA101")
                .with_expertise("BB102")],
            vec![Room::classroom("R1", 60)],
            vec![StudentGroup::new("G1")
                .with_course("AA101")
                .with_course("BB102")],
        )
        .with_config(config(1, vec![Weekday::Monday]), vec![]);

        let timetable = run(&request);
        assert_eq!(timetable.entries[0].course_code, "BB102");
        assert_eq!(timetable.shortfalls[0].course_code, "AA101");
    }

    #[test]
    fn test_deterministic_runs() {
        let request = GenerationRequest::new(
            vec![
                Course::theory("CS101").with_credits(4).with_hours_per_week(3),
                Course::practical("CS102").with_credits(2).with_hours_per_week(2),
                Course::theory("MA101").with_credits(4).with_hours_per_week(4),
            ],
            vec![
                Faculty::new("F1").with_expertise("CS101").with_expertise("CS102"),
                Faculty::new("F2").with_expertise("MA101").with_expertise("CS101"),
            ],
            vec![
                Room::classroom("R1", 60),
                Room::classroom("R2", 40),
                Room::lab("R3", 30),
            ],
            vec![
                StudentGroup::new("G1")
                    .with_course("CS101")
                    .with_course("CS102")
                    .with_course("MA101"),
                StudentGroup::new("G2").with_course("CS101").with_course("MA101"),
            ],
        )
        .with_config(
            config(4, vec![Weekday::Monday, Weekday::Tuesday]),
            vec![BreakConfig::new("Lunch Break", 2, 30)],
        );

        let first = run(&request);
        let second = run(&request);
        assert_eq!(first, second);
        assert_conflict_free(&first);
    }

    #[test]
    fn test_dense_input_stays_conflict_free() {
        let courses: Vec<Course> = (0..6)
            .map(|i| {
                Course::theory(format!("C{i:02}"))
                    .with_credits(i % 3 + 1)
                    .with_hours_per_week(2)
            })
            .collect();
        let faculty: Vec<Faculty> = (0..3)
            .map(|i| {
                let mut f = Faculty::new(format!("F{i}"));
                for c in &courses {
                    f = f.with_expertise(c.code.clone());
                }
                f
            })
            .collect();
        let rooms = vec![Room::classroom("R1", 60), Room::classroom("R2", 60)];
        let groups: Vec<StudentGroup> = (0..2)
            .map(|i| {
                let mut g = StudentGroup::new(format!("G{i}"));
                for c in &courses {
                    g = g.with_course(c.code.clone());
                }
                g
            })
            .collect();

        let request = GenerationRequest::new(courses, faculty, rooms, groups).with_config(
            config(4, vec![Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday]),
            vec![],
        );

        let timetable = run(&request);
        assert_conflict_free(&timetable);
        // 6 courses × 2 groups × 2 hours = 24 required; 2 rooms × 12
        // slots = 24 bookable room-slots, and each group has exactly
        // 12 slots for its 12 hours, so everything fits.
        assert_eq!(timetable.entry_count(), 24);
        assert!(timetable.is_fully_placed());
    }

    #[test]
    fn test_stale_slot_set_rejected() {
        let request = GenerationRequest::new(
            vec![Course::theory("CS101")],
            vec![Faculty::new("F1").with_expertise("CS101")],
            vec![Room::classroom("R1", 60)],
            vec![StudentGroup::new("G1").with_course("CS101")],
        )
        .with_config(config(4, vec![Weekday::Monday]), vec![]);

        // Slots derived from a different configuration.
        let other = config(5, vec![Weekday::Monday]);
        let stale = generate_slots(&other, &[]).unwrap();

        let err = TimetableGenerator::new().generate(&request, &stale).unwrap_err();
        assert_eq!(err, ScheduleError::StaleSlotConfiguration);
    }

    #[test]
    fn test_empty_slot_set_rejected() {
        let cfg = config(1, vec![Weekday::Monday]);
        let request = GenerationRequest::new(vec![], vec![], vec![], vec![])
            .with_config(cfg.clone(), vec![]);

        // A persisted slot set can legitimately arrive empty.
        let empty = SlotSet::new(cfg, vec![], vec![]);
        let err = TimetableGenerator::new().generate(&request, &empty).unwrap_err();
        assert_eq!(err, ScheduleError::EmptySlotSet);
    }

    #[test]
    fn test_from_json_fixture() {
        // Inputs arrive from the persistence collaborator as plain
        // serialized records.
        let request_json = serde_json::json!({
            "courses": [{
                "code": "CS101", "name": "Intro", "credits": 4,
                "kind": "Theory", "hours_per_week": 2, "required_room_tags": []
            }],
            "faculty": [{
                "id": "F1", "name": "Dr. Rao", "expertise": ["CS101"],
                "min_hours_per_week": 4, "max_hours_per_week": 16
            }],
            "rooms": [{
                "id": "R1", "name": "Main Hall", "capacity": 120,
                "kind": "Classroom", "tags": []
            }],
            "groups": [{
                "id": "G1", "name": "FYUP-A", "size": 40, "courses": ["CS101"]
            }]
        });

        let courses: Vec<Course> =
            serde_json::from_value(request_json["courses"].clone()).unwrap();
        let faculty: Vec<Faculty> =
            serde_json::from_value(request_json["faculty"].clone()).unwrap();
        let rooms: Vec<Room> = serde_json::from_value(request_json["rooms"].clone()).unwrap();
        let groups: Vec<StudentGroup> =
            serde_json::from_value(request_json["groups"].clone()).unwrap();

        let request = GenerationRequest::new(courses, faculty, rooms, groups)
            .with_config(config(2, vec![Weekday::Monday]), vec![]);

        let timetable = run(&request);
        assert_eq!(timetable.entry_count(), 2);
        assert!(timetable.is_fully_placed());
    }
}
