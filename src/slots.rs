//! Time slot derivation.
//!
//! Turns a [`PeriodConfig`] and its break list into the ordered slot
//! sequence of the teaching week. Pure and deterministic: the same
//! configuration always yields byte-identical slots, and regenerating
//! after a configuration edit produces a fresh [`SlotSet`] that
//! supersedes any timetable built on the old one.
//!
//! # Algorithm
//!
//! Per configured day, starting at `day_start_time`: emit breaks with
//! `after_period == 0`, then periods 1..=periods_per_day, inserting
//! after period *p* every break whose `after_period == p`. Breaks
//! sharing an `after_period` are emitted in ascending `order`. The
//! running clock advances by each emitted slot's duration.

use chrono::{Duration, NaiveTime};

use crate::error::{Result, ScheduleError};
use crate::models::{BreakConfig, PeriodConfig, SlotKind, SlotSet, TimeSlot, Weekday};

/// Derives the slot set for the given configuration.
///
/// Produces exactly `periods_per_day` lecture slots and `breaks.len()`
/// break slots per configured day, in strictly increasing time order.
///
/// # Errors
/// `InvalidConfiguration` when the configuration cannot describe a
/// well-formed day: zero periods, zero durations, a break positioned
/// after a nonexistent period, an empty or duplicated day list, or a
/// day that would run past midnight.
pub fn generate_slots(config: &PeriodConfig, breaks: &[BreakConfig]) -> Result<SlotSet> {
    validate(config, breaks)?;

    let mut ordered: Vec<&BreakConfig> = breaks.iter().collect();
    ordered.sort_by_key(|b| (b.after_period, b.order));

    let per_day = config.periods_per_day as usize + breaks.len();
    let mut slots = Vec::with_capacity(config.days_of_week.len() * per_day);

    for &day in &config.days_of_week {
        let mut clock = config.day_start_time;

        for brk in ordered.iter().filter(|b| b.after_period == 0) {
            clock = emit_break(&mut slots, day, brk, clock)?;
        }

        for period in 1..=config.periods_per_day {
            let end = advance(clock, config.period_duration_minutes)?;
            slots.push(TimeSlot {
                day,
                kind: SlotKind::Lecture { period },
                start: clock,
                end,
            });
            clock = end;

            for brk in ordered.iter().filter(|b| b.after_period == period) {
                clock = emit_break(&mut slots, day, brk, clock)?;
            }
        }
    }

    Ok(SlotSet::new(config.clone(), breaks.to_vec(), slots))
}

fn emit_break(
    slots: &mut Vec<TimeSlot>,
    day: Weekday,
    brk: &BreakConfig,
    start: NaiveTime,
) -> Result<NaiveTime> {
    let end = advance(start, brk.duration_minutes)?;
    slots.push(TimeSlot {
        day,
        kind: SlotKind::Break {
            name: brk.name.clone(),
        },
        start,
        end,
    });
    Ok(end)
}

/// Advances the day clock, rejecting wrap past midnight.
///
/// `NaiveTime` arithmetic wraps silently, which would break the
/// strictly-increasing slot invariant.
fn advance(time: NaiveTime, minutes: u32) -> Result<NaiveTime> {
    let (next, overflow) = time.overflowing_add_signed(Duration::minutes(i64::from(minutes)));
    if overflow != 0 {
        return Err(ScheduleError::InvalidConfiguration(
            "teaching day runs past midnight".into(),
        ));
    }
    Ok(next)
}

fn validate(config: &PeriodConfig, breaks: &[BreakConfig]) -> Result<()> {
    if config.periods_per_day < 1 {
        return Err(ScheduleError::InvalidConfiguration(
            "periods_per_day must be at least 1".into(),
        ));
    }
    if config.period_duration_minutes < 1 {
        return Err(ScheduleError::InvalidConfiguration(
            "period_duration_minutes must be at least 1".into(),
        ));
    }
    if config.days_of_week.is_empty() {
        return Err(ScheduleError::InvalidConfiguration(
            "days_of_week must not be empty".into(),
        ));
    }
    for (i, day) in config.days_of_week.iter().enumerate() {
        if config.days_of_week[..i].contains(day) {
            return Err(ScheduleError::InvalidConfiguration(format!(
                "duplicate day in days_of_week: {day}"
            )));
        }
    }
    for brk in breaks {
        if brk.after_period > config.periods_per_day {
            return Err(ScheduleError::InvalidConfiguration(format!(
                "break '{}' positioned after period {} but the day has only {} periods",
                brk.name, brk.after_period, config.periods_per_day
            )));
        }
        if brk.duration_minutes < 1 {
            return Err(ScheduleError::InvalidConfiguration(format!(
                "break '{}' must last at least 1 minute",
                brk.name
            )));
        }
    }
    Ok(())
}
