use super::EngineRules;
use super::duration::{ceil_minutes, minutes_for_code, minutes_to_hours};
use crate::models::computed_day::{ComputedDay, DayCategory};
use crate::models::day_record::DayRecord;
use crate::models::shift_code::CodeRegistry;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Night wins over Free: a night day with zero hours (misconfigured
/// code) is still shown as a night.
pub fn categorize(record: &DayRecord, total_minutes: i64, rules: &EngineRules) -> DayCategory {
    if record.codes.contains(&rules.night_code) {
        DayCategory::Night
    } else if total_minutes == 0 {
        DayCategory::Free
    } else {
        DayCategory::Shift
    }
}

pub fn compute_day(record: &DayRecord, registry: &CodeRegistry, rules: &EngineRules) -> ComputedDay {
    // every occurrence is billed, duplicates included
    let shift_minutes = record
        .codes
        .iter()
        .map(|code| minutes_for_code(code, registry, rules))
        .fold(0i64, i64::saturating_add);

    let training_minutes = ceil_minutes(record.training_hours);
    let overtime_minutes = i64::from(record.overtime_minutes);

    // saturating: a total is never negative
    let total_minutes = shift_minutes
        .saturating_add(training_minutes)
        .saturating_add(overtime_minutes);

    ComputedDay {
        date: record.date,
        codes: record.codes.clone(),
        shift_hours: minutes_to_hours(shift_minutes),
        training_hours: minutes_to_hours(training_minutes),
        overtime_hours: minutes_to_hours(overtime_minutes),
        total_hours: round2(minutes_to_hours(total_minutes)),
        category: categorize(record, total_minutes, rules),
    }
}
