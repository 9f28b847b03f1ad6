//! Net hours of a single shift code.

use super::EngineRules;
use crate::models::shift_code::CodeRegistry;
use chrono::NaiveTime;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Slack (in minutes) absorbed before ceiling, so that values which are
/// whole minutes up to float noise are not pushed to the next minute.
const CEIL_TOLERANCE_MINUTES: f64 = 1e-9;

/// Whole minutes covering `hours`, rounding up. Negative, NaN and
/// infinite inputs give 0.
pub fn ceil_minutes(hours: f64) -> i64 {
    if !hours.is_finite() || hours <= 0.0 {
        return 0;
    }
    (hours * 60.0 - CEIL_TOLERANCE_MINUTES).ceil().max(0.0) as i64
}

/// Round `hours` up to the next whole minute (1/60 h).
pub fn ceil_to_minute(hours: f64) -> f64 {
    minutes_to_hours(ceil_minutes(hours))
}

pub fn minutes_to_hours(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}

/// Seconds from `start` to `end`; an end at or before the start is on
/// the next day.
pub fn shift_span_seconds(start: NaiveTime, end: NaiveTime) -> i64 {
    let span = (end - start).num_seconds();
    if end <= start {
        span + SECONDS_PER_DAY
    } else {
        span
    }
}

/// Net whole minutes a code is worth: span minus break, floored at zero,
/// rounded up to the minute.
pub fn minutes_for_code(code: &str, registry: &CodeRegistry, rules: &EngineRules) -> i64 {
    // training hours are entered by hand, never derived from a range
    if code == rules.training_code {
        return 0;
    }

    let Some(def) = registry.get(code) else {
        return 0;
    };

    let (Some(start), Some(end)) = (def.start, def.end) else {
        return 0;
    };

    let net = (shift_span_seconds(start, end) - i64::from(def.break_minutes) * 60).max(0);

    // ceiling division
    (net + 59) / 60
}

pub fn hours_for_code(code: &str, registry: &CodeRegistry, rules: &EngineRules) -> f64 {
    minutes_to_hours(minutes_for_code(code, registry, rules))
}
