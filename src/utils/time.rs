//! Shift times: the single `HH:MM` format shared by the CLI, the
//! database columns and the legend.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub const TIME_FORMAT: &str = "%H:%M";

/// Accepts `HH:MM` and `H:MM`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), TIME_FORMAT).ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// `--start` / `--end` flags: absent stays absent, anything else must parse.
pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    input
        .map(|s| parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string())))
        .transpose()
}

/// Legend cell for an optional range.
pub fn format_range(start: Option<NaiveTime>, end: Option<NaiveTime>) -> String {
    match (start, end) {
        (Some(s), Some(e)) => format!("{}–{}", format_time(s), format_time(e)),
        (None, None) => "variable".to_string(),
        (s, e) => format!(
            "{}–{} (incomplete)",
            s.map(format_time).unwrap_or_else(|| "?".into()),
            e.map(format_time).unwrap_or_else(|| "?".into())
        ),
    }
}
