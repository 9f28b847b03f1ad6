use crate::core::engine::codes::ShiftCodes;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,       // ⇔ day_records.date (TEXT "YYYY-MM-DD")
    pub codes: ShiftCodes,     // ⇔ day_records.codes (normalized TEXT)
    pub training_hours: f64,   // ⇔ day_records.training_hours (REAL)
    pub overtime_minutes: u32, // ⇔ day_records.overtime_minutes (INT)
}

impl DayRecord {
    /// Empty record, as created when a month is first opened.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            codes: ShiftCodes::default(),
            training_hours: 0.0,
            overtime_minutes: 0,
        }
    }

    pub fn with_codes(date: NaiveDate, raw: &str) -> Self {
        Self {
            codes: ShiftCodes::parse(raw),
            ..Self::blank(date)
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
