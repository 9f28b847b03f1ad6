use crate::core::engine::codes::ShiftCodes;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display category of a computed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayCategory {
    Night,
    Free,
    Shift,
}

impl DayCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayCategory::Night => "night",
            DayCategory::Free => "free",
            DayCategory::Shift => "shift",
        }
    }
}

/// Derived view of a [`DayRecord`](super::day_record::DayRecord).
/// All hour fields are whole minutes expressed in hours; `total_hours`
/// is rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedDay {
    pub date: NaiveDate,
    pub codes: ShiftCodes,
    pub shift_hours: f64,
    pub training_hours: f64,
    pub overtime_hours: f64,
    pub total_hours: f64,
    pub category: DayCategory,
}

impl ComputedDay {
    pub fn is_worked(&self) -> bool {
        self.total_hours > 0.0
    }
}
