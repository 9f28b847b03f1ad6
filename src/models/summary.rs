use super::computed_day::ComputedDay;
use crate::core::engine::EngineRules;
use super::month_key::MonthKey;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ISO week identifier: (ISO week-numbering year, week number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IsoWeekKey {
    pub year: i32,
    pub week: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    pub key: IsoWeekKey,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub total_hours: f64,
    pub worked_days: usize,
    pub free_days: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month: MonthKey,
    pub total_hours: f64,
    pub worked_days: usize,
    pub free_days: usize,
}

/// Complete computed view of a month, as stored in the summary cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthReport {
    pub month: MonthKey,
    pub days: Vec<ComputedDay>,
    pub weeks: Vec<WeekSummary>,
    pub summary: MonthSummary,
    /// Designated codes the report was computed with.
    pub rules: EngineRules,
    pub computed_at: String,
}

impl MonthReport {
    /// Days of the given week, date ascending.
    pub fn days_of_week(&self, key: IsoWeekKey) -> impl Iterator<Item = &ComputedDay> {
        self.days
            .iter()
            .filter(move |d| crate::core::engine::period::iso_week_key(d.date) == key)
    }
}
