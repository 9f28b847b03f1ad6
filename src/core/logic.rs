use crate::core::engine::EngineRules;
use crate::core::engine::day::compute_day;
use crate::core::engine::period::{summarize_month, summarize_weeks};
use crate::models::computed_day::ComputedDay;
use crate::models::day_record::DayRecord;
use crate::models::month_key::MonthKey;
use crate::models::shift_code::CodeRegistry;
use crate::models::summary::MonthReport;
use chrono::Local;

pub struct Core;

impl Core {
    /// Same order and length as `records`.
    pub fn compute_days(
        records: &[DayRecord],
        registry: &CodeRegistry,
        rules: &EngineRules,
    ) -> Vec<ComputedDay> {
        records
            .iter()
            .map(|r| compute_day(r, registry, rules))
            .collect()
    }

    pub fn build_month_report(
        month: MonthKey,
        records: &[DayRecord],
        registry: &CodeRegistry,
        rules: &EngineRules,
    ) -> MonthReport {
        let days = Self::compute_days(records, registry, rules);
        let weeks = summarize_weeks(&days);
        let summary = summarize_month(month, &days);

        MonthReport {
            month,
            days,
            weeks,
            summary,
            rules: rules.clone(),
            computed_at: Local::now().to_rfc3339(),
        }
    }
}
