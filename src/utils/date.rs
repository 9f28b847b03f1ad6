use crate::models::month_key::MonthKey;
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Every day of the month, date ascending.
pub fn all_days_of_month(month: MonthKey) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut cursor = Some(month.first_day());

    while let Some(d) = cursor {
        if d.month() != month.month {
            break;
        }
        out.push(d);
        cursor = d.succ_opt();
    }

    out
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `30 Dec – 5 Jan`, or `1–7 Jan` inside a single month.
pub fn format_range(first: NaiveDate, last: NaiveDate) -> String {
    if first.month() == last.month() && first.year() == last.year() {
        format!("{}–{} {}", first.day(), last.day(), first.format("%b"))
    } else {
        format!(
            "{} {} – {} {}",
            first.day(),
            first.format("%b"),
            last.day(),
            last.format("%b")
        )
    }
}
