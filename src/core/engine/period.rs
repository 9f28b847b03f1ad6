//! Week and month totals over computed days.

use super::day::round2;
use crate::models::computed_day::ComputedDay;
use crate::models::month_key::MonthKey;
use crate::models::summary::{IsoWeekKey, MonthSummary, WeekSummary};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// ISO week-year and week of `date`; Dec 30, 2024 is (2025, 1).
pub fn iso_week_key(date: NaiveDate) -> IsoWeekKey {
    let w = date.iso_week();
    IsoWeekKey {
        year: w.year(),
        week: w.week(),
    }
}

struct Totals {
    hours: f64,
    worked: usize,
    free: usize,
}

fn totals<'a>(days: impl IntoIterator<Item = &'a ComputedDay>) -> Totals {
    let mut t = Totals {
        hours: 0.0,
        worked: 0,
        free: 0,
    };

    for day in days {
        t.hours += day.total_hours;
        if day.is_worked() {
            t.worked += 1;
        } else {
            t.free += 1;
        }
    }

    t.hours = round2(t.hours);
    t
}

/// Days grouped by ISO week, weeks ascending, days date ascending.
pub fn group_by_iso_week(days: &[ComputedDay]) -> Vec<(IsoWeekKey, Vec<&ComputedDay>)> {
    let mut groups: BTreeMap<IsoWeekKey, Vec<&ComputedDay>> = BTreeMap::new();
    for day in days {
        groups.entry(iso_week_key(day.date)).or_default().push(day);
    }

    groups
        .into_iter()
        .map(|(key, mut group)| {
            group.sort_by_key(|d| d.date);
            (key, group)
        })
        .collect()
}

pub fn summarize_week(key: IsoWeekKey, days: &[&ComputedDay]) -> WeekSummary {
    let t = totals(days.iter().copied());

    WeekSummary {
        key,
        first_date: days.iter().map(|d| d.date).min(),
        last_date: days.iter().map(|d| d.date).max(),
        total_hours: t.hours,
        worked_days: t.worked,
        free_days: t.free,
    }
}

pub fn summarize_weeks(days: &[ComputedDay]) -> Vec<WeekSummary> {
    group_by_iso_week(days)
        .iter()
        .map(|(key, group)| summarize_week(*key, group))
        .collect()
}

pub fn summarize_month(month: MonthKey, days: &[ComputedDay]) -> MonthSummary {
    let t = totals(days.iter().filter(|d| month.contains(d.date)));

    MonthSummary {
        month,
        total_hours: t.hours,
        worked_days: t.worked,
        free_days: t.free,
    }
}
