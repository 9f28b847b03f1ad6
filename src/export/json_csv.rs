// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{DayExport, notify_export_success};
use crate::models::summary::MonthReport;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Whole month as one JSON document: rows plus the week and month totals.
#[derive(Serialize)]
struct MonthExport<'a> {
    month: String,
    total_hours: f64,
    worked_days: usize,
    free_days: usize,
    weeks: &'a [crate::models::summary::WeekSummary],
    days: Vec<DayExport>,
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(report: &MonthReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let doc = MonthExport {
        month: report.month.to_string(),
        total_hours: report.summary.total_hours,
        worked_days: report.summary.worked_days,
        free_days: report.summary.free_days,
        weeks: &report.weeks,
        days: report.days.iter().map(DayExport::from).collect(),
    };

    let json_data = serde_json::to_string_pretty(&doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, one row per day (header from serde).
pub(crate) fn export_csv(report: &MonthReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for day in &report.days {
        wtr.serialize(DayExport::from(day))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
