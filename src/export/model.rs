// src/export/model.rs

use crate::core::engine::period::iso_week_key;
use crate::models::computed_day::ComputedDay;
use serde::Serialize;

/// Flat row for exporting one computed day.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub weekday: String,
    pub iso_year: i32,
    pub iso_week: u32,
    pub codes: String,
    pub shift_hours: f64,
    pub training_hours: f64,
    pub overtime_hours: f64,
    pub total_hours: f64,
    pub category: String,
}

impl From<&ComputedDay> for DayExport {
    fn from(d: &ComputedDay) -> Self {
        let key = iso_week_key(d.date);
        Self {
            date: d.date.format("%Y-%m-%d").to_string(),
            weekday: d.date.format("%a").to_string(),
            iso_year: key.year,
            iso_week: key.week,
            codes: d.codes.to_string(),
            shift_hours: d.shift_hours,
            training_hours: d.training_hours,
            overtime_hours: d.overtime_hours,
            total_hours: d.total_hours,
            category: d.category.as_str().to_string(),
        }
    }
}
