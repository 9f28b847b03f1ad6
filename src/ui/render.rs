//! Terminal views of computed months and of the code legend.

use crate::config::{Config, HoursFormat};
use crate::core::engine::EngineRules;
use crate::models::computed_day::ComputedDay;
use crate::models::shift_code::CodeRegistry;
use crate::models::summary::{MonthReport, WeekSummary};
use crate::ui::messages::{header, info, note};
use crate::utils::colors::{color_for_category, colorize_optional, legend_color, paint};
use crate::utils::date::format_range;
use crate::utils::formatting::{bold, format_hours};
use crate::utils::table::{Column, Table};

fn week_title(week: &WeekSummary) -> String {
    let range = match (week.first_date, week.last_date) {
        (Some(f), Some(l)) => format_range(f, l),
        _ => "-".to_string(),
    };
    format!("Week {} • {}", week.key.week, range)
}

fn totals_line(total: f64, worked: usize, free: usize, fmt: HoursFormat) -> String {
    format!(
        "Total {} h   Worked {} d.   Free {} d.",
        bold(&format_hours(total, fmt)),
        worked,
        free
    )
}

fn day_row(day: &ComputedDay, cfg: &Config) -> Vec<String> {
    let color = color_for_category(day.category);
    let hours = |h: f64| colorize_optional(&format_hours(h, cfg.hours_format));

    let mut row = vec![paint(&day.date.format("%d-%m-%Y").to_string(), color)];
    if cfg.show_weekday {
        row.push(day.date.format("%a").to_string());
    }
    let codes = day.codes.to_string();
    row.push(if codes.is_empty() {
        colorize_optional("-")
    } else {
        codes
    });
    row.push(hours(day.shift_hours));
    row.push(hours(day.training_hours));
    row.push(hours(day.overtime_hours));
    row.push(paint(&format_hours(day.total_hours, cfg.hours_format), color));
    row.push(paint(day.category.as_str(), color));
    row
}

fn day_table(cfg: &Config) -> Table {
    let mut cols = vec![Column::left("Date")];
    if cfg.show_weekday {
        cols.push(Column::left("Day"));
    }
    cols.extend([
        Column::left("Codes"),
        Column::right("Shift"),
        Column::right("Training"),
        Column::right("Overtime"),
        Column::right("Total"),
        Column::left("Type"),
    ]);
    Table::new(cols)
}

pub fn render_month(report: &MonthReport, cfg: &Config, from_cache: bool) {
    println!();
    header(report.month.first_day().format("%B %Y"));

    for week in &report.weeks {
        println!();
        println!("{}", bold(&week_title(week)));

        let mut table = day_table(cfg);
        for day in report.days_of_week(week.key) {
            table.add_row(day_row(day, cfg));
        }
        print!("{}", table.render());
        println!(
            "{}",
            totals_line(
                week.total_hours,
                week.worked_days,
                week.free_days,
                cfg.hours_format
            )
        );
    }

    let s = &report.summary;
    println!();
    header(format!("Month {}", report.month));
    println!(
        "{}",
        totals_line(s.total_hours, s.worked_days, s.free_days, cfg.hours_format)
    );

    let when = chrono::DateTime::parse_from_rfc3339(&report.computed_at)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| report.computed_at.clone());
    if from_cache {
        note(format!(
            "Totals computed at {when} (cached; use --recalc to refresh)."
        ));
    } else {
        note(format!("Totals computed at {when}."));
    }
}

pub fn render_day(day: &ComputedDay, cfg: &Config) {
    let mut table = day_table(cfg);
    table.add_row(day_row(day, cfg));
    print!("{}", table.render());
}

pub fn render_legend(registry: &CodeRegistry, rules: &EngineRules) {
    if registry.is_empty() {
        info("No shift codes configured yet. Add one with `shiftcal code set`.");
        return;
    }

    let mut table = Table::new(vec![
        Column::left("Code"),
        Column::left("Meaning"),
        Column::left("Time"),
        Column::right("Break"),
        Column::left("Color"),
    ]);

    for def in registry.iter() {
        let (name, color) = legend_color(def, rules);
        table.add_row(vec![
            paint(&def.code, color),
            def.label.clone(),
            def.time_range(),
            format!("{} min", def.break_minutes),
            paint(name, color),
        ]);
    }

    print!("{}", table.render());
}
