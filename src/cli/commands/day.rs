use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codes::CodeLogic;
use crate::core::engine::day::compute_day;
use crate::core::month::{DayEdit, MonthLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::ui::render::render_day;
use crate::utils::date;

/// Edit one day and print its recomputed row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day {
        date: date_str,
        codes,
        training,
        overtime,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let mut pool = DbPool::open(&cfg.database)?;
        let rules = cfg.engine_rules();

        let edit = DayEdit {
            codes: codes.clone(),
            training_hours: *training,
            overtime_minutes: *overtime,
        };

        let rec = MonthLogic::edit_day(&mut pool, d, &edit, &rules)?;

        let registry = CodeLogic::registry(&pool)?;
        let computed = compute_day(&rec, &registry, &rules);

        success(format!("{} updated.", d));
        render_day(&computed, cfg);
    }

    Ok(())
}
