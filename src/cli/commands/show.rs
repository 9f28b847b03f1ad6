use super::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::month::MonthLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::render::render_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        month,
        prev,
        next,
        recalc,
    } = cmd
    {
        let mut key = resolve_month(month.as_ref())?;
        if *prev {
            key = key.prev();
        } else if *next {
            key = key.next();
        }

        let mut pool = DbPool::open(&cfg.database)?;
        let outcome = MonthLogic::report(&mut pool, key, &cfg.engine_rules(), *recalc)?;

        render_month(&outcome.report, cfg, outcome.from_cache);
    }

    Ok(())
}
