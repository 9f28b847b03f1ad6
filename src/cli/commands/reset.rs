use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::month::MonthLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::month_key::MonthKey;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { month } = cmd {
        let key = MonthKey::parse(month)?;

        let prompt = format!(
            "Reset ALL days of {}? Codes, training hours and overtime will be cleared.",
            key
        );
        if !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::open(&cfg.database)?;
        let n = MonthLogic::reset_month(&mut pool, key)?;

        success(format!("{} regenerated with {} blank days.", key, n));
    }

    Ok(())
}
