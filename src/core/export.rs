use crate::config::Config;
use crate::core::month::MonthLogic;
use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportFormat, write_report};
use crate::models::month_key::MonthKey;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the month exactly as `show` would display it (cached
    /// report when present).
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        month: MonthKey,
        force: bool,
    ) -> AppResult<()> {
        let outcome = MonthLogic::report(pool, month, &cfg.engine_rules(), false)?;
        let path = expand_tilde(file);

        write_report(&outcome.report, format, &path, force)?;

        ttlog_lenient(
            &pool.conn,
            "export",
            &month.to_string(),
            &format!("{} → {}", format.as_str(), path.display()),
        );
        Ok(())
    }
}
