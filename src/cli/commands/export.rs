use super::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let key = resolve_month(month.as_ref())?;
        let mut pool = DbPool::open(&cfg.database)?;
        ExportLogic::export(&mut pool, cfg, format, file, key, *force)?;
    }
    Ok(())
}
