pub mod code;
pub mod config;
pub mod day;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod reset;
pub mod show;

use crate::errors::AppResult;
use crate::models::month_key::MonthKey;

/// `YYYY-MM` from the command line, current month when absent.
pub(crate) fn resolve_month(month: Option<&String>) -> AppResult<MonthKey> {
    match month {
        Some(m) => MonthKey::parse(m),
        None => Ok(MonthKey::current()),
    }
}
