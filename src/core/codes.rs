use crate::core::engine::codes::{SEPARATOR, normalize};
use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::shift_code::{CodeRegistry, ShiftCodeDefinition};
use crate::ui::messages::warning;
use chrono::NaiveTime;

/// Fields to change on a code; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct CodeEdit {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub break_minutes: Option<u32>,
    pub label: Option<String>,
    /// Drop the time range (hours come from manual fields only).
    pub variable: bool,
}

/// Registry keys use the same canonical form as day cells; a key must be
/// a single token.
pub fn canonical_code(raw: &str) -> AppResult<String> {
    let code = normalize(raw);
    if code.is_empty() || code.contains(SEPARATOR) {
        return Err(AppError::InvalidCode(raw.to_string()));
    }
    Ok(code)
}

pub struct CodeLogic;

impl CodeLogic {
    pub fn registry(pool: &DbPool) -> AppResult<CodeRegistry> {
        queries::load_registry(&pool.conn)
    }

    /// Create or update a code. Every cached month report is dropped,
    /// since any of them may use it.
    pub fn set(pool: &mut DbPool, raw_code: &str, edit: &CodeEdit) -> AppResult<ShiftCodeDefinition> {
        let code = canonical_code(raw_code)?;

        let mut def = queries::load_code(&pool.conn, &code)?
            .unwrap_or_else(|| ShiftCodeDefinition::new(&code, &code));

        if edit.variable {
            def.start = None;
            def.end = None;
        }
        if let Some(s) = edit.start {
            def.start = Some(s);
        }
        if let Some(e) = edit.end {
            def.end = Some(e);
        }
        if let Some(b) = edit.break_minutes {
            def.break_minutes = b;
        }
        if let Some(label) = &edit.label {
            def.label = label.trim().to_string();
        }

        if def.start.is_some() != def.end.is_some() {
            warning(format!(
                "Code '{}' has only one of start/end: it counts as 0 hours until both are set.",
                def.code
            ));
        }

        let tx = pool.conn.transaction()?;
        queries::upsert_code(&tx, &def)?;
        queries::invalidate_all(&tx)?;
        tx.commit()?;

        ttlog_lenient(
            &pool.conn,
            "code_set",
            &def.code,
            &format!(
                "{} break={}min label='{}'",
                def.time_range(),
                def.break_minutes,
                def.label
            ),
        );

        Ok(def)
    }

    /// Remove a code; returns the canonical key that was deleted.
    pub fn delete(pool: &mut DbPool, raw_code: &str) -> AppResult<String> {
        let code = canonical_code(raw_code)?;

        let tx = pool.conn.transaction()?;
        if !queries::delete_code(&tx, &code)? {
            return Err(AppError::UnknownCode(code));
        }
        queries::invalidate_all(&tx)?;
        tx.commit()?;

        ttlog_lenient(&pool.conn, "code_del", &code, "Shift code removed");
        Ok(code)
    }
}
