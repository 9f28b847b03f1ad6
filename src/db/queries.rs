use crate::core::engine::codes::ShiftCodes;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::month_key::MonthKey;
use crate::models::shift_code::{CodeRegistry, ShiftCodeDefinition};
use crate::models::summary::MonthReport;
use crate::utils::time::{format_time, parse_time};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::BTreeMap;

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn time_to_db(t: Option<NaiveTime>) -> Option<String> {
    t.map(format_time)
}

fn time_from_db(s: Option<String>) -> Result<Option<NaiveTime>> {
    match s {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_time(&s)
            .map(Some)
            .ok_or_else(|| conversion_error(AppError::InvalidTime(s))),
    }
}

// ---------------------------
// Shift codes
// ---------------------------

pub fn map_code_row(row: &Row) -> Result<ShiftCodeDefinition> {
    Ok(ShiftCodeDefinition {
        code: row.get("code")?,
        start: time_from_db(row.get("start_time")?)?,
        end: time_from_db(row.get("end_time")?)?,
        break_minutes: row.get("break_minutes")?,
        label: row.get("label")?,
    })
}

pub fn load_registry(conn: &Connection) -> AppResult<CodeRegistry> {
    let mut stmt = conn.prepare(
        "SELECT code, start_time, end_time, break_minutes, label
         FROM shift_codes ORDER BY code ASC",
    )?;

    let rows = stmt.query_map([], map_code_row)?;

    let mut reg = CodeRegistry::new();
    for r in rows {
        reg.insert(r?);
    }
    Ok(reg)
}

pub fn load_code(conn: &Connection, code: &str) -> AppResult<Option<ShiftCodeDefinition>> {
    let def = conn
        .query_row(
            "SELECT code, start_time, end_time, break_minutes, label
             FROM shift_codes WHERE code = ?1",
            [code],
            map_code_row,
        )
        .optional()?;
    Ok(def)
}

pub fn upsert_code(conn: &Connection, def: &ShiftCodeDefinition) -> AppResult<()> {
    conn.execute(
        "INSERT INTO shift_codes (code, start_time, end_time, break_minutes, label)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(code) DO UPDATE SET
            start_time = excluded.start_time,
            end_time = excluded.end_time,
            break_minutes = excluded.break_minutes,
            label = excluded.label",
        params![
            def.code,
            time_to_db(def.start),
            time_to_db(def.end),
            def.break_minutes,
            def.label,
        ],
    )?;
    Ok(())
}

/// Returns false when the code did not exist.
pub fn delete_code(conn: &Connection, code: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM shift_codes WHERE code = ?1", [code])?;
    Ok(n > 0)
}

// ---------------------------
// Day records
// ---------------------------

pub fn map_day_row(row: &Row) -> Result<DayRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let codes: String = row.get("codes")?;

    Ok(DayRecord {
        date,
        codes: codes.as_str().into(),
        training_hours: row.get("training_hours")?,
        overtime_minutes: row.get("overtime_minutes")?,
    })
}

pub fn month_exists(conn: &Connection, month: MonthKey) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM day_records WHERE month_key = ?1 LIMIT 1")?;
    Ok(stmt.exists([month.to_string()])?)
}

/// Records of a month, date ascending.
pub fn load_month(conn: &Connection, month: MonthKey) -> AppResult<Vec<DayRecord>> {
    let mut stmt = conn.prepare(
        "SELECT date, codes, training_hours, overtime_minutes
         FROM day_records
         WHERE month_key = ?1
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([month.to_string()], map_day_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_day(conn: &Connection, date: NaiveDate) -> AppResult<Option<DayRecord>> {
    let rec = conn
        .query_row(
            "SELECT date, codes, training_hours, overtime_minutes
             FROM day_records WHERE date = ?1",
            [date.format("%Y-%m-%d").to_string()],
            map_day_row,
        )
        .optional()?;
    Ok(rec)
}

pub fn upsert_day(conn: &Connection, rec: &DayRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO day_records (date, month_key, codes, training_hours, overtime_minutes)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(date) DO UPDATE SET
            codes = excluded.codes,
            training_hours = excluded.training_hours,
            overtime_minutes = excluded.overtime_minutes",
        params![
            rec.date_str(),
            MonthKey::of(rec.date).to_string(),
            rec.codes.to_string(),
            rec.training_hours,
            rec.overtime_minutes,
        ],
    )?;
    Ok(())
}

/// How many day records use each code (a code twice in one day counts once).
pub fn code_usage(conn: &Connection) -> AppResult<BTreeMap<String, usize>> {
    let mut stmt = conn.prepare("SELECT codes FROM day_records WHERE codes <> ''")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut usage = BTreeMap::new();
    for r in rows {
        let mut seen = ShiftCodes::from(r?).iter().map(str::to_string).collect::<Vec<_>>();
        seen.sort();
        seen.dedup();
        for code in seen {
            *usage.entry(code).or_insert(0) += 1;
        }
    }
    Ok(usage)
}

pub fn delete_month(conn: &Connection, month: MonthKey) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM day_records WHERE month_key = ?1",
        [month.to_string()],
    )?;
    Ok(n)
}

// ---------------------------
// Summary cache
// ---------------------------

pub fn load_cached_report(conn: &Connection, month: MonthKey) -> AppResult<Option<MonthReport>> {
    let payload: Option<String> = conn
        .query_row(
            "SELECT payload FROM month_cache WHERE month_key = ?1",
            [month.to_string()],
            |row| row.get(0),
        )
        .optional()?;

    // a payload from an older layout counts as a miss
    Ok(payload.and_then(|json| serde_json::from_str(&json).ok()))
}

pub fn store_report(conn: &Connection, report: &MonthReport) -> AppResult<()> {
    let payload = serde_json::to_string(report)?;
    conn.execute(
        "INSERT INTO month_cache (month_key, payload, computed_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(month_key) DO UPDATE SET
            payload = excluded.payload,
            computed_at = excluded.computed_at",
        params![report.month.to_string(), payload, report.computed_at],
    )?;
    Ok(())
}

pub fn invalidate_month(conn: &Connection, month: MonthKey) -> AppResult<()> {
    conn.execute(
        "DELETE FROM month_cache WHERE month_key = ?1",
        [month.to_string()],
    )?;
    Ok(())
}

/// Drop every cached report (the code registry changed).
pub fn invalidate_all(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM month_cache", [])?;
    Ok(n)
}
