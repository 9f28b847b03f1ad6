//! Versioned schema migrations.
//!
//! Each migration runs in its own transaction and is recorded in
//! `schema_migrations`; applied ones are never run again.

use crate::db::log::ttlog_lenient;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, params};
use std::collections::HashSet;

struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_log",
        sql: r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 2,
        name: "create_shift_codes",
        sql: r#"
        CREATE TABLE IF NOT EXISTS shift_codes (
            code          TEXT PRIMARY KEY,
            start_time    TEXT,
            end_time      TEXT,
            break_minutes INTEGER NOT NULL DEFAULT 0 CHECK(break_minutes >= 0),
            label         TEXT NOT NULL DEFAULT ''
        );
        "#,
    },
    Migration {
        version: 3,
        name: "create_day_records",
        sql: r#"
        CREATE TABLE IF NOT EXISTS day_records (
            date             TEXT PRIMARY KEY,
            month_key        TEXT NOT NULL,
            codes            TEXT NOT NULL DEFAULT '',
            training_hours   REAL NOT NULL DEFAULT 0 CHECK(training_hours >= 0),
            overtime_minutes INTEGER NOT NULL DEFAULT 0 CHECK(overtime_minutes >= 0)
        );

        CREATE INDEX IF NOT EXISTS idx_day_records_month ON day_records(month_key, date);
        "#,
    },
    Migration {
        version: 4,
        name: "create_month_cache",
        sql: r#"
        CREATE TABLE IF NOT EXISTS month_cache (
            month_key   TEXT PRIMARY KEY,
            payload     TEXT NOT NULL,
            computed_at TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 5,
        name: "seed_default_codes",
        sql: r#"
        INSERT OR IGNORE INTO shift_codes (code, start_time, end_time, break_minutes, label)
        VALUES ('bijs', NULL, NULL, 0, 'Training (enter hours)'),
               ('fdrecup', NULL, NULL, 0, 'Paid public holiday (0h)');
        "#,
    },
];

fn ensure_migrations_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            applied_at TEXT NOT NULL
        );
        "#,
    )
}

fn applied_versions(conn: &Connection) -> rusqlite::Result<HashSet<i64>> {
    let mut stmt = conn.prepare("SELECT version FROM schema_migrations")?;
    let rows = stmt.query_map([], |row| row.get::<_, i64>(0))?;

    let mut out = HashSet::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}

fn apply(conn: &Connection, m: &Migration) -> rusqlite::Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?1, ?2, ?3)",
        params![m.version, m.name, chrono::Local::now().to_rfc3339()],
    )?;
    tx.commit()
}

/// Highest applied schema version (0 on an empty database).
pub fn current_version(conn: &Connection) -> AppResult<i64> {
    ensure_migrations_table(conn)?;
    let v: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| row.get(0))?;
    Ok(v.unwrap_or(0))
}

/// Apply every migration not yet recorded. Returns how many ran.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_migrations_table(conn)?;
    let applied = applied_versions(conn)?;

    let mut count = 0;
    for m in MIGRATIONS.iter().filter(|m| !applied.contains(&m.version)) {
        apply(conn, m)
            .map_err(|e| AppError::Migration(format!("{} (v{}): {}", m.name, m.version, e)))?;
        count += 1;

        ttlog_lenient(
            conn,
            "migration_applied",
            m.name,
            &format!("Schema migrated to version {}", m.version),
        );
    }

    if count > 0 {
        success(format!(
            "Database schema updated ({} migration{} applied).",
            count,
            if count == 1 { "" } else { "s" }
        ));
    }

    Ok(count)
}
