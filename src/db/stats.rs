use crate::db::migrate::current_version;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, sql: &str) -> AppResult<i64> {
    Ok(pool.conn.query_row(sql, [], |row| row.get(0))?)
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Schema version:{} {}",
        CYAN,
        RESET,
        current_version(&pool.conn)?
    );

    //
    // 2) COUNTS
    //
    let codes = count(pool, "SELECT COUNT(*) FROM shift_codes")?;
    let days = count(pool, "SELECT COUNT(*) FROM day_records")?;
    let months = count(pool, "SELECT COUNT(DISTINCT month_key) FROM day_records")?;
    let cached = count(pool, "SELECT COUNT(*) FROM month_cache")?;

    println!("{}• Shift codes:{} {}{}{}", CYAN, RESET, GREEN, codes, RESET);
    println!(
        "{}• Months:{} {}{}{} ({} day records, {} cached)",
        CYAN, RESET, GREEN, months, RESET, days, cached
    );

    //
    // 3) MONTH RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT month_key FROM day_records ORDER BY month_key ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT month_key FROM day_records ORDER BY month_key DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let dash = format!("{GREY}--{RESET}");
    println!("{}• Month range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(|| dash.clone()));
    println!("    to:   {}", last.unwrap_or(dash));

    println!();
    Ok(())
}
