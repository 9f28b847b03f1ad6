use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::{queries, stats};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{CYAN, RESET};

fn step(title: &str) {
    println!("{}▶ {}…{}", CYAN, title, RESET);
}

/// SQLite integrity plus day codes that are missing from the legend
/// (those days silently count 0 hours).
fn check(pool: &DbPool, cfg: &Config) -> AppResult<()> {
    step("Running integrity check");
    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if integrity == "ok" {
        success("Integrity check passed.");
    } else {
        warning(format!("Integrity check failed: {}", integrity));
    }

    step("Looking for undefined shift codes");
    let registry = queries::load_registry(&pool.conn)?;
    let rules = cfg.engine_rules();
    let unknown: Vec<(String, usize)> = queries::code_usage(&pool.conn)?
        .into_iter()
        .filter(|(code, _)| registry.get(code).is_none() && *code != rules.training_code)
        .collect();

    if unknown.is_empty() {
        success("Every code used in the calendar is defined.");
    } else {
        for (code, days) in unknown {
            warning(format!(
                "'{}' is used on {} day(s) but not defined; it counts 0 h.",
                code, days
            ));
        }
    }
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check: run_check,
        vacuum,
        info,
    } = cmd
    {
        // schema is left alone unless --migrate is given
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            step("Running migrations");
            match run_pending_migrations(&pool.conn)? {
                0 => success("Schema already up to date."),
                n => success(format!("{} migration(s) applied.", n)),
            }
        }

        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        if *run_check {
            check(&pool, cfg)?;
        }

        if *vacuum {
            step("Running VACUUM");
            pool.conn.execute_batch("VACUUM;")?;
            success("Vacuum completed.");
        }
    }

    Ok(())
}
