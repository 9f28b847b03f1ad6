use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_lenient;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use rusqlite::Connection;

/// Create the config directory, the config file (skipped with `--test`)
/// and the database, then list the codes the database starts with.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing shiftcal…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    let applied = init_db(&conn)?;

    success(format!("Database initialized at {}", &db_path));

    let codes: Vec<String> = queries::load_registry(&conn)?
        .iter()
        .map(|d| d.code.clone())
        .collect();
    info(format!(
        "{} migration(s) applied; shift codes available: {}",
        applied,
        codes.join(", ")
    ));

    ttlog_lenient(
        &conn,
        "init",
        &db_path,
        &format!("Database initialized ({} migrations)", applied),
    );

    println!("🎉 shiftcal initialization completed!");
    Ok(())
}
