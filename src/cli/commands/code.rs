use crate::cli::parser::{CodeAction, Commands};
use crate::config::Config;
use crate::core::codes::{CodeEdit, CodeLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::render::render_legend;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Code { action } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let rules = cfg.engine_rules();

        match action {
            CodeAction::List => {
                let registry = CodeLogic::registry(&pool)?;
                render_legend(&registry, &rules);
            }

            CodeAction::Set {
                code,
                start,
                end,
                break_minutes,
                label,
                variable,
            } => {
                let edit = CodeEdit {
                    start: parse_optional_time(start.as_ref())?,
                    end: parse_optional_time(end.as_ref())?,
                    break_minutes: *break_minutes,
                    label: label.clone(),
                    variable: *variable,
                };

                let def = CodeLogic::set(&mut pool, code, &edit)?;
                success(format!(
                    "Code '{}' saved: {}, break {} min ({})",
                    def.code,
                    def.time_range(),
                    def.break_minutes,
                    def.label
                ));
            }

            CodeAction::Del { code } => {
                let deleted = CodeLogic::delete(&mut pool, code)?;
                success(format!("Code '{}' deleted.", deleted));
            }
        }
    }

    Ok(())
}
