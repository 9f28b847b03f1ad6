use crate::db::log::load_entries;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::{pad_visible, truncate_visible};
use ansi_term::Colour;

const OP_WIDTH_LIMIT: usize = 40;

/// ANSI colour for each operation kind
fn color_for_operation(op: &str) -> Colour {
    match op {
        "edit" => Colour::Yellow,
        "code_set" => Colour::Green,
        "code_del" | "reset" => Colour::Red,
        "recalc" => Colour::Cyan,
        "export" => Colour::Blue,
        "init" | "init_month" => Colour::RGB(255, 153, 51), // orange
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_entries(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_LIMIT);

        println!("📜 Internal log:\n");

        for e in &entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| e.date.clone());

            let op_target = if e.target.is_empty() {
                color_for_operation(&e.operation).paint(&e.operation).to_string()
            } else {
                format!(
                    "{} ({})",
                    color_for_operation(&e.operation).paint(&e.operation),
                    e.target
                )
            };

            let cell = truncate_visible(&op_target, op_w);

            println!(
                "{:>id_w$}: {:<date_w$} | {} => {}",
                e.id,
                date,
                pad_visible(&cell, op_w),
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
