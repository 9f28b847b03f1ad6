//! ANSI color helper utilities for terminal output.

use crate::core::engine::EngineRules;
use crate::models::computed_day::DayCategory;
use crate::models::shift_code::ShiftCodeDefinition;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Row colour of a computed day: night purple, free green, shift red.
pub fn color_for_category(cat: DayCategory) -> &'static str {
    match cat {
        DayCategory::Night => MAGENTA,
        DayCategory::Free => GREEN,
        DayCategory::Shift => RED,
    }
}

/// Legend colour of a code, with its name.
/// Night code purple, training code blue, other codes without a time
/// range green, everything else red.
pub fn legend_color(def: &ShiftCodeDefinition, rules: &EngineRules) -> (&'static str, &'static str) {
    if def.code == rules.night_code {
        ("purple", MAGENTA)
    } else if def.code == rules.training_code {
        ("blue", BLUE)
    } else if def.start.is_none() && def.end.is_none() {
        ("green", GREEN)
    } else {
        ("red", RED)
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey for empty/zero cells, untouched otherwise.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "0.00" || v == "00h 00m" || v == "-" {
        paint(value, GREY)
    } else {
        value.to_string()
    }
}
