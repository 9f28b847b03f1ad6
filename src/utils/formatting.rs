//! Formatting utilities used for CLI and export outputs.

use crate::config::HoursFormat;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"))
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s`, ignoring ANSI escapes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Left-align `s` in `width` terminal columns.
pub fn pad_visible(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Right-align `s` in `width` terminal columns.
pub fn pad_visible_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

/// Cut `s` to `width` columns with a trailing `...`. Colours are lost
/// when cutting.
pub fn truncate_visible(s: &str, width: usize) -> String {
    if visible_width(s) <= width {
        return s.to_string();
    }

    let plain = strip_ansi(s);
    let mut out = String::new();
    for ch in plain.chars() {
        if UnicodeWidthStr::width(format!("{out}{ch}").as_str()) + 3 > width {
            break;
        }
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Whole minutes as `07h 30m`.
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

pub fn format_hours(hours: f64, fmt: HoursFormat) -> String {
    match fmt {
        HoursFormat::Decimal => format!("{:.2}", hours),
        HoursFormat::Hhmm => mins2readable((hours * 60.0).round() as i64),
    }
}
