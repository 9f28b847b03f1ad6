//! Free-text shift code cells.
//!
//! A cell like `" Bijs, N10 "` is turned into the canonical form
//! `bijs+n10` at the boundary; everything downstream works on the
//! ordered token list.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SEPARATOR: char = '+';

/// Canonical form of a raw code cell: lowercase, no whitespace, `,` read
/// as `+`, no empty tokens.
pub fn normalize(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .map(|c| if c == ',' { SEPARATOR } else { c })
        .collect();

    compact
        .split(SEPARATOR)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("+")
}

/// Tokens in input order. Duplicates are kept.
pub fn split(raw: &str) -> Vec<String> {
    normalize(raw)
        .split(SEPARATOR)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ordered list of canonical code tokens for one day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ShiftCodes {
    tokens: Vec<String>,
}

impl ShiftCodes {
    pub fn parse(raw: &str) -> Self {
        Self { tokens: split(raw) }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.tokens.iter().any(|t| t == code)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

impl fmt::Display for ShiftCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join("+"))
    }
}

impl From<String> for ShiftCodes {
    fn from(raw: String) -> Self {
        ShiftCodes::parse(&raw)
    }
}

impl From<&str> for ShiftCodes {
    fn from(raw: &str) -> Self {
        ShiftCodes::parse(raw)
    }
}

impl From<ShiftCodes> for String {
    fn from(codes: ShiftCodes) -> Self {
        codes.to_string()
    }
}
