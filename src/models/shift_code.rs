use crate::utils::time::format_range;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A user configured shift code: optional time range plus unpaid break.
///
/// A code without start and end (e.g. manual training, paid holiday)
/// contributes no hours of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCodeDefinition {
    pub code: String,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub break_minutes: u32,
    pub label: String,
}

impl ShiftCodeDefinition {
    pub fn new(code: &str, label: &str) -> Self {
        Self {
            code: code.to_string(),
            start: None,
            end: None,
            break_minutes: 0,
            label: label.to_string(),
        }
    }

    pub fn with_times(mut self, start: NaiveTime, end: NaiveTime, break_minutes: u32) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self.break_minutes = break_minutes;
        self
    }

    /// `HH:MM–HH:MM`, or `variable` when the code has no time range.
    pub fn time_range(&self) -> String {
        format_range(self.start, self.end)
    }
}

/// Snapshot of all configured codes, keyed by normalized code.
/// Read-only for the hours engine; passed explicitly to every computation.
#[derive(Debug, Clone, Default)]
pub struct CodeRegistry {
    codes: BTreeMap<String, ShiftCodeDefinition>,
}

impl CodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, def: ShiftCodeDefinition) {
        self.codes.insert(def.code.clone(), def);
    }

    pub fn get(&self, code: &str) -> Option<&ShiftCodeDefinition> {
        self.codes.get(code)
    }

    /// Definitions in code order.
    pub fn iter(&self) -> impl Iterator<Item = &ShiftCodeDefinition> {
        self.codes.values()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl FromIterator<ShiftCodeDefinition> for CodeRegistry {
    fn from_iter<I: IntoIterator<Item = ShiftCodeDefinition>>(iter: I) -> Self {
        let mut reg = CodeRegistry::new();
        for def in iter {
            reg.insert(def);
        }
        reg
    }
}
