//! Hours computation: code parsing, per-code duration, per-day
//! aggregation and week/month summaries. Pure functions only; the code
//! registry and the designated codes are always passed in.

pub mod codes;
pub mod day;
pub mod duration;
pub mod period;

use serde::{Deserialize, Serialize};

/// Codes with a fixed meaning for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineRules {
    /// Presence marks the day as a night, whatever its hours.
    pub night_code: String,
    /// Contributes no shift hours; the day's manual training hours apply.
    pub training_code: String,
}

impl EngineRules {
    pub fn new(night_code: &str, training_code: &str) -> Self {
        Self {
            night_code: codes::normalize(night_code),
            training_code: codes::normalize(training_code),
        }
    }
}

impl Default for EngineRules {
    fn default() -> Self {
        Self::new("n10", "bijs")
    }
}
