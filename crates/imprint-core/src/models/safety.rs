use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Result of screening critical questions for distress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SafetyFlag {
    pub flagged: bool,
    /// Critical question ids whose raw answer met the threshold.
    pub triggered_by: Vec<String>,
}
