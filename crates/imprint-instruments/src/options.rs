use serde::{Deserialize, Serialize};

/// Default length of the top/bottom pattern views.
pub const DEFAULT_TOP_N: usize = 3;

/// Per-call knobs. Anything left `None` falls back to the instrument's own
/// definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringOptions {
    pub top_n: usize,
    pub discrepancy_threshold: Option<f64>,
    pub safety_threshold: Option<i32>,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            discrepancy_threshold: None,
            safety_threshold: None,
        }
    }
}
