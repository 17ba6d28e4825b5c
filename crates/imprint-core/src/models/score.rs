use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A label bucket assigned from an instrument's threshold table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Severity {
    /// e.g. "Moderate", "Amber"
    pub label: String,
    /// Zero-based band index, low to high.
    pub level: u8,
    /// Display color as a hex string, when the instrument declares one.
    pub color: Option<String>,
}

/// Score for one pattern, composite, or domain group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternScore {
    pub code: String,
    pub name: String,
    pub category: Option<String>,
    /// Sum of reverse-adjusted answers.
    pub raw_sum: i32,
    /// Number of answered questions that contributed.
    pub item_count: u32,
    pub average: f64,
    /// 0–100, rounded.
    pub percentage: u8,
    pub severity: Severity,
}

/// Two raters' views of one pattern, merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CombinedScore {
    pub code: String,
    pub name: String,
    pub rater_a_average: f64,
    pub rater_b_average: f64,
    pub combined_average: f64,
    pub discrepancy: f64,
    pub cross_setting_flag: bool,
}
