use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::riasec::RiasecCode;
use super::safety::SafetyFlag;
use super::score::{CombinedScore, PatternScore};
use crate::error::CoreError;

/// The structured output of one scoring pass.
///
/// Recomputed on every call and handed to the persistence and rendering
/// layers as plain JSON. Groups with no answered question are absent from
/// every list; consumers must read absence as "insufficient data", not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreReport {
    pub instrument_id: String,
    /// Known questions that carried an answer.
    pub answered: u32,
    pub total_questions: u32,
    /// Every answered item pooled into one score.
    pub overall: Option<PatternScore>,
    /// In the instrument's pattern declaration order.
    pub pattern_scores: Vec<PatternScore>,
    #[serde(default)]
    pub composite_scores: Vec<PatternScore>,
    #[serde(default)]
    pub domain_scores: Vec<PatternScore>,
    pub top_patterns: Vec<PatternScore>,
    pub bottom_patterns: Vec<PatternScore>,
    pub detail: ReportDetail,
}

/// Capability-specific part of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ReportDetail {
    Standard,
    Riasec {
        riasec_code: RiasecCode,
    },
    SafetyScreen {
        safety_flag: SafetyFlag,
    },
    CrossRater {
        raters: RaterPair,
        /// The second rater's own pattern scores; the report body holds
        /// the first rater's.
        second_rater_scores: Vec<PatternScore>,
        combined: Vec<CombinedScore>,
    },
}

/// Role names of the two respondents of a dual-rater instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RaterPair {
    pub first: String,
    pub second: String,
}

impl ScoreReport {
    pub fn pattern(&self, code: &str) -> Option<&PatternScore> {
        self.pattern_scores.iter().find(|s| s.code == code)
    }

    pub fn composite(&self, code: &str) -> Option<&PatternScore> {
        self.composite_scores.iter().find(|s| s.code == code)
    }

    pub fn domain(&self, code: &str) -> Option<&PatternScore> {
        self.domain_scores.iter().find(|s| s.code == code)
    }

    pub fn is_complete(&self) -> bool {
        self.answered == self.total_questions
    }

    pub fn riasec_code(&self) -> Option<&RiasecCode> {
        match &self.detail {
            ReportDetail::Riasec { riasec_code } => Some(riasec_code),
            _ => None,
        }
    }

    pub fn safety_flag(&self) -> Option<&SafetyFlag> {
        match &self.detail {
            ReportDetail::SafetyScreen { safety_flag } => Some(safety_flag),
            _ => None,
        }
    }

    pub fn combined(&self) -> &[CombinedScore] {
        match &self.detail {
            ReportDetail::CrossRater { combined, .. } => combined,
            _ => &[],
        }
    }

    /// Whether a notification layer should act on this report: a raised
    /// safety flag or any cross-setting discrepancy.
    pub fn needs_attention(&self) -> bool {
        self.safety_flag().is_some_and(|f| f.flagged)
            || self.combined().iter().any(|c| c.cross_setting_flag)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
