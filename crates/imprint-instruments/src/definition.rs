use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use imprint_core::models::riasec::RiasecLetter;

/// Bounds and labels of an instrument's ordinal answer scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerScale {
    pub min: i32,
    pub max: i32,
    /// One label per point, `min` first.
    pub labels: Vec<String>,
}

impl AnswerScale {
    pub fn new(min: i32, max: i32, labels: &[&str]) -> Self {
        Self {
            min,
            max,
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Mirror an answer across the scale: `(min + max) - value`.
    pub fn reverse(&self, value: i32) -> i32 {
        self.min + self.max - value
    }

    pub fn span(&self) -> i32 {
        self.max - self.min
    }

    pub fn label(&self, value: i32) -> Option<&str> {
        let idx = usize::try_from(value - self.min).ok()?;
        self.labels.get(idx).map(String::as_str)
    }
}

/// A named construct scored from a fixed group of questions.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternDef {
    pub code: String,
    pub name: String,
    /// Display grouping, e.g. "Inattentive".
    pub category: Option<String>,
    /// Every question of this pattern is reverse-scored.
    pub reverse: bool,
    pub description: Option<String>,
}

/// Sub-analysis grouping that cuts across patterns.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainDef {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// A pattern derived from the weighted mean of other patterns' averages.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositeDef {
    pub code: String,
    pub name: String,
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Component {
    pub pattern: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub pattern: String,
    pub domain: Option<String>,
    pub reverse: bool,
    pub text: String,
}

/// What a threshold table compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ThresholdBasis {
    /// The rounded 0–100 percentage.
    Percentage,
    /// The group average on the instrument's own scale.
    RawAverage,
}

/// How a band's upper bound is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BoundKind {
    /// `value < upper`
    Below,
    /// `value <= upper`
    AtMost,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    /// `None` only on the last band.
    pub upper: Option<f64>,
    pub label: String,
    pub color: Option<String>,
}

/// Ordered label buckets, evaluated low to high. The first band whose bound
/// admits the value wins; the final band has no bound.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThresholdTable {
    pub basis: ThresholdBasis,
    pub bound: BoundKind,
    pub bands: Vec<Band>,
}

impl ThresholdTable {
    pub fn new(basis: ThresholdBasis, bound: BoundKind) -> Self {
        Self {
            basis,
            bound,
            bands: Vec::new(),
        }
    }

    pub fn band(mut self, upper: f64, label: &str, color: &str) -> Self {
        self.bands.push(Band {
            upper: Some(upper),
            label: label.to_string(),
            color: Some(color.to_string()),
        });
        self
    }

    pub fn otherwise(mut self, label: &str, color: &str) -> Self {
        self.bands.push(Band {
            upper: None,
            label: label.to_string(),
            color: Some(color.to_string()),
        });
        self
    }

    /// Index of the band `value` falls into.
    pub fn band_index(&self, value: f64) -> usize {
        self.bands
            .iter()
            .position(|band| match (band.upper, self.bound) {
                (None, _) => true,
                (Some(upper), BoundKind::Below) => value < upper,
                (Some(upper), BoundKind::AtMost) => value <= upper,
            })
            .unwrap_or(self.bands.len().saturating_sub(1))
    }
}

/// Two respondents rating the same subject.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DualRater {
    pub first: String,
    pub second: String,
    /// Averages this far apart raise the cross-setting flag.
    pub discrepancy_threshold: f64,
}

/// Maps a RIASEC letter to the pattern that measures it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiasecScale {
    pub letter: RiasecLetter,
    pub pattern: String,
}

/// Critical questions checked on raw answers.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SafetyScreen {
    pub critical_questions: Vec<String>,
    pub threshold: i32,
}

/// Everything the engine needs to score one instrument. Pure data.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Definition {
    pub scale: AnswerScale,
    pub patterns: Vec<PatternDef>,
    pub domains: Vec<DomainDef>,
    pub composites: Vec<CompositeDef>,
    pub questions: Vec<Question>,
    pub thresholds: ThresholdTable,
    pub dual_rater: Option<DualRater>,
    pub riasec: Vec<RiasecScale>,
    pub safety: Option<SafetyScreen>,
}

impl Definition {
    pub fn pattern(&self, code: &str) -> Option<&PatternDef> {
        self.patterns.iter().find(|p| p.code == code)
    }

    pub fn domain(&self, code: &str) -> Option<&DomainDef> {
        self.domains.iter().find(|d| d.code == code)
    }

    /// A question is reverse-scored if it or its pattern says so.
    pub fn is_reversed(&self, question: &Question) -> bool {
        question.reverse || self.pattern(&question.pattern).is_some_and(|p| p.reverse)
    }

    /// Structural checks: every reference resolves and every table is
    /// well-formed. Returns the first problem found.
    pub fn check(&self) -> Result<(), String> {
        if self.scale.span() <= 0 {
            return Err(format!(
                "scale [{}, {}] is empty or inverted",
                self.scale.min, self.scale.max
            ));
        }
        if !self.scale.labels.is_empty()
            && self.scale.labels.len() != (self.scale.span() + 1) as usize
        {
            return Err(format!(
                "scale has {} labels for {} points",
                self.scale.labels.len(),
                self.scale.span() + 1
            ));
        }

        let mut pattern_codes = HashSet::new();
        for pattern in &self.patterns {
            if !pattern_codes.insert(pattern.code.as_str()) {
                return Err(format!("duplicate pattern code '{}'", pattern.code));
            }
        }

        let mut ids = HashSet::new();
        for q in &self.questions {
            if !ids.insert(q.id.as_str()) {
                return Err(format!("duplicate question id '{}'", q.id));
            }
            if !pattern_codes.contains(q.pattern.as_str()) {
                return Err(format!(
                    "question '{}' references unknown pattern '{}'",
                    q.id, q.pattern
                ));
            }
            if let Some(domain) = &q.domain
                && self.domain(domain).is_none()
            {
                return Err(format!(
                    "question '{}' references unknown domain '{domain}'",
                    q.id
                ));
            }
        }

        for composite in &self.composites {
            if composite.components.is_empty() {
                return Err(format!("composite '{}' has no components", composite.code));
            }
            for c in &composite.components {
                if !pattern_codes.contains(c.pattern.as_str()) {
                    return Err(format!(
                        "composite '{}' references unknown pattern '{}'",
                        composite.code, c.pattern
                    ));
                }
                if c.weight.is_nan() || c.weight <= 0.0 {
                    return Err(format!(
                        "composite '{}' has non-positive weight for '{}'",
                        composite.code, c.pattern
                    ));
                }
            }
        }

        self.check_thresholds()?;

        for scale in &self.riasec {
            if !pattern_codes.contains(scale.pattern.as_str()) {
                return Err(format!(
                    "RIASEC letter {} references unknown pattern '{}'",
                    scale.letter, scale.pattern
                ));
            }
        }

        if let Some(dual) = &self.dual_rater
            && (dual.discrepancy_threshold.is_nan() || dual.discrepancy_threshold < 0.0)
        {
            return Err("discrepancy threshold must be non-negative".to_string());
        }

        if let Some(safety) = &self.safety {
            for id in &safety.critical_questions {
                if !ids.contains(id.as_str()) {
                    return Err(format!("safety screen references unknown question '{id}'"));
                }
            }
        }

        Ok(())
    }

    fn check_thresholds(&self) -> Result<(), String> {
        let bands = &self.thresholds.bands;
        let Some((last, bounded)) = bands.split_last() else {
            return Err("threshold table has no bands".to_string());
        };
        if last.upper.is_some() {
            return Err("threshold table has no terminal band".to_string());
        }
        let mut previous = f64::NEG_INFINITY;
        for band in bounded {
            let Some(upper) = band.upper else {
                return Err(format!("band '{}' is unbounded before the last band", band.label));
            };
            if upper <= previous {
                return Err(format!("band '{}' bound {upper} is not ascending", band.label));
            }
            previous = upper;
        }
        Ok(())
    }
}

/// One answer that fails the instrument's scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: String,
    pub value: i32,
    pub expected_min: i32,
    pub expected_max: i32,
    pub message: String,
}

/// Build questions numbered `Q1..Qn` from `(pattern, text, reverse)` rows.
pub(crate) fn numbered(rows: &[(&str, &str, bool)]) -> Vec<Question> {
    rows.iter()
        .enumerate()
        .map(|(i, (pattern, text, reverse))| Question {
            id: format!("Q{}", i + 1),
            pattern: pattern.to_string(),
            domain: None,
            reverse: *reverse,
            text: text.to_string(),
        })
        .collect()
}

pub(crate) fn pattern(code: &str, name: &str, category: Option<&str>) -> PatternDef {
    PatternDef {
        code: code.to_string(),
        name: name.to_string(),
        category: category.map(str::to_string),
        reverse: false,
        description: None,
    }
}

pub(crate) fn composite(code: &str, name: &str, patterns: &[(&str, f64)]) -> CompositeDef {
    CompositeDef {
        code: code.to_string(),
        name: name.to_string(),
        components: patterns
            .iter()
            .map(|(pattern, weight)| Component {
                pattern: pattern.to_string(),
                weight: *weight,
            })
            .collect(),
    }
}
