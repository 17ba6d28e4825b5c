//! imprint-instruments
//!
//! Self-report screening instruments and the engine that scores them. Each
//! instrument is a data declaration (questions, patterns, thresholds,
//! capabilities) and one generic engine turns a response set into a score
//! report. Pure computation: no I/O, no shared mutable state.

pub mod definition;
pub mod engine;
pub mod error;
pub mod instruments;
pub mod options;

use imprint_core::models::report::ScoreReport;
use imprint_core::models::response::ResponseSet;
use imprint_core::models::safety::SafetyFlag;

use definition::{Definition, ValidationError};
use error::InstrumentError;
use options::ScoringOptions;

/// Trait implemented by each self-report instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g., "adhd_7_10", "trauma_loss").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Questions, patterns, thresholds, and capabilities.
    fn definition(&self) -> &Definition;

    /// Every answer outside the instrument's scale. Unknown question ids are
    /// not reported.
    fn validate_responses(&self, responses: &ResponseSet) -> Vec<ValidationError> {
        engine::aggregate::validate(self, responses)
    }

    /// Question ids with no answer, in question order.
    fn missing_questions(&self, responses: &ResponseSet) -> Vec<&str> {
        self.definition()
            .questions
            .iter()
            .filter(|q| !responses.contains(&q.id))
            .map(|q| q.id.as_str())
            .collect()
    }

    /// Whether every question has an answer. Callers check this before a
    /// finalizing score pass; the engine never fills gaps.
    fn is_complete(&self, responses: &ResponseSet) -> bool {
        self.definition()
            .questions
            .iter()
            .all(|q| responses.contains(&q.id))
    }

    /// Raw-answer safety screen. `None` when the instrument has no critical
    /// questions. Works on partial sets.
    fn screen_safety(&self, responses: &ResponseSet) -> Option<SafetyFlag> {
        engine::screen(self, responses, &ScoringOptions::default())
    }

    fn score(
        &self,
        responses: &ResponseSet,
        options: &ScoringOptions,
    ) -> Result<ScoreReport, InstrumentError> {
        engine::score(self, responses, options)
    }

    /// Score both raters of a dual-rater instrument and combine them.
    fn score_dual(
        &self,
        first: &ResponseSet,
        second: &ResponseSet,
        options: &ScoringOptions,
    ) -> Result<ScoreReport, InstrumentError> {
        engine::score_dual(self, first, second, options)
    }

    /// Format a report as structured text for notifications and summaries.
    fn to_structured_summary(&self, report: &ScoreReport) -> String {
        let mut output = format!("## {}\n\n", self.name());
        output.push_str(&format!(
            "Answered {} of {} questions\n\n",
            report.answered, report.total_questions
        ));
        if let Some(overall) = &report.overall {
            output.push_str(&format!(
                "Overall: {:.2} ({}%, {})\n\n",
                overall.average, overall.percentage, overall.severity.label
            ));
        }

        output.push_str("### Patterns\n");
        for pattern in &self.definition().patterns {
            if let Some(score) = report.pattern(&pattern.code) {
                output.push_str(&format!(
                    "- {}: {}% ({})\n",
                    pattern.name, score.percentage, score.severity.label
                ));
            }
        }
        output.push('\n');

        if !report.composite_scores.is_empty() {
            output.push_str("### Composites\n");
            for score in &report.composite_scores {
                output.push_str(&format!(
                    "- {}: {}% ({})\n",
                    score.name, score.percentage, score.severity.label
                ));
            }
            output.push('\n');
        }

        if let Some(code) = report.riasec_code() {
            output.push_str(&format!("Career code: {code}\n"));
        }
        if let Some(flag) = report.safety_flag()
            && flag.flagged
        {
            output.push_str(&format!(
                "SAFETY FLAG: critical answers on {}\n",
                flag.triggered_by.join(", ")
            ));
        }
        for combined in report.combined().iter().filter(|c| c.cross_setting_flag) {
            output.push_str(&format!(
                "Cross-setting discrepancy on {}: {:.2} vs {:.2}\n",
                combined.name, combined.rater_a_average, combined.rater_b_average
            ));
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::adhd_7_10::Adhd7To10),
        Box::new(instruments::adhd_11_17::Adhd11To17),
        Box::new(instruments::career_compass::CareerCompass),
        Box::new(instruments::neural_imprint::NeuralImprint),
        Box::new(instruments::trauma_loss::TraumaLoss),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up an instrument by ID, treating an unknown ID as an error.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
