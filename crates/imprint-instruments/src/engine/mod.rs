//! The scoring pipeline: aggregate → classify → rank, then whatever the
//! instrument's capabilities call for (RIASEC code, safety screen, cross-rater
//! combination). Every stage is a pure function of its inputs.

pub mod aggregate;
pub mod classify;
pub mod combine;
pub mod rank;
pub mod riasec;
pub mod safety;

use imprint_core::models::report::{RaterPair, ReportDetail, ScoreReport};
use imprint_core::models::response::ResponseSet;
use imprint_core::models::safety::SafetyFlag;
use imprint_core::models::score::PatternScore;

use crate::Instrument;
use crate::definition::Definition;
use crate::error::InstrumentError;
use crate::options::ScoringOptions;
use aggregate::{Aggregate, GroupTotals};

/// Score one respondent's answers.
pub fn score<I: Instrument + ?Sized>(
    instrument: &I,
    responses: &ResponseSet,
    options: &ScoringOptions,
) -> Result<ScoreReport, InstrumentError> {
    let def = checked_definition(instrument)?;

    // Screen before aggregating; a rejected set still hands the flag back.
    let safety_flag = screen(instrument, responses, options);

    let scored = Scored::compute(instrument, responses).map_err(|err| match err {
        InstrumentError::InvalidResponses {
            instrument_id,
            errors,
            ..
        } => InstrumentError::InvalidResponses {
            instrument_id,
            errors,
            safety_flag: safety_flag.clone(),
        },
        other => other,
    })?;

    let detail = if let Some(safety_flag) = safety_flag {
        ReportDetail::SafetyScreen { safety_flag }
    } else if !def.riasec.is_empty() {
        let scales = riasec::interest_scales(&def.riasec, &scored.patterns);
        ReportDetail::Riasec {
            riasec_code: riasec::derive_code(&scales)?,
        }
    } else {
        ReportDetail::Standard
    };

    let report = scored.into_report(instrument, options, detail);
    tracing::info!(
        instrument = instrument.id(),
        answered = report.answered,
        total = report.total_questions,
        patterns = report.pattern_scores.len(),
        "scored responses"
    );
    Ok(report)
}

/// Score two raters of the same subject and merge their pattern scores.
///
/// The report body carries the first rater's scores; the second rater's and
/// the combination live in [`ReportDetail::CrossRater`].
pub fn score_dual<I: Instrument + ?Sized>(
    instrument: &I,
    first: &ResponseSet,
    second: &ResponseSet,
    options: &ScoringOptions,
) -> Result<ScoreReport, InstrumentError> {
    let def = checked_definition(instrument)?;
    let Some(dual) = &def.dual_rater else {
        return Err(InstrumentError::UnsupportedCapability {
            instrument_id: instrument.id().to_string(),
            capability: "dual-rater scoring",
        });
    };

    let threshold = options
        .discrepancy_threshold
        .unwrap_or(dual.discrepancy_threshold);
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(InstrumentError::InvalidOption {
            instrument_id: instrument.id().to_string(),
            reason: format!("discrepancy threshold must be finite and non-negative, got {threshold}"),
        });
    }

    let a = Scored::compute(instrument, first)?;
    let b = Scored::compute(instrument, second)?;
    let combined = combine::combine(&a.patterns, &b.patterns, threshold);

    let flagged = combined.iter().filter(|c| c.cross_setting_flag).count();
    tracing::info!(
        instrument = instrument.id(),
        combined = combined.len(),
        flagged,
        "combined rater scores"
    );

    let detail = ReportDetail::CrossRater {
        raters: RaterPair {
            first: dual.first.clone(),
            second: dual.second.clone(),
        },
        second_rater_scores: b.patterns,
        combined,
    };
    Ok(a.into_report(instrument, options, detail))
}

/// The instrument's safety screen over raw answers, if it has one.
pub fn screen<I: Instrument + ?Sized>(
    instrument: &I,
    responses: &ResponseSet,
    options: &ScoringOptions,
) -> Option<SafetyFlag> {
    let screen = instrument.definition().safety.as_ref()?;
    let threshold = options.safety_threshold.unwrap_or(screen.threshold);
    let flag = safety::detect_safety_flag(responses, &screen.critical_questions, threshold);
    if flag.flagged {
        tracing::warn!(
            instrument = instrument.id(),
            triggered_by = ?flag.triggered_by,
            "safety flag raised"
        );
    }
    Some(flag)
}

fn checked_definition<I: Instrument + ?Sized>(instrument: &I) -> Result<&Definition, InstrumentError> {
    let def = instrument.definition();
    def.check()
        .map_err(|reason| InstrumentError::MalformedDefinition {
            instrument_id: instrument.id().to_string(),
            reason,
        })?;
    Ok(def)
}

/// Classified scores for one response set, before capability extras.
struct Scored {
    answered: u32,
    overall: Option<PatternScore>,
    patterns: Vec<PatternScore>,
    composites: Vec<PatternScore>,
    domains: Vec<PatternScore>,
}

impl Scored {
    fn compute<I: Instrument + ?Sized>(
        instrument: &I,
        responses: &ResponseSet,
    ) -> Result<Self, InstrumentError> {
        let def = instrument.definition();
        let agg = aggregate::aggregate(instrument, responses)?;

        let patterns: Vec<PatternScore> = agg
            .patterns
            .iter()
            .filter_map(|totals| {
                let p = def.pattern(&totals.code)?;
                Some(to_score(def, totals, &p.name, p.category.as_deref()))
            })
            .collect();

        let domains: Vec<PatternScore> = agg
            .domains
            .iter()
            .filter_map(|totals| {
                let d = def.domain(&totals.code)?;
                Some(to_score(def, totals, &d.name, None))
            })
            .collect();

        let overall = agg
            .overall
            .as_ref()
            .map(|totals| to_score(def, totals, instrument.name(), None));

        Ok(Self {
            answered: agg.answered(),
            overall,
            composites: composites(def, &agg),
            patterns,
            domains,
        })
    }

    fn into_report<I: Instrument + ?Sized>(
        self,
        instrument: &I,
        options: &ScoringOptions,
        detail: ReportDetail,
    ) -> ScoreReport {
        let ranking = rank::rank(&self.patterns, options.top_n);
        ScoreReport {
            instrument_id: instrument.id().to_string(),
            answered: self.answered,
            total_questions: instrument.definition().questions.len() as u32,
            overall: self.overall,
            pattern_scores: self.patterns,
            composite_scores: self.composites,
            domain_scores: self.domains,
            top_patterns: ranking.top,
            bottom_patterns: ranking.bottom,
            detail,
        }
    }
}

fn to_score(def: &Definition, totals: &GroupTotals, name: &str, category: Option<&str>) -> PatternScore {
    let average = totals.average();
    let class = classify::classify(&def.scale, &def.thresholds, average);
    PatternScore {
        code: totals.code.clone(),
        name: name.to_string(),
        category: category.map(str::to_string),
        raw_sum: totals.sum,
        item_count: totals.count,
        average,
        percentage: class.percentage,
        severity: class.severity,
    }
}

/// Weighted means over whichever components were answered; weights are
/// renormalised over those. A composite with no answered component is left
/// out like any other empty group.
fn composites(def: &Definition, agg: &Aggregate) -> Vec<PatternScore> {
    def.composites
        .iter()
        .filter_map(|composite| {
            let present: Vec<(&GroupTotals, f64)> = composite
                .components
                .iter()
                .filter_map(|c| agg.pattern(&c.pattern).map(|g| (g, c.weight)))
                .collect();
            if present.is_empty() {
                return None;
            }

            let weight_total: f64 = present.iter().map(|(_, w)| w).sum();
            let average = present.iter().map(|(g, w)| g.average() * w).sum::<f64>() / weight_total;
            let class = classify::classify(&def.scale, &def.thresholds, average);

            Some(PatternScore {
                code: composite.code.clone(),
                name: composite.name.clone(),
                category: None,
                raw_sum: present.iter().map(|(g, _)| g.sum).sum(),
                item_count: present.iter().map(|(g, _)| g.count).sum(),
                average,
                percentage: class.percentage,
                severity: class.severity,
            })
        })
        .collect()
}
