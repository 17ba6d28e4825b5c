use std::collections::HashSet;

use imprint_core::models::response::ResponseSet;

use crate::Instrument;
use crate::definition::ValidationError;
use crate::error::InstrumentError;

/// Raw totals for one group of questions.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotals {
    pub code: String,
    pub sum: i32,
    pub count: u32,
}

impl GroupTotals {
    fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            sum: 0,
            count: 0,
        }
    }

    fn add(&mut self, value: i32) {
        self.sum += value;
        self.count += 1;
    }

    /// Only called on groups with at least one answer; empty groups never
    /// leave [`aggregate`].
    pub fn average(&self) -> f64 {
        f64::from(self.sum) / f64::from(self.count)
    }
}

/// Per-pattern and per-domain totals, each in declaration order, with
/// unanswered groups left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    pub patterns: Vec<GroupTotals>,
    pub domains: Vec<GroupTotals>,
    /// Every answered item pooled.
    pub overall: Option<GroupTotals>,
}

impl Aggregate {
    pub fn pattern(&self, code: &str) -> Option<&GroupTotals> {
        self.patterns.iter().find(|g| g.code == code)
    }

    pub fn domain(&self, code: &str) -> Option<&GroupTotals> {
        self.domains.iter().find(|g| g.code == code)
    }

    pub fn answered(&self) -> u32 {
        self.overall.as_ref().map_or(0, |g| g.count)
    }
}

pub const OVERALL_CODE: &str = "overall";

/// Every out-of-range answer to a known question. Unknown ids are not
/// errors.
pub fn validate<I: Instrument + ?Sized>(
    instrument: &I,
    responses: &ResponseSet,
) -> Vec<ValidationError> {
    let def = instrument.definition();
    let scale = &def.scale;

    def.questions
        .iter()
        .filter_map(|q| {
            let value = responses.get(&q.id)?;
            if scale.contains(value) {
                return None;
            }
            Some(ValidationError {
                question_id: q.id.clone(),
                value,
                expected_min: scale.min,
                expected_max: scale.max,
                message: format!(
                    "{}: answer {value} to {} is outside range [{}, {}]",
                    instrument.name(),
                    q.id,
                    scale.min,
                    scale.max,
                ),
            })
        })
        .collect()
}

/// Sum, count, and average answers per pattern and per domain.
///
/// Walks the instrument's question list, not the response map, so the
/// accumulation order is fixed regardless of how answers arrived.
pub fn aggregate<I: Instrument + ?Sized>(
    instrument: &I,
    responses: &ResponseSet,
) -> Result<Aggregate, InstrumentError> {
    let errors = validate(instrument, responses);
    if !errors.is_empty() {
        return Err(InstrumentError::InvalidResponses {
            instrument_id: instrument.id().to_string(),
            errors,
            safety_flag: None,
        });
    }

    let def = instrument.definition();
    let known: HashSet<&str> = def.questions.iter().map(|q| q.id.as_str()).collect();
    for (id, _) in responses.iter().filter(|(id, _)| !known.contains(id)) {
        tracing::debug!(instrument = instrument.id(), question_id = id, "ignoring answer to unknown question");
    }

    let mut patterns: Vec<GroupTotals> = def.patterns.iter().map(|p| GroupTotals::new(&p.code)).collect();
    let mut domains: Vec<GroupTotals> = def.domains.iter().map(|d| GroupTotals::new(&d.code)).collect();
    let mut overall = GroupTotals::new(OVERALL_CODE);

    for q in &def.questions {
        let Some(raw) = responses.get(&q.id) else {
            continue;
        };
        let value = if def.is_reversed(q) { def.scale.reverse(raw) } else { raw };

        if let Some(group) = patterns.iter_mut().find(|g| g.code == q.pattern) {
            group.add(value);
        }
        if let Some(domain) = &q.domain
            && let Some(group) = domains.iter_mut().find(|g| &g.code == domain)
        {
            group.add(value);
        }
        overall.add(value);
    }

    let omitted: Vec<&str> = patterns
        .iter()
        .filter(|g| g.count == 0)
        .map(|g| g.code.as_str())
        .collect();
    if !omitted.is_empty() {
        tracing::debug!(instrument = instrument.id(), ?omitted, "patterns without answers omitted");
    }

    patterns.retain(|g| g.count > 0);
    domains.retain(|g| g.count > 0);

    Ok(Aggregate {
        patterns,
        domains,
        overall: (overall.count > 0).then_some(overall),
    })
}
