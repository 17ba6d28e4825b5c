use imprint_core::models::score::Severity;

use crate::definition::{AnswerScale, ThresholdBasis, ThresholdTable};

/// Percentage and label for one average.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub percentage: u8,
    pub severity: Severity,
}

/// Map an average onto 0–100: the scale minimum is 0%, the maximum 100%.
pub fn percentage(scale: &AnswerScale, average: f64) -> u8 {
    let span = f64::from(scale.span());
    let pct = ((average - f64::from(scale.min)) / span * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Percentage plus the band label from `table`.
///
/// Percentage-basis tables compare the rounded percentage that is reported,
/// so the label always agrees with the number shown next to it.
///
/// # Panics
///
/// Panics if `table` has no bands. Definitions are checked before scoring,
/// so this only fires for hand-built tables that skipped
/// [`Definition::check`](crate::definition::Definition::check).
pub fn classify(scale: &AnswerScale, table: &ThresholdTable, average: f64) -> Classification {
    let percentage = percentage(scale, average);
    let value = match table.basis {
        ThresholdBasis::Percentage => f64::from(percentage),
        ThresholdBasis::RawAverage => average,
    };
    let level = table.band_index(value);
    let band = &table.bands[level];

    Classification {
        percentage,
        severity: Severity {
            label: band.label.clone(),
            level: level as u8,
            color: band.color.clone(),
        },
    }
}
