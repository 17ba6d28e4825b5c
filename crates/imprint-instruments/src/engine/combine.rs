use imprint_core::models::score::{CombinedScore, PatternScore};

/// Cross-setting threshold used when an instrument declares none.
pub const DEFAULT_DISCREPANCY_THRESHOLD: f64 = 1.0;

// Averages are ratios of small integers; differences like 3.4 - 2.4 land a
// hair under 1.0 in binary.
const TOLERANCE: f64 = 1e-9;

/// Merge two raters' pattern scores.
///
/// Only patterns scored by both raters are combined; a pattern one rater left
/// unanswered is dropped rather than reported single-sided. Output follows
/// rater A's order.
pub fn combine(a: &[PatternScore], b: &[PatternScore], threshold: f64) -> Vec<CombinedScore> {
    a.iter()
        .filter_map(|sa| {
            let sb = b.iter().find(|sb| sb.code == sa.code)?;
            let discrepancy = (sa.average - sb.average).abs();
            Some(CombinedScore {
                code: sa.code.clone(),
                name: sa.name.clone(),
                rater_a_average: sa.average,
                rater_b_average: sb.average,
                combined_average: (sa.average + sb.average) / 2.0,
                discrepancy,
                cross_setting_flag: discrepancy >= threshold - TOLERANCE,
            })
        })
        .collect()
}

/// Number of pattern codes both raters have scores for.
pub fn shared_pattern_count(a: &[PatternScore], b: &[PatternScore]) -> usize {
    a.iter()
        .filter(|sa| b.iter().any(|sb| sb.code == sa.code))
        .count()
}

/// True once both raters have submitted enough to produce at least one
/// combined score.
pub fn is_ready_to_combine(a: &[PatternScore], b: &[PatternScore]) -> bool {
    shared_pattern_count(a, b) > 0
}
