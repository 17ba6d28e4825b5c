use imprint_core::models::score::PatternScore;

#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Highest first.
    pub top: Vec<PatternScore>,
    /// Lowest first.
    pub bottom: Vec<PatternScore>,
}

/// Top-`n` and bottom-`n` views of `scores`.
///
/// Both sorts are stable, so tied patterns keep the order they were passed
/// in (the instrument's declaration order). `n` beyond the number of scores
/// returns them all.
pub fn rank(scores: &[PatternScore], n: usize) -> Ranking {
    let mut top = scores.to_vec();
    top.sort_by(|a, b| b.average.total_cmp(&a.average));
    top.truncate(n);

    let mut bottom = scores.to_vec();
    bottom.sort_by(|a, b| a.average.total_cmp(&b.average));
    bottom.truncate(n);

    Ranking { top, bottom }
}
