use imprint_core::models::riasec::{RiasecCode, RiasecLetter};
use imprint_core::models::score::PatternScore;

use crate::definition::RiasecScale;
use crate::error::InstrumentError;

/// Pair each mapped letter with its pattern's average. Letters whose pattern
/// has no score are left out.
pub fn interest_scales(mapping: &[RiasecScale], scores: &[PatternScore]) -> Vec<(RiasecLetter, f64)> {
    mapping
        .iter()
        .filter_map(|scale| {
            let score = scores.iter().find(|s| s.code == scale.pattern)?;
            Some((scale.letter, score.average))
        })
        .collect()
}

/// Three highest-scoring letters, highest first.
///
/// Scales are laid out in R, I, A, S, E, C order before a stable sort, so
/// ties go to the earlier letter no matter how the input was ordered. With
/// fewer than three scales the code is simply shorter.
pub fn derive_code(scales: &[(RiasecLetter, f64)]) -> Result<RiasecCode, InstrumentError> {
    let mut ordered: Vec<(RiasecLetter, f64)> = RiasecLetter::ALL
        .into_iter()
        .filter_map(|letter| scales.iter().find(|(l, _)| *l == letter).copied())
        .collect();
    ordered.sort_by(|a, b| b.1.total_cmp(&a.1));

    let letters: Vec<RiasecLetter> = ordered
        .into_iter()
        .take(RiasecCode::MAX_LEN)
        .map(|(letter, _)| letter)
        .collect();
    Ok(RiasecCode::from_letters(&letters)?)
}
