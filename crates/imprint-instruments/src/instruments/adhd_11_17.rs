use crate::Instrument;
use crate::definition::{
    AnswerScale, BoundKind, Definition, DualRater, ThresholdBasis, ThresholdTable, composite,
    numbered, pattern,
};
use crate::engine::combine::DEFAULT_DISCREPANCY_THRESHOLD;

/// ADHD pattern screener for adolescents aged 11–17.
/// Self-report plus a parent rating on a 1–4 frequency scale; severity bands
/// are cut on the percentage.
pub struct Adhd11To17;

impl Instrument for Adhd11To17 {
    fn id(&self) -> &str {
        "adhd_11_17"
    }

    fn name(&self) -> &str {
        "ADHD Pattern Screener (Ages 11–17)"
    }

    fn definition(&self) -> &Definition {
        static DEFINITION: std::sync::LazyLock<Definition> = std::sync::LazyLock::new(|| Definition {
            scale: AnswerScale::new(1, 4, &["Never", "Sometimes", "Often", "Very often"]),
            patterns: vec![
                pattern("drifting_attention", "Drifting Attention", Some("Attention")),
                pattern("time_blindness", "Time Blindness", Some("Executive")),
                pattern("stalled_starts", "Stalled Starts", Some("Executive")),
                pattern("inner_restlessness", "Inner Restlessness", Some("Activation")),
                pattern("act_first", "Act First, Think Later", Some("Activation")),
                pattern("emotional_intensity", "Emotional Intensity", Some("Regulation")),
            ],
            domains: vec![],
            composites: vec![
                composite(
                    "executive_load",
                    "Executive Load",
                    &[("time_blindness", 1.0), ("stalled_starts", 1.0)],
                ),
                composite(
                    "activation",
                    "Activation",
                    &[("inner_restlessness", 1.0), ("act_first", 1.0)],
                ),
            ],
            questions: numbered(&[
                ("drifting_attention", "Zones out in class or while reading.", false),
                ("drifting_attention", "Has to reread pages because the meaning did not sink in.", false),
                ("drifting_attention", "Loses the thread of conversations.", false),
                ("drifting_attention", "Stays with a lecture or video from start to finish.", true),
                ("time_blindness", "Underestimates how long tasks will take.", false),
                ("time_blindness", "Is late even when leaving seemed early enough.", false),
                ("time_blindness", "Misses deadlines that were known well in advance.", false),
                ("time_blindness", "Keeps track of time without reminders.", true),
                ("stalled_starts", "Puts off starting assignments until the last minute.", false),
                ("stalled_starts", "Knows what to do but cannot get going.", false),
                ("stalled_starts", "Needs outside pressure to begin boring tasks.", false),
                ("stalled_starts", "Breaks big projects into steps without help.", true),
                ("inner_restlessness", "Feels restless or edgy when sitting still.", false),
                ("inner_restlessness", "Taps, fidgets, or paces while thinking.", false),
                ("inner_restlessness", "Finds quiet downtime uncomfortable.", false),
                ("inner_restlessness", "Talks more than others in the group.", false),
                ("act_first", "Says things without thinking and regrets it later.", false),
                ("act_first", "Makes quick decisions that cause problems.", false),
                ("act_first", "Takes risks for the thrill of it.", false),
                ("act_first", "Stops to think before reacting.", true),
                ("emotional_intensity", "Feels emotions more strongly than peers seem to.", false),
                ("emotional_intensity", "Snaps at people when frustrated.", false),
                ("emotional_intensity", "Feels rejected by small comments.", false),
                ("emotional_intensity", "Recovers quickly from a bad mood.", true),
            ]),
            thresholds: ThresholdTable::new(ThresholdBasis::Percentage, BoundKind::Below)
                .band(25.0, "Minimal", "#22c55e")
                .band(50.0, "Mild", "#eab308")
                .band(75.0, "Moderate", "#f97316")
                .otherwise("Significant", "#ef4444"),
            dual_rater: Some(DualRater {
                first: "self".to_string(),
                second: "parent".to_string(),
                discrepancy_threshold: DEFAULT_DISCREPANCY_THRESHOLD,
            }),
            riasec: vec![],
            safety: None,
        });
        &DEFINITION
    }
}
