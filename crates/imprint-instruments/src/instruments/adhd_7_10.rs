use crate::Instrument;
use crate::definition::{
    AnswerScale, BoundKind, Definition, DualRater, ThresholdBasis, ThresholdTable, composite,
    numbered, pattern,
};
use crate::engine::combine::DEFAULT_DISCREPANCY_THRESHOLD;

/// ADHD pattern screener for children aged 7–10.
/// Rated independently by a parent and a teacher on a 1–4 frequency scale;
/// severity is read straight off the pattern average.
pub struct Adhd7To10;

impl Instrument for Adhd7To10 {
    fn id(&self) -> &str {
        "adhd_7_10"
    }

    fn name(&self) -> &str {
        "ADHD Pattern Screener (Ages 7–10)"
    }

    fn definition(&self) -> &Definition {
        static DEFINITION: std::sync::LazyLock<Definition> = std::sync::LazyLock::new(|| {
            let mut patterns = vec![
                pattern("scattered_focus", "Scattered Focus", Some("Inattentive")),
                pattern("unfinished_tasks", "Unfinished Tasks", Some("Inattentive")),
                pattern("lost_and_forgotten", "Lost & Forgotten", Some("Inattentive")),
                pattern("motor_restlessness", "Motor Restlessness", Some("Hyperactive-Impulsive")),
                pattern("blurt_and_interrupt", "Blurt & Interrupt", Some("Hyperactive-Impulsive")),
                pattern("emotional_surges", "Emotional Surges", Some("Regulation")),
            ];
            patterns[0].description =
                Some("Attention drifts during instruction, play, and conversation".to_string());
            patterns[5].description =
                Some("Big, fast reactions that take a long time to settle".to_string());

            Definition {
                scale: AnswerScale::new(1, 4, &["Never", "Sometimes", "Often", "Very often"]),
                patterns,
                domains: vec![],
                composites: vec![
                    composite(
                        "inattentive_presentation",
                        "Inattentive Presentation",
                        &[("scattered_focus", 1.0), ("unfinished_tasks", 1.0), ("lost_and_forgotten", 1.0)],
                    ),
                    composite(
                        "hyperactive_impulsive_presentation",
                        "Hyperactive-Impulsive Presentation",
                        &[("motor_restlessness", 1.0), ("blurt_and_interrupt", 1.0)],
                    ),
                ],
                questions: numbered(&[
                    ("scattered_focus", "Loses focus when someone is giving instructions.", false),
                    ("scattered_focus", "Makes careless mistakes in schoolwork or chores.", false),
                    ("scattered_focus", "Seems not to listen when spoken to directly.", false),
                    ("scattered_focus", "Is pulled off task by small noises or movement nearby.", false),
                    ("unfinished_tasks", "Starts activities but leaves them unfinished.", false),
                    ("unfinished_tasks", "Avoids tasks that need sustained mental effort.", false),
                    ("unfinished_tasks", "Needs repeated reminders to complete a routine.", false),
                    ("unfinished_tasks", "Finishes homework without needing to be redirected.", true),
                    ("lost_and_forgotten", "Loses things needed for school or activities.", false),
                    ("lost_and_forgotten", "Forgets daily tasks such as packing a bag.", false),
                    ("lost_and_forgotten", "Keeps belongings organised without help.", true),
                    ("lost_and_forgotten", "Forgets what they were asked to fetch.", false),
                    ("motor_restlessness", "Fidgets with hands or feet or squirms in the seat.", false),
                    ("motor_restlessness", "Leaves their seat when remaining seated is expected.", false),
                    ("motor_restlessness", "Runs or climbs when it is not appropriate.", false),
                    ("motor_restlessness", "Is on the go, as if driven by a motor.", false),
                    ("blurt_and_interrupt", "Blurts out answers before a question is finished.", false),
                    ("blurt_and_interrupt", "Has trouble waiting for their turn.", false),
                    ("blurt_and_interrupt", "Interrupts or intrudes on others' games or conversations.", false),
                    ("blurt_and_interrupt", "Waits for their turn without prompting.", true),
                    ("emotional_surges", "Gets upset quickly over small frustrations.", false),
                    ("emotional_surges", "Takes a long time to calm down after being upset.", false),
                    ("emotional_surges", "Has outbursts that seem bigger than the situation.", false),
                    ("emotional_surges", "Moves on easily after a disappointment.", true),
                ]),
                thresholds: ThresholdTable::new(ThresholdBasis::RawAverage, BoundKind::Below)
                    .band(1.5, "Low/Minimal", "#22c55e")
                    .band(2.5, "Mild/Occasional", "#eab308")
                    .band(3.5, "Moderate", "#f97316")
                    .otherwise("High", "#ef4444"),
                dual_rater: Some(DualRater {
                    first: "parent".to_string(),
                    second: "teacher".to_string(),
                    discrepancy_threshold: DEFAULT_DISCREPANCY_THRESHOLD,
                }),
                riasec: vec![],
                safety: None,
            }
        });
        &DEFINITION
    }
}
