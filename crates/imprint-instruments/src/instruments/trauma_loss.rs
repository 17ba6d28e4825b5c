use crate::Instrument;
use crate::definition::{
    AnswerScale, BoundKind, Definition, SafetyScreen, ThresholdBasis, ThresholdTable, numbered,
    pattern,
};

/// Trauma & Loss Impact Screener.
/// 50 items over the past month on a 0–4 distress scale, zoned on the raw
/// average. Three items about self-harm and hopelessness are screened
/// individually.
pub struct TraumaLoss;

impl Instrument for TraumaLoss {
    fn id(&self) -> &str {
        "trauma_loss"
    }

    fn name(&self) -> &str {
        "Trauma & Loss Impact Screener"
    }

    fn definition(&self) -> &Definition {
        static DEFINITION: std::sync::LazyLock<Definition> = std::sync::LazyLock::new(|| Definition {
            scale: AnswerScale::new(
                0,
                4,
                &["Not at all", "A little bit", "Moderately", "Quite a bit", "Extremely"],
            ),
            patterns: vec![
                pattern("intrusion", "Intrusive Memories", Some("Re-experiencing")),
                pattern("low_mood", "Low Mood & Hopelessness", Some("Mood")),
                pattern("hyperarousal", "Hyperarousal", Some("Arousal")),
                pattern("avoidance", "Avoidance & Numbing", Some("Avoidance")),
                pattern("grief", "Grief & Loss", Some("Loss")),
            ],
            domains: vec![],
            composites: vec![],
            questions: numbered(&[
                ("intrusion", "Unwanted memories of the event came into my mind.", false),
                ("intrusion", "I had upsetting dreams about what happened.", false),
                ("intrusion", "I felt as if the event were happening again.", false),
                ("intrusion", "Reminders of the event made me very upset.", false),
                ("intrusion", "My body reacted strongly to reminders (racing heart, sweating).", false),
                ("intrusion", "Images of the event popped into my head.", false),
                ("intrusion", "I could not stop thinking about what happened.", false),
                ("intrusion", "Certain smells, sounds, or places brought it all back.", false),
                ("intrusion", "I woke up thinking about the event.", false),
                ("intrusion", "Memories of the event interrupted my work or study.", false),
                ("low_mood", "I felt down, sad, or empty.", false),
                ("low_mood", "I lost interest in things I used to enjoy.", false),
                ("low_mood", "I blamed myself for what happened.", false),
                ("low_mood", "I felt worthless or like a burden.", false),
                ("low_mood", "I felt guilty about things I did or did not do.", false),
                ("low_mood", "I had trouble feeling positive emotions.", false),
                ("low_mood", "I felt that the future holds nothing good for me.", false),
                ("low_mood", "I had thoughts that life is not worth living.", false),
                ("low_mood", "I had thoughts of harming myself.", false),
                ("low_mood", "I felt cut off from the people close to me.", false),
                ("hyperarousal", "I felt on guard or watchful.", false),
                ("hyperarousal", "I was easily startled.", false),
                ("hyperarousal", "I had trouble falling or staying asleep.", false),
                ("hyperarousal", "I felt irritable or had angry outbursts.", false),
                ("hyperarousal", "I had difficulty concentrating.", false),
                ("hyperarousal", "I took more risks than usual.", false),
                ("hyperarousal", "I felt tense and unable to settle.", false),
                ("hyperarousal", "My heart raced or I felt short of breath for no clear reason.", false),
                ("hyperarousal", "Small problems felt overwhelming.", false),
                ("hyperarousal", "I felt exhausted but could not rest.", false),
                ("avoidance", "I avoided thinking or talking about the event.", false),
                ("avoidance", "I stayed away from places or people that reminded me of it.", false),
                ("avoidance", "I felt emotionally numb.", false),
                ("avoidance", "Parts of what happened are blank to me.", false),
                ("avoidance", "I kept busy so I would not have to think.", false),
                ("avoidance", "I used alcohol or other substances to cope.", false),
                ("avoidance", "I withdrew from activities with others.", false),
                ("avoidance", "I felt detached, as if watching myself from outside.", false),
                ("avoidance", "I pushed away people who tried to help.", false),
                ("avoidance", "I avoided news, films, or stories like my experience.", false),
                ("grief", "I yearned for the person or thing I lost.", false),
                ("grief", "I found it hard to accept the loss.", false),
                ("grief", "I felt bitter or angry about the loss.", false),
                ("grief", "I felt that part of me died with the loss.", false),
                ("grief", "I had trouble moving on with my life.", false),
                ("grief", "I felt lonely since the loss.", false),
                ("grief", "I felt I cannot go on without what I lost.", false),
                ("grief", "Holidays or anniversaries were very hard for me.", false),
                ("grief", "I avoided reminders of the loss.", false),
                ("grief", "I felt my life has lost its meaning.", false),
            ]),
            thresholds: ThresholdTable::new(ThresholdBasis::RawAverage, BoundKind::AtMost)
                .band(1.4, "Green", "#22c55e")
                .band(2.7, "Amber", "#f59e0b")
                .otherwise("Red", "#ef4444"),
            dual_rater: None,
            riasec: vec![],
            safety: Some(SafetyScreen {
                critical_questions: vec!["Q18".to_string(), "Q19".to_string(), "Q47".to_string()],
                threshold: 3,
            }),
        });
        &DEFINITION
    }
}
