use crate::Instrument;
use crate::definition::{
    AnswerScale, BoundKind, Definition, ThresholdBasis, ThresholdTable, numbered, pattern,
};

/// Neural Imprint self-assessment: six learned response patterns rated on a
/// 1–5 "how much like me" scale.
pub struct NeuralImprint;

impl Instrument for NeuralImprint {
    fn id(&self) -> &str {
        "neural_imprint"
    }

    fn name(&self) -> &str {
        "Neural Imprint Assessment"
    }

    fn definition(&self) -> &Definition {
        static DEFINITION: std::sync::LazyLock<Definition> = std::sync::LazyLock::new(|| Definition {
            scale: AnswerScale::new(
                1,
                5,
                &["Not like me", "A little like me", "Somewhat like me", "Mostly like me", "Exactly like me"],
            ),
            patterns: vec![
                pattern("hypervigilance", "Hypervigilance", Some("Threat")),
                pattern("approval_seeking", "Approval Seeking", Some("Connection")),
                pattern("perfectionism", "Perfectionism", Some("Control")),
                pattern("withdrawal", "Withdrawal", Some("Connection")),
                pattern("over_control", "Over-Control", Some("Control")),
                pattern("self_criticism", "Self-Criticism", Some("Threat")),
            ],
            domains: vec![],
            composites: vec![],
            questions: numbered(&[
                ("hypervigilance", "I scan a room for signs that something is wrong.", false),
                ("hypervigilance", "Sudden noises make me jump.", false),
                ("hypervigilance", "I find it hard to relax even when things are fine.", false),
                ("hypervigilance", "I feel safe in most everyday situations.", true),
                ("approval_seeking", "I change my opinion to match the people around me.", false),
                ("approval_seeking", "I feel anxious until someone tells me I did well.", false),
                ("approval_seeking", "I find it hard to say no.", false),
                ("approval_seeking", "I am comfortable when others disagree with me.", true),
                ("perfectionism", "Small mistakes feel like failures.", false),
                ("perfectionism", "I redo work that others would call finished.", false),
                ("perfectionism", "I delay starting until I can do it perfectly.", false),
                ("perfectionism", "Good enough is usually good enough for me.", true),
                ("withdrawal", "When upset, I shut down or go quiet.", false),
                ("withdrawal", "I keep my problems to myself.", false),
                ("withdrawal", "I pull away from people when I feel overwhelmed.", false),
                ("withdrawal", "I reach out to someone when I am struggling.", true),
                ("over_control", "I get uneasy when plans change at short notice.", false),
                ("over_control", "I prefer to do things myself so they are done right.", false),
                ("over_control", "I need to know what is coming next.", false),
                ("over_control", "I go with the flow when things are uncertain.", true),
                ("self_criticism", "I am harder on myself than on anyone else.", false),
                ("self_criticism", "I replay my mistakes for days.", false),
                ("self_criticism", "My inner voice is harsh.", false),
                ("self_criticism", "I treat myself kindly after a setback.", true),
            ]),
            thresholds: ThresholdTable::new(ThresholdBasis::Percentage, BoundKind::Below)
                .band(25.0, "Low", "#22c55e")
                .band(50.0, "Emerging", "#eab308")
                .band(75.0, "Active", "#f97316")
                .otherwise("Dominant", "#ef4444"),
            dual_rater: None,
            riasec: vec![],
            safety: None,
        });
        &DEFINITION
    }
}
