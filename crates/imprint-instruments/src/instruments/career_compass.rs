use imprint_core::models::riasec::RiasecLetter;

use crate::Instrument;
use crate::definition::{
    AnswerScale, BoundKind, Definition, DomainDef, RiasecScale, ThresholdBasis, ThresholdTable,
    numbered, pattern,
};

const INTERESTS: &str = "interests";
const WORK_STYLE: &str = "work_style";

/// Career Compass: five work-style traits plus the six RIASEC interest
/// scales, rated on 1–5 agreement. Produces a three-letter Holland code.
pub struct CareerCompass;

impl Instrument for CareerCompass {
    fn id(&self) -> &str {
        "career_compass"
    }

    fn name(&self) -> &str {
        "Career Compass"
    }

    fn definition(&self) -> &Definition {
        static DEFINITION: std::sync::LazyLock<Definition> = std::sync::LazyLock::new(|| {
            let riasec = [
                (RiasecLetter::Realistic, "realistic"),
                (RiasecLetter::Investigative, "investigative"),
                (RiasecLetter::Artistic, "artistic"),
                (RiasecLetter::Social, "social"),
                (RiasecLetter::Enterprising, "enterprising"),
                (RiasecLetter::Conventional, "conventional"),
            ];

            let mut patterns: Vec<_> = riasec
                .iter()
                .map(|(letter, code)| pattern(code, letter.name(), Some("Interest")))
                .collect();
            patterns.extend([
                pattern("structure", "Structure & Follow-through", Some("Work Style")),
                pattern("curiosity", "Curiosity & Openness", Some("Work Style")),
                pattern("social_energy", "Social Energy", Some("Work Style")),
                pattern("cooperation", "Cooperation", Some("Work Style")),
                pattern("steadiness", "Steadiness Under Pressure", Some("Work Style")),
            ]);

            let mut questions = numbered(&[
                ("realistic", "I enjoy fixing or building things with my hands.", false),
                ("realistic", "I would like a job that keeps me outdoors or on my feet.", false),
                ("realistic", "I like working with tools, machines, or equipment.", false),
                ("realistic", "I would rather assemble something than read about it.", false),
                ("investigative", "I like figuring out how and why things work.", false),
                ("investigative", "I enjoy solving puzzles and analytical problems.", false),
                ("investigative", "I would like to run experiments or research a question.", false),
                ("investigative", "I read about science or technology for fun.", false),
                ("artistic", "I like expressing ideas through art, music, or writing.", false),
                ("artistic", "I prefer tasks with room for originality.", false),
                ("artistic", "I enjoy designing how something looks or sounds.", false),
                ("artistic", "I would like work where I can create something new.", false),
                ("social", "I enjoy helping people work through problems.", false),
                ("social", "I like teaching or explaining things to others.", false),
                ("social", "I would like a job caring for people's wellbeing.", false),
                ("social", "I notice when someone in a group feels left out.", false),
                ("enterprising", "I like persuading people to back an idea.", false),
                ("enterprising", "I enjoy taking the lead on a project.", false),
                ("enterprising", "I would like to start or run my own business.", false),
                ("enterprising", "I like negotiating to get a good deal.", false),
                ("conventional", "I like keeping records accurate and up to date.", false),
                ("conventional", "I enjoy working with numbers and spreadsheets.", false),
                ("conventional", "I prefer clear procedures to follow.", false),
                ("conventional", "I like organising files, data, or schedules.", false),
                ("structure", "I finish what I start, even when it gets dull.", false),
                ("structure", "I plan my work before I begin.", false),
                ("structure", "I prefer to keep plans loose and decide as I go.", true),
                ("curiosity", "I seek out unfamiliar ideas and experiences.", false),
                ("curiosity", "I enjoy questions that have no single right answer.", false),
                ("curiosity", "I prefer the familiar way of doing things.", true),
                ("social_energy", "I feel energised after time with a group.", false),
                ("social_energy", "I speak up readily in meetings or classes.", false),
                ("social_energy", "I need quiet time alone to recharge after socialising.", true),
                ("cooperation", "I look for solutions that work for everyone.", false),
                ("cooperation", "I give others the benefit of the doubt.", false),
                ("cooperation", "I would rather win an argument than keep the peace.", true),
                ("steadiness", "I stay calm when deadlines pile up.", false),
                ("steadiness", "I bounce back quickly from criticism.", false),
                ("steadiness", "I worry about things that might go wrong.", true),
            ]);
            for q in &mut questions {
                let is_interest = riasec.iter().any(|(_, code)| *code == q.pattern);
                q.domain = Some(if is_interest { INTERESTS } else { WORK_STYLE }.to_string());
            }

            Definition {
                scale: AnswerScale::new(
                    1,
                    5,
                    &["Strongly disagree", "Disagree", "Neutral", "Agree", "Strongly agree"],
                ),
                patterns,
                domains: vec![
                    DomainDef {
                        code: INTERESTS.to_string(),
                        name: "Interests".to_string(),
                        description: Some("What kinds of work draw you in".to_string()),
                    },
                    DomainDef {
                        code: WORK_STYLE.to_string(),
                        name: "Work Style".to_string(),
                        description: Some("How you tend to go about work".to_string()),
                    },
                ],
                composites: vec![],
                questions,
                thresholds: ThresholdTable::new(ThresholdBasis::Percentage, BoundKind::Below)
                    .band(40.0, "Low", "#94a3b8")
                    .band(70.0, "Moderate", "#38bdf8")
                    .otherwise("Strong", "#6366f1"),
                dual_rater: None,
                riasec: riasec
                    .iter()
                    .map(|(letter, code)| RiasecScale {
                        letter: *letter,
                        pattern: code.to_string(),
                    })
                    .collect(),
                safety: None,
            }
        });
        &DEFINITION
    }
}
