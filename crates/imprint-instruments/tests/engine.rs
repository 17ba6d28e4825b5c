use imprint_core::models::response::ResponseSet;
use imprint_core::models::riasec::RiasecLetter;
use imprint_core::models::score::{PatternScore, Severity};
use imprint_instruments::Instrument;
use imprint_instruments::definition::{
    AnswerScale, BoundKind, Component, CompositeDef, Definition, PatternDef, Question,
    ThresholdBasis, ThresholdTable,
};
use imprint_instruments::engine::aggregate::aggregate;
use imprint_instruments::engine::classify::{classify, percentage};
use imprint_instruments::engine::combine::{combine, is_ready_to_combine, shared_pattern_count};
use imprint_instruments::engine::rank::rank;
use imprint_instruments::engine::riasec::derive_code;
use imprint_instruments::engine::safety::detect_safety_flag;
use imprint_instruments::error::InstrumentError;
use imprint_instruments::options::ScoringOptions;

struct Fixture(Definition);

impl Instrument for Fixture {
    fn id(&self) -> &str {
        "fixture"
    }

    fn name(&self) -> &str {
        "Fixture"
    }

    fn definition(&self) -> &Definition {
        &self.0
    }
}

fn pattern_def(code: &str, reverse: bool) -> PatternDef {
    PatternDef {
        code: code.to_string(),
        name: code.to_uppercase(),
        category: None,
        reverse,
        description: None,
    }
}

fn question(id: &str, pattern: &str, reverse: bool) -> Question {
    Question {
        id: id.to_string(),
        pattern: pattern.to_string(),
        domain: None,
        reverse,
        text: format!("Question {id}"),
    }
}

fn adhd_table() -> ThresholdTable {
    ThresholdTable::new(ThresholdBasis::RawAverage, BoundKind::Below)
        .band(1.5, "Low/Minimal", "#22c55e")
        .band(2.5, "Mild/Occasional", "#eab308")
        .band(3.5, "Moderate", "#f97316")
        .otherwise("High", "#ef4444")
}

fn fixture(min: i32, max: i32, patterns: Vec<PatternDef>, questions: Vec<Question>) -> Fixture {
    Fixture(Definition {
        scale: AnswerScale {
            min,
            max,
            labels: vec![],
        },
        patterns,
        domains: vec![],
        composites: vec![],
        questions,
        thresholds: ThresholdTable::new(ThresholdBasis::Percentage, BoundKind::Below)
            .band(50.0, "Low", "#000000")
            .otherwise("High", "#ffffff"),
        dual_rater: None,
        riasec: vec![],
        safety: None,
    })
}

fn score_with(code: &str, average: f64) -> PatternScore {
    PatternScore {
        code: code.to_string(),
        name: code.to_string(),
        category: None,
        raw_sum: 0,
        item_count: 1,
        average,
        percentage: 0,
        severity: Severity {
            label: "n/a".to_string(),
            level: 0,
            color: None,
        },
    }
}

fn responses(pairs: &[(&str, i32)]) -> ResponseSet {
    pairs.iter().map(|(id, v)| (*id, *v)).collect()
}

// ── Aggregation ──

#[test]
fn reversed_one_scores_like_plain_five() {
    let inst = fixture(
        1,
        5,
        vec![pattern_def("plain", false), pattern_def("flipped", false)],
        vec![question("Q1", "plain", false), question("Q2", "flipped", true)],
    );

    let agg = aggregate(&inst, &responses(&[("Q1", 5), ("Q2", 1)])).unwrap();
    assert_eq!(agg.pattern("plain").unwrap().average(), 5.0);
    assert_eq!(agg.pattern("flipped").unwrap().average(), 5.0);
}

#[test]
fn pattern_level_reverse_applies_to_all_its_questions() {
    let inst = fixture(
        1,
        4,
        vec![pattern_def("calm", true)],
        vec![question("Q1", "calm", false), question("Q2", "calm", false)],
    );

    let agg = aggregate(&inst, &responses(&[("Q1", 1), ("Q2", 2)])).unwrap();
    let calm = agg.pattern("calm").unwrap();
    assert_eq!(calm.sum, 4 + 3);
    assert_eq!(calm.count, 2);
}

#[test]
fn unanswered_pattern_is_omitted() {
    let inst = fixture(
        1,
        4,
        vec![pattern_def("a", false), pattern_def("b", false)],
        vec![question("Q1", "a", false), question("Q2", "b", false)],
    );

    let agg = aggregate(&inst, &responses(&[("Q1", 1)])).unwrap();
    assert!(agg.pattern("a").is_some());
    assert!(agg.pattern("b").is_none());
    assert_eq!(agg.patterns.len(), 1);
}

#[test]
fn empty_response_set_yields_no_groups() {
    let inst = fixture(1, 4, vec![pattern_def("a", false)], vec![question("Q1", "a", false)]);

    let agg = aggregate(&inst, &ResponseSet::new()).unwrap();
    assert!(agg.patterns.is_empty());
    assert!(agg.overall.is_none());
    assert_eq!(agg.answered(), 0);
}

#[test]
fn unknown_question_ids_are_ignored() {
    let inst = fixture(1, 4, vec![pattern_def("a", false)], vec![question("Q1", "a", false)]);

    let agg = aggregate(&inst, &responses(&[("Q1", 3), ("Q99", 4), ("extra_field", 400)])).unwrap();
    assert_eq!(agg.pattern("a").unwrap().average(), 3.0);
    assert_eq!(agg.answered(), 1);
}

#[test]
fn out_of_range_answers_are_rejected_not_clamped() {
    let inst = fixture(
        1,
        4,
        vec![pattern_def("a", false)],
        vec![question("Q1", "a", false), question("Q2", "a", false)],
    );

    let err = aggregate(&inst, &responses(&[("Q1", 0), ("Q2", 5)])).unwrap_err();
    match err {
        InstrumentError::InvalidResponses {
            instrument_id,
            errors,
            safety_flag,
        } => {
            assert!(safety_flag.is_none());
            assert_eq!(instrument_id, "fixture");
            let ids: Vec<_> = errors.iter().map(|e| e.question_id.as_str()).collect();
            assert_eq!(ids, ["Q1", "Q2"]);
            assert_eq!(errors[0].expected_min, 1);
            assert_eq!(errors[0].expected_max, 4);
        }
        other => panic!("expected InvalidResponses, got {other:?}"),
    }
}

#[test]
fn aggregation_is_deterministic() {
    let inst = fixture(
        1,
        4,
        vec![pattern_def("a", false), pattern_def("b", false)],
        vec![
            question("Q1", "a", false),
            question("Q2", "a", true),
            question("Q3", "b", false),
            question("Q4", "a", false),
        ],
    );
    let set = responses(&[("Q1", 3), ("Q2", 2), ("Q3", 1), ("Q4", 4)]);

    let first = inst.score(&set, &ScoringOptions::default()).unwrap();
    for _ in 0..10 {
        assert_eq!(inst.score(&set, &ScoringOptions::default()).unwrap(), first);
    }
}

// ── Classification ──

#[test]
fn percentage_spans_the_scale() {
    let one_to_four = AnswerScale::new(1, 4, &[]);
    assert_eq!(percentage(&one_to_four, 1.0), 0);
    assert_eq!(percentage(&one_to_four, 4.0), 100);
    assert_eq!(percentage(&one_to_four, 2.5), 50);

    let zero_to_four = AnswerScale::new(0, 4, &[]);
    assert_eq!(percentage(&zero_to_four, 0.0), 0);
    assert_eq!(percentage(&zero_to_four, 2.0), 50);
    assert_eq!(percentage(&zero_to_four, 4.0), 100);
    assert_eq!(percentage(&zero_to_four, 1.0), 25);
}

#[test]
fn strict_boundaries_fall_into_upper_bucket() {
    let scale = AnswerScale::new(1, 4, &[]);
    let table = adhd_table();

    assert_eq!(classify(&scale, &table, 1.0).severity.label, "Low/Minimal");
    assert_eq!(classify(&scale, &table, 1.5).severity.label, "Mild/Occasional");
    assert_eq!(classify(&scale, &table, 2.49999).severity.label, "Mild/Occasional");
    assert_eq!(classify(&scale, &table, 2.5).severity.label, "Moderate");
    assert_eq!(classify(&scale, &table, 3.5).severity.label, "High");
    assert_eq!(classify(&scale, &table, 4.0).severity.level, 3);
}

#[test]
fn inclusive_boundaries_stay_in_lower_bucket() {
    let scale = AnswerScale::new(0, 4, &[]);
    let table = ThresholdTable::new(ThresholdBasis::RawAverage, BoundKind::AtMost)
        .band(1.4, "Green", "#22c55e")
        .band(2.7, "Amber", "#f59e0b")
        .otherwise("Red", "#ef4444");

    assert_eq!(classify(&scale, &table, 1.4).severity.label, "Green");
    assert_eq!(classify(&scale, &table, 7.0 / 5.0).severity.label, "Green");
    assert_eq!(classify(&scale, &table, 1.41).severity.label, "Amber");
    assert_eq!(classify(&scale, &table, 2.7).severity.label, "Amber");
    assert_eq!(classify(&scale, &table, 2.71).severity.label, "Red");
}

#[test]
fn percentage_basis_compares_rounded_percentage() {
    let scale = AnswerScale::new(1, 5, &[]);
    let table = ThresholdTable::new(ThresholdBasis::Percentage, BoundKind::Below)
        .band(25.0, "Low", "#000")
        .otherwise("Higher", "#fff");

    // 2.0 on 1–5 is exactly 25%.
    let class = classify(&scale, &table, 2.0);
    assert_eq!(class.percentage, 25);
    assert_eq!(class.severity.label, "Higher");
    assert_eq!(class.severity.color.as_deref(), Some("#fff"));
}

// ── Ranking ──

#[test]
fn ties_keep_declaration_order() {
    let scores = vec![score_with("A", 2.5), score_with("B", 2.5), score_with("C", 2.5)];

    let ranking = rank(&scores, 3);
    let top: Vec<_> = ranking.top.iter().map(|s| s.code.as_str()).collect();
    let bottom: Vec<_> = ranking.bottom.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(top, ["A", "B", "C"]);
    assert_eq!(bottom, ["A", "B", "C"]);
}

#[test]
fn top_and_bottom_are_ordered() {
    let scores = vec![
        score_with("A", 2.0),
        score_with("B", 3.5),
        score_with("C", 1.0),
        score_with("D", 3.5),
    ];

    let ranking = rank(&scores, 2);
    let top: Vec<_> = ranking.top.iter().map(|s| s.code.as_str()).collect();
    let bottom: Vec<_> = ranking.bottom.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(top, ["B", "D"]);
    assert_eq!(bottom, ["C", "A"]);
}

#[test]
fn n_larger_than_available_returns_all() {
    let scores = vec![score_with("A", 1.0), score_with("B", 2.0)];

    let ranking = rank(&scores, 10);
    assert_eq!(ranking.top.len(), 2);
    assert_eq!(ranking.bottom.len(), 2);
    assert!(rank(&[], 3).top.is_empty());
}

// ── Cross-rater ──

#[test]
fn large_gap_raises_cross_setting_flag() {
    let parent = vec![score_with("focus", 3.8)];
    let teacher = vec![score_with("focus", 2.5)];

    let combined = combine(&parent, &teacher, 1.0);
    assert_eq!(combined.len(), 1);
    let c = &combined[0];
    assert!((c.discrepancy - 1.3).abs() < 1e-9);
    assert!((c.combined_average - 3.15).abs() < 1e-9);
    assert!(c.cross_setting_flag);
}

#[test]
fn small_gap_is_not_flagged() {
    let combined = combine(&[score_with("focus", 2.0)], &[score_with("focus", 2.4)], 1.0);
    assert!((combined[0].discrepancy - 0.4).abs() < 1e-9);
    assert!(!combined[0].cross_setting_flag);
}

#[test]
fn gap_of_exactly_threshold_is_flagged_despite_float_error() {
    let combined = combine(&[score_with("focus", 3.4)], &[score_with("focus", 2.4)], 1.0);
    assert!(combined[0].cross_setting_flag);
}

#[test]
fn single_rater_patterns_are_dropped() {
    let a = vec![score_with("x", 2.0), score_with("only_a", 3.0)];
    let b = vec![score_with("only_b", 1.0), score_with("x", 2.5)];

    let combined = combine(&a, &b, 1.0);
    let codes: Vec<_> = combined.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["x"]);
    assert_eq!(shared_pattern_count(&a, &b), 1);
}

#[test]
fn ready_to_combine_needs_overlap() {
    let a = vec![score_with("x", 2.0)];
    assert!(!is_ready_to_combine(&a, &[]));
    assert!(!is_ready_to_combine(&[], &a));
    assert!(!is_ready_to_combine(&a, &[score_with("y", 1.0)]));
    assert!(is_ready_to_combine(&a, &[score_with("x", 1.0)]));
}

// ── RIASEC ──

#[test]
fn riasec_ties_break_by_letter_order() {
    let scales = [
        (RiasecLetter::Realistic, 3.0),
        (RiasecLetter::Investigative, 4.0),
        (RiasecLetter::Artistic, 2.0),
        (RiasecLetter::Social, 4.0),
        (RiasecLetter::Enterprising, 1.0),
        (RiasecLetter::Conventional, 2.0),
    ];
    assert_eq!(derive_code(&scales).unwrap().as_str(), "ISR");
}

#[test]
fn riasec_ignores_input_order() {
    let scales = [
        (RiasecLetter::Social, 4.0),
        (RiasecLetter::Conventional, 2.0),
        (RiasecLetter::Realistic, 3.0),
        (RiasecLetter::Enterprising, 1.0),
        (RiasecLetter::Investigative, 4.0),
        (RiasecLetter::Artistic, 2.0),
    ];
    assert_eq!(derive_code(&scales).unwrap().as_str(), "ISR");
}

#[test]
fn riasec_with_fewer_than_three_scales_is_short() {
    let code = derive_code(&[(RiasecLetter::Conventional, 2.0), (RiasecLetter::Artistic, 3.5)]).unwrap();
    assert_eq!(code.as_str(), "AC");
    assert!(code.is_partial());
    assert_eq!(derive_code(&[]).unwrap().as_str(), "");
}

// ── Safety ──

#[test]
fn critical_answer_at_threshold_flags() {
    let critical = vec!["Q18".to_string()];
    for value in [3, 4] {
        let flag = detect_safety_flag(&responses(&[("Q18", value)]), &critical, 3);
        assert!(flag.flagged);
        assert_eq!(flag.triggered_by, ["Q18"]);
    }
}

#[test]
fn critical_answer_below_threshold_does_not_flag() {
    let critical = vec!["Q18".to_string()];
    let mut set = responses(&[("Q18", 2)]);
    set.extend((1..=50).filter(|i| *i != 18).map(|i| (format!("Q{i}"), 4)));

    let flag = detect_safety_flag(&set, &critical, 3);
    assert!(!flag.flagged);
    assert!(flag.triggered_by.is_empty());
}

#[test]
fn safety_screen_uses_raw_answers_on_partial_sets() {
    let critical = vec!["Q18".to_string(), "Q19".to_string()];
    let flag = detect_safety_flag(&responses(&[("Q19", 4)]), &critical, 3);
    assert!(flag.flagged);
    assert_eq!(flag.triggered_by, ["Q19"]);
}

// ── Composites and definitions ──

#[test]
fn composite_renormalises_over_answered_components() {
    let mut inst = fixture(
        1,
        4,
        vec![pattern_def("a", false), pattern_def("b", false), pattern_def("c", false)],
        vec![question("Q1", "a", false), question("Q2", "b", false), question("Q3", "c", false)],
    );
    inst.0.composites = vec![CompositeDef {
        code: "ab".to_string(),
        name: "A+B".to_string(),
        components: vec![
            Component {
                pattern: "a".to_string(),
                weight: 3.0,
            },
            Component {
                pattern: "b".to_string(),
                weight: 1.0,
            },
        ],
    }];

    let full = inst
        .score(&responses(&[("Q1", 4), ("Q2", 2), ("Q3", 1)]), &ScoringOptions::default())
        .unwrap();
    let ab = full.composite("ab").unwrap();
    assert_eq!(ab.average, (4.0 * 3.0 + 2.0) / 4.0);
    assert_eq!(ab.item_count, 2);

    let partial = inst
        .score(&responses(&[("Q2", 2)]), &ScoringOptions::default())
        .unwrap();
    assert_eq!(partial.composite("ab").unwrap().average, 2.0);

    let none = inst
        .score(&responses(&[("Q3", 2)]), &ScoringOptions::default())
        .unwrap();
    assert!(none.composite("ab").is_none());
}

#[test]
fn malformed_definition_surfaces_as_error() {
    let inst = fixture(
        1,
        4,
        vec![pattern_def("a", false)],
        vec![question("Q1", "a", false), question("Q1", "a", false)],
    );

    let err = inst.score(&ResponseSet::new(), &ScoringOptions::default()).unwrap_err();
    assert!(matches!(err, InstrumentError::MalformedDefinition { .. }));
    assert!(err.to_string().contains("duplicate question id 'Q1'"));
}

#[test]
fn unknown_pattern_reference_is_malformed() {
    let inst = fixture(1, 4, vec![pattern_def("a", false)], vec![question("Q1", "nope", false)]);
    assert!(inst.definition().check().is_err());
}

#[test]
fn threshold_table_without_terminal_band_is_malformed() {
    let mut inst = fixture(1, 4, vec![pattern_def("a", false)], vec![question("Q1", "a", false)]);
    inst.0.thresholds = ThresholdTable::new(ThresholdBasis::RawAverage, BoundKind::Below).band(2.0, "Low", "#000");
    assert!(inst.definition().check().unwrap_err().contains("terminal band"));
}

#[test]
fn dual_scoring_requires_dual_rater_capability() {
    let inst = fixture(1, 4, vec![pattern_def("a", false)], vec![question("Q1", "a", false)]);
    let err = inst
        .score_dual(&ResponseSet::new(), &ResponseSet::new(), &ScoringOptions::default())
        .unwrap_err();
    assert!(matches!(err, InstrumentError::UnsupportedCapability { .. }));
}
