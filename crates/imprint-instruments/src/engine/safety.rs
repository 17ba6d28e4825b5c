use imprint_core::models::response::ResponseSet;
use imprint_core::models::safety::SafetyFlag;

/// Flag any critical question whose raw answer is at or above `threshold`.
///
/// Reads raw answers only: no reverse scoring, no range validation, no
/// dependence on whether the rest of the set is complete.
pub fn detect_safety_flag(
    responses: &ResponseSet,
    critical_questions: &[String],
    threshold: i32,
) -> SafetyFlag {
    let triggered_by: Vec<String> = critical_questions
        .iter()
        .filter(|id| responses.get(id).is_some_and(|v| v >= threshold))
        .cloned()
        .collect();

    SafetyFlag {
        flagged: !triggered_by.is_empty(),
        triggered_by,
    }
}
