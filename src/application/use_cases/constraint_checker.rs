// ============================================================
// CONSTRAINT CHECKER USE CASE
// ============================================================
// Evaluate one text against SMS, character and mobile-width limits

use crate::domain::constraint::{ConstraintCheck, ConstraintKind, ConstraintSet};
use crate::domain::metrics::TextMetrics;

use super::text_analysis::get_text_metrics;

/// One check per configured limit, in the order sms, characters, uiMobile
pub fn check_constraints(text: &str, constraints: &ConstraintSet) -> Vec<ConstraintCheck> {
    if constraints.is_empty() {
        return Vec::new();
    }

    let metrics = get_text_metrics(text, "");
    constraints
        .iter()
        .map(|(kind, limit)| ConstraintCheck::evaluate(kind, limit, measure(kind, &metrics)))
        .collect()
}

/// The quantity a constraint kind compares against its limit
pub fn measure(kind: ConstraintKind, metrics: &TextMetrics) -> usize {
    match kind {
        ConstraintKind::Sms => metrics.bytes,
        ConstraintKind::Characters => metrics.characters,
        ConstraintKind::UiMobile => estimated_width(metrics),
    }
}

/// Approximate rendered width: CJK glyphs count double
fn estimated_width(metrics: &TextMetrics) -> usize {
    let factor = if metrics.script.is_wide() { 2 } else { 1 };
    metrics.characters * factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constraint::Severity;

    #[test]
    fn test_hello_world_over_character_limit() {
        let set = ConstraintSet::new().with(ConstraintKind::Characters, 5);
        let checks = check_constraints("Hello World", &set);

        assert_eq!(checks.len(), 1);
        let check = &checks[0];
        assert_eq!(check.label, "Character Limit");
        assert_eq!(check.current, 11);
        assert_eq!(check.limit, 5);
        assert!(!check.passed);
        assert_eq!(check.severity, Severity::Error);
    }

    #[test]
    fn test_checks_follow_fixed_order() {
        let set = ConstraintSet::new()
            .with(ConstraintKind::UiMobile, 30)
            .with(ConstraintKind::Sms, 160)
            .with(ConstraintKind::Characters, 20);
        let kinds: Vec<_> = check_constraints("Save", &set)
            .into_iter()
            .map(|check| check.kind)
            .collect();

        assert_eq!(kinds, ConstraintKind::ALL.to_vec());
    }

    #[test]
    fn test_sms_counts_bytes() {
        let set = ConstraintSet::new().with(ConstraintKind::Sms, 10);
        // 5 kana, 3 bytes each
        let checks = check_constraints("こんにちは", &set);
        assert_eq!(checks[0].current, 15);
        assert!(!checks[0].passed);
    }

    #[test]
    fn test_warning_tier_at_ninety_percent() {
        let set = ConstraintSet::new().with(ConstraintKind::Characters, 10);

        let at_limit = &check_constraints("abcdefghij", &set)[0];
        assert!(at_limit.passed);
        assert_eq!(at_limit.severity, Severity::Warning);

        let ninety = &check_constraints("abcdefghi", &set)[0];
        assert_eq!(ninety.severity, Severity::Warning);

        let below = &check_constraints("abcdefgh", &set)[0];
        assert_eq!(below.severity, Severity::Info);
    }

    #[test]
    fn test_mobile_width_doubles_for_cjk() {
        let set = ConstraintSet::new().with(ConstraintKind::UiMobile, 12);

        let japanese = &check_constraints("お部屋を選択", &set)[0];
        assert_eq!(japanese.current, 12);
        assert!(japanese.passed);

        let latin = &check_constraints("Select Room", &set)[0];
        assert_eq!(latin.current, 11);
    }

    #[test]
    fn test_empty_set_yields_no_checks() {
        assert!(check_constraints("anything", &ConstraintSet::new()).is_empty());
    }
}
