// ============================================================
// CONSTRAINT TYPES
// ============================================================
// Validated numeric limits and per-limit verdicts

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of localization limit a text can be checked against.
/// Declaration order is the order checks are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintKind {
    /// UTF-8 byte budget of a single SMS
    Sms,
    /// Plain character limit
    Characters,
    /// Estimated mobile UI width
    UiMobile,
}

impl ConstraintKind {
    pub const ALL: [ConstraintKind; 3] = [
        ConstraintKind::Sms,
        ConstraintKind::Characters,
        ConstraintKind::UiMobile,
    ];

    /// Parse a raw input key. Unknown keys yield `None` and are ignored by callers.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "sms" => Some(ConstraintKind::Sms),
            "characters" => Some(ConstraintKind::Characters),
            "uiMobile" | "ui_mobile" => Some(ConstraintKind::UiMobile),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ConstraintKind::Sms => "sms",
            ConstraintKind::Characters => "characters",
            ConstraintKind::UiMobile => "uiMobile",
        }
    }

    /// Human label shown next to the verdict
    pub fn label(&self) -> &'static str {
        match self {
            ConstraintKind::Sms => "SMS Length",
            ConstraintKind::Characters => "Character Limit",
            ConstraintKind::UiMobile => "Mobile UI Space",
        }
    }
}

/// A set of positive limits, at most one per kind.
///
/// Built from user input at the boundary so the checker only ever sees
/// validated values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, i64>", into = "BTreeMap<String, u32>")]
pub struct ConstraintSet {
    limits: BTreeMap<ConstraintKind, u32>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a limit; zero removes the constraint
    pub fn set(&mut self, kind: ConstraintKind, limit: u32) {
        if limit > 0 {
            self.limits.insert(kind, limit);
        } else {
            self.limits.remove(&kind);
        }
    }

    pub fn with(mut self, kind: ConstraintKind, limit: u32) -> Self {
        self.set(kind, limit);
        self
    }

    pub fn get(&self, kind: ConstraintKind) -> Option<u32> {
        self.limits.get(&kind).copied()
    }

    pub fn remove(&mut self, kind: ConstraintKind) {
        self.limits.remove(&kind);
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    /// Limits in reporting order: sms, characters, uiMobile
    pub fn iter(&self) -> impl Iterator<Item = (ConstraintKind, u32)> + '_ {
        self.limits.iter().map(|(kind, limit)| (*kind, *limit))
    }

    /// Apply a raw form-field edit. The value is read like a number input:
    /// leading integer digits are used, anything else counts as zero, and a
    /// non-positive result clears the constraint. Unknown keys are ignored.
    pub fn apply_input(&mut self, key: &str, value: &str) {
        let Some(kind) = ConstraintKind::from_key(key) else {
            return;
        };
        let parsed = parse_leading_int(value).unwrap_or(0);
        if parsed > 0 {
            self.set(kind, u32::try_from(parsed).unwrap_or(u32::MAX));
        } else {
            self.remove(kind);
        }
    }

    /// Build a set from raw `(key, value)` input pairs
    pub fn from_input<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut set = Self::new();
        for (key, value) in pairs {
            set.apply_input(key, value);
        }
        set
    }

    pub fn apply_preset(&mut self, preset: ConstraintPreset) {
        self.set(preset.kind(), preset.limit());
    }
}

impl From<BTreeMap<String, i64>> for ConstraintSet {
    fn from(raw: BTreeMap<String, i64>) -> Self {
        let mut set = Self::new();
        for (key, value) in raw {
            if let Some(kind) = ConstraintKind::from_key(&key) {
                if value > 0 {
                    set.set(kind, u32::try_from(value).unwrap_or(u32::MAX));
                }
            }
        }
        set
    }
}

impl From<ConstraintSet> for BTreeMap<String, u32> {
    fn from(set: ConstraintSet) -> Self {
        set.limits
            .into_iter()
            .map(|(kind, limit)| (kind.key().to_string(), limit))
            .collect()
    }
}

/// Parse an optional sign followed by digits, ignoring leading whitespace and
/// any trailing garbage (`"12px"` -> 12).
fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    // Only overflow can fail here
    Some(digits.parse::<i64>().unwrap_or(i64::MAX) * sign)
}

/// Common industry limits offered as one-click presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintPreset {
    Sms,
    Tweet,
    MobileBtnShort,
    MobileBtnLong,
    MetaTitle,
    MetaDesc,
}

impl ConstraintPreset {
    pub const ALL: [ConstraintPreset; 6] = [
        ConstraintPreset::Sms,
        ConstraintPreset::Tweet,
        ConstraintPreset::MobileBtnShort,
        ConstraintPreset::MobileBtnLong,
        ConstraintPreset::MetaTitle,
        ConstraintPreset::MetaDesc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConstraintPreset::Sms => "SMS (160 bytes)",
            ConstraintPreset::Tweet => "Tweet (280 chars)",
            ConstraintPreset::MobileBtnShort => "Mobile Button (12 chars)",
            ConstraintPreset::MobileBtnLong => "Mobile Button (20 chars)",
            ConstraintPreset::MetaTitle => "Meta Title (60 chars)",
            ConstraintPreset::MetaDesc => "Meta Description (160 chars)",
        }
    }

    pub fn kind(&self) -> ConstraintKind {
        match self {
            ConstraintPreset::Sms => ConstraintKind::Sms,
            _ => ConstraintKind::Characters,
        }
    }

    pub fn limit(&self) -> u32 {
        match self {
            ConstraintPreset::Sms => 160,
            ConstraintPreset::Tweet => 280,
            ConstraintPreset::MobileBtnShort => 12,
            ConstraintPreset::MobileBtnLong => 20,
            ConstraintPreset::MetaTitle => 60,
            ConstraintPreset::MetaDesc => 160,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Error above the limit, warning from 90% of the limit, info otherwise
    pub fn for_usage(current: usize, limit: u32) -> Self {
        let limit = limit as usize;
        if current > limit {
            Severity::Error
        } else if current.saturating_mul(10) >= limit.saturating_mul(9) {
            Severity::Warning
        } else {
            Severity::Info
        }
    }
}

/// Verdict for one (text, limit) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintCheck {
    pub kind: ConstraintKind,

    /// Human label, e.g. "Character Limit"
    #[serde(rename = "type")]
    pub label: String,

    pub limit: u32,
    pub current: usize,
    pub passed: bool,
    pub severity: Severity,
}

impl ConstraintCheck {
    pub fn evaluate(kind: ConstraintKind, limit: u32, current: usize) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            limit,
            current,
            passed: current <= limit as usize,
            severity: Severity::for_usage(current, limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_ignores_unknown_and_non_positive() {
        let set = ConstraintSet::from_input([
            ("sms", "160"),
            ("characters", "0"),
            ("uiMobile", "-4"),
            ("width", "99"),
        ]);

        assert_eq!(set.get(ConstraintKind::Sms), Some(160));
        assert_eq!(set.get(ConstraintKind::Characters), None);
        assert_eq!(set.get(ConstraintKind::UiMobile), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_apply_input_reads_leading_digits() {
        let mut set = ConstraintSet::new();
        set.apply_input("characters", " 42chars");
        assert_eq!(set.get(ConstraintKind::Characters), Some(42));

        set.apply_input("characters", "abc");
        assert_eq!(set.get(ConstraintKind::Characters), None);
    }

    #[test]
    fn test_oversized_limit_saturates() {
        let set = ConstraintSet::from_input([
            ("characters", "99999999999999999999"),
            ("sms", "-99999999999999999999"),
        ]);
        assert_eq!(set.get(ConstraintKind::Characters), Some(u32::MAX));
        assert_eq!(set.get(ConstraintKind::Sms), None);
    }

    #[test]
    fn test_iteration_order_is_fixed() {
        let set = ConstraintSet::new()
            .with(ConstraintKind::UiMobile, 10)
            .with(ConstraintKind::Sms, 160)
            .with(ConstraintKind::Characters, 20);

        let kinds: Vec<_> = set.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, ConstraintKind::ALL.to_vec());
    }

    #[test]
    fn test_presets() {
        let mut set = ConstraintSet::new();
        set.apply_preset(ConstraintPreset::Tweet);
        assert_eq!(set.get(ConstraintKind::Characters), Some(280));

        set.apply_preset(ConstraintPreset::Sms);
        assert_eq!(set.get(ConstraintKind::Sms), Some(160));
    }

    #[test]
    fn test_severity_tiers() {
        assert_eq!(Severity::for_usage(11, 10), Severity::Error);
        assert_eq!(Severity::for_usage(10, 10), Severity::Warning);
        assert_eq!(Severity::for_usage(9, 10), Severity::Warning);
        assert_eq!(Severity::for_usage(8, 10), Severity::Info);
    }

    #[test]
    fn test_json_round_trip_drops_invalid_entries() {
        let set: ConstraintSet =
            serde_json::from_str(r#"{"sms": 160, "characters": 0, "bogus": 3}"#).unwrap();
        assert_eq!(set.len(), 1);

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"sms":160}"#);
    }
}
