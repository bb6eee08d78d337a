// ============================================================
// TEXT ANALYSIS USE CASE
// ============================================================
// Byte length, script detection and per-text metrics

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::metrics::{ExpansionGuideline, Script, TextMetrics};

static SPACE_AND_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\p{P}]").unwrap());

static RTL_SCRIPTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Script=Arabic}\p{Script=Hebrew}]").unwrap());

/// One regex per detectable script, in detection priority order
static SCRIPT_PATTERNS: Lazy<Vec<(Script, Regex)>> = Lazy::new(|| {
    Script::DETECTION_ORDER
        .iter()
        .map(|script| {
            let pattern = format!(r"\p{{Script={}}}", script.label());
            (*script, Regex::new(&pattern).unwrap())
        })
        .collect()
});

const DEFAULT_GUIDELINE: ExpansionGuideline = ExpansionGuideline::new(-10, 30, 10);

const GUIDELINES: &[(Script, Script, ExpansionGuideline)] = &[
    (Script::Latin, Script::Han, ExpansionGuideline::new(-30, -10, -20)),
    (Script::Latin, Script::Arabic, ExpansionGuideline::new(0, 25, 15)),
    (Script::Latin, Script::Cyrillic, ExpansionGuideline::new(10, 40, 25)),
    (Script::Latin, Script::Latin, ExpansionGuideline::new(20, 50, 35)),
];

/// Length of `text` in UTF-8 bytes
pub fn byte_length(text: &str) -> usize {
    text.len()
}

/// Length of `text` in UTF-16 code units
pub fn char_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// First script from the fixed priority list present in `text` once
/// whitespace and punctuation are removed
pub fn detect_script(text: &str) -> Script {
    let clean = SPACE_AND_PUNCTUATION.replace_all(text, "");
    if clean.is_empty() {
        return Script::None;
    }

    SCRIPT_PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(&clean))
        .map(|(script, _)| *script)
        .unwrap_or(Script::MixedOther)
}

/// True if `text` contains any Arabic or Hebrew character
pub fn is_rtl_text(text: &str) -> bool {
    RTL_SCRIPTS.is_match(text)
}

/// Signed percentage change in UTF-16 length relative to `reference`
pub fn expansion_rate(reference: &str, text: &str) -> i64 {
    let reference_len = char_length(reference);
    if reference_len == 0 {
        return 0;
    }
    let text_len = char_length(text) as f64;
    let reference_len = reference_len as f64;
    let rate = (text_len - reference_len) / reference_len * 100.0;
    // Halves round toward positive infinity
    (rate + 0.5).floor() as i64
}

pub fn word_count(text: &str) -> usize {
    text.split(|c: char| c.is_whitespace() || c == '\u{feff}')
        .filter(|word| !word.is_empty())
        .count()
}

/// Full metrics for `text`; `reference` may be empty
pub fn get_text_metrics(text: &str, reference: &str) -> TextMetrics {
    TextMetrics {
        characters: char_length(text),
        bytes: byte_length(text),
        words: word_count(text),
        script: detect_script(text),
        is_rtl: is_rtl_text(text),
        expansion_rate: expansion_rate(reference, text),
    }
}

/// Typical expansion range when translating between two scripts
pub fn expansion_guidelines(source: Script, target: Script) -> ExpansionGuideline {
    GUIDELINES
        .iter()
        .find(|(from, to, _)| *from == source && *to == target)
        .map(|(_, _, guideline)| *guideline)
        .unwrap_or(DEFAULT_GUIDELINE)
}
