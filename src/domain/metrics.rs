// ============================================================
// TEXT METRICS TYPES
// ============================================================
// Script labels and per-text measurements

use serde::{Deserialize, Serialize};

/// Unicode writing system detected in a text.
///
/// Variants are declared in detection priority order; the analyzer returns
/// the first script present, not the most frequent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Arabic,
    Hebrew,
    Cyrillic,
    Greek,
    Hiragana,
    Katakana,
    Han,
    Hangul,
    Devanagari,
    Thai,
    /// Nothing left after stripping whitespace and punctuation
    None,
    /// Content present but no known script matched
    #[serde(rename = "Mixed/Other")]
    MixedOther,
}

impl Script {
    /// Scripts tested by the analyzer, in priority order
    pub const DETECTION_ORDER: [Script; 11] = [
        Script::Latin,
        Script::Arabic,
        Script::Hebrew,
        Script::Cyrillic,
        Script::Greek,
        Script::Hiragana,
        Script::Katakana,
        Script::Han,
        Script::Hangul,
        Script::Devanagari,
        Script::Thai,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Script::Latin => "Latin",
            Script::Arabic => "Arabic",
            Script::Hebrew => "Hebrew",
            Script::Cyrillic => "Cyrillic",
            Script::Greek => "Greek",
            Script::Hiragana => "Hiragana",
            Script::Katakana => "Katakana",
            Script::Han => "Han",
            Script::Hangul => "Hangul",
            Script::Devanagari => "Devanagari",
            Script::Thai => "Thai",
            Script::None => "None",
            Script::MixedOther => "Mixed/Other",
        }
    }

    /// CJK scripts render roughly twice as wide as Latin glyphs
    pub fn is_wide(&self) -> bool {
        matches!(self, Script::Han | Script::Hiragana | Script::Katakana)
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived measurements for one text. Recomputed on every input change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    /// Length in UTF-16 code units
    pub characters: usize,

    /// UTF-8 encoded length
    pub bytes: usize,

    /// Whitespace-delimited token count
    pub words: usize,

    pub script: Script,

    #[serde(rename = "isRTL")]
    pub is_rtl: bool,

    /// Signed percentage relative to the reference text, 0 without a reference
    pub expansion_rate: i64,
}

/// Typical expansion range for a language pair, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionGuideline {
    pub min: i64,
    pub max: i64,
    pub typical: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpansionAssessment {
    BelowRange,
    WithinRange,
    AboveRange,
}

impl ExpansionGuideline {
    pub const fn new(min: i64, max: i64, typical: i64) -> Self {
        Self { min, max, typical }
    }

    /// Compare a measured expansion rate against this guideline (bounds inclusive)
    pub fn assess(&self, rate: i64) -> ExpansionAssessment {
        if rate < self.min {
            ExpansionAssessment::BelowRange
        } else if rate > self.max {
            ExpansionAssessment::AboveRange
        } else {
            ExpansionAssessment::WithinRange
        }
    }
}
