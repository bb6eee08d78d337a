// ============================================================
// CANONICAL FIELD
// ============================================================
// Comparison record fields a CSV column can be mapped onto

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    ReferenceText,
    Context,
    TextA,
    TextB,
    Notes,
}

impl CanonicalField {
    /// Fields in the order the mapper considers them and the exporter writes them
    pub const ALL: [CanonicalField; 5] = [
        CanonicalField::ReferenceText,
        CanonicalField::Context,
        CanonicalField::TextA,
        CanonicalField::TextB,
        CanonicalField::Notes,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CanonicalField::ReferenceText => "referenceText",
            CanonicalField::Context => "context",
            CanonicalField::TextA => "textA",
            CanonicalField::TextB => "textB",
            CanonicalField::Notes => "notes",
        }
    }

    pub fn is_candidate_text(&self) -> bool {
        matches!(self, CanonicalField::TextA | CanonicalField::TextB)
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
