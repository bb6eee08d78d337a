// ============================================================
// COLUMN MAPPING
// ============================================================
// Result of fuzzily matching one CSV header to a canonical field

use serde::{Deserialize, Serialize};

use super::CanonicalField;

/// A mapping above this confidence is trusted and claims its field
pub const MAPPING_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Mappings below this confidence are reported back to the user as advisories
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartColumnMapping {
    /// Header text as found in the file
    pub detected: String,

    /// Field the column feeds
    pub mapped: CanonicalField,

    /// Similarity score 0.0 - 1.0
    pub confidence: f64,

    /// First few patterns of the best-scoring field, for display
    pub alternatives: Vec<String>,
}

impl SmartColumnMapping {
    /// Mapping used when nothing scored above zero
    pub fn unmatched(detected: impl Into<String>) -> Self {
        Self {
            detected: detected.into(),
            mapped: CanonicalField::Notes,
            confidence: 0.0,
            alternatives: Vec::new(),
        }
    }

    /// Whether row values for this column are applied to records
    pub fn is_confident(&self) -> bool {
        self.confidence > MAPPING_CONFIDENCE_THRESHOLD
    }

    pub fn is_low_confidence(&self) -> bool {
        self.confidence < HIGH_CONFIDENCE_THRESHOLD
    }
}
