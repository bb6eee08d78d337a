// ============================================================
// IMPORT RESULT TYPES
// ============================================================

use serde::{Deserialize, Serialize};

use super::{Separator, SmartColumnMapping};
use crate::domain::comparison::ComparisonRecord;

/// Outcome of one smart CSV import.
///
/// Expected problems are reported in `errors` instead of failing the call:
/// structural errors leave `records` empty, row errors skip only their row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartCsvResult {
    /// True when no errors at all were recorded
    pub success: bool,
    pub records: Vec<ComparisonRecord>,
    pub errors: Vec<String>,
    pub mapping: Vec<SmartColumnMapping>,
    /// Non-fatal advisories (detected separator, low-confidence columns)
    pub suggestions: Vec<String>,
    /// Detected separator, absent when the import stopped before detection
    pub separator: Option<Separator>,
}

impl SmartCsvResult {
    /// A structural failure: nothing imported
    pub fn failed(
        error: impl Into<String>,
        mapping: Vec<SmartColumnMapping>,
        suggestions: Vec<String>,
        separator: Option<Separator>,
    ) -> Self {
        Self {
            success: false,
            records: Vec::new(),
            errors: vec![error.into()],
            mapping,
            suggestions,
            separator,
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// First rows of an import, for confirmation before committing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvPreview {
    pub separator: Option<Separator>,
    pub mapping: Vec<SmartColumnMapping>,
    pub preview: Vec<ComparisonRecord>,
    pub total_records: usize,
    pub skipped_rows: usize,
    pub errors: Vec<String>,
    pub suggestions: Vec<String>,
}
