//! Request/response types for the command surface
//!
//! Field names are camelCase on the wire so a UI can pass its state through
//! unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::comparison::ComparisonRecord;
use crate::domain::constraint::{ConstraintCheck, ConstraintKind, ConstraintPreset};
use crate::domain::csv::SmartCsvResult;
use crate::domain::diff::DiffMode;
use crate::domain::metrics::{ExpansionAssessment, ExpansionGuideline, Script, TextMetrics};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRequest {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub modified: String,
    /// Falls back to the configured diff mode
    #[serde(default)]
    pub mode: Option<DiffMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub reference_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub metrics: TextMetrics,
    /// Present only when a reference text was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_script: Option<Script>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guideline: Option<ExpansionGuideline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<ExpansionAssessment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintCheckRequest {
    #[serde(default)]
    pub text: String,
    /// Raw form input, e.g. `{"sms": "160", "uiMobile": "12px"}`.
    /// When absent the configured limits are used.
    #[serde(default)]
    pub constraints: Option<BTreeMap<String, String>>,
    /// Presets applied on top of the limits
    #[serde(default)]
    pub presets: Vec<ConstraintPreset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintCheckResponse {
    pub checks: Vec<ConstraintCheck>,
    pub all_passed: bool,
}

/// One selectable preset with the limit it applies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetInfo {
    pub preset: ConstraintPreset,
    pub label: String,
    pub kind: ConstraintKind,
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvImportRequest {
    pub file_path: String,
    /// Prepend accepted records to the history
    #[serde(default)]
    pub save_to_history: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvImportResponse {
    pub result: SmartCsvResult,
    pub saved: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvPreviewRequest {
    pub file_path: String,
    /// Falls back to the configured preview size
    #[serde(default)]
    pub rows: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvExportRequest {
    /// Write to this file (with BOM); otherwise return the CSV text
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvExportResponse {
    pub records: usize,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveComparisonRequest {
    #[serde(default)]
    pub reference_text: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub text_a: String,
    #[serde(default)]
    pub text_b: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl SaveComparisonRequest {
    pub fn into_record(self) -> ComparisonRecord {
        let notes = self.notes.filter(|notes| !notes.is_empty());
        ComparisonRecord::new(
            self.reference_text,
            self.context,
            self.text_a,
            self.text_b,
            notes,
        )
    }
}
