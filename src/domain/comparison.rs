// ============================================================
// COMPARISON RECORD
// ============================================================
// One saved or imported pairing of two candidate texts

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved unit pairing two candidate texts with optional reference text,
/// context and notes. Serialized with camelCase keys so the persisted JSON
/// matches what the UI layer stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRecord {
    /// Opaque unique identifier, generated at creation and never reused
    pub id: String,

    /// Source/baseline text (may be empty)
    #[serde(default)]
    pub reference_text: String,

    /// Free-form usage description (may be empty)
    #[serde(default)]
    pub context: String,

    /// First candidate text
    #[serde(default)]
    pub text_a: String,

    /// Second candidate text
    #[serde(default)]
    pub text_b: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// ISO-8601 creation time
    pub timestamp: String,
}

impl ComparisonRecord {
    /// Create a record with a fresh id and the current timestamp
    pub fn new(
        reference_text: impl Into<String>,
        context: impl Into<String>,
        text_a: impl Into<String>,
        text_b: impl Into<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            reference_text: reference_text.into(),
            context: context.into(),
            text_a: text_a.into(),
            text_b: text_b.into(),
            notes,
            timestamp: current_timestamp(),
        }
    }

    /// Create an empty record shell (id and timestamp set, all texts empty)
    pub fn empty() -> Self {
        Self::new("", "", "", "", None)
    }

    /// A record is importable/saveable when at least one candidate has content
    pub fn is_valid(&self) -> bool {
        !self.text_a.is_empty() || !self.text_b.is_empty()
    }

    /// Build editable state from this record without touching the record itself
    pub fn to_draft(&self) -> ComparisonDraft {
        ComparisonDraft {
            reference_text: self.reference_text.clone(),
            context: self.context.clone(),
            text_a: self.text_a.clone(),
            text_b: self.text_b.clone(),
            notes: self.notes.clone().unwrap_or_default(),
        }
    }
}

/// Mutable in-memory editing state. Saving a draft always produces a new record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonDraft {
    pub reference_text: String,
    pub context: String,
    pub text_a: String,
    pub text_b: String,
    pub notes: String,
}

impl ComparisonDraft {
    pub fn into_record(self) -> ComparisonRecord {
        let notes = if self.notes.is_empty() {
            None
        } else {
            Some(self.notes)
        };
        ComparisonRecord::new(self.reference_text, self.context, self.text_a, self.text_b, notes)
    }
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-05-01T10:00:00.000Z`
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
