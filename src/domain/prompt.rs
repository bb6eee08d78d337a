use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Inputs for the copy-paste AI analysis prompt
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_has_candidate"))]
pub struct AnalysisPromptRequest {
    #[serde(default)]
    #[validate(length(max = 4096))]
    pub source_term: String,

    #[serde(default)]
    #[validate(length(max = 4096))]
    pub context: String,

    #[serde(default)]
    pub original_text: String,

    #[serde(default)]
    pub modified_text: String,

    #[serde(default = "default_target_language")]
    #[validate(length(min = 1, max = 64))]
    pub target_language: String,
}

fn default_target_language() -> String {
    "Japanese".to_string()
}

fn validate_has_candidate(request: &AnalysisPromptRequest) -> Result<(), ValidationError> {
    if request.original_text.is_empty() && request.modified_text.is_empty() {
        let mut err = ValidationError::new("no_candidate_text");
        err.message = Some(
            "Please provide text for at least one translation candidate".into(),
        );
        return Err(err);
    }
    Ok(())
}

impl AnalysisPromptRequest {
    pub fn new(
        source_term: impl Into<String>,
        context: impl Into<String>,
        original_text: impl Into<String>,
        modified_text: impl Into<String>,
    ) -> Self {
        Self {
            source_term: source_term.into(),
            context: context.into(),
            original_text: original_text.into(),
            modified_text: modified_text.into(),
            target_language: default_target_language(),
        }
    }

    pub fn with_target_language(mut self, language: impl Into<String>) -> Self {
        self.target_language = language.into();
        self
    }

    /// The analysis is less accurate without either a source term or context
    pub fn lacks_context(&self) -> bool {
        self.source_term.is_empty() && self.context.is_empty()
    }
}

/// Generated prompt, ready to paste into an external chat tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPrompt {
    pub text: String,
    /// Set when neither source term nor context was given; the UI should confirm
    pub missing_context_warning: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
