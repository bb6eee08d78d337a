use validator::Validate;

use crate::domain::error::{AppError, Result};
use crate::domain::prompt::{AnalysisPrompt, AnalysisPromptRequest};

const MISSING_SOURCE_TERM: &str = "[Not Provided]";
const MISSING_CONTEXT: &str = "[No context provided. Assume it is a generic UI element.]";

pub struct PromptBuilder;

impl PromptBuilder {
    /// Render the localization analysis prompt for two translation candidates
    pub fn build_analysis_prompt(request: &AnalysisPromptRequest) -> Result<AnalysisPrompt> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(format!("Invalid prompt request: {}", e)))?;

        let missing_context_warning = request.lacks_context();
        if missing_context_warning {
            tracing::warn!("Analysis prompt built without source term or context");
        }

        Ok(AnalysisPrompt {
            text: Self::render(request),
            missing_context_warning,
            created_at: chrono::Utc::now(),
        })
    }

    fn render(request: &AnalysisPromptRequest) -> String {
        let source_term = non_empty_or(&request.source_term, MISSING_SOURCE_TERM);
        let context = non_empty_or(&request.context, MISSING_CONTEXT);

        let mut prompt = String::from(
            r#"**AI PROMPT: EXPERT LOCALIZATION ANALYSIS**

**Persona:**
You are an expert linguist and localization consultant with deep knowledge of translation nuances, cultural context, and user interface (UI) best practices.

**Task:**
Analyze the following two translation candidates for a software application. Evaluate their accuracy, tone, and suitability for the given context. Compare them, explain the key differences, and provide a clear recommendation.

"#,
        );

        prompt.push_str("**Contextual Information:**\n");
        prompt.push_str(&format!("- **Source Term (English):** {}\n", source_term));
        prompt.push_str(&format!("- **Target Language:** {}\n", request.target_language));
        prompt.push_str(&format!("- **Translation Context:** {}\n", context));
        prompt.push_str("\n---\n\n**Translation Candidates to Analyze:**\n\n");
        prompt.push_str(&format!("**Candidate 1 (Original):**\n{}\n\n", request.original_text));
        prompt.push_str(&format!("**Candidate 2 (Modified):**\n{}\n\n", request.modified_text));
        prompt.push_str(
            r#"---

**Required Analysis (Provide your response in this exact format):**

### 1. Analysis of Candidate 1
- **Accuracy & Tone:** Does it accurately convey the source meaning? What is its tone (e.g., formal, casual, direct)?
- **Suitability for Context:** How well does it fit the specified Translation Context?

### 2. Analysis of Candidate 2
- **Accuracy & Tone:** Does it accurately convey the source meaning? What is its tone?
- **Suitability for Context:** How well does it fit the specified Translation Context?

### 3. Comparative Analysis & Recommendation
- **Key Differences:** What are the most important linguistic differences between them? (e.g., "Candidate 2 omits particles for brevity, making it more direct.")
- **Final Recommendation:** Which candidate is better for the given context and why?"#,
        );

        prompt
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

pub fn build_analysis_prompt(request: &AnalysisPromptRequest) -> Result<AnalysisPrompt> {
    PromptBuilder::build_analysis_prompt(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_inputs() {
        let request = AnalysisPromptRequest::new(
            "Select Room",
            "Mobile app button",
            "チェックイン時にお部屋を選択",
            "チェックイン時お部屋選択",
        );
        let prompt = build_analysis_prompt(&request).unwrap();

        assert!(prompt.text.starts_with("**AI PROMPT: EXPERT LOCALIZATION ANALYSIS**"));
        assert!(prompt.text.contains("- **Source Term (English):** Select Room\n"));
        assert!(prompt.text.contains("- **Target Language:** Japanese\n"));
        assert!(prompt.text.contains("- **Translation Context:** Mobile app button\n"));
        assert!(prompt
            .text
            .contains("**Candidate 1 (Original):**\nチェックイン時にお部屋を選択\n"));
        assert!(prompt.text.contains("**Candidate 2 (Modified):**\nチェックイン時お部屋選択\n"));
        assert!(prompt.text.contains("### 3. Comparative Analysis & Recommendation"));
        assert!(!prompt.missing_context_warning);
    }

    #[test]
    fn test_placeholders_and_warning_without_context() {
        let request = AnalysisPromptRequest::new("", "", "Guardar", "")
            .with_target_language("Spanish");
        let prompt = build_analysis_prompt(&request).unwrap();

        assert!(prompt.text.contains(MISSING_SOURCE_TERM));
        assert!(prompt.text.contains(MISSING_CONTEXT));
        assert!(prompt.text.contains("- **Target Language:** Spanish\n"));
        assert!(prompt.missing_context_warning);
    }

    #[test]
    fn test_rejects_request_without_candidates() {
        let request = AnalysisPromptRequest::new("Save", "button", "", "");
        let err = build_analysis_prompt(&request).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
