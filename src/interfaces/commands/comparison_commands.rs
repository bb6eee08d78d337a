//! Diff, metrics, constraint and prompt commands

use crate::application::use_cases::constraint_checker::check_constraints;
use crate::application::use_cases::diff_service;
use crate::application::use_cases::prompt_builder::build_analysis_prompt;
use crate::application::use_cases::text_analysis::{
    detect_script, expansion_guidelines, get_text_metrics,
};
use crate::domain::constraint::{ConstraintPreset, ConstraintSet};
use crate::domain::diff::DiffOutcome;
use crate::domain::error::Result;
use crate::domain::prompt::{AnalysisPrompt, AnalysisPromptRequest};

use super::state::AppState;
use super::types::*;

pub fn compute_diff_command(state: &AppState, request: DiffRequest) -> Result<DiffOutcome> {
    let mode = request.mode.unwrap_or(state.config.diff_mode);
    let outcome = diff_service::compute(&request.original, &request.modified, mode);
    tracing::debug!(
        requested = %mode,
        resolved = %outcome.mode,
        parts = outcome.parts.len(),
        "Diff computed"
    );
    Ok(outcome)
}

pub fn text_metrics_command(request: MetricsRequest) -> Result<MetricsResponse> {
    let metrics = get_text_metrics(&request.text, &request.reference_text);

    if request.reference_text.is_empty() {
        return Ok(MetricsResponse {
            metrics,
            reference_script: None,
            guideline: None,
            assessment: None,
        });
    }

    let reference_script = detect_script(&request.reference_text);
    let guideline = expansion_guidelines(reference_script, metrics.script);
    let assessment = guideline.assess(metrics.expansion_rate);

    Ok(MetricsResponse {
        metrics,
        reference_script: Some(reference_script),
        guideline: Some(guideline),
        assessment: Some(assessment),
    })
}

pub fn check_constraints_command(
    state: &AppState,
    request: ConstraintCheckRequest,
) -> Result<ConstraintCheckResponse> {
    let mut constraints = match &request.constraints {
        Some(raw) => ConstraintSet::from_input(raw.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
        None => state.config.constraints.clone(),
    };
    for preset in &request.presets {
        constraints.apply_preset(*preset);
    }

    let checks = check_constraints(&request.text, &constraints);
    let all_passed = checks.iter().all(|check| check.passed);

    Ok(ConstraintCheckResponse { checks, all_passed })
}

pub fn list_presets_command() -> Vec<PresetInfo> {
    ConstraintPreset::ALL
        .iter()
        .map(|preset| PresetInfo {
            preset: *preset,
            label: preset.label().to_string(),
            kind: preset.kind(),
            limit: preset.limit(),
        })
        .collect()
}

pub fn analysis_prompt_command(request: AnalysisPromptRequest) -> Result<AnalysisPrompt> {
    build_analysis_prompt(&request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constraint::{ConstraintKind, Severity};
    use crate::domain::diff::DiffMode;
    use crate::domain::metrics::{ExpansionAssessment, Script};
    use crate::infrastructure::config::AppConfig;

    fn state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            history_path: dir.path().join("history.json"),
            constraints: ConstraintSet::new().with(ConstraintKind::Characters, 5),
            diff_mode: DiffMode::Word,
            ..AppConfig::default()
        };
        (dir, AppState::new(config))
    }

    #[test]
    fn test_diff_uses_configured_mode_by_default() {
        let (_dir, state) = state();
        let outcome = compute_diff_command(
            &state,
            DiffRequest {
                original: "Save Changes".into(),
                modified: "Save".into(),
                mode: None,
            },
        )
        .unwrap();
        assert_eq!(outcome.mode, DiffMode::Word);

        let outcome = compute_diff_command(
            &state,
            DiffRequest {
                original: "Save Changes".into(),
                modified: "Save".into(),
                mode: Some(DiffMode::Auto),
            },
        )
        .unwrap();
        assert_eq!(outcome.mode, DiffMode::Character);
    }

    #[test]
    fn test_metrics_with_reference_adds_guideline() {
        let response = text_metrics_command(MetricsRequest {
            text: "Привет, мир".into(),
            reference_text: "Hello world".into(),
        })
        .unwrap();

        assert_eq!(response.metrics.script, Script::Cyrillic);
        assert_eq!(response.metrics.expansion_rate, 0);
        assert_eq!(response.reference_script, Some(Script::Latin));
        assert_eq!(response.guideline.map(|g| g.typical), Some(25));
        assert_eq!(response.assessment, Some(ExpansionAssessment::BelowRange));
    }

    #[test]
    fn test_constraints_fall_back_to_config() {
        let (_dir, state) = state();
        let response = check_constraints_command(
            &state,
            ConstraintCheckRequest {
                text: "Hello World".into(),
                ..ConstraintCheckRequest::default()
            },
        )
        .unwrap();

        assert_eq!(response.checks.len(), 1);
        assert_eq!(response.checks[0].current, 11);
        assert_eq!(response.checks[0].severity, Severity::Error);
        assert!(!response.all_passed);
    }

    #[test]
    fn test_constraints_from_raw_input_and_presets() {
        let (_dir, state) = state();
        let raw = [("uiMobile".to_string(), "12px".to_string())].into_iter().collect();
        let response = check_constraints_command(
            &state,
            ConstraintCheckRequest {
                text: "お部屋を選択".into(),
                constraints: Some(raw),
                presets: vec![ConstraintPreset::Sms],
            },
        )
        .unwrap();

        let kinds: Vec<_> = response.checks.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ConstraintKind::Sms, ConstraintKind::UiMobile]);
        assert_eq!(response.checks[1].current, 12);
        assert!(response.all_passed);
    }

    #[test]
    fn test_list_presets() {
        let presets = list_presets_command();
        assert_eq!(presets.len(), 6);
        assert_eq!(presets[0].label, "SMS (160 bytes)");
        assert_eq!(presets[0].kind, ConstraintKind::Sms);
        assert_eq!(presets[1].preset, ConstraintPreset::Tweet);
        assert_eq!(presets[1].limit, 280);
    }
}
