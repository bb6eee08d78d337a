//! Comparison history commands

use crate::domain::comparison::ComparisonRecord;
use crate::domain::error::Result;

use super::state::AppState;
use super::types::SaveComparisonRequest;

pub fn list_history_command(state: &AppState) -> Result<Vec<ComparisonRecord>> {
    state.history.list()
}

pub fn save_comparison_command(
    state: &AppState,
    request: SaveComparisonRequest,
) -> Result<ComparisonRecord> {
    state.history.save(request.into_record())
}

pub fn delete_history_command(state: &AppState, id: &str) -> Result<()> {
    state.history.delete(id)
}

pub fn clear_history_command(state: &AppState) -> Result<()> {
    state.history.clear()
}

/// Returns whether this is the first visit, and records the visit
pub fn first_visit_command(state: &AppState) -> Result<bool> {
    let first = !state.history.has_visited()?;
    if first {
        state.history.mark_visited()?;
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use crate::infrastructure::config::AppConfig;

    #[test]
    fn test_history_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(AppConfig {
            history_path: dir.path().join("history.json"),
            ..AppConfig::default()
        });

        assert!(first_visit_command(&state).unwrap());
        assert!(!first_visit_command(&state).unwrap());

        let saved = save_comparison_command(
            &state,
            SaveComparisonRequest {
                text_a: "Guardar".into(),
                notes: Some(String::new()),
                ..SaveComparisonRequest::default()
            },
        )
        .unwrap();
        assert_eq!(saved.notes, None);
        assert_eq!(list_history_command(&state).unwrap(), vec![saved.clone()]);

        delete_history_command(&state, &saved.id).unwrap();
        assert!(matches!(
            delete_history_command(&state, &saved.id),
            Err(AppError::NotFound(_))
        ));

        clear_history_command(&state).unwrap();
        assert!(list_history_command(&state).unwrap().is_empty());
    }
}
