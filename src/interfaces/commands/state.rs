use crate::application::ComparisonHistory;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::storage::LocalStore;

/// Shared state handed to every command
pub struct AppState {
    pub config: AppConfig,
    pub history: ComparisonHistory,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let history = ComparisonHistory::new(LocalStore::new(config.history_path.clone()));
        Self { config, history }
    }
}
