use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::constraint::ConstraintSet;
use crate::domain::csv::supported_languages;
use crate::domain::diff::DiffMode;
use crate::domain::error::{AppError, Result};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "lingo-diff.toml";

/// Environment variable prefix, nested keys split on `__`
/// (e.g. `LINGO_DIFF_CONSTRAINTS__SMS=160`)
pub const ENV_PREFIX: &str = "LINGO_DIFF_";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application configuration with all tunable parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Language code for exported CSV headers ("en", "ja", "pt-BR", ...)
    pub language: String,

    /// Diff granularity used when a request does not name one
    pub diff_mode: DiffMode,

    /// JSON file backing the comparison history
    pub history_path: PathBuf,

    /// Default tracing filter when RUST_LOG is not set
    pub log_level: String,

    /// Records shown by an import preview
    pub preview_rows: usize,

    /// Constraint limits applied when a check request carries none
    #[serde(default)]
    pub constraints: ConstraintSet,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            diff_mode: DiffMode::Auto,
            history_path: PathBuf::from("lingo-diff-history.json"),
            log_level: "info".to_string(),
            preview_rows: 5,
            constraints: ConstraintSet::default(),
        }
    }
}

/// Validation result for configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl AppConfig {
    /// Load defaults, then the TOML file, then `LINGO_DIFF_*` environment variables.
    /// A missing default config file is not an error. Returns the configuration
    /// with any warnings, which the caller logs once tracing is set up.
    pub fn load(path: Option<&Path>) -> Result<(Self, Vec<String>)> {
        // .env is optional
        let _ = dotenvy::dotenv();

        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if path.is_some() && !file.exists() {
            return Err(AppError::ConfigError(format!(
                "Config file not found: {}",
                file.display()
            )));
        }

        let figment = Self::figment(&file);
        let config: AppConfig = figment.extract()?;

        let validation = config.validate();
        if !validation.valid {
            return Err(AppError::ConfigError(validation.errors.join("; ")));
        }

        let mut warnings = validation.warnings;
        warnings.extend(
            dropped_constraints(&figment)
                .into_iter()
                .map(|key| format!("Constraint '{}' must be positive, ignored", key)),
        );

        debug!(config_file = %file.display(), language = %config.language, "Configuration loaded");
        Ok((config, warnings))
    }

    fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigValidation {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.language.trim().is_empty() {
            errors.push("language must not be empty".to_string());
        } else if !supported_languages().any(|code| code == self.language) {
            warnings.push(format!(
                "No localized export headers for '{}', English headers will be used",
                self.language
            ));
        }

        if self.preview_rows == 0 {
            errors.push("preview_rows must be at least 1".to_string());
        }

        if self.history_path.as_os_str().is_empty() {
            errors.push("history_path must not be empty".to_string());
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            warnings.push(format!(
                "Unknown log_level '{}', falling back to info",
                self.log_level
            ));
        }

        ConfigValidation {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Tracing filter directive derived from `log_level`
    pub fn log_filter(&self) -> &str {
        let level = self.log_level.as_str();
        if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            level
        } else {
            "info"
        }
    }
}

/// Constraint keys configured with a zero or negative limit
fn dropped_constraints(figment: &Figment) -> Vec<String> {
    figment
        .extract_inner::<BTreeMap<String, i64>>("constraints")
        .map(|raw| {
            raw.into_iter()
                .filter(|(_, limit)| *limit <= 0)
                .map(|(key, _)| key)
                .collect()
        })
        .unwrap_or_default()
}
