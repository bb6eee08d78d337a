// Command-line shell over the command surface

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::domain::constraint::ConstraintPreset;
use crate::domain::diff::DiffMode;
use crate::domain::error::Result;
use crate::domain::prompt::AnalysisPromptRequest;
use crate::interfaces::commands::types::*;
use crate::interfaces::commands::*;

#[derive(Parser, Debug)]
#[command(name = "lingo-diff")]
#[command(about = "Compare translation candidates, check localization limits and manage comparison CSVs", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./lingo-diff.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Diff two texts
    Diff {
        original: String,
        modified: String,
        /// auto, character, word, line or sentence
        #[arg(long)]
        mode: Option<DiffMode>,
    },

    /// Show length, byte, word and script metrics for a text
    Metrics {
        text: String,
        /// Reference text for the expansion rate
        #[arg(long, default_value = "")]
        reference: String,
    },

    /// Check a text against SMS, character and mobile width limits
    Check {
        text: String,
        #[arg(long)]
        sms: Option<String>,
        #[arg(long)]
        characters: Option<String>,
        #[arg(long)]
        ui_mobile: Option<String>,
        #[arg(long, value_enum)]
        preset: Vec<PresetArg>,
    },

    /// List constraint presets with their limits
    Presets,

    /// Import a CSV file
    Import {
        file: PathBuf,
        /// Add the imported records to the history
        #[arg(long)]
        save: bool,
    },

    /// Preview how a CSV file would be imported
    Preview {
        file: PathBuf,
        #[arg(long)]
        rows: Option<usize>,
    },

    /// Export the history as CSV
    Export {
        /// Output file; prints to stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long)]
        language: Option<String>,
    },

    /// Print a sample CSV
    Sample {
        #[arg(long)]
        language: Option<String>,
    },

    /// Print an AI analysis prompt for two candidates
    Prompt {
        #[arg(long, default_value = "")]
        original: String,
        #[arg(long, default_value = "")]
        modified: String,
        #[arg(long, default_value = "")]
        source_term: String,
        #[arg(long, default_value = "")]
        context: String,
        #[arg(long, default_value = "Japanese")]
        target_language: String,
    },

    /// Manage saved comparisons
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// List saved comparisons, newest first
    List,
    /// Delete one comparison by id
    Delete { id: String },
    /// Delete every saved comparison
    Clear,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PresetArg {
    Sms,
    Tweet,
    MobileShort,
    MobileLong,
    MetaTitle,
    MetaDescription,
}

impl From<PresetArg> for ConstraintPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Sms => ConstraintPreset::Sms,
            PresetArg::Tweet => ConstraintPreset::Tweet,
            PresetArg::MobileShort => ConstraintPreset::MobileBtnShort,
            PresetArg::MobileLong => ConstraintPreset::MobileBtnLong,
            PresetArg::MetaTitle => ConstraintPreset::MetaTitle,
            PresetArg::MetaDescription => ConstraintPreset::MetaDesc,
        }
    }
}

/// Run one command and render its output
pub async fn dispatch(state: &AppState, command: Commands) -> Result<String> {
    match command {
        Commands::Diff {
            original,
            modified,
            mode,
        } => to_json(&compute_diff_command(
            state,
            DiffRequest {
                original,
                modified,
                mode,
            },
        )?),

        Commands::Metrics { text, reference } => to_json(&text_metrics_command(MetricsRequest {
            text,
            reference_text: reference,
        })?),

        Commands::Check {
            text,
            sms,
            characters,
            ui_mobile,
            preset,
        } => {
            let raw: BTreeMap<String, String> = [
                ("sms", sms),
                ("characters", characters),
                ("uiMobile", ui_mobile),
            ]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
            .collect();

            let request = ConstraintCheckRequest {
                text,
                constraints: if raw.is_empty() { None } else { Some(raw) },
                presets: preset.into_iter().map(Into::into).collect(),
            };
            to_json(&check_constraints_command(state, request)?)
        }

        Commands::Presets => to_json(&list_presets_command()),

        Commands::Import { file, save } => to_json(
            &import_csv_command(
                state,
                CsvImportRequest {
                    file_path: file.display().to_string(),
                    save_to_history: save,
                },
            )
            .await?,
        ),

        Commands::Preview { file, rows } => to_json(
            &preview_csv_command(
                state,
                CsvPreviewRequest {
                    file_path: file.display().to_string(),
                    rows,
                },
            )
            .await?,
        ),

        Commands::Export { output, language } => {
            let response = export_csv_command(
                state,
                CsvExportRequest {
                    output_path: output.map(|path| path.display().to_string()),
                    language,
                },
            )
            .await?;
            Ok(match (response.csv, response.path) {
                (Some(csv), _) => csv,
                (None, Some(path)) => format!("Exported {} records to {}", response.records, path),
                (None, None) => String::new(),
            })
        }

        Commands::Sample { language } => sample_csv_command(state, language),

        Commands::Prompt {
            original,
            modified,
            source_term,
            context,
            target_language,
        } => {
            let request = AnalysisPromptRequest::new(source_term, context, original, modified)
                .with_target_language(target_language);
            Ok(analysis_prompt_command(request)?.text)
        }

        Commands::History { action } => match action {
            HistoryAction::List => to_json(&list_history_command(state)?),
            HistoryAction::Delete { id } => {
                delete_history_command(state, &id)?;
                Ok(format!("Deleted {}", id))
            }
            HistoryAction::Clear => {
                clear_history_command(state)?;
                Ok("History cleared".to_string())
            }
        },
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::AppConfig;

    fn state(dir: &tempfile::TempDir) -> AppState {
        AppState::new(AppConfig {
            history_path: dir.path().join("history.json"),
            ..AppConfig::default()
        })
    }

    #[test]
    fn test_parses_subcommands() {
        let cli = Cli::parse_from([
            "lingo-diff",
            "check",
            "Hello World",
            "--characters",
            "5",
            "--preset",
            "sms",
        ]);
        match cli.command {
            Commands::Check {
                characters, preset, ..
            } => {
                assert_eq!(characters.as_deref(), Some("5"));
                assert_eq!(preset.len(), 1);
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::parse_from(["lingo-diff", "diff", "a", "b", "--mode", "word"]);
        assert!(matches!(
            cli.command,
            Commands::Diff {
                mode: Some(DiffMode::Word),
                ..
            }
        ));

        assert!(Cli::try_parse_from(["lingo-diff", "diff", "a", "b", "--mode", "para"]).is_err());
    }

    #[test]
    fn test_every_preset_has_an_argument() {
        let mapped: Vec<ConstraintPreset> = PresetArg::value_variants()
            .iter()
            .map(|arg| ConstraintPreset::from(*arg))
            .collect();
        assert_eq!(mapped, ConstraintPreset::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_dispatch_check_renders_json() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(&dir);
        let cli = Cli::parse_from(["lingo-diff", "check", "Hello World", "--characters", "5"]);

        let output = dispatch(&state, cli.command).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["allPassed"], false);
        assert_eq!(json["checks"][0]["type"], "Character Limit");
        assert_eq!(json["checks"][0]["severity"], "error");
    }

    #[tokio::test]
    async fn test_dispatch_prompt_requires_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(&dir);
        let cli = Cli::parse_from(["lingo-diff", "prompt", "--source-term", "Save"]);

        assert!(dispatch(&state, cli.command).await.is_err());
    }
}
