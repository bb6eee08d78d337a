//! Smart CSV commands
//!
//! - import a CSV file (optionally into the history)
//! - preview an import before committing it
//! - export the history, or generate the sample file

use std::path::{Path, PathBuf};

use crate::application::use_cases::smart_csv::{
    export_smart_csv, generate_sample_csv, parse_smart_csv, preview_smart_csv, write_export_file,
};
use crate::domain::csv::CsvPreview;
use crate::domain::error::Result;
use crate::infrastructure::csv::{default_export_file_name, read_csv_file};

use super::state::AppState;
use super::types::*;

pub async fn import_csv_command(
    state: &AppState,
    request: CsvImportRequest,
) -> Result<CsvImportResponse> {
    tracing::info!(file = %request.file_path, "Starting CSV import");

    let content = read_csv_file(Path::new(&request.file_path)).await?;
    let result = parse_smart_csv(&content);

    let saved = if request.save_to_history && !result.records.is_empty() {
        state.history.import(result.records.clone())?
    } else {
        0
    };

    tracing::info!(
        file = %request.file_path,
        records = result.record_count(),
        saved = saved,
        "CSV import finished"
    );
    Ok(CsvImportResponse { result, saved })
}

pub async fn preview_csv_command(state: &AppState, request: CsvPreviewRequest) -> Result<CsvPreview> {
    let content = read_csv_file(Path::new(&request.file_path)).await?;
    let rows = request.rows.unwrap_or(state.config.preview_rows);
    Ok(preview_smart_csv(&content, rows))
}

pub async fn export_csv_command(
    state: &AppState,
    request: CsvExportRequest,
) -> Result<CsvExportResponse> {
    let language = request
        .language
        .unwrap_or_else(|| state.config.language.clone());
    let records = state.history.list()?;

    match request.output_path {
        Some(path) => {
            let mut target = PathBuf::from(path);
            if target.is_dir() {
                target.push(default_export_file_name());
            }
            write_export_file(&target, &records, &language).await?;
            Ok(CsvExportResponse {
                records: records.len(),
                language,
                path: Some(target.display().to_string()),
                csv: None,
            })
        }
        None => {
            let csv = export_smart_csv(&records, &language)?;
            Ok(CsvExportResponse {
                records: records.len(),
                language,
                path: None,
                csv: Some(csv),
            })
        }
    }
}

pub fn sample_csv_command(state: &AppState, language: Option<String>) -> Result<String> {
    let language = language.unwrap_or_else(|| state.config.language.clone());
    generate_sample_csv(&language)
}
