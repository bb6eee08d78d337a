// ============================================================
// SMART CSV USE CASE
// ============================================================
// Import with separator detection and fuzzy header mapping,
// export with localized headers

use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::comparison::ComparisonRecord;
use crate::domain::csv::{
    CanonicalField, ColumnPatternTable, CsvPreview, Separator, SmartColumnMapping, SmartCsvResult,
};
use crate::domain::error::AppError;
use crate::infrastructure::csv::{
    write_csv_file, CsvExporter, HeaderMapper, LineTokenizer, SeparatorDetector, UTF8_BOM,
};

const TOO_FEW_LINES: &str = "CSV must contain at least a header row and one data row";
const NO_TEXT_COLUMNS: &str = "Could not identify text comparison columns";

/// Smart CSV importer over a header pattern table
pub struct SmartCsvImporter<'a> {
    table: &'a ColumnPatternTable,
}

impl Default for SmartCsvImporter<'static> {
    fn default() -> Self {
        Self::new(ColumnPatternTable::builtin())
    }
}

impl<'a> SmartCsvImporter<'a> {
    pub fn new(table: &'a ColumnPatternTable) -> Self {
        Self { table }
    }

    /// Parse CSV text into comparison records.
    ///
    /// Structural problems (fewer than two non-blank lines, no confident text
    /// column) abort with no records. Row problems skip the row and are
    /// reported with the row's 1-based position among non-blank lines.
    pub fn parse(&self, content: &str) -> SmartCsvResult {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        let lines: Vec<&str> = content
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .collect();

        if lines.len() < 2 {
            warn!(lines = lines.len(), "CSV import rejected: no data rows");
            return SmartCsvResult::failed(
                TOO_FEW_LINES,
                Vec::new(),
                vec![
                    "Add a header row with column names".to_string(),
                    "Include at least one data row".to_string(),
                ],
                None,
            );
        }

        let separator = SeparatorDetector::detect(content);
        let tokenizer = LineTokenizer::new(separator);
        let headers = tokenizer.parse_line(lines[0]);
        let mapping = HeaderMapper::new(self.table).map_headers(&headers);

        let has_text_column = mapping
            .iter()
            .any(|m| m.mapped.is_candidate_text() && m.is_confident());
        if !has_text_column {
            warn!(headers = ?headers, "CSV import rejected: no text comparison columns");
            return SmartCsvResult::failed(
                NO_TEXT_COLUMNS,
                mapping,
                vec![
                    r#"Ensure columns are named like: "Text_A", "Text_B", "Original", "Revised""#
                        .to_string(),
                    "Use clear column names that indicate text comparison".to_string(),
                    "Include at least one text column for comparison".to_string(),
                ],
                Some(separator),
            );
        }

        let mut records = Vec::new();
        let mut errors = Vec::new();

        for (index, line) in lines.iter().enumerate().skip(1) {
            let row = index + 1;
            let values = tokenizer.parse_line(line);

            if values.len() != headers.len() {
                errors.push(format!(
                    "Row {}: Expected {} columns, found {}",
                    row,
                    headers.len(),
                    values.len()
                ));
                continue;
            }

            let record = build_record(&mapping, values);
            if !record.is_valid() {
                errors.push(format!("Row {}: No text content found", row));
                continue;
            }

            records.push(record);
        }

        let suggestions = import_suggestions(separator, &mapping);

        info!(
            separator = separator.name(),
            records = records.len(),
            skipped = errors.len(),
            "CSV import finished"
        );

        SmartCsvResult {
            success: errors.is_empty(),
            records,
            errors,
            mapping,
            suggestions,
            separator: Some(separator),
        }
    }

    /// Parse and keep only the first `rows` records for display
    pub fn preview(&self, content: &str, rows: usize) -> CsvPreview {
        let result = self.parse(content);
        let total_records = result.records.len();
        // Structural errors are not row skips
        let skipped_rows = result
            .errors
            .iter()
            .filter(|error| error.starts_with("Row "))
            .count();

        CsvPreview {
            separator: result.separator,
            mapping: result.mapping,
            preview: result.records.into_iter().take(rows).collect(),
            total_records,
            skipped_rows,
            errors: result.errors,
            suggestions: result.suggestions,
        }
    }
}

/// Apply confident mappings to one row's values. Later columns mapped to the
/// same field overwrite earlier ones.
fn build_record(mapping: &[SmartColumnMapping], values: Vec<String>) -> ComparisonRecord {
    let mut record = ComparisonRecord::empty();

    for (column, value) in mapping.iter().zip(values) {
        if !column.is_confident() {
            continue;
        }
        match column.mapped {
            CanonicalField::ReferenceText => record.reference_text = value,
            CanonicalField::Context => record.context = value,
            CanonicalField::TextA => record.text_a = value,
            CanonicalField::TextB => record.text_b = value,
            CanonicalField::Notes => record.notes = Some(value),
        }
    }

    record
}

fn import_suggestions(separator: Separator, mapping: &[SmartColumnMapping]) -> Vec<String> {
    let mut suggestions = vec![format!(
        "Auto-detected {}: \"{}\"",
        separator.name(),
        separator.as_char()
    )];

    let low_confidence: Vec<&str> = mapping
        .iter()
        .filter(|m| m.is_low_confidence())
        .map(|m| m.detected.as_str())
        .collect();
    if !low_confidence.is_empty() {
        debug!(columns = ?low_confidence, "Low-confidence column mappings");
        suggestions.push(format!(
            "Some columns were auto-mapped with low confidence: {}",
            low_confidence.join(", ")
        ));
    }

    suggestions
}

/// Parse with the built-in multilingual header table
pub fn parse_smart_csv(content: &str) -> SmartCsvResult {
    SmartCsvImporter::default().parse(content)
}

/// Parse with a caller-supplied header table
pub fn parse_smart_csv_with(content: &str, table: &ColumnPatternTable) -> SmartCsvResult {
    SmartCsvImporter::new(table).parse(content)
}

pub fn preview_smart_csv(content: &str, rows: usize) -> CsvPreview {
    SmartCsvImporter::default().preview(content, rows)
}

/// Serialize records with headers localized for `language` (no BOM)
pub fn export_smart_csv(records: &[ComparisonRecord], language: &str) -> Result<String, AppError> {
    let csv = CsvExporter::new().write(records, language)?;
    info!(records = records.len(), language = language, "CSV export written");
    Ok(csv)
}

/// Export to a file, prefixed with a UTF-8 BOM
pub async fn write_export_file(
    path: &Path,
    records: &[ComparisonRecord],
    language: &str,
) -> Result<(), AppError> {
    let csv = export_smart_csv(records, language)?;
    write_csv_file(path, &csv).await?;
    info!(path = %path.display(), records = records.len(), "CSV export saved");
    Ok(())
}

/// Built-in example records showing typical comparisons
pub fn sample_records() -> Vec<ComparisonRecord> {
    [
        (
            "Select Room",
            "Mobile app button for hotel room selection",
            "チェックイン時にお部屋を選択",
            "チェックイン時お部屋選択",
            "Comparing Japanese translations - particle usage",
        ),
        (
            "Save Changes",
            "Form submission button",
            "Save Changes",
            "Save",
            "Testing button text length for mobile",
        ),
        (
            "Welcome back!",
            "User greeting message",
            "Welcome back, John!",
            "Hi John, welcome back!",
            "Comparing greeting styles - formal vs casual",
        ),
        (
            "File not found",
            "Error message in application",
            "The requested file could not be found.",
            "File not found. Please check the path.",
            "Error message clarity comparison",
        ),
    ]
    .into_iter()
    .map(|(reference, context, text_a, text_b, notes)| {
        ComparisonRecord::new(reference, context, text_a, text_b, Some(notes.to_string()))
    })
    .collect()
}

/// Sample CSV with localized headers
pub fn generate_sample_csv(language: &str) -> Result<String, AppError> {
    export_smart_csv(&sample_records(), language)
}
