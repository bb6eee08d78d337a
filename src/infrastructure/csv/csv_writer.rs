// ============================================================
// CSV WRITER
// ============================================================
// Serialize comparison records with localized headers

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::comparison::ComparisonRecord;
use crate::domain::csv::{localized_headers, Separator};
use crate::domain::error::AppError;

/// Byte order mark prepended to exported files for spreadsheet compatibility
pub const UTF8_BOM: &str = "\u{feff}";

/// Record writer for the fixed six-column export layout
pub struct CsvExporter {
    separator: Separator,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self {
            separator: Separator::Comma,
        }
    }
}

impl CsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write header + one row per record. Values containing the separator, a
    /// quote, CR or LF are quoted with inner quotes doubled. Rows are joined
    /// with CRLF and there is no trailing line break.
    pub fn write(&self, records: &[ComparisonRecord], language: &str) -> Result<String, AppError> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.separator.as_char() as u8)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF)
            .from_writer(Vec::new());

        writer.write_record(localized_headers(language))?;

        for record in records {
            writer.write_record([
                record.reference_text.as_str(),
                record.context.as_str(),
                record.text_a.as_str(),
                record.text_b.as_str(),
                record.notes.as_deref().unwrap_or(""),
                record.timestamp.as_str(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Internal(format!("Failed to flush CSV writer: {}", e)))?;
        let mut output = String::from_utf8(bytes)
            .map_err(|e| AppError::Internal(format!("CSV output is not UTF-8: {}", e)))?;

        while output.ends_with('\n') || output.ends_with('\r') {
            output.pop();
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(reference: &str, text_a: &str, notes: Option<&str>) -> ComparisonRecord {
        let mut record = ComparisonRecord::new(reference, "ctx", text_a, "b", notes.map(String::from));
        record.timestamp = "2024-01-01T00:00:00.000Z".to_string();
        record
    }

    #[test]
    fn test_header_and_rows() {
        let output = CsvExporter::new()
            .write(&[record("Save", "Guardar", None)], "en")
            .unwrap();

        let lines: Vec<&str> = output.split("\r\n").collect();
        assert_eq!(lines[0], "Reference_Text,Context,Text_A,Text_B,Notes,Timestamp");
        assert_eq!(lines[1], "Save,ctx,Guardar,b,,2024-01-01T00:00:00.000Z");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_special_values_are_quoted() {
        let output = CsvExporter::new()
            .write(&[record("a,b", "say \"hi\"", Some("line1\nline2"))], "en")
            .unwrap();

        assert!(output.contains("\"a,b\""));
        assert!(output.contains("\"say \"\"hi\"\"\""));
        assert!(output.contains("\"line1\nline2\""));
    }

    #[test]
    fn test_carriage_return_is_quoted() {
        let output = CsvExporter::new()
            .write(&[record("x\ry", "a", None)], "en")
            .unwrap();
        assert!(output.contains("\"x\ry\""));
    }

    #[test]
    fn test_localized_headers_and_empty_list() {
        let output = CsvExporter::new().write(&[], "fr").unwrap();
        assert_eq!(output, "Texte_Référence,Contexte,Texte_A,Texte_B,Notes,Horodatage");
    }
}
