// ============================================================
// CSV FILE ACCESS
// ============================================================
// Read uploaded CSV files and write exports to disk

use std::path::Path;

use encoding_rs::UTF_8;
use tracing::warn;

use super::csv_writer::UTF8_BOM;
use crate::domain::error::AppError;

/// Decode raw bytes as UTF-8, dropping a leading BOM and replacing invalid
/// sequences instead of failing.
pub fn decode_csv_bytes(bytes: &[u8]) -> String {
    let (content, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        warn!(bytes = bytes.len(), "CSV input contained invalid UTF-8, replaced");
    }
    content.into_owned()
}

/// Read a CSV file's text content
pub async fn read_csv_file(path: &Path) -> Result<String, AppError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(decode_csv_bytes(&bytes))
}

/// Write CSV text to disk with a leading UTF-8 BOM
pub async fn write_csv_file(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let mut framed = String::with_capacity(UTF8_BOM.len() + content.len());
    framed.push_str(UTF8_BOM);
    framed.push_str(content);

    tokio::fs::write(path, framed).await.map_err(|e| {
        AppError::IoError(format!("Failed to write {}: {}", path.display(), e))
    })
}

/// Default export file name, e.g. `lingo-diff-export-2024-05-01.csv`
pub fn default_export_file_name() -> String {
    format!(
        "lingo-diff-export-{}.csv",
        chrono::Utc::now().format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_strips_bom() {
        let bytes = "\u{feff}Text_A,Text_B".as_bytes();
        assert_eq!(decode_csv_bytes(bytes), "Text_A,Text_B");
    }

    #[test]
    fn test_decode_replaces_invalid_bytes() {
        let decoded = decode_csv_bytes(&[b'a', 0xff, b'b']);
        assert_eq!(decoded, "a\u{fffd}b");
    }

    #[test]
    fn test_default_export_file_name() {
        let name = default_export_file_name();
        assert!(name.starts_with("lingo-diff-export-"));
        assert!(name.ends_with(".csv"));
    }

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("export.csv");

        write_csv_file(&path, "Text_A\nhello").await.unwrap();

        let raw = std::fs::read(&path).unwrap();
        assert!(raw.starts_with(UTF8_BOM.as_bytes()));

        let content = read_csv_file(&path).await.unwrap();
        assert_eq!(content, "Text_A\nhello");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_csv_file(&dir.path().join("nope.csv")).await.unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }
}
