// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Core types and value objects for smart CSV import/export
// No I/O, no async

mod canonical_field;
mod column_mapping;
mod column_patterns;
mod export_headers;
mod import_result;
mod separator;

pub use canonical_field::CanonicalField;
pub use column_mapping::{
    SmartColumnMapping, HIGH_CONFIDENCE_THRESHOLD, MAPPING_CONFIDENCE_THRESHOLD,
};
pub use column_patterns::{ColumnPatternTable, FieldPatterns};
pub use export_headers::{localized_headers, supported_languages, HeaderRow};
pub use import_result::{CsvPreview, SmartCsvResult};
pub use separator::Separator;
