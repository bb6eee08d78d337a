// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Line tokenizing, separator detection, header mapping, export writing
// and file access

mod csv_file;
mod csv_writer;
mod header_mapper;
mod line_tokenizer;
mod separator_detector;

pub use csv_file::{decode_csv_bytes, default_export_file_name, read_csv_file, write_csv_file};
pub use csv_writer::{CsvExporter, UTF8_BOM};
pub use header_mapper::{levenshtein, similarity, HeaderMapper};
pub use line_tokenizer::LineTokenizer;
pub use separator_detector::SeparatorDetector;
