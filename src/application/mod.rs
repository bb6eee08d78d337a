pub mod use_cases;

pub use use_cases::history::ComparisonHistory;
pub use use_cases::prompt_builder::PromptBuilder;
pub use use_cases::smart_csv::SmartCsvImporter;
