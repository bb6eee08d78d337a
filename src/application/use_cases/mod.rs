pub mod constraint_checker;
pub mod diff_service;
pub mod history;
pub mod prompt_builder;
pub mod smart_csv;
pub mod text_analysis;
