pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

mod app;

pub use app::run;

pub use application::use_cases::constraint_checker::check_constraints;
pub use application::use_cases::diff_service::diff;
pub use application::use_cases::smart_csv::{
    export_smart_csv, generate_sample_csv, parse_smart_csv, preview_smart_csv,
};
pub use application::use_cases::text_analysis::{
    byte_length, char_length, detect_script, get_text_metrics, is_rtl_text,
};
pub use domain::error::{AppError, Result};
