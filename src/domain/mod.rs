pub mod comparison;
pub mod constraint;
pub mod diff;
pub mod error;
pub mod metrics;
pub mod prompt;

// Smart CSV import/export types
pub mod csv;
