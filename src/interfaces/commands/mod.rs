//! Command surface: plain data in, `Result<Response>` out

pub mod comparison_commands;
pub mod csv_commands;
pub mod history_commands;
pub mod state;
pub mod types;

pub use comparison_commands::*;
pub use csv_commands::*;
pub use history_commands::*;
pub use state::AppState;
