//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup
//! and the main application runner.

pub mod app;
pub mod args;
pub mod logging;
pub mod presenter;

// Re-export commonly used types
pub use app::{run, DATE_ENV_VAR, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::Cli;
pub use logging::init_logging;
pub use presenter::Presenter;
