//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the command handlers.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod content_cmd;
pub mod gallery_cmd;
pub mod presenter;
pub mod videos_cmd;

// Re-export commonly used types
pub use app::{run_command, CommandError, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
