//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the interactive screen
//! loop, the playback screen, and the config command handlers.

pub mod args;
pub mod config_cmd;
pub mod playback_screen;
pub mod presenter;
pub mod screen;

// Re-export commonly used types
pub use args::{Cli, Commands, ConfigAction, ScreenOptions};
pub use playback_screen::PlaybackScreen;
pub use presenter::Presenter;
pub use screen::{load_merged_config, run_screen, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
