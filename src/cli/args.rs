//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Revoice - record your voice and hand it to playback
#[derive(Parser, Debug)]
#[command(name = "revoice")]
#[command(version)]
#[command(about = "Record your voice from the microphone and hand the file to the playback screen")]
#[command(long_about = None)]
pub struct Cli {
    /// Directory the recording is stored in
    #[arg(long, value_name = "DIR")]
    pub storage_dir: Option<PathBuf>,

    /// Capture device name (uses the default input device if omitted)
    #[arg(long, value_name = "NAME")]
    pub device: Option<String>,

    /// Show desktop notifications
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed record screen options
#[derive(Debug, Clone)]
pub struct ScreenOptions {
    pub storage_dir: PathBuf,
    pub input_device: Option<String>,
    pub notify: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["storage_dir", "input_device", "notify"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
