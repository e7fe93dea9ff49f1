//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory the recording artifact is stored in
    pub storage_dir: Option<String>,
    /// Preferred capture device name
    pub input_device: Option<String>,
    /// Show desktop notifications
    pub notify: Option<bool>,
}

impl AppConfig {
    /// Create config with default values.
    /// The storage directory stays unset here; it is resolved against the
    /// platform data directory at startup when neither config nor CLI set it.
    pub fn defaults() -> Self {
        Self {
            storage_dir: None,
            input_device: None,
            notify: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            storage_dir: other.storage_dir.or(self.storage_dir),
            input_device: other.input_device.or(self.input_device),
            notify: other.notify.or(self.notify),
        }
    }

    /// Get the configured storage directory as a path, if set
    pub fn storage_dir_path(&self) -> Option<PathBuf> {
        self.storage_dir.as_ref().map(PathBuf::from)
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }
}
