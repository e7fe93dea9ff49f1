//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored configuration. A missing file yields an empty
    /// config rather than an error.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist `config` to storage, replacing the previous contents.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if the configuration file exists.
    fn exists(&self) -> bool;

    /// Create the configuration file with default values.
    /// Fails if the file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
