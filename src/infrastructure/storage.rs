//! Recording storage directory resolution
//!
//! The recording artifact lives in the app's private area under the
//! platform data directory unless the user overrides the location.

use std::io;
use std::path::{Path, PathBuf};

/// Application subdirectory inside the platform data directory
const APP_DIR: &str = "revoice";

/// Resolve the default storage directory for the recording artifact.
/// Falls back to the current directory when the platform reports none.
pub fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Ensure the storage directory exists, creating it if needed
pub fn ensure_storage_dir(dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)
}
