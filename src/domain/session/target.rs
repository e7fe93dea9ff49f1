//! Recording target value object

use std::fmt;
use std::path::{Path, PathBuf};

/// Fixed artifact name inside the storage directory.
/// Every capture writes to this name; there is no versioning.
pub const RECORDED_FILE_NAME: &str = "recordedVoice.wav";

/// Value object for the capture's destination file.
/// Immutable once built; the name part never varies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordingTarget {
    path: PathBuf,
}

impl RecordingTarget {
    /// Build the target inside a storage directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(RECORDED_FILE_NAME),
        }
    }

    /// Get the full path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume and return the full path
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for RecordingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_uses_fixed_name() {
        let target = RecordingTarget::in_dir("/data/revoice");
        assert_eq!(
            target.path(),
            Path::new("/data/revoice").join(RECORDED_FILE_NAME)
        );
    }

    #[test]
    fn same_dir_yields_same_path() {
        // Consecutive captures overwrite the same artifact
        let first = RecordingTarget::in_dir("/data/revoice");
        let second = RecordingTarget::in_dir("/data/revoice");
        assert_eq!(first, second);
    }

    #[test]
    fn display_shows_full_path() {
        let target = RecordingTarget::in_dir("/data/revoice");
        assert!(target.to_string().ends_with(RECORDED_FILE_NAME));
    }
}
