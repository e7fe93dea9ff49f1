//! Capture port interfaces
//!
//! The audio subsystem is consumed through three operations (configure the
//! host session, begin capture to a location, end capture) and one inbound
//! callback (capture finished). The callback is a registered listener
//! interface the subsystem invokes by reference.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Host audio-session configuration requested before a capture begins.
///
/// `play_and_record` asks the host to keep recording and playback available
/// at the same time; `prefer_speaker` asks for the speaker-class output
/// route rather than a quiet earpiece-style one. Backends without a route
/// override validate the capability instead of forcing the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProfile {
    pub play_and_record: bool,
    pub prefer_speaker: bool,
}

impl SessionProfile {
    /// Profile used by the record screen
    pub const fn record_screen() -> Self {
        Self {
            play_and_record: true,
            prefer_speaker: true,
        }
    }
}

/// Capture errors
#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("Failed to configure audio session: {0}")]
    SessionConfig(String),

    #[error("No audio input device available")]
    NoInputDevice,

    #[error("Failed to start capture: {0}")]
    StartFailed(String),

    #[error("No capture in progress")]
    NotCapturing,

    #[error("Failed to stop capture: {0}")]
    StopFailed(String),
}

/// Outcome reported by the audio subsystem once a capture has wound down
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOutcome {
    /// Whether the recording was saved
    pub success: bool,
    /// Location of the recording artifact
    pub location: PathBuf,
    /// Failure detail, when there is one
    pub detail: Option<String>,
}

impl CaptureOutcome {
    /// Outcome of a capture whose artifact was written
    pub fn succeeded(location: PathBuf) -> Self {
        Self {
            success: true,
            location,
            detail: None,
        }
    }

    /// Outcome of a capture that produced no usable artifact
    pub fn failed(location: PathBuf, detail: impl Into<String>) -> Self {
        Self {
            success: false,
            location,
            detail: Some(detail.into()),
        }
    }
}

/// Registered listener the subsystem invokes when a capture finishes.
/// Delivery happens at an arbitrary time after a stop request, off the
/// caller's control flow.
pub trait CaptureListener: Send + Sync {
    fn capture_finished(&self, outcome: CaptureOutcome);
}

/// Port for microphone capture controlled by user-driven start/stop
#[async_trait]
pub trait CaptureBackend: Send + Sync {
    /// Configure the host audio session per `profile` and begin capturing
    /// to `target`. Prior content at `target` is lost once the capture
    /// finalizes.
    async fn start(&self, profile: SessionProfile, target: &Path) -> Result<(), CaptureError>;

    /// Request the capture end and the session deactivate. Finalization is
    /// asynchronous: the outcome arrives through the registered
    /// [`CaptureListener`], not from this call.
    async fn stop(&self) -> Result<(), CaptureError>;

    /// Check if a capture is currently running
    fn is_capturing(&self) -> bool;

    /// Get elapsed capture time in milliseconds
    fn elapsed_ms(&self) -> u64;
}
