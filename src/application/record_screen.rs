//! Record screen use case

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::handoff::ScreenTransition;
use crate::domain::session::{
    ActivityState, ControlState, InvalidStateTransition, RecordingSession, RecordingTarget,
};

use super::ports::{
    CaptureBackend, CaptureError, CaptureOutcome, NotificationIcon, Notifier, SessionProfile,
};

/// Notification title used by the record screen
const APP_NAME: &str = "Revoice";

/// Errors from the record screen use case
#[derive(Debug, Error)]
pub enum RecordScreenError {
    #[error("Capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("Invalid state transition: {0}")]
    InvalidState(#[from] InvalidStateTransition),

    #[error("Recording failed: {0}")]
    RecordingFailed(String),
}

/// Configuration for the record screen
#[derive(Debug, Clone)]
pub struct RecordScreenConfig {
    /// Directory the recording artifact is written to
    pub storage_dir: PathBuf,
    /// Whether to show desktop notifications
    pub enable_notify: bool,
}

/// Record screen use case.
///
/// Mediates between user input, one capture session, and the screen
/// transition that hands the recorded file to the playback screen. At most
/// one capture exists at a time; every invalid request is a typed error and
/// never a crash.
pub struct RecordScreen<B, N>
where
    B: CaptureBackend,
    N: Notifier,
{
    backend: B,
    notifier: N,
    session: Arc<Mutex<RecordingSession>>,
    config: RecordScreenConfig,
}

impl<B, N> RecordScreen<B, N>
where
    B: CaptureBackend,
    N: Notifier,
{
    /// Create the record screen with no session and idle affordances
    pub fn new(backend: B, notifier: N, config: RecordScreenConfig) -> Self {
        Self {
            backend,
            notifier,
            session: Arc::new(Mutex::new(RecordingSession::new())),
            config,
        }
    }

    /// Get current activity state
    pub async fn state(&self) -> ActivityState {
        self.session.lock().await.state()
    }

    /// Get the derived affordance triple
    pub async fn controls(&self) -> ControlState {
        ControlState::for_state(self.state().await)
    }

    /// Check if the backend is capturing
    pub fn is_capturing(&self) -> bool {
        self.backend.is_capturing()
    }

    /// Get elapsed capture time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.backend.elapsed_ms()
    }

    /// Start a capture to the fixed target location.
    ///
    /// Rejected while a session exists. A backend failure rolls the session
    /// back to absent, leaving the affordances idle, and is reported.
    pub async fn start_recording(&self) -> Result<(), RecordScreenError> {
        let target = RecordingTarget::in_dir(&self.config.storage_dir);
        {
            let mut session = self.session.lock().await;
            session.start(target.path().to_path_buf())?;
        }

        if let Err(e) = self
            .backend
            .start(SessionProfile::record_screen(), target.path())
            .await
        {
            // No half-open session may survive a failed start
            let mut session = self.session.lock().await;
            let _ = session.abort();
            drop(session);

            if self.config.enable_notify {
                let _ = self
                    .notifier
                    .notify(
                        APP_NAME,
                        &format!("Could not start recording: {}", e),
                        NotificationIcon::Error,
                    )
                    .await;
            }
            return Err(e.into());
        }

        if self.config.enable_notify {
            let _ = self
                .notifier
                .notify(APP_NAME, "Recording started...", NotificationIcon::Recording)
                .await;
        }

        Ok(())
    }

    /// Request the capture stop and the audio session deactivate.
    ///
    /// Rejected when no capture is active. Completion is asynchronous:
    /// the outcome arrives later via [`Self::capture_finished`].
    pub async fn stop_recording(&self) -> Result<(), RecordScreenError> {
        {
            let mut session = self.session.lock().await;
            session.request_stop()?;
        }

        if let Err(e) = self.backend.stop().await {
            // The capture is gone either way; do not strand the session
            let mut session = self.session.lock().await;
            let _ = session.abort();
            drop(session);

            if self.config.enable_notify {
                let _ = self
                    .notifier
                    .notify(
                        APP_NAME,
                        &format!("Could not stop recording: {}", e),
                        NotificationIcon::Error,
                    )
                    .await;
            }
            return Err(e.into());
        }

        Ok(())
    }

    /// Invoked with the subsystem-reported outcome once the capture has
    /// wound down.
    ///
    /// Success yields exactly one recording-completion transition carrying
    /// the artifact location. Failure yields no transition: the session is
    /// discarded, the failure is reported, and the affordances are idle.
    /// A subsystem-initiated failure may arrive without a prior user stop.
    pub async fn capture_finished(
        &self,
        outcome: CaptureOutcome,
    ) -> Result<ScreenTransition, RecordScreenError> {
        {
            let mut session = self.session.lock().await;
            if session.is_recording() {
                session.request_stop()?;
            }
            if outcome.success {
                session.complete()?;
            } else {
                session.abort()?;
            }
        }

        if outcome.success {
            if self.config.enable_notify {
                let _ = self
                    .notifier
                    .notify(APP_NAME, "Recording saved", NotificationIcon::Success)
                    .await;
            }
            Ok(ScreenTransition::recording_complete(outcome.location))
        } else {
            let detail = outcome
                .detail
                .unwrap_or_else(|| "recording was not successful".to_string());
            if self.config.enable_notify {
                let _ = self
                    .notifier
                    .notify(
                        APP_NAME,
                        &format!("Recording failed: {}", detail),
                        NotificationIcon::Error,
                    )
                    .await;
            }
            Err(RecordScreenError::RecordingFailed(detail))
        }
    }
}
