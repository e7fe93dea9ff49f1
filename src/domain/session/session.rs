//! Recording session state machine

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Activity states of the record screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivityState {
    #[default]
    Idle,
    Recording,
    Stopped,
}

impl ActivityState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for ActivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: ActivityState,
    pub action: String,
}

/// Recording session entity.
/// Tracks one microphone capture from start to its asynchronous completion.
/// The target location is fixed when the session starts; a later capture
/// reuses the same location and overwrites the previous artifact.
///
/// State machine:
///   IDLE -> RECORDING (start)
///   RECORDING -> STOPPED (request_stop)
///   STOPPED -> IDLE (complete)
///   RECORDING/STOPPED -> IDLE (abort)
#[derive(Debug, Default)]
pub struct RecordingSession {
    state: ActivityState,
    target: Option<PathBuf>,
}

impl RecordingSession {
    /// Create a new session in idle state with no target
    pub fn new() -> Self {
        Self {
            state: ActivityState::Idle,
            target: None,
        }
    }

    /// Get the current state
    pub fn state(&self) -> ActivityState {
        self.state
    }

    /// Check if no capture exists
    pub fn is_idle(&self) -> bool {
        self.state == ActivityState::Idle
    }

    /// Check if a capture is running
    pub fn is_recording(&self) -> bool {
        self.state == ActivityState::Recording
    }

    /// Check if a stop was requested and completion is pending
    pub fn is_stopped(&self) -> bool {
        self.state == ActivityState::Stopped
    }

    /// Target location of the current capture, if one exists
    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    /// Transition from IDLE to RECORDING, fixing the target location
    pub fn start(&mut self, target: PathBuf) -> Result<(), InvalidStateTransition> {
        if self.state != ActivityState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "start recording".to_string(),
            });
        }
        self.state = ActivityState::Recording;
        self.target = Some(target);
        Ok(())
    }

    /// Transition from RECORDING to STOPPED.
    /// The target is kept until the completion outcome arrives.
    pub fn request_stop(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != ActivityState::Recording {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "stop recording".to_string(),
            });
        }
        self.state = ActivityState::Stopped;
        Ok(())
    }

    /// Transition from STOPPED to IDLE, surrendering the completed target
    pub fn complete(&mut self) -> Result<PathBuf, InvalidStateTransition> {
        if self.state != ActivityState::Stopped {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "complete recording".to_string(),
            });
        }
        let target = self.target.take().ok_or_else(|| InvalidStateTransition {
            current_state: self.state,
            action: "complete recording without a target".to_string(),
        })?;
        self.state = ActivityState::Idle;
        Ok(target)
    }

    /// Drop the session from any active state back to IDLE, discarding the
    /// target. Used for start-failure rollback and failed completions.
    pub fn abort(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state == ActivityState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "abort recording".to_string(),
            });
        }
        self.state = ActivityState::Idle;
        self.target = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> PathBuf {
        PathBuf::from("/tmp/recordedVoice.wav")
    }

    #[test]
    fn new_session_is_idle() {
        let session = RecordingSession::new();
        assert!(session.is_idle());
        assert!(!session.is_recording());
        assert!(!session.is_stopped());
        assert!(session.target().is_none());
    }

    #[test]
    fn start_from_idle() {
        let mut session = RecordingSession::new();
        assert!(session.start(target()).is_ok());
        assert!(session.is_recording());
        assert_eq!(session.target(), Some(target().as_path()));
    }

    #[test]
    fn start_from_recording_fails() {
        let mut session = RecordingSession::new();
        session.start(target()).unwrap();

        let err = session.start(target()).unwrap_err();
        assert_eq!(err.current_state, ActivityState::Recording);
        assert!(err.action.contains("start recording"));
    }

    #[test]
    fn start_from_stopped_fails() {
        let mut session = RecordingSession::new();
        session.start(target()).unwrap();
        session.request_stop().unwrap();

        let err = session.start(target()).unwrap_err();
        assert_eq!(err.current_state, ActivityState::Stopped);
    }

    #[test]
    fn request_stop_from_recording() {
        let mut session = RecordingSession::new();
        session.start(target()).unwrap();

        assert!(session.request_stop().is_ok());
        assert!(session.is_stopped());
        // Target survives until completion
        assert_eq!(session.target(), Some(target().as_path()));
    }

    #[test]
    fn request_stop_from_idle_fails() {
        let mut session = RecordingSession::new();

        let err = session.request_stop().unwrap_err();
        assert_eq!(err.current_state, ActivityState::Idle);
    }

    #[test]
    fn complete_from_stopped_returns_target() {
        let mut session = RecordingSession::new();
        session.start(target()).unwrap();
        session.request_stop().unwrap();

        let completed = session.complete().unwrap();
        assert_eq!(completed, target());
        assert!(session.is_idle());
        assert!(session.target().is_none());
    }

    #[test]
    fn complete_from_recording_fails() {
        let mut session = RecordingSession::new();
        session.start(target()).unwrap();

        let err = session.complete().unwrap_err();
        assert_eq!(err.current_state, ActivityState::Recording);
    }

    #[test]
    fn complete_from_idle_fails() {
        let mut session = RecordingSession::new();

        let err = session.complete().unwrap_err();
        assert_eq!(err.current_state, ActivityState::Idle);
    }

    #[test]
    fn abort_from_recording() {
        let mut session = RecordingSession::new();
        session.start(target()).unwrap();

        assert!(session.abort().is_ok());
        assert!(session.is_idle());
        assert!(session.target().is_none());
    }

    #[test]
    fn abort_from_stopped() {
        let mut session = RecordingSession::new();
        session.start(target()).unwrap();
        session.request_stop().unwrap();

        assert!(session.abort().is_ok());
        assert!(session.is_idle());
    }

    #[test]
    fn abort_from_idle_fails() {
        let mut session = RecordingSession::new();

        let err = session.abort().unwrap_err();
        assert_eq!(err.current_state, ActivityState::Idle);
    }

    #[test]
    fn full_cycle() {
        let mut session = RecordingSession::new();
        assert!(session.is_idle());

        session.start(target()).unwrap();
        assert!(session.is_recording());

        session.request_stop().unwrap();
        assert!(session.is_stopped());

        session.complete().unwrap();
        assert!(session.is_idle());

        // A second cycle reuses the same fixed location
        session.start(target()).unwrap();
        assert!(session.is_recording());
        assert_eq!(session.target(), Some(target().as_path()));
    }

    #[test]
    fn state_display() {
        assert_eq!(ActivityState::Idle.to_string(), "idle");
        assert_eq!(ActivityState::Recording.to_string(), "recording");
        assert_eq!(ActivityState::Stopped.to_string(), "stopped");
    }

    #[test]
    fn error_display() {
        let err = InvalidStateTransition {
            current_state: ActivityState::Stopped,
            action: "start recording".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("start recording"));
        assert!(msg.contains("stopped"));
    }
}
