//! Screen transition descriptor and handoff payload
//!
//! A transition carries a tagged payload that the destination screen
//! validates at the boundary. The payload moves out on receipt, so a
//! transition cannot deliver its cargo twice.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Identifiers of the app's screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Record screen to playback screen after a successful capture
    RecordingComplete,
    /// Playback screen back to the record screen
    ReturnToRecord,
}

impl TransitionKind {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RecordingComplete => "recording-complete",
            Self::ReturnToRecord => "return-to-record",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tagged payload carried by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffPayload {
    /// Location of a successfully completed recording
    RecordedAudio(PathBuf),
    /// No payload
    Empty,
}

impl HandoffPayload {
    /// Get the payload tag name
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::RecordedAudio(_) => "recorded-audio",
            Self::Empty => "empty",
        }
    }
}

/// Error when a transition is rejected at the receiving boundary
#[derive(Debug, Clone, Error)]
pub enum HandoffError {
    #[error("Unexpected transition: {0}")]
    WrongTransition(TransitionKind),

    #[error("Transition {kind} carried {found} payload, expected {expected}")]
    PayloadMismatch {
        kind: TransitionKind,
        expected: &'static str,
        found: &'static str,
    },
}

/// One-shot screen transition descriptor
#[derive(Debug)]
pub struct ScreenTransition {
    kind: TransitionKind,
    payload: HandoffPayload,
}

impl ScreenTransition {
    /// Build a transition from its parts
    pub fn new(kind: TransitionKind, payload: HandoffPayload) -> Self {
        Self { kind, payload }
    }

    /// The recording-completion transition carrying the recorded file location
    pub fn recording_complete(location: PathBuf) -> Self {
        Self::new(
            TransitionKind::RecordingComplete,
            HandoffPayload::RecordedAudio(location),
        )
    }

    /// Back-navigation from the playback screen, no payload
    pub fn return_to_record() -> Self {
        Self::new(TransitionKind::ReturnToRecord, HandoffPayload::Empty)
    }

    /// Get the transition kind
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Validate this is the recording-completion transition and extract the
    /// recorded file location. Any other kind or payload shape is rejected.
    pub fn into_recorded_audio(self) -> Result<PathBuf, HandoffError> {
        if self.kind != TransitionKind::RecordingComplete {
            return Err(HandoffError::WrongTransition(self.kind));
        }
        match self.payload {
            HandoffPayload::RecordedAudio(location) => Ok(location),
            other => Err(HandoffError::PayloadMismatch {
                kind: self.kind,
                expected: "recorded-audio",
                found: other.tag(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> PathBuf {
        PathBuf::from("/data/revoice/recordedVoice.wav")
    }

    #[test]
    fn recording_complete_carries_location() {
        let transition = ScreenTransition::recording_complete(location());
        assert_eq!(transition.kind(), TransitionKind::RecordingComplete);
        assert_eq!(transition.into_recorded_audio().unwrap(), location());
    }

    #[test]
    fn return_to_record_is_rejected_as_recording() {
        let transition = ScreenTransition::return_to_record();
        let err = transition.into_recorded_audio().unwrap_err();
        assert!(matches!(
            err,
            HandoffError::WrongTransition(TransitionKind::ReturnToRecord)
        ));
    }

    #[test]
    fn empty_payload_on_completion_is_rejected() {
        let transition =
            ScreenTransition::new(TransitionKind::RecordingComplete, HandoffPayload::Empty);
        let err = transition.into_recorded_audio().unwrap_err();
        assert!(matches!(err, HandoffError::PayloadMismatch { .. }));
    }

    #[test]
    fn kind_display() {
        assert_eq!(
            TransitionKind::RecordingComplete.to_string(),
            "recording-complete"
        );
        assert_eq!(TransitionKind::ReturnToRecord.to_string(), "return-to-record");
    }

    #[test]
    fn error_display_names_payload_tags() {
        let err = ScreenTransition::new(TransitionKind::RecordingComplete, HandoffPayload::Empty)
            .into_recorded_audio()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("empty"));
        assert!(msg.contains("recorded-audio"));
    }
}
