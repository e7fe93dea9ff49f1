//! Playback screen - the downstream collaborator of the record screen
//!
//! Receives the recorded file's location through the screen transition and
//! shows it. Decoding and playback are out of scope here.

use std::path::{Path, PathBuf};

use crate::domain::handoff::{HandoffError, ScreenTransition};

/// Playback screen with its single input slot: the recorded audio location,
/// populated exactly once at transition time.
#[derive(Debug)]
pub struct PlaybackScreen {
    recorded_audio_location: PathBuf,
}

impl PlaybackScreen {
    /// Accept a transition at the screen boundary.
    ///
    /// Only the recording-completion transition with a recorded-audio
    /// payload is admitted; every other kind or payload shape is a typed
    /// error rather than an unchecked assertion.
    pub fn receive(transition: ScreenTransition) -> Result<Self, HandoffError> {
        let recorded_audio_location = transition.into_recorded_audio()?;
        Ok(Self {
            recorded_audio_location,
        })
    }

    /// The recorded audio location received at transition time
    pub fn recorded_audio_location(&self) -> &Path {
        &self.recorded_audio_location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::handoff::{HandoffPayload, TransitionKind};

    fn location() -> PathBuf {
        PathBuf::from("/data/revoice/recordedVoice.wav")
    }

    #[test]
    fn receives_recording_completion() {
        let screen =
            PlaybackScreen::receive(ScreenTransition::recording_complete(location())).unwrap();
        assert_eq!(screen.recorded_audio_location(), location().as_path());
    }

    #[test]
    fn rejects_other_transition_kinds() {
        let err = PlaybackScreen::receive(ScreenTransition::return_to_record()).unwrap_err();
        assert!(matches!(err, HandoffError::WrongTransition(_)));
    }

    #[test]
    fn rejects_malformed_payload() {
        let transition =
            ScreenTransition::new(TransitionKind::RecordingComplete, HandoffPayload::Empty);
        let err = PlaybackScreen::receive(transition).unwrap_err();
        assert!(matches!(err, HandoffError::PayloadMismatch { .. }));
    }
}
