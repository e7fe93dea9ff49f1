//! Derived UI control state for the record screen

use super::session::ActivityState;

/// Status label while the record control is available
pub const STATUS_IDLE: &str = "Tap to Record";

/// Status label while a capture is running
pub const STATUS_RECORDING: &str = "Recording in Progress";

/// The three on-screen affordances of the record screen.
///
/// This is a pure view of [`ActivityState`], never stored independently:
/// exactly one of the two controls is enabled at any time, and the status
/// text follows the enabled control. Once a stop is requested the triple
/// returns to the idle form even though the completion outcome is still
/// pending; a record press in that window is rejected by the session state
/// machine rather than by the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub record_enabled: bool,
    pub stop_enabled: bool,
    pub status_text: &'static str,
}

impl ControlState {
    /// Derive the control triple for an activity state
    pub const fn for_state(state: ActivityState) -> Self {
        match state {
            ActivityState::Recording => Self {
                record_enabled: false,
                stop_enabled: true,
                status_text: STATUS_RECORDING,
            },
            ActivityState::Idle | ActivityState::Stopped => Self {
                record_enabled: true,
                stop_enabled: false,
                status_text: STATUS_IDLE,
            },
        }
    }
}

impl From<ActivityState> for ControlState {
    fn from(state: ActivityState) -> Self {
        Self::for_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [ActivityState; 3] = [
        ActivityState::Idle,
        ActivityState::Recording,
        ActivityState::Stopped,
    ];

    #[test]
    fn exactly_one_control_enabled_in_every_state() {
        for state in ALL_STATES {
            let controls = ControlState::for_state(state);
            assert_ne!(
                controls.record_enabled, controls.stop_enabled,
                "controls must be complements in {} state",
                state
            );
        }
    }

    #[test]
    fn idle_shows_tap_to_record() {
        let controls = ControlState::for_state(ActivityState::Idle);
        assert!(controls.record_enabled);
        assert!(!controls.stop_enabled);
        assert_eq!(controls.status_text, STATUS_IDLE);
    }

    #[test]
    fn recording_shows_recording_in_progress() {
        let controls = ControlState::for_state(ActivityState::Recording);
        assert!(!controls.record_enabled);
        assert!(controls.stop_enabled);
        assert_eq!(controls.status_text, STATUS_RECORDING);
    }

    #[test]
    fn stopped_returns_to_idle_triple() {
        let stopped = ControlState::for_state(ActivityState::Stopped);
        let idle = ControlState::for_state(ActivityState::Idle);
        assert_eq!(stopped, idle);
    }

    #[test]
    fn from_state_matches_for_state() {
        for state in ALL_STATES {
            assert_eq!(ControlState::from(state), ControlState::for_state(state));
        }
    }
}
