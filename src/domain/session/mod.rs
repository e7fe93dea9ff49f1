//! Recording session domain module

mod affordances;
mod session;
mod target;

pub use affordances::{ControlState, STATUS_IDLE, STATUS_RECORDING};
pub use session::{ActivityState, InvalidStateTransition, RecordingSession};
pub use target::{RecordingTarget, RECORDED_FILE_NAME};
