//! Capture infrastructure module
//!
//! Microphone capture via cpal, written out as a mono 16-bit PCM WAV
//! artifact at the device sample rate.

mod cpal_backend;
mod wav_writer;

pub use cpal_backend::CpalCaptureBackend;
pub use wav_writer::{write_wav, WavWriteError};
