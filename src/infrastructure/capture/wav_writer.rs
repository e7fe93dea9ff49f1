//! WAV writer for the recording artifact
//!
//! Mono 16-bit PCM at the device sample rate. The artifact name is fixed,
//! so writing always overwrites the previous capture.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

/// Bits per sample (16-bit audio)
const BITS_PER_SAMPLE: u16 = 16;

/// Number of channels (mono)
const CHANNELS: u16 = 1;

/// WAV writing errors
#[derive(Debug, thiserror::Error)]
pub enum WavWriteError {
    #[error("Failed to create WAV file: {0}")]
    Create(String),

    #[error("Failed to write WAV samples: {0}")]
    Write(String),

    #[error("Failed to finalize WAV file: {0}")]
    Finalize(String),
}

/// Write mono i16 samples as a WAV file at `path`
pub fn write_wav(path: &Path, samples: &[i16], sample_rate: u32) -> Result<(), WavWriteError> {
    let spec = WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut writer =
        WavWriter::create(path, spec).map_err(|e| WavWriteError::Create(e.to_string()))?;

    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| WavWriteError::Write(e.to_string()))?;
    }

    writer
        .finalize()
        .map_err(|e| WavWriteError::Finalize(e.to_string()))?;

    Ok(())
}
