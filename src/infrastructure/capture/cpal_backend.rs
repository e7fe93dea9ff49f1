//! Cross-platform capture backend using cpal
//!
//! The stream is managed by a dedicated thread because cpal::Stream is not
//! thread-safe. Finalization after a stop (draining samples, writing the
//! WAV artifact, invoking the registered listener) happens off the caller's
//! thread, so completion always arrives asynchronously.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::SampleFormat;
use tokio::time::Duration as TokioDuration;

use super::wav_writer;
use crate::application::ports::{
    CaptureBackend, CaptureError, CaptureListener, CaptureOutcome, SessionProfile,
};

/// Capture backend using cpal, writing a mono 16-bit PCM WAV artifact
pub struct CpalCaptureBackend {
    /// Listener invoked with the outcome when a capture finishes
    listener: Arc<dyn CaptureListener>,
    /// Preferred input device name; None uses the host default
    input_device: Option<String>,
    /// Recorded audio samples (mono, i16, at device sample rate)
    audio_buffer: Arc<StdMutex<Vec<i16>>>,
    /// Device sample rate of the running capture
    device_sample_rate: Arc<AtomicU32>,
    /// Capture state
    is_capturing: Arc<AtomicBool>,
    /// Capture start time (millis since epoch for atomic access)
    start_time_ms: Arc<AtomicU64>,
    /// Elapsed time in milliseconds
    elapsed_ms: Arc<AtomicU64>,
    /// Error the capture thread hit before the stream was confirmed
    start_error: Arc<StdMutex<Option<CaptureError>>>,
    /// Target location of the running capture
    target: Arc<StdMutex<Option<PathBuf>>>,
}

impl CpalCaptureBackend {
    /// Create a backend reporting completions to `listener`
    pub fn new(listener: Arc<dyn CaptureListener>) -> Self {
        Self::with_input_device(listener, None)
    }

    /// Create a backend with a preferred input device name
    pub fn with_input_device(listener: Arc<dyn CaptureListener>, input_device: Option<String>) -> Self {
        Self {
            listener,
            input_device,
            audio_buffer: Arc::new(StdMutex::new(Vec::new())),
            device_sample_rate: Arc::new(AtomicU32::new(0)),
            is_capturing: Arc::new(AtomicBool::new(false)),
            start_time_ms: Arc::new(AtomicU64::new(0)),
            elapsed_ms: Arc::new(AtomicU64::new(0)),
            start_error: Arc::new(StdMutex::new(None)),
            target: Arc::new(StdMutex::new(None)),
        }
    }

    /// Validate the requested session profile against the host.
    ///
    /// cpal exposes no route override, so play-and-record with speaker
    /// preference is checked as a capability: an output route must exist
    /// alongside the input.
    fn configure_session(profile: SessionProfile) -> Result<(), CaptureError> {
        if profile.play_and_record && profile.prefer_speaker {
            let host = cpal::default_host();
            if host.default_output_device().is_none() {
                return Err(CaptureError::SessionConfig(
                    "no output route available for playback".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Resolve the input device, honoring a configured name
    fn get_input_device(preferred: Option<&str>) -> Result<cpal::Device, CaptureError> {
        let host = cpal::default_host();
        if let Some(name) = preferred {
            let mut devices = host
                .input_devices()
                .map_err(|e| CaptureError::SessionConfig(e.to_string()))?;
            return devices
                .find(|d| d.name().map(|n| n == name).unwrap_or(false))
                .ok_or_else(|| {
                    CaptureError::SessionConfig(format!("input device '{}' not found", name))
                });
        }
        host.default_input_device()
            .ok_or(CaptureError::NoInputDevice)
    }

    /// Get the device's default input configuration
    fn get_input_config(
        device: &cpal::Device,
    ) -> Result<(cpal::StreamConfig, SampleFormat), CaptureError> {
        let supported = device
            .default_input_config()
            .map_err(|e| CaptureError::StartFailed(format!("failed to get config: {}", e)))?;
        let sample_format = supported.sample_format();
        Ok((supported.config(), sample_format))
    }

    /// Mix stereo to mono
    fn stereo_to_mono(samples: &[i16], channels: u16) -> Vec<i16> {
        if channels == 1 {
            return samples.to_vec();
        }

        samples
            .chunks(channels as usize)
            .map(|chunk| {
                let sum: i32 = chunk.iter().map(|&s| s as i32).sum();
                (sum / channels as i32) as i16
            })
            .collect()
    }

    /// Write the drained samples to the target and build the outcome
    fn finalize(samples: Vec<i16>, sample_rate: u32, location: PathBuf) -> CaptureOutcome {
        if samples.is_empty() {
            return CaptureOutcome::failed(location, "no audio data captured");
        }
        if sample_rate == 0 {
            return CaptureOutcome::failed(location, "sample rate not set");
        }
        match wav_writer::write_wav(&location, &samples, sample_rate) {
            Ok(()) => CaptureOutcome::succeeded(location),
            Err(e) => {
                let detail = e.to_string();
                CaptureOutcome::failed(location, detail)
            }
        }
    }
}

#[async_trait]
impl CaptureBackend for CpalCaptureBackend {
    async fn start(&self, profile: SessionProfile, target: &Path) -> Result<(), CaptureError> {
        if self.is_capturing.load(Ordering::SeqCst) {
            return Err(CaptureError::StartFailed(
                "capture already in progress".to_string(),
            ));
        }

        Self::configure_session(profile)?;
        // Validate the device exists before committing; the capture thread
        // resolves its own handle.
        Self::get_input_device(self.input_device.as_deref())?;

        // Reset per-capture state
        {
            let mut buffer = self.audio_buffer.lock().unwrap();
            buffer.clear();
        }
        {
            let mut start_error = self.start_error.lock().unwrap();
            *start_error = None;
        }
        {
            let mut slot = self.target.lock().unwrap();
            *slot = Some(target.to_path_buf());
        }
        self.elapsed_ms.store(0, Ordering::SeqCst);

        // Mark as capturing
        self.is_capturing.store(true, Ordering::SeqCst);

        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.start_time_ms.store(now, Ordering::SeqCst);

        // Clone Arcs for the background capture thread
        let audio_buffer = Arc::clone(&self.audio_buffer);
        let device_sample_rate = Arc::clone(&self.device_sample_rate);
        let is_capturing = Arc::clone(&self.is_capturing);
        let elapsed_ms = Arc::clone(&self.elapsed_ms);
        let start_time_ms = Arc::clone(&self.start_time_ms);
        let start_error = Arc::clone(&self.start_error);
        let preferred_device = self.input_device.clone();

        // cpal::Stream is not Send, so the stream lives on its own thread
        std::thread::spawn(move || {
            let fail = |error: CaptureError| {
                if let Ok(mut slot) = start_error.lock() {
                    *slot = Some(error);
                }
            };

            let device = match CpalCaptureBackend::get_input_device(preferred_device.as_deref()) {
                Ok(d) => d,
                Err(e) => {
                    fail(e);
                    is_capturing.store(false, Ordering::SeqCst);
                    return;
                }
            };

            let (config, sample_format) = match CpalCaptureBackend::get_input_config(&device) {
                Ok(c) => c,
                Err(e) => {
                    fail(e);
                    is_capturing.store(false, Ordering::SeqCst);
                    return;
                }
            };

            let sample_rate = config.sample_rate.0;
            let channels = config.channels;
            device_sample_rate.store(sample_rate, Ordering::SeqCst);

            let audio_buffer_clone = Arc::clone(&audio_buffer);
            let is_capturing_clone = Arc::clone(&is_capturing);

            let stream_result = match sample_format {
                SampleFormat::I16 => device.build_input_stream(
                    &config,
                    move |data: &[i16], _: &cpal::InputCallbackInfo| {
                        if is_capturing_clone.load(Ordering::SeqCst) {
                            let mono = CpalCaptureBackend::stereo_to_mono(data, channels);
                            if let Ok(mut buffer) = audio_buffer_clone.lock() {
                                buffer.extend_from_slice(&mono);
                            }
                        }
                    },
                    |err| eprintln!("Audio stream error: {}", err),
                    None,
                ),

                SampleFormat::F32 => {
                    let audio_buffer_clone = Arc::clone(&audio_buffer);
                    let is_capturing_clone = Arc::clone(&is_capturing);

                    device.build_input_stream(
                        &config,
                        move |data: &[f32], _: &cpal::InputCallbackInfo| {
                            if is_capturing_clone.load(Ordering::SeqCst) {
                                let i16_data: Vec<i16> =
                                    data.iter().map(|&s| (s * 32767.0) as i16).collect();
                                let mono = CpalCaptureBackend::stereo_to_mono(&i16_data, channels);
                                if let Ok(mut buffer) = audio_buffer_clone.lock() {
                                    buffer.extend_from_slice(&mono);
                                }
                            }
                        },
                        |err| eprintln!("Audio stream error: {}", err),
                        None,
                    )
                }

                other => {
                    fail(CaptureError::StartFailed(format!(
                        "unsupported sample format: {:?}",
                        other
                    )));
                    is_capturing.store(false, Ordering::SeqCst);
                    return;
                }
            };

            let stream = match stream_result {
                Ok(s) => s,
                Err(e) => {
                    fail(CaptureError::StartFailed(e.to_string()));
                    is_capturing.store(false, Ordering::SeqCst);
                    return;
                }
            };

            if let Err(e) = stream.play() {
                fail(CaptureError::StartFailed(e.to_string()));
                is_capturing.store(false, Ordering::SeqCst);
                return;
            }

            // Keep capturing until stopped
            while is_capturing.load(Ordering::SeqCst) {
                let now = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_millis() as u64)
                    .unwrap_or(0);
                let start = start_time_ms.load(Ordering::SeqCst);
                elapsed_ms.store(now.saturating_sub(start), Ordering::SeqCst);

                std::thread::sleep(std::time::Duration::from_millis(100));
            }

            drop(stream);
        });

        // Give the thread a moment to start
        tokio::time::sleep(TokioDuration::from_millis(50)).await;

        // Check if the capture actually started
        if !self.is_capturing.load(Ordering::SeqCst) {
            let mut slot = self.target.lock().unwrap();
            *slot = None;
            drop(slot);

            let detail = self
                .start_error
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .take();
            return Err(detail
                .unwrap_or_else(|| CaptureError::StartFailed("failed to start capture".to_string())));
        }

        Ok(())
    }

    async fn stop(&self) -> Result<(), CaptureError> {
        if !self.is_capturing.load(Ordering::SeqCst) {
            return Err(CaptureError::NotCapturing);
        }

        // Deactivate: the capture thread winds down and drops the stream
        self.is_capturing.store(false, Ordering::SeqCst);

        let audio_buffer = Arc::clone(&self.audio_buffer);
        let device_sample_rate = Arc::clone(&self.device_sample_rate);
        let target = Arc::clone(&self.target);
        let listener = Arc::clone(&self.listener);

        // Finalize off the caller's thread; the outcome reaches the
        // registered listener at some later point.
        tokio::spawn(async move {
            // Give the capture thread a moment to clean up
            tokio::time::sleep(TokioDuration::from_millis(100)).await;

            let samples = {
                let mut buffer = audio_buffer.lock().unwrap_or_else(|e| e.into_inner());
                std::mem::take(&mut *buffer)
            };
            let sample_rate = device_sample_rate.load(Ordering::SeqCst);
            let location = {
                let mut slot = target.lock().unwrap_or_else(|e| e.into_inner());
                slot.take()
            };
            let Some(location) = location else {
                return;
            };

            let fallback = location.clone();
            let outcome = match tokio::task::spawn_blocking(move || {
                CpalCaptureBackend::finalize(samples, sample_rate, location)
            })
            .await
            {
                Ok(outcome) => outcome,
                Err(e) => CaptureOutcome::failed(fallback, format!("finalize task error: {}", e)),
            };

            listener.capture_finished(outcome);
        });

        Ok(())
    }

    fn is_capturing(&self) -> bool {
        self.is_capturing.load(Ordering::SeqCst)
    }

    fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullListener;

    impl CaptureListener for NullListener {
        fn capture_finished(&self, _outcome: CaptureOutcome) {}
    }

    #[test]
    fn stereo_to_mono_single_channel() {
        let mono = vec![100i16, 200, 300];
        let result = CpalCaptureBackend::stereo_to_mono(&mono, 1);
        assert_eq!(result, mono);
    }

    #[test]
    fn stereo_to_mono_two_channels() {
        let stereo = vec![100i16, 200, 300, 400];
        let result = CpalCaptureBackend::stereo_to_mono(&stereo, 2);
        assert_eq!(result, vec![150, 350]); // Average of each pair
    }

    #[test]
    fn backend_default_state() {
        let backend = CpalCaptureBackend::new(Arc::new(NullListener));
        assert!(!backend.is_capturing());
        assert_eq!(backend.elapsed_ms(), 0);
    }

    #[tokio::test]
    async fn stop_without_capture_is_rejected() {
        let backend = CpalCaptureBackend::new(Arc::new(NullListener));
        let result = backend.stop().await;
        assert!(matches!(result, Err(CaptureError::NotCapturing)));
    }

    #[test]
    fn finalize_empty_samples_fails() {
        let outcome =
            CpalCaptureBackend::finalize(Vec::new(), 44100, PathBuf::from("/tmp/out.wav"));
        assert!(!outcome.success);
        assert!(outcome.detail.unwrap().contains("no audio data"));
    }

    #[test]
    fn finalize_zero_rate_fails() {
        let outcome =
            CpalCaptureBackend::finalize(vec![0i16; 100], 0, PathBuf::from("/tmp/out.wav"));
        assert!(!outcome.success);
    }

    #[test]
    fn finalize_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let location = dir.path().join("recordedVoice.wav");

        let outcome = CpalCaptureBackend::finalize(vec![0i16; 4410], 44100, location.clone());
        assert!(outcome.success);
        assert_eq!(outcome.location, location);
        assert!(location.exists());
    }
}
