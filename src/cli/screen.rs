//! Interactive screen runner
//!
//! Wires the adapters together and drives the app's two screens from stdin
//! commands. Capture completions come back through an mpsc channel fed by
//! the registered listener and are forwarded into the controller; a
//! successful completion hands the recorded file to the playback screen.

use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration as TokioDuration};

use crate::application::ports::{CaptureListener, CaptureOutcome};
use crate::application::{RecordScreen, RecordScreenConfig};
use crate::domain::config::AppConfig;
use crate::domain::session::STATUS_RECORDING;
use crate::infrastructure::{create_notifier, storage, CpalCaptureBackend, XdgConfigStore};

use super::args::ScreenOptions;
use super::playback_screen::PlaybackScreen;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

const RECORD_SCREEN_HELP: &str = "Record screen. Commands: r = record, s = stop, q = quit";
const PLAYBACK_SCREEN_HELP: &str = "Playback screen. Commands: b = back, q = quit";

/// Listener forwarding capture completions into the screen loop
struct ChannelListener {
    tx: mpsc::Sender<CaptureOutcome>,
}

impl CaptureListener for ChannelListener {
    fn capture_finished(&self, outcome: CaptureOutcome) {
        // The loop may be gone during shutdown; dropping the outcome is fine
        let _ = self.tx.try_send(outcome);
    }
}

/// Commands a user can issue on the record screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScreenCommand {
    Record,
    Stop,
    Quit,
}

fn parse_command(line: &str) -> Option<ScreenCommand> {
    match line.trim().to_lowercase().as_str() {
        "r" | "record" => Some(ScreenCommand::Record),
        "s" | "stop" => Some(ScreenCommand::Stop),
        "q" | "quit" | "exit" => Some(ScreenCommand::Quit),
        _ => None,
    }
}

/// The screen currently receiving user input
enum ActiveScreen {
    Record,
    Playback(PlaybackScreen),
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    use crate::application::ports::ConfigStore;

    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Run the interactive record screen
pub async fn run_screen(options: ScreenOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    if let Err(e) = storage::ensure_storage_dir(&options.storage_dir) {
        presenter.error(&format!(
            "Failed to prepare storage directory {}: {}",
            options.storage_dir.display(),
            e
        ));
        return ExitCode::from(EXIT_ERROR);
    }

    let (outcome_tx, mut outcome_rx) = mpsc::channel(4);
    let listener = Arc::new(ChannelListener { tx: outcome_tx });
    let backend = CpalCaptureBackend::with_input_device(listener, options.input_device.clone());
    let notifier = create_notifier(options.notify);

    let screen = RecordScreen::new(
        backend,
        notifier,
        RecordScreenConfig {
            storage_dir: options.storage_dir.clone(),
            enable_notify: options.notify,
        },
    );

    presenter.info(RECORD_SCREEN_HELP);
    presenter.controls(&screen.controls().await);

    let mut active = ActiveScreen::Record;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = interval(TokioDuration::from_millis(250));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break, // stdin closed
                    Err(e) => {
                        presenter.error(&format!("Failed to read input: {}", e));
                        break;
                    }
                };

                match active {
                    ActiveScreen::Record => match parse_command(&line) {
                        Some(ScreenCommand::Record) => {
                            match screen.start_recording().await {
                                Ok(()) => presenter.start_spinner(STATUS_RECORDING),
                                Err(e) => presenter.error(&e.to_string()),
                            }
                            presenter.controls(&screen.controls().await);
                        }
                        Some(ScreenCommand::Stop) => {
                            presenter.stop_spinner();
                            match screen.stop_recording().await {
                                Ok(()) => presenter.info("Saving recording..."),
                                Err(e) => presenter.error(&e.to_string()),
                            }
                            presenter.controls(&screen.controls().await);
                        }
                        Some(ScreenCommand::Quit) => {
                            presenter.stop_spinner();
                            if screen.is_capturing() {
                                let _ = screen.stop_recording().await;
                            }
                            break;
                        }
                        None => presenter.warn("Unknown command. Use r, s, or q"),
                    },

                    ActiveScreen::Playback(_) => match line.trim().to_lowercase().as_str() {
                        "b" | "back" | "" => {
                            active = ActiveScreen::Record;
                            presenter.info(RECORD_SCREEN_HELP);
                            presenter.controls(&screen.controls().await);
                        }
                        "q" | "quit" | "exit" => break,
                        _ => presenter.warn("Unknown command. Use b or q"),
                    },
                }
            }

            Some(outcome) = outcome_rx.recv() => {
                presenter.stop_spinner();
                match screen.capture_finished(outcome).await {
                    Ok(transition) => match PlaybackScreen::receive(transition) {
                        Ok(playback) => {
                            presenter.success(&format!(
                                "Recording saved to {}",
                                playback.recorded_audio_location().display()
                            ));
                            presenter.info(PLAYBACK_SCREEN_HELP);
                            active = ActiveScreen::Playback(playback);
                        }
                        Err(e) => {
                            // Rejected at the boundary; stay on the record screen
                            presenter.error(&e.to_string());
                            presenter.controls(&screen.controls().await);
                        }
                    },
                    Err(e) => {
                        presenter.error(&e.to_string());
                        presenter.controls(&screen.controls().await);
                    }
                }
            }

            _ = ticker.tick() => {
                if screen.is_capturing() {
                    presenter.update_recording_progress(screen.elapsed_ms());
                }
            }

            _ = tokio::signal::ctrl_c() => {
                presenter.stop_spinner();
                if screen.is_capturing() {
                    let _ = screen.stop_recording().await;
                }
                presenter.info("Interrupted");
                break;
            }
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
