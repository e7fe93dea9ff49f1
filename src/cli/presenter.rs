//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::session::{ControlState, STATUS_RECORDING};

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.red} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Update spinner message
    pub fn update_spinner(&self, message: &str) {
        if let Some(ref spinner) = self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Render the record screen control panel.
    /// Enabled controls are highlighted; disabled ones are dimmed.
    pub fn controls(&self, controls: &ControlState) {
        let record = if controls.record_enabled {
            "[r] Record".green().to_string()
        } else {
            "[r] Record".dimmed().to_string()
        };
        let stop = if controls.stop_enabled {
            "[s] Stop".red().to_string()
        } else {
            "[s] Stop".dimmed().to_string()
        };
        eprintln!("{}  {}  {}", record, stop, controls.status_text.bold());
    }

    /// Format elapsed capture time as m:ss
    pub fn format_elapsed(&self, elapsed_ms: u64) -> String {
        let total_secs = elapsed_ms / 1000;
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }

    /// Update the recording spinner with elapsed time
    pub fn update_recording_progress(&self, elapsed_ms: u64) {
        self.update_spinner(&format!(
            "{}  {}",
            STATUS_RECORDING,
            self.format_elapsed(elapsed_ms)
        ));
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
