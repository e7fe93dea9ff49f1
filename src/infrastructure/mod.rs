//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with cpal, the desktop notification service, and the
//! filesystem.

pub mod capture;
pub mod config;
pub mod notification;
pub mod storage;

// Re-export adapters
pub use capture::CpalCaptureBackend;
pub use config::XdgConfigStore;
pub use notification::{create_notifier, NoOpNotifier, NotifyRustNotifier};
