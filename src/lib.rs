//! Revoice - record your voice and hand it to playback
//!
//! This crate implements the record screen of a small voice app: it captures
//! microphone audio into a fixed-name WAV file and hands the file's location
//! to the playback screen through a one-shot typed screen transition.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Recording session state machine, derived UI affordances,
//!   screen-transition handoff, configuration, and errors
//! - **Application**: The record screen use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (cpal capture, WAV writer,
//!   desktop notifications, config store)
//! - **CLI**: Command-line interface, the interactive screen loop, and the
//!   playback screen

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
