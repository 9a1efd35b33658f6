//! Song Player Library
//!
//! Interactive terminal controller for an mpd music player: reads terse
//! one-letter commands, drives the player and mixer, and keeps the last
//! song, volume and playlist across restarts.
//!
//! This library exposes the core components for testing purposes.

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod repl;

// Re-export commonly used types for convenience
pub use command::{Command, UnrecognizedCommand, Verb};
pub use config::PlayerConfig;
pub use controller::{Controller, ControllerSettings, ExitMode, Flow, Services};
pub use error::{AppError, Result};
