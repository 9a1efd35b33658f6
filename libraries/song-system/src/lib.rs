//! Song Player - System Collaborators
//!
//! Thin wrappers over the programs and directories the controller drives:
//! - `MpcPlayer`: the mpd daemon through the `mpc` client
//! - `AmixerMixer`: the ALSA mixer through `amixer`
//! - `SystemHost`: host power-off command
//! - `MediaLibrary`: media root enumeration and path resolution
//!
//! Every program is spawned directly with an argument vector, never through
//! a shell, and a non-zero exit status is reported as an error.

mod host;
mod library;
mod mixer;
mod mpc;
mod process;

pub use host::SystemHost;
pub use library::{is_media_file, MediaLibrary};
pub use mixer::AmixerMixer;
pub use mpc::MpcPlayer;
