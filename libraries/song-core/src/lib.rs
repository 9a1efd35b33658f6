//! Song Player Core
//!
//! Platform-agnostic building blocks shared by the session store, the system
//! collaborators and the interactive controller.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Capability traits**: `PlayerService`, `MixerService`, `HostControl`
//! - **Track helpers**: `extract_title` for `"<artist> - <title>"` lines
//! - **Error Handling**: Unified `SongError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use song_core::extract_title;
//!
//! assert_eq!(extract_title("Artist Name - Song Title\n"), "Song Title");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod track;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, SongError};
pub use track::{extract_title, TITLE_SEPARATOR};
pub use traits::{HostControl, MixerService, PlayerService};

/// Highest mixer level accepted by [`MixerService::set_volume`]
pub const MAX_VOLUME: u8 = 100;
