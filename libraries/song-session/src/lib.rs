//! Song Player - Session State
//!
//! Holds the one mutable session of a run and keeps it across restarts.
//!
//! This crate provides:
//! - `SessionState`: current song, volume (clamped to 0-100), active playlist, mute
//! - `SessionRecord`: the 3-line durable snapshot (song, volume, playlist)
//! - `SessionStore`: load-and-reconcile at startup, persist at shutdown
//!
//! # Reconciliation
//!
//! At startup the live player is asked what is playing. A non-empty answer
//! wins over the song in the record; volume and playlist always come from the
//! record. If the record cannot be read in full, the whole state falls back to
//! defaults. There is no partial recovery.
//!
//! # Example
//!
//! ```rust
//! use song_session::{SessionDefaults, SessionState};
//!
//! let mut state = SessionState::from_defaults(&SessionDefaults::default());
//! assert_eq!(state.current_volume(), 60);
//!
//! state.volume_up(5);
//! assert_eq!(state.current_volume(), 65);
//! ```

mod error;
mod record;
mod state;
mod store;

// Public exports
pub use error::{Result, SessionError};
pub use record::{atomic_write, SessionRecord};
pub use state::{MuteChange, SessionDefaults, SessionState, DEFAULT_PLAYLIST, DEFAULT_VOLUME};
pub use store::SessionStore;
