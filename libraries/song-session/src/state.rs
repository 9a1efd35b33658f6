//! In-memory session state
//!
//! One `SessionState` exists per run. It is built at startup by the store,
//! threaded through the controller, and handed back to the store at shutdown.

use song_core::MAX_VOLUME;

/// Mixer level used when no usable session record exists
pub const DEFAULT_VOLUME: u8 = 60;

/// Playlist built from the whole media root; it can never be removed or emptied
pub const DEFAULT_PLAYLIST: &str = "all_songs";

/// Fallback values for a session without a usable record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    /// Initial volume (0-100, default: 60)
    pub volume: u8,

    /// Protected default playlist name (default: `all_songs`)
    pub playlist: String,
}

impl SessionDefaults {
    /// Create defaults, clamping the volume to 0-100
    pub fn new(volume: u8, playlist: impl Into<String>) -> Self {
        Self {
            volume: volume.min(MAX_VOLUME),
            playlist: playlist.into(),
        }
    }

    /// Whether `name` is the protected default playlist
    pub fn is_default_playlist(&self, name: &str) -> bool {
        self.playlist == name
    }
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME, DEFAULT_PLAYLIST)
    }
}

/// Outcome of a mute toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteChange {
    /// Volume was saved and forced to 0
    Muted,

    /// Saved volume was restored
    Unmuted,
}

/// Session state of one run
///
/// Invariant: `current_volume` is always within 0-100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Title to resume on startup; empty means start from the beginning
    current_song: String,

    /// Current mixer level (0-100)
    current_volume: u8,

    /// Active playlist; the player cannot report it, so only we track it
    current_playlist: String,

    /// Whether volume is forced to 0
    muted: bool,

    /// Level restored on unmute
    ///
    /// Starts at the startup volume so unmuting before any mute is defined.
    previous_volume: u8,
}

impl SessionState {
    /// Create a session state, clamping the volume to 0-100
    pub fn new(song: impl Into<String>, volume: u8, playlist: impl Into<String>) -> Self {
        let volume = volume.min(MAX_VOLUME);

        Self {
            current_song: song.into(),
            current_volume: volume,
            current_playlist: playlist.into(),
            muted: false,
            previous_volume: volume,
        }
    }

    /// Fresh state: no song, default volume, default playlist
    pub fn from_defaults(defaults: &SessionDefaults) -> Self {
        Self::new(String::new(), defaults.volume, defaults.playlist.clone())
    }

    pub fn current_song(&self) -> &str {
        &self.current_song
    }

    pub fn current_volume(&self) -> u8 {
        self.current_volume
    }

    pub fn current_playlist(&self) -> &str {
        &self.current_playlist
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn previous_volume(&self) -> u8 {
        self.previous_volume
    }

    pub fn set_current_song(&mut self, song: impl Into<String>) {
        self.current_song = song.into();
    }

    pub fn set_current_playlist(&mut self, playlist: impl Into<String>) {
        self.current_playlist = playlist.into();
    }

    /// Raise the volume by `step`, saturating at 100
    ///
    /// Returns the new level.
    pub fn volume_up(&mut self, step: u8) -> u8 {
        self.current_volume = self.current_volume.saturating_add(step).min(MAX_VOLUME);
        self.current_volume
    }

    /// Lower the volume by `step`, saturating at 0
    ///
    /// Returns the new level.
    pub fn volume_down(&mut self, step: u8) -> u8 {
        self.current_volume = self.current_volume.saturating_sub(step);
        self.current_volume
    }

    /// Toggle mute
    ///
    /// Muting saves the current level and drops to 0. Unmuting restores the
    /// saved level. Volume steps taken while muted change the live level
    /// only; the saved level is what comes back.
    pub fn toggle_mute(&mut self) -> MuteChange {
        self.muted = !self.muted;

        if self.muted {
            self.previous_volume = self.current_volume;
            self.current_volume = 0;
            MuteChange::Muted
        } else {
            self.current_volume = self.previous_volume;
            MuteChange::Unmuted
        }
    }
}
