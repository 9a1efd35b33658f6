//! Durable session record
//!
//! Flat text, three lines in order: song title, volume, playlist name.
//! Written whole at shutdown via temp→rename, so a crash never leaves a
//! half-written record behind.

use crate::error::{Result, SessionError};
use crate::state::SessionState;
use song_core::{extract_title, MAX_VOLUME};
use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot persisted between runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    /// Last song title (may be empty)
    pub song: String,

    /// Mixer level (0-100)
    pub volume: u8,

    /// Active playlist name
    pub playlist: String,
}

impl SessionRecord {
    /// Parse a record
    ///
    /// The song line goes through the same title extraction as a live
    /// player line. A volume outside 0-100 is clamped. Missing lines, a
    /// non-numeric volume or an empty playlist name make the whole record
    /// malformed.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();

        let song_line = lines
            .next()
            .ok_or_else(|| SessionError::Malformed("missing song line".to_string()))?;
        let volume_line = lines
            .next()
            .ok_or_else(|| SessionError::Malformed("missing volume line".to_string()))?;
        let playlist_line = lines
            .next()
            .ok_or_else(|| SessionError::Malformed("missing playlist line".to_string()))?;

        let volume = volume_line.trim().parse::<i64>().map_err(|e| {
            SessionError::Malformed(format!("volume {:?} is not a number: {}", volume_line, e))
        })?;
        let volume = volume.clamp(0, i64::from(MAX_VOLUME)) as u8;

        let playlist = playlist_line.trim_end();
        if playlist.is_empty() {
            return Err(SessionError::Malformed("empty playlist name".to_string()));
        }

        Ok(Self {
            song: extract_title(song_line).to_string(),
            volume,
            playlist: playlist.to_string(),
        })
    }

    /// Render the three record lines
    pub fn render(&self) -> String {
        format!("{}\n{}\n{}\n", self.song, self.volume, self.playlist)
    }
}

impl From<&SessionState> for SessionRecord {
    fn from(state: &SessionState) -> Self {
        Self {
            song: state.current_song().to_string(),
            volume: state.current_volume(),
            playlist: state.current_playlist().to_string(),
        }
    }
}

/// Atomically write bytes to a file
///
/// Uses temp file + rename to ensure atomic write
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Temp file lives next to the target so rename stays on one filesystem
    let temp_path = temp_path_for(target_path);
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, target_path)?;

    Ok(())
}

/// `<target>.tmp`, keeping the target's full file name
fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
