//! Session store: restore at startup, persist at shutdown

use crate::error::Result;
use crate::record::{atomic_write, SessionRecord};
use crate::state::{SessionDefaults, SessionState};
use song_core::{extract_title, PlayerService};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes the durable session record
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    defaults: SessionDefaults,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>, defaults: SessionDefaults) -> Self {
        Self {
            path: path.into(),
            defaults,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn defaults(&self) -> &SessionDefaults {
        &self.defaults
    }

    /// Build the startup state from the live player and the record
    ///
    /// A non-empty live track wins over the record's song. Volume and
    /// playlist come from the record. Any failure reading the record resets
    /// the whole state to defaults, including the song.
    pub fn load_and_reconcile<P>(&self, player: &mut P) -> SessionState
    where
        P: PlayerService + ?Sized,
    {
        let live_song = match player.current_track() {
            Ok(line) => extract_title(&line).to_string(),
            Err(e) => {
                tracing::warn!("could not query current song: {}", e);
                String::new()
            }
        };

        let state = match self.read_record() {
            Ok(record) => {
                let song = if live_song.is_empty() {
                    record.song
                } else {
                    live_song
                };
                SessionState::new(song, record.volume, record.playlist)
            }
            Err(e) => {
                tracing::error!(
                    "failed to read session record {}: {}",
                    self.path.display(),
                    e
                );
                SessionState::from_defaults(&self.defaults)
            }
        };

        tracing::info!("read session record");
        tracing::info!(" song = [{}]", state.current_song());
        tracing::info!(" volume = [{}]", state.current_volume());
        tracing::info!(" playlist = [{}]", state.current_playlist());

        state
    }

    /// Write the final state, picking up the track the player is on now
    ///
    /// The player may have advanced on its own during the session, so its
    /// answer replaces `current_song` before writing. If the query fails the
    /// in-memory song is kept.
    pub fn persist<P>(&self, state: &mut SessionState, player: &mut P) -> Result<()>
    where
        P: PlayerService + ?Sized,
    {
        match player.current_track() {
            Ok(line) => state.set_current_song(extract_title(&line)),
            Err(e) => tracing::warn!(
                "could not query current song, keeping [{}]: {}",
                state.current_song(),
                e
            ),
        }

        let record = SessionRecord::from(&*state);
        atomic_write(&self.path, record.render().as_bytes())?;

        tracing::debug!("session record written to {}", self.path.display());
        Ok(())
    }

    fn read_record(&self) -> Result<SessionRecord> {
        let text = fs::read_to_string(&self.path)?;
        SessionRecord::parse(&text)
    }
}
