/// Capability traits for the external collaborators
///
/// The controller never talks to the playback daemon, the mixer or the host
/// directly. Each collaborator sits behind one of these traits so every call
/// yields an explicit `Result` that can be logged uniformly.
use crate::error::Result;

/// Control surface of the playback daemon
///
/// Positions are passed through as the operator typed them. Range and format
/// checks are the daemon's responsibility, not the caller's.
pub trait PlayerService {
    /// Start playback, optionally at a queue position
    fn play(&mut self, position: Option<&str>) -> Result<()>;

    /// Stop playback
    fn stop(&mut self) -> Result<()>;

    /// Skip to the next track
    fn next(&mut self) -> Result<()>;

    /// Skip to the previous track
    fn previous(&mut self) -> Result<()>;

    /// Play the first queued track whose title contains `title`
    fn search_and_play(&mut self, title: &str) -> Result<()>;

    /// Currently playing track as `"<artist> - <title>"`
    ///
    /// Returns an empty string when nothing is playing.
    fn current_track(&mut self) -> Result<String>;

    /// Append a track URI to the end of the queue
    fn add_track(&mut self, uri: &str) -> Result<()>;

    /// Insert a track URI right after the current track
    fn insert_track(&mut self, uri: &str) -> Result<()>;

    /// Delete the track at `position` (`"0"` is the current track)
    fn delete_track(&mut self, position: &str) -> Result<()>;

    /// Remove every track from the queue
    fn clear_playlist(&mut self) -> Result<()>;

    /// Names of all saved playlists
    fn list_playlists(&mut self) -> Result<Vec<String>>;

    /// Save the queue as playlist `name`
    fn save_playlist(&mut self, name: &str) -> Result<()>;

    /// Append saved playlist `name` to the queue
    fn load_playlist(&mut self, name: &str) -> Result<()>;

    /// Delete saved playlist `name`
    fn remove_playlist(&mut self, name: &str) -> Result<()>;

    /// Queue entries in order, each formatted `"<artist> - <title>"`
    fn list_current_playlist(&mut self) -> Result<Vec<String>>;
}

/// Hardware volume control
pub trait MixerService {
    /// Set the output level in percent (0-100)
    fn set_volume(&mut self, percent: u8) -> Result<()>;
}

/// Host power control
pub trait HostControl {
    /// Power off the machine
    fn power_off(&mut self) -> Result<()>;
}
