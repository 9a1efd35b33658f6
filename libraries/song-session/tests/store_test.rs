//! Integration tests for the session store
//!
//! Covers reconciliation precedence, all-or-nothing recovery and
//! persistence of the live track at shutdown.

use song_core::{PlayerService, Result, SongError};
use song_session::{SessionDefaults, SessionState, SessionStore};
use std::fs;
use tempfile::TempDir;

// ===== Test Helpers =====

/// Player that only answers the current-track query
struct StubPlayer {
    current: Option<String>,
}

impl StubPlayer {
    fn playing(line: &str) -> Self {
        Self {
            current: Some(line.to_string()),
        }
    }

    fn unreachable() -> Self {
        Self { current: None }
    }
}

impl PlayerService for StubPlayer {
    fn play(&mut self, _position: Option<&str>) -> Result<()> {
        Ok(())
    }
    fn stop(&mut self) -> Result<()> {
        Ok(())
    }
    fn next(&mut self) -> Result<()> {
        Ok(())
    }
    fn previous(&mut self) -> Result<()> {
        Ok(())
    }
    fn search_and_play(&mut self, _title: &str) -> Result<()> {
        Ok(())
    }
    fn current_track(&mut self) -> Result<String> {
        self.current
            .clone()
            .ok_or_else(|| SongError::player("daemon not running"))
    }
    fn add_track(&mut self, _uri: &str) -> Result<()> {
        Ok(())
    }
    fn insert_track(&mut self, _uri: &str) -> Result<()> {
        Ok(())
    }
    fn delete_track(&mut self, _position: &str) -> Result<()> {
        Ok(())
    }
    fn clear_playlist(&mut self) -> Result<()> {
        Ok(())
    }
    fn list_playlists(&mut self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
    fn save_playlist(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }
    fn load_playlist(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }
    fn remove_playlist(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }
    fn list_current_playlist(&mut self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

fn store_with_record(temp: &TempDir, contents: Option<&str>) -> SessionStore {
    let path = temp.path().join("songPlayer.conf");
    if let Some(contents) = contents {
        fs::write(&path, contents).unwrap();
    }
    SessionStore::new(path, SessionDefaults::default())
}

// ===== Load and reconcile =====

#[test]
fn live_song_wins_over_record() {
    let temp = TempDir::new().unwrap();
    let store = store_with_record(&temp, Some("Y - Bar\n40\nroad_trip\n"));

    let state = store.load_and_reconcile(&mut StubPlayer::playing("X - Foo\n"));

    assert_eq!(state.current_song(), "Foo");
    assert_eq!(state.current_volume(), 40);
    assert_eq!(state.current_playlist(), "road_trip");
}

#[test]
fn record_song_used_when_nothing_is_playing() {
    let temp = TempDir::new().unwrap();
    let store = store_with_record(&temp, Some("Y - Bar\n40\nroad_trip\n"));

    let state = store.load_and_reconcile(&mut StubPlayer::playing(""));

    assert_eq!(state.current_song(), "Bar");
}

#[test]
fn unreachable_player_falls_back_to_record() {
    let temp = TempDir::new().unwrap();
    let store = store_with_record(&temp, Some("Bar\n40\nroad_trip\n"));

    let state = store.load_and_reconcile(&mut StubPlayer::unreachable());

    assert_eq!(state.current_song(), "Bar");
    assert_eq!(state.current_volume(), 40);
}

#[test]
fn malformed_volume_resets_everything() {
    let temp = TempDir::new().unwrap();
    let store = store_with_record(&temp, Some("Y - Bar\nloud\nroad_trip\n"));

    // Live song is discarded too: recovery is all-or-nothing
    let state = store.load_and_reconcile(&mut StubPlayer::playing("X - Foo"));

    assert_eq!(state, SessionState::new("", 60, "all_songs"));
}

#[test]
fn missing_record_resets_to_defaults() {
    let temp = TempDir::new().unwrap();
    let store = store_with_record(&temp, None);

    let state = store.load_and_reconcile(&mut StubPlayer::playing(""));

    assert_eq!(state.current_song(), "");
    assert_eq!(state.current_volume(), 60);
    assert_eq!(state.current_playlist(), "all_songs");
}

#[test]
fn custom_defaults_are_used_on_reset() {
    let temp = TempDir::new().unwrap();
    let store = SessionStore::new(
        temp.path().join("missing.conf"),
        SessionDefaults::new(30, "everything"),
    );

    let state = store.load_and_reconcile(&mut StubPlayer::playing(""));

    assert_eq!(state.current_volume(), 30);
    assert_eq!(state.current_playlist(), "everything");
}

// ===== Persist =====

#[test]
fn persist_records_live_track_over_memory() {
    let temp = TempDir::new().unwrap();
    let store = store_with_record(&temp, None);
    let mut state = SessionState::new("Old Song", 70, "road_trip");

    store
        .persist(&mut state, &mut StubPlayer::playing("Artist - Auto Advanced\n"))
        .unwrap();

    assert_eq!(state.current_song(), "Auto Advanced");
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "Auto Advanced\n70\nroad_trip\n"
    );
}

#[test]
fn persist_keeps_memory_song_when_query_fails() {
    let temp = TempDir::new().unwrap();
    let store = store_with_record(&temp, Some("stale\n10\nold\n"));
    let mut state = SessionState::new("Kept", 20, "all_songs");

    store
        .persist(&mut state, &mut StubPlayer::unreachable())
        .unwrap();

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "Kept\n20\nall_songs\n"
    );
}

#[test]
fn persisted_record_restores_on_next_run() {
    let temp = TempDir::new().unwrap();
    let store = store_with_record(&temp, None);
    let mut state = SessionState::new("", 85, "road_trip");

    store
        .persist(&mut state, &mut StubPlayer::playing("A - Encore"))
        .unwrap();
    let restored = store.load_and_reconcile(&mut StubPlayer::playing(""));

    assert_eq!(restored, SessionState::new("Encore", 85, "road_trip"));
}
