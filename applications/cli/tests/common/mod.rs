//! Shared fakes and fixtures for controller tests
#![allow(dead_code)]

use song_core::{HostControl, MixerService, PlayerService, Result, SongError};
use song_player::{Controller, ControllerSettings, Services};
use song_session::{SessionDefaults, SessionStore};
use song_system::MediaLibrary;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// Player fake that records every call as `"<method> [args]"`
///
/// `current_track` is answered from `current` and not recorded.
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    pub calls: Vec<String>,
    pub current: String,
    pub queue: Vec<String>,
    pub playlists: Vec<String>,
    /// Method names that fail
    pub fail_on: Vec<&'static str>,
    pub current_fails: bool,
}

impl RecordingPlayer {
    pub fn playing(line: &str) -> Self {
        Self {
            current: line.to_string(),
            ..Self::default()
        }
    }

    fn call(&mut self, method: &'static str, arg: Option<&str>) -> Result<()> {
        match arg {
            Some(arg) => self.calls.push(format!("{} {}", method, arg)),
            None => self.calls.push(method.to_string()),
        }
        if self.fail_on.contains(&method) {
            return Err(SongError::player(format!("{} refused", method)));
        }
        Ok(())
    }

    pub fn called(&self, call: &str) -> bool {
        self.calls.iter().any(|c| c == call)
    }

    pub fn called_method(&self, method: &str) -> bool {
        self.calls
            .iter()
            .any(|c| c == method || c.starts_with(&format!("{} ", method)))
    }
}

impl PlayerService for RecordingPlayer {
    fn play(&mut self, position: Option<&str>) -> Result<()> {
        self.call("play", position)
    }

    fn stop(&mut self) -> Result<()> {
        self.call("stop", None)
    }

    fn next(&mut self) -> Result<()> {
        self.call("next", None)
    }

    fn previous(&mut self) -> Result<()> {
        self.call("previous", None)
    }

    fn search_and_play(&mut self, title: &str) -> Result<()> {
        self.call("search_and_play", Some(title))
    }

    fn current_track(&mut self) -> Result<String> {
        if self.current_fails {
            return Err(SongError::player("daemon unreachable"));
        }
        Ok(self.current.clone())
    }

    fn add_track(&mut self, uri: &str) -> Result<()> {
        self.call("add_track", Some(uri))
    }

    fn insert_track(&mut self, uri: &str) -> Result<()> {
        self.call("insert_track", Some(uri))
    }

    fn delete_track(&mut self, position: &str) -> Result<()> {
        self.call("delete_track", Some(position))
    }

    fn clear_playlist(&mut self) -> Result<()> {
        self.call("clear_playlist", None)
    }

    fn list_playlists(&mut self) -> Result<Vec<String>> {
        self.call("list_playlists", None)?;
        Ok(self.playlists.clone())
    }

    fn save_playlist(&mut self, name: &str) -> Result<()> {
        self.call("save_playlist", Some(name))
    }

    fn load_playlist(&mut self, name: &str) -> Result<()> {
        self.call("load_playlist", Some(name))
    }

    fn remove_playlist(&mut self, name: &str) -> Result<()> {
        self.call("remove_playlist", Some(name))
    }

    fn list_current_playlist(&mut self) -> Result<Vec<String>> {
        self.call("list_current_playlist", None)?;
        Ok(self.queue.clone())
    }
}

/// Mixer fake remembering every level set
#[derive(Debug, Default)]
pub struct RecordingMixer {
    pub levels: Vec<u8>,
}

impl RecordingMixer {
    pub fn last(&self) -> Option<u8> {
        self.levels.last().copied()
    }
}

impl MixerService for RecordingMixer {
    fn set_volume(&mut self, percent: u8) -> Result<()> {
        self.levels.push(percent);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub powered_off: bool,
}

impl HostControl for RecordingHost {
    fn power_off(&mut self) -> Result<()> {
        self.powered_off = true;
        Ok(())
    }
}

pub type TestController = Controller<RecordingPlayer, RecordingMixer, RecordingHost, Vec<u8>>;

/// Controller over fakes with its record file and media root in a temp dir
///
/// Fields drop in order, so the controller shuts down before the directory
/// goes away.
pub struct Harness {
    pub controller: TestController,
    pub dir: TempDir,
}

impl Harness {
    pub fn builder() -> HarnessBuilder {
        HarnessBuilder::default()
    }

    pub fn state_file(&self) -> PathBuf {
        state_file(&self.dir)
    }

    pub fn record(&self) -> String {
        fs::read_to_string(self.state_file()).unwrap()
    }

    pub fn player(&self) -> &RecordingPlayer {
        &self.controller.services().player
    }

    pub fn mixer(&self) -> &RecordingMixer {
        &self.controller.services().mixer
    }

    pub fn host(&self) -> &RecordingHost {
        &self.controller.services().host
    }

    /// Everything written to the console so far
    pub fn console(&self) -> String {
        String::from_utf8_lossy(self.controller.console()).into_owned()
    }

    pub fn console_lines(&self) -> Vec<String> {
        self.console().lines().map(str::to_string).collect()
    }
}

#[derive(Default)]
pub struct HarnessBuilder {
    player: RecordingPlayer,
    record: Option<String>,
    media: Vec<String>,
}

impl HarnessBuilder {
    pub fn player(mut self, player: RecordingPlayer) -> Self {
        self.player = player;
        self
    }

    /// Session record present on disk at startup
    pub fn record(mut self, text: &str) -> Self {
        self.record = Some(text.to_string());
        self
    }

    /// Files created in the media root
    pub fn media(mut self, names: &[&str]) -> Self {
        self.media = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn start(self) -> Harness {
        let dir = TempDir::new().unwrap();

        let music_dir = dir.path().join("Music");
        fs::create_dir_all(&music_dir).unwrap();
        for name in &self.media {
            fs::write(music_dir.join(name), b"fake audio").unwrap();
        }

        let state_file = state_file(&dir);
        if let Some(record) = &self.record {
            fs::create_dir_all(state_file.parent().unwrap()).unwrap();
            fs::write(&state_file, record).unwrap();
        }

        let services = Services {
            player: self.player,
            mixer: RecordingMixer::default(),
            host: RecordingHost::default(),
        };
        let settings = ControllerSettings {
            volume_step: 5,
            show_menu: false,
        };

        let controller = Controller::start(
            services,
            MediaLibrary::new(&music_dir, "m4a"),
            SessionStore::new(&state_file, SessionDefaults::default()),
            settings,
            Vec::new(),
        );

        Harness { controller, dir }
    }
}

pub fn state_file(dir: &TempDir) -> PathBuf {
    dir.path().join("radio").join("songPlayer.conf")
}

pub fn music_uri(harness: &Harness, name: &str) -> String {
    MediaLibrary::uri(&harness.dir.path().join("Music").join(name))
}

/// In-memory sink for session log lines
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.ends_with(needle))
            .count()
    }

    /// Route log events on this thread here until the guard drops
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = song_player::logging::session_subscriber(
            self.clone(),
            tracing_subscriber::EnvFilter::new("debug"),
        );
        tracing::subscriber::set_default(subscriber)
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
