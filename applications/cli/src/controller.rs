//! Command interpreter
//!
//! `Controller` owns the session state and the collaborators for one run.
//! Each command executes synchronously and completely before the next
//! prompt. Collaborator failures are logged and echoed, and the loop goes
//! on. Only console I/O errors escape `handle_line`.
//!
//! Shutdown (persist state, stop or keep playback, power off) runs exactly
//! once per run: explicitly through [`Controller::shutdown`], or from `Drop`
//! if the controller is abandoned without it.

use crate::command::{Command, Verb, MENU};
use song_core::{HostControl, MixerService, PlayerService};
use song_session::{MuteChange, SessionState, SessionStore};
use song_system::MediaLibrary;
use std::io::{self, Write};

/// External collaborators driven by the controller
#[derive(Debug)]
pub struct Services<P, M, H> {
    pub player: P,
    pub mixer: M,
    pub host: H,
}

/// Interpreter tuning
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    /// Amount `+` and `-` move the volume
    pub volume_step: u8,

    /// Print the command menu before each prompt
    pub show_menu: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            volume_step: 5,
            show_menu: true,
        }
    }
}

/// How the session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitMode {
    /// Empty line, interrupt or fatal error: stop playback
    StopPlayback,

    /// `x`: leave the player running
    LeavePlaying,

    /// `o`: stop playback and power off the host
    PowerOff,
}

/// Result of one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(ExitMode),
}

/// Interactive session over one player, mixer and host
pub struct Controller<P, M, H, W>
where
    P: PlayerService,
    M: MixerService,
    H: HostControl,
    W: Write,
{
    services: Services<P, M, H>,
    library: MediaLibrary,
    store: SessionStore,
    state: SessionState,
    settings: ControllerSettings,
    console: W,
    closed: bool,
}

impl<P, M, H, W> Controller<P, M, H, W>
where
    P: PlayerService,
    M: MixerService,
    H: HostControl,
    W: Write,
{
    /// Restore the session and resume playback
    ///
    /// Reconciles the record with the live player, applies the volume, and
    /// resumes the remembered song (or plays from the top if there is none).
    pub fn start(
        mut services: Services<P, M, H>,
        library: MediaLibrary,
        store: SessionStore,
        settings: ControllerSettings,
        console: W,
    ) -> Self {
        tracing::info!("starting song player");

        let state = store.load_and_reconcile(&mut services.player);
        let mut controller = Self {
            services,
            library,
            store,
            state,
            settings,
            console,
            closed: false,
        };

        if let Err(e) = controller.resume() {
            tracing::error!("an unhandled error occurred: {}", e);
        }

        controller
    }

    fn resume(&mut self) -> io::Result<()> {
        let volume = self.state.current_volume();
        self.say(format_args!("volume = [{}]", volume))?;
        self.apply_volume()?;

        if self.state.current_song().is_empty() {
            let result = self.services.player.play(None);
            self.report("play", result)
        } else {
            let song = self.state.current_song().to_string();
            let result = self.services.player.search_and_play(&song);
            self.report("resume", result)
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn services(&self) -> &Services<P, M, H> {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut Services<P, M, H> {
        &mut self.services
    }

    pub fn console(&self) -> &W {
        &self.console
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Print the menu (if enabled) and the `>` prompt
    pub fn prompt(&mut self) -> io::Result<()> {
        if self.settings.show_menu {
            writeln!(self.console, " ")?;
            writeln!(self.console, "{}", MENU)?;
        }
        write!(self.console, ">")?;
        self.console.flush()
    }

    /// Tokenize and execute one input line
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        match Command::parse(line) {
            Ok(command) => self.execute(&command),
            Err(unrecognized) => {
                self.say(format_args!("{}", unrecognized))?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute one command
    pub fn execute(&mut self, command: &Command) -> io::Result<Flow> {
        let argument = command.argument.as_deref();

        match command.verb {
            Verb::Play => match argument {
                Some(position) => {
                    self.say(format_args!("play song number {}", position))?;
                    let result = self.services.player.play(Some(position));
                    self.report("play", result)?;
                }
                None => {
                    self.say(format_args!("play"))?;
                    let result = self.services.player.play(None);
                    self.report("play", result)?;
                }
            },
            Verb::Pause => {
                self.say(format_args!("pause"))?;
                let result = self.services.player.stop();
                self.report("pause", result)?;
            }
            Verb::Previous => {
                self.say(format_args!("previous"))?;
                let result = self.services.player.previous();
                self.report("previous", result)?;
            }
            Verb::Next => {
                self.say(format_args!("next"))?;
                let result = self.services.player.next();
                self.report("next", result)?;
            }
            Verb::ToggleMute => {
                match self.state.toggle_mute() {
                    MuteChange::Muted => self.say(format_args!("mute"))?,
                    MuteChange::Unmuted => self.say(format_args!("unmute"))?,
                }
                self.apply_volume()?;
            }
            Verb::VolumeUp => {
                self.say(format_args!("volume up"))?;
                self.state.volume_up(self.settings.volume_step);
                self.apply_volume()?;
            }
            Verb::VolumeDown => {
                self.say(format_args!("volume down"))?;
                self.state.volume_down(self.settings.volume_step);
                self.apply_volume()?;
            }
            Verb::AddTrack => match argument {
                Some(name) => self.add_track(name)?,
                None => self.say(format_args!("a requires a file name"))?,
            },
            Verb::DeleteTrack => match argument {
                Some(position) => {
                    self.say(format_args!("delete song number {}", position))?;
                    let result = self.services.player.delete_track(position);
                    self.report("delete", result)?;
                }
                None => {
                    self.say(format_args!("delete current song"))?;
                    let result = self.services.player.delete_track("0");
                    self.report("delete", result)?;
                }
            },
            Verb::ShowPlaylist => {
                let playlist = self.state.current_playlist().to_string();
                self.say(format_args!("Current playlist = {}", playlist))?;
            }
            Verb::ClearPlaylist => self.clear_playlist()?,
            Verb::FindAndPlay => match argument {
                Some(title) => {
                    self.say(format_args!("find and play"))?;
                    let result = self.services.player.search_and_play(title);
                    self.report("find and play", result)?;
                }
                None => self.say(format_args!("f requires a string"))?,
            },
            Verb::InitPlaylist => {
                let name = argument
                    .unwrap_or(&self.store.defaults().playlist)
                    .to_string();
                self.rebuild_playlist(&name)?;
            }
            Verb::LoadPlaylist => match argument {
                Some(name) => self.load_playlist(name)?,
                None => self.say(format_args!("L requires a playlist name"))?,
            },
            Verb::ListPlaylists => {
                let result = self.services.player.list_playlists();
                match result {
                    Ok(names) => {
                        for name in names {
                            self.say(format_args!("{}", name))?;
                        }
                    }
                    Err(e) => self.report("list playlists", Err(e))?,
                }
            }
            Verb::RemovePlaylist => {
                let name = argument
                    .unwrap_or(self.state.current_playlist())
                    .to_string();
                self.remove_playlist(&name)?;
            }
            Verb::ListTracks => self.list_tracks(argument)?,
            Verb::SavePlaylist => match argument {
                Some(name) => {
                    self.say(format_args!("save playlist as {}", name))?;
                    let result = self.services.player.save_playlist(name);
                    self.report("save playlist", result)?;
                }
                None => {
                    self.say(format_args!("save current playlist"))?;
                    let name = self.state.current_playlist().to_string();
                    let result = self.services.player.save_playlist(&name);
                    self.report("save playlist", result)?;
                }
            },
            Verb::Exit => return Ok(Flow::Exit(ExitMode::LeavePlaying)),
            Verb::PowerOff => return Ok(Flow::Exit(ExitMode::PowerOff)),
            Verb::Quit => return Ok(Flow::Exit(ExitMode::StopPlayback)),
        }

        Ok(Flow::Continue)
    }

    /// End the session
    ///
    /// Persists the state, then stops playback unless `exit` is
    /// `LeavePlaying`, and powers the host off for `PowerOff`. Calling it
    /// again is a no-op.
    pub fn shutdown(&mut self, exit: ExitMode) {
        if self.closed {
            return;
        }
        self.closed = true;

        tracing::info!("song player terminated");

        if let Err(e) = self
            .store
            .persist(&mut self.state, &mut self.services.player)
        {
            tracing::error!(
                "failed to write session record {}: {}",
                self.store.path().display(),
                e
            );
        }

        match exit {
            ExitMode::LeavePlaying => {
                tracing::info!("... song still playing");
            }
            ExitMode::PowerOff => {
                self.stop_playback();
                tracing::info!("... shutting down host");
                if let Err(e) = self.services.host.power_off() {
                    tracing::error!("power off failed: {}", e);
                }
            }
            ExitMode::StopPlayback => self.stop_playback(),
        }
    }

    fn stop_playback(&mut self) {
        if let Err(e) = self.services.player.stop() {
            tracing::warn!("stop failed: {}", e);
        }
    }

    fn say(&mut self, message: std::fmt::Arguments<'_>) -> io::Result<()> {
        writeln!(self.console, "{}", message)
    }

    /// Log and echo a collaborator failure; success is silent
    fn report(&mut self, action: &str, result: song_core::Result<()>) -> io::Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!("{} failed: {}", action, e);
                self.say(format_args!("{} failed: {}", action, e))
            }
        }
    }

    fn apply_volume(&mut self) -> io::Result<()> {
        let result = self
            .services
            .mixer
            .set_volume(self.state.current_volume());
        self.report("volume", result)
    }

    fn add_track(&mut self, name: &str) -> io::Result<()> {
        self.say(format_args!("add song {}", name))?;

        let result = self
            .library
            .resolve(name)
            .map(|path| MediaLibrary::uri(&path))
            .and_then(|uri| self.services.player.add_track(&uri));

        if let Err(e) = result {
            tracing::warn!("add failed for {}: {}", name, e);
            self.say(format_args!("Add failed for: {}", name))?;
        }
        Ok(())
    }

    fn clear_playlist(&mut self) -> io::Result<()> {
        if self
            .store
            .defaults()
            .is_default_playlist(self.state.current_playlist())
        {
            return self.say(format_args!(
                "Cannot delete all songs from default playlist"
            ));
        }

        let result = self.services.player.stop();
        self.report("stop", result)?;
        let result = self.services.player.clear_playlist();
        self.report("clear", result)
    }

    /// Rebuild playlist `name` from every media file and make it active
    fn rebuild_playlist(&mut self, name: &str) -> io::Result<()> {
        let files = match self.library.scan() {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("initialize playlist {} failed: {}", name, e);
                return self.say(format_args!("Initialize failed: {}", e));
            }
        };

        self.say(format_args!(
            "Loading songs takes a few minutes. Please wait for > prompt"
        ))?;

        let result = self.services.player.clear_playlist();
        self.report("clear", result)?;

        let mut inserted = 0usize;
        for file in &files {
            match self.services.player.insert_track(&MediaLibrary::uri(file)) {
                Ok(()) => inserted += 1,
                Err(e) => tracing::warn!("insert {} failed: {}", file.display(), e),
            }
        }

        let result = self.services.player.save_playlist(name);
        self.report("save playlist", result)?;

        self.state.set_current_playlist(name);
        tracing::info!("playlist {} initialized with {} songs", name, inserted);
        self.say(format_args!("{} songs added to playlist {}", inserted, name))
    }

    /// Replace the queue with saved playlist `name` and make it active
    fn load_playlist(&mut self, name: &str) -> io::Result<()> {
        self.say(format_args!("load playlist {}", name))?;

        let result = self.services.player.clear_playlist();
        self.report("clear", result)?;

        match self.services.player.load_playlist(name) {
            Ok(()) => {
                self.state.set_current_playlist(name);
                Ok(())
            }
            Err(e) => self.report("load playlist", Err(e)),
        }
    }

    fn remove_playlist(&mut self, name: &str) -> io::Result<()> {
        let default_playlist = self.store.defaults().playlist.clone();
        if name == default_playlist {
            return self.say(format_args!(
                "Cannot remove default playlist: {}",
                default_playlist
            ));
        }

        self.say(format_args!("Stopping ..."))?;
        let result = self.services.player.stop();
        self.report("stop", result)?;

        self.say(format_args!("Remove playlist {}", name))?;
        let result = self.services.player.remove_playlist(name);
        self.report("remove playlist", result)?;

        let result = self.services.player.clear_playlist();
        self.report("clear", result)?;

        self.rebuild_playlist(&default_playlist)
    }

    fn list_tracks(&mut self, filter: Option<&str>) -> io::Result<()> {
        match filter {
            Some(_) => self.say(format_args!(
                "find and list songs matching a string (case sensitive)"
            ))?,
            None => self.say(format_args!("list all songs in playlist"))?,
        }

        let entries = match self.services.player.list_current_playlist() {
            Ok(entries) => entries,
            Err(e) => return self.report("list songs", Err(e)),
        };

        for (index, entry) in entries.iter().enumerate() {
            if let Some(f) = filter {
                if !entry.contains(f) {
                    continue;
                }
            }
            self.say(format_args!("{}:{}", index + 1, entry))?;
        }
        Ok(())
    }
}

impl<P, M, H, W> Drop for Controller<P, M, H, W>
where
    P: PlayerService,
    M: MixerService,
    H: HostControl,
    W: Write,
{
    fn drop(&mut self) {
        if !self.closed {
            tracing::error!("session ended without shutdown");
            self.shutdown(ExitMode::StopPlayback);
        }
    }
}
