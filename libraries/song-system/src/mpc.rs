//! mpd control through the `mpc` client

use crate::process;
use song_core::{PlayerService, Result, SongError};
use std::path::PathBuf;

/// `PlayerService` backed by the `mpc` command-line client
#[derive(Debug, Clone)]
pub struct MpcPlayer {
    program: PathBuf,
}

impl MpcPlayer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        process::run(&self.program, args).map_err(SongError::Player)
    }

    fn call(&self, args: &[&str]) -> Result<()> {
        self.run(args).map(|_| ())
    }

    fn lines(&self, args: &[&str]) -> Result<Vec<String>> {
        Ok(self
            .run(args)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}

impl PlayerService for MpcPlayer {
    fn play(&mut self, position: Option<&str>) -> Result<()> {
        match position {
            Some(position) => self.call(&["play", position]),
            None => self.call(&["play"]),
        }
    }

    fn stop(&mut self) -> Result<()> {
        self.call(&["stop"])
    }

    fn next(&mut self) -> Result<()> {
        self.call(&["next"])
    }

    fn previous(&mut self) -> Result<()> {
        self.call(&["prev"])
    }

    fn search_and_play(&mut self, title: &str) -> Result<()> {
        self.call(&["searchplay", "title", title])
    }

    fn current_track(&mut self) -> Result<String> {
        // mpc prints nothing at all when stopped
        Ok(self.run(&["current"])?.trim_end().to_string())
    }

    fn add_track(&mut self, uri: &str) -> Result<()> {
        self.call(&["add", uri])
    }

    fn insert_track(&mut self, uri: &str) -> Result<()> {
        self.call(&["insert", uri])
    }

    fn delete_track(&mut self, position: &str) -> Result<()> {
        self.call(&["del", position])
    }

    fn clear_playlist(&mut self) -> Result<()> {
        self.call(&["clear"])
    }

    fn list_playlists(&mut self) -> Result<Vec<String>> {
        self.lines(&["lsplaylists"])
    }

    fn save_playlist(&mut self, name: &str) -> Result<()> {
        self.call(&["save", name])
    }

    fn load_playlist(&mut self, name: &str) -> Result<()> {
        self.call(&["load", name])
    }

    fn remove_playlist(&mut self, name: &str) -> Result<()> {
        self.call(&["rm", name])
    }

    fn list_current_playlist(&mut self) -> Result<Vec<String>> {
        self.lines(&["playlist"])
    }
}
