//! ALSA mixer through `amixer`

use crate::process;
use song_core::{MixerService, Result, SongError, MAX_VOLUME};
use std::path::PathBuf;

/// Sets a simple mixer control with `amixer set <control> <n>%`
#[derive(Debug, Clone)]
pub struct AmixerMixer {
    program: PathBuf,
    control: String,
}

impl AmixerMixer {
    pub fn new(program: impl Into<PathBuf>, control: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            control: control.into(),
        }
    }
}

impl MixerService for AmixerMixer {
    fn set_volume(&mut self, percent: u8) -> Result<()> {
        let level = format!("{}%", percent.min(MAX_VOLUME));

        process::run(&self.program, &["set", &self.control, &level])
            .map(|_| ())
            .map_err(SongError::Mixer)
    }
}
