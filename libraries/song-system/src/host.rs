//! Host power control

use crate::process;
use song_core::{HostControl, Result, SongError};
use std::path::Path;

/// Powers the host off by running a configured command
#[derive(Debug, Clone)]
pub struct SystemHost {
    command: Vec<String>,
}

impl SystemHost {
    /// `command` is the program followed by its arguments,
    /// e.g. `["sudo", "shutdown", "-h", "0"]`
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl HostControl for SystemHost {
    fn power_off(&mut self) -> Result<()> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| SongError::host("no shutdown command configured"))?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        process::run(Path::new(program), &args)
            .map(|_| ())
            .map_err(SongError::Host)
    }
}
