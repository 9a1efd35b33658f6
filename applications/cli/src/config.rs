/// Player configuration
use crate::controller::ControllerSettings;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use song_session::{SessionDefaults, DEFAULT_PLAYLIST, DEFAULT_VOLUME};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "song-player.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerConfig {
    #[serde(default = "default_paths")]
    pub paths: PathSettings,

    #[serde(default = "default_session")]
    pub session: SessionSettings,

    #[serde(default = "default_library")]
    pub library: LibrarySettings,

    #[serde(default = "default_system")]
    pub system: SystemSettings,

    #[serde(default = "default_console")]
    pub console: ConsoleSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathSettings {
    /// Durable 3-line session record
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Media root the default playlist is built from
    #[serde(default = "default_music_dir")]
    pub music_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionSettings {
    #[serde(default = "default_volume")]
    pub default_volume: u8,

    #[serde(default = "default_playlist")]
    pub default_playlist: String,

    /// Amount `+` and `-` move the volume
    #[serde(default = "default_volume_step")]
    pub volume_step: u8,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibrarySettings {
    #[serde(default = "default_extension")]
    pub extension: String,

    /// 1 lists the music directory itself only
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SystemSettings {
    #[serde(default = "default_mpc")]
    pub mpc: PathBuf,

    #[serde(default = "default_amixer")]
    pub amixer: PathBuf,

    #[serde(default = "default_mixer_control")]
    pub mixer_control: String,

    #[serde(default = "default_shutdown_command")]
    pub shutdown_command: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleSettings {
    /// Print the command menu before every prompt
    #[serde(default = "default_show_menu")]
    pub show_menu: bool,
}

impl PlayerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `song-player.toml` in the
    /// working directory is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables, e.g. SONG_PLAYER_SESSION__VOLUME_STEP
        settings = settings.add_source(
            config::Environment::with_prefix("SONG_PLAYER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.session.default_volume > 100 {
            return Err(AppError::Config(format!(
                "default_volume must be 0-100, got {}",
                self.session.default_volume
            )));
        }

        if self.session.volume_step == 0 || self.session.volume_step > 100 {
            return Err(AppError::Config(format!(
                "volume_step must be 1-100, got {}",
                self.session.volume_step
            )));
        }

        if self.session.default_playlist.trim().is_empty() {
            return Err(AppError::Config(
                "default_playlist must not be empty".to_string(),
            ));
        }

        if self.library.extension.trim_start_matches('.').is_empty() {
            return Err(AppError::Config(
                "library extension must not be empty".to_string(),
            ));
        }

        if self.library.max_depth == 0 {
            return Err(AppError::Config("max_depth must be at least 1".to_string()));
        }

        if self.system.shutdown_command.is_empty() {
            return Err(AppError::Config(
                "shutdown_command must name a program".to_string(),
            ));
        }

        Ok(())
    }

    pub fn session_defaults(&self) -> SessionDefaults {
        SessionDefaults::new(
            self.session.default_volume,
            self.session.default_playlist.clone(),
        )
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            volume_step: self.session.volume_step,
            show_menu: self.console.show_menu,
        }
    }
}

// Default values
fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_paths() -> PathSettings {
    PathSettings {
        state_file: default_state_file(),
        log_file: default_log_file(),
        music_dir: default_music_dir(),
    }
}

fn default_state_file() -> PathBuf {
    home_dir().join("radio").join("songPlayer.conf")
}

fn default_log_file() -> PathBuf {
    home_dir().join("radio").join("songPlayer.log")
}

fn default_music_dir() -> PathBuf {
    home_dir().join("Music")
}

fn default_session() -> SessionSettings {
    SessionSettings {
        default_volume: default_volume(),
        default_playlist: default_playlist(),
        volume_step: default_volume_step(),
    }
}

fn default_volume() -> u8 {
    DEFAULT_VOLUME
}

fn default_playlist() -> String {
    DEFAULT_PLAYLIST.to_string()
}

fn default_volume_step() -> u8 {
    5
}

fn default_library() -> LibrarySettings {
    LibrarySettings {
        extension: default_extension(),
        max_depth: default_max_depth(),
    }
}

fn default_extension() -> String {
    "m4a".to_string()
}

fn default_max_depth() -> usize {
    1
}

fn default_system() -> SystemSettings {
    SystemSettings {
        mpc: default_mpc(),
        amixer: default_amixer(),
        mixer_control: default_mixer_control(),
        shutdown_command: default_shutdown_command(),
    }
}

fn default_mpc() -> PathBuf {
    PathBuf::from("mpc")
}

fn default_amixer() -> PathBuf {
    PathBuf::from("amixer")
}

fn default_mixer_control() -> String {
    "Digital".to_string()
}

fn default_shutdown_command() -> Vec<String> {
    ["sudo", "shutdown", "-h", "0"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_console() -> ConsoleSettings {
    ConsoleSettings {
        show_menu: default_show_menu(),
    }
}

fn default_show_menu() -> bool {
    true
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            session: default_session(),
            library: default_library(),
            system: default_system(),
            console: default_console(),
        }
    }
}
