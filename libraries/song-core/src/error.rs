/// Core error types for Song Player
use thiserror::Error;

/// Result type alias using `SongError`
pub type Result<T> = std::result::Result<T, SongError>;

/// Core error type for Song Player
#[derive(Error, Debug)]
pub enum SongError {
    /// The playback daemon rejected a request or could not be reached
    #[error("Player error: {0}")]
    Player(String),

    /// The hardware mixer rejected a volume change
    #[error("Mixer error: {0}")]
    Mixer(String),

    /// Host power control failed
    #[error("Host error: {0}")]
    Host(String),

    /// Media root enumeration or path resolution failed
    #[error("Library error: {0}")]
    Library(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SongError {
    /// Create a player error
    pub fn player(msg: impl Into<String>) -> Self {
        Self::Player(msg.into())
    }

    /// Create a mixer error
    pub fn mixer(msg: impl Into<String>) -> Self {
        Self::Mixer(msg.into())
    }

    /// Create a host error
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    /// Create a library error
    pub fn library(msg: impl Into<String>) -> Self {
        Self::Library(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
