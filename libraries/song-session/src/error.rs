//! Error types for the session store

use thiserror::Error;

/// Session store errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Record could not be read or written
    #[error("Session record I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record exists but does not hold song, volume and playlist lines
    #[error("Malformed session record: {0}")]
    Malformed(String),
}

/// Result type for session store operations
pub type Result<T> = std::result::Result<T, SessionError>;
