//! Error types and Result aliases for VoxelDash Console

use std::fmt;
use std::path::PathBuf;

/// Result type alias for VoxelDash Console operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for VoxelDash Console
#[derive(Debug)]
pub enum Error {
    // === CLI errors ===
    /// Invalid command-line option
    InvalidOption {
        option: String,
        reason: String,
    },

    /// Failed to read console input
    InputReadFailed {
        path: PathBuf,
        reason: String,
    },

    // === I/O and serialization errors ===
    /// I/O errors
    Io(std::io::Error),

    /// Serialization errors
    Serde(serde_json::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidOption { option, reason } => {
                write!(f, "Invalid option '{}': {}", option, reason)
            }
            Error::InputReadFailed { path, reason } => {
                write!(f, "Failed to read input from '{}': {}", path.display(), reason)
            }
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
