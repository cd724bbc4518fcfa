//! Top-level error types for the deltasaver binary.
//!
//! Library failures arrive as [`saves::Error`](crate::saves::Error); argument
//! problems are [`CliError`]s.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, DeltasaverError>;

/// Main error type for all deltasaver operations
#[derive(Error, Debug)]
pub enum DeltasaverError {
    /// CLI argument errors
    #[error("{0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Save library errors
    #[error("{0}")]
    Saves(#[from] crate::saves::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl DeltasaverError {
    /// Hint printed under the error message, if there is one worth giving.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        use crate::saves::Error as SaveError;

        match self {
            Self::Saves(SaveError::BackupNotFound { .. }) => {
                Some("Run `deltasaver list` to see backup file names and hashes")
            }
            Self::Saves(SaveError::AmbiguousSelector { .. }) => {
                Some("Use more hash characters or the full backup file name")
            }
            Self::Saves(SaveError::UnsupportedPlatform | SaveError::NoDataDirectory) => {
                Some("Set DELTASAVER_GAME_DIR or pass --game-dir")
            }
            Self::Saves(SaveError::ChecksumMismatch { .. }) => {
                Some("The backup was modified after it was taken; delete it or restore another")
            }
            _ => None,
        }
    }
}
