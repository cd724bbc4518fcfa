//! Error types for save library operations.

use super::slot::{BUILTIN_SLOT_MAX_INDEX, CHAPTER_COUNT, Chapter, SlotId};
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for save library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while locating, reading or writing saves.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// IO error with the operation and path that failed
    #[error("{context} {}: {source}", .path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Chapter or slot outside the ranges the game uses
    #[error(
        "invalid slot: chapter {chapter}, slot {slot} (chapters 1-{}, slots 1-{})",
        CHAPTER_COUNT,
        BUILTIN_SLOT_MAX_INDEX + 1
    )]
    InvalidSlot {
        /// Requested chapter
        chapter: Chapter,
        /// Requested slot, one-based as users see it
        slot: u16,
    },

    /// The game has no save in the requested slot
    #[error("no game save for {0}")]
    SaveNotFound(SlotId),

    /// No backup matched a selector
    #[error("no backup matches '{selector}'")]
    BackupNotFound {
        /// File name or hash prefix given by the user
        selector: String,
    },

    /// More than one backup matched a selector
    #[error("'{selector}' matches {} backups: {}", .candidates.len(), .candidates.join(", "))]
    AmbiguousSelector {
        /// File name or hash prefix given by the user
        selector: String,
        /// File names of all matching backups
        candidates: Vec<String>,
    },

    /// A backup was restored into a slot of another chapter
    #[error("backup belongs to chapter {backup}, refusing to restore into chapter {target}")]
    ChapterMismatch {
        /// Chapter recorded in the backup name
        backup: Chapter,
        /// Chapter of the requested target slot
        target: Chapter,
    },

    /// Backup content no longer matches the hash in its name
    #[error("checksum mismatch for {}: expected {expected}, found {actual}", .path.display())]
    ChecksumMismatch {
        /// Backup file
        path: PathBuf,
        /// Hash recorded in the file name
        expected: String,
        /// Hash of the current content
        actual: String,
    },

    /// The game save directory does not exist
    #[error("game save directory {} does not exist; has DELTARUNE been run yet?", .0.display())]
    GameDirectoryMissing(PathBuf),

    /// A path outside the backup library was passed where a backup is required
    #[error("{} is not inside the backup library", .0.display())]
    OutsideLibrary(PathBuf),

    /// No known game directory for this operating system
    #[error("DELTARUNE saves have no known location on this platform; pass --game-dir")]
    UnsupportedPlatform,

    /// The OS reports no local data directory
    #[error("no local data directory found; pass --game-dir and --backup-dir")]
    NoDataDirectory,

    /// Game and backup directories resolve to the same path
    #[error("game and backup directories must differ (both are {})", .0.display())]
    SameDirectory(PathBuf),

    /// Config file could not be parsed
    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// Parse error
        #[source]
        source: toml::de::Error,
    },

    /// Anything else
    #[error("{0}")]
    GenericError(String),
}

/// Attaches operation and path context to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`] describing `context` on `path`.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Returns early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::saves::Error::GenericError(format!($($arg)*)))
    };
}
