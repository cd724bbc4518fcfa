//! Core Settings struct.

use std::path::{Path, PathBuf};

/// Resolved locations for a [`SaveLibrary`](crate::saves::SaveLibrary).
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder), which
/// applies explicit values, the config file and platform defaults in that
/// order.
///
/// # Examples
///
/// ```no_run
/// use deltasaver::saves::SettingsBuilder;
///
/// # fn example() -> deltasaver::saves::Result<()> {
/// let settings = SettingsBuilder::new()
///     .game_directory("/games/deltarune")
///     .backup_directory("/backups/deltasaver")
///     .build()?;
/// assert_eq!(settings.game_directory().to_str(), Some("/games/deltarune"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Directory the game reads `filech*` saves from.
    game_directory: PathBuf,

    /// Directory holding backups.
    backup_directory: PathBuf,

    /// Config file that contributed values, if one was read.
    config_file: Option<PathBuf>,
}

impl Settings {
    /// Returns the game save directory.
    pub fn game_directory(&self) -> &Path {
        &self.game_directory
    }

    /// Returns the backup library directory.
    pub fn backup_directory(&self) -> &Path {
        &self.backup_directory
    }

    /// Returns the config file that was read, if any.
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        game_directory: PathBuf,
        backup_directory: PathBuf,
        config_file: Option<PathBuf>,
    ) -> Self {
        Self {
            game_directory,
            backup_directory,
            config_file,
        }
    }
}
