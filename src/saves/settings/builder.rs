//! Builder for constructing Settings.

use super::{
    ConfigFile, Platform, Settings,
    file::CONFIG_FILE_NAME,
};
use crate::saves::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Values set here win over the config file, which wins over platform
/// defaults derived from the OS local data directory.
///
/// # Examples
///
/// ```no_run
/// use deltasaver::saves::SettingsBuilder;
///
/// # fn example() -> deltasaver::saves::Result<()> {
/// // Platform defaults, with a custom library location
/// let settings = SettingsBuilder::new()
///     .backup_directory("D:/Backups/DELTASAVER")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    game_directory: Option<PathBuf>,
    backup_directory: Option<PathBuf>,
    config_file: Option<PathBuf>,
    data_local_dir: Option<PathBuf>,
    platform: Option<Platform>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the game save directory.
    ///
    /// Default: platform location under the local data directory
    pub fn game_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.game_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the backup library directory.
    ///
    /// Default: `<local data dir>/DELTASAVER`
    pub fn backup_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.backup_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Reads overrides from this config file. The file must exist.
    ///
    /// Default: `deltasaver.toml` in the backup directory set on this
    /// builder, else in `<local data dir>/DELTASAVER`; the first that exists
    pub fn config_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the OS local data directory used for defaults.
    pub fn data_local_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_local_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides host platform detection.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Resolves all locations.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] / [`Error::Fs`] if a config file cannot be read
    /// - [`Error::NoDataDirectory`] if a default is needed and the OS has no
    ///   local data directory
    /// - [`Error::UnsupportedPlatform`] if the game directory is needed and
    ///   the platform has no known location
    /// - [`Error::SameDirectory`] if both locations are the same path
    pub fn build(self) -> Result<Settings> {
        let platform = self.platform.unwrap_or_else(Platform::current);
        let data_local_dir = self.data_local_dir.or_else(dirs::data_local_dir);

        let (config, config_file) = match self.config_file {
            Some(path) => (ConfigFile::load(&path)?, Some(path)),
            None => {
                // the library chosen here first, then the platform default one
                let found = self
                    .backup_directory
                    .iter()
                    .cloned()
                    .chain(data_local_dir.as_deref().map(|d| platform.backup_directory(d)))
                    .map(|library| library.join(CONFIG_FILE_NAME))
                    .find(|path| path.is_file());
                match found {
                    Some(path) => (ConfigFile::load(&path)?, Some(path)),
                    None => {
                        log::trace!("No {CONFIG_FILE_NAME} in the backup library");
                        (ConfigFile::default(), None)
                    }
                }
            }
        };

        let backup_directory = match self.backup_directory.or(config.backup_directory) {
            Some(dir) => dir,
            None => {
                let data = data_local_dir.as_deref().ok_or(Error::NoDataDirectory)?;
                platform.backup_directory(data)
            }
        };

        let game_directory = match self.game_directory.or(config.game_directory) {
            Some(dir) => dir,
            None => {
                let data = data_local_dir.as_deref().ok_or(Error::NoDataDirectory)?;
                platform
                    .game_directory(data)
                    .ok_or(Error::UnsupportedPlatform)?
            }
        };

        if game_directory == backup_directory {
            return Err(Error::SameDirectory(game_directory));
        }

        log::debug!(
            "Resolved game directory {} and backup directory {} ({:?})",
            game_directory.display(),
            backup_directory.display(),
            platform
        );

        Ok(Settings::new(game_directory, backup_directory, config_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_defaults_from_data_dir() {
        let data = tempfile::tempdir().unwrap();
        let settings = SettingsBuilder::new()
            .data_local_dir(data.path())
            .platform(Platform::MacOs)
            .build()
            .unwrap();

        assert_eq!(
            settings.game_directory(),
            data.path().join("com.tobyfox.deltarune")
        );
        assert_eq!(settings.backup_directory(), data.path().join("DELTASAVER"));
        assert_eq!(settings.config_file(), None);
    }

    #[test]
    fn unsupported_platform_needs_explicit_game_dir() {
        let data = tempfile::tempdir().unwrap();
        let err = SettingsBuilder::new()
            .data_local_dir(data.path())
            .platform(Platform::Other)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedPlatform));

        let settings = SettingsBuilder::new()
            .data_local_dir(data.path())
            .platform(Platform::Other)
            .game_directory(data.path().join("saves"))
            .build()
            .unwrap();
        assert_eq!(settings.game_directory(), data.path().join("saves"));
    }

    #[test]
    fn default_config_file_is_read_from_library() {
        let data = tempfile::tempdir().unwrap();
        let library = data.path().join("DELTASAVER");
        std::fs::create_dir_all(&library).unwrap();
        let config_path = library.join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "game_directory = \"/custom/game\"\n").unwrap();

        let settings = SettingsBuilder::new()
            .data_local_dir(data.path())
            .platform(Platform::Other)
            .build()
            .unwrap();

        assert_eq!(settings.game_directory(), Path::new("/custom/game"));
        assert_eq!(settings.backup_directory(), library);
        assert_eq!(settings.config_file(), Some(config_path.as_path()));
    }

    #[test]
    fn config_file_is_read_from_chosen_library() {
        let data = tempfile::tempdir().unwrap();
        let library = data.path().join("elsewhere");
        std::fs::create_dir_all(&library).unwrap();
        let config_path = library.join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "game_directory = \"/from/library\"\n").unwrap();

        // a config in the default library is shadowed by the chosen one
        let default_library = data.path().join("DELTASAVER");
        std::fs::create_dir_all(&default_library).unwrap();
        std::fs::write(
            default_library.join(CONFIG_FILE_NAME),
            "game_directory = \"/from/default\"\n",
        )
        .unwrap();

        let settings = SettingsBuilder::new()
            .data_local_dir(data.path())
            .platform(Platform::Other)
            .backup_directory(&library)
            .build()
            .unwrap();

        assert_eq!(settings.game_directory(), Path::new("/from/library"));
        assert_eq!(settings.backup_directory(), library);
        assert_eq!(settings.config_file(), Some(config_path.as_path()));
    }

    #[test]
    fn default_library_config_applies_when_chosen_library_has_none() {
        let data = tempfile::tempdir().unwrap();
        let default_library = data.path().join("DELTASAVER");
        std::fs::create_dir_all(&default_library).unwrap();
        std::fs::write(
            default_library.join(CONFIG_FILE_NAME),
            "game_directory = \"/from/default\"\n",
        )
        .unwrap();

        let settings = SettingsBuilder::new()
            .data_local_dir(data.path())
            .platform(Platform::Other)
            .backup_directory(data.path().join("empty-library"))
            .build()
            .unwrap();

        assert_eq!(settings.game_directory(), Path::new("/from/default"));
    }

    #[test]
    fn explicit_values_beat_config_file() {
        let data = tempfile::tempdir().unwrap();
        let config_path = data.path().join("custom.toml");
        std::fs::write(
            &config_path,
            "game_directory = \"/from/config\"\nbackup_directory = \"/from/config/backups\"\n",
        )
        .unwrap();

        let settings = SettingsBuilder::new()
            .data_local_dir(data.path())
            .config_file(&config_path)
            .game_directory("/from/flag")
            .build()
            .unwrap();

        assert_eq!(settings.game_directory(), Path::new("/from/flag"));
        assert_eq!(settings.backup_directory(), Path::new("/from/config/backups"));
    }

    #[test]
    fn same_directories_are_rejected() {
        let err = SettingsBuilder::new()
            .game_directory("/saves")
            .backup_directory("/saves")
            .data_local_dir("/nonexistent-data-dir")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::SameDirectory(_)));
    }
}
