//! Optional TOML config file.
//!
//! ```toml
//! game_directory = "D:/Games/DELTARUNE saves"
//! backup_directory = "D:/Backups/DELTASAVER"
//! ```
//!
//! Loading is synchronous. It happens once, from
//! [`SettingsBuilder::build`](super::SettingsBuilder::build), before any
//! save is read or written; all save I/O goes through `tokio::fs`.

use crate::saves::error::{Error, ErrorExt, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file name inside the backup library.
pub const CONFIG_FILE_NAME: &str = "deltasaver.toml";

/// Directory overrides read from a config file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Where the game keeps its saves
    pub game_directory: Option<PathBuf>,
    /// Where backups are stored
    pub backup_directory: Option<PathBuf>,
}

impl ConfigFile {
    /// Parses config file text. `path` is only used in error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).fs_context("reading config file", path)?;
        let config = Self::parse(&text, path)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
