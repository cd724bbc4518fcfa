//! Command execution functions for save operations.

mod backup;
mod list;
mod restore;

pub use backup::{backup, backup_all};
pub use list::list;
pub use restore::{delete, restore};

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::saves::Settings;

/// Prints the resolved directories and config file.
pub fn paths(settings: &Settings, config: &RuntimeConfig) -> Result<i32> {
    config.data(&format!("game:    {}", settings.game_directory().display()))?;
    config.data(&format!("backups: {}", settings.backup_directory().display()))?;
    let config_file = settings
        .config_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    config.data(&format!("config:  {config_file}"))?;
    Ok(0)
}
