//! `deltasaver backup`: copy game slots into the library.

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::saves::{SaveFile, SaveLibrary, SlotId};

/// Backs up one slot (`chapter`, one-based `slot`).
pub async fn backup(
    library: &SaveLibrary,
    chapter: u8,
    slot: u8,
    config: &RuntimeConfig,
) -> Result<i32> {
    let id = SlotId::from_display(chapter, slot)?;
    config.progress(&format!("Backing up {id}"))?;

    let saved = library.backup(id).await?;
    report(&saved, config)?;
    Ok(0)
}

/// Backs up every slot that currently has a game save.
pub async fn backup_all(library: &SaveLibrary, config: &RuntimeConfig) -> Result<i32> {
    config.progress(&format!(
        "Backing up all saves in {}",
        library.game_directory().display()
    ))?;

    let saved = library.backup_all().await?;
    if saved.is_empty() {
        config.warn("No game saves found")?;
        return Ok(0);
    }

    for backup in &saved {
        report(backup, config)?;
    }
    config.success(&format!("Backed up {} saves", saved.len()))?;
    Ok(0)
}

fn report(backup: &SaveFile, config: &RuntimeConfig) -> Result<()> {
    config.success(&format!("Saved {}", backup.display_name()))?;
    config.verbose_println(&format!("  {}", backup.path.display()))?;
    Ok(())
}
