//! `deltasaver restore` and `deltasaver delete`: act on a selected backup.

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::saves::{SaveLibrary, SlotId};

/// Restores the backup matching `selector`, optionally into another slot
/// (one-based) of the same chapter.
pub async fn restore(
    library: &SaveLibrary,
    selector: &str,
    slot: Option<u8>,
    config: &RuntimeConfig,
) -> Result<i32> {
    let backup = library.find_backup(selector).await?;
    let target = slot
        .map(|slot| SlotId::from_display(backup.id.chapter, slot))
        .transpose()?;

    config.progress(&format!(
        "Restoring {} to {}",
        backup.display_name(),
        target.unwrap_or(backup.id)
    ))?;

    let written = library.restore(&backup, target).await?;
    config.success(&format!("Restored {}", written.display()))?;
    Ok(0)
}

/// Deletes the backup matching `selector`.
pub async fn delete(library: &SaveLibrary, selector: &str, config: &RuntimeConfig) -> Result<i32> {
    let backup = library.find_backup(selector).await?;
    library.delete(&backup).await?;
    config.success(&format!("Deleted {}", backup.display_name()))?;
    config.verbose_println(&format!("  {}", backup.path.display()))?;
    Ok(0)
}
