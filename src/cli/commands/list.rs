//! `deltasaver list`: chapter overview of game saves and backups.

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::saves::{CHAPTER_COUNT, SaveFile, SaveLibrary, Snapshot, SlotId};
use anyhow::Context;
use chrono::{DateTime, Local, Utc};

/// Prints the game saves of every chapter, then the backup library.
pub async fn list(library: &SaveLibrary, json: bool, config: &RuntimeConfig) -> Result<i32> {
    let snapshot = library.scan().await?;

    if json {
        let text = serde_json::to_string_pretty(&snapshot.to_report())
            .context("serializing save snapshot")?;
        config.data(&text)?;
        return Ok(0);
    }

    print_game_saves(&snapshot, config)?;
    config.data("")?;
    print_backups(&snapshot, config)?;
    Ok(0)
}

fn print_game_saves(snapshot: &Snapshot, config: &RuntimeConfig) -> Result<()> {
    config.section("Game Saves")?;

    for id in SlotId::all() {
        if id.slot == 0 {
            config.data(&format!("Chapter {}", id.chapter))?;
        }
        let line = match snapshot.game_save(id) {
            Some(save) => {
                let marker = if snapshot.is_backed_up(id) {
                    "backed up"
                } else {
                    "not backed up"
                };
                format!(
                    "Slot {}  Modified: {}  [{marker}]",
                    id.display_slot(),
                    format_time(save.modified)
                )
            }
            None => format!("Slot {}  Empty", id.display_slot()),
        };
        config.indent(&line)?;
    }

    // chapters past the overview still show up if the game wrote them
    for save in snapshot
        .game_saves
        .values()
        .filter(|s| s.id.chapter > CHAPTER_COUNT)
    {
        config.data(&format!(
            "{}  Modified: {}",
            save.display_name(),
            format_time(save.modified)
        ))?;
    }

    Ok(())
}

fn print_backups(snapshot: &Snapshot, config: &RuntimeConfig) -> Result<()> {
    config.section("Local Saves")?;
    let grouped = snapshot.backups_by_chapter();
    let last_chapter = grouped
        .keys()
        .copied()
        .max()
        .unwrap_or(CHAPTER_COUNT)
        .max(CHAPTER_COUNT);

    for chapter in 1..=last_chapter {
        let Some(slots) = grouped.get(&chapter) else {
            if chapter <= CHAPTER_COUNT {
                config.data(&format!("Chapter {chapter}"))?;
                config.indent("No saves")?;
            }
            continue;
        };

        config.data(&format!("Chapter {chapter}"))?;
        for (slot, backups) in slots {
            config.indent(&format!("Slot {}", slot + 1))?;
            for backup in backups {
                print_backup(backup, config)?;
            }
        }
    }

    Ok(())
}

fn print_backup(backup: &SaveFile, config: &RuntimeConfig) -> Result<()> {
    config.data(&format!(
        "    {}  Modified: {}",
        backup.display_name(),
        format_time(backup.created.or(backup.modified))
    ))?;
    config.verbose_println(&format!("      {}", backup.file_name()))?;
    Ok(())
}

/// Local time for display, `Unknown` when the filesystem had none.
pub(crate) fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| {
        t.with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    })
    .unwrap_or_else(|| "Unknown".to_string())
}
