//! Point-in-time view of the game directory and the backup library.

use super::save_file::SaveFile;
use super::slot::{Chapter, Slot, SlotId};
use serde::Serialize;
use std::collections::BTreeMap;

/// Result of [`SaveLibrary::scan`](super::SaveLibrary::scan).
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    /// Game saves keyed by slot
    pub game_saves: BTreeMap<SlotId, SaveFile>,
    /// Backups ordered by chapter, slot, creation time and file name
    pub backups: Vec<SaveFile>,
}

/// Backups grouped by chapter, then slot.
pub type BackupsByChapter<'a> = BTreeMap<Chapter, BTreeMap<Slot, Vec<&'a SaveFile>>>;

impl Snapshot {
    /// The game save in `id`, if any.
    pub fn game_save(&self, id: SlotId) -> Option<&SaveFile> {
        self.game_saves.get(&id)
    }

    /// Backups taken from `id`, oldest first.
    pub fn backups_of(&self, id: SlotId) -> impl Iterator<Item = &SaveFile> {
        self.backups.iter().filter(move |b| b.id == id)
    }

    /// Backups grouped for display.
    pub fn backups_by_chapter(&self) -> BackupsByChapter<'_> {
        let mut grouped: BackupsByChapter<'_> = BTreeMap::new();
        for backup in &self.backups {
            grouped
                .entry(backup.id.chapter)
                .or_default()
                .entry(backup.id.slot)
                .or_default()
                .push(backup);
        }
        grouped
    }

    /// Whether the current content of game slot `id` already has a backup.
    pub fn is_backed_up(&self, id: SlotId) -> bool {
        let Some(current) = self.game_save(id).and_then(|s| s.hash.as_deref()) else {
            return false;
        };
        self.backups_of(id)
            .any(|b| b.hash.as_deref().is_some_and(|h| h.eq_ignore_ascii_case(current)))
    }

    /// Serializable form with game saves as a list.
    pub fn to_report(&self) -> SnapshotReport<'_> {
        SnapshotReport {
            game_saves: self
                .game_saves
                .values()
                .map(|save| GameSaveReport {
                    backed_up: self.is_backed_up(save.id),
                    save,
                })
                .collect(),
            backups: self.backups.iter().collect(),
        }
    }
}

/// JSON shape of a snapshot.
#[derive(Debug, Serialize)]
pub struct SnapshotReport<'a> {
    /// Game saves in slot order
    pub game_saves: Vec<GameSaveReport<'a>>,
    /// Backups in library order
    pub backups: Vec<&'a SaveFile>,
}

/// A game save plus whether its current content is backed up.
#[derive(Debug, Serialize)]
pub struct GameSaveReport<'a> {
    #[serde(flatten)]
    save: &'a SaveFile,
    backed_up: bool,
}
