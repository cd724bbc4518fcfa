//! A save found on disk, either in the game directory or in the library.

use super::slot::SlotId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Where a save file lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveOrigin {
    /// The game's own save directory
    Game,
    /// The DELTASAVER backup library
    Local,
}

/// A save file and what its name and metadata say about it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SaveFile {
    /// Full path on disk
    pub path: PathBuf,
    /// Chapter and slot
    #[serde(flatten)]
    pub id: SlotId,
    /// SHA-256 of the content. Backups carry it in their name; game saves
    /// get it when scanned.
    pub hash: Option<String>,
    /// When the backup was taken (backups only)
    pub created: Option<DateTime<Utc>>,
    /// File modification time
    pub modified: Option<DateTime<Utc>>,
    /// Game directory or backup library
    pub origin: SaveOrigin,
}

impl SaveFile {
    /// Whether this file lives in the backup library.
    pub fn is_local(&self) -> bool {
        self.origin == SaveOrigin::Local
    }

    /// File name component of the path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Human readable label.
    ///
    /// Backups show the first eight hash characters so copies of the same
    /// slot can be told apart.
    pub fn display_name(&self) -> String {
        match (&self.origin, &self.hash) {
            (SaveOrigin::Local, Some(hash)) => {
                let short = hash.get(..8).unwrap_or(hash);
                format!("{} ({short})", self.id)
            }
            (SaveOrigin::Local, None) => format!("{} (local)", self.id),
            (SaveOrigin::Game, _) => self.id.to_string(),
        }
    }
}
