//! Chapter/slot identities and the file names DELTARUNE and the backup
//! library use for them.
//!
//! The game stores each slot as `filech{chapter}_{slot}` with a zero-based
//! slot index. Backups append the SHA-256 of the content and the creation
//! time: `filech{chapter}_{slot}_{hash}_{secs}_{nanos}`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::error::{Error, Result};

/// DELTARUNE chapter number (1-based).
pub type Chapter = u8;

/// Save slot index (0-based).
pub type Slot = u8;

/// Number of chapters shown in overviews.
pub const CHAPTER_COUNT: Chapter = 7;

/// Highest slot index the game uses for player saves.
///
/// `filech{n}_3` and above hold completion data, not slots.
pub const BUILTIN_SLOT_MAX_INDEX: Slot = 2;

const FILE_PREFIX: &str = "filech";

/// A chapter and save slot pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SlotId {
    /// Chapter number
    pub chapter: Chapter,
    /// Zero-based slot index
    pub slot: Slot,
}

impl SlotId {
    /// Creates a slot id, rejecting chapters outside `1..=CHAPTER_COUNT`
    /// and slots above [`BUILTIN_SLOT_MAX_INDEX`].
    pub fn new(chapter: Chapter, slot: Slot) -> Result<Self> {
        if !(1..=CHAPTER_COUNT).contains(&chapter) || slot > BUILTIN_SLOT_MAX_INDEX {
            return Err(Error::InvalidSlot {
                chapter,
                slot: u16::from(slot) + 1,
            });
        }
        Ok(Self { chapter, slot })
    }

    /// Creates a slot id from the one-based slot number users see.
    ///
    /// Errors report the number as given.
    pub fn from_display(chapter: Chapter, slot: u8) -> Result<Self> {
        match slot.checked_sub(1) {
            Some(index) => Self::new(chapter, index).map_err(|_| Error::InvalidSlot {
                chapter,
                slot: slot.into(),
            }),
            None => Err(Error::InvalidSlot { chapter, slot: 0 }),
        }
    }

    /// One-based slot number.
    pub fn display_slot(&self) -> u8 {
        self.slot + 1
    }

    /// Every slot of every listed chapter, in order.
    pub fn all() -> impl Iterator<Item = SlotId> {
        (1..=CHAPTER_COUNT).flat_map(|chapter| {
            (0..=BUILTIN_SLOT_MAX_INDEX).map(move |slot| SlotId { chapter, slot })
        })
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chapter {}, Slot {}", self.chapter, self.display_slot())
    }
}

/// Parsed form of a backup file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackupName {
    /// Slot the backup was taken from
    pub id: SlotId,
    /// Hex SHA-256 of the content at backup time
    pub hash: String,
    /// When the backup was taken, if the name records it
    pub created: Option<DateTime<Utc>>,
}

/// Splits `filech{a}_{b}...` into the chapter, slot and remaining parts.
fn split_name(file_name: &str) -> Option<(Chapter, Slot, Vec<&str>)> {
    let rest = file_name.strip_prefix(FILE_PREFIX)?;
    let mut parts = rest.split('_');
    let chapter = parts.next()?.parse::<Chapter>().ok()?;
    let slot = parts.next()?.parse::<Slot>().ok()?;
    if slot > BUILTIN_SLOT_MAX_INDEX {
        return None;
    }
    Some((chapter, slot, parts.collect()))
}

/// Parses a game save file name such as `filech2_1`.
pub fn parse_game_file_name(file_name: &str) -> Option<SlotId> {
    match split_name(file_name)? {
        (chapter, slot, rest) if rest.is_empty() => Some(SlotId { chapter, slot }),
        _ => None,
    }
}

/// Parses a backup file name such as `filech2_1_<sha256>_<secs>_<nanos>`.
///
/// The timestamp parts are optional; a name carrying only the hash is
/// still a valid backup.
pub fn parse_backup_file_name(file_name: &str) -> Option<BackupName> {
    let (chapter, slot, rest) = split_name(file_name)?;
    let hash = rest.first().filter(|h| !h.is_empty())?;

    let created = match (rest.get(1), rest.get(2)) {
        (Some(secs), nanos) => {
            let secs = secs.parse::<i64>().ok();
            let nanos = nanos.map_or(Some(0), |n| n.parse::<u32>().ok());
            secs.zip(nanos)
                .and_then(|(secs, nanos)| DateTime::from_timestamp(secs, nanos))
        }
        (None, _) => None,
    };

    Some(BackupName {
        id: SlotId { chapter, slot },
        hash: hash.to_string(),
        created,
    })
}

/// File name the game uses for a slot.
pub fn game_file_name(id: SlotId) -> String {
    format!("{FILE_PREFIX}{}_{}", id.chapter, id.slot)
}

/// File name for a backup of `id` with content `hash` taken at `created`.
pub fn backup_file_name(id: SlotId, hash: &str, created: DateTime<Utc>) -> String {
    format!(
        "{FILE_PREFIX}{}_{}_{}_{}_{}",
        id.chapter,
        id.slot,
        hash,
        created.timestamp(),
        created.timestamp_subsec_nanos()
    )
}
