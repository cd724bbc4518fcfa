//! DELTARUNE save management.
//!
//! This module holds everything that touches save files:
//!
//! - [`slot`] - chapter/slot identities and the file names for them
//! - [`SaveLibrary`] - scanning, backup, restore and delete
//! - [`settings`] - where the game directory and the backup library live
//! - [`checksum`] - SHA-256 content hashes backups are named after
//!
//! # Example
//!
//! ```no_run
//! use deltasaver::saves::{SaveLibrary, SettingsBuilder};
//!
//! # async fn example() -> deltasaver::saves::Result<()> {
//! let library = SaveLibrary::open(&SettingsBuilder::new().build()?).await?;
//! let snapshot = library.scan().await?;
//!
//! for save in snapshot.game_saves.values() {
//!     println!("{} backed up: {}", save.display_name(), snapshot.is_backed_up(save.id));
//! }
//! # Ok(())
//! # }
//! ```

pub mod checksum;
mod error;
mod fs;
mod library;
mod save_file;
pub mod settings;
pub mod slot;
mod snapshot;

pub use error::{Error, ErrorExt, Result};
pub use library::{MIN_HASH_PREFIX, SaveLibrary};
pub use save_file::{SaveFile, SaveOrigin};
pub use settings::{Platform, Settings, SettingsBuilder};
pub use slot::{BUILTIN_SLOT_MAX_INDEX, CHAPTER_COUNT, Chapter, Slot, SlotId};
pub use snapshot::{BackupsByChapter, GameSaveReport, Snapshot, SnapshotReport};
