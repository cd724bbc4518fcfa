//! DELTARUNE save slot backup library
//!
//! This library provides the core save management functionality:
//! - Discovering the game's save slots (`filech{chapter}_{slot}`)
//! - Content-addressed backups in a local library
//! - Restoring backups over game slots and pruning the library
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod saves;

// Re-export commonly used types
pub use error::{CliError, DeltasaverError, Result};
pub use saves::{SaveFile, SaveLibrary, Settings, SettingsBuilder, SlotId};
