//! Configuration for locating the game saves and the backup library.
//!
//! Locations come from, highest precedence first: values set on the
//! [`SettingsBuilder`] (CLI flags and environment), a TOML config file, and
//! the platform's default directories.

mod builder;
mod core;
mod file;
mod platform;

pub use builder::SettingsBuilder;
pub use core::Settings;
pub use file::{CONFIG_FILE_NAME, ConfigFile};
pub use platform::{LIBRARY_DIR_NAME, Platform};
