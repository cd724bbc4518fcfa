//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation
//! of chapter and slot numbers before any file is touched.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::saves::{BUILTIN_SLOT_MAX_INDEX, CHAPTER_COUNT, SettingsBuilder};

/// DELTARUNE save slot backup manager
#[derive(Parser, Debug)]
#[command(
    name = "deltasaver",
    version,
    about = "Back up and restore DELTARUNE save slots",
    long_about = "Keeps a library of DELTARUNE save slot backups, named after their content hash.

Slots are numbered 1-3 as in the game.

Usage:
  deltasaver list
  deltasaver backup 2 1
  deltasaver backup --all
  deltasaver restore 3fa9c1
  deltasaver restore filech2_0_3fa9c1..._1712345678_0 --slot 3
  deltasaver delete 3fa9c1"
)]
pub struct Args {
    /// DELTARUNE save directory (default: platform location)
    #[arg(long, global = true, env = "DELTASAVER_GAME_DIR", value_name = "DIR")]
    pub game_dir: Option<PathBuf>,

    /// Backup library directory (default: <local data dir>/DELTASAVER)
    #[arg(long, global = true, env = "DELTASAVER_BACKUP_DIR", value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// TOML config file with game_directory / backup_directory
    #[arg(long, global = true, env = "DELTASAVER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only print errors and requested data
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print details and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (default: list)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show game saves per chapter and slot, then the backup library
    List {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Copy a game slot into the backup library
    Backup {
        /// Chapter number (1-7)
        #[arg(required_unless_present = "all")]
        chapter: Option<u8>,

        /// Slot number (1-3)
        #[arg(required_unless_present = "all")]
        slot: Option<u8>,

        /// Back up every slot that has a save
        #[arg(long, conflicts_with_all = ["chapter", "slot"])]
        all: bool,
    },

    /// Write a backup over its game slot
    Restore {
        /// Backup file name or hash prefix (at least 4 characters)
        selector: String,

        /// Restore into this slot (1-3) of the same chapter instead
        #[arg(long, value_name = "SLOT")]
        slot: Option<u8>,
    },

    /// Delete a backup from the library
    Delete {
        /// Backup file name or hash prefix (at least 4 characters)
        selector: String,
    },

    /// Print the directories in use
    Paths,
}

impl Args {
    /// Parse command line arguments.
    ///
    /// Usage errors are returned rather than printed so that they share the
    /// `Error:` output and exit code of every other failure.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Command to run, defaulting to `list`.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::List { json: false })
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Some(Command::Backup {
                chapter: Some(chapter),
                slot: Some(slot),
                ..
            }) => {
                validate_chapter(*chapter)?;
                validate_slot(*slot)?;
            }
            Some(Command::Restore { selector, slot }) => {
                validate_selector(selector)?;
                if let Some(slot) = slot {
                    validate_slot(*slot)?;
                }
            }
            Some(Command::Delete { selector }) => validate_selector(selector)?,
            _ => {}
        }
        Ok(())
    }

    /// Settings builder with the directory overrides from flags and environment.
    pub fn settings_builder(&self) -> SettingsBuilder {
        let mut builder = SettingsBuilder::new();
        if let Some(dir) = &self.game_dir {
            builder = builder.game_directory(dir);
        }
        if let Some(dir) = &self.backup_dir {
            builder = builder.backup_directory(dir);
        }
        if let Some(file) = &self.config {
            builder = builder.config_file(file);
        }
        builder
    }
}

fn validate_chapter(chapter: u8) -> Result<(), String> {
    if (1..=CHAPTER_COUNT).contains(&chapter) {
        Ok(())
    } else {
        Err(format!(
            "Invalid chapter: {chapter}. Valid chapters: 1-{CHAPTER_COUNT}"
        ))
    }
}

fn validate_slot(slot: u8) -> Result<(), String> {
    let max = BUILTIN_SLOT_MAX_INDEX + 1;
    if (1..=max).contains(&slot) {
        Ok(())
    } else {
        Err(format!("Invalid slot: {slot}. Valid slots: 1-{max}"))
    }
}

fn validate_selector(selector: &str) -> Result<(), String> {
    if selector.trim().is_empty() {
        return Err("Backup selector cannot be empty".to_string());
    }
    Ok(())
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);
        Self { output }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }

    /// Print requested data
    pub fn data(&self, message: &str) -> std::io::Result<()> {
        self.output.data(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("deltasaver").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_list() {
        let args = parse(&[]);
        assert_eq!(args.command(), Command::List { json: false });
        assert!(args.validate().is_ok());
    }

    #[test]
    fn backup_takes_chapter_and_slot() {
        let args = parse(&["backup", "2", "3"]);
        assert_eq!(
            args.command(),
            Command::Backup {
                chapter: Some(2),
                slot: Some(3),
                all: false
            }
        );
        assert!(args.validate().is_ok());
    }

    #[test]
    fn backup_requires_slot_unless_all() {
        let argv = ["deltasaver", "backup", "2"];
        assert!(Args::try_parse_from(argv).is_err());

        let args = parse(&["backup", "--all"]);
        assert!(matches!(args.command(), Command::Backup { all: true, .. }));

        let argv = ["deltasaver", "backup", "1", "1", "--all"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(parse(&["backup", "8", "1"]).validate().is_err());
        assert!(parse(&["backup", "1", "0"]).validate().is_err());
        assert!(parse(&["backup", "1", "4"]).validate().is_err());
        assert!(parse(&["restore", "abcd", "--slot", "4"]).validate().is_err());
        assert!(parse(&["delete", " "]).validate().is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = parse(&["list", "--game-dir", "/g", "--backup-dir", "/b", "-q"]);
        assert_eq!(args.game_dir, Some(PathBuf::from("/g")));
        assert_eq!(args.backup_dir, Some(PathBuf::from("/b")));
        assert!(args.quiet);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let argv = ["deltasaver", "-q", "-v", "list"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
