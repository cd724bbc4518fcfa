//! Command line interface for deltasaver.
//!
//! Parses arguments, resolves settings, opens the save library and
//! dispatches to the command functions.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, Result};
use crate::saves::SaveLibrary;

/// Runs parsed arguments and returns the process exit code.
pub async fn execute(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = RuntimeConfig::from(&args);
    let settings = args.settings_builder().build()?;
    config.verbose_println(&format!(
        "Game saves: {}",
        settings.game_directory().display()
    ))?;
    config.verbose_println(&format!(
        "Backups:    {}",
        settings.backup_directory().display()
    ))?;

    let command = args.command();
    if command == Command::Paths {
        return commands::paths(&settings, &config);
    }

    let library = SaveLibrary::open(&settings).await?;
    match command {
        Command::List { json } => commands::list(&library, json, &config).await,
        Command::Backup { all: true, .. } => commands::backup_all(&library, &config).await,
        Command::Backup {
            chapter: Some(chapter),
            slot: Some(slot),
            ..
        } => commands::backup(&library, chapter, slot, &config).await,
        Command::Backup { .. } => Err(CliError::InvalidArguments {
            reason: "backup needs <CHAPTER> <SLOT> or --all".to_string(),
        }
        .into()),
        Command::Restore { selector, slot } => {
            commands::restore(&library, &selector, slot, &config).await
        }
        Command::Delete { selector } => commands::delete(&library, &selector, &config).await,
        Command::Paths => commands::paths(&settings, &config),
    }
}
