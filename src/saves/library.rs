//! The save library: scanning, backing up, restoring and deleting saves.

use super::{
    Settings,
    checksum::{calculate_file_sha256, hash_matches_prefix, sha256_hex},
    error::{Error, Result},
    fs,
    save_file::{SaveFile, SaveOrigin},
    slot::{self, SlotId},
    snapshot::Snapshot,
};
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Shortest hash prefix accepted as a backup selector.
pub const MIN_HASH_PREFIX: usize = 4;

/// Operations over a game save directory and a backup library.
///
/// # Examples
///
/// ```no_run
/// use deltasaver::saves::{SaveLibrary, SettingsBuilder, SlotId};
///
/// # async fn example() -> deltasaver::saves::Result<()> {
/// let settings = SettingsBuilder::new().build()?;
/// let library = SaveLibrary::open(&settings).await?;
///
/// let backup = library.backup(SlotId::from_display(2, 1)?).await?;
/// println!("Saved {}", backup.display_name());
///
/// library.restore(&backup, None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SaveLibrary {
    game_directory: PathBuf,
    backup_directory: PathBuf,
}

impl SaveLibrary {
    /// Opens the library, creating the backup directory if missing.
    ///
    /// The game directory is left alone; it belongs to the game.
    pub async fn open(settings: &Settings) -> Result<Self> {
        let backup_directory = settings.backup_directory().to_path_buf();
        if !fs::exists(&backup_directory).await? {
            log::info!("Creating backup library at {}", backup_directory.display());
            fs::create_dir_all(&backup_directory).await?;
        }

        Ok(Self {
            game_directory: settings.game_directory().to_path_buf(),
            backup_directory,
        })
    }

    /// Returns the game save directory.
    pub fn game_directory(&self) -> &Path {
        &self.game_directory
    }

    /// Returns the backup library directory.
    pub fn backup_directory(&self) -> &Path {
        &self.backup_directory
    }

    /// Path the game uses for `id`.
    pub fn game_path(&self, id: SlotId) -> PathBuf {
        self.game_directory.join(slot::game_file_name(id))
    }

    /// Reads both directories.
    ///
    /// Missing directories yield empty results. Files whose names are not
    /// saves or backups are ignored.
    pub async fn scan(&self) -> Result<Snapshot> {
        let game_saves = self.scan_game_saves().await?;
        let backups = self.scan_backups().await?;
        log::debug!(
            "Scanned {} game saves and {} backups",
            game_saves.len(),
            backups.len()
        );
        Ok(Snapshot {
            game_saves,
            backups,
        })
    }

    async fn scan_game_saves(&self) -> Result<BTreeMap<SlotId, SaveFile>> {
        let mut saves = BTreeMap::new();
        if !fs::exists(&self.game_directory).await? {
            log::debug!(
                "Game directory {} does not exist",
                self.game_directory.display()
            );
            return Ok(saves);
        }

        for (name, path) in fs::list_files(&self.game_directory).await? {
            let Some(id) = slot::parse_game_file_name(&name) else {
                log::debug!("Ignoring game file {name}");
                continue;
            };
            log::trace!("Found game save {name} ({id})");

            let hash = calculate_file_sha256(&path).await?;
            let modified = fs::modified_time(&path).await;
            saves.insert(
                id,
                SaveFile {
                    path,
                    id,
                    hash: Some(hash),
                    created: None,
                    modified,
                    origin: SaveOrigin::Game,
                },
            );
        }

        Ok(saves)
    }

    async fn scan_backups(&self) -> Result<Vec<SaveFile>> {
        let mut backups = Vec::new();
        if !fs::exists(&self.backup_directory).await? {
            return Ok(backups);
        }

        for (name, path) in fs::list_files(&self.backup_directory).await? {
            let Some(parsed) = slot::parse_backup_file_name(&name) else {
                log::debug!("Ignoring library file {name}");
                continue;
            };
            let modified = fs::modified_time(&path).await;
            backups.push(SaveFile {
                path,
                id: parsed.id,
                hash: Some(parsed.hash),
                created: parsed.created,
                modified,
                origin: SaveOrigin::Local,
            });
        }

        backups.sort_by(|a, b| {
            a.id.cmp(&b.id)
                .then_with(|| a.created.cmp(&b.created))
                .then_with(|| a.path.cmp(&b.path))
        });
        Ok(backups)
    }

    /// Copies the game save in `id` into the library.
    ///
    /// The backup is named after the content hash and the current time.
    pub async fn backup(&self, id: SlotId) -> Result<SaveFile> {
        let source = self.game_path(id);
        if !fs::exists(&source).await? {
            return Err(Error::SaveNotFound(id));
        }

        let contents = fs::read_file(&source).await?;
        let hash = sha256_hex(&contents);
        let created = Utc::now();
        let path = self
            .backup_directory
            .join(slot::backup_file_name(id, &hash, created));

        fs::write_file(&path, &contents).await?;
        log::info!("Backed up {id} to {}", path.display());

        let modified = fs::modified_time(&path).await;
        Ok(SaveFile {
            path,
            id,
            hash: Some(hash),
            created: Some(created),
            modified,
            origin: SaveOrigin::Local,
        })
    }

    /// Backs up every game save currently present.
    pub async fn backup_all(&self) -> Result<Vec<SaveFile>> {
        let game_saves = self.scan_game_saves().await?;
        let mut backups = Vec::with_capacity(game_saves.len());
        for id in game_saves.into_keys() {
            backups.push(self.backup(id).await?);
        }
        Ok(backups)
    }

    /// Writes a backup over a game slot and returns the path written.
    ///
    /// `target` defaults to the slot the backup was taken from. Another slot
    /// of the same chapter is allowed; another chapter is not, since the
    /// game cannot load it. The backup is verified against the hash in its
    /// name before anything is overwritten.
    pub async fn restore(&self, backup: &SaveFile, target: Option<SlotId>) -> Result<PathBuf> {
        if !backup.is_local() {
            crate::bail!("{} is not a backup", backup.path.display());
        }

        let target = target.unwrap_or(backup.id);
        if target.chapter != backup.id.chapter {
            return Err(Error::ChapterMismatch {
                backup: backup.id.chapter,
                target: target.chapter,
            });
        }

        if !fs::exists(&self.game_directory).await? {
            return Err(Error::GameDirectoryMissing(self.game_directory.clone()));
        }

        let contents = fs::read_file(&backup.path).await?;
        if let Some(expected) = &backup.hash {
            let actual = sha256_hex(&contents);
            if !actual.eq_ignore_ascii_case(expected) {
                return Err(Error::ChecksumMismatch {
                    path: backup.path.clone(),
                    expected: expected.clone(),
                    actual,
                });
            }
        }

        let destination = self.game_path(target);
        fs::write_file(&destination, &contents).await?;
        log::info!(
            "Restored {} to {}",
            backup.path.display(),
            destination.display()
        );
        Ok(destination)
    }

    /// Removes a backup from the library.
    pub async fn delete(&self, backup: &SaveFile) -> Result<()> {
        let library = fs::canonicalize(&self.backup_directory).await?;
        let path = fs::canonicalize(&backup.path).await?;
        if path.parent() != Some(library.as_path()) {
            return Err(Error::OutsideLibrary(backup.path.clone()));
        }

        fs::remove_file(&path).await?;
        log::info!("Deleted backup {}", path.display());
        Ok(())
    }

    /// Finds a backup by file name or hash prefix.
    ///
    /// A selector naming a file (with or without directories) must match a
    /// backup file name exactly. Otherwise it is read as a hash prefix of at
    /// least [`MIN_HASH_PREFIX`] hex digits and must match exactly one backup.
    pub async fn find_backup(&self, selector: &str) -> Result<SaveFile> {
        let backups = self.scan_backups().await?;
        select_backup(backups, selector)
    }
}

fn select_backup(backups: Vec<SaveFile>, selector: &str) -> Result<SaveFile> {
    let name = Path::new(selector)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let not_found = || Error::BackupNotFound {
        selector: selector.to_string(),
    };

    if let Some(found) = backups.iter().find(|b| b.file_name() == name) {
        return Ok(found.clone());
    }

    let is_prefix =
        selector.len() >= MIN_HASH_PREFIX && selector.chars().all(|c| c.is_ascii_hexdigit());
    if !is_prefix {
        return Err(not_found());
    }

    let mut matches: Vec<SaveFile> = backups
        .into_iter()
        .filter(|b| {
            b.hash
                .as_deref()
                .is_some_and(|h| hash_matches_prefix(h, selector))
        })
        .collect();

    match matches.len() {
        0 => Err(not_found()),
        1 => Ok(matches.remove(0)),
        _ => Err(Error::AmbiguousSelector {
            selector: selector.to_string(),
            candidates: matches.iter().map(SaveFile::file_name).collect(),
        }),
    }
}
