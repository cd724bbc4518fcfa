//! File system helpers for the save library.
//!
//! Every IO failure carries the operation and the path it was working on.

use super::error::{ErrorExt, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Creates the directory and all of its parents. Succeeds if it already exists.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Whether `path` exists. Permission errors are reported, not treated as absent.
pub async fn exists(path: &Path) -> Result<bool> {
    fs::try_exists(path)
        .await
        .fs_context("checking existence of", path)
}

/// Lists the regular files of a directory as `(file name, path)` pairs.
///
/// Entries whose names are not valid UTF-8 are skipped; no save or backup
/// name can contain them.
pub async fn list_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut entries = fs::read_dir(dir).await.fs_context("reading directory", dir)?;
    let mut files = Vec::new();

    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("reading directory entry in", dir)?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .fs_context("reading file type of", &path)?;
        if !file_type.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => files.push((name, path)),
            Err(name) => log::debug!("Skipping non UTF-8 file name: {name:?}"),
        }
    }

    Ok(files)
}

/// Reads a whole file.
pub async fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).await.fs_context("reading", path)
}

/// Writes `contents` to `path`, replacing any existing file.
///
/// The bytes go to a hidden sibling first and are renamed into place, so a
/// failed write never leaves a truncated save behind. The parent directory
/// must already exist.
pub async fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    let staging = staging_path(path);

    if let Err(e) = fs::write(&staging, contents).await {
        let _ = fs::remove_file(&staging).await;
        return Err(e).fs_context("writing", &staging);
    }

    if let Err(e) = fs::rename(&staging, path).await {
        let _ = fs::remove_file(&staging).await;
        return Err(e).fs_context("replacing", path);
    }

    Ok(())
}

/// Removes a file.
pub async fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).await.fs_context("removing", path)
}

/// Last modification time of a file, if the platform reports one.
pub async fn modified_time(path: &Path) -> Option<DateTime<Utc>> {
    let metadata = fs::metadata(path).await.ok()?;
    metadata.modified().ok().map(DateTime::<Utc>::from)
}

/// Resolves `path` to an absolute path with symlinks removed.
pub async fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path)
        .await
        .fs_context("resolving path", path)
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.deltasaver-tmp"))
}
