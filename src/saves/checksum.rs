//! Save content checksums.
//!
//! Backups are content-addressed by the SHA-256 of the save file, encoded
//! as lowercase hex.

use super::error::{ErrorExt, Result};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Hex-encoded SHA-256 of an in-memory buffer.
pub fn sha256_hex(contents: &[u8]) -> String {
    format!("{:x}", Sha256::digest(contents))
}

/// Calculates the SHA-256 checksum of a file.
///
/// Reads the file in 8KB chunks; save files are small but the library
/// does not assume so.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash (64 characters)
/// * `Err` - If the file cannot be opened or read
pub async fn calculate_file_sha256(file_path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(file_path)
        .await
        .fs_context("opening file for hashing", file_path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", file_path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Whether a full hash starts with `prefix`, ignoring ASCII case.
pub fn hash_matches_prefix(hash: &str, prefix: &str) -> bool {
    hash.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
