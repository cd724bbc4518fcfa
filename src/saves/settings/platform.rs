//! Host platform detection and the save locations DELTARUNE uses on each.

use std::path::{Path, PathBuf};

/// Directory name of the backup library under the local data directory.
pub const LIBRARY_DIR_NAME: &str = "DELTASAVER";

/// Operating systems DELTARUNE ships on, plus everything else.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Platform {
    /// Saves live in `%LOCALAPPDATA%\DELTARUNE`
    Windows,
    /// Saves live in `~/Library/Application Support/com.tobyfox.deltarune`
    MacOs,
    /// No native build of the game; the location must be given explicitly
    Other,
}

impl Platform {
    /// Detects the platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// Game save directory relative to the local data directory.
    pub fn game_directory(&self, data_local_dir: &Path) -> Option<PathBuf> {
        match self {
            Platform::Windows => Some(data_local_dir.join("DELTARUNE")),
            Platform::MacOs => Some(data_local_dir.join("com.tobyfox.deltarune")),
            Platform::Other => None,
        }
    }

    /// Default backup library location.
    pub fn backup_directory(&self, data_local_dir: &Path) -> PathBuf {
        data_local_dir.join(LIBRARY_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_directories_per_platform() {
        let base = Path::new("data");
        assert_eq!(
            Platform::Windows.game_directory(base),
            Some(base.join("DELTARUNE"))
        );
        assert_eq!(
            Platform::MacOs.game_directory(base),
            Some(base.join("com.tobyfox.deltarune"))
        );
        assert_eq!(Platform::Other.game_directory(base), None);
    }

    #[test]
    fn library_lives_next_to_game_data() {
        let base = Path::new("data");
        for platform in [Platform::Windows, Platform::MacOs, Platform::Other] {
            assert_eq!(platform.backup_directory(base), base.join("DELTASAVER"));
        }
    }
}
