use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Dirs {
    root: TempDir,
}

impl Dirs {
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("game")).unwrap();
        Self { root }
    }

    fn game(&self) -> PathBuf {
        self.root.path().join("game")
    }

    fn backups(&self) -> PathBuf {
        self.root.path().join("backups")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("deltasaver").unwrap();
        cmd.env_remove("DELTASAVER_CONFIG")
            .env_remove("RUST_LOG")
            .env("XDG_DATA_HOME", self.root.path().join("data"))
            .env("DELTASAVER_GAME_DIR", self.game())
            .env("DELTASAVER_BACKUP_DIR", self.backups());
        cmd
    }

    fn backup_names(&self) -> Vec<String> {
        let mut names: Vec<_> = std::fs::read_dir(self.backups())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

fn write(dir: &Path, name: &str, contents: &[u8]) {
    std::fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn list_shows_empty_chapters() {
    let dirs = Dirs::new();
    dirs.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game Saves"))
        .stdout(predicate::str::contains("Chapter 7"))
        .stdout(predicate::str::contains("Slot 3  Empty"))
        .stdout(predicate::str::contains("No saves"));
}

#[test]
fn list_is_the_default_command() {
    let dirs = Dirs::new();
    dirs.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Local Saves"));
}

#[test]
fn backup_then_list_json() {
    let dirs = Dirs::new();
    write(&dirs.game(), "filech2_0", b"lancer");

    dirs.cmd()
        .args(["backup", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved Chapter 2, Slot 1"));
    assert_eq!(dirs.backup_names().len(), 1);

    let output = dirs.cmd().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["game_saves"][0]["chapter"], 2);
    assert_eq!(json["game_saves"][0]["backed_up"], true);
    assert_eq!(json["backups"].as_array().unwrap().len(), 1);
}

#[test]
fn backup_missing_slot_fails() {
    let dirs = Dirs::new();
    dirs.cmd()
        .args(["backup", "1", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no game save for Chapter 1, Slot 1"));
}

#[test]
fn backup_rejects_out_of_range_slot() {
    let dirs = Dirs::new();
    dirs.cmd()
        .args(["backup", "1", "4"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid slot: 4"));
}

#[test]
fn usage_errors_exit_one_with_error_prefix() {
    let dirs = Dirs::new();
    for args in [
        &["backup", "300", "1"][..],
        &["frobnicate"][..],
        &["backup", "2"][..],
    ] {
        dirs.cmd()
            .args(args)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::starts_with("Error: "))
            .stderr(predicate::str::contains("error:").not());
    }
}

#[test]
fn help_and_version_succeed() {
    let dirs = Dirs::new();
    dirs.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    dirs.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn backup_all_and_restore_by_prefix() {
    let dirs = Dirs::new();
    write(&dirs.game(), "filech1_0", b"first");
    write(&dirs.game(), "filech1_1", b"second");

    dirs.cmd()
        .args(["backup", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backed up 2 saves"));

    let names = dirs.backup_names();
    let first = names.iter().find(|n| n.starts_with("filech1_0_")).unwrap();
    let hash = first.split('_').nth(2).unwrap();

    write(&dirs.game(), "filech1_0", b"overwritten");
    dirs.cmd()
        .args(["restore", &hash[..10]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored"));
    assert_eq!(std::fs::read(dirs.game().join("filech1_0")).unwrap(), b"first");

    dirs.cmd()
        .args(["restore", &hash[..10], "--slot", "3"])
        .assert()
        .success();
    assert_eq!(std::fs::read(dirs.game().join("filech1_2")).unwrap(), b"first");
}

#[test]
fn delete_removes_backup_file() {
    let dirs = Dirs::new();
    write(&dirs.game(), "filech4_2", b"spamton");
    dirs.cmd().args(["backup", "4", "3"]).assert().success();
    let name = dirs.backup_names().remove(0);

    dirs.cmd()
        .args(["delete", &name])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted Chapter 4, Slot 3"));
    assert!(dirs.backup_names().is_empty());
    assert!(dirs.game().join("filech4_2").exists());
}

#[test]
fn unknown_selector_fails_with_hint() {
    let dirs = Dirs::new();
    dirs.cmd()
        .args(["restore", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no backup matches 'deadbeef'"))
        .stderr(predicate::str::contains("deltasaver list"));
}

#[test]
fn quiet_backup_prints_nothing() {
    let dirs = Dirs::new();
    write(&dirs.game(), "filech1_0", b"x");
    dirs.cmd()
        .args(["-q", "backup", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn paths_reports_directories_without_creating_library() {
    let dirs = Dirs::new();
    dirs.cmd()
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains(dirs.game().display().to_string()))
        .stdout(predicate::str::contains(dirs.backups().display().to_string()))
        .stdout(predicate::str::contains("config:  (none)"));
    assert!(!dirs.backups().exists());
}

#[test]
fn config_file_supplies_directories() {
    let dirs = Dirs::new();
    let config = dirs.root.path().join("deltasaver.toml");
    let custom = dirs.root.path().join("custom-backups");
    std::fs::write(
        &config,
        format!("backup_directory = {:?}\n", custom.display().to_string()),
    )
    .unwrap();

    let mut cmd = dirs.cmd();
    cmd.env_remove("DELTASAVER_BACKUP_DIR")
        .arg("--config")
        .arg(&config)
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains(custom.display().to_string()));
}

#[test]
fn config_in_chosen_library_is_read() {
    let dirs = Dirs::new();
    let library = dirs.root.path().join("lib");
    let game = dirs.root.path().join("from-config-game");
    std::fs::create_dir_all(&library).unwrap();
    std::fs::write(
        library.join("deltasaver.toml"),
        format!("game_directory = {:?}\n", game.display().to_string()),
    )
    .unwrap();

    dirs.cmd()
        .env_remove("DELTASAVER_GAME_DIR")
        .env_remove("DELTASAVER_BACKUP_DIR")
        .arg("--backup-dir")
        .arg(&library)
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains(game.display().to_string()))
        .stdout(predicate::str::contains(
            library.join("deltasaver.toml").display().to_string(),
        ));
}

#[test]
fn environment_beats_config_file() {
    let dirs = Dirs::new();
    let config = dirs.root.path().join("deltasaver.toml");
    let from_config = dirs.root.path().join("config-game");
    std::fs::write(
        &config,
        format!("game_directory = {:?}\n", from_config.display().to_string()),
    )
    .unwrap();

    dirs.cmd()
        .arg("--config")
        .arg(&config)
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "game:    {}",
            dirs.game().display()
        )))
        .stdout(predicate::str::contains(from_config.display().to_string()).not());
}
