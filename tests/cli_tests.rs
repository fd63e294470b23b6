//! CLI integration tests
//!
//! Network-free by construction: every test either stops at argument
//! validation or fails before the first request (missing file, missing
//! credential). Config state is isolated per test through GITCMS_CONFIG.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Per-test config isolation: GITCMS_CONFIG points into a fresh temp dir
/// and credential env vars are scrubbed from the child process
struct TempConfig {
    dir: TempDir,
}

impl TempConfig {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitcms").expect("binary built");
        cmd.env("GITCMS_CONFIG", self.config_path());
        cmd.env_remove("GITHUB_TOKEN");
        cmd
    }
}

#[test]
fn help_output() {
    let config = TempConfig::new();
    config
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("content"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("gallery"))
        .stdout(predicate::str::contains("videos"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_output() {
    let config = TempConfig::new();
    config
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitcms"));
}

#[test]
fn config_help_lists_actions() {
    let config = TempConfig::new();
    config
        .command()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_path_honors_the_env_override() {
    let config = TempConfig::new();
    config
        .command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            config.config_path().to_string_lossy().as_ref(),
        ));
}

#[test]
fn config_set_get_round_trip() {
    let config = TempConfig::new();

    config
        .command()
        .args(["config", "set", "owner", "acme"])
        .assert()
        .success();

    config
        .command()
        .args(["config", "get", "owner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme"));
}

#[test]
fn config_masks_the_token_on_display() {
    let config = TempConfig::new();

    config
        .command()
        .args(["config", "set", "token", "ghp_1234567890abcdef"])
        .assert()
        .success();

    config
        .command()
        .args(["config", "get", "token"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghp_...cdef"))
        .stdout(predicate::str::contains("1234567890").not());

    config
        .command()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghp_...cdef"))
        .stdout(predicate::str::contains("1234567890").not());
}

#[test]
fn config_get_reports_unset_keys() {
    let config = TempConfig::new();
    config
        .command()
        .args(["config", "get", "token"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn config_rejects_unknown_keys() {
    let config = TempConfig::new();

    config
        .command()
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"))
        .stderr(predicate::str::contains("content_path"));

    config
        .command()
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_rejects_an_owner_with_a_slash() {
    let config = TempConfig::new();
    config
        .command()
        .args(["config", "set", "owner", "acme/site"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("without '/'"));
}

#[test]
fn config_init_refuses_to_clobber() {
    let config = TempConfig::new();

    config.command().args(["config", "init"]).assert().success();
    assert!(config.config_path().exists());

    config
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let config = TempConfig::new();
    let output = config.command().output().expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn gallery_replace_validates_the_slot_before_anything_else() {
    let config = TempConfig::new();

    let output = config
        .command()
        .args(["gallery", "replace", "0", "photo.png"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("between 1 and 18"),
        "Expected slot range error, got: {}",
        stderr
    );

    let output = config
        .command()
        .args(["gallery", "replace", "19", "photo.png"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn videos_positions_are_one_based() {
    let config = TempConfig::new();

    let output = config
        .command()
        .args(["videos", "move-up", "0"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("1-based"),
        "Expected 1-based position error, got: {}",
        stderr
    );
}

#[test]
fn texts_set_requires_at_least_one_flag() {
    let config = TempConfig::new();

    let output = config
        .command()
        .args(["texts", "set"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Nothing to update"),
        "Expected nothing-to-update error, got: {}",
        stderr
    );
}

#[test]
fn about_set_rejects_conflicting_weight_flags() {
    let config = TempConfig::new();

    let output = config
        .command()
        .args(["about", "set", "--bold", "--no-bold"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cannot be used with"),
        "Expected flag conflict error, got: {}",
        stderr
    );
}

#[test]
fn upload_without_a_token_fails_before_any_request() {
    let config = TempConfig::new();
    let image = config.dir.path().join("photo.png");
    std::fs::write(&image, b"\x89PNG fake image bytes").unwrap();

    config
        .command()
        .args(["gallery", "replace", "3"])
        .arg(&image)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No access token configured"));
}

#[test]
fn upload_of_a_missing_file_fails_before_any_request() {
    let config = TempConfig::new();

    config
        .command()
        .args(["videos", "add", "/no/such/video.mp4"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read local file"));
}
