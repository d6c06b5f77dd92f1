//! End-to-end tests driving the real binary against a fake `uv`.
//!
//! Each test builds a throwaway workspace in a temp dir, points
//! WORKSPACE_BUMP_TOOL at `fixtures/fake-uv.sh` and feeds the prompt on stdin.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(manifest: Option<&str>) -> Self {
        let dir = TempDir::new().unwrap();

        let tool = dir.path().join("fake-uv.sh");
        fs::copy(Path::new(FIXTURES).join("fake-uv.sh"), &tool).unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

        let content = match manifest {
            Some(content) => content.to_string(),
            None => fs::read_to_string(Path::new(FIXTURES).join("pyproject.toml")).unwrap(),
        };
        fs::write(dir.path().join("pyproject.toml"), content).unwrap();

        Self { dir }
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("workspace-bump").unwrap();
        cmd.current_dir(self.dir.path())
            .env("WORKSPACE_BUMP_TOOL", self.dir.path().join("fake-uv.sh"))
            .env("FAKE_UV_LOG", self.log_path())
            .env_remove("WORKSPACE_BUMP_MANIFEST")
            .env_remove("WORKSPACE_BUMP_SECTION")
            .env_remove("FAKE_UV_BROKEN")
            .env_remove("FAKE_UV_EMPTY")
            .env_remove("FAKE_UV_FAIL_SET")
            .env_remove("RUST_LOG");
        cmd
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn set_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| !c.starts_with("version --short"))
            .collect()
    }
}

#[test]
fn test_help_has_no_side_effects() {
    let ws = Workspace::new(None);
    ws.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("WORKSPACE_BUMP_TOOL"));
    assert!(ws.calls().is_empty());
}

#[test]
fn test_trailing_help_flag() {
    let ws = Workspace::new(None);
    ws.command().args(["extra", "-h"]).assert().success();
    assert!(ws.calls().is_empty());
}

#[test]
fn test_all_packages_updated() {
    let ws = Workspace::new(None);
    ws.command()
        .write_stdin("1.2.3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current version: 0.1.0"))
        .stdout(predicate::str::contains(
            "│ monorepo-demo (root)      │ 0.1.0        │ 1.2.3        │ OK       │",
        ))
        .stdout(predicate::str::contains(
            "│ logger                    │ 0.1.0        │ 1.2.3        │ OK       │",
        ))
        .stdout(predicate::str::contains(
            "│ db                        │ 0.1.0        │ 1.2.3        │ OK       │",
        ))
        .stdout(predicate::str::contains("Succeeded: 3/3"))
        .stdout(predicate::str::contains("ALL PACKAGES UPDATED"));

    assert_eq!(
        ws.set_calls(),
        [
            "version 1.2.3",
            "version --package logger 1.2.3",
            "version --package db 1.2.3",
        ]
    );
}

#[test]
fn test_empty_input_cancels() {
    let ws = Workspace::new(None);
    ws.command()
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."))
        .stdout(predicate::str::contains("Package").not());
    assert!(ws.set_calls().is_empty());
}

#[test]
fn test_end_of_input_cancels() {
    let ws = Workspace::new(None);
    ws.command()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));
    assert!(ws.set_calls().is_empty());
}

#[test]
fn test_invalid_version_exits_one() {
    let ws = Workspace::new(None);
    ws.command()
        .write_stdin("abc\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid version format 'abc'"));
    assert!(ws.set_calls().is_empty());
}

#[test]
fn test_unreadable_current_version_exits_one() {
    let ws = Workspace::new(None);
    ws.command()
        .env("FAKE_UV_BROKEN", "1")
        .write_stdin("1.2.3\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not determine current version"));
    assert!(ws.set_calls().is_empty());
}

#[test]
fn test_empty_current_version_exits_one() {
    let ws = Workspace::new(None);
    ws.command()
        .env("FAKE_UV_EMPTY", "1")
        .write_stdin("1.2.3\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not determine current version"))
        .stdout(predicate::str::contains("printed no version"));
    assert!(ws.set_calls().is_empty());
}

#[test]
fn test_missing_tool_exits_one() {
    let ws = Workspace::new(None);
    ws.command()
        .env("WORKSPACE_BUMP_TOOL", ws.dir.path().join("no-such-uv"))
        .write_stdin("1.2.3\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Could not determine current version"));
    assert!(ws.calls().is_empty());
}

#[test]
fn test_non_ascii_digits_exit_one() {
    let ws = Workspace::new(None);
    ws.command()
        .write_stdin("\u{661}.\u{662}.\u{663}\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid version format"));
    assert!(ws.set_calls().is_empty());
}

#[test]
fn test_missing_workspace_section_exits_one() {
    let ws = Workspace::new(Some("[project]\nname = \"solo\"\nversion = \"0.1.0\"\n"));
    ws.command()
        .write_stdin("1.2.3\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No workspace packages discovered"));
    assert!(ws.set_calls().is_empty());
}

#[test]
fn test_partial_failure_exits_zero() {
    let ws = Workspace::new(None);
    ws.command()
        .env("FAKE_UV_FAIL_SET", "db")
        .write_stdin("1.2.3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "│ logger                    │ 0.1.0        │ 1.2.3        │ OK       │",
        ))
        .stdout(predicate::str::contains(
            "│ db                        │ 0.1.0        │ 0.1.0        │ FAIL     │",
        ))
        .stdout(predicate::str::contains("Succeeded: 2/3"))
        .stdout(predicate::str::contains("PARTIAL SUCCESS: 1 package(s) failed"));
}

#[test]
fn test_unknown_arguments_are_ignored() {
    let ws = Workspace::new(None);
    ws.command()
        .args(["--dry-run", "patch"])
        .write_stdin("2.0.0-rc1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignoring unexpected arguments: --dry-run patch"))
        .stdout(predicate::str::contains("ALL PACKAGES UPDATED"));
    assert_eq!(ws.set_calls().len(), 3);
}
