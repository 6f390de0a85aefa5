//! test-support: helpers for lfs-check integration tests.
//!
//! Builds throwaway git repositories with a known history and runs the `lfs-check`
//! binary against them.
//!
//! ```rust,no_run
//! use test_support::{cmd_bin, init_fixture_repo, BASE_TAG, COMPARE_TAG};
//!
//! let repo = init_fixture_repo();
//! let out = cmd_bin("lfs-check")
//!     .args(["--repo", repo.path().to_str().unwrap(), COMPARE_TAG, BASE_TAG])
//!     .output()
//!     .unwrap();
//! assert!(out.status.success());
//! ```

use std::path::Path;
use std::process::Command;

/// Tag on the commit every fixture range starts from.
pub const BASE_TAG: &str = "baseForTests";
/// Tag on the newest fixture commit.
pub const COMPARE_TAG: &str = "compareForTests";
/// The binary file the fixture adds and later removes.
pub const BINARY_FILE: &str = "build-passing.png";

/// Run a binary target with `assert_cmd`, returning the ready-to-run `Command`.
///
/// Colour is disabled so assertions can compare plain text.
pub fn cmd_bin(bin: &str) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin(bin).expect("binary target not found");
    cmd.env("NO_COLOR", "1").env_remove("LFS_CHECK_BASE").env_remove("RUST_LOG");
    cmd
}

pub fn run(repo: &Path, args: &[&str]) {
    let status = Command::new("git").args(args).current_dir(repo).status().unwrap();
    assert!(status.success(), "git {:?} failed", args);
}

/// Capture trimmed stdout of a git command.
pub fn git_output(repo: &Path, args: &[&str]) -> String {
    let out = Command::new("git").args(args).current_dir(repo).output().unwrap();
    assert!(out.status.success(), "git {:?} failed", args);
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

/// Abbreviated id of `rev`, as `git log --format=%h` prints it.
pub fn short_id(repo: &Path, rev: &str) -> String {
    git_output(repo, &["log", "-1", "--format=%h", rev])
}

fn commit(repo: &Path, message: &str, date: &str) {
    let status = Command::new("git")
        .args(["commit", "-q", "-m", message])
        .current_dir(repo)
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .status()
        .unwrap();
    assert!(status.success(), "commit {:?} failed", message);
}

/// Bytes git's binary heuristic always flags (PNG signature contains NUL).
pub fn binary_bytes() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0x0d];
    bytes.extend_from_slice(b"IHDR\0\0\0\x01\0\0\0\x01");
    bytes
}

/// Repository whose `baseForTests..compareForTests` range holds, newest first:
///
/// 1. "Add readme about testing integration with git" (text only)
/// 2. "Removing binary file" (deletes `build-passing.png` and nothing else)
/// 3. "Add binary file" (adds `build-passing.png`)
///
/// `main` is checked out at `compareForTests`.
pub fn init_fixture_repo() -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    let p = dir.path();

    run(p, &["init", "-q", "-b", "main"]);
    run(p, &["config", "user.name", "Fixture Bot"]);
    run(p, &["config", "user.email", "fixture@example.com"]);
    run(p, &["config", "commit.gpgsign", "false"]);
    run(p, &["config", "core.autocrlf", "false"]);

    std::fs::write(p.join("README.md"), "# fixture\n").unwrap();
    run(p, &["add", "."]);
    commit(p, "Initial commit", "2025-08-12T14:03:00");
    run(p, &["tag", BASE_TAG]);

    std::fs::write(p.join(BINARY_FILE), binary_bytes()).unwrap();
    run(p, &["add", "."]);
    commit(p, "Add binary file", "2025-08-13T09:12:00");

    run(p, &["rm", "-q", BINARY_FILE]);
    commit(p, "Removing binary file", "2025-08-14T10:00:00");

    std::fs::write(p.join("TESTING.md"), "Run the integration tests against the fixture tags.\n").unwrap();
    run(p, &["add", "."]);
    commit(p, "Add readme about testing integration with git", "2025-08-15T11:30:00");
    run(p, &["tag", COMPARE_TAG]);

    dir
}
