use tracing::debug;

use crate::error::{CheckError, Result};
use crate::util::run_git;

/// Marker `git branch` puts in front of the checked-out branch.
const CURRENT_MARKER: char = '*';

/// Name of the branch currently checked out in `repo`.
///
/// Fails with a resolution error on a detached HEAD or a repository without branches.
pub fn current_branch(repo: &str) -> Result<String> {
    let args: Vec<String> = vec!["branch".into(), "--no-color".into(), "--list".into()];
    let out = run_git(repo, &args).map_err(|e| CheckError::Resolution { id: "HEAD".into(), reason: e.reason() })?;
    parse_current_branch(&out).ok_or_else(|| CheckError::Resolution {
        id: "HEAD".into(),
        reason: "no branch is checked out (detached HEAD or empty repository)".into(),
    })
}

/// Picks the branch marked current out of `git branch` output.
pub fn parse_current_branch(output: &str) -> Option<String> {
    let line = output.lines().find(|l| l.starts_with(CURRENT_MARKER))?;
    let name = line.split_whitespace().nth(1)?;
    // "* (HEAD detached at 1a2b3c4)" / "* (no branch, rebasing main)"
    if name.starts_with('(') {
        return None;
    }
    Some(name.to_string())
}

/// Full commit id for `id`, or a resolution error naming `id`.
pub fn resolve_revision(repo: &str, id: &str) -> Result<String> {
    let args: Vec<String> = vec![
        "rev-parse".into(), "--verify".into(), "--quiet".into(), format!("{}^{{commit}}", id),
    ];
    let out = run_git(repo, &args).map_err(|e| CheckError::Resolution {
        id: id.to_string(),
        reason: match e {
            CheckError::Git { .. } => "not a valid commit id".into(),
            other => other.to_string(),
        },
    })?;
    let sha = out.trim().to_string();
    debug!(id, %sha, "resolved revision");
    Ok(sha)
}

/// Raw `git log --numstat` text for everything reachable from `head` but not from `base`.
///
/// Renames are disabled so every stat line names exactly one path. `--raw` adds a status
/// line per path ahead of the numstat lines, and the parser leaves out paths whose status
/// is a deletion. Commits that only delete files still print their header.
pub fn log_numstat(repo: &str, head: &str, base: &str) -> Result<String> {
    let range = format!("{}..{}", base, head);
    let args: Vec<String> = vec![
        "-c".into(), "log.showSignature=false".into(),
        "-c".into(), "core.quotepath=false".into(),
        "log".into(),
        "--raw".into(),
        "--numstat".into(),
        "--no-renames".into(),
        "--no-color".into(),
        "--format=format:%h %s".into(),
        range.clone(),
        "--".into(),
    ];
    run_git(repo, &args).map_err(|e| CheckError::RangeQuery { range, reason: e.reason() })
}
