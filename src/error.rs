// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Typed failures for git resolution, range queries, process spawning and report output
// role: errors
// outputs: CheckError enum and Result alias
// invariants: Resolution and RangeQuery always name the offending identifier or range
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
  /// A revision or branch could not be resolved by git.
  #[error("could not resolve '{id}': {reason}")]
  Resolution { id: String, reason: String },

  /// The bulk `git log` query over a range failed.
  #[error("git log over '{range}' failed: {reason}")]
  RangeQuery { range: String, reason: String },

  #[error("failed to run git {args:?}: {source}")]
  Spawn {
    args: Vec<String>,
    #[source]
    source: std::io::Error,
  },

  #[error("git {args:?} exited with {status}: {stderr}")]
  Git { args: Vec<String>, status: String, stderr: String },

  #[error("failed to write report: {0}")]
  Output(#[from] std::io::Error),
}

impl CheckError {
  /// Human-readable cause used when wrapping a failed git invocation.
  pub fn reason(&self) -> String {
    match self {
      CheckError::Git { stderr, status, .. } if stderr.trim().is_empty() => format!("git exited with {}", status),
      CheckError::Git { stderr, .. } => stderr.trim().to_string(),
      other => other.to_string(),
    }
  }
}

pub type Result<T> = std::result::Result<T, CheckError>;
