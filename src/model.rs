// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Per-commit record produced by the log parser and consumed by reporters
// role: model/types
// outputs: CommitRecord
// invariants: binaries holds only added/modified paths (deletions filtered upstream), in log order
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::Serialize;

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct CommitRecord {
  /// Abbreviated commit id; `None` only for a degenerate (empty) log chunk.
  pub id: Option<String>,
  /// Subject line, possibly empty.
  pub message: String,
  /// Paths git classified as binary in this commit.
  pub binaries: Vec<String>,
}

impl CommitRecord {
  pub fn has_binaries(&self) -> bool {
    !self.binaries.is_empty()
  }

  /// Id for display; degenerate records show as `unknown`.
  pub fn display_id(&self) -> &str {
    self.id.as_deref().unwrap_or("unknown")
  }
}
