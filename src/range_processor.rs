// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Resolve the compare/base pair, fetch the commit range and feed it to the chosen reporter
// role: processing/orchestrator
// inputs: EffectiveConfig, output writer
// outputs: Report on the writer; RunSummary
// side_effects: Reads git; writes to the writer
// invariants:
// - both endpoints are resolved before the log query runs
// - the fetch completes before the first commit is reported
// errors: Resolution errors name the endpoint; RangeQuery errors name the range; nothing is retried
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;

use tracing::info;

use crate::cli::EffectiveConfig;
use crate::commit::fetch_range;
use crate::error::Result;
use crate::gitio;
use crate::render::{report, CiOptions, Reporter, RunSummary};

pub fn process_range<W: Write>(cfg: &EffectiveConfig, out: W) -> Result<RunSummary> {
  let compare = match &cfg.compare {
    Some(c) => c.clone(),
    None => gitio::current_branch(&cfg.repo)?,
  };

  gitio::resolve_revision(&cfg.repo, &compare)?;
  gitio::resolve_revision(&cfg.repo, &cfg.base)?;

  let commits = fetch_range(&cfg.repo, &compare, &cfg.base)?;
  info!(compare = %compare, base = %cfg.base, commits = commits.len(), "checking commits");

  let options = CiOptions { build_problem: cfg.build_problem, severity: cfg.severity };
  let mut reporter = Reporter::new(cfg.reporter, out, cfg.color, options);
  let summary = report(&commits, &mut reporter)?;

  info!(
    commits = summary.commits,
    commits_with_binaries = summary.commits_with_binaries,
    binaries = summary.binaries,
    "check complete"
  );
  Ok(summary)
}
