use anyhow::{bail, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::render::ReporterKind;
use crate::service_messages::Severity;
use crate::util;

/// Branch the compare revision is measured against when none is given.
pub const DEFAULT_BASE: &str = "master";

#[derive(Parser, Debug)]
#[command(
    name = "lfs-check",
    version,
    about = "Find binary files committed to Git history without Git LFS",
    long_about = None
)]
pub struct Cli {
  /// Commit or branch to check (default: the current branch)
  pub compare: Option<String>,

  /// Base commit; only commits reachable from COMPARE but not from BASE are checked
  #[arg(env = "LFS_CHECK_BASE", default_value = DEFAULT_BASE)]
  pub base: String,

  /// Output format
  #[arg(long, value_enum, default_value_t = ReporterKind::Console)]
  pub reporter: ReporterKind,

  /// Do not emit a TeamCity buildProblem when binaries are found (ci reporter)
  #[arg(long)]
  pub no_build_problem: bool,

  /// Severity attached to each inspection (ci reporter)
  #[arg(long, value_enum, default_value_t = Severity::Error)]
  pub severity: Severity,

  /// Path to a Git repository (default: current dir)
  #[arg(long, default_value = ".")]
  pub repo: PathBuf,

  /// Disable highlighting of binary files
  #[arg(long)]
  pub no_color: bool,

  /// Log git invocations and parsing details to stderr
  #[arg(short, long)]
  pub verbose: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EffectiveConfig {
  pub repo: String, // absolute path for stability
  pub compare: Option<String>,
  pub base: String,
  pub reporter: ReporterKind,
  pub build_problem: bool,
  pub severity: Severity,
  pub color: bool,
}

pub fn normalize(cli: Cli, stdout_is_terminal: bool) -> Result<EffectiveConfig> {
  if cli.base.trim().is_empty() {
    bail!("Base commit must not be empty");
  }
  if matches!(cli.compare.as_deref(), Some(c) if c.trim().is_empty()) {
    bail!("Commit to compare must not be empty");
  }

  let repo = util::canonicalize_lossy(&cli.repo);

  Ok(EffectiveConfig {
    repo,
    compare: cli.compare,
    base: cli.base,
    reporter: cli.reporter,
    build_problem: !cli.no_build_problem,
    severity: cli.severity,
    color: !cli.no_color && stdout_is_terminal && cli.reporter == ReporterKind::Console,
  })
}
