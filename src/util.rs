// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for paths, git subprocesses, logging setup and man page rendering
// role: utilities/helpers
// inputs: Paths; git argument vectors; clap CommandFactory
// outputs: Canonicalized paths, git stdout, man page text
// side_effects: run_git invokes subprocesses; init_logging installs the global subscriber
// invariants:
// - run_git never returns stdout of a failed command
// - log output goes to stderr, report output owns stdout
// errors: run_git surfaces args + exit status + stderr as CheckError
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::{Path, PathBuf};
use std::process::Command;

use clap::CommandFactory;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{CheckError, Result};

pub fn canonicalize_lossy<P: AsRef<Path>>(p: P) -> String {
  let p = p.as_ref();
  let pb: PathBuf = match std::fs::canonicalize(p) {
    Ok(x) => x,
    Err(_) => match std::env::current_dir() {
      Ok(cwd) => cwd.join(p),
      Err(_) => PathBuf::from(p),
    },
  };
  pb.to_string_lossy().to_string()
}

pub fn run_git(repo: &str, args: &[String]) -> Result<String> {
  debug!(repo, ?args, "running git");
  let out = Command::new("git")
    .args(args)
    .current_dir(repo)
    .output()
    .map_err(|source| CheckError::Spawn { args: args.to_vec(), source })?;

  if out.status.success() {
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
  } else {
    Err(CheckError::Git {
      args: args.to_vec(),
      status: out.status.to_string(),
      stderr: String::from_utf8_lossy(&out.stderr).to_string(),
    })
  }
}

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `warn`, or `debug` when verbose.
pub fn init_logging(verbose: bool) {
  let default = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  let _ = fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
