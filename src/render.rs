// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Dispatch ordered CommitRecords to the console or TeamCity reporter
// role: rendering/output
// inputs: &[CommitRecord], Reporter chosen once at startup
// outputs: Human-readable lines or service messages on the reporter's writer; RunSummary
// side_effects: Writes and flushes the reporter's writer after every commit
// invariants:
// - commits are rendered strictly in input order, one fully flushed before the next
// - inspectionType is emitted at most once per run, and only if some commit has binaries
// - setParameter/buildProblem are emitted once, after the last commit, only if findings exist
// errors: Output errors from the writer propagate as CheckError::Output
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::CommitRecord;
use crate::service_messages::{ServiceMessage, Severity};

pub const INSPECTION_ID: &str = "lfs-check.binary-file";
pub const INSPECTION_NAME: &str = "Binary file committed directly";
pub const INSPECTION_CATEGORY: &str = "Git LFS";
pub const INSPECTION_DESCRIPTION: &str = "Binary files must be tracked with Git LFS instead of being committed to history";
pub const BINARY_ERRORS_PARAMETER: &str = "env.LFS_CHECK_BINARY_FILES";
pub const BUILD_PROBLEM_DESCRIPTION: &str = "Binary files were committed without Git LFS";

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReporterKind {
  /// Plain text for humans
  Console,
  /// TeamCity service messages
  Ci,
}

#[derive(Debug, Clone, Copy)]
pub struct CiOptions {
  pub build_problem: bool,
  pub severity: Severity,
}

/// Run-wide accumulator for the CI reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectionState {
  pub registered: bool,
  pub findings: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
  pub commits: usize,
  pub commits_with_binaries: usize,
  pub binaries: usize,
}

/// Messages for a single commit, updating `state`.
pub fn ci_messages(commit: &CommitRecord, state: &mut InspectionState, severity: Severity) -> Vec<ServiceMessage> {
  let mut messages = Vec::new();
  if !commit.has_binaries() {
    return messages;
  }

  if !state.registered {
    messages.push(ServiceMessage::InspectionType {
      id: INSPECTION_ID.into(),
      name: INSPECTION_NAME.into(),
      category: INSPECTION_CATEGORY.into(),
      description: INSPECTION_DESCRIPTION.into(),
    });
    state.registered = true;
  }

  for path in &commit.binaries {
    messages.push(ServiceMessage::Inspection {
      type_id: INSPECTION_ID.into(),
      message: format!("Binary file {} was committed directly in {}", path, commit.display_id()),
      file: path.clone(),
      severity,
    });
    state.findings += 1;
  }

  messages
}

/// Messages closing a run; empty when nothing was found.
pub fn closing_messages(state: &InspectionState, build_problem: bool) -> Vec<ServiceMessage> {
  if state.findings == 0 {
    return Vec::new();
  }
  let mut messages = vec![ServiceMessage::SetParameter { name: BINARY_ERRORS_PARAMETER.into(), value: "true".into() }];
  if build_problem {
    messages.push(ServiceMessage::BuildProblem { description: BUILD_PROBLEM_DESCRIPTION.into() });
  }
  messages
}

pub struct ConsoleReporter<W: Write> {
  out: W,
  color: bool,
}

impl<W: Write> ConsoleReporter<W> {
  pub fn new(out: W, color: bool) -> Self {
    Self { out, color }
  }

  fn highlight(&self, text: String) -> String {
    if self.color { text.red().to_string() } else { text }
  }

  fn report_commit(&mut self, commit: &CommitRecord) -> Result<()> {
    writeln!(self.out, "{} {}", commit.display_id(), commit.message)?;
    if commit.has_binaries() {
      let header = self.highlight("Binary files found:".to_string());
      writeln!(self.out, "{}", header)?;
      for path in &commit.binaries {
        let line = self.highlight(format!("  {}", path));
        writeln!(self.out, "{}", line)?;
      }
    }
    self.out.flush()?;
    Ok(())
  }
}

pub struct CiReporter<W: Write> {
  out: W,
  state: InspectionState,
  options: CiOptions,
}

impl<W: Write> CiReporter<W> {
  pub fn new(out: W, options: CiOptions) -> Self {
    Self { out, state: InspectionState::default(), options }
  }

  fn write_all(&mut self, messages: &[ServiceMessage]) -> Result<()> {
    for m in messages {
      writeln!(self.out, "{}", m)?;
    }
    self.out.flush()?;
    Ok(())
  }

  fn report_commit(&mut self, commit: &CommitRecord) -> Result<()> {
    let messages = ci_messages(commit, &mut self.state, self.options.severity);
    self.write_all(&messages)
  }

  fn finish(&mut self) -> Result<()> {
    let messages = closing_messages(&self.state, self.options.build_problem);
    self.write_all(&messages)
  }
}

pub enum Reporter<W: Write> {
  Console(ConsoleReporter<W>),
  Ci(CiReporter<W>),
}

impl<W: Write> Reporter<W> {
  pub fn new(kind: ReporterKind, out: W, color: bool, options: CiOptions) -> Self {
    match kind {
      ReporterKind::Console => Reporter::Console(ConsoleReporter::new(out, color)),
      ReporterKind::Ci => Reporter::Ci(CiReporter::new(out, options)),
    }
  }

  pub fn report_commit(&mut self, commit: &CommitRecord) -> Result<()> {
    match self {
      Reporter::Console(r) => r.report_commit(commit),
      Reporter::Ci(r) => r.report_commit(commit),
    }
  }

  pub fn finish(&mut self) -> Result<()> {
    match self {
      Reporter::Console(r) => {
        r.out.flush()?;
        Ok(())
      }
      Reporter::Ci(r) => r.finish(),
    }
  }

  #[cfg(test)]
  pub fn into_inner(self) -> W {
    match self {
      Reporter::Console(r) => r.out,
      Reporter::Ci(r) => r.out,
    }
  }
}

/// Render `commits` in order through `reporter`, then close the run.
pub fn report<W: Write>(commits: &[CommitRecord], reporter: &mut Reporter<W>) -> Result<RunSummary> {
  let mut summary = RunSummary::default();
  for commit in commits {
    reporter.report_commit(commit)?;
    summary.commits += 1;
    if commit.has_binaries() {
      summary.commits_with_binaries += 1;
      summary.binaries += commit.binaries.len();
    }
  }
  reporter.finish()?;
  Ok(summary)
}
