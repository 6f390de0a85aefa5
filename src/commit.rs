// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Turn `git log --raw --numstat` text into ordered CommitRecords with their binary paths
// role: parsing
// inputs: repo path, compare and base revisions; raw log text
// outputs: Vec<CommitRecord> in git's log order
// side_effects: fetch_range reads git
// invariants:
// - chunk order and record order are identical; nothing is sorted, merged or dropped
// - a binary path is everything after the `-\t-\t` sentinel, verbatim
// - paths the raw status marks as deleted are never binaries of that commit
// - malformed chunks become empty records instead of errors
// errors: fetch_range propagates RangeQuery errors from gitio
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::Result;
use crate::gitio;
use crate::model::CommitRecord;

/// Numstat prefix git emits instead of line counts for binary content.
pub const BINARY_SENTINEL: &str = "-\t-\t";

static NUMSTAT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\d+|-)\t(?:\d+|-)\t").expect("numstat regex"));

// :100644 000000 1a2b3c4 0000000 D\tpath
static RAW_LINE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^:[0-7]+ [0-7]+ \S+ \S+ ([A-Z])[0-9]*\t(.*)$").expect("raw status regex"));

/// One commit's worth of raw log lines: a header followed by its raw status and numstat lines.
pub type LogChunk = String;

fn is_stat_line(line: &str) -> bool {
  line.starts_with(':') || NUMSTAT_LINE.is_match(line)
}

/// Path named by a raw status line whose status is a deletion.
fn deleted_path(line: &str) -> Option<&str> {
  let caps = RAW_LINE.captures(line)?;
  match caps.get(1)?.as_str() {
    "D" => caps.get(2).map(|m| m.as_str()),
    _ => None,
  }
}

/// Split raw log output into per-commit chunks.
///
/// Blank lines between commits are skipped and every header line opens a new chunk. Merge
/// commits and commits with no diff print only a header, and must not absorb the header
/// that follows them.
pub fn split_chunks(raw: &str) -> Vec<LogChunk> {
  let mut chunks: Vec<Vec<&str>> = Vec::new();

  for line in raw.lines().filter(|l| !l.trim().is_empty()) {
    if !is_stat_line(line) {
      chunks.push(vec![line]);
      continue;
    }
    match chunks.last_mut() {
      Some(chunk) => chunk.push(line),
      None => debug!(line, "stat line before any header; skipped"),
    }
  }

  chunks.into_iter().map(|lines| lines.join("\n")).collect()
}

/// Parse one chunk into a record.
///
/// The header is `<id> <subject>`, split on the first space only. A chunk with no
/// non-empty lines yields a record without an id. Binary paths that the chunk's raw status
/// lines mark as deleted are left out.
pub fn parse_chunk(text: &str) -> CommitRecord {
  let mut lines = text.lines().filter(|l| !l.is_empty());

  let header = match lines.next() {
    Some(h) => h,
    None => {
      warn!("empty log chunk; treating as a commit without changes");
      return CommitRecord::default();
    }
  };

  let (id, message) = match header.split_once(' ') {
    Some((id, rest)) => (id, rest.trim()),
    None => (header, ""),
  };

  let body: Vec<&str> = lines.collect();
  let deleted: HashSet<&str> = body.iter().filter_map(|line| deleted_path(line)).collect();

  let binaries = body
    .iter()
    .filter_map(|line| line.strip_prefix(BINARY_SENTINEL))
    .filter(|path| !path.is_empty() && !deleted.contains(path))
    .map(String::from)
    .collect();

  CommitRecord { id: Some(id.to_string()), message: message.to_string(), binaries }
}

/// Records for every commit reachable from `head` but not from `base`, in log order.
pub fn fetch_range(repo: &str, head: &str, base: &str) -> Result<Vec<CommitRecord>> {
  let raw = gitio::log_numstat(repo, head, base)?;
  let commits: Vec<CommitRecord> = split_chunks(&raw).iter().map(|c| parse_chunk(c)).collect();
  debug!(head, base, count = commits.len(), "parsed commit range");
  Ok(commits)
}
