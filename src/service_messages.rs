// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Render the four TeamCity service messages the CI reporter emits
// role: protocol/encoding
// outputs: ServiceMessage enum with a one-line Display form
// invariants: every attribute value is escaped; one message never spans lines
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceMessage {
  InspectionType { id: String, name: String, category: String, description: String },
  Inspection { type_id: String, message: String, file: String, severity: Severity },
  SetParameter { name: String, value: String },
  BuildProblem { description: String },
}

/// Inspection severity as TeamCity spells it.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Info,
  Warning,
  Error,
}

impl Severity {
  pub fn as_str(&self) -> &'static str {
    match self {
      Severity::Info => "INFO",
      Severity::Warning => "WARNING",
      Severity::Error => "ERROR",
    }
  }
}

/// Escape a value for use inside `'...'` in a service message.
pub fn escape(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '|' => out.push_str("||"),
      '\'' => out.push_str("|'"),
      '\n' => out.push_str("|n"),
      '\r' => out.push_str("|r"),
      '[' => out.push_str("|["),
      ']' => out.push_str("|]"),
      '\u{0085}' => out.push_str("|x"),
      '\u{2028}' => out.push_str("|l"),
      '\u{2029}' => out.push_str("|p"),
      other => out.push(other),
    }
  }
  out
}

impl ServiceMessage {
  fn name(&self) -> &'static str {
    match self {
      ServiceMessage::InspectionType { .. } => "inspectionType",
      ServiceMessage::Inspection { .. } => "inspection",
      ServiceMessage::SetParameter { .. } => "setParameter",
      ServiceMessage::BuildProblem { .. } => "buildProblem",
    }
  }

  fn attributes(&self) -> Vec<(&'static str, &str)> {
    match self {
      ServiceMessage::InspectionType { id, name, category, description } => {
        vec![("id", id.as_str()), ("name", name.as_str()), ("category", category.as_str()), ("description", description.as_str())]
      }
      ServiceMessage::Inspection { type_id, message, file, severity } => {
        vec![("typeId", type_id.as_str()), ("message", message.as_str()), ("file", file.as_str()), ("SEVERITY", severity.as_str())]
      }
      ServiceMessage::SetParameter { name, value } => vec![("name", name.as_str()), ("value", value.as_str())],
      ServiceMessage::BuildProblem { description } => vec![("description", description.as_str())],
    }
  }
}

impl fmt::Display for ServiceMessage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "##teamcity[{}", self.name())?;
    for (key, value) in self.attributes() {
      write!(f, " {}='{}'", key, escape(value))?;
    }
    write!(f, "]")
  }
}
