//! Error types for `flowfield-core`.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown map identifier: {0:?}")]
  UnknownMap(String),

  #[error("invalid score record: {0}")]
  Validation(#[from] ValidationError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// ─── Validation ──────────────────────────────────────────────────────────────

/// The part of a score submission an issue refers to.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Field {
  /// The submission as a whole (e.g. not a JSON object).
  Body,
  Name,
  Score,
  Map,
}

/// One schema violation in a score submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
  pub field:   Field,
  pub message: String,
}

impl FieldIssue {
  pub fn new(field: Field, message: impl Into<String>) -> Self {
    Self { field, message: message.into() }
  }
}

/// A submission rejected at the schema boundary. Carries every offending
/// field, not just the first one found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("invalid score submission: {}", join_issues(.issues))]
pub struct ValidationError {
  pub issues: Vec<FieldIssue>,
}

impl ValidationError {
  pub fn single(field: Field, message: impl Into<String>) -> Self {
    Self { issues: vec![FieldIssue::new(field, message)] }
  }

  /// Whether any issue concerns `field`.
  pub fn has_issue(&self, field: Field) -> bool {
    self.issues.iter().any(|i| i.field == field)
  }
}

fn join_issues(issues: &[FieldIssue]) -> String {
  issues
    .iter()
    .map(|i| format!("{}: {}", i.field, i.message))
    .collect::<Vec<_>>()
    .join("; ")
}
