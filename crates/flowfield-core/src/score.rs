//! Score records — the only entity of the leaderboard.
//!
//! A record is created exactly once, from a validated submission, and is
//! never updated or deleted afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

use crate::{
  MapId,
  error::{Field, FieldIssue, ValidationError},
};

/// Names are arcade-style initials, measured in UTF-16 code units so that a
/// single astral-plane character counts as two.
pub const MAX_NAME_LEN: usize = 2;

/// Largest magnitude at which every integer is exactly representable in an
/// `f64` (JavaScript's `Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// ─── ScoreRecord ─────────────────────────────────────────────────────────────

/// A validated `(name, score, map)` triple.
///
/// Fields are private so that every instance has passed the schema checks;
/// build one with [`ScoreRecord::new`] or [`ScoreRecord::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct ScoreRecord {
  name:  String,
  #[serde(serialize_with = "serialize_score")]
  score: f64,
  map:   MapId,
}

impl ScoreRecord {
  pub fn new(
    name: impl Into<String>,
    score: f64,
    map: MapId,
  ) -> Result<Self, ValidationError> {
    let name = name.into();
    let mut issues = Vec::new();
    if let Err(msg) = check_name(&name) {
      issues.push(FieldIssue::new(Field::Name, msg));
    }
    if let Err(msg) = check_score(score) {
      issues.push(FieldIssue::new(Field::Score, msg));
    }
    if issues.is_empty() {
      Ok(Self { name, score, map })
    } else {
      Err(ValidationError { issues })
    }
  }

  /// Validate an untyped JSON submission.
  ///
  /// Every field is checked so the error lists all problems at once. Keys
  /// other than `name`, `score` and `map` are ignored.
  pub fn from_json(input: &Value) -> Result<Self, ValidationError> {
    let Some(obj) = input.as_object() else {
      return Err(ValidationError::single(
        Field::Body,
        format!("expected an object, got {}", json_kind(Some(input))),
      ));
    };

    let mut issues = Vec::new();

    let name = collect(&mut issues, Field::Name, match obj.get("name") {
      Some(Value::String(s)) => check_name(s).map(|()| s.clone()),
      other => Err(expected("a string", other)),
    });

    let score = collect(&mut issues, Field::Score, match obj.get("score") {
      Some(Value::Number(n)) => n
        .as_f64()
        .ok_or_else(|| format!("{n} is not representable as a float"))
        .and_then(|v| check_score(v).map(|()| v)),
      other => Err(expected("a number", other)),
    });

    let map = collect(&mut issues, Field::Map, match obj.get("map") {
      Some(Value::String(s)) => MapId::from_id(s)
        .map_err(|_| format!("{s:?} is not one of {}", MapId::expected_ids())),
      other => Err(expected("a string", other)),
    });

    match (name, score, map) {
      (Some(name), Some(score), Some(map)) => Ok(Self { name, score, map }),
      _ => Err(ValidationError { issues }),
    }
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn score(&self) -> f64 { self.score }

  pub fn map(&self) -> MapId { self.map }
}

impl TryFrom<Value> for ScoreRecord {
  type Error = ValidationError;

  fn try_from(value: Value) -> Result<Self, Self::Error> {
    Self::from_json(&value)
  }
}

fn check_name(name: &str) -> Result<(), String> {
  let len = name.encode_utf16().count();
  if len > MAX_NAME_LEN {
    return Err(format!(
      "must be at most {MAX_NAME_LEN} UTF-16 code units, got {len}"
    ));
  }
  Ok(())
}

fn check_score(score: f64) -> Result<(), String> {
  if !score.is_finite() {
    return Err(format!("must be a finite number, got {score}"));
  }
  Ok(())
}

/// Integral scores go out as JSON integers (`100`, not `100.0`), matching how
/// clients submitted them.
fn serialize_score<S: Serializer>(score: &f64, s: S) -> Result<S::Ok, S::Error> {
  if score.fract() == 0.0 && score.abs() <= MAX_SAFE_INTEGER {
    s.serialize_i64(*score as i64)
  } else {
    s.serialize_f64(*score)
  }
}

/// Record the issue for `field` if `checked` failed.
fn collect<T>(
  issues: &mut Vec<FieldIssue>,
  field: Field,
  checked: Result<T, String>,
) -> Option<T> {
  checked
    .map_err(|msg| issues.push(FieldIssue::new(field, msg)))
    .ok()
}

fn expected(what: &str, got: Option<&Value>) -> String {
  format!("expected {what}, got {}", json_kind(got))
}

fn json_kind(value: Option<&Value>) -> &'static str {
  match value {
    None => "nothing",
    Some(Value::Null) => "null",
    Some(Value::Bool(_)) => "a boolean",
    Some(Value::Number(_)) => "a number",
    Some(Value::String(_)) => "a string",
    Some(Value::Array(_)) => "an array",
    Some(Value::Object(_)) => "an object",
  }
}

// ─── Score ───────────────────────────────────────────────────────────────────

/// A persisted [`ScoreRecord`] together with the metadata assigned by the
/// store at insert time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
  pub score_id:    Uuid,
  /// Server-assigned timestamp; never changes after creation.
  pub recorded_at: DateTime<Utc>,
  #[serde(flatten)]
  pub record:      ScoreRecord,
}
