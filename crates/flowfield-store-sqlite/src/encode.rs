//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, UUIDs as hyphenated lowercase
//! strings, and maps by their wire identifier.

use chrono::{DateTime, Utc};
use flowfield_core::{MapId, Score, ScoreRecord};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── MapId ────────────────────────────────────────────────────────────────────

pub fn encode_map(map: MapId) -> &'static str { map.as_str() }

pub fn decode_map(s: &str) -> Result<MapId> { Ok(MapId::from_id(s)?) }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `scores` row.
pub struct RawScore {
  pub score_id:    String,
  pub name:        String,
  pub score:       f64,
  pub map:         String,
  pub recorded_at: String,
}

impl RawScore {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      score_id:    row.get(0)?,
      name:        row.get(1)?,
      score:       row.get(2)?,
      map:         row.get(3)?,
      recorded_at: row.get(4)?,
    })
  }

  pub fn into_score(self) -> Result<Score> {
    let map = decode_map(&self.map)?;
    let record = ScoreRecord::new(self.name, self.score, map)
      .map_err(flowfield_core::Error::from)?;

    Ok(Score {
      score_id: decode_uuid(&self.score_id)?,
      recorded_at: decode_dt(&self.recorded_at)?,
      record,
    })
  }
}
