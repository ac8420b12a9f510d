//! [`SqliteStore`] — the SQLite implementation of [`ScoreStore`].

use std::path::Path;

use chrono::Utc;
use flowfield_core::{MapId, Score, ScoreRecord, store::ScoreStore};
use uuid::Uuid;

use crate::{
  Result,
  encode::{RawScore, encode_dt, encode_map, encode_uuid},
  schema::{SCHEMA, TOP_BY_MAP},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A score store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All clones
/// share one connection thread, which executes calls one at a time, so each
/// insert is atomic with respect to every other call on the handle.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// `EXPLAIN QUERY PLAN` details for the per-map ranking query.
  #[cfg(test)]
  pub(crate) async fn top_by_map_plan(&self) -> Result<Vec<String>> {
    let plan = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!("EXPLAIN QUERY PLAN {TOP_BY_MAP}"))?;
        let rows = stmt
          .query_map(rusqlite::params!["clockback", 5_i64], |row| row.get(3))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(plan)
  }
}

// ─── ScoreStore impl ─────────────────────────────────────────────────────────

impl ScoreStore for SqliteStore {
  type Error = crate::Error;

  async fn insert(&self, record: ScoreRecord) -> Result<Uuid> {
    let score_id = Uuid::new_v4();

    let id_str = encode_uuid(score_id);
    let at_str = encode_dt(Utc::now());
    let name   = record.name().to_owned();
    let score  = record.score();
    let map    = encode_map(record.map());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO scores (score_id, name, score, map, recorded_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, name, score, map, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(score_id)
  }

  async fn query_top_by_map(&self, map: MapId, limit: usize) -> Result<Vec<Score>> {
    let map_str   = encode_map(map);
    let limit_val = i64::try_from(limit).unwrap_or(i64::MAX);

    let raws: Vec<RawScore> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(TOP_BY_MAP)?;
        let rows = stmt
          .query_map(rusqlite::params![map_str, limit_val], RawScore::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawScore::into_score).collect()
  }

  async fn count(&self, map: Option<MapId>) -> Result<u64> {
    let map_str = map.map(encode_map);

    let n: i64 = self
      .conn
      .call(move |conn| {
        let n = match map_str {
          Some(m) => conn.query_row(
            "SELECT COUNT(*) FROM scores WHERE map = ?1",
            rusqlite::params![m],
            |r| r.get(0),
          )?,
          None => conn.query_row("SELECT COUNT(*) FROM scores", [], |r| r.get(0))?,
        };
        Ok(n)
      })
      .await?;

    Ok(n.unsigned_abs())
  }
}
