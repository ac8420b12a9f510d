//! The leaderboard service: validates submissions, writes them through a
//! [`ScoreStore`], and assembles the per-map top-N view.
//!
//! The service holds no record state of its own. Every fetch recomputes the
//! rankings from one indexed range query per map, which keeps the write path
//! a plain append.

use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::{
  error::ValidationError,
  map::MapId,
  score::ScoreRecord,
  store::ScoreStore,
};

/// Length of every per-map ranking.
pub const TOP_N: usize = 5;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Failure of a leaderboard operation, generic over the backend's error.
#[derive(Debug, Error)]
pub enum LeaderboardError<E> {
  /// The submission broke the schema. Nothing was persisted.
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("storage error: {0}")]
  Storage(#[source] E),
}

// ─── TopScores ───────────────────────────────────────────────────────────────

/// The top-N view: every map, in declaration order, mapped to its highest
/// scores in descending order.
///
/// Maps without submissions are present with an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopScores(BTreeMap<MapId, Vec<ScoreRecord>>);

impl TopScores {
  /// The ranking for `map`; empty if nothing was recorded on it.
  pub fn get(&self, map: MapId) -> &[ScoreRecord] {
    self.0.get(&map).map(Vec::as_slice).unwrap_or_default()
  }

  pub fn iter(&self) -> impl Iterator<Item = (MapId, &[ScoreRecord])> {
    self.0.iter().map(|(map, scores)| (*map, scores.as_slice()))
  }
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// Leaderboard operations over a shared store handle.
///
/// Cloning is cheap — the store is reference-counted.
pub struct Leaderboard<S> {
  store: Arc<S>,
}

impl<S> Clone for Leaderboard<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: ScoreStore> Leaderboard<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub fn store(&self) -> &S { &self.store }

  /// Validate an untyped submission and persist it.
  ///
  /// Validation runs before any write, so a rejected submission leaves the
  /// store untouched.
  pub async fn submit_score(
    &self,
    input: &Value,
  ) -> Result<Uuid, LeaderboardError<S::Error>> {
    let record = ScoreRecord::from_json(input).inspect_err(|e| {
      tracing::warn!(error = %e, "rejected score submission");
    })?;
    let map = record.map();

    let score_id = self
      .store
      .insert(record)
      .await
      .map_err(LeaderboardError::Storage)?;

    tracing::debug!(%score_id, %map, "recorded score");
    Ok(score_id)
  }

  /// The top [`TOP_N`] scores of every map.
  pub async fn fetch_top_scores(
    &self,
  ) -> Result<TopScores, LeaderboardError<S::Error>> {
    let mut top = BTreeMap::new();
    for map in MapId::all() {
      let scores = self
        .store
        .query_top_by_map(map, TOP_N)
        .await
        .map_err(LeaderboardError::Storage)?;
      tracing::trace!(%map, count = scores.len(), "fetched ranking");
      top.insert(map, scores.into_iter().map(|s| s.record).collect());
    }
    Ok(TopScores(top))
  }
}
