//! The `ScoreStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `flowfield-store-sqlite`). The [`crate::Leaderboard`] service depends on
//! this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{map::MapId, score::{Score, ScoreRecord}};

/// Abstraction over a score store backend.
///
/// The store is append-only: records are inserted once and never updated or
/// deleted. Rankings are computed at read time, so concurrent writers never
/// race on shared derived state.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ScoreStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append a validated record and return its store-assigned id.
  ///
  /// The insert is atomic: a concurrent reader sees either the whole record
  /// or nothing.
  fn insert(
    &self,
    record: ScoreRecord,
  ) -> impl Future<Output = Result<Uuid, Self::Error>> + Send + '_;

  /// Up to `limit` records for `map`, highest score first. Equal scores are
  /// returned in insertion order.
  fn query_top_by_map(
    &self,
    map: MapId,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Score>, Self::Error>> + Send + '_;

  /// Number of stored records, across all maps or for a single one.
  fn count(
    &self,
    map: Option<MapId>,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
