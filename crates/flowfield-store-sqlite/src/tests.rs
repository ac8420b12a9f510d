//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::Utc;
use flowfield_core::{MapId, ScoreRecord, store::ScoreStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn record(name: &str, score: f64, map: MapId) -> ScoreRecord {
  ScoreRecord::new(name, score, map).expect("valid record")
}

async fn ranking(s: &SqliteStore, map: MapId, limit: usize) -> Vec<(String, f64)> {
  s.query_top_by_map(map, limit)
    .await
    .unwrap()
    .into_iter()
    .map(|sc| (sc.record.name().to_owned(), sc.record.score()))
    .collect()
}

// ─── Inserts ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_read_back() {
  let s = store().await;
  let before = Utc::now();

  let id = s.insert(record("AB", 100.0, MapId::DualVision)).await.unwrap();

  let top = s.query_top_by_map(MapId::DualVision, 5).await.unwrap();
  assert_eq!(top.len(), 1);
  assert_eq!(top[0].score_id, id);
  assert_eq!(top[0].record, record("AB", 100.0, MapId::DualVision));
  assert!(top[0].recorded_at >= before - chrono::Duration::seconds(1));
}

#[tokio::test]
async fn insert_assigns_distinct_ids() {
  let s = store().await;
  let a = s.insert(record("A", 1.0, MapId::Clockback)).await.unwrap();
  let b = s.insert(record("A", 1.0, MapId::Clockback)).await.unwrap();
  assert_ne!(a, b);
  assert_eq!(s.count(None).await.unwrap(), 2);
}

#[tokio::test]
async fn count_per_map() {
  let s = store().await;
  s.insert(record("A", 1.0, MapId::Clockback)).await.unwrap();
  s.insert(record("B", 2.0, MapId::Clockback)).await.unwrap();
  s.insert(record("C", 3.0, MapId::CurlValley)).await.unwrap();

  assert_eq!(s.count(None).await.unwrap(), 3);
  assert_eq!(s.count(Some(MapId::Clockback)).await.unwrap(), 2);
  assert_eq!(s.count(Some(MapId::CurlValley)).await.unwrap(), 1);
  assert_eq!(s.count(Some(MapId::DualVision)).await.unwrap(), 0);
}

#[tokio::test]
async fn fractional_and_negative_scores_roundtrip() {
  let s = store().await;
  s.insert(record("N", -12.75, MapId::CurlValley)).await.unwrap();
  s.insert(record("F", 0.125, MapId::CurlValley)).await.unwrap();

  assert_eq!(ranking(&s, MapId::CurlValley, 5).await, vec![
    ("F".to_owned(), 0.125),
    ("N".to_owned(), -12.75),
  ]);
}

// ─── Ranking ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn ranking_is_descending_and_limited() {
  let s = store().await;
  for score in [30.0, 10.0, 70.0, 50.0, 20.0, 60.0, 40.0] {
    s.insert(record("X", score, MapId::DualVision)).await.unwrap();
  }

  let scores: Vec<f64> = ranking(&s, MapId::DualVision, 5)
    .await
    .into_iter()
    .map(|(_, score)| score)
    .collect();
  assert_eq!(scores, vec![70.0, 60.0, 50.0, 40.0, 30.0]);
}

#[tokio::test]
async fn equal_scores_keep_insertion_order() {
  let s = store().await;
  s.insert(record("A", 10.0, MapId::Clockback)).await.unwrap();
  s.insert(record("B", 20.0, MapId::Clockback)).await.unwrap();
  s.insert(record("C", 10.0, MapId::Clockback)).await.unwrap();
  s.insert(record("D", 10.0, MapId::Clockback)).await.unwrap();

  let names: Vec<String> = ranking(&s, MapId::Clockback, 3)
    .await
    .into_iter()
    .map(|(name, _)| name)
    .collect();
  assert_eq!(names, vec!["B", "A", "C"]);
}

#[tokio::test]
async fn ranking_only_sees_its_own_map() {
  let s = store().await;
  s.insert(record("CB", 99.0, MapId::Clockback)).await.unwrap();

  assert!(ranking(&s, MapId::DualVision, 5).await.is_empty());
  assert!(ranking(&s, MapId::CurlValley, 5).await.is_empty());
  assert_eq!(ranking(&s, MapId::Clockback, 5).await.len(), 1);
}

#[tokio::test]
async fn zero_limit_returns_nothing() {
  let s = store().await;
  s.insert(record("A", 1.0, MapId::DualVision)).await.unwrap();
  assert!(ranking(&s, MapId::DualVision, 0).await.is_empty());
}

#[tokio::test]
async fn ranking_uses_the_composite_index() {
  let s = store().await;
  let plan = s.top_by_map_plan().await.unwrap();
  let plan = plan.join("\n");

  assert!(plan.contains("scores_map_score_idx"), "plan: {plan}");
  assert!(!plan.contains("TEMP B-TREE"), "ranking should not sort in memory: {plan}");
}

// ─── Concurrency and durability ──────────────────────────────────────────────

#[tokio::test]
async fn concurrent_inserts_are_all_persisted() {
  let s = store().await;
  let mut tasks = tokio::task::JoinSet::new();
  for i in 0..50 {
    let s = s.clone();
    let map = if i % 2 == 0 { MapId::DualVision } else { MapId::CurlValley };
    tasks.spawn(async move { s.insert(record("C", f64::from(i), map)).await });
  }
  while let Some(res) = tasks.join_next().await {
    res.unwrap().unwrap();
  }

  assert_eq!(s.count(None).await.unwrap(), 50);
  assert_eq!(s.count(Some(MapId::DualVision)).await.unwrap(), 25);
  let top: Vec<f64> = ranking(&s, MapId::CurlValley, 5)
    .await
    .into_iter()
    .map(|(_, score)| score)
    .collect();
  assert_eq!(top, vec![49.0, 47.0, 45.0, 43.0, 41.0]);
}

#[tokio::test]
async fn scores_survive_reopening_the_file() {
  let path = std::env::temp_dir().join(format!("flowfield-{}.db", uuid::Uuid::new_v4()));

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert(record("P", 42.0, MapId::Clockback)).await.unwrap();
  }

  let reopened = SqliteStore::open(&path).await.unwrap();
  assert_eq!(ranking(&reopened, MapId::Clockback, 5).await, vec![(
    "P".to_owned(),
    42.0
  )]);

  drop(reopened);
  for suffix in ["", "-wal", "-shm"] {
    let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
  }
}
