//! SQL schema for the flowfield SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Scores are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS scores (
    seq         INTEGER PRIMARY KEY AUTOINCREMENT,  -- insertion order
    score_id    TEXT NOT NULL UNIQUE,
    name        TEXT NOT NULL,
    score       REAL NOT NULL,
    map         TEXT NOT NULL
                CHECK (map IN ('dual vision', 'clockback', 'curl valley')),
    recorded_at TEXT NOT NULL                       -- ISO 8601 UTC
);

-- Serves the per-map ranking as one directed range scan: equality on map,
-- then score descending, then insertion order for ties.
CREATE INDEX IF NOT EXISTS scores_map_score_idx
    ON scores(map, score DESC, seq);

PRAGMA user_version = 1;
";

/// Per-map ranking. `?1` is the map identifier, `?2` the row limit.
pub const TOP_BY_MAP: &str = "
SELECT score_id, name, score, map, recorded_at
FROM scores
WHERE map = ?1
ORDER BY score DESC, seq ASC
LIMIT ?2";
