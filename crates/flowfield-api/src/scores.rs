//! Handlers for the score endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/newScore` | Body: `{"name","score","map"}`; 200 with empty body |
//! | `GET`  | `/topScores` | Every map → up to five scores, highest first |

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use flowfield_core::{Leaderboard, TopScores, store::ScoreStore};
use serde_json::Value;

use crate::error::ApiError;

// ─── Submit ───────────────────────────────────────────────────────────────────

/// `POST /newScore`
///
/// The body is read as untyped JSON regardless of `Content-Type` and handed
/// to the schema check as-is; nothing is coerced.
pub async fn new_score<S>(
  State(leaderboard): State<Leaderboard<S>>,
  body: Bytes,
) -> Result<StatusCode, ApiError>
where
  S: ScoreStore + 'static,
{
  let input: Value = serde_json::from_slice(&body)
    .map_err(|e| ApiError::BadRequest(format!("body is not valid JSON: {e}")))?;

  leaderboard.submit_score(&input).await?;
  Ok(StatusCode::OK)
}

// ─── Top scores ───────────────────────────────────────────────────────────────

/// `GET /topScores`
pub async fn top_scores<S>(
  State(leaderboard): State<Leaderboard<S>>,
) -> Result<Json<TopScores>, ApiError>
where
  S: ScoreStore + 'static,
{
  let top = leaderboard.fetch_top_scores().await?;
  Ok(Json(top))
}
