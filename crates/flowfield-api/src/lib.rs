//! JSON HTTP API for the flowfield leaderboard.
//!
//! Exposes an axum [`Router`] backed by a [`Leaderboard`] over any
//! [`ScoreStore`]. TLS, tracing layers and listener setup are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = flowfield_api::api_router(Leaderboard::new(Arc::new(store)));
//! ```

pub mod error;
pub mod scores;

use axum::{
  Router,
  routing::{get, post},
};
use flowfield_core::{Leaderboard, store::ScoreStore};

pub use error::ApiError;

/// Build the API router for `leaderboard`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(leaderboard: Leaderboard<S>) -> Router<()>
where
  S: ScoreStore + 'static,
{
  Router::new()
    .route("/newScore", post(scores::new_score::<S>))
    .route("/topScores", get(scores::top_scores::<S>))
    .with_state(leaderboard)
}

// ─── Integration tests ────────────────────────────────────────────────────────
