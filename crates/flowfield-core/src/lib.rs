//! Core types and trait definitions for the flowfield leaderboard.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::ScoreStore`]; the HTTP layer drives
//! the [`leaderboard::Leaderboard`] service.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod leaderboard;
pub mod map;
pub mod score;
pub mod store;

pub use error::{Error, Field, FieldIssue, Result, ValidationError};
pub use leaderboard::{Leaderboard, LeaderboardError, TOP_N, TopScores};
pub use map::MapId;
pub use score::{Score, ScoreRecord};
