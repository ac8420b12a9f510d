//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use flowfield_core::{LeaderboardError, ValidationError};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The request body could not be read as JSON at all.
  #[error("bad request: {0}")]
  BadRequest(String),

  /// The body was JSON but broke the score schema.
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl<E> From<LeaderboardError<E>> for ApiError
where
  E: std::error::Error + Send + Sync + 'static,
{
  fn from(err: LeaderboardError<E>) -> Self {
    match err {
      LeaderboardError::Validation(v) => ApiError::Validation(v),
      LeaderboardError::Storage(e) => ApiError::Store(Box::new(e)),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Validation(v) => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "validation failed", "issues": v.issues })),
      )
        .into_response(),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "score store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": e.to_string() })))
          .into_response()
      }
    }
  }
}
