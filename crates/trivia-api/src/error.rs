//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure renders one of four fixed bodies:
//! `{"success": false, "error": <status>, "message": <reason phrase>}`.
//! The underlying cause is logged, never sent to the client.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Malformed or missing request input.
  #[error("bad request: {0}")]
  BadRequest(String),

  /// The addressed question or category does not exist.
  #[error("not found: {0}")]
  NotFound(String),

  /// Well-formed request the store (or the field types) refused.
  #[error("unprocessable: {0}")]
  Unprocessable(#[source] BoxError),

  #[error("internal error: {0}")]
  Internal(#[source] BoxError),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// Fixed client-facing message for this kind of failure.
  pub fn message(&self) -> &'static str {
    match self {
      ApiError::BadRequest(_) => "Bad Request",
      ApiError::NotFound(_) => "Not Found",
      ApiError::Unprocessable(_) => "Unprocessable Entity",
      ApiError::Internal(_) => "Internal Server Error",
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    match &self {
      ApiError::BadRequest(_) | ApiError::NotFound(_) => {
        tracing::debug!(error = %self, "request rejected")
      }
      ApiError::Unprocessable(_) => tracing::warn!(error = %self, "write refused"),
      ApiError::Internal(_) => tracing::error!(error = %self, "request failed"),
    }
    let body = json!({
      "success": false,
      "error":   status.as_u16(),
      "message": self.message(),
    });
    (status, Json(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
    let resp = err.into_response();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[tokio::test]
  async fn each_kind_renders_fixed_body() {
    let io = || Box::new(std::io::Error::other("disk on fire"));
    let cases = [
      (ApiError::BadRequest("x".into()), 400, "Bad Request"),
      (ApiError::NotFound("y".into()), 404, "Not Found"),
      (ApiError::Unprocessable(io()), 422, "Unprocessable Entity"),
      (ApiError::Internal(io()), 500, "Internal Server Error"),
    ];
    for (err, code, message) in cases {
      let (status, body) = body_of(err).await;
      assert_eq!(status.as_u16(), code);
      assert_eq!(
        body,
        json!({ "success": false, "error": code, "message": message })
      );
    }
  }

  #[tokio::test]
  async fn cause_is_not_leaked() {
    let err = ApiError::Internal(Box::new(std::io::Error::other("secret path /var/db")));
    let (_, body) = body_of(err).await;
    assert!(!body.to_string().contains("secret"));
  }
}
