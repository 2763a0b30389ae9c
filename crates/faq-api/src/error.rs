//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use faq_core::{Error, StoreError};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  /// A uniqueness precondition failed. Reported as 400, not 409.
  #[error("bad request: {0}")]
  BadRequest(String),

  /// The request body is malformed or out of range.
  #[error("validation failed: {0}")]
  Validation(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Translate a store failure 1:1 into its HTTP class.
  pub fn from_store<E: StoreError>(err: E) -> Self {
    match err.domain() {
      Some(e @ (Error::SubjectNotFound(_) | Error::TopicNotFound(_))) => {
        ApiError::NotFound(e.to_string())
      }
      Some(e @ (Error::SubjectExists(_) | Error::TopicExists(_))) => {
        ApiError::BadRequest(e.to_string())
      }
      Some(e @ Error::Invalid(_)) => ApiError::Validation(e.to_string()),
      None => ApiError::Store(Box::new(err)),
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let message = match &self {
      ApiError::NotFound(m) | ApiError::BadRequest(m) | ApiError::Validation(m) => {
        m.clone()
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        e.to_string()
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
