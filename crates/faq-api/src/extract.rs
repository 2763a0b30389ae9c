//! Validating extractors for request bodies and path identifiers.

use axum::{
  Json,
  extract::{FromRequest, FromRequestParts, Path, Request},
  http::request::Parts,
};
use faq_core::input::Validate;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Deserialise a JSON body and run its [`Validate`] rules.
///
/// Any failure (wrong content type, malformed JSON, missing field, wrong
/// type, out-of-range value) is rejected with [`ApiError::Validation`]
/// before the handler runs.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
  S: Send + Sync,
  T: DeserializeOwned + Validate,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let Json(value) = Json::<T>::from_request(req, state)
      .await
      .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    value.validate().map_err(ApiError::from_store)?;
    Ok(Self(value))
  }
}

/// Extract a single integer identifier from the path.
///
/// A segment that does not parse as `i64` is rejected with
/// [`ApiError::Validation`], so it gets the same JSON error body as any other
/// invalid input.
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    let Path(id) = Path::<i64>::from_request_parts(parts, state)
      .await
      .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    Ok(Self(id))
  }
}
