//! Handlers for `/subjects` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/subjects` | Newest first |
//! | `GET`    | `/subjects/{id}` | Subject with its topics; 404 if not found |
//! | `POST`   | `/subjects/create` | Body: `{"title":"..."}`; 400 if the title is taken |
//! | `PUT`    | `/subjects/edit/{id}` | Body: `{"title":"..."}`; 404 if not found |
//! | `DELETE` | `/subjects/delete/{id}` | Deletes owned topics too; 404 if not found |

use std::sync::Arc;

use axum::{Json, extract::State};
use faq_core::{
  input::SubjectInput,
  store::CatalogStore,
  subject::{Subject, SubjectWithTopics},
};

use crate::{
  SUCCESS,
  error::ApiError,
  extract::{IdPath, ValidJson},
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /subjects`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Subject>>, ApiError>
where
  S: CatalogStore,
{
  let subjects = store.list_subjects().await.map_err(ApiError::from_store)?;
  Ok(Json(subjects))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /subjects/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  IdPath(id): IdPath,
) -> Result<Json<SubjectWithTopics>, ApiError>
where
  S: CatalogStore,
{
  let subject = store.get_subject(id).await.map_err(ApiError::from_store)?;
  Ok(Json(subject))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /subjects/create` — body: `{"title":"Math"}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  ValidJson(body): ValidJson<SubjectInput>,
) -> Result<Json<Subject>, ApiError>
where
  S: CatalogStore,
{
  let subject = store
    .create_subject(body)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(subject))
}

// ─── Edit ─────────────────────────────────────────────────────────────────────

/// `PUT /subjects/edit/{id}` — body: `{"title":"Math"}`
pub async fn edit<S>(
  State(store): State<Arc<S>>,
  IdPath(id): IdPath,
  ValidJson(body): ValidJson<SubjectInput>,
) -> Result<Json<Subject>, ApiError>
where
  S: CatalogStore,
{
  let subject = store
    .edit_subject(id, body)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(subject))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /subjects/delete/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  IdPath(id): IdPath,
) -> Result<Json<&'static str>, ApiError>
where
  S: CatalogStore,
{
  store.delete_subject(id).await.map_err(ApiError::from_store)?;
  Ok(Json(SUCCESS))
}
