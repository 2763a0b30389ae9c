//! Handlers for `/topics` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/topics` | Newest first |
//! | `GET`    | `/topics/{id}` | 404 if not found |
//! | `GET`    | `/topics/subject/{id}` | Topics of one subject; 404 if the subject is missing |
//! | `POST`   | `/topics/create` | Body: [`TopicInput`]; 400 if the title is taken anywhere |
//! | `PUT`    | `/topics/edit/{id}` | Body: [`TopicInput`]; 404 if the topic or subject is missing |
//! | `DELETE` | `/topics/delete/{id}` | 404 if not found |

use std::sync::Arc;

use axum::{Json, extract::State};
use faq_core::{input::TopicInput, store::CatalogStore, topic::Topic};

use crate::{
  SUCCESS,
  error::ApiError,
  extract::{IdPath, ValidJson},
};

/// `GET /topics`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Topic>>, ApiError>
where
  S: CatalogStore,
{
  let topics = store.list_topics().await.map_err(ApiError::from_store)?;
  Ok(Json(topics))
}

/// `GET /topics/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  IdPath(id): IdPath,
) -> Result<Json<Topic>, ApiError>
where
  S: CatalogStore,
{
  let topic = store.get_topic(id).await.map_err(ApiError::from_store)?;
  Ok(Json(topic))
}

/// `GET /topics/subject/{id}`
pub async fn by_subject<S>(
  State(store): State<Arc<S>>,
  IdPath(subject_id): IdPath,
) -> Result<Json<Vec<Topic>>, ApiError>
where
  S: CatalogStore,
{
  let topics = store
    .list_topics_by_subject(subject_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(topics))
}

/// `POST /topics/create`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  ValidJson(body): ValidJson<TopicInput>,
) -> Result<Json<Topic>, ApiError>
where
  S: CatalogStore,
{
  let topic = store.create_topic(body).await.map_err(ApiError::from_store)?;
  Ok(Json(topic))
}

/// `PUT /topics/edit/{id}`
pub async fn edit<S>(
  State(store): State<Arc<S>>,
  IdPath(id): IdPath,
  ValidJson(body): ValidJson<TopicInput>,
) -> Result<Json<Topic>, ApiError>
where
  S: CatalogStore,
{
  let topic = store
    .edit_topic(id, body)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(topic))
}

/// `DELETE /topics/delete/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  IdPath(id): IdPath,
) -> Result<Json<&'static str>, ApiError>
where
  S: CatalogStore,
{
  store.delete_topic(id).await.map_err(ApiError::from_store)?;
  Ok(Json(SUCCESS))
}
