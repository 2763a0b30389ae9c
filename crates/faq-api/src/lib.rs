//! JSON REST API for the FAQ catalog.
//!
//! Exposes an axum [`Router`] backed by any [`faq_core::store::CatalogStore`].
//! Handlers only delegate; every check lives in the store. Transport concerns
//! (listening, request logging) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", faq_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod extract;
pub mod subjects;
pub mod topics;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post, put},
};
use faq_core::store::CatalogStore;

pub use error::ApiError;

/// Body returned by both delete endpoints.
pub const SUCCESS: &str = "success";

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CatalogStore + 'static,
{
  Router::new()
    // Subjects
    .route("/subjects", get(subjects::list::<S>))
    .route("/subjects/{id}", get(subjects::get_one::<S>))
    .route("/subjects/create", post(subjects::create::<S>))
    .route("/subjects/edit/{id}", put(subjects::edit::<S>))
    .route("/subjects/delete/{id}", delete(subjects::delete_one::<S>))
    // Topics
    .route("/topics", get(topics::list::<S>))
    .route("/topics/{id}", get(topics::get_one::<S>))
    .route("/topics/subject/{id}", get(topics::by_subject::<S>))
    .route("/topics/create", post(topics::create::<S>))
    .route("/topics/edit/{id}", put(topics::edit::<S>))
    .route("/topics/delete/{id}", delete(topics::delete_one::<S>))
    .with_state(store)
}
