//! The `CatalogStore` trait — the service contract for subjects and topics.
//!
//! The trait is implemented by storage backends (e.g. `faq-store-sqlite`).
//! Higher layers (`faq-api`, `faq-admin`) depend on this abstraction, not on
//! any concrete backend.
//!
//! Every method is one unit of work: implementations run the existence and
//! uniqueness checks together with the write they guard, and report domain
//! failures through [`StoreError::domain`].

use std::future::Future;

use crate::{
  StoreError,
  input::{SubjectInput, TopicInput},
  subject::{Subject, SubjectWithTopics},
  topic::Topic,
};

/// Abstraction over a catalog store backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait CatalogStore: Send + Sync {
  type Error: StoreError;

  // ── Subjects ──────────────────────────────────────────────────────────

  /// All subjects, newest (highest id) first.
  fn list_subjects(
    &self,
  ) -> impl Future<Output = Result<Vec<Subject>, Self::Error>> + Send + '_;

  /// A subject with all of its topics.
  ///
  /// Fails with `SubjectNotFound` if `id` does not exist.
  fn get_subject(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<SubjectWithTopics, Self::Error>> + Send + '_;

  /// Persist a new subject.
  ///
  /// Fails with `SubjectExists` if a subject with the same title is stored.
  fn create_subject(
    &self,
    input: SubjectInput,
  ) -> impl Future<Output = Result<Subject, Self::Error>> + Send + '_;

  /// Replace the title of subject `id` and stamp `updated_at`.
  fn edit_subject(
    &self,
    id: i64,
    input: SubjectInput,
  ) -> impl Future<Output = Result<Subject, Self::Error>> + Send + '_;

  /// Delete subject `id` together with every topic it owns.
  fn delete_subject(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Topics ────────────────────────────────────────────────────────────

  /// All topics, newest (highest id) first.
  fn list_topics(
    &self,
  ) -> impl Future<Output = Result<Vec<Topic>, Self::Error>> + Send + '_;

  fn get_topic(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Topic, Self::Error>> + Send + '_;

  /// Topics owned by `subject_id`, in storage order.
  ///
  /// Fails with `SubjectNotFound` if the subject does not exist.
  fn list_topics_by_subject(
    &self,
    subject_id: i64,
  ) -> impl Future<Output = Result<Vec<Topic>, Self::Error>> + Send + '_;

  /// Persist a new topic.
  ///
  /// Fails with `TopicExists` if any topic (under any subject) has the same
  /// title, and with `SubjectNotFound` if `input.subject_id` does not exist.
  fn create_topic(
    &self,
    input: TopicInput,
  ) -> impl Future<Output = Result<Topic, Self::Error>> + Send + '_;

  /// Replace title, description and subject of topic `id`.
  fn edit_topic(
    &self,
    id: i64,
    input: TopicInput,
  ) -> impl Future<Output = Result<Topic, Self::Error>> + Send + '_;

  fn delete_topic(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
