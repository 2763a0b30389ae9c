//! Create/edit payloads and their validation rules.
//!
//! The same shape is used for both create and edit: an edit is a full
//! replace of every writable field. Field presence and JSON types are
//! enforced by deserialisation; range rules live in [`Validate::validate`].

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A payload that can check its own constraints before it reaches a store.
pub trait Validate {
  fn validate(&self) -> Result<()>;
}

/// Input to [`crate::store::CatalogStore::create_subject`] and
/// [`crate::store::CatalogStore::edit_subject`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInput {
  pub title: String,
}

impl SubjectInput {
  pub fn new(title: impl Into<String>) -> Self {
    Self { title: title.into() }
  }
}

impl Validate for SubjectInput {
  // Any present title is accepted, including an empty one.
  fn validate(&self) -> Result<()> { Ok(()) }
}

/// Input to [`crate::store::CatalogStore::create_topic`] and
/// [`crate::store::CatalogStore::edit_topic`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicInput {
  pub title:       String,
  pub description: String,
  /// Must be a positive identifier; existence is checked by the store.
  pub subject_id:  i64,
}

impl TopicInput {
  pub fn new(
    title: impl Into<String>,
    description: impl Into<String>,
    subject_id: i64,
  ) -> Self {
    Self {
      title: title.into(),
      description: description.into(),
      subject_id,
    }
  }
}

impl Validate for TopicInput {
  fn validate(&self) -> Result<()> {
    if self.subject_id < 1 {
      return Err(Error::Invalid(format!(
        "subject_id must be greater than or equal to 1, got {}",
        self.subject_id
      )));
    }
    Ok(())
  }
}
