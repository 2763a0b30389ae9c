//! Subject — the top-level category that owns topics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::topic::Topic;

/// A stored subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
  pub id:         i64,
  pub title:      String,
  /// Server-assigned; never changes after creation.
  pub created_at: DateTime<Utc>,
  /// Set by every successful edit; `None` until the first one.
  pub updated_at: Option<DateTime<Utc>>,
}

/// A subject together with every topic it owns, in insertion order.
///
/// Only returned by the single-subject read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectWithTopics {
  #[serde(flatten)]
  pub subject: Subject,
  pub topics:  Vec<Topic>,
}
