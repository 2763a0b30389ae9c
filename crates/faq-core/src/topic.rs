//! Topic — a single item filed under exactly one subject.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored topic. `subject_id` always references an existing subject;
/// deleting that subject deletes the topic as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
  pub id:          i64,
  pub title:       String,
  pub description: String,
  pub subject_id:  i64,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  Option<DateTime<Utc>>,
}
