//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. Rows are first read into
//! `Raw*` structs inside the database thread and decoded afterwards.

use chrono::{DateTime, Utc};
use faq_core::{subject::Subject, topic::Topic};
use rusqlite::Row;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

fn decode_opt_dt(s: Option<&str>) -> Result<Option<DateTime<Utc>>> {
  s.map(decode_dt).transpose()
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list matching [`RawSubject::from_row`].
pub const SUBJECT_COLUMNS: &str = "id, title, created_at, updated_at";

/// Column list matching [`RawTopic::from_row`].
pub const TOPIC_COLUMNS: &str =
  "id, title, description, subject_id, created_at, updated_at";

/// Raw values read directly from a `subjects` row.
pub struct RawSubject {
  pub id:         i64,
  pub title:      String,
  pub created_at: String,
  pub updated_at: Option<String>,
}

impl RawSubject {
  /// Read the four subject columns starting at index 0.
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      title:      row.get(1)?,
      created_at: row.get(2)?,
      updated_at: row.get(3)?,
    })
  }

  pub fn into_subject(self) -> Result<Subject> {
    Ok(Subject {
      id:         self.id,
      title:      self.title,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_opt_dt(self.updated_at.as_deref())?,
    })
  }
}

/// Raw values read directly from a `topics` row.
pub struct RawTopic {
  pub id:          i64,
  pub title:       String,
  pub description: String,
  pub subject_id:  i64,
  pub created_at:  String,
  pub updated_at:  Option<String>,
}

impl RawTopic {
  /// Read the six topic columns starting at index 0.
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Self::from_row_at(row, 0)
  }

  /// Read the six topic columns starting at `offset`. Used for joins where
  /// the topic columns follow the subject columns.
  pub fn from_row_at(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(offset)?,
      title:       row.get(offset + 1)?,
      description: row.get(offset + 2)?,
      subject_id:  row.get(offset + 3)?,
      created_at:  row.get(offset + 4)?,
      updated_at:  row.get(offset + 5)?,
    })
  }

  pub fn into_topic(self) -> Result<Topic> {
    Ok(Topic {
      id:          self.id,
      title:       self.title,
      description: self.description,
      subject_id:  self.subject_id,
      created_at:  decode_dt(&self.created_at)?,
      updated_at:  decode_opt_dt(self.updated_at.as_deref())?,
    })
  }
}
