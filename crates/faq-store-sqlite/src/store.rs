//! [`SqliteStore`] — the SQLite implementation of [`CatalogStore`].
//!
//! Every operation is one closure on the connection thread. Closures that
//! check a precondition before writing open a transaction, so the check and
//! the write cannot interleave with another request. A closure reports a
//! domain failure as `Ok(Err(..))`: the transaction is dropped unchanged (and
//! thereby rolled back) while the connection itself stays healthy.

use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension as _, params};
use tracing::debug;

use faq_core::{
  input::{SubjectInput, TopicInput},
  store::CatalogStore,
  subject::{Subject, SubjectWithTopics},
  topic::Topic,
};

use crate::{
  Result,
  encode::{RawSubject, RawTopic, SUBJECT_COLUMNS, TOPIC_COLUMNS, encode_dt},
  schema::SCHEMA,
};

/// Result of the work done inside a connection closure.
type Outcome<T> = std::result::Result<T, faq_core::Error>;

// ─── Store ───────────────────────────────────────────────────────────────────

/// A catalog store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection handle is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection. Clones of this store fail with a
  /// database error afterwards.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Statement helpers ───────────────────────────────────────────────────────

fn subject_exists(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
  Ok(
    conn
      .query_row("SELECT 1 FROM subjects WHERE id = ?1", params![id], |_| Ok(()))
      .optional()?
      .is_some(),
  )
}

fn subject_title_taken(conn: &Connection, title: &str) -> rusqlite::Result<bool> {
  Ok(
    conn
      .query_row(
        "SELECT 1 FROM subjects WHERE title = ?1 LIMIT 1",
        params![title],
        |_| Ok(()),
      )
      .optional()?
      .is_some(),
  )
}

fn topic_title_taken(conn: &Connection, title: &str) -> rusqlite::Result<bool> {
  Ok(
    conn
      .query_row(
        "SELECT 1 FROM topics WHERE title = ?1 LIMIT 1",
        params![title],
        |_| Ok(()),
      )
      .optional()?
      .is_some(),
  )
}

fn select_subject(conn: &Connection, id: i64) -> rusqlite::Result<Option<RawSubject>> {
  conn
    .query_row(
      &format!("SELECT {SUBJECT_COLUMNS} FROM subjects WHERE id = ?1"),
      params![id],
      RawSubject::from_row,
    )
    .optional()
}

fn select_topic(conn: &Connection, id: i64) -> rusqlite::Result<Option<RawTopic>> {
  conn
    .query_row(
      &format!("SELECT {TOPIC_COLUMNS} FROM topics WHERE id = ?1"),
      params![id],
      RawTopic::from_row,
    )
    .optional()
}

// ─── CatalogStore impl ───────────────────────────────────────────────────────

impl CatalogStore for SqliteStore {
  type Error = crate::Error;

  // ── Subjects ──────────────────────────────────────────────────────────────

  async fn list_subjects(&self) -> Result<Vec<Subject>> {
    let raws: Vec<RawSubject> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {SUBJECT_COLUMNS} FROM subjects ORDER BY id DESC"
        ))?;
        let rows = stmt
          .query_map([], RawSubject::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSubject::into_subject).collect()
  }

  async fn get_subject(&self, id: i64) -> Result<SubjectWithTopics> {
    let rows: Vec<(RawSubject, Option<RawTopic>)> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT
             s.id, s.title, s.created_at, s.updated_at,
             t.id, t.title, t.description, t.subject_id, t.created_at, t.updated_at
           FROM subjects s
           LEFT JOIN topics t ON t.subject_id = s.id
           WHERE s.id = ?1
           ORDER BY t.id",
        )?;
        let rows = stmt
          .query_map(params![id], |row| {
            let subject = RawSubject::from_row(row)?;
            // A subject without topics yields one row with NULL topic columns.
            let topic = match row.get::<_, Option<i64>>(4)? {
              Some(_) => Some(RawTopic::from_row_at(row, 4)?),
              None => None,
            };
            Ok((subject, topic))
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    let mut rows = rows.into_iter();
    let (raw_subject, first_topic) = rows
      .next()
      .ok_or(faq_core::Error::SubjectNotFound(id))?;

    let topics = first_topic
      .into_iter()
      .chain(rows.filter_map(|(_, topic)| topic))
      .map(RawTopic::into_topic)
      .collect::<Result<Vec<_>>>()?;

    Ok(SubjectWithTopics {
      subject: raw_subject.into_subject()?,
      topics,
    })
  }

  async fn create_subject(&self, input: SubjectInput) -> Result<Subject> {
    let created_at = Utc::now();
    let at_str     = encode_dt(created_at);
    let title      = input.title.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if subject_title_taken(&tx, &input.title)? {
          return Ok(Err(faq_core::Error::SubjectExists(input.title)));
        }
        tx.execute(
          "INSERT INTO subjects (title, created_at) VALUES (?1, ?2)",
          params![input.title, at_str],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Outcome::Ok(id))
      })
      .await??;

    debug!(id, "created subject");
    Ok(Subject { id, title, created_at, updated_at: None })
  }

  async fn edit_subject(&self, id: i64, input: SubjectInput) -> Result<Subject> {
    let at_str = encode_dt(Utc::now());

    let raw: RawSubject = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let changed = tx.execute(
          "UPDATE subjects SET title = ?1, updated_at = ?2 WHERE id = ?3",
          params![input.title, at_str, id],
        )?;
        if changed == 0 {
          return Ok(Err(faq_core::Error::SubjectNotFound(id)));
        }
        let raw = select_subject(&tx, id)?;
        tx.commit()?;
        Ok(raw.ok_or(faq_core::Error::SubjectNotFound(id)))
      })
      .await??;

    debug!(id, "edited subject");
    raw.into_subject()
  }

  async fn delete_subject(&self, id: i64) -> Result<()> {
    // Owned topics go with the subject through `ON DELETE CASCADE`.
    let deleted: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM subjects WHERE id = ?1", params![id])?)
      })
      .await?;

    if deleted == 0 {
      return Err(faq_core::Error::SubjectNotFound(id).into());
    }
    debug!(id, "deleted subject");
    Ok(())
  }

  // ── Topics ────────────────────────────────────────────────────────────────

  async fn list_topics(&self) -> Result<Vec<Topic>> {
    let raws: Vec<RawTopic> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {TOPIC_COLUMNS} FROM topics ORDER BY id DESC"
        ))?;
        let rows = stmt
          .query_map([], RawTopic::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawTopic::into_topic).collect()
  }

  async fn get_topic(&self, id: i64) -> Result<Topic> {
    let raw: Option<RawTopic> = self
      .conn
      .call(move |conn| Ok(select_topic(conn, id)?))
      .await?;

    raw
      .ok_or(faq_core::Error::TopicNotFound(id))?
      .into_topic()
  }

  async fn list_topics_by_subject(&self, subject_id: i64) -> Result<Vec<Topic>> {
    let raws: Vec<RawTopic> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if !subject_exists(&tx, subject_id)? {
          return Ok(Err(faq_core::Error::SubjectNotFound(subject_id)));
        }
        let rows = {
          let mut stmt = tx.prepare(&format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE subject_id = ?1"
          ))?;
          stmt
            .query_map(params![subject_id], RawTopic::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        tx.commit()?;
        Ok(Ok(rows))
      })
      .await??;

    raws.into_iter().map(RawTopic::into_topic).collect()
  }

  async fn create_topic(&self, input: TopicInput) -> Result<Topic> {
    let created_at = Utc::now();
    let at_str     = encode_dt(created_at);
    let stored     = input.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if topic_title_taken(&tx, &input.title)? {
          return Ok(Err(faq_core::Error::TopicExists(input.title)));
        }
        if !subject_exists(&tx, input.subject_id)? {
          return Ok(Err(faq_core::Error::SubjectNotFound(input.subject_id)));
        }
        tx.execute(
          "INSERT INTO topics (title, description, subject_id, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          params![input.title, input.description, input.subject_id, at_str],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Outcome::Ok(id))
      })
      .await??;

    debug!(id, subject_id = stored.subject_id, "created topic");
    Ok(Topic {
      id,
      title: stored.title,
      description: stored.description,
      subject_id: stored.subject_id,
      created_at,
      updated_at: None,
    })
  }

  async fn edit_topic(&self, id: i64, input: TopicInput) -> Result<Topic> {
    let at_str = encode_dt(Utc::now());

    let raw: RawTopic = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if select_topic(&tx, id)?.is_none() {
          return Ok(Err(faq_core::Error::TopicNotFound(id)));
        }
        if !subject_exists(&tx, input.subject_id)? {
          return Ok(Err(faq_core::Error::SubjectNotFound(input.subject_id)));
        }
        tx.execute(
          "UPDATE topics
           SET title = ?1, description = ?2, subject_id = ?3, updated_at = ?4
           WHERE id = ?5",
          params![input.title, input.description, input.subject_id, at_str, id],
        )?;
        let raw = select_topic(&tx, id)?;
        tx.commit()?;
        Ok(raw.ok_or(faq_core::Error::TopicNotFound(id)))
      })
      .await??;

    debug!(id, "edited topic");
    raw.into_topic()
  }

  async fn delete_topic(&self, id: i64) -> Result<()> {
    let deleted: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM topics WHERE id = ?1", params![id])?)
      })
      .await?;

    if deleted == 0 {
      return Err(faq_core::Error::TopicNotFound(id).into());
    }
    debug!(id, "deleted topic");
    Ok(())
  }
}
