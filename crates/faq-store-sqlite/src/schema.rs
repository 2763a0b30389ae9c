//! SQL schema for the FAQ SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision for future migrations.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- AUTOINCREMENT keeps ids of deleted rows from being handed out again.
CREATE TABLE IF NOT EXISTS subjects (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    created_at  TEXT NOT NULL,   -- RFC 3339 UTC; server-assigned
    updated_at  TEXT             -- RFC 3339 UTC; NULL until first edit
);

CREATE TABLE IF NOT EXISTS topics (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    subject_id  INTEGER NOT NULL REFERENCES subjects(id) ON DELETE CASCADE,
    created_at  TEXT NOT NULL,
    updated_at  TEXT
);

-- Titles are looked up before every create; they are not UNIQUE because an
-- edit may legitimately reuse a title.
CREATE INDEX IF NOT EXISTS subjects_title_idx  ON subjects(title);
CREATE INDEX IF NOT EXISTS topics_title_idx    ON topics(title);
CREATE INDEX IF NOT EXISTS topics_subject_idx  ON topics(subject_id);

PRAGMA user_version = 1;
";
