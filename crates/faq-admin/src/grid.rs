//! Plain-text grids for the admin listings.

use chrono::{DateTime, SecondsFormat, Utc};
use faq_core::{subject::Subject, topic::Topic};

const HEADERS: [&str; 4] = ["id", "title", "created_at", "updated_at"];

/// One grid line per record: the columns the admin views expose.
pub trait GridRow {
  fn cells(&self) -> [String; 4];
}

fn timestamp(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn optional_timestamp(dt: Option<DateTime<Utc>>) -> String {
  dt.map(timestamp).unwrap_or_else(|| "-".to_string())
}

impl GridRow for Subject {
  fn cells(&self) -> [String; 4] {
    [
      self.id.to_string(),
      self.title.clone(),
      timestamp(self.created_at),
      optional_timestamp(self.updated_at),
    ]
  }
}

impl GridRow for Topic {
  fn cells(&self) -> [String; 4] {
    [
      self.id.to_string(),
      self.title.clone(),
      timestamp(self.created_at),
      optional_timestamp(self.updated_at),
    ]
  }
}

/// Render `rows` as a left-aligned grid with a header and a rule line.
pub fn render<R: GridRow>(rows: &[R]) -> String {
  let cells: Vec<[String; 4]> = rows.iter().map(GridRow::cells).collect();

  let mut widths = HEADERS.map(|h| h.chars().count());
  for row in &cells {
    for (width, cell) in widths.iter_mut().zip(row) {
      *width = (*width).max(cell.chars().count());
    }
  }

  let line = |row: [&str; 4]| -> String {
    row
      .iter()
      .zip(widths)
      .map(|(cell, width)| format!("{cell:<width$}"))
      .collect::<Vec<_>>()
      .join("  ")
      .trim_end()
      .to_string()
  };

  let mut out = vec![
    line(HEADERS),
    line(widths.map(|w| "-".repeat(w)).each_ref().map(String::as_str)),
  ];
  for row in &cells {
    out.push(line(row.each_ref().map(String::as_str)));
  }
  out.join("\n")
}
