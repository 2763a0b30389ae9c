//! Error types for `faq-core`.

use thiserror::Error;

/// Domain failures raised by the service layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("subject not found: {0}")]
  SubjectNotFound(i64),

  #[error("topic not found: {0}")]
  TopicNotFound(i64),

  #[error("subject already exists: {0:?}")]
  SubjectExists(String),

  #[error("topic already exists: {0:?}")]
  TopicExists(String),

  #[error("invalid input: {0}")]
  Invalid(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Implemented by storage backend errors so that callers can recover the
/// domain failure, if any, hidden behind a backend-specific error type.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// The domain error wrapped by this backend error. `None` means the
  /// failure came from the backend itself (I/O, SQL, decoding).
  fn domain(&self) -> Option<&Error>;
}

impl StoreError for Error {
  fn domain(&self) -> Option<&Error> { Some(self) }
}
