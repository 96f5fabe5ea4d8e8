//! Error type for `trivia-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The write violated a schema constraint (NOT NULL, foreign key, ...).
  #[error("constraint violation: {0}")]
  Constraint(String),
}

impl Error {
  /// True if the database refused a write on integrity grounds rather than
  /// failing outright.
  pub fn is_constraint(&self) -> bool { matches!(self, Self::Constraint(_)) }

  /// Split constraint violations out of a raw connection error.
  pub(crate) fn classify(err: tokio_rusqlite::Error) -> Self {
    match err {
      tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
        failure,
        message,
      )) if failure.code == rusqlite::ErrorCode::ConstraintViolation => {
        Self::Constraint(message.unwrap_or_else(|| failure.to_string()))
      }
      other => Self::Database(other),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
