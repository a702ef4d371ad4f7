//! Shared error types for the services crate.

use thiserror::Error;

use blaster_core::round::RoundError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `HighScoreService`.
///
/// Neither kind is fatal: reads fall back to an empty ledger and writes leave
/// the in-memory ledger in place.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HighScoreError {
    #[error("failed to read high scores: {0}")]
    Read(#[source] StorageError),
    #[error("failed to persist high scores: {0}")]
    Write(#[source] StorageError),
}

/// Errors emitted by `SessionController`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no session is being played")]
    NotPlaying,
    #[error("no question is active")]
    NoActiveRound,
    #[error("answer already submitted for this question")]
    RoundResolved,
}

impl From<RoundError> for SessionError {
    fn from(err: RoundError) -> Self {
        match err {
            RoundError::AlreadyResolved => SessionError::RoundResolved,
            _ => SessionError::RoundResolved,
        }
    }
}

/// Errors raised while reading `GameConfig` overrides.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{var} must be a whole number, got {raw:?}")]
    InvalidNumber { var: &'static str, raw: String },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Errors emitted while bootstrapping game services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
