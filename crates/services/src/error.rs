//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;
use training_core::model::{CompletionCodecError, SessionId};

/// Errors emitted by `ProgressService::save`.
///
/// A failed save never touches the in-memory store.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SaveError {
    #[error(transparent)]
    Encode(#[from] CompletionCodecError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `TrainingTracker`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackerError {
    #[error("unknown session: {0}")]
    UnknownSession(SessionId),
}

/// Errors emitted by `TrackerConfig` helpers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid database url: {raw}")]
    InvalidDatabaseUrl { raw: String },
    #[error("slot key cannot be empty")]
    EmptySlotKey,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors emitted while bootstrapping tracker services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackerServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
