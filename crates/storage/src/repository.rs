use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable key/value slots holding serialized progress.
///
/// Adapters store opaque strings; decoding is the caller's concern so that a
/// corrupt value can be recovered from instead of failing the read.
#[async_trait]
pub trait ProgressSlotRepository: Send + Sync {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read. A missing slot is
    /// `Ok(None)`, not an error.
    async fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write is rejected.
    async fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProgressSlotRepository for InMemoryRepository {
    async fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressSlotRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let progress: Arc<dyn ProgressSlotRepository> = Arc::new(InMemoryRepository::new());
        Self { progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_slot_reads_as_none() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.read_slot("trainingPlanProgress_v2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn write_replaces_previous_value() {
        let repo = InMemoryRepository::new();
        repo.write_slot("k", r#"{"w1s1":true}"#).await.unwrap();
        repo.write_slot("k", r#"{"w1s1":false}"#).await.unwrap();

        assert_eq!(
            repo.read_slot("k").await.unwrap().as_deref(),
            Some(r#"{"w1s1":false}"#)
        );
        assert_eq!(repo.read_slot("other").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_slots() {
        let storage = Storage::in_memory();
        let again = storage.clone();
        storage.progress.write_slot("k", "v").await.unwrap();
        assert_eq!(again.progress.read_slot("k").await.unwrap().as_deref(), Some("v"));
    }
}
