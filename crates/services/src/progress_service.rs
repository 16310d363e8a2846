use std::sync::Arc;

use storage::repository::ProgressSlotRepository;
use training_core::model::{CompletionStore, PROGRESS_SLOT_KEY};

use crate::error::SaveError;

/// Loads and saves the completion store through a durable slot.
///
/// Loading is fail-safe: any read or decode problem yields an empty store.
/// Saving is best-effort: failures are returned and logged, never retried.
#[derive(Clone)]
pub struct ProgressService {
    repo: Arc<dyn ProgressSlotRepository>,
    slot_key: String,
}

impl ProgressService {
    #[must_use]
    pub fn new(repo: Arc<dyn ProgressSlotRepository>) -> Self {
        Self::with_slot_key(repo, PROGRESS_SLOT_KEY)
    }

    #[must_use]
    pub fn with_slot_key(repo: Arc<dyn ProgressSlotRepository>, slot_key: impl Into<String>) -> Self {
        Self {
            repo,
            slot_key: slot_key.into(),
        }
    }

    #[must_use]
    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    /// Load persisted completion state, or an empty store.
    pub async fn load(&self) -> CompletionStore {
        let raw = match self.repo.read_slot(&self.slot_key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.slot_key, "no saved progress");
                return CompletionStore::new();
            }
            Err(error) => {
                tracing::warn!(key = %self.slot_key, %error, "failed to read saved progress");
                return CompletionStore::new();
            }
        };

        match CompletionStore::decode(&raw) {
            Ok(store) => store,
            Err(error) => {
                tracing::warn!(key = %self.slot_key, %error, "discarding unreadable saved progress");
                CompletionStore::new()
            }
        }
    }

    /// Persist the full store, replacing the previous value.
    ///
    /// # Errors
    ///
    /// Returns `SaveError` if encoding or the storage write fails.
    pub async fn save(&self, store: &CompletionStore) -> Result<(), SaveError> {
        let encoded = store.encode()?;
        self.repo.write_slot(&self.slot_key, &encoded).await?;
        tracing::debug!(key = %self.slot_key, completed = store.completed_len(), "saved progress");
        Ok(())
    }
}
