use std::sync::Arc;

use storage::repository::Storage;

use crate::config::{TrackerConfig, prepare_sqlite_file};
use crate::error::TrackerServicesError;
use crate::progress_service::ProgressService;
use crate::tracker::TrainingTracker;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct TrackerServices {
    progress: Arc<ProgressService>,
}

impl TrackerServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `TrackerServicesError` if the database file cannot be prepared
    /// or storage initialization fails.
    pub async fn new_sqlite(config: &TrackerConfig) -> Result<Self, TrackerServicesError> {
        prepare_sqlite_file(config.database_url())?;
        let storage = Storage::sqlite(config.database_url()).await?;
        Ok(Self::from_storage(&storage, config))
    }

    /// Build services over a volatile in-memory backend.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_storage(&Storage::in_memory(), &TrackerConfig::default())
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, config: &TrackerConfig) -> Self {
        let progress = Arc::new(ProgressService::with_slot_key(
            Arc::clone(&storage.progress),
            config.slot_key(),
        ));
        Self { progress }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    /// Open a tracker over the built-in content.
    pub async fn open_tracker(&self) -> TrainingTracker {
        TrainingTracker::open_default(self.progress.as_ref().clone()).await
    }
}
