use training_core::catalog;
use training_core::model::{CompletionStore, ExerciseLibrary, SessionId, TrainingPlan};
use training_core::stats::ProgressSnapshot;

use crate::dashboard::Dashboard;
use crate::error::TrackerError;
use crate::progress_service::ProgressService;

/// Result of toggling one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub session_id: SessionId,
    /// New completion flag.
    pub completed: bool,
    /// Whether the save after the toggle succeeded.
    pub persisted: bool,
}

/// Owns the canonical completion store for one plan.
///
/// Every mutation is followed by a save, and every read of statistics is
/// derived from scratch. Mutation takes `&mut self`, so there is exactly one
/// writer at a time.
pub struct TrainingTracker {
    plan: TrainingPlan,
    exercises: ExerciseLibrary,
    store: CompletionStore,
    progress: ProgressService,
}

impl TrainingTracker {
    /// Load saved progress for `plan`.
    pub async fn open(
        plan: TrainingPlan,
        exercises: ExerciseLibrary,
        progress: ProgressService,
    ) -> Self {
        let store = progress.load().await;
        tracing::info!(
            key = progress.slot_key(),
            sessions = plan.session_count(),
            completed = store.completed_len(),
            "opened training tracker"
        );
        Self {
            plan,
            exercises,
            store,
            progress,
        }
    }

    /// Open the built-in schedule and exercise library.
    pub async fn open_default(progress: ProgressService) -> Self {
        Self::open(catalog::default_plan(), catalog::default_exercises(), progress).await
    }

    #[must_use]
    pub fn plan(&self) -> &TrainingPlan {
        &self.plan
    }

    #[must_use]
    pub fn exercises(&self) -> &ExerciseLibrary {
        &self.exercises
    }

    #[must_use]
    pub fn store(&self) -> &CompletionStore {
        &self.store
    }

    #[must_use]
    pub fn is_complete(&self, id: &str) -> bool {
        self.store.is_complete(id)
    }

    /// Flip a session's completion flag and persist the store.
    ///
    /// A failed save is logged and reported through `ToggleOutcome::persisted`;
    /// the in-memory flip is kept either way.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::UnknownSession` if `id` is not part of the plan.
    pub async fn toggle(&mut self, id: &str) -> Result<ToggleOutcome, TrackerError> {
        let Some(session) = self.plan.session(id) else {
            return Err(TrackerError::UnknownSession(SessionId::new(id)));
        };
        let session_id = session.id().clone();

        let completed = self.store.toggle(session_id.clone());
        let persisted = match self.progress.save(&self.store).await {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%session_id, %error, "progress not persisted");
                false
            }
        };

        Ok(ToggleOutcome {
            session_id,
            completed,
            persisted,
        })
    }

    /// Re-derive all statistics for the current store.
    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::compute(&self.plan, &self.store)
    }

    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::build(&self.plan, &self.store)
    }
}
