mod completion;
mod exercise;
mod ids;
mod plan;

pub use completion::{CompletionCodecError, CompletionStore, PROGRESS_SLOT_KEY};
pub use exercise::{Exercise, ExerciseLibrary, MuscleGroup};
pub use ids::SessionId;
pub use plan::{Phase, PlanError, Session, TrainingPlan, Week};
