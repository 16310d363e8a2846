#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod stats;

pub use error::Error;
pub use model::{CompletionStore, SessionId, TrainingPlan};
pub use stats::ProgressSnapshot;
