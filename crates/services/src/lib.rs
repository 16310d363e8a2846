#![forbid(unsafe_code)]

pub mod config;
pub mod dashboard;
pub mod error;
pub mod progress_service;
pub mod tracker;
pub mod tracker_services;

pub use config::TrackerConfig;
pub use dashboard::{Dashboard, WeekRow};
pub use error::{ConfigError, SaveError, TrackerError, TrackerServicesError};
pub use progress_service::ProgressService;
pub use tracker::{ToggleOutcome, TrainingTracker};
pub use tracker_services::TrackerServices;
