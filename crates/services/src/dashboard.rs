use serde::Serialize;

use training_core::model::{CompletionStore, TrainingPlan};
use training_core::stats::{self, AdherenceSplit, ProgressSnapshot};

/// Presentation-agnostic progress overview.
///
/// This is intentionally **not** a UI view-model: no markup and no chart
/// configuration. Labels are plain strings a renderer may use as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub overall_percentage: u8,
    pub completed_sessions: usize,
    pub total_sessions: usize,
    pub current_week_number: u32,
    pub current_week_percentage: u8,
    pub weeks: Vec<WeekRow>,
    pub key_sessions: usize,
    pub other_sessions: usize,
    /// Session to bring into view first.
    pub next_session_id: Option<String>,
}

/// One week in the schedule overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRow {
    pub phase_title: String,
    pub label: String,
    pub number: u32,
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
    pub is_current: bool,
}

impl Dashboard {
    #[must_use]
    pub fn build(plan: &TrainingPlan, store: &CompletionStore) -> Self {
        let snapshot = ProgressSnapshot::compute(plan, store);
        Self::from_snapshot(plan, &snapshot)
    }

    #[must_use]
    pub fn from_snapshot(plan: &TrainingPlan, snapshot: &ProgressSnapshot) -> Self {
        let weeks = plan
            .weeks()
            .iter()
            .zip(&snapshot.weekly_completed)
            .enumerate()
            .map(|(rank, (week, &completed))| WeekRow {
                phase_title: plan
                    .phase_of_week(rank)
                    .map(|p| p.title().to_owned())
                    .unwrap_or_default(),
                label: format!("Week {}", week.number()),
                number: week.number(),
                completed,
                total: week.len(),
                percentage: stats::percentage(completed, week.len()),
                is_current: rank == snapshot.current_week.rank,
            })
            .collect();

        let AdherenceSplit { key, other } = snapshot.adherence;

        Self {
            overall_percentage: snapshot.overall_percentage,
            completed_sessions: snapshot.completed_sessions,
            total_sessions: snapshot.total_sessions,
            current_week_number: snapshot.current_week.number,
            current_week_percentage: snapshot.current_week.percentage,
            weeks,
            key_sessions: key,
            other_sessions: other,
            next_session_id: snapshot
                .first_incomplete
                .as_ref()
                .map(|id| id.as_str().to_owned()),
        }
    }

    /// Per-week completed counts; the bar and trend series share this.
    #[must_use]
    pub fn weekly_series(&self) -> Vec<usize> {
        self.weeks.iter().map(|w| w.completed).collect()
    }
}
