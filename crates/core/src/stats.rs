//! Derived progress statistics.
//!
//! Every function here is pure and total over any `CompletionStore`: ids the
//! store holds but the schedule does not are simply never looked up.

use crate::model::{CompletionStore, Session, SessionId, TrainingPlan, Week};

/// Prefix that marks a "key" session category.
pub const KEY_CATEGORY_PREFIX: &str = "Key";

/// Completed sessions split by category prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdherenceSplit {
    pub key: usize,
    pub other: usize,
}

impl AdherenceSplit {
    #[must_use]
    pub fn total(&self) -> usize {
        self.key + self.other
    }
}

/// `round(100 * completed / total)` with halves rounded up; 0 when `total` is 0.
#[must_use]
pub fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    let rounded = (200 * completed + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

/// Number of `sessions` marked complete.
pub fn completed_count<'a>(
    sessions: impl IntoIterator<Item = &'a Session>,
    store: &CompletionStore,
) -> usize {
    sessions
        .into_iter()
        .filter(|s| store.is_complete(s.id().as_str()))
        .count()
}

/// Share of `sessions` marked complete, in [0, 100].
pub fn overall_percentage<'a>(
    sessions: impl IntoIterator<Item = &'a Session>,
    store: &CompletionStore,
) -> u8 {
    let mut total = 0;
    let mut done = 0;
    for session in sessions {
        total += 1;
        if store.is_complete(session.id().as_str()) {
            done += 1;
        }
    }
    percentage(done, total)
}

#[must_use]
pub fn week_percentage(week: &Week, store: &CompletionStore) -> u8 {
    percentage(completed_count(week.sessions(), store), week.len())
}

#[must_use]
pub fn is_week_complete(week: &Week, store: &CompletionStore) -> bool {
    week.sessions()
        .iter()
        .all(|s| store.is_complete(s.id().as_str()))
}

/// Chronological index of the current week.
///
/// The first week with any incomplete session, or the last week when
/// everything is done. `None` only for an empty sequence.
pub fn current_week_index<'a>(
    weeks: impl IntoIterator<Item = &'a Week>,
    store: &CompletionStore,
) -> Option<usize> {
    let mut last = None;
    for (idx, week) in weeks.into_iter().enumerate() {
        if !is_week_complete(week, store) {
            return Some(idx);
        }
        last = Some(idx);
    }
    last
}

/// The current week; see [`current_week_index`].
pub fn current_week<'a>(
    weeks: impl IntoIterator<Item = &'a Week>,
    store: &CompletionStore,
) -> Option<&'a Week> {
    let mut last = None;
    for week in weeks {
        if !is_week_complete(week, store) {
            return Some(week);
        }
        last = Some(week);
    }
    last
}

/// Completed-session count per week, in chronological order.
///
/// Both the per-week bar series and the trend line read from this.
pub fn weekly_completed_counts<'a>(
    weeks: impl IntoIterator<Item = &'a Week>,
    store: &CompletionStore,
) -> Vec<usize> {
    weeks
        .into_iter()
        .map(|w| completed_count(w.sessions(), store))
        .collect()
}

/// Split completed sessions by whether their category starts with `"Key"`.
pub fn adherence_split<'a>(
    sessions: impl IntoIterator<Item = &'a Session>,
    store: &CompletionStore,
) -> AdherenceSplit {
    let mut split = AdherenceSplit::default();
    for session in sessions {
        if !store.is_complete(session.id().as_str()) {
            continue;
        }
        if session.category().starts_with(KEY_CATEGORY_PREFIX) {
            split.key += 1;
        } else {
            split.other += 1;
        }
    }
    split
}

/// First session, in schedule order, not marked complete.
#[must_use]
pub fn first_incomplete_session<'a>(
    plan: &'a TrainingPlan,
    store: &CompletionStore,
) -> Option<&'a Session> {
    plan.sessions()
        .find(|s| !store.is_complete(s.id().as_str()))
}

/// Current week details inside a [`ProgressSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentWeek {
    /// Position in the flattened week sequence.
    pub rank: usize,
    pub number: u32,
    pub percentage: u8,
}

/// All derived statistics for one store state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub total_sessions: usize,
    pub completed_sessions: usize,
    pub overall_percentage: u8,
    pub current_week: CurrentWeek,
    pub weekly_completed: Vec<usize>,
    pub adherence: AdherenceSplit,
    pub first_incomplete: Option<SessionId>,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn compute(plan: &TrainingPlan, store: &CompletionStore) -> Self {
        let weekly_completed = weekly_completed_counts(plan.weeks(), store);
        let total_sessions = plan.session_count();
        let completed_sessions = weekly_completed.iter().sum();

        // plans always hold at least one week
        let rank = current_week_index(plan.weeks(), store).unwrap_or(0);
        let week = &plan.weeks()[rank];

        Self {
            total_sessions,
            completed_sessions,
            overall_percentage: percentage(completed_sessions, total_sessions),
            current_week: CurrentWeek {
                rank,
                number: week.number(),
                percentage: week_percentage(week, store),
            },
            weekly_completed,
            adherence: adherence_split(plan.sessions(), store),
            first_incomplete: first_incomplete_session(plan, store).map(|s| s.id().clone()),
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.completed_sessions == self.total_sessions
    }
}
