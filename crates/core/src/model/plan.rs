use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::SessionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlanError {
    #[error("session id cannot be empty")]
    EmptySessionId,

    #[error("duplicate session id: {id}")]
    DuplicateSessionId { id: SessionId },

    #[error("training plan must contain at least one week")]
    NoWeeks,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One scheduled unit of activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    category: String,
    description: String,
}

impl Session {
    #[must_use]
    pub fn new(
        id: impl Into<SessionId>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Category label such as `Run/Walk` or `Optional Run`.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

//
// ─── WEEK / PHASE ──────────────────────────────────────────────────────────────
//

/// A week of sessions.
///
/// `number` is a display label. Chronological order comes from the week's
/// position in `TrainingPlan::weeks`, never from this field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    number: u32,
    sessions: Vec<Session>,
}

impl Week {
    #[must_use]
    pub fn new(number: u32, sessions: Vec<Session>) -> Self {
        Self { number, sessions }
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    title: String,
    weeks: Vec<Week>,
}

impl Phase {
    #[must_use]
    pub fn new(title: impl Into<String>, weeks: Vec<Week>) -> Self {
        Self {
            title: title.into(),
            weeks,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }
}

//
// ─── PLAN ──────────────────────────────────────────────────────────────────────
//

/// The full schedule: phases, flattened chronologically into weeks.
///
/// Invariants enforced at construction:
/// - at least one week
/// - every session id is non-empty and unique across the whole plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingPlan {
    phases: Vec<Phase>,
    weeks: Vec<Week>,
    // phase index for each flattened week
    week_phase: Vec<usize>,
}

impl TrainingPlan {
    /// Build a plan from ordered phases.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NoWeeks` if no phase contains a week,
    /// `PlanError::EmptySessionId` for a blank id, and
    /// `PlanError::DuplicateSessionId` when two sessions share an id.
    pub fn new(phases: Vec<Phase>) -> Result<Self, PlanError> {
        let mut seen: HashSet<&SessionId> = HashSet::new();
        for session in phases
            .iter()
            .flat_map(|p| p.weeks.iter())
            .flat_map(|w| w.sessions.iter())
        {
            if session.id.is_empty() {
                return Err(PlanError::EmptySessionId);
            }
            if !seen.insert(&session.id) {
                return Err(PlanError::DuplicateSessionId {
                    id: session.id.clone(),
                });
            }
        }

        let mut weeks = Vec::new();
        let mut week_phase = Vec::new();
        for (idx, phase) in phases.iter().enumerate() {
            weeks.extend(phase.weeks.iter().cloned());
            week_phase.extend(std::iter::repeat_n(idx, phase.weeks.len()));
        }
        if weeks.is_empty() {
            return Err(PlanError::NoWeeks);
        }

        Ok(Self {
            phases,
            weeks,
            week_phase,
        })
    }

    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// All weeks in chronological order.
    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// All sessions in chronological order.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> + '_ {
        self.weeks.iter().flat_map(|w| w.sessions.iter())
    }

    #[must_use]
    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions().find(|s| s.id.as_str() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.session(id).is_some()
    }

    /// Phase owning the week at chronological `rank`.
    #[must_use]
    pub fn phase_of_week(&self, rank: usize) -> Option<&Phase> {
        self.week_phase.get(rank).map(|&idx| &self.phases[idx])
    }

    #[must_use]
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    #[must_use]
    pub fn session_count(&self) -> usize {
        self.weeks.iter().map(Week::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(number: u32, ids: &[&str]) -> Week {
        Week::new(
            number,
            ids.iter()
                .map(|id| Session::new(*id, "Run/Walk", "easy"))
                .collect(),
        )
    }

    #[test]
    fn flattens_weeks_across_phases_in_order() {
        let plan = TrainingPlan::new(vec![
            Phase::new("A", vec![week(1, &["a1"]), week(2, &["a2"])]),
            Phase::new("B", vec![week(3, &["b1", "b2"])]),
        ])
        .unwrap();

        let numbers: Vec<u32> = plan.weeks().iter().map(Week::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(plan.session_count(), 4);
        assert_eq!(plan.phase_of_week(2).map(Phase::title), Some("B"));
        assert!(plan.phase_of_week(3).is_none());
        assert!(plan.contains("b2"));
        assert!(!plan.contains("zz"));
    }

    #[test]
    fn rejects_duplicate_ids_across_phases() {
        let err = TrainingPlan::new(vec![
            Phase::new("A", vec![week(1, &["x"])]),
            Phase::new("B", vec![week(2, &["x"])]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            PlanError::DuplicateSessionId {
                id: SessionId::new("x")
            }
        );
    }

    #[test]
    fn rejects_empty_plans_and_blank_ids() {
        assert_eq!(TrainingPlan::new(vec![]), Err(PlanError::NoWeeks));
        assert_eq!(
            TrainingPlan::new(vec![Phase::new("A", vec![])]),
            Err(PlanError::NoWeeks)
        );
        assert_eq!(
            TrainingPlan::new(vec![Phase::new("A", vec![week(1, &[""])])]),
            Err(PlanError::EmptySessionId)
        );
    }

    #[test]
    fn week_without_sessions_is_allowed() {
        let plan = TrainingPlan::new(vec![Phase::new("A", vec![week(1, &[])])]).unwrap();
        assert_eq!(plan.week_count(), 1);
        assert!(plan.weeks()[0].is_empty());
    }
}
