use serde::{Deserialize, Serialize};
use std::fmt;

/// Body region an exercise targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuscleGroup {
    Core,
    LowerBody,
    UpperBody,
}

impl MuscleGroup {
    /// Human-readable label, e.g. `Lower Body`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MuscleGroup::Core => "Core",
            MuscleGroup::LowerBody => "Lower Body",
            MuscleGroup::UpperBody => "Upper Body",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A strength exercise with safety-focused instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    group: MuscleGroup,
    name: String,
    how_to: String,
}

impl Exercise {
    #[must_use]
    pub fn new(group: MuscleGroup, name: impl Into<String>, how_to: impl Into<String>) -> Self {
        Self {
            group,
            name: name.into(),
            how_to: how_to.into(),
        }
    }

    #[must_use]
    pub fn group(&self) -> MuscleGroup {
        self.group
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How to perform the exercise safely.
    #[must_use]
    pub fn how_to(&self) -> &str {
        &self.how_to
    }
}

/// Ordered exercise table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExerciseLibrary {
    exercises: Vec<Exercise>,
}

impl ExerciseLibrary {
    #[must_use]
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Exercises grouped by body region.
    ///
    /// Groups appear in order of first appearance; exercises keep table order
    /// within a group.
    #[must_use]
    pub fn by_group(&self) -> Vec<(MuscleGroup, Vec<&Exercise>)> {
        let mut groups: Vec<(MuscleGroup, Vec<&Exercise>)> = Vec::new();
        for exercise in &self.exercises {
            match groups.iter_mut().find(|(g, _)| *g == exercise.group) {
                Some((_, members)) => members.push(exercise),
                None => groups.push((exercise.group, vec![exercise])),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_first_appearance_order() {
        let library = ExerciseLibrary::new(vec![
            Exercise::new(MuscleGroup::UpperBody, "Row", "pull"),
            Exercise::new(MuscleGroup::Core, "Plank", "hold"),
            Exercise::new(MuscleGroup::UpperBody, "Push-up", "push"),
        ]);

        let groups = library.by_group();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, MuscleGroup::UpperBody);
        let names: Vec<&str> = groups[0].1.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Row", "Push-up"]);
        assert_eq!(groups[1].0, MuscleGroup::Core);
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(MuscleGroup::LowerBody.to_string(), "Lower Body");
        assert_eq!(MuscleGroup::Core.label(), "Core");
    }
}
